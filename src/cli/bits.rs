use crate::assignment::BitAssignment;
use crate::cli::analyze::describe_extraction;
use crate::cli::input::read_input;
use crate::error::Result;
use crate::pipeline::{extract_ascii, map_bits};
use std::path::Path;

/// Full, untruncated bit string of a file under one assignment
pub fn show_bits(path: &Path, assignment: BitAssignment) -> Result<String> {
    let input = read_input(path)?;
    let bits = map_bits(&input.text, assignment);
    let extraction = extract_ascii(&bits);

    let mut output = String::new();
    output.push_str(&format!("File: {}\n", path.display()));
    output.push_str(&format!("Assignment: {}\n", assignment));
    output.push_str(&format!("Symbols: {}\n\n", bits.chars().count()));
    output.push_str(&bits.escape_default().to_string());
    output.push_str("\n\n");
    output.push_str(&format!("ASCII: {}\n", describe_extraction(&extraction)));
    Ok(output)
}
