use crate::cli::input::read_input;
use crate::error::Result;
use std::path::Path;

/// Render whitespace visibly, `cat -A` style.
///
/// Space becomes `␣`, tab `→`, and newline `⏎` followed by a real line
/// break. Other control characters, carriage return included, are escaped.
pub fn visible_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        match c {
            ' ' => out.push('␣'),
            '\t' => out.push('→'),
            '\n' => out.push_str("⏎\n"),
            c if c.is_control() => out.extend(c.escape_default()),
            c => out.push(c),
        }
    }
    out
}

/// Visible-whitespace rendering of a whole file
pub fn show_visible(path: &Path) -> Result<String> {
    let input = read_input(path)?;
    let mut output = visible_whitespace(&input.text);
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}
