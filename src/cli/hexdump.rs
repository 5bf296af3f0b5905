use crate::cli::input::read_input;
use crate::error::Result;
use std::path::Path;

/// Default number of bytes shown in a hex dump
pub const DEFAULT_HEX_LIMIT: usize = 100;

/// Space-separated lowercase hex of the first `limit` bytes
pub fn hex_dump(raw: &[u8], limit: usize) -> String {
    let encoded = hex::encode(&raw[..raw.len().min(limit)]);
    let mut out = String::with_capacity(encoded.len() + encoded.len() / 2);
    for (i, digit) in encoded.chars().enumerate() {
        if i > 0 && i % 2 == 0 {
            out.push(' ');
        }
        out.push(digit);
    }
    out
}

/// Hex dump of the start of a file
pub fn show_hexdump(path: &Path, limit: usize) -> Result<String> {
    let input = read_input(path)?;

    let mut output = String::new();
    output.push_str(&format!("File: {}\n", path.display()));
    output.push_str(&format!("File size: {} bytes\n\n", input.raw.len()));
    output.push_str(&format!("Hex dump (first {} bytes):\n", limit));
    output.push_str(&hex_dump(&input.raw, limit));
    output.push('\n');
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_dump() {
        assert_eq!(hex_dump(b" \t\r\nA", 100), "20 09 0d 0a 41");
    }

    #[test]
    fn test_hex_dump_limit() {
        let data = vec![0xabu8; 150];
        let dump = hex_dump(&data, DEFAULT_HEX_LIMIT);
        assert_eq!(dump.split(' ').count(), 100);
        assert!(dump.split(' ').all(|b| b == "ab"));
    }

    #[test]
    fn test_hex_dump_empty() {
        assert_eq!(hex_dump(&[], 100), "");
        assert_eq!(hex_dump(b"abc", 0), "");
    }

    #[test]
    fn test_hex_dump_short_input_under_limit() {
        assert_eq!(hex_dump(&[0x00, 0xff], 100), "00 ff");
    }
}
