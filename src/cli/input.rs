use crate::error::{Result, WsStegoError};
use std::path::Path;

/// A file read once as bytes and once as text
#[derive(Debug, Clone)]
pub struct InputFile {
    pub raw: Vec<u8>,
    pub text: String,
}

/// Read `path`, failing before any decoding if the file does not exist.
///
/// Line endings are preserved exactly; carriage returns reach the decoders.
pub fn read_input(path: &Path) -> Result<InputFile> {
    if !path.exists() {
        return Err(WsStegoError::FileNotFound(path.to_path_buf()));
    }

    let raw = std::fs::read(path)?;
    let text = String::from_utf8(raw.clone())
        .map_err(|_| WsStegoError::InvalidText(path.to_path_buf()))?;

    Ok(InputFile { raw, text })
}
