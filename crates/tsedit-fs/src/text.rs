//! Byte-to-text decoding for game configuration files

/// Decode configuration bytes into text.
///
/// Valid UTF-8 is used as-is (with a leading byte order mark removed). Anything
/// else is treated as Latin-1, which maps every byte to a character and keeps
/// the ASCII content of legacy Windows-1252 files intact.
pub fn decode_text(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}
