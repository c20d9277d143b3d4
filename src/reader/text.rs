use encoding_rs::SHIFT_JIS;

/// Converts a decoded payload to text.
///
/// UTF-8 is tried first, then Shift JIS (the QR default for kanji segments),
/// and finally a lossy UTF-8 conversion.
pub fn decode_text(bytes: Vec<u8>) -> String {
    let bytes = match String::from_utf8(bytes) {
        Ok(s) => return s,
        Err(e) => e.into_bytes(),
    };

    let (text, had_errors) = SHIFT_JIS.decode_without_bom_handling(&bytes);
    if !had_errors {
        return text.into_owned();
    }
    String::from_utf8_lossy(&bytes).into_owned()
}
