use encoding_rs::UTF_8;

use crate::error::{Error, Result};

/// Decode a plain-text manuscript as UTF-8.
///
/// A leading BOM is stripped. Malformed sequences are rejected rather than
/// replaced, so a corrupted upload surfaces as [`Error::Decode`] instead of
/// silently mangled text.
pub fn decode_text(bytes: &[u8]) -> Result<String> {
    let (text, _, had_errors) = UTF_8.decode(bytes);
    if had_errors {
        return Err(Error::Decode(
            "manuscript is not valid UTF-8 text".to_string(),
        ));
    }
    Ok(text.into_owned())
}
