use std::fmt;

use encoding_rs::WINDOWS_1252;

// ---------------------------------------------------------------------------
// Text decoding with encoding fallback
// ---------------------------------------------------------------------------

/// Candidate text encodings for motor files, tried in order.
///
/// A decode that succeeds under the wrong encoding is accepted as-is; the
/// parser's specification-line check is the only guard against garbage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Latin1,
    Windows1252,
}

impl TextEncoding {
    pub const CANDIDATES: [TextEncoding; 3] =
        [TextEncoding::Utf8, TextEncoding::Latin1, TextEncoding::Windows1252];

    pub fn label(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "iso-8859-1",
            TextEncoding::Windows1252 => "windows-1252",
        }
    }

    /// Decode `bytes`, or `None` if they are not valid in this encoding.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            TextEncoding::Utf8 => {
                let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
                std::str::from_utf8(bytes).ok().map(str::to_owned)
            }
            TextEncoding::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
            TextEncoding::Windows1252 => WINDOWS_1252
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|text| text.into_owned()),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Decode with the first candidate that accepts the bytes.
pub fn decode_with(candidates: &[TextEncoding], bytes: &[u8]) -> Option<(String, TextEncoding)> {
    candidates
        .iter()
        .find_map(|&enc| enc.decode(bytes).map(|text| (text, enc)))
}

/// Decode with the default candidate order.
pub fn decode(bytes: &[u8]) -> Option<(String, TextEncoding)> {
    decode_with(&TextEncoding::CANDIDATES, bytes)
}
