//! Support for the character repertoires of DICOM text data.
//!
//! Text payloads are stored in one of a number of legacy character sets,
//! identified by the value of the Specific Character Set attribute.
//! This module maps those identifiers to text codecs
//! which decode the payload bytes into UTF-8.
//! Decoding never fails:
//! undecodable input is replaced with replacement characters.

use std::collections::HashMap;
use std::fmt;

use encoding::all::{
    GB18030, ISO_2022_JP, ISO_8859_1, ISO_8859_2, ISO_8859_3, ISO_8859_4, ISO_8859_5, ISO_8859_6,
    ISO_8859_7, ISO_8859_8, UTF_8, WINDOWS_1254, WINDOWS_31J, WINDOWS_874, WINDOWS_949,
};
use encoding::{DecoderTrap, EncoderTrap, EncodingRef};
use once_cell::sync::Lazy;

/// A link between a DICOM character set identifier,
/// its description,
/// and the codec used to decode and encode its text.
#[derive(Clone, Copy)]
pub struct CharacterSet {
    code: &'static str,
    description: &'static str,
    encoding: EncodingRef,
}

impl CharacterSet {
    /// The identifier of the character set,
    /// as it appears in the Specific Character Set attribute.
    #[inline]
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// A human readable description of the character set.
    #[inline]
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Decode the given byte payload into a UTF-8 string.
    ///
    /// Undecodable input is replaced with replacement characters,
    /// so this operation never fails.
    pub fn decode(&self, text: &[u8]) -> String {
        match self.encoding.decode(text, DecoderTrap::Replace) {
            Ok(s) => s,
            Err(_) => String::from_utf8_lossy(text).into_owned(),
        }
    }

    /// Encode a UTF-8 string into this character set,
    /// replacing unmappable characters.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self.encoding.encode(text, EncoderTrap::Replace) {
            Ok(bytes) => bytes,
            Err(_) => text.as_bytes().to_vec(),
        }
    }
}

impl fmt::Debug for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CharacterSet")
            .field("code", &self.code)
            .field("description", &self.description)
            .finish()
    }
}

impl PartialEq for CharacterSet {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

// Latin-5 and EUC-KR are provided through their
// Windows superset code pages.
#[rustfmt::skip]
static REGISTRY: Lazy<HashMap<&'static str, CharacterSet>> = Lazy::new(|| {
    let table: &[(&'static str, &'static str, EncodingRef)] = &[
        ("Default",         "Unicode (UTF-8)",                UTF_8),
        ("ISO_IR 13",       "Japanese (Shift JIS)",           WINDOWS_31J),
        ("ISO_IR 100",      "Latin alphabet No. 1",           ISO_8859_1),
        ("ISO_IR 101",      "Latin alphabet No. 2",           ISO_8859_2),
        ("ISO_IR 109",      "Latin alphabet No. 3",           ISO_8859_3),
        ("ISO_IR 110",      "Latin alphabet No. 4",           ISO_8859_4),
        ("ISO_IR 126",      "Greek",                          ISO_8859_7),
        ("ISO_IR 127",      "Arabic",                         ISO_8859_6),
        ("ISO_IR 138",      "Hebrew",                         ISO_8859_8),
        ("ISO_IR 144",      "Cyrillic",                       ISO_8859_5),
        ("ISO_IR 148",      "Latin alphabet No. 5",           WINDOWS_1254),
        ("ISO_IR 166",      "Thai",                           WINDOWS_874),
        ("ISO_IR 192",      "Unicode (UTF-8)",                UTF_8),
        ("ISO 2022 IR 6",   "ASCII",                          UTF_8),
        ("ISO 2022 IR 13",  "Japanese (Shift JIS)",           WINDOWS_31J),
        ("ISO 2022 IR 87",  "Japanese (Kanji)",               ISO_2022_JP),
        ("ISO 2022 IR 100", "Latin alphabet No. 1",           ISO_8859_1),
        ("ISO 2022 IR 101", "Latin alphabet No. 2",           ISO_8859_2),
        ("ISO 2022 IR 109", "Latin alphabet No. 3",           ISO_8859_3),
        ("ISO 2022 IR 110", "Latin alphabet No. 4",           ISO_8859_4),
        ("ISO 2022 IR 127", "Arabic",                         ISO_8859_6),
        ("ISO 2022 IR 138", "Hebrew",                         ISO_8859_8),
        ("ISO 2022 IR 144", "Cyrillic",                       ISO_8859_5),
        ("ISO 2022 IR 148", "Latin alphabet No. 5",           WINDOWS_1254),
        ("ISO 2022 IR 149", "Korean",                         WINDOWS_949),
        ("ISO 2022 IR 159", "Japanese (Supplementary Kanji)", ISO_2022_JP),
        ("ISO 2022 IR 166", "Thai",                           WINDOWS_874),
        ("GB18030",         "Chinese (Simplified)",           GB18030),
    ];
    table
        .iter()
        .map(|&(code, description, encoding)| {
            (
                code,
                CharacterSet {
                    code,
                    description,
                    encoding,
                },
            )
        })
        .collect()
});

static DEFAULT: Lazy<CharacterSet> = Lazy::new(|| CharacterSet {
    code: "Default",
    description: "Unicode (UTF-8)",
    encoding: UTF_8,
});

/// Retrieve the character set registered
/// under the given identifier, if any.
///
/// Trailing padding from the attribute value is accepted.
pub fn from_code(code: &str) -> Option<&'static CharacterSet> {
    let code = code.trim_matches(|c| c == ' ' || c == '\0');
    REGISTRY.get(code)
}

/// Retrieve the default character set (UTF-8),
/// used when a data set declares no specific character set
/// or an unrecognized one.
pub fn default_character_set() -> &'static CharacterSet {
    &DEFAULT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_codes() {
        let cs = from_code("ISO_IR 100").unwrap();
        assert_eq!(cs.code(), "ISO_IR 100");
        assert_eq!(cs.description(), "Latin alphabet No. 1");

        // trailing padding is tolerated
        let cs = from_code("ISO_IR 192 ").unwrap();
        assert_eq!(cs.code(), "ISO_IR 192");

        assert!(from_code("ISO_IR 999").is_none());
    }

    #[test]
    fn latin1_decodes_to_utf8() {
        let cs = from_code("ISO_IR 100").unwrap();
        assert_eq!(cs.decode(&[0xC4, 0x6F, 0x65]), "Äoe");
    }

    #[test]
    fn cyrillic_decodes_to_utf8() {
        let cs = from_code("ISO_IR 144").unwrap();
        // "Иван" in ISO-8859-5
        assert_eq!(cs.decode(&[0xB8, 0xD2, 0xD0, 0xDD]), "Иван");
    }

    #[test]
    fn invalid_input_never_fails() {
        let cs = default_character_set();
        let decoded = cs.decode(&[0x41, 0xFF, 0xFE, 0x42]);
        assert!(decoded.starts_with('A'));
        assert!(decoded.ends_with('B'));
    }

    #[test]
    fn default_round_trip() {
        let cs = default_character_set();
        assert_eq!(cs.code(), "Default");
        assert_eq!(cs.encode("1.2.840.10008.1.2.1"), b"1.2.840.10008.1.2.1");
    }
}
