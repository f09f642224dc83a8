//! Basic types for interpreting DICOM data elements:
//! the attribute tag, the value representation,
//! and the element length with its undefined case.

use snafu::{ensure, Backtrace, Snafu};
use std::fmt;
use std::str::{from_utf8, FromStr};

/// The identifier of a DICOM data element.
///
/// A tag is stored packed in a single 32-bit word,
/// group number in the upper half and element number in the lower half.
/// This is the shape under which the data dictionaries index attributes,
/// and packed comparison gives the group-major ordering
/// used when listing a data set.
/// The textual form is `(GGGG,EEEE)` in uppercase hexadecimal.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Tag(u32);

impl Tag {
    /// Create a tag from its group and element numbers.
    #[inline]
    pub const fn new(group: u16, element: u16) -> Self {
        Tag(((group as u32) << 16) | element as u32)
    }

    /// The group number of the attribute (upper 16 bits).
    #[inline]
    pub const fn group(self) -> u16 {
        (self.0 >> 16) as u16
    }

    /// The element number of the attribute (lower 16 bits).
    #[inline]
    pub const fn element(self) -> u16 {
        self.0 as u16
    }
}

impl From<u32> for Tag {
    #[inline]
    fn from(packed: u32) -> Tag {
        Tag(packed)
    }
}

impl From<Tag> for u32 {
    #[inline]
    fn from(tag: Tag) -> u32 {
        tag.0
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag(0x{:04X}, 0x{:04X})", self.group(), self.element())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.group(), self.element())
    }
}

/// An error returned when parsing an invalid tag expression.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum TagParseError {
    #[snafu(display("expected `GGGG,EEEE` or 8 hexadecimal digits, got `{}`", text))]
    BadForm { text: String, backtrace: Backtrace },
    #[snafu(display("invalid tag component `group`"))]
    InvalidGroup {
        backtrace: Backtrace,
        source: std::num::ParseIntError,
    },
    #[snafu(display("invalid tag component `element`"))]
    InvalidElement {
        backtrace: Backtrace,
        source: std::num::ParseIntError,
    },
}

/// Obtain a tag from its textual form:
/// `(GGGG,EEEE)` or `GGGG,EEEE` with both components in hexadecimal,
/// or the eight digits packed together (`GGGGEEEE`).
impl FromStr for Tag {
    type Err = TagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use snafu::{OptionExt, ResultExt};
        let mut text = s.trim();
        if text.starts_with('(') && text.ends_with(')') {
            text = &text[1..text.len() - 1];
        }
        match text.split_once(',') {
            Some((group, element)) => {
                let group = u16::from_str_radix(group.trim(), 16).context(InvalidGroupSnafu)?;
                let element =
                    u16::from_str_radix(element.trim(), 16).context(InvalidElementSnafu)?;
                Ok(Tag::new(group, element))
            }
            None => {
                ensure!(text.len() == 8, BadFormSnafu { text: s });
                let packed = u32::from_str_radix(text, 16)
                    .ok()
                    .context(BadFormSnafu { text: s })?;
                Ok(Tag::from(packed))
            }
        }
    }
}

/// An enum type for a DICOM value representation.
///
/// The set of variants is the closed set of codes
/// defined in PS3.5 Table 6.2-1.
/// Codes found in a stream which do not match any of these
/// are coerced to [`UN`](VR::UN) by the parser.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd)]
pub enum VR {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Single
    FL,
    /// Floating Point Double
    FD,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Other Byte
    OB,
    /// Other Double
    OD,
    /// Other Float
    OF,
    /// Other Long
    OL,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Time
    TM,
    /// Unlimited Characters
    UC,
    /// Unique Identifier (UID)
    UI,
    /// Unsigned Long
    UL,
    /// Unknown
    UN,
    /// Universal Resource Identifier or Universal Resource Locator (URI/URL)
    UR,
    /// Unsigned Short
    US,
    /// Unlimited Text
    UT,
}

impl VR {
    /// Obtain the value representation corresponding to the given two bytes.
    /// Each byte should represent an alphabetic character in upper case.
    pub fn from_binary(chars: [u8; 2]) -> Option<Self> {
        from_utf8(chars.as_ref())
            .ok()
            .and_then(|s| VR::from_str(s).ok())
    }

    /// Retrieve a string representation of this VR.
    pub fn to_string(self) -> &'static str {
        use VR::*;
        match self {
            AE => "AE",
            AS => "AS",
            AT => "AT",
            CS => "CS",
            DA => "DA",
            DS => "DS",
            DT => "DT",
            FL => "FL",
            FD => "FD",
            IS => "IS",
            LO => "LO",
            LT => "LT",
            OB => "OB",
            OD => "OD",
            OF => "OF",
            OL => "OL",
            OW => "OW",
            PN => "PN",
            SH => "SH",
            SL => "SL",
            SQ => "SQ",
            SS => "SS",
            ST => "ST",
            TM => "TM",
            UC => "UC",
            UI => "UI",
            UL => "UL",
            UN => "UN",
            UR => "UR",
            US => "US",
            UT => "UT",
        }
    }

    /// Retrieve a copy of this VR's byte representation.
    /// The function returns two alphabetic characters in upper case.
    pub fn to_bytes(self) -> [u8; 2] {
        let bytes = self.to_string().as_bytes();
        [bytes[0], bytes[1]]
    }

    /// Whether an explicit VR element of this representation
    /// declares its length in a 32-bit field
    /// preceded by two reserved bytes.
    #[inline]
    pub fn has_reserved_length(self) -> bool {
        matches!(self, VR::OB | VR::OW | VR::SQ | VR::UN | VR::UT)
    }

    /// Whether values of this representation may be padded
    /// to an even length with a null or space byte.
    pub fn is_padded(self) -> bool {
        use VR::*;
        matches!(
            self,
            UI | OB | CS | DS | IS | AE | AS | DA | DT | LO | LT | OD | OF | OW | PN | SH | ST
                | TM | UT
        )
    }

    /// Whether values of this representation
    /// can be interpreted as text.
    pub fn is_textual(self) -> bool {
        use VR::*;
        matches!(
            self,
            SH | LO | ST | PN | LT | UT | IS | DS | TM | DA | DT | UI | CS | AS | AE
        )
    }

    /// Whether text values of this representation are encoded
    /// in the data set's specific character set,
    /// as opposed to the default character repertoire.
    #[inline]
    pub fn uses_character_set(self) -> bool {
        matches!(self, VR::SH | VR::LO | VR::ST | VR::PN | VR::LT | VR::UT)
    }
}

/// Obtain the value representation corresponding to the given string.
/// The string should hold exactly two UTF-8 encoded alphabetic characters
/// in upper case, otherwise no match is made.
impl FromStr for VR {
    type Err = &'static str;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        use VR::*;
        match string {
            "AE" => Ok(AE),
            "AS" => Ok(AS),
            "AT" => Ok(AT),
            "CS" => Ok(CS),
            "DA" => Ok(DA),
            "DS" => Ok(DS),
            "DT" => Ok(DT),
            "FL" => Ok(FL),
            "FD" => Ok(FD),
            "IS" => Ok(IS),
            "LO" => Ok(LO),
            "LT" => Ok(LT),
            "OB" => Ok(OB),
            "OD" => Ok(OD),
            "OF" => Ok(OF),
            "OL" => Ok(OL),
            "OW" => Ok(OW),
            "PN" => Ok(PN),
            "SH" => Ok(SH),
            "SL" => Ok(SL),
            "SQ" => Ok(SQ),
            "SS" => Ok(SS),
            "ST" => Ok(ST),
            "TM" => Ok(TM),
            "UC" => Ok(UC),
            "UI" => Ok(UI),
            "UL" => Ok(UL),
            "UN" => Ok(UN),
            "UR" => Ok(UR),
            "US" => Ok(US),
            "UT" => Ok(UT),
            _ => Err("no such value representation"),
        }
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(VR::to_string(*self))
    }
}

/// The declared length of a data element or item, in bytes.
///
/// The wire format reserves the field value `0xFFFF_FFFF`
/// for elements whose content extends until a delimitation item,
/// so the undefined case is kept as its own variant
/// and can never be mistaken for a concrete byte count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    /// A concrete byte count.
    Defined(u32),
    /// The content runs until a delimitation item.
    Undefined,
}

impl Length {
    /// Interpret a raw 32-bit length field from the stream.
    #[inline]
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0xFFFF_FFFF => Length::Undefined,
            n => Length::Defined(n),
        }
    }

    /// Whether the length is the undefined sentinel.
    #[inline]
    pub fn is_undefined(self) -> bool {
        matches!(self, Length::Undefined)
    }

    /// Whether a concrete byte count was declared.
    #[inline]
    pub fn is_defined(self) -> bool {
        !self.is_undefined()
    }

    /// The declared byte count, or `None` for an undefined length.
    #[inline]
    pub fn bytes(self) -> Option<u32> {
        match self {
            Length::Defined(n) => Some(n),
            Length::Undefined => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_packs_group_and_element() {
        let t = Tag::new(0x0008, 0x103E);
        assert_eq!(t.group(), 0x0008);
        assert_eq!(t.element(), 0x103E);
        assert_eq!(u32::from(t), 0x0008_103E);
        assert_eq!(Tag::from(0x7FE0_0010), Tag::new(0x7FE0, 0x0010));
    }

    #[test]
    fn tag_order_is_group_major() {
        assert!(Tag::new(0x0008, 0xFFFF) < Tag::new(0x0010, 0x0000));
        assert!(Tag::new(0x0010, 0x0010) < Tag::new(0x0010, 0x0020));
        assert!(Tag::new(0x0002, 0x0000) < Tag::new(0x7FE0, 0x0010));
    }

    #[test]
    fn tag_display_round_trip() {
        for &t in &[
            Tag::new(0x0000, 0x0000),
            Tag::new(0x0002, 0x0010),
            Tag::new(0x0008, 0x0005),
            Tag::new(0x7FE0, 0x0010),
            Tag::new(0xFFFE, 0xE0DD),
            Tag::new(0xFFFF, 0xFFFF),
        ] {
            let text = t.to_string();
            let back: Tag = text.parse().unwrap();
            assert_eq!(back, t);
        }
        assert_eq!(Tag::new(0x7FE0, 0x0010).to_string(), "(7FE0,0010)");
    }

    #[test]
    fn tag_from_str_forms() {
        let tag: Tag = "(0010,0010)".parse().unwrap();
        assert_eq!(tag, Tag::new(0x0010, 0x0010));
        let tag: Tag = "7FE0,0010".parse().unwrap();
        assert_eq!(tag, Tag::new(0x7FE0, 0x0010));
        let tag: Tag = "0020000E".parse().unwrap();
        assert_eq!(tag, Tag::new(0x0020, 0x000E));
        assert!("(0010)".parse::<Tag>().is_err());
        assert!("00XY0010".parse::<Tag>().is_err());
        assert!("(00XY,0010)".parse::<Tag>().is_err());
    }

    #[test]
    fn vr_from_binary() {
        assert_eq!(VR::from_binary([b'C', b'S']), Some(VR::CS));
        assert_eq!(VR::from_binary([b'O', b'B']), Some(VR::OB));
        assert_eq!(VR::from_binary([b'Z', b'Z']), None);
        assert_eq!(VR::from_binary([0x00, 0x01]), None);
    }

    #[test]
    fn vr_length_field_classes() {
        assert!(VR::OB.has_reserved_length());
        assert!(VR::SQ.has_reserved_length());
        assert!(VR::UN.has_reserved_length());
        assert!(!VR::UI.has_reserved_length());
        assert!(!VR::PN.has_reserved_length());
    }

    #[test]
    fn length_field_interpretation() {
        assert_eq!(Length::from_raw(8), Length::Defined(8));
        assert_eq!(Length::from_raw(0xFFFF_FFFF), Length::Undefined);
        assert!(Length::Undefined.is_undefined());
        assert!(Length::Defined(0).is_defined());
        assert_eq!(Length::Defined(4).bytes(), Some(4));
        assert_eq!(Length::Undefined.bytes(), None);
    }
}
