//! Core data element dictionary types.
//!
//! The dictionary maps attribute tags to static records
//! describing the attribute's canonical name, value representation,
//! and value multiplicity.
//! The concrete standard dictionary lives in a separate crate;
//! this module defines the entry types and the lookup trait.

use std::borrow::Cow;

use crate::header::{Tag, VR};

/// Type trait for a dictionary of DICOM attributes.
///
/// The main purpose of an attribute dictionary is to retrieve a record
/// containing additional information about a data element, by DICOM tag.
/// Implementations return `None` when the tag is not recognized,
/// in which case callers usually synthesize a placeholder entry
/// (see [`DictionaryEntryBuf::unknown`]).
pub trait DataDictionary {
    /// Fetch a data element entry by its tag.
    fn by_tag(&self, tag: Tag) -> Option<&'static DictionaryEntryRef<'static>>;
}

/// A dictionary entry with borrowed string data,
/// used for the static entries of the standard dictionary.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DictionaryEntryRef<'a> {
    /// The attribute tag
    pub tag: Tag,
    /// The canonical keyword of the attribute, with no spaces,
    /// usually in UpperCamelCase
    pub alias: &'a str,
    /// The human readable name of the attribute
    pub name: &'a str,
    /// The typical value representation of the attribute
    pub vr: VR,
    /// The value multiplicity, in its string form
    /// (`"1"`, `"1-n"`, `"2"`, ...)
    pub vm: &'a str,
    /// Whether the attribute is retired from the standard
    pub retired: bool,
}

/// A dictionary entry with full ownership of its string data.
///
/// Entries of this type either borrow from a static dictionary record
/// or carry a synthesized description for tags
/// which the dictionary does not know.
#[derive(Debug, PartialEq, Clone)]
pub struct DictionaryEntryBuf {
    /// The attribute tag
    pub tag: Tag,
    /// The canonical keyword of the attribute
    pub alias: Cow<'static, str>,
    /// The human readable name of the attribute
    pub name: Cow<'static, str>,
    /// The typical value representation of the attribute
    pub vr: VR,
    /// The value multiplicity, in its string form
    pub vm: Cow<'static, str>,
    /// Whether the attribute is retired from the standard
    pub retired: bool,
}

impl DictionaryEntryBuf {
    /// Synthesize a placeholder entry for a tag
    /// missing from the dictionary:
    /// named `Unknown(GGGG,EEEE)`,
    /// with an unknown value representation
    /// and a value multiplicity of 1.
    pub fn unknown(tag: Tag) -> Self {
        let name = format!("Unknown{}", tag);
        DictionaryEntryBuf {
            tag,
            alias: Cow::Owned(name.clone()),
            name: Cow::Owned(name),
            vr: VR::UN,
            vm: Cow::Borrowed("1"),
            retired: false,
        }
    }
}

impl From<&'static DictionaryEntryRef<'static>> for DictionaryEntryBuf {
    fn from(e: &'static DictionaryEntryRef<'static>) -> Self {
        DictionaryEntryBuf {
            tag: e.tag,
            alias: Cow::Borrowed(e.alias),
            name: Cow::Borrowed(e.name),
            vr: e.vr,
            vm: Cow::Borrowed(e.vm),
            retired: e.retired,
        }
    }
}

/// A unique identifier (UID) dictionary entry with borrowed string data.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct UidDictionaryEntryRef<'a> {
    /// The UID value proper
    pub uid: &'a str,
    /// The kind of identifier ("Transfer Syntax", "SOP Class", ...)
    pub kind: &'a str,
    /// The human readable name of the identifier
    pub name: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthesized_entry_for_unknown_tag() {
        let e = DictionaryEntryBuf::unknown(Tag::new(0x0029, 0x1001));
        assert_eq!(e.alias, "Unknown(0029,1001)");
        assert_eq!(e.vr, VR::UN);
        assert_eq!(e.vm, "1");
        assert!(!e.retired);
    }

    #[test]
    fn entry_buf_from_static_ref() {
        static ENTRY: DictionaryEntryRef<'static> = DictionaryEntryRef {
            tag: Tag::new(0x0010, 0x0010),
            alias: "PatientName",
            name: "Patient's Name",
            vr: VR::PN,
            vm: "1",
            retired: false,
        };
        let e = DictionaryEntryBuf::from(&ENTRY);
        assert_eq!(e.tag, Tag::new(0x0010, 0x0010));
        assert_eq!(e.alias, "PatientName");
        assert_eq!(e.vr, VR::PN);
    }
}
