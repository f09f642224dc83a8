#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]
//! This crate implements the standard attribute and UID dictionaries.
//!
//! The dictionaries are singletons compiled from the standard's
//! authoritative XML source, containing information about the
//! DICOM attributes and unique identifiers specified in PS3.6.
//! They are read-only for the lifetime of the process
//! and safe to share across threads.

pub mod entries;
pub mod tags;
pub mod uids;

use std::collections::HashMap;

use once_cell::sync::Lazy;

use dcmio_core::dictionary::{
    DataDictionary, DictionaryEntryBuf, DictionaryEntryRef, UidDictionaryEntryRef,
};
use dcmio_core::Tag;

use crate::entries::ENTRIES;
use crate::uids::UID_ENTRIES;

static DICT: Lazy<StandardDictionaryRegistry> = Lazy::new(init_dictionary);

/// Retrieve a singleton instance of the standard dictionary registry.
///
/// Note that one does not generally have to call this
/// unless when retrieving the underlying registry is important.
/// The unit type [`StandardDataDictionary`]
/// already provides a lazily loaded singleton
/// implementing the necessary traits.
#[inline]
pub fn registry() -> &'static StandardDictionaryRegistry {
    &DICT
}

/// The data struct actually containing the standard dictionaries.
///
/// This structure is made opaque via the unit type
/// [`StandardDataDictionary`], which provides a lazily loaded singleton.
#[derive(Debug)]
pub struct StandardDictionaryRegistry {
    /// mapping: tag → entry
    by_tag: HashMap<Tag, &'static DictionaryEntryRef<'static>>,
    /// mapping: keyword → entry
    by_alias: HashMap<&'static str, &'static DictionaryEntryRef<'static>>,
    /// mapping: UID value → UID entry
    by_uid: HashMap<&'static str, &'static UidDictionaryEntryRef<'static>>,
}

impl StandardDictionaryRegistry {
    fn new() -> StandardDictionaryRegistry {
        StandardDictionaryRegistry {
            by_tag: HashMap::with_capacity(ENTRIES.len()),
            by_alias: HashMap::with_capacity(ENTRIES.len()),
            by_uid: HashMap::with_capacity(UID_ENTRIES.len()),
        }
    }

    /// record the given dictionary entry reference
    fn index(&mut self, entry: &'static DictionaryEntryRef<'static>) -> &mut Self {
        self.by_tag.insert(entry.tag, entry);
        self.by_alias.insert(entry.alias, entry);
        self
    }

    /// record the given UID entry reference
    fn index_uid(&mut self, entry: &'static UidDictionaryEntryRef<'static>) -> &mut Self {
        self.by_uid.insert(entry.uid, entry);
        self
    }
}

fn init_dictionary() -> StandardDictionaryRegistry {
    let mut d = StandardDictionaryRegistry::new();
    for entry in ENTRIES {
        d.index(entry);
    }
    for entry in UID_ENTRIES {
        d.index_uid(entry);
    }
    d
}

/// A data dictionary which consults
/// the library's global DICOM attribute registry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardDataDictionary;

impl DataDictionary for StandardDataDictionary {
    fn by_tag(&self, tag: Tag) -> Option<&'static DictionaryEntryRef<'static>> {
        registry().by_tag.get(&tag).copied()
    }
}

impl StandardDataDictionary {
    /// Fetch an entry by its keyword (e.g. `"PatientName"`).
    pub fn by_alias(&self, alias: &str) -> Option<&'static DictionaryEntryRef<'static>> {
        registry().by_alias.get(alias).copied()
    }
}

/// Look up the dictionary entry for the given tag,
/// synthesizing a placeholder entry
/// (`Unknown(GGGG,EEEE)`, VR `UN`, VM `"1"`)
/// when the tag is not in the standard dictionary.
pub fn entry_or_unknown(tag: Tag) -> DictionaryEntryBuf {
    match StandardDataDictionary.by_tag(tag) {
        Some(entry) => DictionaryEntryBuf::from(entry),
        None => DictionaryEntryBuf::unknown(tag),
    }
}

/// Look up a unique identifier in the UID dictionary.
pub fn by_uid(uid: &str) -> Option<&'static UidDictionaryEntryRef<'static>> {
    let uid = uid.trim_end_matches(|c| c == '\0' || c == ' ');
    registry().by_uid.get(uid).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmio_core::VR;

    #[test]
    fn known_attributes_resolve() {
        let e = StandardDataDictionary.by_tag(Tag::new(0x0010, 0x0010)).unwrap();
        assert_eq!(e.alias, "PatientName");
        assert_eq!(e.vr, VR::PN);
        assert_eq!(e.vm, "1");

        let e = StandardDataDictionary.by_tag(Tag::new(0x7FE0, 0x0010)).unwrap();
        assert_eq!(e.alias, "PixelData");

        let e = StandardDataDictionary.by_alias("SpecificCharacterSet").unwrap();
        assert_eq!(e.tag, Tag::new(0x0008, 0x0005));
        assert_eq!(e.vm, "1-n");
    }

    #[test]
    fn unknown_attributes_get_placeholders() {
        let tag = Tag::new(0x0029, 0x1010);
        assert!(StandardDataDictionary.by_tag(tag).is_none());
        let e = entry_or_unknown(tag);
        assert_eq!(e.alias, "Unknown(0029,1010)");
        assert_eq!(e.vr, VR::UN);
        assert_eq!(e.vm, "1");
    }

    #[test]
    fn delimiter_tags_are_not_attributes() {
        assert!(StandardDataDictionary.by_tag(Tag::new(0xFFFE, 0xE000)).is_none());
        assert!(StandardDataDictionary.by_tag(Tag::new(0xFFFE, 0xE00D)).is_none());
        assert!(StandardDataDictionary.by_tag(Tag::new(0xFFFE, 0xE0DD)).is_none());
    }

    #[test]
    fn uids_resolve() {
        let e = by_uid("1.2.840.10008.1.2").unwrap();
        assert_eq!(e.kind, "Transfer Syntax");
        assert_eq!(e.name, "Implicit VR Little Endian");

        // trailing padding from UI values is accepted
        let e = by_uid("1.2.840.10008.1.2.1\0").unwrap();
        assert_eq!(e.name, "Explicit VR Little Endian");

        assert!(by_uid("1.2.3.4.5.6.7.8.9").is_none());
    }
}
