//! In-memory DICOM data elements and data sets.

use std::borrow::Cow;
use std::collections::BTreeMap;

use byteordered::Endianness;

use crate::dictionary::DictionaryEntryBuf;
use crate::header::{Length, Tag, VR};
use crate::value::{self, C, IncompatibleVrSnafu, NotEnoughDataSnafu, Result, Value};

/// A data type that represents and owns a DICOM data element.
///
/// The dictionary metadata required to interpret the element
/// (canonical name and value multiplicity)
/// is copied into the element at construction time,
/// so the element does not borrow from the dictionary.
#[derive(Debug, Clone, PartialEq)]
pub struct DataElement {
    tag: Tag,
    alias: Cow<'static, str>,
    vm: Cow<'static, str>,
    vr: VR,
    len: Length,
    endianness: Endianness,
    value: Value,
}

impl DataElement {
    /// Create a data element from a dictionary entry and its decoded parts.
    ///
    /// The `vr` parameter may differ from the entry's
    /// when the stream declared a more specific representation.
    pub fn new(
        entry: DictionaryEntryBuf,
        vr: VR,
        len: Length,
        endianness: Endianness,
        value: Value,
    ) -> Self {
        DataElement {
            tag: entry.tag,
            alias: entry.alias,
            vm: entry.vm,
            vr,
            len,
            endianness,
            value,
        }
    }

    /// Retrieve the element's tag.
    #[inline]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Retrieve the element's value representation.
    #[inline]
    pub fn vr(&self) -> VR {
        self.vr
    }

    /// Retrieve the element's value multiplicity, in its string form.
    #[inline]
    pub fn vm(&self) -> &str {
        &self.vm
    }

    /// Retrieve the canonical name of the element's attribute.
    #[inline]
    pub fn name(&self) -> &str {
        &self.alias
    }

    /// Retrieve the element's value length in bytes:
    /// the declared length after pad stripping,
    /// or undefined for delimiter-terminated content.
    #[inline]
    pub fn length(&self) -> Length {
        self.len
    }

    /// Retrieve the byte ordering under which the element was decoded.
    #[inline]
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Retrieve the element's value.
    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Obtain the primitive byte payload.
    /// This accessor always succeeds;
    /// sequence elements yield an empty slice.
    #[inline]
    pub fn data(&self) -> &[u8] {
        self.value.data()
    }

    /// Obtain the element's sequence items.
    #[inline]
    pub fn items(&self) -> &[DataSet] {
        self.value.items()
    }

    /// Obtain the element's pixel data fragments,
    /// including the basic offset table.
    #[inline]
    pub fn fragments(&self) -> &[Vec<u8>] {
        self.value.fragments()
    }

    /// Whether the element holds no value data.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the primitive payload,
    /// adjusting the recorded length accordingly.
    /// Used when re-encoding text payloads to UTF-8.
    pub fn set_data(&mut self, data: Vec<u8>) {
        self.len = Length::Defined(data.len() as u32);
        self.value = Value::Primitive(data);
    }

    fn check_target(&self, textual: bool, vrs: &[VR], requested: &'static str) -> Result<()> {
        if self.vr == VR::UN || (textual && self.vr.is_textual()) || vrs.contains(&self.vr) {
            Ok(())
        } else {
            IncompatibleVrSnafu {
                requested,
                vr: self.vr,
            }
            .fail()
        }
    }

    fn first_unit(&self, unit: usize, requested: &'static str) -> Result<&[u8]> {
        let data = self.data();
        if data.len() < unit {
            return NotEnoughDataSnafu {
                requested,
                len: data.len(),
            }
            .fail();
        }
        Ok(&data[..unit])
    }

    /// Retrieve the value as a single clean string,
    /// with trailing whitespace and null padding removed.
    ///
    /// The payload of text elements in a decoded data set
    /// is always UTF-8.
    pub fn to_str(&self) -> Result<String> {
        self.check_target(true, &[], "string")?;
        let s = String::from_utf8_lossy(self.data());
        Ok(s.trim_end_matches(|c| c == ' ' || c == '\0').to_owned())
    }

    /// Retrieve the value as a list of clean strings,
    /// split on the `\` value delimiter.
    pub fn to_strs(&self) -> Result<C<String>> {
        self.check_target(true, &[], "[string]")?;
        Ok(value::split_strings(self.data()))
    }

    /// Retrieve the value as a single precision float (VR `FL`).
    pub fn to_float32(&self) -> Result<f32> {
        self.check_target(false, &[VR::FL], "f32")?;
        let unit = self.first_unit(4, "f32")?;
        Ok(value::read_f32(unit, self.endianness))
    }

    /// Retrieve the value as a list of single precision floats (VR `FL`).
    pub fn to_multi_float32(&self) -> Result<C<f32>> {
        self.check_target(false, &[VR::FL], "[f32]")?;
        Ok(value::split_binary(
            self.data(),
            4,
            self.endianness,
            value::read_f32,
        ))
    }

    /// Retrieve the value as a double precision float (VR `FD`).
    pub fn to_float64(&self) -> Result<f64> {
        self.check_target(false, &[VR::FD], "f64")?;
        let unit = self.first_unit(8, "f64")?;
        Ok(value::read_f64(unit, self.endianness))
    }

    /// Retrieve the value as a list of double precision floats (VR `FD`).
    pub fn to_multi_float64(&self) -> Result<C<f64>> {
        self.check_target(false, &[VR::FD], "[f64]")?;
        Ok(value::split_binary(
            self.data(),
            8,
            self.endianness,
            value::read_f64,
        ))
    }

    /// Retrieve the value as a signed 16-bit integer (VR `SS`).
    pub fn to_int16(&self) -> Result<i16> {
        self.check_target(false, &[VR::SS], "i16")?;
        let unit = self.first_unit(2, "i16")?;
        Ok(value::read_i16(unit, self.endianness))
    }

    /// Retrieve the value as a list of signed 16-bit integers (VR `SS`).
    pub fn to_multi_int16(&self) -> Result<C<i16>> {
        self.check_target(false, &[VR::SS], "[i16]")?;
        Ok(value::split_binary(
            self.data(),
            2,
            self.endianness,
            value::read_i16,
        ))
    }

    /// Retrieve the value as an unsigned 16-bit integer (VR `US`).
    pub fn to_uint16(&self) -> Result<u16> {
        self.check_target(false, &[VR::US], "u16")?;
        let unit = self.first_unit(2, "u16")?;
        Ok(value::read_u16(unit, self.endianness))
    }

    /// Retrieve the value as a list of unsigned 16-bit integers (VR `US`).
    pub fn to_multi_uint16(&self) -> Result<C<u16>> {
        self.check_target(false, &[VR::US], "[u16]")?;
        Ok(value::split_binary(
            self.data(),
            2,
            self.endianness,
            value::read_u16,
        ))
    }

    /// Retrieve the value as a signed 32-bit integer (VR `SL`).
    pub fn to_int32(&self) -> Result<i32> {
        self.check_target(false, &[VR::SL], "i32")?;
        let unit = self.first_unit(4, "i32")?;
        Ok(value::read_i32(unit, self.endianness))
    }

    /// Retrieve the value as a list of signed 32-bit integers (VR `SL`).
    pub fn to_multi_int32(&self) -> Result<C<i32>> {
        self.check_target(false, &[VR::SL], "[i32]")?;
        Ok(value::split_binary(
            self.data(),
            4,
            self.endianness,
            value::read_i32,
        ))
    }

    /// Retrieve the value as an unsigned 32-bit integer (VR `UL` or `AT`).
    pub fn to_uint32(&self) -> Result<u32> {
        self.check_target(false, &[VR::UL, VR::AT], "u32")?;
        let unit = self.first_unit(4, "u32")?;
        Ok(value::read_u32(unit, self.endianness))
    }

    /// Retrieve the value as a list of unsigned 32-bit integers (VR `UL` or `AT`).
    pub fn to_multi_uint32(&self) -> Result<C<u32>> {
        self.check_target(false, &[VR::UL, VR::AT], "[u32]")?;
        Ok(value::split_binary(
            self.data(),
            4,
            self.endianness,
            value::read_u32,
        ))
    }
}

/// A DICOM data set:
/// a mapping from attribute tags to data elements.
///
/// Entries are kept in tag order,
/// which is also the order used for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSet {
    entries: BTreeMap<Tag, DataElement>,
}

impl DataSet {
    /// Create a new empty data set.
    pub fn new() -> Self {
        DataSet::default()
    }

    /// Insert a data element into the set,
    /// replacing any element with the same tag.
    pub fn put(&mut self, elem: DataElement) {
        self.entries.insert(elem.tag(), elem);
    }

    /// Retrieve a data element by its tag.
    pub fn element(&self, tag: Tag) -> Option<&DataElement> {
        self.entries.get(&tag)
    }

    /// Whether the set contains an element with the given tag.
    pub fn has_element(&self, tag: Tag) -> bool {
        self.entries.contains_key(&tag)
    }

    /// The number of elements in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the elements in ascending tag order.
    pub fn elements(&self) -> impl Iterator<Item = &DataElement> {
        self.entries.values()
    }
}

impl IntoIterator for DataSet {
    type Item = DataElement;
    type IntoIter = std::collections::btree_map::IntoValues<Tag, DataElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionaryEntryBuf;
    use crate::value::CastValueError;

    fn element(tag: Tag, vr: VR, endianness: Endianness, data: Vec<u8>) -> DataElement {
        let mut entry = DictionaryEntryBuf::unknown(tag);
        entry.vr = vr;
        let len = Length::Defined(data.len() as u32);
        DataElement::new(entry, vr, len, endianness, Value::Primitive(data))
    }

    #[test]
    fn string_access() {
        let e = element(
            Tag::new(0x0008, 0x0008),
            VR::CS,
            Endianness::Little,
            b"ORIGINAL\\PRIMARY".to_vec(),
        );
        assert_eq!(e.to_str().unwrap(), "ORIGINAL\\PRIMARY");
        let values = e.to_strs().unwrap();
        assert_eq!(values.as_slice(), &["ORIGINAL", "PRIMARY"]);
    }

    #[test]
    fn binary_access_honours_endianness() {
        let e = element(
            Tag::new(0x0028, 0x0010),
            VR::US,
            Endianness::Little,
            vec![0x00, 0x02],
        );
        assert_eq!(e.to_uint16().unwrap(), 0x0200);

        let e = element(
            Tag::new(0x0028, 0x0010),
            VR::US,
            Endianness::Big,
            vec![0x00, 0x02],
        );
        assert_eq!(e.to_uint16().unwrap(), 0x0002);
    }

    #[test]
    fn float_list_access() {
        let e = element(
            Tag::new(0x0018, 0x605A),
            VR::FL,
            Endianness::Little,
            vec![0x00, 0x00, 0x80, 0x3F, 0x00, 0x00, 0x00, 0x40],
        );
        let values = e.to_multi_float32().unwrap();
        assert_eq!(values.as_slice(), &[1.0f32, 2.0]);
    }

    #[test]
    fn incompatible_target_is_rejected() {
        let e = element(
            Tag::new(0x0010, 0x0010),
            VR::PN,
            Endianness::Little,
            b"Doe^John".to_vec(),
        );
        assert!(matches!(
            e.to_uint16(),
            Err(CastValueError::IncompatibleVr { .. })
        ));
        assert!(e.to_str().is_ok());
    }

    #[test]
    fn unknown_vr_accepts_any_target() {
        let e = element(
            Tag::new(0x0029, 0x1001),
            VR::UN,
            Endianness::Little,
            vec![0x01, 0x00, 0x02, 0x00],
        );
        assert!(e.to_str().is_ok());
        assert_eq!(e.to_multi_uint16().unwrap().as_slice(), &[1u16, 2]);
        assert_eq!(e.to_uint32().unwrap(), 0x0002_0001);
    }

    #[test]
    fn short_payload_is_rejected() {
        let e = element(Tag::new(0x0028, 0x0010), VR::US, Endianness::Little, vec![0x01]);
        assert!(matches!(
            e.to_uint16(),
            Err(CastValueError::NotEnoughData { .. })
        ));
    }

    #[test]
    fn data_set_keeps_tag_order() {
        let mut ds = DataSet::new();
        ds.put(element(
            Tag::new(0x0010, 0x0010),
            VR::PN,
            Endianness::Little,
            b"Doe^John".to_vec(),
        ));
        ds.put(element(
            Tag::new(0x0008, 0x0060),
            VR::CS,
            Endianness::Little,
            b"MR".to_vec(),
        ));
        let tags: Vec<Tag> = ds.elements().map(|e| e.tag()).collect();
        assert_eq!(tags, vec![Tag::new(0x0008, 0x0060), Tag::new(0x0010, 0x0010)]);
        assert!(ds.has_element(Tag::new(0x0010, 0x0010)));
        assert_eq!(ds.len(), 2);
    }
}
