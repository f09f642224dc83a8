//! Writing of DICOM file meta information groups.
//!
//! This is the minimal writing facility of the library,
//! producing the preamble, magic code and group 0002 elements
//! which precede a data set in a Part-10 file.
//! Its main use is the creation of synthetic files
//! for tests and for reproducing decoder issues.

use std::io::Write;

use snafu::{Backtrace, OptionExt, ResultExt, Snafu};

use dcmio_core::{Tag, VR};
use dcmio_dictionary::{tags, uids};
use dcmio_encoding::text;

/// The magic code which follows the 128-byte preamble.
pub(crate) const DICM_MAGIC_CODE: [u8; 4] = *b"DICM";

const IMPLEMENTATION_CLASS_UID: &str = "1.2.826.0.1.3680043.10.1432.1";
const IMPLEMENTATION_VERSION_NAME: &str = "dcmio-0.1";

/// Error type for file meta writing operations.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// A required field was not provided to the builder.
    #[snafu(display("missing required field `{}`", name))]
    MissingField {
        name: &'static str,
        backtrace: Backtrace,
    },
    /// An element value is too long for its 16-bit length field.
    #[snafu(display("value of {} bytes overflows the 16-bit length field", len))]
    LengthOverflowU16 { len: usize, backtrace: Backtrace },
    /// An element value is too long for its 32-bit length field.
    #[snafu(display("value of {} bytes overflows the 32-bit length field", len))]
    LengthOverflowU32 { len: usize, backtrace: Backtrace },
    /// The output destination failed.
    #[snafu(display("could not write file meta group"))]
    WriteOutput {
        source: std::io::Error,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// DICOM file meta information table.
///
/// Carries the six meta attributes written by [`write_to`](Self::write_to),
/// which also emits the File Meta Information Group Length element
/// computed from the encoded group.
#[derive(Debug, Clone, PartialEq)]
pub struct FileMetaTable {
    /// File Meta Information Version (0002,0001)
    pub information_version: [u8; 2],
    /// Media Storage SOP Class UID (0002,0002)
    pub media_storage_sop_class_uid: String,
    /// Media Storage SOP Instance UID (0002,0003)
    pub media_storage_sop_instance_uid: String,
    /// Transfer Syntax UID (0002,0010)
    pub transfer_syntax: String,
    /// Implementation Class UID (0002,0012)
    pub implementation_class_uid: String,
    /// Implementation Version Name (0002,0013)
    pub implementation_version_name: String,
}

impl FileMetaTable {
    /// Start building a file meta table.
    pub fn builder() -> FileMetaTableBuilder {
        FileMetaTableBuilder::new()
    }

    /// Write a complete file head to `out`:
    /// 128 zero bytes, the `DICM` magic code,
    /// the group length element,
    /// and the six meta elements of this table,
    /// in Explicit VR Little Endian.
    pub fn write_to<W: Write>(&self, mut out: W) -> Result<()> {
        let text = text::default_character_set();

        let mut group = Vec::new();
        group.extend(encode_element(
            tags::FILE_META_INFORMATION_VERSION,
            VR::OB,
            self.information_version.to_vec(),
        )?);
        group.extend(encode_element(
            tags::MEDIA_STORAGE_SOP_CLASS_UID,
            VR::UI,
            text.encode(&self.media_storage_sop_class_uid),
        )?);
        group.extend(encode_element(
            tags::MEDIA_STORAGE_SOP_INSTANCE_UID,
            VR::UI,
            text.encode(&self.media_storage_sop_instance_uid),
        )?);
        group.extend(encode_element(
            tags::TRANSFER_SYNTAX_UID,
            VR::UI,
            text.encode(&self.transfer_syntax),
        )?);
        group.extend(encode_element(
            tags::IMPLEMENTATION_CLASS_UID,
            VR::UI,
            text.encode(&self.implementation_class_uid),
        )?);
        group.extend(encode_element(
            tags::IMPLEMENTATION_VERSION_NAME,
            VR::SH,
            text.encode(&self.implementation_version_name),
        )?);

        let group_len = u32::try_from(group.len())
            .ok()
            .context(LengthOverflowU32Snafu { len: group.len() })?;
        let group_length_element = encode_element(
            tags::FILE_META_INFORMATION_GROUP_LENGTH,
            VR::UL,
            group_len.to_le_bytes().to_vec(),
        )?;

        out.write_all(&[0u8; 128]).context(WriteOutputSnafu)?;
        out.write_all(&DICM_MAGIC_CODE).context(WriteOutputSnafu)?;
        out.write_all(&group_length_element)
            .context(WriteOutputSnafu)?;
        out.write_all(&group).context(WriteOutputSnafu)?;
        Ok(())
    }
}

/// A builder for DICOM file meta information tables.
///
/// All fields except the SOP instance UID carry defaults:
/// Raw Data Storage as the SOP class,
/// Explicit VR Little Endian as the transfer syntax,
/// and this library's implementation identifiers.
#[derive(Debug, Clone, Default)]
pub struct FileMetaTableBuilder {
    information_version: Option<[u8; 2]>,
    media_storage_sop_class_uid: Option<String>,
    media_storage_sop_instance_uid: Option<String>,
    transfer_syntax: Option<String>,
    implementation_class_uid: Option<String>,
    implementation_version_name: Option<String>,
}

impl FileMetaTableBuilder {
    /// Create a new builder with no fields set.
    pub fn new() -> Self {
        FileMetaTableBuilder::default()
    }

    /// Define the File Meta Information Version.
    pub fn information_version(mut self, value: [u8; 2]) -> Self {
        self.information_version = Some(value);
        self
    }

    /// Define the Media Storage SOP Class UID.
    pub fn media_storage_sop_class_uid<T: Into<String>>(mut self, value: T) -> Self {
        self.media_storage_sop_class_uid = Some(value.into());
        self
    }

    /// Define the Media Storage SOP Instance UID.
    pub fn media_storage_sop_instance_uid<T: Into<String>>(mut self, value: T) -> Self {
        self.media_storage_sop_instance_uid = Some(value.into());
        self
    }

    /// Define the Transfer Syntax UID.
    pub fn transfer_syntax<T: Into<String>>(mut self, value: T) -> Self {
        self.transfer_syntax = Some(value.into());
        self
    }

    /// Define the Implementation Class UID.
    pub fn implementation_class_uid<T: Into<String>>(mut self, value: T) -> Self {
        self.implementation_class_uid = Some(value.into());
        self
    }

    /// Define the Implementation Version Name.
    pub fn implementation_version_name<T: Into<String>>(mut self, value: T) -> Self {
        self.implementation_version_name = Some(value.into());
        self
    }

    /// Build the file meta table.
    ///
    /// Returns an error if the Media Storage SOP Instance UID
    /// was not provided.
    pub fn build(self) -> Result<FileMetaTable> {
        let media_storage_sop_instance_uid = self.media_storage_sop_instance_uid.context(
            MissingFieldSnafu {
                name: "media_storage_sop_instance_uid",
            },
        )?;
        Ok(FileMetaTable {
            information_version: self.information_version.unwrap_or([0x00, 0x01]),
            media_storage_sop_class_uid: self
                .media_storage_sop_class_uid
                .unwrap_or_else(|| uids::RAW_DATA_STORAGE.to_owned()),
            media_storage_sop_instance_uid,
            transfer_syntax: self
                .transfer_syntax
                .unwrap_or_else(|| uids::EXPLICIT_VR_LITTLE_ENDIAN.to_owned()),
            implementation_class_uid: self
                .implementation_class_uid
                .unwrap_or_else(|| IMPLEMENTATION_CLASS_UID.to_owned()),
            implementation_version_name: self
                .implementation_version_name
                .unwrap_or_else(|| IMPLEMENTATION_VERSION_NAME.to_owned()),
        })
    }
}

/// Encode one Explicit VR Little Endian element,
/// padding the value to an even length where the VR requires it.
fn encode_element(tag: Tag, vr: VR, mut value: Vec<u8>) -> Result<Vec<u8>> {
    if vr.is_padded() && value.len() % 2 != 0 {
        let pad = match vr {
            VR::UI | VR::OB => 0x00,
            _ => 0x20,
        };
        value.push(pad);
    }

    let mut out = Vec::with_capacity(12 + value.len());
    out.extend_from_slice(&tag.group().to_le_bytes());
    out.extend_from_slice(&tag.element().to_le_bytes());
    out.extend_from_slice(&vr.to_bytes());
    if vr.has_reserved_length() {
        let len = u32::try_from(value.len())
            .ok()
            .context(LengthOverflowU32Snafu { len: value.len() })?;
        out.extend_from_slice(&[0x00, 0x00]);
        out.extend_from_slice(&len.to_le_bytes());
    } else {
        let len = u16::try_from(value.len())
            .ok()
            .context(LengthOverflowU16Snafu { len: value.len() })?;
        out.extend_from_slice(&len.to_le_bytes());
    }
    out.extend_from_slice(&value);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteordered::byteorder::{ByteOrder, LittleEndian};

    #[test]
    fn build_requires_instance_uid() {
        let err = FileMetaTable::builder().build().unwrap_err();
        assert!(matches!(err, Error::MissingField { .. }));
    }

    #[test]
    fn written_head_has_expected_layout() {
        let table = FileMetaTable::builder()
            .media_storage_sop_instance_uid("1.2.3.4.5.6")
            .build()
            .unwrap();
        let mut buf = Vec::new();
        table.write_to(&mut buf).unwrap();

        assert!(buf[..128].iter().all(|&b| b == 0));
        assert_eq!(&buf[128..132], b"DICM");
        // (0002,0000) UL 4
        assert_eq!(
            &buf[132..140],
            &[0x02, 0x00, 0x00, 0x00, b'U', b'L', 0x04, 0x00]
        );
        let group_length = LittleEndian::read_u32(&buf[140..144]) as usize;
        assert_eq!(group_length, buf.len() - 144);
        // (0002,0001) OB follows with its reserved length field
        assert_eq!(
            &buf[144..152],
            &[0x02, 0x00, 0x01, 0x00, b'O', b'B', 0x00, 0x00]
        );
    }

    #[test]
    fn odd_values_are_padded() {
        let encoded =
            encode_element(tags::MEDIA_STORAGE_SOP_INSTANCE_UID, VR::UI, b"1.2.3".to_vec())
                .unwrap();
        // 8 byte header plus value padded to 6 bytes
        assert_eq!(encoded.len(), 14);
        assert_eq!(&encoded[8..], b"1.2.3\0");

        let encoded =
            encode_element(tags::IMPLEMENTATION_VERSION_NAME, VR::SH, b"dcmio".to_vec()).unwrap();
        assert_eq!(&encoded[8..], b"dcmio ");
    }

    #[test]
    fn oversized_value_overflows_length_field() {
        let err = encode_element(
            tags::IMPLEMENTATION_VERSION_NAME,
            VR::SH,
            vec![b' '; 0x1_0000],
        )
        .unwrap_err();
        assert!(matches!(err, Error::LengthOverflowU16 { .. }));
    }
}
