//! Value payloads of DICOM data elements.
//!
//! An element's payload is exactly one of:
//! a primitive byte value,
//! a sequence of items (each a nested data set),
//! or a pixel data sequence of raw fragments.

use byteordered::byteorder::{BigEndian, ByteOrder, LittleEndian};
use byteordered::Endianness;
use smallvec::SmallVec;
use snafu::Snafu;

use crate::element::DataSet;
use crate::header::VR;

/// The container type for multi-valued data,
/// optimized for the common case of a small number of values.
pub type C<T> = SmallVec<[T; 2]>;

/// An error raised when accessing an element's value
/// under a type which is incompatible
/// with its value representation or payload.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
#[non_exhaustive]
pub enum CastValueError {
    /// The requested target type is not compatible with the element's VR.
    #[snafu(display("cannot express {} value as {}", vr, requested))]
    IncompatibleVr {
        /// the name of the requested target type
        requested: &'static str,
        /// the element's value representation
        vr: VR,
    },
    /// The payload has fewer bytes than one value of the target width.
    #[snafu(display("payload of {} byte(s) is too short for one {}", len, requested))]
    NotEnoughData {
        /// the name of the requested target type
        requested: &'static str,
        /// the payload length in bytes
        len: usize,
    },
}

/// Result type for value access operations.
pub type Result<T, E = CastValueError> = std::result::Result<T, E>;

/// A representation of the value data of a DICOM element.
///
/// Exactly one variant applies to any given element:
/// either the raw primitive payload,
/// the ordered items of a sequence,
/// or the ordered fragments of encapsulated pixel data.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The raw byte payload of a primitive (non-sequence) element.
    Primitive(Vec<u8>),
    /// The items of a sequence element,
    /// each one a nested data set.
    Sequence(Vec<DataSet>),
    /// The raw data fragments of an encapsulated pixel data element.
    /// The first fragment, when present, is the basic offset table.
    PixelSequence(Vec<Vec<u8>>),
}

impl Value {
    /// Obtain the primitive byte payload.
    /// Sequence values yield an empty slice.
    pub fn data(&self) -> &[u8] {
        match self {
            Value::Primitive(data) => data,
            _ => &[],
        }
    }

    /// Obtain the sequence items.
    /// Non-sequence values yield an empty slice.
    pub fn items(&self) -> &[DataSet] {
        match self {
            Value::Sequence(items) => items,
            _ => &[],
        }
    }

    /// Obtain the pixel data fragments, including the basic offset table.
    /// Non-pixel-sequence values yield an empty slice.
    pub fn fragments(&self) -> &[Vec<u8>] {
        match self {
            Value::PixelSequence(fragments) => fragments,
            _ => &[],
        }
    }

    /// Whether the value holds no data at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Primitive(data) => data.is_empty(),
            Value::Sequence(items) => items.is_empty(),
            Value::PixelSequence(fragments) => fragments.is_empty(),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Primitive(Vec::new())
    }
}

/// Split a multi-valued character string on the `\` delimiter,
/// trimming trailing whitespace and null padding from each value.
pub(crate) fn split_strings(data: &[u8]) -> C<String> {
    data.split(|&b| b == b'\\')
        .map(|part| {
            String::from_utf8_lossy(part)
                .trim_end_matches(|c| c == ' ' || c == '\0')
                .to_owned()
        })
        .collect()
}

/// Interpret the payload as a sequence of fixed-width binary values.
/// Trailing bytes which do not complete a unit are ignored.
pub(crate) fn split_binary<T>(
    data: &[u8],
    unit: usize,
    endianness: Endianness,
    read: fn(&[u8], Endianness) -> T,
) -> C<T> {
    data.chunks_exact(unit)
        .map(|chunk| read(chunk, endianness))
        .collect()
}

pub(crate) fn read_u16(buf: &[u8], endianness: Endianness) -> u16 {
    match endianness {
        Endianness::Little => LittleEndian::read_u16(buf),
        Endianness::Big => BigEndian::read_u16(buf),
    }
}

pub(crate) fn read_i16(buf: &[u8], endianness: Endianness) -> i16 {
    match endianness {
        Endianness::Little => LittleEndian::read_i16(buf),
        Endianness::Big => BigEndian::read_i16(buf),
    }
}

pub(crate) fn read_u32(buf: &[u8], endianness: Endianness) -> u32 {
    match endianness {
        Endianness::Little => LittleEndian::read_u32(buf),
        Endianness::Big => BigEndian::read_u32(buf),
    }
}

pub(crate) fn read_i32(buf: &[u8], endianness: Endianness) -> i32 {
    match endianness {
        Endianness::Little => LittleEndian::read_i32(buf),
        Endianness::Big => BigEndian::read_i32(buf),
    }
}

pub(crate) fn read_f32(buf: &[u8], endianness: Endianness) -> f32 {
    match endianness {
        Endianness::Little => LittleEndian::read_f32(buf),
        Endianness::Big => BigEndian::read_f32(buf),
    }
}

pub(crate) fn read_f64(buf: &[u8], endianness: Endianness) -> f64 {
    match endianness {
        Endianness::Little => LittleEndian::read_f64(buf),
        Endianness::Big => BigEndian::read_f64(buf),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_multi_valued_strings() {
        let values = split_strings(b"ORIGINAL\\PRIMARY\\AXIAL");
        assert_eq!(values.as_slice(), &["ORIGINAL", "PRIMARY", "AXIAL"]);
        let single = split_strings(b"MR");
        assert_eq!(single.as_slice(), &["MR"]);
    }

    #[test]
    fn split_binary_units() {
        let data: &[u8] = &[0x01, 0x00, 0x02, 0x00, 0xFF];
        let values = split_binary(data, 2, Endianness::Little, read_u16);
        assert_eq!(values.as_slice(), &[1u16, 2]);
        let values = split_binary(data, 2, Endianness::Big, read_u16);
        assert_eq!(values.as_slice(), &[0x0100u16, 0x0200]);
    }

    #[test]
    fn value_accessors_are_disjoint() {
        let v = Value::Primitive(vec![1, 2, 3]);
        assert_eq!(v.data(), &[1, 2, 3]);
        assert!(v.items().is_empty());
        assert!(v.fragments().is_empty());

        let v = Value::Sequence(vec![DataSet::new()]);
        assert!(v.data().is_empty());
        assert_eq!(v.items().len(), 1);
    }
}
