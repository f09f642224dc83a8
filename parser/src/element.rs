//! Decoding of individual data elements,
//! including nested items and undefined lengths.

use std::io::Read;

use byteordered::byteorder::{BigEndian, ByteOrder, LittleEndian};
use byteordered::Endianness;
use snafu::{ensure, Backtrace, ResultExt, Snafu};
use tracing::warn;

use dcmio_core::{DataElement, DataSet, Length, Tag, Value, VR};
use dcmio_dictionary::entry_or_unknown;
use dcmio_encoding::reader;
use dcmio_encoding::BinaryReader;

/// Item (FFFE,E000)
const ITEM_TAG: Tag = Tag::new(0xFFFE, 0xE000);
/// Item Delimitation Item (FFFE,E00D)
const ITEM_DELIMITER_TAG: Tag = Tag::new(0xFFFE, 0xE00D);
/// Sequence Delimitation Item (FFFE,E0DD)
const SEQUENCE_DELIMITER_TAG: Tag = Tag::new(0xFFFE, 0xE0DD);
/// Pixel Data (7FE0,0010)
const PIXEL_DATA_TAG: Tag = Tag::new(0x7FE0, 0x0010);

/// Nesting limit for sequence items.
/// Deeper structures are rejected as malformed input.
const MAX_SEQUENCE_DEPTH: u32 = 64;

/// Sentinel length value denoting an undefined length.
const UNDEFINED_LEN: u32 = 0xFFFF_FFFF;

const PAD_BYTES: [u8; 2] = [0x00, 0x20];

/// Error type for element reading operations.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// Failed to read an element header component (tag, VR or length).
    #[snafu(display("could not read element header at position {}", position))]
    ReadHeader {
        position: u64,
        #[snafu(backtrace)]
        source: reader::Error,
    },
    /// Failed to read an element's value data.
    #[snafu(display("could not read element value at position {}", position))]
    ReadValue {
        position: u64,
        #[snafu(backtrace)]
        source: reader::Error,
    },
    /// An item start tag was required but another tag was found.
    #[snafu(display("expected item start tag at position {}, got {}", position, tag))]
    UnexpectedTag {
        tag: Tag,
        position: u64,
        backtrace: Backtrace,
    },
    /// The sequence item structure exceeds the supported nesting depth.
    #[snafu(display(
        "sequence items nested deeper than {} levels at position {}",
        MAX_SEQUENCE_DEPTH,
        position
    ))]
    NestingTooDeep { position: u64, backtrace: Backtrace },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A stateful reader of DICOM data elements.
///
/// The reader carries the properties of the active transfer syntax:
/// whether value representations are implicit,
/// and the byte order (held by the underlying binary reader).
/// Both are adjusted by the data set assembler
/// at the file meta boundary,
/// based on [`determine_encoding`](ElementReader::determine_encoding).
#[derive(Debug)]
pub struct ElementReader<R> {
    reader: BinaryReader<R>,
    implicit_vr: bool,
    depth: u32,
}

impl<R> ElementReader<R>
where
    R: Read,
{
    /// Create an element reader over the given binary reader.
    ///
    /// The reader starts out in Implicit VR,
    /// with the byte order of the binary reader,
    /// matching the default transfer syntax of DICOM.
    pub fn new(reader: BinaryReader<R>) -> Self {
        ElementReader {
            reader,
            implicit_vr: true,
            depth: 0,
        }
    }

    /// Whether the reader expects value representations
    /// to be implicitly defined.
    #[inline]
    pub fn is_implicit_vr(&self) -> bool {
        self.implicit_vr
    }

    /// Set whether the reader expects value representations
    /// to be implicitly defined.
    #[inline]
    pub fn set_implicit_vr(&mut self, implicit_vr: bool) {
        self.implicit_vr = implicit_vr;
    }

    /// Whether the reader decodes binary data in little endian order.
    #[inline]
    pub fn is_little_endian(&self) -> bool {
        self.reader.endianness() == Endianness::Little
    }

    /// Set whether the reader decodes binary data in little endian order.
    pub fn set_little_endian(&mut self, little_endian: bool) {
        self.reader.set_endianness(if little_endian {
            Endianness::Little
        } else {
            Endianness::Big
        });
    }

    /// Access the underlying binary reader.
    #[inline]
    pub fn reader_mut(&mut self) -> &mut BinaryReader<R> {
        &mut self.reader
    }

    /// Check whether the source is exhausted.
    pub fn is_eof(&mut self) -> Result<bool> {
        let position = self.reader.position();
        self.reader.is_eof().context(ReadHeaderSnafu { position })
    }

    /// Determine the data set encoding from six bytes of lookahead:
    /// four for the next element's tag and two for its would-be VR.
    ///
    /// Little endian is assumed when the group number,
    /// read as little endian,
    /// is below `0x2000` or equal to `0x7FE0` (pixel data).
    /// An explicit VR is assumed when the VR bytes
    /// match a recognized representation code.
    /// Both settings are applied to the reader.
    pub fn determine_encoding(&mut self, probe: [u8; 6]) {
        let group = LittleEndian::read_u16(&probe[0..2]);
        self.set_little_endian(group < 0x2000 || group == 0x7FE0);
        let explicit = VR::from_binary([probe[4], probe[5]]).is_some();
        self.implicit_vr = !explicit;
    }

    /// Read one complete data element,
    /// including any nested items.
    pub fn read_element(&mut self) -> Result<DataElement> {
        let endianness = self.reader.endianness();
        let tag = self.read_tag()?;
        let entry = entry_or_unknown(tag);
        let vr = self.read_vr(entry.vr)?;
        let len = self.read_length(vr)?;
        let (value, len) = self.read_value(tag, vr, len)?;
        Ok(DataElement::new(entry, vr, len, endianness, value))
    }

    /// Read a tag from the stream.
    /// The group occupies the first two bytes and the element the next two,
    /// each as one 16-bit integer in the current byte order.
    fn read_tag(&mut self) -> Result<Tag> {
        let position = self.reader.position();
        let group = self
            .reader
            .read_u16()
            .context(ReadHeaderSnafu { position })?;
        let element = self
            .reader
            .read_u16()
            .context(ReadHeaderSnafu { position })?;
        Ok(Tag::new(group, element))
    }

    /// Decode the tag at the read cursor without consuming it.
    fn peek_tag(&mut self) -> Result<Tag> {
        let position = self.reader.position();
        let mut buf = [0u8; 4];
        buf.copy_from_slice(
            self.reader
                .peek(4)
                .context(ReadHeaderSnafu { position })?,
        );
        let (group, element) = match self.reader.endianness() {
            Endianness::Little => (
                LittleEndian::read_u16(&buf[0..2]),
                LittleEndian::read_u16(&buf[2..4]),
            ),
            Endianness::Big => (
                BigEndian::read_u16(&buf[0..2]),
                BigEndian::read_u16(&buf[2..4]),
            ),
        };
        Ok(Tag::new(group, element))
    }

    /// Resolve the element's value representation.
    ///
    /// In implicit mode the VR is not present in the stream
    /// and the dictionary's representation is used as is.
    /// In explicit mode, two bytes are read from the stream;
    /// a stream VR which is more specific than a dictionary `UN`
    /// overrides it, so that private and under-specified attributes
    /// can still be decoded correctly.
    /// Unrecognized codes are coerced to `UN`.
    fn read_vr(&mut self, entry_vr: VR) -> Result<VR> {
        if self.implicit_vr {
            return Ok(entry_vr);
        }
        let position = self.reader.position();
        let mut buf = [0u8; 2];
        self.reader
            .read_exact(&mut buf)
            .context(ReadHeaderSnafu { position })?;
        let stream_vr = match VR::from_binary(buf) {
            Some(vr) => vr,
            None => {
                warn!(
                    "unrecognized VR code {:?} at position {}, coercing to UN",
                    buf.escape_ascii().to_string(),
                    position,
                );
                VR::UN
            }
        };
        if entry_vr == VR::UN && stream_vr != VR::UN {
            Ok(stream_vr)
        } else {
            Ok(entry_vr)
        }
    }

    /// Read the element's declared length.
    ///
    /// Implicit elements always use a 32-bit length.
    /// Explicit elements use a 32-bit length
    /// preceded by two reserved bytes for OB, OW, SQ, UN and UT,
    /// and a 16-bit length otherwise.
    fn read_length(&mut self, vr: VR) -> Result<Length> {
        let position = self.reader.position();
        let raw = if self.implicit_vr {
            self.reader
                .read_u32()
                .context(ReadHeaderSnafu { position })?
        } else if vr.has_reserved_length() {
            self.reader
                .discard(2)
                .context(ReadHeaderSnafu { position })?;
            self.reader
                .read_u32()
                .context(ReadHeaderSnafu { position })?
        } else {
            u32::from(
                self.reader
                    .read_u16()
                    .context(ReadHeaderSnafu { position })?,
            )
        };
        Ok(Length::from_raw(raw))
    }

    /// Read the element's value data,
    /// returning the value and the effective length
    /// after pad stripping.
    fn read_value(&mut self, tag: Tag, vr: VR, len: Length) -> Result<(Value, Length)> {
        let declared = match len {
            Length::Undefined => {
                let value = if tag == PIXEL_DATA_TAG {
                    let mut fragments = Vec::new();
                    while self.peek_tag()? != SEQUENCE_DELIMITER_TAG {
                        fragments.push(self.read_fragment_item()?);
                    }
                    self.discard_delimiter()?;
                    Value::PixelSequence(fragments)
                } else {
                    let mut items = Vec::new();
                    while self.peek_tag()? != SEQUENCE_DELIMITER_TAG {
                        items.push(self.read_dataset_item()?);
                    }
                    self.discard_delimiter()?;
                    Value::Sequence(items)
                };
                return Ok((value, len));
            }
            Length::Defined(n) => n,
        };

        if declared == 0 {
            let value = if vr == VR::SQ {
                Value::Sequence(Vec::new())
            } else {
                Value::Primitive(Vec::new())
            };
            return Ok((value, len));
        }

        if vr == VR::SQ {
            let end = self.reader.position() + u64::from(declared);
            let mut items = Vec::new();
            while self.reader.position() < end {
                items.push(self.read_dataset_item()?);
            }
            return Ok((Value::Sequence(items), len));
        }

        let position = self.reader.position();
        let mut data = vec![0; declared as usize];
        self.reader
            .read_exact(&mut data)
            .context(ReadValueSnafu { position })?;

        // native pixel data is kept byte for byte; its payload is a frame
        if vr.is_padded() && tag != PIXEL_DATA_TAG {
            if let Some(last) = data.last() {
                if PAD_BYTES.contains(last) {
                    data.pop();
                }
            }
            if let Some(first) = data.first() {
                if PAD_BYTES.contains(first) {
                    // only trailing padding is permitted by the standard
                    warn!("stripping leading pad byte of element {}", tag);
                    data.remove(0);
                }
            }
        }
        let len = Length::Defined(data.len() as u32);
        Ok((Value::Primitive(data), len))
    }

    /// Read one sequence item as a nested data set.
    /// The cursor is expected to be at an item start tag.
    fn read_dataset_item(&mut self) -> Result<DataSet> {
        let position = self.reader.position();
        let tag = self.read_tag()?;
        ensure!(tag == ITEM_TAG, UnexpectedTagSnafu { tag, position });
        let len = self
            .reader
            .read_u32()
            .context(ReadHeaderSnafu { position })?;

        let mut dataset = DataSet::new();
        // a zero length item is valid and has been seen in real files
        if len == 0 {
            return Ok(dataset);
        }

        ensure!(
            self.depth < MAX_SEQUENCE_DEPTH,
            NestingTooDeepSnafu { position }
        );
        self.depth += 1;
        if len == UNDEFINED_LEN {
            while self.peek_tag()? != ITEM_DELIMITER_TAG {
                dataset.put(self.read_element()?);
            }
            self.discard_delimiter()?;
        } else {
            let end = self.reader.position() + u64::from(len);
            while self.reader.position() < end {
                dataset.put(self.read_element()?);
            }
        }
        self.depth -= 1;
        Ok(dataset)
    }

    /// Read one pixel data fragment item.
    /// The cursor is expected to be at an item start tag.
    fn read_fragment_item(&mut self) -> Result<Vec<u8>> {
        let position = self.reader.position();
        let tag = self.read_tag()?;
        ensure!(tag == ITEM_TAG, UnexpectedTagSnafu { tag, position });
        let len = self
            .reader
            .read_u32()
            .context(ReadHeaderSnafu { position })?;

        if len == UNDEFINED_LEN {
            let mut fragment = Vec::new();
            while self.peek_tag()? != ITEM_DELIMITER_TAG {
                let mut chunk = [0u8; 4];
                let position = self.reader.position();
                self.reader
                    .read_exact(&mut chunk)
                    .context(ReadValueSnafu { position })?;
                fragment.extend_from_slice(&chunk);
            }
            self.discard_delimiter()?;
            Ok(fragment)
        } else {
            let mut fragment = vec![0; len as usize];
            self.reader
                .read_exact(&mut fragment)
                .context(ReadValueSnafu { position })?;
            Ok(fragment)
        }
    }

    /// Consume a delimiter which was previously peeked:
    /// its tag plus a 4-byte zero length.
    fn discard_delimiter(&mut self) -> Result<()> {
        let position = self.reader.position();
        self.reader.discard(8).context(ReadHeaderSnafu { position })
    }
}
