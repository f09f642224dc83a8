#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]
//! High-level DICOM object decoding.
//!
//! This crate assembles complete [`Dicom`] objects
//! from Part-10 files or raw byte streams:
//! it probes the preamble,
//! reads the file meta group,
//! auto-detects the data set encoding at the meta boundary,
//! re-encodes text payloads to UTF-8
//! through the declared specific character set,
//! and routes pixel data into frames.
//!
//! ```no_run
//! # fn main() -> dcmio_object::Result<()> {
//! use dcmio_object::open_file;
//!
//! let obj = open_file("0001.dcm")?;
//! if let Some(e) = obj.element(dcmio_dictionary::tags::PATIENT_NAME) {
//!     println!("patient: {}", e.to_str().unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```

pub mod meta;
pub mod pixeldata;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use byteordered::byteorder::{ByteOrder, LittleEndian};
use snafu::{Backtrace, ResultExt, Snafu};
use tracing::debug;

use dcmio_dictionary::tags;
use dcmio_encoding::reader;
use dcmio_encoding::text::{self, CharacterSet};
use dcmio_encoding::BinaryReader;
use dcmio_parser::ElementReader;

pub use dcmio_core::{DataElement, DataSet, Endianness, Length, Tag, Value, VR};
pub use crate::meta::{FileMetaTable, FileMetaTableBuilder};
pub use crate::pixeldata::PixelData;

/// Error type for DICOM object decoding.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// Failed to open the file at the given path.
    #[snafu(display("could not open file '{}'", filename.display()))]
    OpenFile {
        filename: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },
    /// Failed while probing the stream for the preamble
    /// or the meta boundary.
    #[snafu(display("could not probe stream"))]
    ProbeStream {
        #[snafu(backtrace)]
        source: reader::Error,
    },
    /// Failed while reading a data element.
    #[snafu(display("could not read data element"))]
    ReadElement {
        #[snafu(backtrace)]
        source: dcmio_parser::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A DICOM object decoded entirely into memory:
/// the 128-byte preamble (zeroed when absent),
/// the file meta data set,
/// the main data set,
/// and any pixel data frames.
///
/// Objects are populated in a single decoding pass
/// and are read-only thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct Dicom {
    preamble: [u8; 128],
    meta: DataSet,
    dataset: DataSet,
    pixel_data: PixelData,
}

/// Create a DICOM object by reading from a byte stream.
///
/// See [`Dicom::from_reader`].
pub fn from_reader<R>(source: R) -> Result<Dicom>
where
    R: Read,
{
    Dicom::from_reader(source)
}

/// Create a DICOM object by reading the file at the given path.
///
/// See [`Dicom::open_file`].
pub fn open_file<P: AsRef<Path>>(path: P) -> Result<Dicom> {
    Dicom::open_file(path)
}

impl Dicom {
    /// Create a DICOM object by reading the file at the given path.
    ///
    /// The file is held only for the duration of the call.
    pub fn open_file<P: AsRef<Path>>(path: P) -> Result<Dicom> {
        let path = path.as_ref();
        let file = File::open(path).context(OpenFileSnafu { filename: path })?;
        Dicom::from_reader(BufReader::new(file))
    }

    /// Create a DICOM object by decoding the given byte stream.
    ///
    /// The stream may or may not start with the 128-byte preamble
    /// and `DICM` magic code;
    /// when they are absent,
    /// decoding proceeds from the first byte
    /// and the preamble is left zeroed.
    pub fn from_reader<R>(source: R) -> Result<Dicom>
    where
        R: Read,
    {
        let mut reader = BinaryReader::new(source, Endianness::Little);

        let mut preamble = [0u8; 128];
        let has_preamble = match reader.peek(132) {
            Ok(probe) => {
                if probe[128..132] == meta::DICM_MAGIC_CODE {
                    preamble.copy_from_slice(&probe[..128]);
                    true
                } else {
                    false
                }
            }
            Err(reader::Error::UnexpectedEndOfStream { .. }) => false,
            Err(e) => return Err(e).context(ProbeStreamSnafu),
        };
        if has_preamble {
            reader.discard(132).context(ProbeStreamSnafu)?;
        } else {
            debug!("input has no preamble, decoding from the first byte");
        }

        // the file meta group is always explicit VR little endian
        let mut elr = ElementReader::new(reader);
        elr.set_implicit_vr(false);
        elr.set_little_endian(true);

        let mut meta = DataSet::new();
        let mut dataset = DataSet::new();
        let mut staged: Vec<DataElement> = Vec::new();
        let mut in_meta = true;

        loop {
            if in_meta {
                let group = match elr.reader_mut().peek(2) {
                    Ok(p) => LittleEndian::read_u16(p),
                    Err(reader::Error::UnexpectedEndOfStream { .. }) => break,
                    Err(e) => return Err(e).context(ProbeStreamSnafu),
                };
                if group != 0x0002 {
                    in_meta = false;
                    let mut probe = [0u8; 6];
                    match elr.reader_mut().peek(6) {
                        Ok(p) => probe.copy_from_slice(p),
                        Err(reader::Error::UnexpectedEndOfStream { .. }) => break,
                        Err(e) => return Err(e).context(ProbeStreamSnafu),
                    }
                    elr.determine_encoding(probe);
                }
            }
            if elr.is_eof().context(ReadElementSnafu)? {
                break;
            }
            let e = elr.read_element().context(ReadElementSnafu)?;
            if in_meta {
                meta.put(e);
            } else if e.tag() == tags::SPECIFIC_CHARACTER_SET {
                // applied immediately, it drives the re-encoding pass
                dataset.put(e);
            } else {
                staged.push(e);
            }
        }

        if let Some(entry) = meta
            .element(tags::TRANSFER_SYNTAX_UID)
            .and_then(|e| e.to_str().ok())
            .and_then(|uid| dcmio_dictionary::by_uid(&uid))
        {
            debug!("declared transfer syntax: {}", entry.name);
        }

        let charset = resolve_character_set(&dataset);
        debug!("character set: {}", charset.code());

        let mut pixel_data = PixelData::new();
        for mut e in staged {
            if e.vr().uses_character_set() && !e.data().is_empty() {
                let decoded = charset.decode(e.data());
                e.set_data(decoded.into_bytes());
            }
            if e.tag() == tags::PIXEL_DATA {
                pixel_data.extend_from_element(&e);
                continue;
            }
            dataset.put(e);
        }

        Ok(Dicom {
            preamble,
            meta,
            dataset,
            pixel_data,
        })
    }

    /// Retrieve the 128-byte preamble.
    /// All zeros when the input had none.
    #[inline]
    pub fn preamble(&self) -> &[u8; 128] {
        &self.preamble
    }

    /// Retrieve the file meta data set (group 0002).
    #[inline]
    pub fn meta(&self) -> &DataSet {
        &self.meta
    }

    /// Retrieve the main data set.
    #[inline]
    pub fn dataset(&self) -> &DataSet {
        &self.dataset
    }

    /// Retrieve a data element by its tag.
    ///
    /// Group 0002 tags are resolved in the file meta data set,
    /// all others in the main data set.
    pub fn element(&self, tag: Tag) -> Option<&DataElement> {
        if tag.group() == 0x0002 {
            self.meta.element(tag)
        } else {
            self.dataset.element(tag)
        }
    }

    /// Resolve the character set declared by the data set,
    /// or the default (UTF-8) when absent or unrecognized.
    ///
    /// Note that the decoder has already re-encoded all
    /// text payloads into UTF-8;
    /// this accessor reports which set they were decoded from.
    pub fn character_set(&self) -> &'static CharacterSet {
        resolve_character_set(&self.dataset)
    }

    /// Retrieve the decoded pixel data frames.
    #[inline]
    pub fn pixel_data(&self) -> &PixelData {
        &self.pixel_data
    }
}

/// Resolve the Specific Character Set attribute of a data set:
/// the last value applies when the attribute is multi-valued,
/// and unrecognized or absent values fall back to the default set.
fn resolve_character_set(dataset: &DataSet) -> &'static CharacterSet {
    dataset
        .element(tags::SPECIFIC_CHARACTER_SET)
        .and_then(|e| e.to_strs().ok())
        .and_then(|values| values.last().and_then(|code| text::from_code(code)))
        .unwrap_or_else(text::default_character_set)
}
