#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]
//! Core DICOM data structures.
//!
//! This crate defines the basic building blocks
//! for interpreting DICOM data sets:
//! the attribute [tag](Tag),
//! the [value representation](VR),
//! the element [length](Length) with its undefined sentinel,
//! dictionary entry types,
//! and the in-memory [data element](DataElement) and [data set](DataSet)
//! with typed value access.
//!
//! Decoding from byte streams is provided by the sibling
//! `dcmio-encoding` and `dcmio-parser` crates.

pub mod dictionary;
pub mod element;
pub mod header;
pub mod value;

pub use byteordered::Endianness;

pub use crate::dictionary::{DataDictionary, DictionaryEntryBuf, DictionaryEntryRef};
pub use crate::element::{DataElement, DataSet};
pub use crate::header::{Length, Tag, VR};
pub use crate::value::{CastValueError, Value, C};
