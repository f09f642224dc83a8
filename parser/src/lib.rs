#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]
//! Stateful DICOM data element reading.
//!
//! The [element reader](ElementReader) decodes one data element at a time
//! from a binary reader,
//! tracking the implicit/explicit VR and byte order state
//! which the data set assembler adjusts
//! when crossing the file meta boundary.
//! Nested sequence items and undefined lengths
//! are resolved recursively.

pub mod element;

pub use crate::element::{ElementReader, Error, Result};
