#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]
//! DICOM decoding primitives.
//!
//! This crate provides the two stream-level services
//! that the element parser builds upon:
//! a [buffered binary reader](reader::BinaryReader)
//! with peeking and runtime byte order selection,
//! and the [character set registry](text::CharacterSet)
//! used to decode legacy text repertoires to UTF-8.
//!
//! All APIs are based on synchronous I/O.

pub mod reader;
pub mod text;

pub use byteordered::Endianness;

pub use crate::reader::BinaryReader;
pub use crate::text::CharacterSet;
