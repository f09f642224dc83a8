//! A buffered byte source with endian-aware primitive reads.
//!
//! The element parser needs to look ahead of the read cursor
//! (for delimiter tags and for encoding detection)
//! without consuming bytes,
//! so the reader keeps an internal buffer
//! from which peeked bytes are later drained.

use std::collections::VecDeque;
use std::io::{ErrorKind, Read};

use byteordered::byteorder::{BigEndian, ByteOrder, LittleEndian};
use byteordered::Endianness;
use snafu::{Backtrace, ResultExt, Snafu};

/// Error type for binary reader operations.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// The stream ended before the requested number of bytes.
    #[snafu(display("unexpected end of stream at position {}", position))]
    UnexpectedEndOfStream { position: u64, backtrace: Backtrace },
    /// The underlying source failed.
    #[snafu(display("could not read from source at position {}", position))]
    ReadSource {
        position: u64,
        source: std::io::Error,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

const FILL_CHUNK_SIZE: usize = 512;

/// A buffered reader over an arbitrary byte source
/// with support for peeking,
/// discarding,
/// and endian-aware primitive reads.
///
/// The byte order is runtime state and may be switched mid-stream,
/// which the DICOM encoding detection requires.
/// The position counter tracks consumed bytes only;
/// peeking does not advance it.
#[derive(Debug)]
pub struct BinaryReader<R> {
    source: R,
    buffer: VecDeque<u8>,
    endianness: Endianness,
    position: u64,
}

impl<R> BinaryReader<R>
where
    R: Read,
{
    /// Create a new reader over the given source
    /// with the given initial byte order.
    pub fn new(source: R, endianness: Endianness) -> Self {
        BinaryReader {
            source,
            buffer: VecDeque::new(),
            endianness,
            position: 0,
        }
    }

    /// Retrieve the current byte order.
    #[inline]
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Replace the byte order used by the primitive read operations.
    #[inline]
    pub fn set_endianness(&mut self, endianness: Endianness) {
        self.endianness = endianness;
    }

    /// Retrieve the number of bytes consumed so far.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Buffer bytes from the source until at least `n` are available.
    /// Returns `false` if the stream ends first.
    fn fill(&mut self, n: usize) -> Result<bool> {
        let mut chunk = [0u8; FILL_CHUNK_SIZE];
        while self.buffer.len() < n {
            match self.source.read(&mut chunk) {
                Ok(0) => return Ok(false),
                Ok(m) => self.buffer.extend(chunk[..m].iter().copied()),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(e).context(ReadSourceSnafu {
                        position: self.position,
                    })
                }
            }
        }
        Ok(true)
    }

    /// Look at the next `n` bytes without consuming them.
    /// Fails with [`Error::UnexpectedEndOfStream`]
    /// if fewer than `n` bytes remain.
    pub fn peek(&mut self, n: usize) -> Result<&[u8]> {
        if !self.fill(n)? {
            return UnexpectedEndOfStreamSnafu {
                position: self.position,
            }
            .fail();
        }
        Ok(&self.buffer.make_contiguous()[..n])
    }

    /// Check whether the source is exhausted.
    pub fn is_eof(&mut self) -> Result<bool> {
        Ok(!self.fill(1)?)
    }

    /// Read exactly `dst.len()` bytes into `dst`.
    pub fn read_exact(&mut self, dst: &mut [u8]) -> Result<()> {
        let buffered = dst.len().min(self.buffer.len());
        for (d, b) in dst.iter_mut().zip(self.buffer.drain(..buffered)) {
            *d = b;
        }
        if buffered < dst.len() {
            match self.source.read_exact(&mut dst[buffered..]) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                    return UnexpectedEndOfStreamSnafu {
                        position: self.position,
                    }
                    .fail()
                }
                Err(e) => {
                    return Err(e).context(ReadSourceSnafu {
                        position: self.position,
                    })
                }
            }
        }
        self.position += dst.len() as u64;
        Ok(())
    }

    /// Read and discard the next `n` bytes.
    pub fn discard(&mut self, n: usize) -> Result<()> {
        let mut scratch = [0u8; FILL_CHUNK_SIZE];
        let mut remaining = n;
        while remaining > 0 {
            let take = remaining.min(scratch.len());
            self.read_exact(&mut scratch[..take])?;
            remaining -= take;
        }
        Ok(())
    }

    /// Read an unsigned 16-bit integer in the current byte order.
    pub fn read_u16(&mut self) -> Result<u16> {
        let mut buf = [0u8; 2];
        self.read_exact(&mut buf)?;
        Ok(match self.endianness {
            Endianness::Little => LittleEndian::read_u16(&buf),
            Endianness::Big => BigEndian::read_u16(&buf),
        })
    }

    /// Read an unsigned 32-bit integer in the current byte order.
    pub fn read_u32(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf)?;
        Ok(match self.endianness {
            Endianness::Little => LittleEndian::read_u32(&buf),
            Endianness::Big => BigEndian::read_u32(&buf),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_does_not_consume() {
        let data: &[u8] = &[0x01, 0x02, 0x03, 0x04, 0x05];
        let mut reader = BinaryReader::new(data, Endianness::Little);

        assert_eq!(reader.peek(4).unwrap(), &[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.peek(2).unwrap(), &[0x01, 0x02]);

        let mut out = [0u8; 3];
        reader.read_exact(&mut out).unwrap();
        assert_eq!(&out, &[0x01, 0x02, 0x03]);
        assert_eq!(reader.position(), 3);
    }

    #[test]
    fn peek_past_end_fails() {
        let data: &[u8] = &[0x01, 0x02];
        let mut reader = BinaryReader::new(data, Endianness::Little);
        assert!(matches!(
            reader.peek(3),
            Err(Error::UnexpectedEndOfStream { .. })
        ));
        // the available bytes are still readable afterwards
        assert_eq!(reader.peek(2).unwrap(), &[0x01, 0x02]);
    }

    #[test]
    fn primitive_reads_follow_byte_order() {
        let data: &[u8] = &[0xC3, 0x3C, 0x33, 0xCC, 0x55, 0xAA];
        let mut reader = BinaryReader::new(data, Endianness::Little);
        assert_eq!(reader.read_u16().unwrap(), 0x3CC3);
        reader.set_endianness(Endianness::Big);
        assert_eq!(reader.read_u32().unwrap(), 0x33CC55AA);
        assert_eq!(reader.position(), 6);
    }

    #[test]
    fn discard_advances_position() {
        let data = vec![0u8; 2048];
        let mut reader = BinaryReader::new(&data[..], Endianness::Little);
        reader.peek(16).unwrap();
        reader.discard(1500).unwrap();
        assert_eq!(reader.position(), 1500);
        assert!(!reader.is_eof().unwrap());
        reader.discard(548).unwrap();
        assert!(reader.is_eof().unwrap());
    }

    #[test]
    fn short_read_is_end_of_stream() {
        let data: &[u8] = &[0x01];
        let mut reader = BinaryReader::new(data, Endianness::Little);
        assert!(matches!(
            reader.read_u32(),
            Err(Error::UnexpectedEndOfStream { .. })
        ));
    }
}
