//! Frame assembly for the pixel data element.
//!
//! Encapsulated pixel data arrives as a basic offset table
//! followed by one or more fragments;
//! native pixel data is a single contiguous payload.
//! Either form is resolved here into an ordered list of frames.

use byteordered::byteorder::{ByteOrder, LittleEndian};
use itertools::Itertools;
use tracing::debug;

use dcmio_core::DataElement;

/// The pixel data of a DICOM object,
/// assembled as an ordered sequence of frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PixelData {
    frames: Vec<Vec<u8>>,
}

impl PixelData {
    /// Create an empty pixel data holder.
    pub fn new() -> Self {
        PixelData::default()
    }

    /// The number of decoded frames.
    #[inline]
    pub fn num_frames(&self) -> usize {
        self.frames.len()
    }

    /// Retrieve the frame at the given index.
    pub fn frame(&self, index: usize) -> Option<&[u8]> {
        self.frames.get(index).map(Vec::as_slice)
    }

    /// Iterate over the decoded frames in order.
    pub fn frames(&self) -> impl Iterator<Item = &[u8]> {
        self.frames.iter().map(Vec::as_slice)
    }

    /// Append the frames carried by a pixel data element.
    ///
    /// Fragmented elements are resolved through the basic offset table:
    /// the first fragment holds 32-bit little endian offsets
    /// into the concatenation of the remaining fragments,
    /// and each offset delimits the start of one frame.
    /// An empty offset table yields a single frame
    /// holding the full concatenation.
    /// Native (non-fragmented) elements contribute
    /// their raw payload as a single frame.
    pub fn extend_from_element(&mut self, element: &DataElement) {
        let fragments = element.fragments();
        if fragments.is_empty() {
            debug!("native pixel data, {} bytes", element.data().len());
            self.frames.push(element.data().to_vec());
            return;
        }

        let offsets: Vec<usize> = fragments[0]
            .chunks_exact(4)
            .map(|chunk| LittleEndian::read_u32(chunk) as usize)
            .collect();
        let concatenated: Vec<u8> = fragments[1..].concat();

        if offsets.is_empty() {
            debug!(
                "empty basic offset table, one frame of {} bytes",
                concatenated.len()
            );
            self.frames.push(concatenated);
            return;
        }

        let total = concatenated.len();
        let mut bounds = offsets;
        bounds.push(total);
        for (start, end) in bounds.iter().tuple_windows() {
            // clamp malformed offsets instead of slicing out of bounds
            let end = (*end).min(total);
            let start = (*start).min(end);
            debug!("frame #{}: {} bytes", self.frames.len(), end - start);
            self.frames.push(concatenated[start..end].to_vec());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmio_core::dictionary::DictionaryEntryBuf;
    use dcmio_core::{Endianness, Length, Tag, Value, VR};

    const PIXEL_DATA: Tag = Tag::new(0x7FE0, 0x0010);

    fn pixel_element(value: Value) -> DataElement {
        let mut entry = DictionaryEntryBuf::unknown(PIXEL_DATA);
        entry.vr = VR::OB;
        DataElement::new(entry, VR::OB, Length::Undefined, Endianness::Little, value)
    }

    #[test]
    fn offset_table_delimits_frames() {
        let bot = vec![0x00, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00];
        let value = Value::PixelSequence(vec![bot, b"AAAA".to_vec(), b"BBBB".to_vec()]);
        let mut pd = PixelData::new();
        pd.extend_from_element(&pixel_element(value));
        assert_eq!(pd.num_frames(), 2);
        assert_eq!(pd.frame(0).unwrap(), b"AAAA");
        assert_eq!(pd.frame(1).unwrap(), b"BBBB");
        assert_eq!(pd.frame(2), None);
    }

    #[test]
    fn empty_offset_table_yields_one_frame() {
        let value = Value::PixelSequence(vec![Vec::new(), b"AAAA".to_vec(), b"BBBB".to_vec()]);
        let mut pd = PixelData::new();
        pd.extend_from_element(&pixel_element(value));
        assert_eq!(pd.num_frames(), 1);
        assert_eq!(pd.frame(0).unwrap(), b"AAAABBBB");
    }

    #[test]
    fn native_payload_is_one_frame() {
        let value = Value::Primitive(vec![0x01, 0x02, 0x03, 0x04]);
        let mut pd = PixelData::new();
        pd.extend_from_element(&pixel_element(value));
        assert_eq!(pd.num_frames(), 1);
        assert_eq!(pd.frame(0).unwrap(), &[0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn malformed_offsets_are_clamped() {
        // second offset runs past the fragment data
        let bot = vec![0x00, 0x00, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00];
        let value = Value::PixelSequence(vec![bot, b"AAAA".to_vec()]);
        let mut pd = PixelData::new();
        pd.extend_from_element(&pixel_element(value));
        assert_eq!(pd.num_frames(), 2);
        assert_eq!(pd.frame(0).unwrap(), b"AAAA");
        assert_eq!(pd.frame(1).unwrap(), b"");
        let total: usize = pd.frames().map(<[u8]>::len).sum();
        assert!(total <= 4);
    }
}
