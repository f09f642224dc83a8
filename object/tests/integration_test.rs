//! End to end decoding tests over hand-crafted byte streams.

use dcmio_core::{Length, Tag, VR};
use dcmio_encoding::BinaryReader;
use dcmio_object::{from_reader, Dicom, FileMetaTable};
use dcmio_parser::ElementReader;

/// 128 zero bytes, the magic code, and a meta group with
/// a single File Meta Information Group Length element of value 0.
fn minimal_file() -> Vec<u8> {
    let mut buf = vec![0u8; 128];
    buf.extend_from_slice(b"DICM");
    buf.extend_from_slice(&[
        0x02, 0x00, 0x00, 0x00, b'U', b'L', 0x04, 0x00, 0x00, 0x00, 0x00, 0x00,
    ]);
    buf
}

#[test]
fn minimal_file_with_preamble() {
    let obj = from_reader(&minimal_file()[..]).unwrap();
    assert_eq!(obj.preamble(), &[0u8; 128]);
    assert_eq!(obj.meta().len(), 1);
    let e = obj.element(Tag::new(0x0002, 0x0000)).unwrap();
    assert_eq!(e.vr(), VR::UL);
    assert_eq!(e.to_uint32().unwrap(), 0);
    assert!(obj.dataset().is_empty());
    assert_eq!(obj.pixel_data().num_frames(), 0);
}

#[test]
fn preamble_content_is_preserved() {
    let mut buf = minimal_file();
    buf[..4].copy_from_slice(b"ABCD");
    let obj = from_reader(&buf[..]).unwrap();
    assert_eq!(&obj.preamble()[..4], b"ABCD");
    assert!(obj.preamble()[4..].iter().all(|&b| b == 0));
}

#[test]
fn implicit_little_endian_without_preamble() {
    // (0010,0010), length 8, "Smith^J " with a trailing pad
    let raw: &[u8] = &[
        0x10, 0x00, 0x10, 0x00, 0x08, 0x00, 0x00, 0x00, b'S', b'm', b'i', b't', b'h', b'^', b'J',
        b' ',
    ];
    let obj = from_reader(raw).unwrap();
    assert_eq!(obj.preamble(), &[0u8; 128]);
    assert!(obj.meta().is_empty());
    let e = obj.element(Tag::new(0x0010, 0x0010)).unwrap();
    assert_eq!(e.vr(), VR::PN);
    assert_eq!(e.name(), "PatientName");
    assert_eq!(e.length(), Length::Defined(7));
    assert_eq!(e.to_str().unwrap(), "Smith^J");
}

#[test]
fn latin1_text_is_reencoded_to_utf8() {
    #[rustfmt::skip]
    let raw: &[u8] = &[
        // (0008,0005) CS, length 10, "ISO_IR 100"
        0x08, 0x00, 0x05, 0x00, b'C', b'S', 0x0A, 0x00,
        b'I', b'S', b'O', b'_', b'I', b'R', b' ', b'1', b'0', b'0',
        // (0010,0010) PN, length 6, "Äoe" in Latin-1 followed by pad spaces
        0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x06, 0x00,
        0xC4, 0x6F, 0x65, 0x20, 0x20, 0x20,
    ];
    let obj = from_reader(raw).unwrap();
    assert_eq!(obj.character_set().code(), "ISO_IR 100");
    let e = obj.element(Tag::new(0x0010, 0x0010)).unwrap();
    assert_eq!(e.to_str().unwrap(), "Äoe");
    // the stored payload itself is valid UTF-8
    assert!(std::str::from_utf8(e.data()).is_ok());
}

#[test]
fn last_character_set_value_applies() {
    #[rustfmt::skip]
    let raw: &[u8] = &[
        // (0008,0005) CS, length 22, "ISO_IR 100\ISO_IR 144 " (pad space)
        0x08, 0x00, 0x05, 0x00, b'C', b'S', 0x16, 0x00,
        b'I', b'S', b'O', b'_', b'I', b'R', b' ', b'1', b'0', b'0', b'\\',
        b'I', b'S', b'O', b'_', b'I', b'R', b' ', b'1', b'4', b'4', b' ',
        // (0010,0010) PN, length 4, "Иван" in ISO-8859-5
        0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x04, 0x00,
        0xB8, 0xD2, 0xD0, 0xDD,
    ];
    let obj = from_reader(raw).unwrap();
    assert_eq!(obj.character_set().code(), "ISO_IR 144");
    let e = obj.element(Tag::new(0x0010, 0x0010)).unwrap();
    assert_eq!(e.to_str().unwrap(), "Иван");
}

#[test]
fn unrecognized_character_set_falls_back_to_default() {
    #[rustfmt::skip]
    let raw: &[u8] = &[
        0x08, 0x00, 0x05, 0x00, b'C', b'S', 0x0A, 0x00,
        b'I', b'S', b'O', b'_', b'I', b'R', b' ', b'9', b'9', b'9',
    ];
    let obj = from_reader(raw).unwrap();
    assert_eq!(obj.character_set().code(), "Default");
}

#[test]
fn nested_sequence_of_two_items() {
    #[rustfmt::skip]
    let raw: &[u8] = &[
        // (0040,0275) SQ, undefined length (implicit VR little endian)
        0x40, 0x00, 0x75, 0x02, 0xFF, 0xFF, 0xFF, 0xFF,
        // item, undefined length
        0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF,
        //   (0040,A040) length 4, "TEXT"
        0x40, 0x00, 0x40, 0xA0, 0x04, 0x00, 0x00, 0x00, b'T', b'E', b'X', b'T',
        // item delimitation
        0xFE, 0xFF, 0x0D, 0xE0, 0x00, 0x00, 0x00, 0x00,
        // item, undefined length
        0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF,
        //   (0040,A040) length 4, "TEXT"
        0x40, 0x00, 0x40, 0xA0, 0x04, 0x00, 0x00, 0x00, b'T', b'E', b'X', b'T',
        // item delimitation
        0xFE, 0xFF, 0x0D, 0xE0, 0x00, 0x00, 0x00, 0x00,
        // sequence delimitation
        0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
    ];
    let obj = from_reader(raw).unwrap();
    let e = obj.element(Tag::new(0x0040, 0x0275)).unwrap();
    assert_eq!(e.vr(), VR::SQ);
    assert_eq!(e.vm(), "1");
    let items = e.items();
    assert_eq!(items.len(), 2);
    for item in items {
        assert_eq!(item.len(), 1);
        let inner = item.element(Tag::new(0x0040, 0xA040)).unwrap();
        assert_eq!(inner.to_str().unwrap(), "TEXT");
        // an element holds data or items, never both
        assert!(inner.items().is_empty());
    }
}

#[test]
fn encapsulated_pixel_data_frames() {
    #[rustfmt::skip]
    let raw: &[u8] = &[
        // (7FE0,0010) OB, undefined length
        0xE0, 0x7F, 0x10, 0x00, b'O', b'B', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        // basic offset table, offsets 0 and 4
        0xFE, 0xFF, 0x00, 0xE0, 0x08, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00,
        // fragment "AAAA"
        0xFE, 0xFF, 0x00, 0xE0, 0x04, 0x00, 0x00, 0x00, b'A', b'A', b'A', b'A',
        // fragment "BBBB"
        0xFE, 0xFF, 0x00, 0xE0, 0x04, 0x00, 0x00, 0x00, b'B', b'B', b'B', b'B',
        // sequence delimitation
        0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
    ];
    let obj = from_reader(raw).unwrap();
    // pixel data is routed to the frame list, not the data set
    assert!(obj.element(Tag::new(0x7FE0, 0x0010)).is_none());
    let pd = obj.pixel_data();
    assert_eq!(pd.num_frames(), 2);
    assert_eq!(pd.frame(0).unwrap(), b"AAAA");
    assert_eq!(pd.frame(1).unwrap(), b"BBBB");
}

#[test]
fn native_pixel_data_is_a_single_frame() {
    #[rustfmt::skip]
    let raw: &[u8] = &[
        // (7FE0,0010) OW, defined length 8
        0xE0, 0x7F, 0x10, 0x00, b'O', b'W', 0x00, 0x00, 0x08, 0x00, 0x00, 0x00,
        0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x00,
    ];
    let obj = from_reader(raw).unwrap();
    let pd = obj.pixel_data();
    assert_eq!(pd.num_frames(), 1);
    // the payload is carried byte for byte, trailing zero included
    assert_eq!(
        pd.frame(0).unwrap(),
        &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x00]
    );
}

#[test]
fn encoding_detection_round_trip() {
    let mut elr = ElementReader::new(BinaryReader::new(
        &[][..],
        dcmio_core::Endianness::Little,
    ));
    elr.determine_encoding([0x08, 0x00, 0x05, 0x00, 0x43, 0x53]);
    assert!(elr.is_little_endian());
    assert!(!elr.is_implicit_vr());
}

#[test]
fn explicit_big_endian_data_set() {
    #[rustfmt::skip]
    let raw: &[u8] = &[
        // (0028,0010) US, length 2, value 0x0200, big endian
        0x00, 0x28, 0x00, 0x10, b'U', b'S', 0x00, 0x02, 0x02, 0x00,
        // (0028,0011) US, length 2, value 0x0100
        0x00, 0x28, 0x00, 0x11, b'U', b'S', 0x00, 0x02, 0x01, 0x00,
    ];
    let obj = from_reader(raw).unwrap();
    let rows = obj.element(Tag::new(0x0028, 0x0010)).unwrap();
    assert_eq!(rows.to_uint16().unwrap(), 0x0200);
    let columns = obj.element(Tag::new(0x0028, 0x0011)).unwrap();
    assert_eq!(columns.to_uint16().unwrap(), 0x0100);
}

#[test]
fn truncated_stream_is_an_error() {
    // element header declares 16 bytes but the stream ends early
    let raw: &[u8] = &[
        0x10, 0x00, 0x10, 0x00, 0x10, 0x00, 0x00, 0x00, b'S', b'm',
    ];
    assert!(from_reader(raw).is_err());
}

#[test]
fn written_meta_group_parses_back() {
    let table = FileMetaTable::builder()
        .media_storage_sop_instance_uid("1.2.276.0.7230010.3.1.4.8323329.99")
        .build()
        .unwrap();
    let mut buf = Vec::new();
    table.write_to(&mut buf).unwrap();

    let obj = Dicom::from_reader(&buf[..]).unwrap();
    assert_eq!(obj.meta().len(), 7);
    let e = obj.element(Tag::new(0x0002, 0x0003)).unwrap();
    assert_eq!(e.to_str().unwrap(), "1.2.276.0.7230010.3.1.4.8323329.99");
    let ts = obj.element(Tag::new(0x0002, 0x0010)).unwrap();
    assert_eq!(ts.to_str().unwrap(), dcmio_dictionary::uids::EXPLICIT_VR_LITTLE_ENDIAN);
    // the declared length covers exactly the elements after it
    let declared = obj.element(Tag::new(0x0002, 0x0000)).unwrap();
    assert_eq!(declared.to_uint32().unwrap() as usize, buf.len() - 144);
    assert!(obj.dataset().is_empty());
}

#[test]
fn data_set_encoding_is_detected_not_trusted() {
    // the meta group declares Explicit VR Little Endian,
    // but the data set which follows is implicit
    let table = FileMetaTable::builder()
        .media_storage_sop_instance_uid("1.2.3.4")
        .build()
        .unwrap();
    let mut buf = Vec::new();
    table.write_to(&mut buf).unwrap();
    // (0008,0060), length 2, "MR", implicit VR little endian
    buf.extend_from_slice(&[
        0x08, 0x00, 0x60, 0x00, 0x02, 0x00, 0x00, 0x00, b'M', b'R',
    ]);

    let obj = from_reader(&buf[..]).unwrap();
    let e = obj.element(Tag::new(0x0008, 0x0060)).unwrap();
    assert_eq!(e.vr(), VR::CS);
    assert_eq!(e.to_str().unwrap(), "MR");
}

#[test]
fn empty_offset_table_concatenates_fragments() {
    #[rustfmt::skip]
    let raw: &[u8] = &[
        // (7FE0,0010) OB, undefined length
        0xE0, 0x7F, 0x10, 0x00, b'O', b'B', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        // basic offset table, zero length
        0xFE, 0xFF, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x00,
        // fragment "AAAA"
        0xFE, 0xFF, 0x00, 0xE0, 0x04, 0x00, 0x00, 0x00, b'A', b'A', b'A', b'A',
        // fragment "BBBB"
        0xFE, 0xFF, 0x00, 0xE0, 0x04, 0x00, 0x00, 0x00, b'B', b'B', b'B', b'B',
        // sequence delimitation
        0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
    ];
    let obj = from_reader(raw).unwrap();
    let pd = obj.pixel_data();
    assert_eq!(pd.num_frames(), 1);
    assert_eq!(pd.frame(0).unwrap(), b"AAAABBBB");
}

#[test]
fn empty_stream_decodes_to_empty_object() {
    let obj = from_reader(&[][..]).unwrap();
    assert!(obj.meta().is_empty());
    assert!(obj.dataset().is_empty());
    assert_eq!(obj.preamble(), &[0u8; 128]);
    assert_eq!(obj.character_set().code(), "Default");
}
