//! Tag constants for commonly used attributes.

use dcmio_core::Tag;

/// File Meta Information Group Length (0002,0000)
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag::new(0x0002, 0x0000);
/// File Meta Information Version (0002,0001)
pub const FILE_META_INFORMATION_VERSION: Tag = Tag::new(0x0002, 0x0001);
/// Media Storage SOP Class UID (0002,0002)
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag::new(0x0002, 0x0002);
/// Media Storage SOP Instance UID (0002,0003)
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag::new(0x0002, 0x0003);
/// Transfer Syntax UID (0002,0010)
pub const TRANSFER_SYNTAX_UID: Tag = Tag::new(0x0002, 0x0010);
/// Implementation Class UID (0002,0012)
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag::new(0x0002, 0x0012);
/// Implementation Version Name (0002,0013)
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag::new(0x0002, 0x0013);
/// Specific Character Set (0008,0005)
pub const SPECIFIC_CHARACTER_SET: Tag = Tag::new(0x0008, 0x0005);
/// SOP Class UID (0008,0016)
pub const SOP_CLASS_UID: Tag = Tag::new(0x0008, 0x0016);
/// SOP Instance UID (0008,0018)
pub const SOP_INSTANCE_UID: Tag = Tag::new(0x0008, 0x0018);
/// Modality (0008,0060)
pub const MODALITY: Tag = Tag::new(0x0008, 0x0060);
/// Patient's Name (0010,0010)
pub const PATIENT_NAME: Tag = Tag::new(0x0010, 0x0010);
/// Patient ID (0010,0020)
pub const PATIENT_ID: Tag = Tag::new(0x0010, 0x0020);
/// Study Instance UID (0020,000D)
pub const STUDY_INSTANCE_UID: Tag = Tag::new(0x0020, 0x000D);
/// Series Instance UID (0020,000E)
pub const SERIES_INSTANCE_UID: Tag = Tag::new(0x0020, 0x000E);
/// Rows (0028,0010)
pub const ROWS: Tag = Tag::new(0x0028, 0x0010);
/// Columns (0028,0011)
pub const COLUMNS: Tag = Tag::new(0x0028, 0x0011);
/// Pixel Data (7FE0,0010)
pub const PIXEL_DATA: Tag = Tag::new(0x7FE0, 0x0010);
/// Item (FFFE,E000)
pub const ITEM: Tag = Tag::new(0xFFFE, 0xE000);
/// Item Delimitation Item (FFFE,E00D)
pub const ITEM_DELIMITATION_ITEM: Tag = Tag::new(0xFFFE, 0xE00D);
/// Sequence Delimitation Item (FFFE,E0DD)
pub const SEQUENCE_DELIMITATION_ITEM: Tag = Tag::new(0xFFFE, 0xE0DD);
