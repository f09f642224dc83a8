//! UID declarations.
// Automatically generated from the standard's XML source. Edit at your own risk.

use dcmio_core::dictionary::UidDictionaryEntryRef;

/// SOP Class: Verification SOP Class
#[rustfmt::skip]
pub const VERIFICATION: &str = "1.2.840.10008.1.1";
/// Transfer Syntax: Implicit VR Little Endian
#[rustfmt::skip]
pub const IMPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2";
/// Transfer Syntax: Explicit VR Little Endian
#[rustfmt::skip]
pub const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";
/// Transfer Syntax: Deflated Explicit VR Little Endian
#[rustfmt::skip]
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1.99";
/// Transfer Syntax: Explicit VR Big Endian (Retired)
#[rustfmt::skip]
pub const EXPLICIT_VR_BIG_ENDIAN: &str = "1.2.840.10008.1.2.2";
/// Transfer Syntax: JPEG Baseline (Process 1)
#[rustfmt::skip]
pub const JPEG_BASELINE_8_BIT: &str = "1.2.840.10008.1.2.4.50";
/// Transfer Syntax: JPEG Extended (Process 2 & 4)
#[rustfmt::skip]
pub const JPEG_EXTENDED_12_BIT: &str = "1.2.840.10008.1.2.4.51";
/// Transfer Syntax: JPEG Lossless, Non-Hierarchical, First-Order Prediction
#[rustfmt::skip]
pub const JPEG_LOSSLESS_SV1: &str = "1.2.840.10008.1.2.4.70";
/// Transfer Syntax: JPEG-LS Lossless Image Compression
#[rustfmt::skip]
pub const JPEG_LS_LOSSLESS: &str = "1.2.840.10008.1.2.4.80";
/// Transfer Syntax: JPEG 2000 Image Compression (Lossless Only)
#[rustfmt::skip]
pub const JPEG_2000_LOSSLESS_ONLY: &str = "1.2.840.10008.1.2.4.90";
/// Transfer Syntax: JPEG 2000 Image Compression
#[rustfmt::skip]
pub const JPEG_2000: &str = "1.2.840.10008.1.2.4.91";
/// Transfer Syntax: RLE Lossless
#[rustfmt::skip]
pub const RLE_LOSSLESS: &str = "1.2.840.10008.1.2.5";
/// SOP Class: Computed Radiography Image Storage
#[rustfmt::skip]
pub const COMPUTED_RADIOGRAPHY_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.1";
/// SOP Class: CT Image Storage
#[rustfmt::skip]
pub const CT_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.2";
/// SOP Class: Ultrasound Multi-frame Image Storage
#[rustfmt::skip]
pub const ULTRASOUND_MULTI_FRAME_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.3.1";
/// SOP Class: MR Image Storage
#[rustfmt::skip]
pub const MR_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.4";
/// SOP Class: Ultrasound Image Storage
#[rustfmt::skip]
pub const ULTRASOUND_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.6.1";
/// SOP Class: Secondary Capture Image Storage
#[rustfmt::skip]
pub const SECONDARY_CAPTURE_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.7";
/// SOP Class: Raw Data Storage
#[rustfmt::skip]
pub const RAW_DATA_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.66";
/// SOP Class: Positron Emission Tomography Image Storage
#[rustfmt::skip]
pub const POSITRON_EMISSION_TOMOGRAPHY_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.128";
/// SOP Class: RT Image Storage
#[rustfmt::skip]
pub const RT_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.1";
/// SOP Class: Digital X-Ray Image Storage - For Presentation
#[rustfmt::skip]
pub const DIGITAL_X_RAY_IMAGE_STORAGE_FOR_PRESENTATION: &str = "1.2.840.10008.5.1.4.1.1.1.1";

/// The full list of UID entries indexed by the registry.
#[rustfmt::skip]
pub const UID_ENTRIES: &[UidDictionaryEntryRef<'static>] = &[
    UidDictionaryEntryRef { uid: VERIFICATION, kind: "SOP Class", name: "Verification SOP Class" },
    UidDictionaryEntryRef { uid: IMPLICIT_VR_LITTLE_ENDIAN, kind: "Transfer Syntax", name: "Implicit VR Little Endian" },
    UidDictionaryEntryRef { uid: EXPLICIT_VR_LITTLE_ENDIAN, kind: "Transfer Syntax", name: "Explicit VR Little Endian" },
    UidDictionaryEntryRef { uid: DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN, kind: "Transfer Syntax", name: "Deflated Explicit VR Little Endian" },
    UidDictionaryEntryRef { uid: EXPLICIT_VR_BIG_ENDIAN, kind: "Transfer Syntax", name: "Explicit VR Big Endian" },
    UidDictionaryEntryRef { uid: JPEG_BASELINE_8_BIT, kind: "Transfer Syntax", name: "JPEG Baseline (Process 1)" },
    UidDictionaryEntryRef { uid: JPEG_EXTENDED_12_BIT, kind: "Transfer Syntax", name: "JPEG Extended (Process 2 & 4)" },
    UidDictionaryEntryRef { uid: JPEG_LOSSLESS_SV1, kind: "Transfer Syntax", name: "JPEG Lossless, Non-Hierarchical, First-Order Prediction" },
    UidDictionaryEntryRef { uid: JPEG_LS_LOSSLESS, kind: "Transfer Syntax", name: "JPEG-LS Lossless Image Compression" },
    UidDictionaryEntryRef { uid: JPEG_2000_LOSSLESS_ONLY, kind: "Transfer Syntax", name: "JPEG 2000 Image Compression (Lossless Only)" },
    UidDictionaryEntryRef { uid: JPEG_2000, kind: "Transfer Syntax", name: "JPEG 2000 Image Compression" },
    UidDictionaryEntryRef { uid: RLE_LOSSLESS, kind: "Transfer Syntax", name: "RLE Lossless" },
    UidDictionaryEntryRef { uid: COMPUTED_RADIOGRAPHY_IMAGE_STORAGE, kind: "SOP Class", name: "Computed Radiography Image Storage" },
    UidDictionaryEntryRef { uid: CT_IMAGE_STORAGE, kind: "SOP Class", name: "CT Image Storage" },
    UidDictionaryEntryRef { uid: ULTRASOUND_MULTI_FRAME_IMAGE_STORAGE, kind: "SOP Class", name: "Ultrasound Multi-frame Image Storage" },
    UidDictionaryEntryRef { uid: MR_IMAGE_STORAGE, kind: "SOP Class", name: "MR Image Storage" },
    UidDictionaryEntryRef { uid: ULTRASOUND_IMAGE_STORAGE, kind: "SOP Class", name: "Ultrasound Image Storage" },
    UidDictionaryEntryRef { uid: SECONDARY_CAPTURE_IMAGE_STORAGE, kind: "SOP Class", name: "Secondary Capture Image Storage" },
    UidDictionaryEntryRef { uid: RAW_DATA_STORAGE, kind: "SOP Class", name: "Raw Data Storage" },
    UidDictionaryEntryRef { uid: POSITRON_EMISSION_TOMOGRAPHY_IMAGE_STORAGE, kind: "SOP Class", name: "Positron Emission Tomography Image Storage" },
    UidDictionaryEntryRef { uid: RT_IMAGE_STORAGE, kind: "SOP Class", name: "RT Image Storage" },
    UidDictionaryEntryRef { uid: DIGITAL_X_RAY_IMAGE_STORAGE_FOR_PRESENTATION, kind: "SOP Class", name: "Digital X-Ray Image Storage - For Presentation" },
];
