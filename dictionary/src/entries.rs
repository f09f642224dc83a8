//! Data element dictionary entries.
// Automatically generated from the standard's XML source. Edit at your own risk.

use dcmio_core::dictionary::DictionaryEntryRef;
use dcmio_core::Tag;
use dcmio_core::VR::*;

/// The full list of standard attribute entries indexed by the registry.
#[rustfmt::skip]
pub const ENTRIES: &[DictionaryEntryRef<'static>] = &[
    // File Meta Elements
    DictionaryEntryRef { tag: Tag::new(0x0002, 0x0000), alias: "FileMetaInformationGroupLength", name: "File Meta Information Group Length", vr: UL, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0002, 0x0001), alias: "FileMetaInformationVersion", name: "File Meta Information Version", vr: OB, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0002, 0x0002), alias: "MediaStorageSOPClassUID", name: "Media Storage SOP Class UID", vr: UI, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0002, 0x0003), alias: "MediaStorageSOPInstanceUID", name: "Media Storage SOP Instance UID", vr: UI, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0002, 0x0010), alias: "TransferSyntaxUID", name: "Transfer Syntax UID", vr: UI, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0002, 0x0012), alias: "ImplementationClassUID", name: "Implementation Class UID", vr: UI, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0002, 0x0013), alias: "ImplementationVersionName", name: "Implementation Version Name", vr: SH, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0002, 0x0016), alias: "SourceApplicationEntityTitle", name: "Source Application Entity Title", vr: AE, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0002, 0x0100), alias: "PrivateInformationCreatorUID", name: "Private Information Creator UID", vr: UI, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0002, 0x0102), alias: "PrivateInformation", name: "Private Information", vr: OB, vm: "1", retired: false },
    // Data Elements
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x0001), alias: "LengthToEnd", name: "Length to End", vr: UL, vm: "1", retired: true },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x0005), alias: "SpecificCharacterSet", name: "Specific Character Set", vr: CS, vm: "1-n", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x0008), alias: "ImageType", name: "Image Type", vr: CS, vm: "2-n", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x0012), alias: "InstanceCreationDate", name: "Instance Creation Date", vr: DA, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x0013), alias: "InstanceCreationTime", name: "Instance Creation Time", vr: TM, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x0014), alias: "InstanceCreatorUID", name: "Instance Creator UID", vr: UI, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x0016), alias: "SOPClassUID", name: "SOP Class UID", vr: UI, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x0018), alias: "SOPInstanceUID", name: "SOP Instance UID", vr: UI, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x0020), alias: "StudyDate", name: "Study Date", vr: DA, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x0021), alias: "SeriesDate", name: "Series Date", vr: DA, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x0022), alias: "AcquisitionDate", name: "Acquisition Date", vr: DA, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x0023), alias: "ContentDate", name: "Content Date", vr: DA, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x0030), alias: "StudyTime", name: "Study Time", vr: TM, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x0031), alias: "SeriesTime", name: "Series Time", vr: TM, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x0032), alias: "AcquisitionTime", name: "Acquisition Time", vr: TM, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x0033), alias: "ContentTime", name: "Content Time", vr: TM, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x0050), alias: "AccessionNumber", name: "Accession Number", vr: SH, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x0060), alias: "Modality", name: "Modality", vr: CS, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x0064), alias: "ConversionType", name: "Conversion Type", vr: CS, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x0070), alias: "Manufacturer", name: "Manufacturer", vr: LO, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x0080), alias: "InstitutionName", name: "Institution Name", vr: LO, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x0081), alias: "InstitutionAddress", name: "Institution Address", vr: ST, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x0090), alias: "ReferringPhysicianName", name: "Referring Physician's Name", vr: PN, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x1010), alias: "StationName", name: "Station Name", vr: SH, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x1030), alias: "StudyDescription", name: "Study Description", vr: LO, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x103E), alias: "SeriesDescription", name: "Series Description", vr: LO, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x103F), alias: "SeriesDescriptionCodeSequence", name: "Series Description Code Sequence", vr: SQ, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x1040), alias: "InstitutionalDepartmentName", name: "Institutional Department Name", vr: LO, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x1048), alias: "PhysiciansOfRecord", name: "Physician(s) of Record", vr: PN, vm: "1-n", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x1050), alias: "PerformingPhysicianName", name: "Performing Physician's Name", vr: PN, vm: "1-n", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x1060), alias: "NameOfPhysiciansReadingStudy", name: "Name of Physician(s) Reading Study", vr: PN, vm: "1-n", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x1070), alias: "OperatorsName", name: "Operators' Name", vr: PN, vm: "1-n", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x1090), alias: "ManufacturerModelName", name: "Manufacturer's Model Name", vr: LO, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x1110), alias: "ReferencedStudySequence", name: "Referenced Study Sequence", vr: SQ, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x1111), alias: "ReferencedPerformedProcedureStepSequence", name: "Referenced Performed Procedure Step Sequence", vr: SQ, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x1115), alias: "ReferencedSeriesSequence", name: "Referenced Series Sequence", vr: SQ, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x1140), alias: "ReferencedImageSequence", name: "Referenced Image Sequence", vr: SQ, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x1150), alias: "ReferencedSOPClassUID", name: "Referenced SOP Class UID", vr: UI, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x1155), alias: "ReferencedSOPInstanceUID", name: "Referenced SOP Instance UID", vr: UI, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x2111), alias: "DerivationDescription", name: "Derivation Description", vr: ST, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x2112), alias: "SourceImageSequence", name: "Source Image Sequence", vr: SQ, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0008, 0x9215), alias: "DerivationCodeSequence", name: "Derivation Code Sequence", vr: SQ, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0010, 0x0010), alias: "PatientName", name: "Patient's Name", vr: PN, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0010, 0x0020), alias: "PatientID", name: "Patient ID", vr: LO, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0010, 0x0021), alias: "IssuerOfPatientID", name: "Issuer of Patient ID", vr: LO, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0010, 0x0030), alias: "PatientBirthDate", name: "Patient's Birth Date", vr: DA, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0010, 0x0032), alias: "PatientBirthTime", name: "Patient's Birth Time", vr: TM, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0010, 0x0040), alias: "PatientSex", name: "Patient's Sex", vr: CS, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0010, 0x1000), alias: "OtherPatientIDs", name: "Other Patient IDs", vr: LO, vm: "1-n", retired: true },
    DictionaryEntryRef { tag: Tag::new(0x0010, 0x1001), alias: "OtherPatientNames", name: "Other Patient Names", vr: PN, vm: "1-n", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0010, 0x1010), alias: "PatientAge", name: "Patient's Age", vr: AS, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0010, 0x1020), alias: "PatientSize", name: "Patient's Size", vr: DS, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0010, 0x1030), alias: "PatientWeight", name: "Patient's Weight", vr: DS, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0010, 0x2160), alias: "EthnicGroup", name: "Ethnic Group", vr: SH, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0010, 0x21B0), alias: "AdditionalPatientHistory", name: "Additional Patient History", vr: LT, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0010, 0x4000), alias: "PatientComments", name: "Patient Comments", vr: LT, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0018, 0x0015), alias: "BodyPartExamined", name: "Body Part Examined", vr: CS, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0018, 0x0020), alias: "ScanningSequence", name: "Scanning Sequence", vr: CS, vm: "1-n", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0018, 0x0021), alias: "SequenceVariant", name: "Sequence Variant", vr: CS, vm: "1-n", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0018, 0x0022), alias: "ScanOptions", name: "Scan Options", vr: CS, vm: "1-n", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0018, 0x0023), alias: "MRAcquisitionType", name: "MR Acquisition Type", vr: CS, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0018, 0x0050), alias: "SliceThickness", name: "Slice Thickness", vr: DS, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0018, 0x0060), alias: "KVP", name: "KVP", vr: DS, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0018, 0x0080), alias: "RepetitionTime", name: "Repetition Time", vr: DS, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0018, 0x0081), alias: "EchoTime", name: "Echo Time", vr: DS, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0018, 0x0083), alias: "NumberOfAverages", name: "Number of Averages", vr: DS, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0018, 0x0084), alias: "ImagingFrequency", name: "Imaging Frequency", vr: DS, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0018, 0x0087), alias: "MagneticFieldStrength", name: "Magnetic Field Strength", vr: DS, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0018, 0x0088), alias: "SpacingBetweenSlices", name: "Spacing Between Slices", vr: DS, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0018, 0x0091), alias: "EchoTrainLength", name: "Echo Train Length", vr: IS, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0018, 0x1000), alias: "DeviceSerialNumber", name: "Device Serial Number", vr: LO, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0018, 0x1020), alias: "SoftwareVersions", name: "Software Versions", vr: LO, vm: "1-n", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0018, 0x1030), alias: "ProtocolName", name: "Protocol Name", vr: LO, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0018, 0x1151), alias: "XRayTubeCurrent", name: "X-Ray Tube Current", vr: IS, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0018, 0x1152), alias: "Exposure", name: "Exposure", vr: IS, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0018, 0x5100), alias: "PatientPosition", name: "Patient Position", vr: CS, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0020, 0x000D), alias: "StudyInstanceUID", name: "Study Instance UID", vr: UI, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0020, 0x000E), alias: "SeriesInstanceUID", name: "Series Instance UID", vr: UI, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0020, 0x0010), alias: "StudyID", name: "Study ID", vr: SH, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0020, 0x0011), alias: "SeriesNumber", name: "Series Number", vr: IS, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0020, 0x0012), alias: "AcquisitionNumber", name: "Acquisition Number", vr: IS, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0020, 0x0013), alias: "InstanceNumber", name: "Instance Number", vr: IS, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0020, 0x0020), alias: "PatientOrientation", name: "Patient Orientation", vr: CS, vm: "2", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0020, 0x0032), alias: "ImagePositionPatient", name: "Image Position (Patient)", vr: DS, vm: "3", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0020, 0x0037), alias: "ImageOrientationPatient", name: "Image Orientation (Patient)", vr: DS, vm: "6", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0020, 0x0052), alias: "FrameOfReferenceUID", name: "Frame of Reference UID", vr: UI, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0020, 0x1040), alias: "PositionReferenceIndicator", name: "Position Reference Indicator", vr: LO, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0020, 0x1041), alias: "SliceLocation", name: "Slice Location", vr: DS, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0020, 0x4000), alias: "ImageComments", name: "Image Comments", vr: LT, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0028, 0x0002), alias: "SamplesPerPixel", name: "Samples per Pixel", vr: US, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0028, 0x0004), alias: "PhotometricInterpretation", name: "Photometric Interpretation", vr: CS, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0028, 0x0006), alias: "PlanarConfiguration", name: "Planar Configuration", vr: US, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0028, 0x0008), alias: "NumberOfFrames", name: "Number of Frames", vr: IS, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0028, 0x0010), alias: "Rows", name: "Rows", vr: US, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0028, 0x0011), alias: "Columns", name: "Columns", vr: US, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0028, 0x0030), alias: "PixelSpacing", name: "Pixel Spacing", vr: DS, vm: "2", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0028, 0x0100), alias: "BitsAllocated", name: "Bits Allocated", vr: US, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0028, 0x0101), alias: "BitsStored", name: "Bits Stored", vr: US, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0028, 0x0102), alias: "HighBit", name: "High Bit", vr: US, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0028, 0x0103), alias: "PixelRepresentation", name: "Pixel Representation", vr: US, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0028, 0x0106), alias: "SmallestImagePixelValue", name: "Smallest Image Pixel Value", vr: US, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0028, 0x0107), alias: "LargestImagePixelValue", name: "Largest Image Pixel Value", vr: US, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0028, 0x1050), alias: "WindowCenter", name: "Window Center", vr: DS, vm: "1-n", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0028, 0x1051), alias: "WindowWidth", name: "Window Width", vr: DS, vm: "1-n", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0028, 0x1052), alias: "RescaleIntercept", name: "Rescale Intercept", vr: DS, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0028, 0x1053), alias: "RescaleSlope", name: "Rescale Slope", vr: DS, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0028, 0x1054), alias: "RescaleType", name: "Rescale Type", vr: LO, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0028, 0x2110), alias: "LossyImageCompression", name: "Lossy Image Compression", vr: CS, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0032, 0x1060), alias: "RequestedProcedureDescription", name: "Requested Procedure Description", vr: LO, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0038, 0x0010), alias: "AdmissionID", name: "Admission ID", vr: LO, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0040, 0x0244), alias: "PerformedProcedureStepStartDate", name: "Performed Procedure Step Start Date", vr: DA, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0040, 0x0245), alias: "PerformedProcedureStepStartTime", name: "Performed Procedure Step Start Time", vr: TM, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0040, 0x0253), alias: "PerformedProcedureStepID", name: "Performed Procedure Step ID", vr: SH, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0040, 0x0254), alias: "PerformedProcedureStepDescription", name: "Performed Procedure Step Description", vr: LO, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0040, 0x0260), alias: "PerformedProtocolCodeSequence", name: "Performed Protocol Code Sequence", vr: SQ, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0040, 0x0275), alias: "RequestAttributesSequence", name: "Request Attributes Sequence", vr: SQ, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0040, 0xA010), alias: "RelationshipType", name: "Relationship Type", vr: CS, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0040, 0xA040), alias: "ValueType", name: "Value Type", vr: CS, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0040, 0xA160), alias: "TextValue", name: "Text Value", vr: UT, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0040, 0xA168), alias: "ConceptCodeSequence", name: "Concept Code Sequence", vr: SQ, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x0040, 0xA730), alias: "ContentSequence", name: "Content Sequence", vr: SQ, vm: "1", retired: false },
    DictionaryEntryRef { tag: Tag::new(0x7FE0, 0x0010), alias: "PixelData", name: "Pixel Data", vr: OW, vm: "1", retired: false },
];
