// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Static description of the metadata tree shape.
//!
//! The shape is configuration, not computed: every entity kind below the root
//! has exactly one parent kind and one cardinality, so an `EntityKind` is
//! also the identity of the slot it occupies. Fields are declared in
//! [`fields`] together with the schema versions that support them.

use crate::enums::{self, Enumeration};
use crate::error::{Error, Result};
use crate::value::ValueType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Schema versions this store can target
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemaVersion {
    #[serde(rename = "2003-FC")]
    V2003FC,
    #[serde(rename = "2007-06")]
    V2007_06,
    #[default]
    #[serde(rename = "2008-02")]
    V2008_02,
}

impl SchemaVersion {
    pub const ALL: [SchemaVersion; 3] = [
        SchemaVersion::V2003FC,
        SchemaVersion::V2007_06,
        SchemaVersion::V2008_02,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaVersion::V2003FC => "2003-FC",
            SchemaVersion::V2007_06 => "2007-06",
            SchemaVersion::V2008_02 => "2008-02",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            SchemaVersion::V2003FC => 1,
            SchemaVersion::V2007_06 => 2,
            SchemaVersion::V2008_02 => 4,
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SchemaVersion::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownVersion(s.to_string()))
    }
}

/// Set of schema versions supporting a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Support(u8);

impl Support {
    pub const ALL: Support = Support(0b111);

    pub const fn only(versions: &[SchemaVersion]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < versions.len() {
            bits |= versions[i].bit();
            i += 1;
        }
        Support(bits)
    }

    pub const fn contains(self, version: SchemaVersion) -> bool {
        self.0 & version.bit() != 0
    }
}

/// How many instances of a kind a parent may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    Singleton,
    Repeated,
}

macro_rules! entity_kinds {
    ($( $kind:ident = $name:literal under $parent:ident $card:ident ;)*) => {
        /// Record types of the metadata tree
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum EntityKind {
            Ome,
            $( $kind, )*
        }

        impl EntityKind {
            pub const ALL: &'static [EntityKind] = &[EntityKind::Ome, $( EntityKind::$kind, )*];

            /// Element name as it appears on the wire
            pub fn name(self) -> &'static str {
                match self {
                    EntityKind::Ome => "OME",
                    $( EntityKind::$kind => $name, )*
                }
            }

            pub fn parent(self) -> Option<EntityKind> {
                match self {
                    EntityKind::Ome => None,
                    $( EntityKind::$kind => Some(EntityKind::$parent), )*
                }
            }

            pub fn cardinality(self) -> Cardinality {
                match self {
                    EntityKind::Ome => Cardinality::Singleton,
                    $( EntityKind::$kind => Cardinality::$card, )*
                }
            }
        }
    };
}

entity_kinds! {
    Project = "Project" under Ome Repeated;
    Dataset = "Dataset" under Ome Repeated;
    Experiment = "Experiment" under Ome Repeated;
    Image = "Image" under Ome Repeated;
    Instrument = "Instrument" under Ome Repeated;
    Plate = "Plate" under Ome Repeated;
    Screen = "Screen" under Ome Repeated;
    Experimenter = "Experimenter" under Ome Repeated;
    Group = "Group" under Ome Repeated;

    Pixels = "Pixels" under Image Repeated;
    Plane = "Plane" under Pixels Repeated;
    PlaneTiming = "PlaneTiming" under Plane Singleton;
    StagePosition = "StagePosition" under Plane Singleton;
    TiffData = "TiffData" under Pixels Repeated;
    LogicalChannel = "LogicalChannel" under Image Repeated;
    ChannelComponent = "ChannelComponent" under LogicalChannel Repeated;
    DetectorSettings = "DetectorRef" under LogicalChannel Singleton;
    LightSourceSettings = "LightSourceRef" under LogicalChannel Singleton;
    DisplayOptions = "DisplayOptions" under Image Singleton;
    Projection = "Projection" under DisplayOptions Singleton;
    Time = "Time" under DisplayOptions Singleton;
    Roi = "ROI" under DisplayOptions Repeated;
    ImagingEnvironment = "ImagingEnvironment" under Image Singleton;
    StageLabel = "StageLabel" under Image Singleton;
    ObjectiveSettings = "ObjectiveSettings" under Image Singleton;

    Microscope = "Microscope" under Instrument Singleton;
    LightSource = "LightSource" under Instrument Repeated;
    Laser = "Laser" under LightSource Singleton;
    Arc = "Arc" under LightSource Singleton;
    Filament = "Filament" under LightSource Singleton;
    Detector = "Detector" under Instrument Repeated;
    Objective = "Objective" under Instrument Repeated;
    Filter = "Filter" under Instrument Repeated;
    Otf = "OTF" under Instrument Repeated;

    Well = "Well" under Plate Repeated;
    WellSample = "WellSample" under Well Repeated;
    Reagent = "Reagent" under Screen Repeated;
}

impl EntityKind {
    /// Number of indices needed to address one instance: one per repeated
    /// hop from the root, this kind included.
    pub fn depth(self) -> usize {
        usize::from(self.is_repeated()) + self.parent().map_or(0, EntityKind::depth)
    }

    pub fn is_repeated(self) -> bool {
        self.cardinality() == Cardinality::Repeated
    }

    /// Kinds held directly by `self`, in declaration order
    pub fn child_kinds(self) -> impl Iterator<Item = EntityKind> {
        EntityKind::ALL
            .iter()
            .copied()
            .filter(move |kind| kind.parent() == Some(self))
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        EntityKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::UnknownEntity(s.to_string()))
    }
}

/// Storage class of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Scalar(ValueType),
    /// Textual identifier of an entity anywhere in the tree
    Reference(EntityKind),
}

/// One declared field of one entity kind
#[derive(Debug)]
pub struct FieldDef {
    pub entity: EntityKind,
    pub name: &'static str,
    pub kind: FieldKind,
    pub enumeration: Option<&'static Enumeration>,
    pub support: Support,
}

impl FieldDef {
    const fn scalar(entity: EntityKind, name: &'static str, ty: ValueType) -> Self {
        FieldDef {
            entity,
            name,
            kind: FieldKind::Scalar(ty),
            enumeration: None,
            support: Support::ALL,
        }
    }

    pub const fn text(entity: EntityKind, name: &'static str) -> Self {
        Self::scalar(entity, name, ValueType::Text)
    }

    pub const fn int(entity: EntityKind, name: &'static str) -> Self {
        Self::scalar(entity, name, ValueType::Int)
    }

    pub const fn float(entity: EntityKind, name: &'static str) -> Self {
        Self::scalar(entity, name, ValueType::Float)
    }

    pub const fn boolean(entity: EntityKind, name: &'static str) -> Self {
        Self::scalar(entity, name, ValueType::Bool)
    }

    pub const fn bytes(entity: EntityKind, name: &'static str) -> Self {
        Self::scalar(entity, name, ValueType::Bytes)
    }

    pub const fn reference(entity: EntityKind, name: &'static str, target: EntityKind) -> Self {
        FieldDef {
            entity,
            name,
            kind: FieldKind::Reference(target),
            enumeration: None,
            support: Support::ALL,
        }
    }

    pub const fn with_enum(self, enumeration: &'static Enumeration) -> Self {
        FieldDef {
            enumeration: Some(enumeration),
            ..self
        }
    }

    pub const fn supported(self, support: Support) -> Self {
        FieldDef { support, ..self }
    }

    pub fn value_type(&self) -> ValueType {
        match self.kind {
            FieldKind::Scalar(ty) => ty,
            FieldKind::Reference(_) => ValueType::Text,
        }
    }

    pub fn is_supported(&self, version: SchemaVersion) -> bool {
        self.support.contains(version)
    }

    /// `Entity.Field`, for messages
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.entity, self.name)
    }
}

/// Looks up a declared field by entity kind and attribute name
pub fn field(entity: EntityKind, name: &str) -> Option<&'static FieldDef> {
    fields::ALL_FIELDS
        .iter()
        .copied()
        .find(|def| def.entity == entity && def.name == name)
}

macro_rules! field_table {
    ($( $ident:ident = $def:expr ;)*) => {
        $( pub static $ident: FieldDef = $def; )*

        /// Every declared field, in declaration order
        pub static ALL_FIELDS: &[&FieldDef] = &[ $( &$ident, )* ];
    };
}

pub mod fields {
    use super::EntityKind::*;
    use super::{FieldDef, SchemaVersion, Support, enums};

    const NOT_2003: Support = Support::only(&[SchemaVersion::V2007_06, SchemaVersion::V2008_02]);
    const UNTIL_2007: Support = Support::only(&[SchemaVersion::V2003FC, SchemaVersion::V2007_06]);
    const ONLY_2008: Support = Support::only(&[SchemaVersion::V2008_02]);

    field_table! {
        PROJECT_ID = FieldDef::text(Project, "ID");
        PROJECT_NAME = FieldDef::text(Project, "Name");
        PROJECT_DESCRIPTION = FieldDef::text(Project, "Description");

        DATASET_ID = FieldDef::text(Dataset, "ID");
        DATASET_NAME = FieldDef::text(Dataset, "Name");
        DATASET_DESCRIPTION = FieldDef::text(Dataset, "Description");
        DATASET_LOCKED = FieldDef::boolean(Dataset, "Locked");
        DATASET_PROJECT = FieldDef::reference(Dataset, "ProjectRef", Project);

        EXPERIMENT_ID = FieldDef::text(Experiment, "ID");
        EXPERIMENT_DESCRIPTION = FieldDef::text(Experiment, "Description");
        EXPERIMENT_TYPE = FieldDef::text(Experiment, "Type").with_enum(&enums::EXPERIMENT_TYPE);
        EXPERIMENT_EXPERIMENTER = FieldDef::reference(Experiment, "ExperimenterRef", Experimenter);

        EXPERIMENTER_ID = FieldDef::text(Experimenter, "ID");
        EXPERIMENTER_FIRST_NAME = FieldDef::text(Experimenter, "FirstName");
        EXPERIMENTER_LAST_NAME = FieldDef::text(Experimenter, "LastName");
        EXPERIMENTER_EMAIL = FieldDef::text(Experimenter, "Email");
        EXPERIMENTER_INSTITUTION = FieldDef::text(Experimenter, "Institution");
        EXPERIMENTER_DATA_DIRECTORY = FieldDef::text(Experimenter, "DataDirectory").supported(UNTIL_2007);
        EXPERIMENTER_GROUP = FieldDef::reference(Experimenter, "GroupRef", Group);

        GROUP_ID = FieldDef::text(Group, "ID");
        GROUP_NAME = FieldDef::text(Group, "Name");

        IMAGE_ID = FieldDef::text(Image, "ID");
        IMAGE_NAME = FieldDef::text(Image, "Name");
        IMAGE_CREATION_DATE = FieldDef::text(Image, "CreationDate");
        IMAGE_DESCRIPTION = FieldDef::text(Image, "Description");
        IMAGE_EXPERIMENTER = FieldDef::reference(Image, "ExperimenterRef", Experimenter);
        IMAGE_GROUP = FieldDef::reference(Image, "GroupRef", Group);
        IMAGE_INSTRUMENT = FieldDef::reference(Image, "InstrumentRef", Instrument);
        IMAGE_DATASET = FieldDef::reference(Image, "DatasetRef", Dataset);

        PIXELS_ID = FieldDef::text(Pixels, "ID");
        PIXELS_SIZE_X = FieldDef::int(Pixels, "SizeX");
        PIXELS_SIZE_Y = FieldDef::int(Pixels, "SizeY");
        PIXELS_SIZE_Z = FieldDef::int(Pixels, "SizeZ");
        PIXELS_SIZE_C = FieldDef::int(Pixels, "SizeC");
        PIXELS_SIZE_T = FieldDef::int(Pixels, "SizeT");
        PIXELS_PIXEL_TYPE = FieldDef::text(Pixels, "PixelType").with_enum(&enums::PIXEL_TYPE);
        PIXELS_BIG_ENDIAN = FieldDef::boolean(Pixels, "BigEndian");
        PIXELS_DIMENSION_ORDER = FieldDef::text(Pixels, "DimensionOrder").with_enum(&enums::DIMENSION_ORDER);
        PIXELS_PHYSICAL_SIZE_X = FieldDef::float(Pixels, "PhysicalSizeX");
        PIXELS_PHYSICAL_SIZE_Y = FieldDef::float(Pixels, "PhysicalSizeY");
        PIXELS_PHYSICAL_SIZE_Z = FieldDef::float(Pixels, "PhysicalSizeZ");
        PIXELS_TIME_INCREMENT = FieldDef::float(Pixels, "TimeIncrement");
        PIXELS_WAVE_START = FieldDef::int(Pixels, "WaveStart").supported(NOT_2003);
        PIXELS_WAVE_INCREMENT = FieldDef::int(Pixels, "WaveIncrement");

        PLANE_THE_Z = FieldDef::int(Plane, "TheZ").supported(NOT_2003);
        PLANE_THE_C = FieldDef::int(Plane, "TheC").supported(NOT_2003);
        PLANE_THE_T = FieldDef::int(Plane, "TheT").supported(NOT_2003);
        PLANE_HASH_SHA1 = FieldDef::bytes(Plane, "HashSHA1").supported(ONLY_2008);

        PLANE_TIMING_DELTA_T = FieldDef::float(PlaneTiming, "DeltaT").supported(NOT_2003);
        PLANE_TIMING_EXPOSURE_TIME = FieldDef::float(PlaneTiming, "ExposureTime").supported(NOT_2003);

        STAGE_POSITION_POSITION_X = FieldDef::float(StagePosition, "PositionX").supported(NOT_2003);
        STAGE_POSITION_POSITION_Y = FieldDef::float(StagePosition, "PositionY").supported(NOT_2003);
        STAGE_POSITION_POSITION_Z = FieldDef::float(StagePosition, "PositionZ").supported(NOT_2003);

        TIFF_DATA_FIRST_Z = FieldDef::int(TiffData, "FirstZ");
        TIFF_DATA_FIRST_C = FieldDef::int(TiffData, "FirstC");
        TIFF_DATA_FIRST_T = FieldDef::int(TiffData, "FirstT");
        TIFF_DATA_IFD = FieldDef::int(TiffData, "IFD");
        TIFF_DATA_NUM_PLANES = FieldDef::int(TiffData, "NumPlanes");
        TIFF_DATA_FILE_NAME = FieldDef::text(TiffData, "FileName").supported(ONLY_2008);
        TIFF_DATA_UUID = FieldDef::text(TiffData, "UUID").supported(ONLY_2008);

        LOGICAL_CHANNEL_ID = FieldDef::text(LogicalChannel, "ID");
        LOGICAL_CHANNEL_NAME = FieldDef::text(LogicalChannel, "Name");
        LOGICAL_CHANNEL_SAMPLES_PER_PIXEL = FieldDef::int(LogicalChannel, "SamplesPerPixel");
        LOGICAL_CHANNEL_ILLUMINATION_TYPE = FieldDef::text(LogicalChannel, "IlluminationType").with_enum(&enums::ILLUMINATION_TYPE);
        LOGICAL_CHANNEL_PINHOLE_SIZE = FieldDef::float(LogicalChannel, "PinholeSize");
        LOGICAL_CHANNEL_PHOTOMETRIC_INTERPRETATION = FieldDef::text(LogicalChannel, "PhotometricInterpretation").with_enum(&enums::PHOTOMETRIC_INTERPRETATION);
        LOGICAL_CHANNEL_MODE = FieldDef::text(LogicalChannel, "Mode").with_enum(&enums::ACQUISITION_MODE);
        LOGICAL_CHANNEL_CONTRAST_METHOD = FieldDef::text(LogicalChannel, "ContrastMethod").with_enum(&enums::CONTRAST_METHOD);
        LOGICAL_CHANNEL_EX_WAVE = FieldDef::int(LogicalChannel, "ExWave");
        LOGICAL_CHANNEL_EM_WAVE = FieldDef::int(LogicalChannel, "EmWave");
        LOGICAL_CHANNEL_FLUOR = FieldDef::text(LogicalChannel, "Fluor");
        LOGICAL_CHANNEL_ND_FILTER = FieldDef::float(LogicalChannel, "NdFilter");
        LOGICAL_CHANNEL_POCKEL_CELL_SETTING = FieldDef::int(LogicalChannel, "PockelCellSetting").supported(NOT_2003);

        CHANNEL_COMPONENT_INDEX = FieldDef::int(ChannelComponent, "Index");
        CHANNEL_COMPONENT_COLOR_DOMAIN = FieldDef::text(ChannelComponent, "ColorDomain");

        DETECTOR_SETTINGS_DETECTOR = FieldDef::reference(DetectorSettings, "ID", Detector);
        DETECTOR_SETTINGS_OFFSET = FieldDef::float(DetectorSettings, "Offset");
        DETECTOR_SETTINGS_GAIN = FieldDef::float(DetectorSettings, "Gain");

        LIGHT_SOURCE_SETTINGS_LIGHT_SOURCE = FieldDef::reference(LightSourceSettings, "ID", LightSource);
        LIGHT_SOURCE_SETTINGS_ATTENUATION = FieldDef::float(LightSourceSettings, "Attenuation");
        LIGHT_SOURCE_SETTINGS_WAVELENGTH = FieldDef::int(LightSourceSettings, "Wavelength");

        DISPLAY_OPTIONS_ID = FieldDef::text(DisplayOptions, "ID");
        DISPLAY_OPTIONS_ZOOM = FieldDef::float(DisplayOptions, "Zoom");
        PROJECTION_Z_START = FieldDef::int(Projection, "ZStart");
        PROJECTION_Z_STOP = FieldDef::int(Projection, "ZStop");
        TIME_T_START = FieldDef::int(Time, "TStart");
        TIME_T_STOP = FieldDef::int(Time, "TStop");

        ROI_ID = FieldDef::text(Roi, "ID");
        ROI_X0 = FieldDef::int(Roi, "X0");
        ROI_Y0 = FieldDef::int(Roi, "Y0");
        ROI_Z0 = FieldDef::int(Roi, "Z0");
        ROI_T0 = FieldDef::int(Roi, "T0");
        ROI_X1 = FieldDef::int(Roi, "X1");
        ROI_Y1 = FieldDef::int(Roi, "Y1");
        ROI_Z1 = FieldDef::int(Roi, "Z1");
        ROI_T1 = FieldDef::int(Roi, "T1");

        IMAGING_ENVIRONMENT_TEMPERATURE = FieldDef::float(ImagingEnvironment, "Temperature");
        IMAGING_ENVIRONMENT_AIR_PRESSURE = FieldDef::float(ImagingEnvironment, "AirPressure");
        IMAGING_ENVIRONMENT_HUMIDITY = FieldDef::float(ImagingEnvironment, "Humidity");
        IMAGING_ENVIRONMENT_CO2_PERCENT = FieldDef::float(ImagingEnvironment, "CO2Percent");

        STAGE_LABEL_NAME = FieldDef::text(StageLabel, "Name");
        STAGE_LABEL_X = FieldDef::float(StageLabel, "X");
        STAGE_LABEL_Y = FieldDef::float(StageLabel, "Y");
        STAGE_LABEL_Z = FieldDef::float(StageLabel, "Z");

        OBJECTIVE_SETTINGS_CORRECTION_COLLAR = FieldDef::float(ObjectiveSettings, "CorrectionCollar").supported(ONLY_2008);
        OBJECTIVE_SETTINGS_MEDIUM = FieldDef::text(ObjectiveSettings, "Medium").with_enum(&enums::MEDIUM).supported(ONLY_2008);
        OBJECTIVE_SETTINGS_OBJECTIVE = FieldDef::reference(ObjectiveSettings, "ObjectiveRef", Objective).supported(ONLY_2008);
        OBJECTIVE_SETTINGS_REFRACTIVE_INDEX = FieldDef::float(ObjectiveSettings, "RefractiveIndex").supported(ONLY_2008);

        INSTRUMENT_ID = FieldDef::text(Instrument, "ID");

        MICROSCOPE_MANUFACTURER = FieldDef::text(Microscope, "Manufacturer");
        MICROSCOPE_MODEL = FieldDef::text(Microscope, "Model");
        MICROSCOPE_SERIAL_NUMBER = FieldDef::text(Microscope, "SerialNumber");
        MICROSCOPE_TYPE = FieldDef::text(Microscope, "Type").with_enum(&enums::MICROSCOPE_TYPE).supported(NOT_2003);

        LIGHT_SOURCE_ID = FieldDef::text(LightSource, "ID");
        LIGHT_SOURCE_MANUFACTURER = FieldDef::text(LightSource, "Manufacturer");
        LIGHT_SOURCE_MODEL = FieldDef::text(LightSource, "Model");
        LIGHT_SOURCE_SERIAL_NUMBER = FieldDef::text(LightSource, "SerialNumber");
        LIGHT_SOURCE_POWER = FieldDef::float(LightSource, "Power").supported(ONLY_2008);

        LASER_TYPE = FieldDef::text(Laser, "Type").with_enum(&enums::LASER_TYPE);
        LASER_LASER_MEDIUM = FieldDef::text(Laser, "LaserMedium").with_enum(&enums::LASER_MEDIUM);
        LASER_WAVELENGTH = FieldDef::int(Laser, "Wavelength");
        LASER_FREQUENCY_MULTIPLICATION = FieldDef::int(Laser, "FrequencyMultiplication");
        LASER_TUNEABLE = FieldDef::boolean(Laser, "Tuneable");
        LASER_PULSE = FieldDef::text(Laser, "Pulse").with_enum(&enums::PULSE);
        LASER_POWER = FieldDef::float(Laser, "Power").supported(UNTIL_2007);

        ARC_TYPE = FieldDef::text(Arc, "Type").with_enum(&enums::ARC_TYPE);
        ARC_POWER = FieldDef::float(Arc, "Power").supported(UNTIL_2007);
        FILAMENT_TYPE = FieldDef::text(Filament, "Type").with_enum(&enums::FILAMENT_TYPE);
        FILAMENT_POWER = FieldDef::float(Filament, "Power").supported(UNTIL_2007);

        DETECTOR_ID = FieldDef::text(Detector, "ID");
        DETECTOR_MANUFACTURER = FieldDef::text(Detector, "Manufacturer");
        DETECTOR_MODEL = FieldDef::text(Detector, "Model");
        DETECTOR_SERIAL_NUMBER = FieldDef::text(Detector, "SerialNumber");
        DETECTOR_TYPE = FieldDef::text(Detector, "Type").with_enum(&enums::DETECTOR_TYPE);
        DETECTOR_GAIN = FieldDef::float(Detector, "Gain");
        DETECTOR_VOLTAGE = FieldDef::float(Detector, "Voltage");
        DETECTOR_OFFSET = FieldDef::float(Detector, "Offset");

        OBJECTIVE_ID = FieldDef::text(Objective, "ID");
        OBJECTIVE_MANUFACTURER = FieldDef::text(Objective, "Manufacturer");
        OBJECTIVE_MODEL = FieldDef::text(Objective, "Model");
        OBJECTIVE_SERIAL_NUMBER = FieldDef::text(Objective, "SerialNumber");
        OBJECTIVE_CORRECTION = FieldDef::text(Objective, "Correction").with_enum(&enums::CORRECTION);
        OBJECTIVE_IMMERSION = FieldDef::text(Objective, "Immersion").with_enum(&enums::IMMERSION);
        OBJECTIVE_LENS_NA = FieldDef::float(Objective, "LensNA");
        OBJECTIVE_NOMINAL_MAGNIFICATION = FieldDef::int(Objective, "NominalMagnification").supported(NOT_2003);
        OBJECTIVE_CALIBRATED_MAGNIFICATION = FieldDef::float(Objective, "CalibratedMagnification");
        OBJECTIVE_WORKING_DISTANCE = FieldDef::float(Objective, "WorkingDistance");

        FILTER_ID = FieldDef::text(Filter, "ID").supported(ONLY_2008);
        FILTER_MANUFACTURER = FieldDef::text(Filter, "Manufacturer").supported(ONLY_2008);
        FILTER_MODEL = FieldDef::text(Filter, "Model").supported(ONLY_2008);
        FILTER_LOT_NUMBER = FieldDef::text(Filter, "LotNumber").supported(ONLY_2008);
        FILTER_FILTER_WHEEL = FieldDef::text(Filter, "FilterWheel").supported(ONLY_2008);

        OTF_ID = FieldDef::text(Otf, "ID");
        OTF_SIZE_X = FieldDef::int(Otf, "SizeX");
        OTF_SIZE_Y = FieldDef::int(Otf, "SizeY");
        OTF_PIXEL_TYPE = FieldDef::text(Otf, "PixelType").with_enum(&enums::PIXEL_TYPE);
        OTF_PATH = FieldDef::text(Otf, "Path").supported(UNTIL_2007);
        OTF_OPTICAL_AXIS_AVERAGED = FieldDef::boolean(Otf, "OpticalAxisAveraged");

        PLATE_ID = FieldDef::text(Plate, "ID").supported(NOT_2003);
        PLATE_NAME = FieldDef::text(Plate, "Name").supported(NOT_2003);
        PLATE_DESCRIPTION = FieldDef::text(Plate, "Description").supported(NOT_2003);
        PLATE_EXTERNAL_IDENTIFIER = FieldDef::text(Plate, "ExternalIdentifier").supported(NOT_2003);
        PLATE_STATUS = FieldDef::text(Plate, "Status").supported(NOT_2003);
        PLATE_SCREEN = FieldDef::reference(Plate, "ScreenRef", Screen).supported(NOT_2003);

        WELL_ID = FieldDef::text(Well, "ID").supported(NOT_2003);
        WELL_COLUMN = FieldDef::int(Well, "Column").supported(NOT_2003);
        WELL_ROW = FieldDef::int(Well, "Row").supported(NOT_2003);
        WELL_TYPE = FieldDef::text(Well, "Type").supported(NOT_2003);

        WELL_SAMPLE_ID = FieldDef::text(WellSample, "ID").supported(NOT_2003);
        WELL_SAMPLE_INDEX = FieldDef::int(WellSample, "Index").supported(NOT_2003);
        WELL_SAMPLE_POS_X = FieldDef::float(WellSample, "PosX").supported(NOT_2003);
        WELL_SAMPLE_POS_Y = FieldDef::float(WellSample, "PosY").supported(NOT_2003);
        WELL_SAMPLE_TIMEPOINT = FieldDef::int(WellSample, "Timepoint").supported(NOT_2003);
        WELL_SAMPLE_IMAGE = FieldDef::reference(WellSample, "ImageRef", Image).supported(NOT_2003);

        SCREEN_ID = FieldDef::text(Screen, "ID").supported(NOT_2003);
        SCREEN_NAME = FieldDef::text(Screen, "Name").supported(NOT_2003);
        SCREEN_DESCRIPTION = FieldDef::text(Screen, "Description").supported(NOT_2003);
        SCREEN_PROTOCOL_IDENTIFIER = FieldDef::text(Screen, "ProtocolIdentifier").supported(NOT_2003);
        SCREEN_REAGENT_SET_IDENTIFIER = FieldDef::text(Screen, "ReagentSetIdentifier").supported(NOT_2003);
        SCREEN_TYPE = FieldDef::text(Screen, "Type").supported(NOT_2003);

        REAGENT_ID = FieldDef::text(Reagent, "ID").supported(NOT_2003);
        REAGENT_NAME = FieldDef::text(Reagent, "Name").supported(NOT_2003);
        REAGENT_DESCRIPTION = FieldDef::text(Reagent, "Description").supported(NOT_2003);
        REAGENT_IDENTIFIER = FieldDef::text(Reagent, "ReagentIdentifier").supported(NOT_2003);
    }
}
