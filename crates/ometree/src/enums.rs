// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Enumeration tables for constrained text fields.
//!
//! Each table lists the canonical members in schema order together with the
//! policy applied when an input matches none of them. The policy is declared
//! per enumeration: some schema types name an `Other` member as the catch-all,
//! the rest keep whatever the caller supplied.

use std::borrow::Cow;

/// What to store when a value matches no member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Replace the value with this member
    Default(&'static str),
    /// Keep the caller's value unchanged
    Raw,
}

/// A closed list of allowed text values
#[derive(Debug)]
pub struct Enumeration {
    pub name: &'static str,
    pub members: &'static [&'static str],
    pub fallback: Fallback,
}

impl Enumeration {
    /// Case-insensitive lookup of the canonical member
    pub fn find(&self, value: &str) -> Option<&'static str> {
        self.members
            .iter()
            .copied()
            .find(|member| member.eq_ignore_ascii_case(value))
    }

    /// Returns the value to store for `value`.
    pub fn canonicalize<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if let Some(member) = self.find(value) {
            return Cow::Borrowed(member);
        }
        match self.fallback {
            Fallback::Default(member) => {
                diagnostics::log_debug!(
                    "{value} is not a {enumeration}, storing {member}",
                    value: value,
                    enumeration: self.name,
                    member: member
                );
                Cow::Borrowed(member)
            }
            Fallback::Raw => Cow::Borrowed(value),
        }
    }
}

pub static PIXEL_TYPE: Enumeration = Enumeration {
    name: "PixelType",
    members: &[
        "int8",
        "int16",
        "int32",
        "uint8",
        "uint16",
        "uint32",
        "float",
        "bit",
        "double",
        "complex",
        "double-complex",
    ],
    fallback: Fallback::Raw,
};

pub static DIMENSION_ORDER: Enumeration = Enumeration {
    name: "DimensionOrder",
    members: &["XYZCT", "XYZTC", "XYCTZ", "XYCZT", "XYTCZ", "XYTZC"],
    fallback: Fallback::Raw,
};

pub static IMMERSION: Enumeration = Enumeration {
    name: "Immersion",
    members: &[
        "Oil",
        "Water",
        "WaterDipping",
        "Air",
        "Multi",
        "Glycerol",
        "Other",
    ],
    fallback: Fallback::Default("Other"),
};

pub static CORRECTION: Enumeration = Enumeration {
    name: "Correction",
    members: &[
        "UV",
        "PlanApo",
        "PlanFluor",
        "SuperFluor",
        "VioletCorrected",
        "Achro",
        "Achromat",
        "Fluor",
        "Fl",
        "Fluar",
        "Neofluar",
        "Fluotar",
        "Apo",
        "Other",
    ],
    fallback: Fallback::Default("Other"),
};

pub static DETECTOR_TYPE: Enumeration = Enumeration {
    name: "DetectorType",
    members: &[
        "CCD",
        "IntensifiedCCD",
        "AnalogVideo",
        "PMT",
        "Photodiode",
        "Spectroscopy",
        "LifetimeImaging",
        "CorrelationSpectroscopy",
        "FTIR",
        "EMCCD",
        "APD",
        "CMOS",
        "Other",
    ],
    fallback: Fallback::Default("Other"),
};

pub static LASER_TYPE: Enumeration = Enumeration {
    name: "LaserType",
    members: &[
        "Excimer",
        "Gas",
        "MetalVapor",
        "SolidState",
        "Dye",
        "Semiconductor",
        "FreeElectron",
        "Other",
    ],
    fallback: Fallback::Default("Other"),
};

pub static LASER_MEDIUM: Enumeration = Enumeration {
    name: "LaserMedium",
    members: &[
        "Cu", "Ag", "ArFl", "ArCl", "KrFl", "KrCl", "XeFl", "XeCl", "XeBr", "N", "Ar", "Kr",
        "Xe", "HeNe", "HeCd", "CO", "CO2", "H2O", "HFl", "NdGlass", "NdYAG", "ErGlass",
        "ErYAG", "HoYLF", "HoYAG", "Ruby", "TiSapphire", "Alexandrite", "Rhodamine6G",
        "CoumarinC30", "GaAs", "GaAlAs", "EMinus",
    ],
    fallback: Fallback::Raw,
};

pub static PULSE: Enumeration = Enumeration {
    name: "Pulse",
    members: &["CW", "Single", "QSwitched", "Repetitive", "ModeLocked", "Other"],
    fallback: Fallback::Default("Other"),
};

pub static ARC_TYPE: Enumeration = Enumeration {
    name: "ArcType",
    members: &["Hg", "Xe", "HgXe", "Other"],
    fallback: Fallback::Default("Other"),
};

pub static FILAMENT_TYPE: Enumeration = Enumeration {
    name: "FilamentType",
    members: &["Incandescent", "Halogen", "Other"],
    fallback: Fallback::Default("Other"),
};

pub static ILLUMINATION_TYPE: Enumeration = Enumeration {
    name: "IlluminationType",
    members: &["Transmitted", "Epifluorescence", "Oblique", "NonLinear", "Other"],
    fallback: Fallback::Default("Other"),
};

pub static ACQUISITION_MODE: Enumeration = Enumeration {
    name: "AcquisitionMode",
    members: &[
        "WideField",
        "LaserScanningMicroscopy",
        "LaserScanningConfocal",
        "SpinningDiskConfocal",
        "SlitScanConfocal",
        "MultiPhotonMicroscopy",
        "StructuredIllumination",
        "SingleMoleculeImaging",
        "TotalInternalReflection",
        "FluorescenceLifetime",
        "SpectralImaging",
        "FluorescenceCorrelationSpectroscopy",
        "NearFieldScanningOpticalMicroscopy",
        "SecondHarmonicGenerationImaging",
        "Timelapse",
        "Other",
    ],
    fallback: Fallback::Default("Other"),
};

pub static CONTRAST_METHOD: Enumeration = Enumeration {
    name: "ContrastMethod",
    members: &[
        "Brightfield",
        "Phase",
        "DIC",
        "HoffmanModulation",
        "ObliqueIllumination",
        "PolarizedLight",
        "Darkfield",
        "Fluorescence",
        "Other",
    ],
    fallback: Fallback::Default("Other"),
};

/// Declared without members in the schema; any value passes through.
pub static PHOTOMETRIC_INTERPRETATION: Enumeration = Enumeration {
    name: "PhotometricInterpretation",
    members: &[],
    fallback: Fallback::Raw,
};

pub static EXPERIMENT_TYPE: Enumeration = Enumeration {
    name: "ExperimentType",
    members: &[
        "FP",
        "FRET",
        "TimeLapse",
        "FourDPlus",
        "Screen",
        "Immunocytochemistry",
        "Immunofluorescence",
        "FISH",
        "Electrophysiology",
        "IonImaging",
        "Colocalization",
        "PGIDocumentation",
        "FluorescenceLifetime",
        "SpectralImaging",
        "Photobleaching",
        "Other",
    ],
    fallback: Fallback::Default("Other"),
};

pub static MICROSCOPE_TYPE: Enumeration = Enumeration {
    name: "MicroscopeType",
    members: &[
        "Upright",
        "Inverted",
        "Dissection",
        "Electrophysiology",
        "Other",
    ],
    fallback: Fallback::Default("Other"),
};

pub static MEDIUM: Enumeration = Enumeration {
    name: "Medium",
    members: &["Air", "Oil", "Water", "Glycerol", "Other"],
    fallback: Fallback::Default("Other"),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_match_is_canonical() {
        assert_eq!(PIXEL_TYPE.canonicalize("INT8"), "int8");
        assert_eq!(PIXEL_TYPE.canonicalize("Double-Complex"), "double-complex");
        assert_eq!(IMMERSION.canonicalize("oIL"), "Oil");
        assert_eq!(DETECTOR_TYPE.canonicalize("emccd"), "EMCCD");
    }

    #[test]
    fn test_default_fallback() {
        assert_eq!(IMMERSION.canonicalize("Bogus"), "Other");
        assert_eq!(LASER_TYPE.canonicalize(""), "Other");
    }

    #[test]
    fn test_raw_fallback() {
        assert_eq!(PIXEL_TYPE.canonicalize("rgb24"), "rgb24");
        assert_eq!(DIMENSION_ORDER.canonicalize("ZYX"), "ZYX");
    }

    #[test]
    fn test_empty_enumeration_passes_through() {
        assert_eq!(PHOTOMETRIC_INTERPRETATION.find("RGB"), None);
        assert_eq!(PHOTOMETRIC_INTERPRETATION.canonicalize("RGB"), "RGB");
    }

    #[test]
    fn test_default_members_are_declared() {
        let tables = [
            &IMMERSION,
            &CORRECTION,
            &DETECTOR_TYPE,
            &LASER_TYPE,
            &PULSE,
            &ARC_TYPE,
            &FILAMENT_TYPE,
            &ILLUMINATION_TYPE,
            &ACQUISITION_MODE,
            &CONTRAST_METHOD,
            &EXPERIMENT_TYPE,
            &MICROSCOPE_TYPE,
            &MEDIUM,
        ];
        for table in tables {
            if let Fallback::Default(member) = table.fallback {
                assert!(table.members.contains(&member), "{}", table.name);
            }
        }
    }
}
