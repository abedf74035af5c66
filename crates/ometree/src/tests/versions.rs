// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::config::StoreConfig;
use crate::node::NodeRef;
use crate::schema::{EntityKind, FieldDef, SchemaVersion, fields};
use crate::store::MetadataStore;
use crate::value::Value;

#[test]
fn test_unsupported_setter_creates_nothing() {
    let mut store = MetadataStore::with_version(SchemaVersion::V2007_06);
    store.set_tiff_data_file_name("a.ome.tif".to_string(), 0, 0, 0);
    store.set_tiff_data_uuid("urn:uuid:0".to_string(), 0, 0, 0);

    assert_eq!(store.image_count(), 0);
    assert_eq!(store.tiff_data_file_name(0, 0, 0), None);

    // Supported siblings on the same entity still work
    store.set_tiff_data_ifd(3, 0, 0, 0);
    assert_eq!(store.tiff_data_ifd(0, 0, 0), Some(3));
    assert_eq!(store.tiff_data_file_name(0, 0, 0), None);
}

#[test]
fn test_unsupported_getter_ignores_stored_attribute() {
    let root = NodeRef::new(EntityKind::Ome);
    let plate = root.append_child(EntityKind::Plate);
    plate.set_attribute("Name", Value::Text("from file".into()));

    let mut store = MetadataStore::with_version(SchemaVersion::V2003FC);
    store.set_root(root).unwrap();
    assert_eq!(store.plate_count(), 1);
    assert_eq!(store.plate_name(0), None);
    assert_eq!(store.get_named(EntityKind::Plate, "Name", &[0]).unwrap(), None);
}

#[test]
fn test_version_specific_fields() {
    let mut old = MetadataStore::with_version(SchemaVersion::V2003FC);
    let mut mid = MetadataStore::with_version(SchemaVersion::V2007_06);
    let mut new = MetadataStore::with_version(SchemaVersion::V2008_02);

    for store in [&mut old, &mut mid, &mut new] {
        store.set_microscope_type("Upright".to_string(), 0);
        store.set_laser_power(10.0, 0, 0);
        store.set_light_source_power(20.0, 0, 1);
        store.set_experimenter_data_directory("/data".to_string(), 0);
    }

    assert_eq!(old.microscope_type(0), None);
    assert_eq!(mid.microscope_type(0).as_deref(), Some("Upright"));
    assert_eq!(new.microscope_type(0).as_deref(), Some("Upright"));

    assert_eq!(old.laser_power(0, 0), Some(10.0));
    assert_eq!(mid.laser_power(0, 0), Some(10.0));
    assert_eq!(new.laser_power(0, 0), None);

    assert_eq!(old.light_source_power(0, 1), None);
    assert_eq!(new.light_source_power(0, 1), Some(20.0));

    assert_eq!(mid.experimenter_data_directory(0).as_deref(), Some("/data"));
    assert_eq!(new.experimenter_data_directory(0), None);
}

#[test]
fn test_untyped_set_of_unsupported_field_is_ok() {
    let mut store = MetadataStore::with_version(SchemaVersion::V2007_06);
    store
        .set_field(&fields::TIFF_DATA_FILE_NAME, Some(Value::Text("x.tif".into())), &[0, 0, 0])
        .unwrap();
    assert_eq!(store.image_count(), 0);
}

#[test]
fn test_version_from_config() {
    let config = StoreConfig::from_yaml_str("schema_version: \"2003-FC\"").unwrap();
    let mut store = MetadataStore::new(config);
    assert_eq!(store.schema_version(), SchemaVersion::V2003FC);

    store.set_plate_name("p".to_string(), 0);
    assert_eq!(store.plate_count(), 0);
}

/// Fields each version's metadata layer leaves unimplemented
static UNSUPPORTED: &[(SchemaVersion, &[&FieldDef])] = &[
    (
        SchemaVersion::V2003FC,
        &[
            &fields::PIXELS_WAVE_START,
            &fields::PLANE_THE_Z,
            &fields::PLANE_THE_C,
            &fields::PLANE_THE_T,
            &fields::PLANE_TIMING_DELTA_T,
            &fields::PLANE_TIMING_EXPOSURE_TIME,
            &fields::STAGE_POSITION_POSITION_X,
            &fields::STAGE_POSITION_POSITION_Y,
            &fields::STAGE_POSITION_POSITION_Z,
            &fields::LOGICAL_CHANNEL_POCKEL_CELL_SETTING,
            &fields::OBJECTIVE_NOMINAL_MAGNIFICATION,
        ],
    ),
    (
        SchemaVersion::V2007_06,
        &[
            &fields::LIGHT_SOURCE_POWER,
            &fields::TIFF_DATA_FILE_NAME,
            &fields::TIFF_DATA_UUID,
        ],
    ),
];

#[test]
fn test_support_table_matches_version_gaps() {
    for (version, unsupported) in UNSUPPORTED {
        for def in *unsupported {
            assert!(
                !def.is_supported(*version),
                "{} should be unsupported in {version}",
                def.qualified_name()
            );
        }
    }

    // Neighbours of the gaps stay available
    assert!(fields::PIXELS_WAVE_INCREMENT.is_supported(SchemaVersion::V2003FC));
    assert!(fields::PIXELS_TIME_INCREMENT.is_supported(SchemaVersion::V2003FC));
    assert!(fields::LOGICAL_CHANNEL_ND_FILTER.is_supported(SchemaVersion::V2003FC));
    assert!(fields::PLANE_THE_Z.is_supported(SchemaVersion::V2007_06));
    assert!(fields::TIFF_DATA_IFD.is_supported(SchemaVersion::V2007_06));
}

#[test]
fn test_2003_plane_and_channel_fields_are_inert() {
    let mut store = MetadataStore::with_version(SchemaVersion::V2003FC);
    store.set_plane_the_z(4, 0, 0, 0);
    store.set_plane_timing_delta_t(0.5, 0, 0, 0);
    store.set_stage_position_position_y(1.0, 0, 0, 0);
    store.set_pixels_wave_start(400, 0, 0);
    store.set_objective_nominal_magnification(63, 0, 0);
    store.set_logical_channel_pockel_cell_setting(2, 0, 0);

    assert_eq!(store.plane_the_z(0, 0, 0), None);
    assert_eq!(store.plane_timing_delta_t(0, 0, 0), None);
    assert_eq!(store.stage_position_position_y(0, 0, 0), None);
    assert_eq!(store.pixels_wave_start(0, 0), None);
    assert_eq!(store.objective_nominal_magnification(0, 0), None);
    assert_eq!(store.logical_channel_pockel_cell_setting(0, 0), None);
    assert_eq!(store.image_count(), 0);
    assert_eq!(store.instrument_count(), 0);

    store.set_pixels_wave_increment(10, 0, 0);
    assert_eq!(store.pixels_wave_increment(0, 0), Some(10));
    assert_eq!(store.plane_count(0, 0), 0);
}

#[test]
fn test_wave_fields_in_later_versions() {
    let mut store = MetadataStore::with_version(SchemaVersion::V2007_06);
    store.set_pixels_wave_start(400, 0, 0);
    store.set_pixels_wave_increment(10, 0, 0);
    assert_eq!(store.pixels_wave_start(0, 0), Some(400));
    assert_eq!(store.pixels_wave_increment(0, 0), Some(10));
}
