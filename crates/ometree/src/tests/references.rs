// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::Error;
use crate::schema::{EntityKind, SchemaVersion, fields};
use crate::store::MetadataStore;
use crate::value::Value;

#[test]
fn test_reference_to_existing_target() {
    let mut store = MetadataStore::default();
    store.set_instrument_id("Instrument:0".to_string(), 0);
    store.set_instrument_id("Instrument:1".to_string(), 1);

    store.set_image_instrument_ref(Some("Instrument:1"), 0);
    assert_eq!(store.instrument_count(), 2);
    assert_eq!(store.image_instrument_ref(0).as_deref(), Some("Instrument:1"));

    let target = store
        .follow_reference(&fields::IMAGE_INSTRUMENT, &[0])
        .unwrap()
        .unwrap();
    assert_eq!(Some(target), store.node(EntityKind::Instrument, &[1]));
}

#[test]
fn test_forward_reference_creates_stub() {
    let mut store = MetadataStore::default();
    store.set_image_experimenter_ref(Some("Experimenter:42"), 0);

    assert_eq!(store.image_count(), 1);
    assert_eq!(store.experimenter_count(), 1);
    assert_eq!(store.experimenter_id(0).as_deref(), Some("Experimenter:42"));
    assert_eq!(store.experimenter_last_name(0), None);

    let stub = store.node(EntityKind::Experimenter, &[0]).unwrap();
    assert_eq!(stub.attributes().len(), 1);

    // Filling in the stub later is ordinary field access
    store.set_experimenter_last_name("Swedlow".to_string(), 0);
    let linked = store
        .follow_reference(&fields::IMAGE_EXPERIMENTER, &[0])
        .unwrap()
        .unwrap();
    assert_eq!(
        linked.attribute("LastName"),
        Some(Value::Text("Swedlow".into()))
    );
}

#[test]
fn test_repeated_reference_reuses_stub() {
    let mut store = MetadataStore::default();
    for image in 0..3 {
        store.set_image_group_ref(Some("Group:0"), image);
    }
    assert_eq!(store.group_count(), 1);
    assert_eq!(store.image_count(), 3);
}

#[test]
fn test_inconsistent_ids_leave_orphan_stubs() {
    let mut store = MetadataStore::default();
    store.set_dataset_project_ref(Some("Project:a"), 0);
    store.set_dataset_project_ref(Some("Project:b"), 0);

    assert_eq!(store.project_count(), 2);
    assert_eq!(store.dataset_project_ref(0).as_deref(), Some("Project:b"));
    assert_eq!(
        store.find_by_id(EntityKind::Project, "Project:a"),
        store.node(EntityKind::Project, &[0])
    );
}

#[test]
fn test_reference_from_deep_source() {
    let mut store = MetadataStore::default();
    store.set_well_sample_image_ref(Some("Image:7"), 0, 1, 2);

    assert_eq!(store.plate_count(), 1);
    assert_eq!(store.well_count(0), 2);
    assert_eq!(store.well_sample_count(0, 1), 3);
    assert_eq!(store.image_count(), 1);
    assert_eq!(store.image_id(0).as_deref(), Some("Image:7"));
}

#[test]
fn test_follow_without_link() {
    let mut store = MetadataStore::default();
    assert_eq!(store.follow_reference(&fields::PLATE_SCREEN, &[0]).unwrap(), None);

    store.set_plate_name("plate".to_string(), 0);
    assert_eq!(store.follow_reference(&fields::PLATE_SCREEN, &[0]).unwrap(), None);
}

#[test]
fn test_untyped_reference_entry_points() {
    let mut store = MetadataStore::default();
    store
        .set_field(&fields::EXPERIMENT_EXPERIMENTER, Some(Value::Text("Experimenter:0".into())), &[0])
        .unwrap();
    assert_eq!(store.experimenter_count(), 1);

    store
        .set_reference(&fields::EXPERIMENTER_GROUP, Some("Group:0"), &[0])
        .unwrap();
    assert_eq!(store.experimenter_group_ref(0).as_deref(), Some("Group:0"));

    assert!(matches!(
        store.set_reference(&fields::IMAGE_NAME, Some("Image:0"), &[0]),
        Err(Error::NotAReference { .. })
    ));
    assert!(matches!(
        store.follow_reference(&fields::IMAGE_NAME, &[0]),
        Err(Error::NotAReference { .. })
    ));
}

#[test]
fn test_unsupported_reference_is_ignored() {
    let mut store = MetadataStore::with_version(SchemaVersion::V2003FC);
    store.set_plate_screen_ref(Some("Screen:0"), 0);
    assert_eq!(store.plate_count(), 0);
    assert_eq!(store.screen_count(), 0);
    assert_eq!(store.plate_screen_ref(0), None);
}

#[test]
fn test_reference_to_target_under_instrument() {
    let mut store = MetadataStore::default();
    store.set_instrument_id("Instrument:0".to_string(), 0);
    store.set_instrument_id("Instrument:1".to_string(), 1);
    store.set_detector_id("Detector:0".to_string(), 0, 0);
    store.set_detector_id("Detector:1".to_string(), 1, 0);
    store.set_light_source_id("LightSource:1".to_string(), 1, 0);

    store.set_detector_settings_detector(Some("Detector:1"), 0, 0);
    store.set_light_source_settings_light_source(Some("LightSource:1"), 0, 0);
    store.set_detector_settings_gain(1.5, 0, 0);

    assert_eq!(store.detector_count(0), 1);
    assert_eq!(store.detector_count(1), 1);
    assert_eq!(store.light_source_count(1), 1);
    assert_eq!(store.detector_settings_detector(0, 0).as_deref(), Some("Detector:1"));
    assert_eq!(store.detector_settings_gain(0, 0), Some(1.5));

    let detector = store
        .follow_reference(&fields::DETECTOR_SETTINGS_DETECTOR, &[0, 0])
        .unwrap()
        .unwrap();
    assert_eq!(Some(detector), store.node(EntityKind::Detector, &[1, 0]));
    let light_source = store
        .follow_reference(&fields::LIGHT_SOURCE_SETTINGS_LIGHT_SOURCE, &[0, 0])
        .unwrap()
        .unwrap();
    assert_eq!(Some(light_source), store.node(EntityKind::LightSource, &[1, 0]));
}

#[test]
fn test_nested_stub_goes_under_first_parent() {
    let mut store = MetadataStore::default();
    store.set_instrument_id("Instrument:0".to_string(), 0);
    store.set_instrument_id("Instrument:1".to_string(), 1);

    store.set_detector_settings_detector(Some("Detector:9"), 0, 1);
    assert_eq!(store.detector_count(0), 1);
    assert_eq!(store.detector_count(1), 0);
    assert_eq!(store.detector_id(0, 0).as_deref(), Some("Detector:9"));
    assert_eq!(
        store.find_by_id(EntityKind::Detector, "Detector:9"),
        store.node(EntityKind::Detector, &[0, 0])
    );

    // A second link to the same id finds the stub instead of adding one
    store.set_detector_settings_detector(Some("Detector:9"), 0, 2);
    assert_eq!(store.detector_count(0), 1);
}

#[test]
fn test_nested_stub_creates_missing_parent() {
    let mut store = MetadataStore::default();
    store.set_objective_settings_objective(Some("Objective:0"), 0);

    assert_eq!(store.instrument_count(), 1);
    assert_eq!(store.objective_count(0), 1);
    assert_eq!(store.objective_id(0, 0).as_deref(), Some("Objective:0"));
    assert_eq!(store.objective_settings_objective(0).as_deref(), Some("Objective:0"));
}

#[test]
fn test_settings_reference_unsupported_before_2008() {
    let mut store = MetadataStore::with_version(SchemaVersion::V2007_06);
    store.set_objective_settings_objective(Some("Objective:0"), 0);
    assert_eq!(store.image_count(), 0);
    assert_eq!(store.instrument_count(), 0);

    // DetectorRef exists in every version
    store.set_detector_settings_detector(Some("Detector:0"), 0, 0);
    assert_eq!(store.detector_count(0), 1);
}
