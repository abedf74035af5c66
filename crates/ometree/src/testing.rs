// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Test fixtures for stores and trees
//!
//! Shared by this crate's tests and by readers/writers downstream that need a
//! realistic tree without parsing a file.

use crate::node::NodeRef;
use crate::schema::{EntityKind, SchemaVersion};
use crate::store::MetadataStore;
use crate::value::Value;

/// Shape of a synthetic acquisition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acquisition {
    pub images: usize,
    pub channels: usize,
    pub planes: usize,
}

impl Default for Acquisition {
    fn default() -> Self {
        Self {
            images: 2,
            channels: 3,
            planes: 4,
        }
    }
}

/// A store populated through the typed setters: one instrument with a laser
/// and a detector, and `shape.images` images each with one Pixels block,
/// `shape.channels` logical channels and `shape.planes` planes.
pub fn populated_store(version: SchemaVersion, shape: Acquisition) -> MetadataStore {
    let mut store = MetadataStore::with_version(version);

    store.set_instrument_id("Instrument:0".to_string(), 0);
    store.set_microscope_manufacturer("Zeiss".to_string(), 0);
    store.set_light_source_id("LightSource:0".to_string(), 0, 0);
    store.set_laser_type("Gas".to_string(), 0, 0);
    store.set_laser_wavelength(488, 0, 0);
    store.set_detector_id("Detector:0".to_string(), 0, 0);
    store.set_detector_type("PMT".to_string(), 0, 0);
    store.set_objective_id("Objective:0".to_string(), 0, 0);
    store.set_objective_immersion("Oil".to_string(), 0, 0);

    for image in 0..shape.images {
        store.set_image_id(format!("Image:{image}"), image);
        store.set_image_name(format!("acquisition {image}"), image);
        store.set_image_instrument_ref(Some("Instrument:0"), image);

        store.set_pixels_id(format!("Pixels:{image}:0"), image, 0);
        store.set_pixels_size_x(512, image, 0);
        store.set_pixels_size_y(512, image, 0);
        store.set_pixels_size_z(1, image, 0);
        store.set_pixels_size_c(shape.channels as i32, image, 0);
        store.set_pixels_size_t(shape.planes as i32, image, 0);
        store.set_pixels_pixel_type("uint16".to_string(), image, 0);
        store.set_pixels_dimension_order("XYZCT".to_string(), image, 0);
        store.set_pixels_big_endian(false, image, 0);

        for channel in 0..shape.channels {
            store.set_logical_channel_id(format!("LogicalChannel:{image}:{channel}"), image, channel);
            store.set_logical_channel_ex_wave(488 + 100 * channel as i32, image, channel);
        }
        for plane in 0..shape.planes {
            store.set_plane_the_z(0, image, 0, plane);
            store.set_plane_the_c(0, image, 0, plane);
            store.set_plane_the_t(plane as i32, image, 0, plane);
        }
    }
    store
}

/// A tree built directly on nodes, the way a parser hands one to
/// [`MetadataStore::set_root`]
pub fn external_tree() -> NodeRef {
    let root = NodeRef::new(EntityKind::Ome);
    let image = root.append_child(EntityKind::Image);
    image.set_attribute("ID", Value::Text("Image:external".into()));
    image.set_attribute("Name", Value::Text("parsed".into()));
    let pixels = image.append_child(EntityKind::Pixels);
    pixels.set_attribute("SizeX", Value::Int(64));
    for t in 0..3 {
        let plane = pixels.append_child(EntityKind::Plane);
        plane.set_attribute("TheT", Value::Int(t));
    }
    root
}

/// A well-formed subtree whose root is not `OME`
pub fn foreign_root() -> NodeRef {
    let image = NodeRef::new(EntityKind::Image);
    image.set_attribute("ID", Value::Text("Image:orphan".into()));
    image
}
