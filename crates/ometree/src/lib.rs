// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Indexed access to OME metadata trees.
//!
//! Every entity in the tree is addressed by its kind plus one index per
//! repeated ancestor (itself included): `Plane` at `[image, pixels, plane]`,
//! `StageLabel` at `[image]`. Getters read without creating anything; setters
//! materialize whatever is missing on the way. A small per-kind cache of the
//! last resolved node makes the usual loop-over-planes pattern cheap.

mod accessors;
mod cache;
mod config;
pub mod enums;
mod error;
mod node;
mod path;
mod reference;
mod resolver;
mod schema;
mod store;
mod tree_format;
mod value;

pub mod testing;

#[cfg(test)]
mod tests;

pub use cache::CacheStats;
pub use config::StoreConfig;
pub use error::{Error, Result};
pub use node::{NodeID, NodeRef};
pub use path::{IndexPath, MAX_DEPTH};
pub use schema::{Cardinality, EntityKind, FieldDef, FieldKind, SchemaVersion, Support, field, fields};
pub use store::MetadataStore;
pub use tree_format::{TreeNode, format_tree, render_tree};
pub use value::{FieldType, Value, ValueType};
