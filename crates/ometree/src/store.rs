// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! The metadata store: one root, one cache, and the generic field accessors
//! every typed accessor delegates to.

use crate::cache::{CacheStats, LastAccessCache};
use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::node::NodeRef;
use crate::path::IndexPath;
use crate::resolver::Resolver;
use crate::schema::{EntityKind, FieldDef, FieldKind, SchemaVersion};
use crate::value::{FieldType, Value};

/// Builds and reads an OME metadata tree through `(kind, indices)` addresses.
///
/// Getters never create nodes. Setters create whatever is missing on the way
/// to the addressed node, except when handed `None`, which is a no-op.
pub struct MetadataStore {
    root: NodeRef,
    cache: LastAccessCache,
    config: StoreConfig,
}

impl Default for MetadataStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl MetadataStore {
    /// Creates a store holding a fresh, empty root
    pub fn new(config: StoreConfig) -> Self {
        Self {
            root: NodeRef::new(EntityKind::Ome),
            cache: LastAccessCache::new(config.cache_enabled),
            config,
        }
    }

    pub fn with_version(version: SchemaVersion) -> Self {
        Self::new(StoreConfig {
            schema_version: version,
            ..StoreConfig::default()
        })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn schema_version(&self) -> SchemaVersion {
        self.config.schema_version
    }

    /// The live tree, for read-only traversal by a serializer
    pub fn root(&self) -> &NodeRef {
        &self.root
    }

    /// Discards the current tree and starts over with an empty root
    pub fn create_root(&mut self) {
        self.install(NodeRef::new(EntityKind::Ome));
    }

    /// Installs an externally built tree.
    ///
    /// Fails without touching the current root if `root` is not an `OME` node.
    pub fn set_root(&mut self, root: NodeRef) -> Result<()> {
        let kind = root.kind();
        if kind != EntityKind::Ome {
            diagnostics::log_warn!("rejected {kind} as metadata root", kind: kind.name());
            return Err(Error::root_type_mismatch(kind));
        }
        self.install(root);
        Ok(())
    }

    fn install(&mut self, root: NodeRef) {
        self.root = root;
        self.cache.clear();
        diagnostics::log_info!(
            "installed metadata root {id} ({version})",
            id: self.root.id().to_string(),
            version: self.config.schema_version.as_str()
        );
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.root, &self.cache)
    }

    fn locate(&self, kind: EntityKind, indices: &[usize], create: bool) -> Option<NodeRef> {
        let path = IndexPath::new(indices)?;
        self.resolver().resolve(kind, &path, create)
    }

    /// The node at `indices`, if it exists. Never creates anything.
    pub fn node(&self, kind: EntityKind, indices: &[usize]) -> Option<NodeRef> {
        self.locate(kind, indices, false)
    }

    /// The node at `indices`, creating it and any missing ancestors
    pub fn ensure_node(&mut self, kind: EntityKind, indices: &[usize]) -> Result<NodeRef> {
        check_arity(kind, indices)?;
        self.locate(kind, indices, true)
            .ok_or_else(|| Error::path_arity(kind, indices.len()))
    }

    /// How many `kind` children exist under the parent at `parent_indices`.
    ///
    /// Zero when the parent does not exist.
    pub fn count(&self, kind: EntityKind, parent_indices: &[usize]) -> usize {
        IndexPath::new(parent_indices).map_or(0, |path| self.resolver().count(kind, &path))
    }

    /// Same answer as [`count`](Self::count), found by probing indices until
    /// one is absent. Bounded by `max_probe` from the configuration.
    pub fn probe_count(&self, kind: EntityKind, parent_indices: &[usize]) -> usize {
        IndexPath::new(parent_indices).map_or(0, |path| {
            self.resolver()
                .probe_count(kind, &path, self.config.max_probe)
        })
    }

    /// Untyped read of any declared field
    pub fn get_field(&self, field: &FieldDef, indices: &[usize]) -> Result<Option<Value>> {
        check_arity(field.entity, indices)?;
        Ok(self.read(field, indices))
    }

    /// Untyped write of any declared field.
    ///
    /// Reference fields go through reference resolution, as with
    /// [`set_reference`](Self::set_reference).
    pub fn set_field(&mut self, field: &FieldDef, value: Option<Value>, indices: &[usize]) -> Result<()> {
        check_arity(field.entity, indices)?;
        let Some(value) = value else {
            return Ok(());
        };
        if value.value_type() != field.value_type() {
            return Err(Error::ValueType {
                field: field.qualified_name(),
                expected: field.value_type(),
                found: value.value_type(),
            });
        }
        match (field.kind, value) {
            (FieldKind::Reference(_), Value::Text(id)) => self.link(field, &id, indices),
            (_, value) => self.write(field, value, indices),
        }
        Ok(())
    }

    /// Untyped access by names, for callers driven by external data
    pub fn get_named(&self, kind: EntityKind, name: &str, indices: &[usize]) -> Result<Option<Value>> {
        let field = crate::schema::field(kind, name).ok_or_else(|| Error::unknown_field(kind, name))?;
        self.get_field(field, indices)
    }

    pub fn set_named(&mut self, kind: EntityKind, name: &str, value: Option<Value>, indices: &[usize]) -> Result<()> {
        let field = crate::schema::field(kind, name).ok_or_else(|| Error::unknown_field(kind, name))?;
        self.set_field(field, value, indices)
    }

    pub(crate) fn get_typed<T: FieldType>(&self, field: &FieldDef, indices: &[usize]) -> Option<T> {
        debug_assert_eq!(field.value_type(), T::TYPE, "{}", field.qualified_name());
        self.read(field, indices).as_ref().and_then(T::from_value)
    }

    pub(crate) fn set_typed<T: FieldType>(&mut self, field: &FieldDef, value: Option<T>, indices: &[usize]) {
        debug_assert_eq!(field.value_type(), T::TYPE, "{}", field.qualified_name());
        if let Some(value) = value {
            self.write(field, value.into_value(), indices);
        }
    }

    pub(crate) fn read(&self, field: &FieldDef, indices: &[usize]) -> Option<Value> {
        if !field.is_supported(self.config.schema_version) {
            return None;
        }
        self.node(field.entity, indices)?.attribute(field.name)
    }

    fn write(&mut self, field: &FieldDef, value: Value, indices: &[usize]) {
        if !self.accepts(field) {
            return;
        }
        let Some(node) = self.locate(field.entity, indices, true) else {
            return;
        };
        let value = match (field.enumeration, value) {
            (Some(enumeration), Value::Text(text)) => {
                Value::Text(enumeration.canonicalize(&text).into_owned())
            }
            (_, value) => value,
        };
        node.set_attribute(field.name, value);
    }

    /// Whether writes to `field` take effect under the configured version
    pub(crate) fn accepts(&self, field: &FieldDef) -> bool {
        let version = self.config.schema_version;
        if field.is_supported(version) {
            return true;
        }
        diagnostics::log_debug!(
            "{field} unsupported for schema version {version}, ignoring",
            field: field.qualified_name(),
            version: version.as_str()
        );
        false
    }

    pub(crate) fn locate_for_write(&self, kind: EntityKind, indices: &[usize]) -> Option<NodeRef> {
        self.locate(kind, indices, true)
    }
}

fn check_arity(kind: EntityKind, indices: &[usize]) -> Result<()> {
    if indices.len() == kind.depth() {
        Ok(())
    } else {
        Err(Error::path_arity(kind, indices.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::fields;

    #[test]
    fn test_get_field_checks_arity() {
        let store = MetadataStore::default();
        let err = store.get_field(&fields::PIXELS_SIZE_X, &[0]).unwrap_err();
        assert!(matches!(
            err,
            Error::PathArity {
                kind: EntityKind::Pixels,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_set_field_checks_value_type() {
        let mut store = MetadataStore::default();
        let err = store
            .set_field(&fields::PIXELS_SIZE_X, Some(Value::Text("512".into())), &[0, 0])
            .unwrap_err();
        assert!(matches!(err, Error::ValueType { .. }));
        assert_eq!(store.count(EntityKind::Image, &[]), 0);
    }

    #[test]
    fn test_named_access() {
        let mut store = MetadataStore::default();
        store
            .set_named(EntityKind::Pixels, "SizeX", Some(Value::Int(512)), &[0, 0])
            .unwrap();
        assert_eq!(
            store.get_named(EntityKind::Pixels, "SizeX", &[0, 0]).unwrap(),
            Some(Value::Int(512))
        );
        assert!(matches!(
            store.get_named(EntityKind::Pixels, "Bogus", &[0, 0]),
            Err(Error::UnknownField { .. })
        ));
    }

    #[test]
    fn test_ensure_node() {
        let mut store = MetadataStore::default();
        let well = store.ensure_node(EntityKind::Well, &[0, 3]).unwrap();
        assert_eq!(well.kind(), EntityKind::Well);
        assert_eq!(store.count(EntityKind::Well, &[0]), 4);
        assert!(store.ensure_node(EntityKind::Well, &[0]).is_err());
    }
}
