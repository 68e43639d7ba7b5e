//! Identity resolver — raw protocol id to stable instance id.

use std::collections::HashMap;

use rfbridge_domain::instance::InstanceId;

/// Immutable lookup table mapping rtl_433 `id` fields to logical instances.
///
/// Constructed once from startup configuration and never mutated afterwards.
/// A miss is not an error: the caller logs an informational skip and drops
/// the record.
#[derive(Debug, Clone, Default)]
pub struct IdentityResolver {
    map: HashMap<u32, InstanceId>,
}

impl IdentityResolver {
    /// Build a resolver from an explicit mapping table.
    #[must_use]
    pub fn new(map: HashMap<u32, InstanceId>) -> Self {
        Self { map }
    }

    /// Exact-match lookup of a raw device id.
    #[must_use]
    pub fn resolve(&self, raw_id: u32) -> Option<InstanceId> {
        self.map.get(&raw_id).copied()
    }

    /// Number of configured mappings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl FromIterator<(u32, InstanceId)> for IdentityResolver {
    fn from_iter<I: IntoIterator<Item = (u32, InstanceId)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}
