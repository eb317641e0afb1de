//! In-memory kit store.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::catalog::Kit;

/// Session-scoped store of declared kits, keyed by kit ID.
///
/// Every operation takes the lock, so the registry can be shared between
/// threads handling different resources. No operation can leave the map
/// half-updated, so a poisoned lock is recovered rather than propagated.
#[derive(Debug, Default)]
pub struct KitRegistry {
    kits: RwLock<HashMap<String, Kit>>,
}

impl KitRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Kit>> {
        self.kits.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Kit>> {
        self.kits.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store a kit under its ID, returning the kit it replaced.
    pub fn store(&self, kit: Kit) -> Option<Kit> {
        debug!("Storing kit in registry: {}", kit.id);
        self.write().insert(kit.id.clone(), kit)
    }

    /// Store a kit only if its ID is not taken yet.
    ///
    /// Returns the kit back when another kit already holds the ID.
    pub fn insert_new(&self, kit: Kit) -> Result<(), Kit> {
        let mut kits = self.write();
        if kits.contains_key(&kit.id) {
            return Err(kit);
        }
        debug!("Registering kit: {}", kit.id);
        kits.insert(kit.id.clone(), kit);
        Ok(())
    }

    /// Replace a kit that is already registered, returning the previous one.
    ///
    /// Returns the kit back when nothing is registered under its ID.
    pub fn replace(&self, kit: Kit) -> Result<Kit, Kit> {
        let mut kits = self.write();
        match kits.get_mut(&kit.id) {
            Some(slot) => {
                debug!("Replacing kit in registry: {}", kit.id);
                Ok(std::mem::replace(slot, kit))
            }
            None => Err(kit),
        }
    }

    /// Look up a kit by ID.
    pub fn fetch(&self, id: &str) -> Option<Kit> {
        debug!("Fetching kit from registry: {}", id);
        self.read().get(id).cloned()
    }

    /// Remove a kit, returning it if it was registered.
    pub fn remove(&self, id: &str) -> Option<Kit> {
        debug!("Removing kit from registry: {}", id);
        self.write().remove(id)
    }

    /// Check whether a kit is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.read().contains_key(id)
    }

    /// Number of registered kits.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// All registered IDs, sorted.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Take a read-consistent view of the registry.
    ///
    /// The view holds the read lock until dropped: writers wait, so
    /// everything read through one view comes from the same registry state.
    pub fn view(&self) -> RegistryView<'_> {
        RegistryView { kits: self.read() }
    }
}

/// A locked, read-only view over a [`KitRegistry`].
pub struct RegistryView<'a> {
    kits: RwLockReadGuard<'a, HashMap<String, Kit>>,
}

impl RegistryView<'_> {
    /// Look up a kit by ID.
    pub fn get(&self, id: &str) -> Option<&Kit> {
        self.kits.get(id)
    }
}
