//! Name-keyed entity registry
//!
//! The host loop owns one `Scene`: entities are loaded into it during setup,
//! instances are registered as they are produced, and collision queries can be
//! made by name. Iteration is ordered by name so frame results are stable.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use super::collision::{self, Contact};
use super::entity::Entity;
use crate::error::{EngineError, Result};

/// Active entities keyed by name
#[derive(Debug, Clone, Default)]
pub struct Scene {
    entities: BTreeMap<String, Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a batch of entities. Stops at the first duplicate name;
    /// entities before it stay registered.
    pub fn load(&mut self, entities: impl IntoIterator<Item = Entity>) -> Result<()> {
        for entity in entities {
            self.insert(entity)?;
        }
        log::info!("Load step complete ({} entities)", self.entities.len());
        Ok(())
    }

    /// Register one entity under its name
    pub fn insert(&mut self, entity: Entity) -> Result<&mut Entity> {
        match self.entities.entry(entity.name().to_string()) {
            Entry::Occupied(slot) => Err(EngineError::DuplicateEntity(slot.key().clone())),
            Entry::Vacant(slot) => {
                log::debug!("Loaded entity '{}'", entity.name());
                Ok(slot.insert(entity))
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Entity> {
        self.entities.get_mut(name)
    }

    /// Lookup that reports unknown names as an error
    pub fn entity(&self, name: &str) -> Result<&Entity> {
        self.get(name)
            .ok_or_else(|| EngineError::UnknownEntity(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entities.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Remove an entity (and its collider). Returns it if it was registered.
    pub fn destroy(&mut self, name: &str) -> Option<Entity> {
        let removed = self.entities.remove(name);
        if removed.is_some() {
            log::debug!("Destroyed entity '{}'", name);
        }
        removed
    }

    /// All entities, ordered by name
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// All entities, mutable, ordered by name
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.values_mut()
    }

    /// Entities in draw order: lower layers first, then by name
    pub fn draw_order(&self) -> Vec<&Entity> {
        let mut ordered: Vec<&Entity> = self.entities.values().collect();
        // values() is already name-sorted and sort_by_key is stable
        ordered.sort_by_key(|e| e.layer());
        ordered
    }

    /// Entities that carry a collider
    pub fn with_colliders(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values().filter(|e| e.has_collider())
    }

    /// Register an instance. A name clash leaves the registry unchanged.
    fn register_instance(&mut self, instance: &Entity) -> bool {
        match self.entities.entry(instance.name().to_string()) {
            Entry::Occupied(_) => {
                log::warn!(
                    "Instance '{}' was not registered: the name is already taken",
                    instance.name()
                );
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(instance.clone());
                true
            }
        }
    }

    /// Instantiate the named entity and register the instance
    ///
    /// Returns a copy of the instance; the registered one is reachable through
    /// `get_mut(instance.name())`. If the generated name is already taken the
    /// instance is returned but not registered.
    pub fn instantiate(&mut self, source: &str) -> Result<Entity> {
        let instance = self
            .get_mut(source)
            .ok_or_else(|| EngineError::UnknownEntity(source.to_string()))?
            .instantiate();
        self.register_instance(&instance);
        Ok(instance)
    }

    /// Instantiate the named entity `count` times and register each instance
    pub fn instantiate_many(&mut self, source: &str, count: usize) -> Result<Vec<Entity>> {
        let instances = self
            .get_mut(source)
            .ok_or_else(|| EngineError::UnknownEntity(source.to_string()))?
            .instantiate_many(count);
        for instance in &instances {
            self.register_instance(instance);
        }
        Ok(instances)
    }

    /// Collision query by name; unknown names never collide
    pub fn is_colliding(&self, a: &str, b: &str) -> bool {
        match (self.get(a), self.get(b)) {
            (Some(ea), Some(eb)) => collision::is_colliding(ea, eb),
            _ => {
                log::trace!("Collision query '{}' vs '{}' skipped: unknown entity", a, b);
                false
            }
        }
    }

    /// Overlap vector by name
    pub fn contact(&self, a: &str, b: &str) -> Option<Contact> {
        collision::contact(self.get(a)?, self.get(b)?)
    }
}
