//! Append-only entity graph with parent→children indexing.

use std::collections::HashMap;

use limeforge_foundation::{EntityKey, Error, Result};

use crate::entity::Entity;
use crate::schema::{ClassSchema, SchemaRegistry};

/// Append-only entity storage plus the relationship queries the compiler
/// consumes.
///
/// Inserting an entity validates its class against the registry, assigns it
/// a stable [`EntityKey`], and — when the class declares a parent field that
/// is set — indexes the entity under `(parent, class)` in insertion order.
/// `immediate_children` therefore returns direct children only, never
/// transitive descendants.
#[derive(Clone, Debug)]
pub struct EntityGraph {
    registry: SchemaRegistry,
    entities: Vec<Entity>,
    children: HashMap<(EntityKey, String), Vec<EntityKey>>,
}

impl EntityGraph {
    /// Creates an empty graph over the given registry.
    #[must_use]
    pub fn new(registry: SchemaRegistry) -> Self {
        Self {
            registry,
            entities: Vec::new(),
            children: HashMap::new(),
        }
    }

    /// Returns the schema registry.
    #[must_use]
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Inserts an entity, returning its assigned key.
    ///
    /// # Errors
    /// Returns an error if the entity's class is not registered.
    pub fn insert(&mut self, entity: Entity) -> Result<EntityKey> {
        let schema = self.registry.class(entity.class())?;
        let key = EntityKey::new(self.entities.len() as u64);

        if let Some(parent_schema) = &schema.parent {
            if let Some(parent) = entity.reference(&parent_schema.field) {
                self.children
                    .entry((parent, entity.class().to_string()))
                    .or_default()
                    .push(key);
            }
        }

        self.entities.push(entity);
        Ok(key)
    }

    /// Sets or clears a reference field on an already-inserted entity.
    ///
    /// References may be wired in any insertion order (a world and its
    /// constructor method refer to each other), so the upstream layer sets
    /// them once both keys exist.
    ///
    /// # Errors
    /// Fails when the key is unknown, or when the field is the class's
    /// declared parent back-reference — parent fields drive children
    /// indexing and must be supplied at insertion time.
    pub fn set_reference(
        &mut self,
        key: EntityKey,
        field: &str,
        target: Option<EntityKey>,
    ) -> Result<()> {
        let class = self.class_of(key)?.to_string();
        let schema = self.registry.class(&class)?;
        if schema.parent.as_ref().is_some_and(|p| p.field == field) {
            return Err(Error::parent_rewire(&class, field));
        }

        let idx = usize::try_from(key.index).unwrap_or(usize::MAX);
        let entity = self
            .entities
            .get_mut(idx)
            .ok_or_else(|| Error::entity_not_found(key))?;
        *entity = entity.clone().with_reference(field, target);
        Ok(())
    }

    /// Looks up an entity by key.
    ///
    /// # Errors
    /// Returns an error if the key was never assigned by this graph.
    pub fn entity(&self, key: EntityKey) -> Result<&Entity> {
        self.entities
            .get(usize::try_from(key.index).unwrap_or(usize::MAX))
            .ok_or_else(|| Error::entity_not_found(key))
    }

    /// Returns the class name of an entity.
    ///
    /// # Errors
    /// Returns an error if the key was never assigned by this graph.
    pub fn class_of(&self, key: EntityKey) -> Result<&str> {
        self.entity(key).map(Entity::class)
    }

    /// Looks up a class schema by name.
    ///
    /// # Errors
    /// Returns an error if the name is not registered.
    pub fn schema(&self, class: &str) -> Result<&ClassSchema> {
        self.registry.class(class)
    }

    /// Returns, in registration order, every class whose parent declaration
    /// admits the given class.
    #[must_use]
    pub fn children_classes(&self, class: &str) -> Vec<&ClassSchema> {
        self.registry.children_classes(class)
    }

    /// Returns the immediate children of an entity that belong to one child
    /// class, in insertion order. Entities with no such children yield an
    /// empty slice.
    #[must_use]
    pub fn immediate_children(&self, parent: EntityKey, child_class: &str) -> &[EntityKey] {
        self.children
            .get(&(parent, child_class.to_string()))
            .map_or(&[], Vec::as_slice)
    }

    /// Number of entities stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if the graph holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
