//! Class schemas and the schema registry.
//!
//! Schemas are plain descriptors: an ordered field list plus an optional
//! parent-relationship declaration. Entity instances are plain records typed
//! by these descriptors; no language-level classes are synthesized.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use limeforge_foundation::{Error, Result};

/// Type of an entity field.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FieldType {
    /// Boolean scalar.
    Bool,
    /// Integer scalar.
    Int,
    /// String scalar.
    String,
    /// Ordered list scalar (e.g. a method signature).
    List,
    /// Reference to another entity of the named class.
    ///
    /// Reference fields form tree edges in the compiled IR.
    Reference(String),
}

impl FieldType {
    /// Returns true if this field holds an entity reference.
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        matches!(self, Self::Reference(_))
    }
}

/// Schema definition for a single entity field.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldSchema {
    /// Field name.
    pub name: String,
    /// Field type.
    pub ty: FieldType,
}

impl FieldSchema {
    /// Creates a scalar or list field.
    #[must_use]
    pub fn scalar(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// Creates a reference field targeting the given class.
    #[must_use]
    pub fn reference(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: FieldType::Reference(target.into()),
        }
    }
}

/// Parent-relationship declaration for a class.
///
/// The parent field is a back-reference: it is read by the graph to index
/// the entity under its parent, and is never embedded in the compiled IR.
/// A class declares at most one parent field, but the field may admit
/// several target classes (a `Subscription` is parented by either method
/// class).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParentSchema {
    /// Name of the parent back-reference field.
    pub field: String,
    /// Classes an instance of this class may be parented by.
    pub targets: Vec<String>,
}

impl ParentSchema {
    /// Creates a parent declaration.
    #[must_use]
    pub fn new<I, S>(field: impl Into<String>, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            field: field.into(),
            targets: targets.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if instances may be parented by the given class.
    #[must_use]
    pub fn admits(&self, class: &str) -> bool {
        self.targets.iter().any(|t| t == class)
    }
}

/// Schema definition for an entity class.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClassSchema {
    /// Class name (e.g. `World`, `GameObject`).
    pub name: String,
    /// Data and reference fields, in declared order.
    pub fields: Vec<FieldSchema>,
    /// Optional parent-relationship declaration.
    pub parent: Option<ParentSchema>,
}

impl ClassSchema {
    /// Creates a new class schema with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            parent: None,
        }
    }

    /// Adds a field to the schema.
    #[must_use]
    pub fn with_field(mut self, field: FieldSchema) -> Self {
        self.fields.push(field);
        self
    }

    /// Declares the parent relationship.
    #[must_use]
    pub fn with_parent(mut self, parent: ParentSchema) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Returns the field schema by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Insertion-ordered registry of class schemas.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SchemaRegistry {
    /// Class schemas in registration order.
    classes: Vec<ClassSchema>,
    /// Map from class name to index in `classes`.
    by_name: HashMap<String, usize>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a class schema.
    ///
    /// # Errors
    /// Returns [`limeforge_foundation::ErrorKind::DuplicateClass`] if a class
    /// of the same name is already registered.
    pub fn register(&mut self, schema: ClassSchema) -> Result<()> {
        if self.by_name.contains_key(&schema.name) {
            return Err(Error::duplicate_class(&schema.name));
        }
        self.by_name.insert(schema.name.clone(), self.classes.len());
        self.classes.push(schema);
        Ok(())
    }

    /// Looks up a class schema by name.
    ///
    /// # Errors
    /// Returns [`limeforge_foundation::ErrorKind::UnknownClass`] if the name
    /// is not registered.
    pub fn class(&self, name: &str) -> Result<&ClassSchema> {
        self.by_name
            .get(name)
            .map(|&i| &self.classes[i])
            .ok_or_else(|| Error::unknown_class(name))
    }

    /// Returns true if the class name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Iterates schemas in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ClassSchema> {
        self.classes.iter()
    }

    /// Returns, in registration order, every class whose parent declaration
    /// admits the given class.
    #[must_use]
    pub fn children_classes(&self, class: &str) -> Vec<&ClassSchema> {
        self.classes
            .iter()
            .filter(|c| c.parent.as_ref().is_some_and(|p| p.admits(class)))
            .collect()
    }
}
