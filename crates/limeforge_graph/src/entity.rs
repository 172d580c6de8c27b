//! Entity records.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use limeforge_foundation::{EntityKey, LfMap, Value};

/// Value stored in an entity field.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FieldValue {
    /// Scalar or list data.
    Scalar(Value),
    /// Reference to another entity; `None` is an unset reference, which is
    /// still an explicit entry rather than a missing field.
    Reference(Option<EntityKey>),
}

/// Plain data record typed by a registered class.
///
/// Entities are supplied fully formed before compilation begins; the
/// compiler only reads them. Field order is irrelevant here — ordered
/// traversal always follows the class schema's declared field order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Entity {
    class: String,
    fields: LfMap<String, FieldValue>,
}

impl Entity {
    /// Creates an entity of the given class with no fields set.
    #[must_use]
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            fields: LfMap::new(),
        }
    }

    /// Sets a scalar field.
    #[must_use]
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields
            .insert(name.into(), FieldValue::Scalar(value.into()));
        self
    }

    /// Sets a reference field.
    #[must_use]
    pub fn with_reference(mut self, name: impl Into<String>, target: Option<EntityKey>) -> Self {
        self.fields
            .insert(name.into(), FieldValue::Reference(target));
        self
    }

    /// Returns the class name.
    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Returns the raw field value, if set.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Returns the scalar value of a field, or [`Value::Nil`] when the
    /// field is unset.
    #[must_use]
    pub fn value(&self, name: &str) -> Value {
        match self.fields.get(name) {
            Some(FieldValue::Scalar(v)) => v.clone(),
            _ => Value::Nil,
        }
    }

    /// Returns the target of a reference field; `None` covers both an unset
    /// reference and an unset field.
    #[must_use]
    pub fn reference(&self, name: &str) -> Option<EntityKey> {
        match self.fields.get(name) {
            Some(FieldValue::Reference(target)) => *target,
            _ => None,
        }
    }
}
