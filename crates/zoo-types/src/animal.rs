use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Store-assigned identifier of an animal.
///
/// Maps to the `SERIAL` primary key column, so it is a 32-bit signed integer.
/// Serializes as a bare JSON number.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimalId(i32);

impl AnimalId {
    /// Wrap a raw id as returned by the store.
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// The raw integer value.
    pub const fn get(&self) -> i32 {
        self.0
    }

    /// Parse a path segment into an id.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        s.parse()
    }
}

impl FromStr for AnimalId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i32>()
            .map(Self)
            .map_err(|_| TypeError::InvalidId(s.to_string()))
    }
}

impl fmt::Display for AnimalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for AnimalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnimalId({})", self.0)
    }
}

/// A stored animal row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    pub id: AnimalId,
    pub name: String,
    pub class: String,
    pub legs: i32,
}

/// The client-supplied fields of an animal.
///
/// Used as the request body for both create and update. Updates replace every
/// field, so there is no optional variant. An `id` key in the incoming JSON is
/// ignored, and absent keys decode to their zero value (`""` or `0`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimalDraft {
    pub name: String,
    pub class: String,
    pub legs: i32,
}

impl AnimalDraft {
    pub fn new(name: impl Into<String>, class: impl Into<String>, legs: i32) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
            legs,
        }
    }

    /// Attach a store-assigned id.
    pub fn into_animal(self, id: AnimalId) -> Animal {
        Animal {
            id,
            name: self.name,
            class: self.class,
            legs: self.legs,
        }
    }
}

impl From<Animal> for AnimalDraft {
    fn from(animal: Animal) -> Self {
        Self {
            name: animal.name,
            class: animal.class,
            legs: animal.legs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_parses_decimal() {
        assert_eq!(AnimalId::parse("42").unwrap(), AnimalId::from_raw(42));
        assert_eq!(AnimalId::parse("-1").unwrap().get(), -1);
    }

    #[test]
    fn id_rejects_garbage() {
        assert_eq!(
            AnimalId::parse("lion"),
            Err(TypeError::InvalidId("lion".into()))
        );
        assert!(AnimalId::parse("").is_err());
        assert!(AnimalId::parse("1.5").is_err());
        // Out of range for the SERIAL column.
        assert!(AnimalId::parse("2147483648").is_err());
    }

    #[test]
    fn id_display() {
        assert_eq!(AnimalId::from_raw(7).to_string(), "7");
        assert_eq!(format!("{:?}", AnimalId::from_raw(7)), "AnimalId(7)");
    }

    #[test]
    fn animal_json_keys() {
        let animal = AnimalDraft::new("Lion", "Mammal", 4).into_animal(AnimalId::from_raw(1));
        let value = serde_json::to_value(&animal).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 1, "name": "Lion", "class": "Mammal", "legs": 4})
        );
    }

    #[test]
    fn draft_ignores_id_key() {
        let draft: AnimalDraft =
            serde_json::from_str(r#"{"id": 99, "name": "Eagle", "class": "Bird", "legs": 2}"#)
                .unwrap();
        assert_eq!(draft, AnimalDraft::new("Eagle", "Bird", 2));
    }

    #[test]
    fn draft_zero_fills_missing_fields() {
        let draft: AnimalDraft = serde_json::from_str(r#"{"name": "Eagle"}"#).unwrap();
        assert_eq!(draft, AnimalDraft::new("Eagle", "", 0));

        let empty: AnimalDraft = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, AnimalDraft::default());
    }

    #[test]
    fn draft_rejects_non_object() {
        assert!(serde_json::from_str::<AnimalDraft>(r#""Eagle""#).is_err());
        assert!(serde_json::from_str::<AnimalDraft>("42").is_err());
    }

    #[test]
    fn draft_rejects_mistyped_legs() {
        let err = serde_json::from_str::<AnimalDraft>(
            r#"{"name": "Eagle", "class": "Bird", "legs": "two"}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn animal_back_to_draft() {
        let animal = AnimalDraft::new("Snake", "Reptile", 0).into_animal(AnimalId::from_raw(3));
        let draft = AnimalDraft::from(animal);
        assert_eq!(draft, AnimalDraft::new("Snake", "Reptile", 0));
    }
}
