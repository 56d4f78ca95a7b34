use crate::animals::AnimalError;
use crate::framework::{Entity, TypeTag};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Type tag for animals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Dog,
    Cat,
}

impl TypeTag for Species {
    const ALL: &'static [Self] = &[Species::Dog, Species::Cat];

    fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "Dog",
            Species::Cat => "Cat",
        }
    }
}

impl Species {
    /// The sound this species makes.
    pub fn sound(&self) -> &'static str {
        match self {
            Species::Dog => "Woof!",
            Species::Cat => "Meow!",
        }
    }
}

impl Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = AnimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| AnimalError::UnknownType(s.to_string()))
    }
}

/// An animal held by the [`AnimalRegistry`](crate::animals::AnimalRegistry).
///
/// # Framework
/// This enum implements the [`Entity`] trait; its detail line is [`Animal::info`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Animal {
    Dog { name: String },
    Cat { name: String },
}

impl Animal {
    pub fn dog(name: impl Into<String>) -> Self {
        Animal::Dog { name: name.into() }
    }

    pub fn cat(name: impl Into<String>) -> Self {
        Animal::Cat { name: name.into() }
    }

    pub fn name(&self) -> &str {
        match self {
            Animal::Dog { name } | Animal::Cat { name } => name,
        }
    }

    /// The line this animal says, e.g. `"Rex says Woof!"`.
    pub fn speak(&self) -> String {
        format!("{} says {}", self.name(), self.classify().sound())
    }

    /// The detail line, e.g. `"Dog named Rex"`.
    pub fn info(&self) -> String {
        format!("{} named {}", self.classify(), self.name())
    }

    /// An independent copy with the same observable state.
    pub fn duplicate(&self) -> Animal {
        self.clone()
    }
}

impl Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.classify(), self.name())
    }
}

impl Entity for Animal {
    type Tag = Species;

    fn classify(&self) -> Species {
        match self {
            Animal::Dog { .. } => Species::Dog,
            Animal::Cat { .. } => Species::Cat,
        }
    }

    fn detail(&self) -> String {
        self.info()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_per_variant() {
        let rex = Animal::dog("Rex");
        assert_eq!(rex.to_string(), "Dog: Rex");
        assert_eq!(rex.speak(), "Rex says Woof!");
        assert_eq!(rex.info(), "Dog named Rex");

        let tom = Animal::cat("Tom");
        assert_eq!(tom.to_string(), "Cat: Tom");
        assert_eq!(tom.speak(), "Tom says Meow!");
        assert_eq!(tom.detail(), "Cat named Tom");
    }

    #[test]
    fn test_duplicate_is_equal_and_independent() {
        let original = Animal::cat("Tom");
        let mut copy = original.duplicate();
        assert_eq!(copy, original);

        if let Animal::Cat { name } = &mut copy {
            name.push_str(" Jr.");
        }
        assert_eq!(original.name(), "Tom");
        assert_eq!(copy.name(), "Tom Jr.");
        assert_eq!(copy.classify(), original.classify());
    }

    #[test]
    fn test_serialized_form_is_tagged_by_type() {
        let json = serde_json::to_value(Animal::dog("Rex")).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "Dog", "name": "Rex" }));
    }
}
