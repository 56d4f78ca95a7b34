//! Construction of animals from a type tag.

use crate::animals::{Animal, AnimalError, Species};
use tracing::debug;

/// Builds an animal from its type tag (`"Dog"` or `"Cat"`, case-sensitive).
///
/// # Errors
/// [`AnimalError::UnknownType`] carrying `tag` if it names no species.
pub fn create_animal(tag: &str, name: impl Into<String>) -> Result<Animal, AnimalError> {
    let species: Species = tag.parse()?;
    let name = name.into();
    debug!(%species, name = %name, "create_animal called");

    Ok(match species {
        Species::Dog => Animal::Dog { name },
        Species::Cat => Animal::Cat { name },
    })
}
