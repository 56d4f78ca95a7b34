use crate::animals::{create_animal, AnimalRegistry};
use crate::lifecycle::{Console, Flow, MenuSession, SessionError};
use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::warn;

pub const ANIMALS_HEADER: &str = "Current animals:";

/// Entries of the animal menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimalChoice {
    AddAnimal,
    DisplayAll,
    RemoveByType,
    DisplayInfoByType,
    Sort,
    ShowCount,
    Exit,
}

impl TryFrom<u32> for AnimalChoice {
    type Error = u32;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(AnimalChoice::AddAnimal),
            2 => Ok(AnimalChoice::DisplayAll),
            3 => Ok(AnimalChoice::RemoveByType),
            4 => Ok(AnimalChoice::DisplayInfoByType),
            5 => Ok(AnimalChoice::Sort),
            6 => Ok(AnimalChoice::ShowCount),
            7 => Ok(AnimalChoice::Exit),
            other => Err(other),
        }
    }
}

/// Interactive session over one [`AnimalRegistry`].
///
/// After every dispatched entry except exit the session lists all animals
/// under [`ANIMALS_HEADER`].
#[derive(Debug, Default)]
pub struct AnimalSession {
    registry: AnimalRegistry,
}

impl AnimalSession {
    pub fn new(registry: AnimalRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &AnimalRegistry {
        &self.registry
    }

    pub fn into_registry(self) -> AnimalRegistry {
        self.registry
    }
}

#[async_trait]
impl MenuSession for AnimalSession {
    const NAME: &'static str = "animals";
    const MENU: &'static str = "1. Add Animal\n\
                                2. Display All Animals\n\
                                3. Remove Animals by Type\n\
                                4. Display Animal Info by Type\n\
                                5. Sort Animals by Type\n\
                                6. Show Registry Count\n\
                                7. Exit\n";
    type Choice = AnimalChoice;

    async fn dispatch<R, W>(
        &mut self,
        choice: AnimalChoice,
        console: &mut Console<R, W>,
    ) -> Result<Flow, SessionError>
    where
        R: AsyncBufRead + Unpin + Send,
        W: AsyncWrite + Unpin + Send,
    {
        match choice {
            AnimalChoice::AddAnimal => {
                let Some(tag) = console.prompt("Enter animal type (Dog/Cat): ").await? else {
                    return Ok(Flow::Exit);
                };
                let Some(name) = console.prompt("Enter animal name: ").await? else {
                    return Ok(Flow::Exit);
                };
                match create_animal(tag.trim(), name) {
                    Ok(animal) => self.registry.add(animal),
                    Err(e) => {
                        warn!(error = %e, "Animal not added");
                        console.say(&format!("Error: {e}")).await?;
                    }
                }
            }
            AnimalChoice::DisplayAll => {
                let lines: Vec<String> = self.registry.display_all().collect();
                console.say_all(&lines).await?;
            }
            AnimalChoice::RemoveByType => {
                let Some(tag) = console.prompt("Enter animal type to remove: ").await? else {
                    return Ok(Flow::Exit);
                };
                let removed = self.registry.remove_by_tag(tag.trim());
                console
                    .say(&format!("Removed {removed} animal(s) of type {}", tag.trim()))
                    .await?;
            }
            AnimalChoice::DisplayInfoByType => {
                let Some(tag) = console.prompt("Enter animal type to display: ").await? else {
                    return Ok(Flow::Exit);
                };
                let lines: Vec<String> = self.registry.display_info_by_tag(tag.trim()).collect();
                console.say_all(&lines).await?;
            }
            AnimalChoice::Sort => {
                self.registry.sort_by_tag();
                console.say("Animals sorted by type.").await?;
            }
            AnimalChoice::ShowCount => {
                let count = self.registry.live_count();
                console.say(&format!("Registry instances: {count}")).await?;
            }
            AnimalChoice::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    async fn after_dispatch<R, W>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<(), SessionError>
    where
        R: AsyncBufRead + Unpin + Send,
        W: AsyncWrite + Unpin + Send,
    {
        let lines: Vec<String> = self.registry.display_all().collect();
        console.say(ANIMALS_HEADER).await?;
        console.say_all(&lines).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_numbers_match_menu() {
        assert_eq!(AnimalChoice::try_from(1), Ok(AnimalChoice::AddAnimal));
        assert_eq!(AnimalChoice::try_from(6), Ok(AnimalChoice::ShowCount));
        assert_eq!(AnimalChoice::try_from(7), Ok(AnimalChoice::Exit));
        assert_eq!(AnimalChoice::try_from(8), Err(8));
    }

    #[test]
    fn test_menu_lists_seven_entries() {
        assert_eq!(AnimalSession::MENU.lines().count(), 7);
    }
}
