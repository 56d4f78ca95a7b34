use crate::library::{create_item, Library, Member};
use crate::lifecycle::{Console, Flow, MenuSession, SessionError};
use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::warn;

/// Entries of the library menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryChoice {
    AddBook,
    AddMagazine,
    AddMember,
    DisplayItems,
    DisplayMembers,
    Exit,
}

impl TryFrom<u32> for LibraryChoice {
    type Error = u32;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(LibraryChoice::AddBook),
            2 => Ok(LibraryChoice::AddMagazine),
            3 => Ok(LibraryChoice::AddMember),
            4 => Ok(LibraryChoice::DisplayItems),
            5 => Ok(LibraryChoice::DisplayMembers),
            6 => Ok(LibraryChoice::Exit),
            other => Err(other),
        }
    }
}

/// Interactive session over one [`Library`].
#[derive(Debug, Default)]
pub struct LibrarySession {
    library: Library,
}

impl LibrarySession {
    pub fn new(library: Library) -> Self {
        Self { library }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn into_library(self) -> Library {
        self.library
    }

    async fn add_item<R, W>(
        &mut self,
        console: &mut Console<R, W>,
        tag: &str,
        title: String,
        detail: String,
    ) -> Result<Flow, SessionError>
    where
        R: AsyncBufRead + Unpin + Send,
        W: AsyncWrite + Unpin + Send,
    {
        match create_item(tag, title, detail) {
            Ok(item) => self.library.add_item(item),
            Err(e) => {
                warn!(error = %e, "Item not added");
                console.say(&format!("Error: {e}")).await?;
            }
        }
        Ok(Flow::Continue)
    }
}

#[async_trait]
impl MenuSession for LibrarySession {
    const NAME: &'static str = "library";
    const MENU: &'static str = "1. Add Book\n\
                                2. Add Magazine\n\
                                3. Add Member\n\
                                4. Display Items\n\
                                5. Display Members\n\
                                6. Exit\n";
    type Choice = LibraryChoice;

    async fn dispatch<R, W>(
        &mut self,
        choice: LibraryChoice,
        console: &mut Console<R, W>,
    ) -> Result<Flow, SessionError>
    where
        R: AsyncBufRead + Unpin + Send,
        W: AsyncWrite + Unpin + Send,
    {
        match choice {
            LibraryChoice::AddBook => {
                let Some(title) = console.prompt("Enter book title: ").await? else {
                    return Ok(Flow::Exit);
                };
                let Some(author) = console.prompt("Enter book author: ").await? else {
                    return Ok(Flow::Exit);
                };
                self.add_item(console, "Book", title, author).await
            }
            LibraryChoice::AddMagazine => {
                let Some(title) = console.prompt("Enter magazine title: ").await? else {
                    return Ok(Flow::Exit);
                };
                let Some(issue) = console.prompt("Enter magazine issue number: ").await? else {
                    return Ok(Flow::Exit);
                };
                self.add_item(console, "Magazine", title, issue).await
            }
            LibraryChoice::AddMember => {
                let Some(name) = console.prompt("Enter member name: ").await? else {
                    return Ok(Flow::Exit);
                };
                self.library.add_member(Member::new(name));
                Ok(Flow::Continue)
            }
            LibraryChoice::DisplayItems => {
                let lines: Vec<String> = self.library.display_items().collect();
                console.say_all(&lines).await?;
                Ok(Flow::Continue)
            }
            LibraryChoice::DisplayMembers => {
                let lines: Vec<String> = self.library.display_members().collect();
                console.say_all(&lines).await?;
                Ok(Flow::Continue)
            }
            LibraryChoice::Exit => Ok(Flow::Exit),
        }
    }
}
