//! Library catalog demo: books, magazines and members over a text menu.

use catalog_demos::library::{Library, LibrarySession};
use catalog_demos::lifecycle::{run_session, setup_tracing, Console, SessionError};
use tokio::io::{stdin, stdout, BufReader};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), SessionError> {
    setup_tracing();
    info!("Starting library demo");

    let mut console = Console::new(BufReader::new(stdin()), stdout());
    let mut session = LibrarySession::new(Library::new());
    run_session(&mut session, &mut console).await?;

    info!(
        items = session.library().items().len(),
        members = session.library().members().len(),
        "Library demo finished"
    );
    Ok(())
}
