//! Animal registry demo: dogs and cats, announced to observers as they arrive.

use catalog_demos::animals::{AnimalRegistry, AnimalSession, ConsoleObserver};
use catalog_demos::lifecycle::{run_session, setup_tracing, Console, SessionError};
use std::sync::Arc;
use tokio::io::{stdin, stdout, BufReader};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), SessionError> {
    setup_tracing();
    info!("Starting animal demo");

    let mut console = Console::new(BufReader::new(stdin()), stdout());

    let mut registry = AnimalRegistry::new();
    registry.subscribe(Arc::new(ConsoleObserver::new(console.output_channel())));

    let mut session = AnimalSession::new(registry);
    run_session(&mut session, &mut console).await?;

    info!(
        animals = session.registry().len(),
        "Animal demo finished"
    );
    Ok(())
}
