use crate::animals::Animal;
use crate::framework::Observer;
use crate::lifecycle::OutputChannel;

/// Announces every newly registered animal on the console.
///
/// Writes go through an [`OutputChannel`], whose lock keeps concurrent
/// announcements from interleaving. The animal is only read during the call.
#[derive(Debug, Clone)]
pub struct ConsoleObserver {
    output: OutputChannel,
}

impl ConsoleObserver {
    pub fn new(output: OutputChannel) -> Self {
        Self { output }
    }
}

impl Observer<Animal> for ConsoleObserver {
    fn update(&self, animal: &Animal) {
        self.output
            .emit_all([format!("New animal registered: {animal}"), animal.speak()]);
    }
}
