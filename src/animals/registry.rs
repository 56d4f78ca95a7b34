use crate::animals::Animal;
use crate::framework::{CountGuard, InstanceCounter, Notifier, Observer, Registry};
use std::sync::Arc;

/// Process-wide count of live [`AnimalRegistry`] values.
static LIVE_REGISTRIES: InstanceCounter = InstanceCounter::new();

/// The animals of one session, plus the observers told about each new one.
///
/// # Instance Counting
/// Every registry is counted while alive. The count is of *registries*, not of
/// animals: adding or removing animals never changes it, constructing or
/// dropping a registry does. The interactive session only ever builds one, so
/// it reports 1.
///
/// # Removal
/// [`remove_by_tag`](AnimalRegistry::remove_by_tag) takes a species name and
/// drops every animal of that species, not one animal by name.
#[derive(Debug)]
pub struct AnimalRegistry {
    animals: Registry<Animal>,
    notifier: Notifier<Animal>,
    live: CountGuard,
}

impl Default for AnimalRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimalRegistry {
    /// Creates an empty registry counted in the process-wide total.
    pub fn new() -> Self {
        Self::counted_by(&LIVE_REGISTRIES)
    }

    /// Creates an empty registry counted by `counter` instead of the process-wide one.
    pub fn counted_by(counter: &'static InstanceCounter) -> Self {
        Self {
            animals: Registry::new(),
            notifier: Notifier::new(),
            live: counter.track(),
        }
    }

    /// Number of live registries in the process-wide count.
    pub fn instance_count() -> usize {
        LIVE_REGISTRIES.get()
    }

    /// Number of live registries sharing this registry's counter.
    pub fn live_count(&self) -> usize {
        self.live.counter().get()
    }

    pub fn subscribe(&mut self, observer: Arc<dyn Observer<Animal>>) {
        self.notifier.subscribe(observer);
    }

    /// Appends `animal`, then tells every observer about it.
    pub fn add(&mut self, animal: Animal) {
        self.animals.add(animal);
        if let Some(added) = self.animals.iter().next_back() {
            self.notifier.publish(added);
        }
    }

    pub fn remove_by_tag(&mut self, tag: &str) -> usize {
        self.animals.remove_by_tag(tag)
    }

    pub fn display_all(&self) -> impl Iterator<Item = String> + '_ {
        self.animals.display_all()
    }

    pub fn display_info_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = String> + 'a {
        self.animals.display_info_by_tag(tag)
    }

    pub fn sort_by_tag(&mut self) {
        self.animals.sort_by_tag();
    }

    pub fn animals(&self) -> &Registry<Animal> {
        &self.animals
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockObserver;

    #[test]
    fn test_observer_receives_only_animals_added_after_subscribing() {
        let mut registry = AnimalRegistry::new();
        registry.add(Animal::dog("Rex"));

        let mut mock = MockObserver::new();
        mock.expect_update(Animal::cat("Tom"));
        registry.subscribe(mock.observer());

        registry.add(Animal::cat("Tom"));

        mock.verify();
        assert_eq!(mock.received(), [Animal::cat("Tom")]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_every_observer_sees_every_add() {
        let mut registry = AnimalRegistry::new();
        let mut first = MockObserver::new();
        let mut second = MockObserver::new();
        for mock in [&mut first, &mut second] {
            mock.expect_update(Animal::dog("Rex"))
                .expect_update(Animal::cat("Tom"));
        }
        registry.subscribe(first.observer());
        registry.subscribe(second.observer());

        registry.add(Animal::dog("Rex"));
        registry.add(Animal::cat("Tom"));

        first.verify();
        second.verify();
    }

    #[test]
    fn test_remove_by_tag_drops_whole_species() {
        let mut registry = AnimalRegistry::new();
        registry.add(Animal::dog("Rex"));
        registry.add(Animal::dog("Fido"));
        registry.add(Animal::cat("Tom"));

        assert_eq!(registry.remove_by_tag("Dog"), 2);
        assert_eq!(registry.display_all().collect::<Vec<_>>(), ["Cat: Tom"]);
    }

    #[test]
    fn test_live_count_tracks_registries_not_animals() {
        static COUNTER: InstanceCounter = InstanceCounter::new();

        let mut registry = AnimalRegistry::counted_by(&COUNTER);
        assert_eq!(registry.live_count(), 1);

        registry.add(Animal::dog("Rex"));
        registry.add(Animal::cat("Tom"));
        assert_eq!(registry.live_count(), 1);

        let other = AnimalRegistry::counted_by(&COUNTER);
        assert_eq!(registry.live_count(), 2);
        drop(other);
        assert_eq!(registry.live_count(), 1);

        drop(registry);
        assert_eq!(COUNTER.get(), 0);
    }

    #[test]
    fn test_registry_is_shareable_for_read_only_enumeration() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnimalRegistry>();
    }
}
