use catalog_demos::animals::{Animal, AnimalRegistry, AnimalSession, ConsoleObserver};
use catalog_demos::framework::mock::MockObserver;
use catalog_demos::framework::InstanceCounter;
use catalog_demos::lifecycle::{run_session, Console};
use std::sync::Arc;

/// Runs a full animal session with a console observer and returns the final registry and transcript.
async fn run_animals(registry: AnimalRegistry, input: &str) -> (AnimalRegistry, String) {
    let mut console = Console::new(input.as_bytes(), Vec::new());
    let mut registry = registry;
    registry.subscribe(Arc::new(ConsoleObserver::new(console.output_channel())));

    let mut session = AnimalSession::new(registry);
    run_session(&mut session, &mut console)
        .await
        .expect("Session failed");

    let (_, out) = console.into_inner();
    (session.into_registry(), String::from_utf8(out).expect("Output is not UTF-8"))
}

fn names(registry: &AnimalRegistry) -> Vec<String> {
    registry.display_all().collect()
}

#[tokio::test]
async fn test_add_announces_then_lists_animals() {
    let (registry, out) = run_animals(AnimalRegistry::new(), "1\nDog\nRex\n7\n").await;

    assert_eq!(names(&registry), ["Dog: Rex"]);
    assert!(out.contains(
        "Enter animal name: New animal registered: Dog: Rex\nRex says Woof!\nCurrent animals:\nDog: Rex\n"
    ));
}

#[tokio::test]
async fn test_unknown_type_is_reported_and_registry_unchanged() {
    let (registry, out) = run_animals(AnimalRegistry::new(), "1\nDog\nRex\n1\nBird\nTweety\n7\n").await;

    assert_eq!(names(&registry), ["Dog: Rex"]);
    assert!(out.contains("Error: Unknown animal type: Bird\n"));
    assert!(!out.contains("Tweety says"));
}

#[tokio::test]
async fn test_remove_by_type_removes_the_whole_species() {
    let input = "1\nDog\nRex\n1\nCat\nTom\n1\nDog\nFido\n3\nDog\n7\n";
    let (registry, out) = run_animals(AnimalRegistry::new(), input).await;

    assert_eq!(names(&registry), ["Cat: Tom"]);
    assert!(out.contains("Removed 2 animal(s) of type Dog\n"));
}

#[tokio::test]
async fn test_remove_unknown_type_is_noop() {
    let input = "1\nCat\nTom\n3\nBird\n7\n";
    let (registry, out) = run_animals(AnimalRegistry::new(), input).await;

    assert_eq!(names(&registry), ["Cat: Tom"]);
    assert!(out.contains("Removed 0 animal(s) of type Bird\n"));
}

#[tokio::test]
async fn test_sort_then_display_info_by_type() {
    let input = "1\nDog\nRex\n1\nCat\nTom\n1\nDog\nFido\n5\n4\nDog\n7\n";
    let (registry, out) = run_animals(AnimalRegistry::new(), input).await;

    assert_eq!(names(&registry), ["Cat: Tom", "Dog: Rex", "Dog: Fido"]);
    assert!(out.contains("Animals sorted by type.\nCurrent animals:\nCat: Tom\nDog: Rex\nDog: Fido\n"));
    assert!(out.contains("Dog named Rex\nDog named Fido\nCurrent animals:"));
}

#[tokio::test]
async fn test_show_count_reports_live_registries() {
    static COUNTER: InstanceCounter = InstanceCounter::new();

    let input = "1\nDog\nRex\n1\nCat\nTom\n6\n7\n";
    let (registry, out) = run_animals(AnimalRegistry::counted_by(&COUNTER), input).await;

    assert_eq!(registry.len(), 2);
    assert!(out.contains("Registry instances: 1\n"));
}

#[tokio::test]
async fn test_observer_subscribed_late_sees_only_new_animals() {
    let mut registry = AnimalRegistry::new();
    registry.add(Animal::dog("Rex"));

    let mut mock = MockObserver::new();
    mock.expect_update(Animal::cat("Tom"));
    registry.subscribe(mock.observer());

    let (registry, _) = run_animals(registry, "1\nCat\nTom\n7\n").await;

    mock.verify();
    assert_eq!(names(&registry), ["Dog: Rex", "Cat: Tom"]);
}
