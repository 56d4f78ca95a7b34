use catalog_demos::library::{Item, Library, LibrarySession, Member};
use catalog_demos::lifecycle::{run_session, Console};

/// Runs a full library session over `input` and returns the final state and transcript.
async fn run_library(input: &str) -> (Library, String) {
    let mut session = LibrarySession::new(Library::new());
    let mut console = Console::new(input.as_bytes(), Vec::new());
    run_session(&mut session, &mut console)
        .await
        .expect("Session failed");

    let (_, out) = console.into_inner();
    (session.into_library(), String::from_utf8(out).expect("Output is not UTF-8"))
}

#[tokio::test]
async fn test_add_and_display_items_in_order() {
    let input = "1\nDune\nHerbert\n2\nTime\n42\n4\n6\n";
    let (library, out) = run_library(input).await;

    assert_eq!(
        library.items().iter().cloned().collect::<Vec<_>>(),
        [Item::book("Dune", "Herbert"), Item::magazine("Time", 42)]
    );
    assert!(out.contains("Enter book title: Enter book author: "));
    assert!(out.contains("Enter magazine title: Enter magazine issue number: "));
    assert!(out.contains("Book: Dune by Herbert\nMagazine: Time Issue: 42\n"));
}

#[tokio::test]
async fn test_members_are_added_and_displayed() {
    let input = "3\nAlice\n3\nBob\n5\n6\n";
    let (library, out) = run_library(input).await;

    assert_eq!(library.members(), [Member::new("Alice"), Member::new("Bob")]);
    assert!(out.contains("Member: Alice\nMember: Bob\n"));
    assert!(library.items().is_empty());
}

#[tokio::test]
async fn test_bad_issue_number_is_reported_and_nothing_is_added() {
    let input = "2\nTime\nforty-two\n4\n6\n";
    let (library, out) = run_library(input).await;

    assert!(library.items().is_empty());
    assert!(out.contains("Error: Invalid magazine issue number: forty-two\n"));
}

#[tokio::test]
async fn test_invalid_choices_have_no_side_effects() {
    let input = "0\n9\nbook\n\n6\n";
    let (library, out) = run_library(input).await;

    assert!(library.items().is_empty());
    assert!(library.members().is_empty());
    assert_eq!(out.matches("Invalid option, please try again.").count(), 4);
}

#[tokio::test]
async fn test_exit_ignores_remaining_input() {
    let input = "6\n3\nAlice\n";
    let (library, out) = run_library(input).await;

    assert!(library.members().is_empty());
    assert_eq!(out.matches("Choose an option: ").count(), 1);
}

#[tokio::test]
async fn test_end_of_input_mid_prompt_ends_session() {
    let (library, out) = run_library("1\nDune\n").await;

    assert!(library.items().is_empty());
    assert!(out.ends_with("Enter book author: "));
}
