use crate::framework::Registry;
use crate::library::{Item, Member};
use tracing::info;

/// The library catalog for one session: its items and its members.
///
/// There is no global instance. The binary constructs one `Library` and hands
/// it to the session that owns it for the rest of the run.
#[derive(Debug, Default)]
pub struct Library {
    items: Registry<Item>,
    members: Vec<Member>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.add(item);
    }

    pub fn add_member(&mut self, member: Member) {
        self.members.push(member);
        info!(size = self.members.len(), "Member added");
    }

    /// Display lines for every item, in insertion order.
    pub fn display_items(&self) -> impl Iterator<Item = String> + '_ {
        self.items.display_all()
    }

    /// Display lines for every member, in insertion order.
    pub fn display_members(&self) -> impl Iterator<Item = String> + '_ {
        self.members.iter().map(ToString::to_string)
    }

    pub fn items(&self) -> &Registry<Item> {
        &self.items
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::create_item;

    #[test]
    fn test_display_items_in_insertion_order() {
        let mut library = Library::new();
        library.add_item(create_item("Book", "Dune", "Herbert").unwrap());
        library.add_item(create_item("Magazine", "Time", "42").unwrap());

        let lines: Vec<String> = library.display_items().collect();
        assert_eq!(lines, ["Book: Dune by Herbert", "Magazine: Time Issue: 42"]);
    }

    #[test]
    fn test_failed_creation_leaves_catalog_unchanged() {
        let mut library = Library::new();
        library.add_item(Item::book("Dune", "Herbert"));

        if let Ok(item) = create_item("Comic", "Watchmen", "Moore") {
            library.add_item(item);
        }
        assert_eq!(library.items().len(), 1);
    }

    #[test]
    fn test_members_are_listed_separately_from_items() {
        let mut library = Library::new();
        library.add_member(Member::new("Alice"));
        library.add_member(Member::new("Bob"));

        let lines: Vec<String> = library.display_members().collect();
        assert_eq!(lines, ["Member: Alice", "Member: Bob"]);
        assert!(library.items().is_empty());
    }
}
