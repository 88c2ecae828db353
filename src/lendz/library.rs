use crate::model::{Item, Member};

/// In-memory catalog and member roster.
/// Does NOT persist data; everything lives for the run of the program.
#[derive(Debug, Default)]
pub struct Library {
    catalog: Vec<Item>,
    roster: Vec<Member>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item to the catalog. Ids are caller-assigned and never
    /// checked for uniqueness; lookups resolve to the first match.
    pub fn add_item(&mut self, item: Item) {
        self.catalog.push(item);
    }

    pub fn register_member(&mut self, member: Member) {
        self.roster.push(member);
    }

    /// Catalog in insertion order.
    pub fn catalog(&self) -> &[Item] {
        &self.catalog
    }

    pub fn roster(&self) -> &[Member] {
        &self.roster
    }

    pub fn find_item_by_id(&self, id: i32) -> Option<&Item> {
        self.catalog.iter().find(|item| item.id() == id)
    }

    /// Case-sensitive exact match on the member name.
    pub fn find_member_by_name(&self, name: &str) -> Option<&Member> {
        self.roster.iter().find(|member| member.name() == name)
    }

    pub fn find_member_by_name_mut(&mut self, name: &str) -> Option<&mut Member> {
        self.roster.iter_mut().find(|member| member.name() == name)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct LibraryFixture {
        pub library: Library,
    }

    impl Default for LibraryFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl LibraryFixture {
        pub fn new() -> Self {
            Self {
                library: Library::new(),
            }
        }

        pub fn with_novel(mut self, id: i32, title: &str, author: &str) -> Self {
            self.library.add_item(Item::novel(id, title, author));
            self
        }

        pub fn with_magazine(mut self, id: i32, title: &str, issue_number: i32) -> Self {
            self.library.add_item(Item::magazine(id, title, issue_number));
            self
        }

        pub fn with_textbook(mut self, id: i32, title: &str, publisher: &str) -> Self {
            self.library.add_item(Item::textbook(id, title, publisher));
            self
        }

        pub fn with_member(mut self, name: &str) -> Self {
            self.library.register_member(Member::new(name));
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::LibraryFixture;
    use super::*;

    #[test]
    fn test_find_item_by_id() {
        let fixture = LibraryFixture::new()
            .with_novel(1, "To Kill a Mockingbird", "Harper Lee")
            .with_magazine(2, "National Geographic", 202);

        let item = fixture.library.find_item_by_id(2).unwrap();
        assert_eq!(item.title(), "National Geographic");

        assert!(fixture.library.find_item_by_id(99).is_none());
    }

    #[test]
    fn find_item_returns_first_match_on_duplicate_ids() {
        let fixture = LibraryFixture::new()
            .with_novel(1, "First", "A")
            .with_novel(1, "Second", "B");

        let item = fixture.library.find_item_by_id(1).unwrap();
        assert_eq!(item.title(), "First");
    }

    #[test]
    fn test_find_member_is_case_sensitive() {
        let fixture = LibraryFixture::new().with_member("Alice");

        assert!(fixture.library.find_member_by_name("Alice").is_some());
        assert!(fixture.library.find_member_by_name("alice").is_none());
    }

    #[test]
    fn test_catalog_keeps_insertion_order() {
        let fixture = LibraryFixture::new()
            .with_textbook(3, "Introduction to Algorithms", "MIT Press")
            .with_novel(1, "To Kill a Mockingbird", "Harper Lee");

        let ids: Vec<_> = fixture.library.catalog().iter().map(|i| i.id()).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn mutable_member_lookup_reaches_the_roster_entry() {
        let mut fixture = LibraryFixture::new().with_member("Bob");
        let item = Item::novel(1, "To Kill a Mockingbird", "Harper Lee");

        let bob = fixture.library.find_member_by_name_mut("Bob").unwrap();
        bob.borrow_item(&item);

        // The change is visible through the shared roster view
        let bob = fixture.library.find_member_by_name("Bob").unwrap();
        assert_eq!(bob.borrowed_items().len(), 1);
    }
}
