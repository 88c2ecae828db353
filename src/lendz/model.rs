/// Maximum number of items a member may hold at once.
pub const BORROW_CAP: usize = 3;

/// Per-kind payload of a catalog item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    Novel { author: String },
    Magazine { issue_number: i32 },
    TextBook { publisher: String },
}

/// A catalog entry. Immutable once constructed; the only way to build one is
/// through the per-kind constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: i32,
    title: String,
    kind: ItemKind,
}

impl Item {
    pub fn novel(id: i32, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            kind: ItemKind::Novel {
                author: author.into(),
            },
        }
    }

    pub fn magazine(id: i32, title: impl Into<String>, issue_number: i32) -> Self {
        Self {
            id,
            title: title.into(),
            kind: ItemKind::Magazine { issue_number },
        }
    }

    pub fn textbook(id: i32, title: impl Into<String>, publisher: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            kind: ItemKind::TextBook {
                publisher: publisher.into(),
            },
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    /// One-line catalog description, keyed on the item kind.
    pub fn describe(&self) -> String {
        match &self.kind {
            ItemKind::Novel { author } => format!("Novel: {} by {}", self.title, author),
            ItemKind::Magazine { issue_number } => {
                format!("Magazine: {} - Issue #{}", self.title, issue_number)
            }
            ItemKind::TextBook { publisher } => {
                format!("TextBook: {} by {}", self.title, publisher)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorrowOutcome {
    Borrowed,
    CapReached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnOutcome {
    Returned,
    NotBorrowed,
}

#[derive(Debug, Clone)]
pub struct Member {
    name: String,
    // Only borrow_item/return_item may touch this list
    borrowed_items: Vec<Item>,
}

impl Member {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            borrowed_items: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Currently held items, in the order they were borrowed.
    pub fn borrowed_items(&self) -> &[Item] {
        &self.borrowed_items
    }

    /// Takes a copy of `item` unless the member is already at [`BORROW_CAP`].
    /// The list tracks borrow events, so the same item may appear twice.
    pub fn borrow_item(&mut self, item: &Item) -> BorrowOutcome {
        if self.borrowed_items.len() >= BORROW_CAP {
            return BorrowOutcome::CapReached;
        }
        self.borrowed_items.push(item.clone());
        BorrowOutcome::Borrowed
    }

    /// Removes the first held item equal to `item`, if any.
    pub fn return_item(&mut self, item: &Item) -> ReturnOutcome {
        match self.borrowed_items.iter().position(|held| held == item) {
            Some(pos) => {
                self.borrowed_items.remove(pos);
                ReturnOutcome::Returned
            }
            None => ReturnOutcome::NotBorrowed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mockingbird() -> Item {
        Item::novel(1, "To Kill a Mockingbird", "Harper Lee")
    }

    fn natgeo() -> Item {
        Item::magazine(2, "National Geographic", 202)
    }

    fn algorithms() -> Item {
        Item::textbook(3, "Introduction to Algorithms", "MIT Press")
    }

    #[test]
    fn test_describe_per_kind() {
        assert_eq!(
            mockingbird().describe(),
            "Novel: To Kill a Mockingbird by Harper Lee"
        );
        assert_eq!(
            natgeo().describe(),
            "Magazine: National Geographic - Issue #202"
        );
        assert_eq!(
            algorithms().describe(),
            "TextBook: Introduction to Algorithms by MIT Press"
        );
    }

    #[test]
    fn test_item_equality_is_field_wise() {
        assert_eq!(mockingbird(), mockingbird());
        assert_ne!(mockingbird(), Item::novel(9, "To Kill a Mockingbird", "Harper Lee"));
        assert_ne!(mockingbird(), Item::novel(1, "Go Set a Watchman", "Harper Lee"));
        // Same id and title, different kind
        assert_ne!(mockingbird(), Item::textbook(1, "To Kill a Mockingbird", "Harper Lee"));
    }

    #[test]
    fn test_borrow_appends_in_order() {
        let mut member = Member::new("Alice");

        assert_eq!(member.borrow_item(&natgeo()), BorrowOutcome::Borrowed);
        assert_eq!(member.borrow_item(&mockingbird()), BorrowOutcome::Borrowed);

        let held: Vec<_> = member.borrowed_items().iter().map(|i| i.id()).collect();
        assert_eq!(held, vec![2, 1]);
    }

    #[test]
    fn test_borrow_cap_rejects_fourth_item() {
        let mut member = Member::new("Alice");
        member.borrow_item(&mockingbird());
        member.borrow_item(&natgeo());
        member.borrow_item(&algorithms());

        let fourth = Item::novel(4, "1984", "George Orwell");
        assert_eq!(member.borrow_item(&fourth), BorrowOutcome::CapReached);

        // Rejection leaves the list untouched
        let held: Vec<_> = member.borrowed_items().iter().map(|i| i.id()).collect();
        assert_eq!(held, vec![1, 2, 3]);
    }

    #[test]
    fn duplicate_borrow_is_allowed() {
        let mut member = Member::new("Bob");
        assert_eq!(member.borrow_item(&mockingbird()), BorrowOutcome::Borrowed);
        assert_eq!(member.borrow_item(&mockingbird()), BorrowOutcome::Borrowed);
        assert_eq!(member.borrowed_items().len(), 2);
    }

    #[test]
    fn test_return_removes_one_occurrence() {
        let mut member = Member::new("Bob");
        member.borrow_item(&mockingbird());
        member.borrow_item(&mockingbird());
        member.borrow_item(&natgeo());

        assert_eq!(member.return_item(&mockingbird()), ReturnOutcome::Returned);
        let held: Vec<_> = member.borrowed_items().iter().map(|i| i.id()).collect();
        assert_eq!(held, vec![1, 2]);

        assert_eq!(member.return_item(&mockingbird()), ReturnOutcome::Returned);
        assert_eq!(member.return_item(&mockingbird()), ReturnOutcome::NotBorrowed);
    }

    #[test]
    fn return_of_never_borrowed_item_leaves_list_untouched() {
        let mut member = Member::new("Alice");
        member.borrow_item(&natgeo());

        assert_eq!(member.return_item(&algorithms()), ReturnOutcome::NotBorrowed);
        assert_eq!(member.borrowed_items().len(), 1);
    }

    #[test]
    fn borrow_after_return_succeeds_again() {
        let mut member = Member::new("Alice");
        member.borrow_item(&mockingbird());
        member.borrow_item(&natgeo());
        member.borrow_item(&algorithms());

        assert_eq!(member.return_item(&natgeo()), ReturnOutcome::Returned);
        assert_eq!(member.borrow_item(&natgeo()), BorrowOutcome::Borrowed);
        assert_eq!(member.borrowed_items().len(), 3);
    }
}
