//! Canned data for the demo session. No I/O here; the binary drives the
//! session and prints the results.

use crate::library::Library;
use crate::model::{Item, Member};

/// Starting state: three catalog items and two members.
pub fn sample_library() -> Library {
    let mut library = Library::new();
    library.add_item(Item::novel(1, "To Kill a Mockingbird", "Harper Lee"));
    library.add_item(Item::magazine(2, "National Geographic", 202));
    library.add_item(Item::textbook(3, "Introduction to Algorithms", "MIT Press"));
    library.register_member(Member::new("Alice"));
    library.register_member(Member::new("Bob"));
    library
}

/// The novel the demo session adds after the opening borrows.
pub fn fourth_novel() -> Item {
    Item::novel(4, "1984", "George Orwell")
}
