use colored::Colorize;
use lendz::api::{CmdMessage, MessageLevel};
use lendz::model::Item;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_catalog(items: &[Item]) {
    print!("{}", render_catalog(items));
}

// The catalog block is unstyled; its lines are matched verbatim by tests
pub(crate) fn render_catalog(items: &[Item]) -> String {
    let mut out = String::from("=== Library Catalog ===\n");
    for item in items {
        out.push_str(&item.describe());
        out.push('\n');
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_catalog_block() {
        let items = vec![
            Item::novel(1, "To Kill a Mockingbird", "Harper Lee"),
            Item::magazine(2, "National Geographic", 202),
        ];

        let rendered = render_catalog(&items);
        assert_eq!(
            rendered,
            "=== Library Catalog ===\n\
             Novel: To Kill a Mockingbird by Harper Lee\n\
             Magazine: National Geographic - Issue #202\n\n"
        );
    }

    #[test]
    fn empty_catalog_renders_header_and_blank_line() {
        assert_eq!(render_catalog(&[]), "=== Library Catalog ===\n\n");
    }
}
