use clap::Parser;
use lendz::api::LendzApi;
use lendz::demo;
use lendz::error::Result;

mod args;
mod cli;

use args::{Cli, Commands};
use cli::print::{print_catalog, print_messages};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Catalog) => handle_catalog(),
        Some(Commands::Demo) | None => handle_demo(),
    }
}

fn handle_catalog() -> Result<()> {
    let api = LendzApi::with_library(demo::sample_library());
    let result = api.show_catalog()?;
    print_catalog(&result.listed_items);
    Ok(())
}

/// Walks the canned session: show the catalog, let Alice borrow the three
/// seeded items, then add a fourth novel and watch the cap reject it.
fn handle_demo() -> Result<()> {
    let mut api = LendzApi::with_library(demo::sample_library());

    let result = api.show_catalog()?;
    print_catalog(&result.listed_items);

    for item_id in 1..=3 {
        let result = api.borrow_item("Alice", item_id)?;
        print_messages(&result.messages);
    }

    api.add_item(demo::fourth_novel());
    let result = api.borrow_item("Alice", 4)?;
    print_messages(&result.messages);

    Ok(())
}
