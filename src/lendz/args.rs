use clap::{Parser, Subcommand};

/// Returns the version string, including git metadata for dev builds.
/// Format: "0.1.0" without git info, "0.1.0@abc1234" (plus "*" when dirty) otherwise
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_DIRTY: &str = env!("GIT_DIRTY");

    // Use a static to compute the version string once
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else if GIT_DIRTY == "true" {
            format!("{}@{}*", VERSION, GIT_HASH)
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "lendz", bin_name = "lendz", version = get_version())]
#[command(about = "In-memory library lending tracker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the sample lending session
    Demo,

    /// Print the sample catalog
    #[command(alias = "ls")]
    Catalog,
}
