//! Utils

use clap::Parser;

/// Arguments for the storefront demo
#[derive(Debug, Parser)]
pub struct DemoStorefrontArgs {
    /// Catalog fixture set to load
    #[clap(short, long, default_value = "noir")]
    pub catalog: String,
}
