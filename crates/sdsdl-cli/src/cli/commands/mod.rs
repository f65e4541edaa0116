//! CLI command handlers. Each command is in its own file.

mod run;
mod scrape;
mod urls;

pub use run::run_download;
pub use scrape::run_scrape;
pub use urls::run_urls;
