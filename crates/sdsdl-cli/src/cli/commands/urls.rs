//! `sdsdl urls` – dry run: list unique URLs and their target filenames.

use anyhow::Result;
use sdsdl_core::config::SdsConfig;
use sdsdl_core::pipeline;
use sdsdl_core::url_model;

pub fn run_urls(cfg: &SdsConfig) -> Result<()> {
    let urls = pipeline::collect_urls(cfg)?;
    for url in &urls {
        match url_model::filename_from_url(url) {
            Ok(name) => println!("{}\t{}", name, url),
            Err(e) => println!("<{}>\t{}", e, url),
        }
    }
    Ok(())
}
