//! `sdsdl scrape` – refresh the local snapshot from the listing endpoint.

use anyhow::Result;
use sdsdl_core::config::SdsConfig;
use sdsdl_core::listing;
use sdsdl_core::transport::CurlTransport;
use std::path::Path;

pub fn run_scrape(cfg: &SdsConfig, dest: &Path) -> Result<()> {
    let transport = CurlTransport::new(cfg.http.client_config());
    let bytes = listing::scrape_listing(&transport, &cfg.listing_url, dest)?;
    println!("Saved {} bytes to {}", bytes, dest.display());
    Ok(())
}
