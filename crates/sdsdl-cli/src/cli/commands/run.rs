//! `sdsdl run` – download every document in the snapshot.

use anyhow::Result;
use sdsdl_core::config::SdsConfig;
use sdsdl_core::downloader::{Downloader, Outcome};
use sdsdl_core::pipeline;
use sdsdl_core::transport::CurlTransport;

pub fn run_download(cfg: &SdsConfig) -> Result<()> {
    let downloader = Downloader::new(CurlTransport::new(cfg.http.client_config()));

    let summary = pipeline::run(cfg, &downloader, |_, outcome| {
        if let Outcome::Failed(e) = outcome {
            eprintln!("{}", e);
        }
    })?;

    if summary.total() == 0 {
        println!("No documents to download.");
    } else {
        println!(
            "{} downloaded, {} skipped, {} failed ({} bytes) into {}",
            summary.downloaded,
            summary.skipped,
            summary.failed,
            summary.bytes,
            cfg.output_dir.display()
        );
    }
    Ok(())
}
