//! sdsdl core: build SDS document URLs from a local snapshot and fetch the PDFs.

pub mod config;
pub mod logging;

pub mod downloader;
pub mod listing;
pub mod pipeline;
pub mod records;
pub mod storage;
pub mod transport;
pub mod url_model;
