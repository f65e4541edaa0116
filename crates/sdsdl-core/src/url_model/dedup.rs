//! Order-preserving removal of duplicate URLs.

use std::collections::HashSet;

/// Keeps the first occurrence of each URL and drops later exact duplicates.
pub fn dedup_urls(urls: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(urls.len());
    let mut out = Vec::with_capacity(urls.len());
    for url in urls {
        if seen.insert(url.clone()) {
            out.push(url);
        }
    }
    out
}
