//! Source retrieval: local files or HTTP(S) URLs.

use std::error::Error;
use std::fs;
use std::path::Path;

/// Published landscape view used when no source is given.
pub const DEFAULT_SOURCE_URL: &str = "https://bian.org/servicelandscape-12-0-0/views/view_51891.html";

/// Whether `source` names a remote document.
pub fn is_remote(source: &str) -> bool {
    let lower = source.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Load the raw bytes of a source, fetching remote ones over HTTP.
pub fn load_source(source: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    if is_remote(source) {
        fetch(source)
    } else {
        Ok(fs::read(Path::new(source))?)
    }
}

/// Fetch a document once; no retry.
fn fetch(url: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    log::info!("fetching {}", url);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let body = rt.block_on(async {
        let response = reqwest::get(url).await?.error_for_status()?;
        let bytes = response.bytes().await?;
        Ok::<_, reqwest::Error>(bytes.to_vec())
    })?;

    log::debug!("fetched {} bytes", body.len());
    Ok(body)
}
