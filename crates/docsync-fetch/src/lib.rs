//! Reference document retrieval for stacks-docsync
//!
//! Small blocking HTTPS layer for the two documents the tooling pulls from
//! the documentation site: the page listing that feeds the compressed
//! index, and the Clarity function reference injected on contract edits.
//! Every call carries a short timeout; nothing here retries or caches.

use reqwest::blocking::Client;
use std::time::Duration;

/// Result type for docsync-fetch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while retrieving a reference document
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
}

/// The page-list document feeding the compressed index
pub const LLMS_TXT_URL: &str = "https://docs.stacks.co/llms.txt";

/// The Clarity function reference injected on contract edits
pub const CLARITY_FUNCTIONS_URL: &str = "https://docs.stacks.co/reference/clarity/functions.md";

/// Timeout for the page-list fetch
pub const PAGE_LIST_TIMEOUT: Duration = Duration::from_secs(15);

/// Timeout for the function-reference fetch, kept tight because it runs
/// inside an interactive hook
pub const REFERENCE_TIMEOUT: Duration = Duration::from_secs(5);

/// Fetch `url` as text, failing on transport errors and non-2xx statuses.
pub fn fetch_text(url: &str, timeout: Duration) -> Result<String> {
    tracing::debug!(url, ?timeout, "fetching reference document");

    let client = Client::builder()
        .timeout(timeout)
        .user_agent("stacks-docsync")
        .build()
        .map_err(|source| Error::Request {
            url: url.to_string(),
            source,
        })?;

    let response = client.get(url).send().map_err(|source| Error::Request {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().map_err(|source| Error::Request {
        url: url.to_string(),
        source,
    })
}
