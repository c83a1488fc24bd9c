//! Web access: search and page fetch.
//!
//! Search goes through SerpAPI; page fetches are plain GETs whose HTML is reduced
//! to visible text before it is handed to the text-generation service.

mod fetch;
mod search;

pub use fetch::{extract_text_from_html, FetchError, HttpPageFetcher, PageFetcher};
pub use search::{SearchError, SearchHit, SearchProvider, SerpApiClient};
