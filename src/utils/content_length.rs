//! Content length extraction utilities.
//!
//! The declared length only drives progress reporting. A missing, malformed
//! or zero `Content-Length` all mean "total unknown"; a transfer never depends
//! on the header being present.

use reqwest::header::{HeaderMap, CONTENT_LENGTH};
use reqwest::Response;

/// Total body size announced by the server, if it announced a usable one.
///
/// # Example
///
/// ```rust,no_run
/// use modelfetch::utils::declared_total;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let response = reqwest::get("https://example.com/gpt-j-hf/config.json").await?;
/// match declared_total(&response) {
///     Some(total) => println!("{} bytes to go", total),
///     None => println!("size unknown"),
/// }
/// # Ok(())
/// # }
/// ```
pub fn declared_total(response: &Response) -> Option<u64> {
    parse_content_length(response.headers())
}

/// Parse the `Content-Length` header, treating zero as unknown.
///
/// # Example
///
/// ```rust
/// use modelfetch::utils::parse_content_length;
/// use reqwest::header::{HeaderMap, HeaderValue, CONTENT_LENGTH};
///
/// let mut headers = HeaderMap::new();
/// headers.insert(CONTENT_LENGTH, HeaderValue::from_static("2048"));
/// assert_eq!(parse_content_length(&headers), Some(2048));
/// ```
pub fn parse_content_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|&len| len > 0)
}
