mod consts;
pub mod error;
mod extract;
pub mod models;

use tracing::instrument;

use crate::error::Result;
pub use crate::extract::Extractor;
use crate::models::Link;

/// Lists the timecodes of a rendered episode page.
///
/// The first `<h2>` on the page must be followed by a list whose items each
/// start with a fragment link; see [`Extractor::timecodes`].
///
/// # Examples
///
/// ```rust
/// use pineapple_extract::extract_timecodes;
/// let html = r##"
///     <h2>Timecodes</h2>
///     <ul>
///         <li><a href="#00:00">00:00</a> Intro</li>
///         <li><a href="#03:15">03:15</a> Main topic</li>
///     </ul>
/// "##;
///
/// assert_eq!(extract_timecodes(html).unwrap(), vec!["00:00 Intro", "03:15 Main topic"]);
/// ```
#[instrument(skip(html), fields(html_size = html.len()))]
pub fn extract_timecodes(html: &str) -> Result<Vec<String>> {
    Extractor::from_html(html).timecodes()
}

/// Lists the links of a rendered episode page.
///
/// The second `<h2>` on the page must be followed by a list whose items each
/// start with a link; see [`Extractor::links`].
#[instrument(skip(html), fields(html_size = html.len()))]
pub fn extract_links(html: &str) -> Result<Vec<Link>> {
    Extractor::from_html(html).links()
}
