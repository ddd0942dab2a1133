use scraper::Selector;
use std::sync::LazyLock;

macro_rules! selector {
    ($name:ident, $css:expr) => {
        pub(crate) static $name: LazyLock<Selector> = LazyLock::new(|| Selector::parse($css).unwrap());
    };
}

// Every section of an episode page starts with one of these.
selector!(HEADING_SELECTOR, "h2");

/// Position of the timecodes section among the page headings.
pub(crate) const TIMECODES_SECTION: usize = 0;
/// Position of the links section among the page headings.
pub(crate) const LINKS_SECTION: usize = 1;

pub(crate) const ANCHOR_TAG: &str = "a";
pub(crate) const UNNAMED_PAGE: &str = "<unnamed>";
