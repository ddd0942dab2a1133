//! Section extraction for rendered episode pages.
//!
//! An episode page is laid out as a run of `<h2>` headings, each followed by a
//! list whose items start with an anchor:
//!
//! ```html
//! <h2>Timecodes</h2>
//! <ul><li><a href="#00:00">00:00</a> Intro</li></ul>
//! <h2>Links</h2>
//! <ul><li><a href="https://example.com">Example</a></li></ul>
//! ```
//!
//! Sections are found by position, not by heading text: the first heading
//! owns the timecodes and the second owns the links. Pages with an extra
//! heading in front of either section will extract the wrong list.

use exn::OptionExt;
use scraper::node::Node;
use scraper::{ElementRef, Html};
use tracing::instrument;

use crate::consts;
use crate::error::{ErrorKind, Missing, Result};
use crate::models::Link;

#[derive(Debug)]
pub struct Extractor {
    document: Html,
    page: String,
}
impl Extractor {
    pub fn from_document(document: Html) -> Self {
        Self { document, page: consts::UNNAMED_PAGE.to_string() }
    }

    pub fn from_html(html: &str) -> Self {
        Self::from_document(Html::parse_document(html))
    }

    /// Names the page in any error raised during extraction.
    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = page.into();
        self
    }

    /// Lists the timecodes of the first section.
    ///
    /// Each item's leading anchor is swapped for its fragment identifier (the
    /// `href` without its `#`), and the item's remaining text is kept around
    /// it. An item `<li><a href="#12:30">link</a> Listener mail</li>` becomes
    /// `"12:30 Listener mail"`.
    #[instrument(skip(self), fields(page = %self.page))]
    pub fn timecodes(&self) -> Result<Vec<String>> {
        let list = self.section(consts::TIMECODES_SECTION)?;
        let mut timecodes = Vec::new();
        for (index, item) in Self::items(list).enumerate() {
            let (anchor, href) = self.anchor(item, index)?;
            let timecode = href.strip_prefix('#').unwrap_or(href);
            timecodes.push(Self::text_replacing(item, anchor, timecode));
        }
        tracing::debug!(count = timecodes.len(), "extracted timecodes");
        Ok(timecodes)
    }

    /// Lists the leading link of every item in the second section.
    #[instrument(skip(self), fields(page = %self.page))]
    pub fn links(&self) -> Result<Vec<Link>> {
        let list = self.section(consts::LINKS_SECTION)?;
        let mut links = Vec::new();
        for (index, item) in Self::items(list).enumerate() {
            let (anchor, href) = self.anchor(item, index)?;
            links.push(Link::new(href, anchor.text().collect::<String>()));
        }
        tracing::debug!(count = links.len(), "extracted links");
        Ok(links)
    }

    /// The list element directly following the heading at `position`.
    fn section(&self, position: usize) -> Result<ElementRef<'_>> {
        let ordinal = position + 1;
        let heading = self
            .document
            .select(&consts::HEADING_SELECTOR)
            .nth(position)
            .ok_or_raise(|| self.malformed(Missing::Heading(ordinal)))?;
        heading.next_siblings().find_map(ElementRef::wrap).ok_or_raise(|| self.malformed(Missing::List(ordinal)))
    }

    fn items(list: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
        list.children().filter_map(ElementRef::wrap)
    }

    /// The first child element of `item`, which must be an anchor with an `href`.
    fn anchor<'a>(&self, item: ElementRef<'a>, index: usize) -> Result<(ElementRef<'a>, &'a str)> {
        let anchor = item
            .children()
            .find_map(ElementRef::wrap)
            .filter(|el| el.value().name() == consts::ANCHOR_TAG)
            .ok_or_raise(|| self.malformed(Missing::Anchor(index)))?;
        let href = anchor.value().attr("href").ok_or_raise(|| self.malformed(Missing::Href(index)))?;
        Ok((anchor, href))
    }

    /// Text content of `item` with the whole `replaced` subtree standing in as
    /// `replacement`. The document itself is left untouched.
    fn text_replacing(item: ElementRef<'_>, replaced: ElementRef<'_>, replacement: &str) -> String {
        let mut text = String::new();
        for node in item.descendants() {
            if node.id() == replaced.id() {
                text.push_str(replacement);
            } else if let Node::Text(content) = node.value()
                && !node.ancestors().any(|ancestor| ancestor.id() == replaced.id())
            {
                text.push_str(content);
            }
        }
        text
    }

    fn malformed(&self, missing: Missing) -> ErrorKind {
        ErrorKind::MalformedContent { page: self.page.clone(), missing }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const EPISODE: &str = r##"
        <article>
            <p>Show notes for the episode.</p>
            <h2>Timecodes</h2>
            <ul>
                <li><a href="#00:00">00:00</a> Intro</li>
                <li><a href="#05:42">05:42</a> News of the week</li>
                <li><a href="#1:02:03">1:02:03</a> Goodbye</li>
            </ul>
            <h2>Links</h2>
            <ul>
                <li><a href="https://example.com/a11y">Accessibility basics</a></li>
                <li><a href="/episodes/12/">Previous episode</a>, mentioned at the start</li>
            </ul>
            <h2>Credits</h2>
            <ol><li><a href="https://example.com/music">Music</a></li></ol>
        </article>
    "##;

    fn error_of<T: std::fmt::Debug>(result: Result<T>) -> ErrorKind {
        (*result.unwrap_err()).clone()
    }

    #[test]
    fn extracts_timecodes_in_document_order() {
        let timecodes = Extractor::from_html(EPISODE).timecodes().unwrap();
        assert_eq!(timecodes, vec!["00:00 Intro", "05:42 News of the week", "1:02:03 Goodbye"]);
    }

    #[test]
    fn extracts_links_from_second_section() {
        let links = Extractor::from_html(EPISODE).links().unwrap();
        assert_eq!(
            links,
            vec![
                Link::new("https://example.com/a11y", "Accessibility basics"),
                Link::new("/episodes/12/", "Previous episode"),
            ]
        );
    }

    #[test]
    fn anchor_text_is_replaced_not_kept() {
        let html = r##"<h2>T</h2><ul><li><a href="#00:00">Intro</a></li></ul>"##;
        assert_eq!(Extractor::from_html(html).timecodes().unwrap(), vec!["00:00"]);
    }

    #[test]
    fn nested_markup_in_anchor_and_label() {
        let html = r##"<h2>T</h2><ul><li><a href="#10:00"><b>ten</b> o'clock</a> — <em>the</em> break</li></ul>"##;
        assert_eq!(Extractor::from_html(html).timecodes().unwrap(), vec!["10:00 — the break"]);
    }

    #[rstest]
    #[case("#00:00", "00:00")]
    #[case("##00:00", "#00:00")]
    #[case("00:00", "00:00")]
    #[case("#", "")]
    fn strips_one_leading_hash(#[case] href: &str, #[case] expected: &str) {
        let html = format!(r#"<h2>T</h2><ul><li><a href="{href}">x</a></li></ul>"#);
        assert_eq!(Extractor::from_html(&html).timecodes().unwrap(), vec![expected]);
    }

    #[test]
    fn skips_text_between_heading_and_list() {
        let html = "<h2>T</h2>\n  <!-- list -->\n  <ol><li><a href=\"#1\">1</a></li></ol>";
        assert_eq!(Extractor::from_html(html).timecodes().unwrap(), vec!["1"]);
    }

    #[test]
    fn empty_list_extracts_nothing() {
        let html = "<h2>T</h2><ul></ul><h2>L</h2><ul></ul>";
        let extractor = Extractor::from_html(html);
        assert!(extractor.timecodes().unwrap().is_empty());
        assert!(extractor.links().unwrap().is_empty());
    }

    #[test]
    fn missing_first_heading() {
        let err = error_of(Extractor::from_html("<p>nothing here</p>").with_page("ep-1").timecodes());
        assert_eq!(err, ErrorKind::MalformedContent { page: "ep-1".into(), missing: Missing::Heading(1) });
    }

    #[test]
    fn missing_second_heading() {
        let html = r##"<h2>T</h2><ul><li><a href="#0">0</a></li></ul>"##;
        let err = error_of(Extractor::from_html(html).links());
        assert_eq!(err, ErrorKind::MalformedContent { page: "<unnamed>".into(), missing: Missing::Heading(2) });
    }

    #[test]
    fn missing_list_after_heading() {
        let err = error_of(Extractor::from_html("<div><h2>T</h2></div><p>text</p>").timecodes());
        assert!(matches!(err, ErrorKind::MalformedContent { missing: Missing::List(1), .. }));
    }

    #[rstest]
    #[case(r##"<li><a href="#0">0</a></li><li>plain text</li>"##, Missing::Anchor(1))]
    #[case(r##"<li><span>0</span><a href="#0">0</a></li>"##, Missing::Anchor(0))]
    #[case(r##"<li><a name="top">0</a></li>"##, Missing::Href(0))]
    fn malformed_items(#[case] items: &str, #[case] missing: Missing) {
        let html = format!("<h2>T</h2><ul>{items}</ul>");
        let err = error_of(Extractor::from_html(&html).timecodes());
        assert!(matches!(err, ErrorKind::MalformedContent { missing: m, .. } if m == missing));
    }

    #[test]
    fn error_message_names_page_and_element() {
        let err = error_of(Extractor::from_html("").with_page("episodes/3").links());
        assert_eq!(err.to_string(), "malformed content in episodes/3: missing heading #2");
    }
}
