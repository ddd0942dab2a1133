use std::fmt::{Display, Formatter, Result as FmtResult};

/// A link listed in the show notes of an episode.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link {
    /// Target exactly as written in the page, no base URL resolution.
    pub href: String,
    pub text: String,
}
impl Link {
    pub fn new(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self { href: href.into(), text: text.into() }
    }
}
impl Display for Link {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} <{}>", self.text, self.href)
    }
}
