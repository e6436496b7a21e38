use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::parse::ParseError;

/// A hyperlink found in a document: where it points and what it says.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    pub text: String,
}

impl Link {
    pub fn new(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            text: text.into(),
        }
    }

    /// Resolve `href` against `base`. Absolute hrefs come back unchanged.
    pub fn resolve(&self, base: &Url) -> Result<Url, url::ParseError> {
        base.join(self.href.trim())
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("document contains no anchor with an href")]
    NotFound,
    #[error(transparent)]
    Parse(#[from] ParseError),
}
