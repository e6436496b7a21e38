use std::io::{self, Read};

use ego_tree::NodeRef;
use link_logging::link_debug;
use scraper::{Html, Node};
use thiserror::Error;

use crate::decode::{decode_html, DecodeError};
use crate::links::LinkExtractor;
use crate::node::document_root;
use crate::types::{ExtractError, Link};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseSettings {
    /// Charset label or Content-Type value; detected from the bytes when unset.
    pub charset: Option<String>,
    pub max_bytes: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read html input: {0}")]
    Io(#[from] io::Error),
    #[error("html input exceeds {max_bytes} bytes")]
    TooLarge { max_bytes: u64 },
    #[error("failed to decode html input: {0}")]
    Decode(#[from] DecodeError),
}

/// A parsed HTML document together with the encoding it was read as.
#[derive(Debug)]
pub struct ParsedDocument {
    pub html: Html,
    pub encoding: &'static str,
}

impl ParsedDocument {
    pub fn root(&self) -> NodeRef<'_, Node> {
        document_root(&self.html)
    }
}

/// Read, decode and parse a whole HTML document.
///
/// The tree builder recovers from any markup, so failures only come from
/// reading or decoding the input.
pub fn parse_html<R: Read>(
    reader: R,
    settings: &ParseSettings,
) -> Result<ParsedDocument, ParseError> {
    let bytes = read_limited(reader, settings.max_bytes)?;
    let decoded = decode_html(&bytes, settings.charset.as_deref())?;
    let html = Html::parse_document(&decoded.html);
    link_debug!(
        "parsed {} bytes of html as {} ({} tree nodes)",
        bytes.len(),
        decoded.encoding,
        html.tree.nodes().count()
    );
    Ok(ParsedDocument {
        html,
        encoding: decoded.encoding,
    })
}

fn read_limited<R: Read>(mut reader: R, max_bytes: Option<u64>) -> Result<Vec<u8>, ParseError> {
    let mut bytes = Vec::new();
    match max_bytes {
        Some(max_bytes) => {
            reader
                .take(max_bytes.saturating_add(1))
                .read_to_end(&mut bytes)?;
            if bytes.len() as u64 > max_bytes {
                return Err(ParseError::TooLarge { max_bytes });
            }
        }
        None => {
            reader.read_to_end(&mut bytes)?;
        }
    }
    Ok(bytes)
}

/// Parse `reader` with default settings and return every link in it.
pub fn parse_links<R: Read>(reader: R) -> Result<Vec<Link>, ParseError> {
    parse_links_with(reader, &ParseSettings::default(), &LinkExtractor::new())
}

pub fn parse_links_with<R: Read>(
    reader: R,
    settings: &ParseSettings,
    extractor: &LinkExtractor,
) -> Result<Vec<Link>, ParseError> {
    let document = parse_html(reader, settings)?;
    Ok(extractor.extract(document.root()))
}

/// Parse `reader` with default settings and return its first link.
pub fn parse_first_link<R: Read>(reader: R) -> Result<Link, ExtractError> {
    let document = parse_html(reader, &ParseSettings::default())?;
    LinkExtractor::new().extract_first(document.root())
}
