//! Link engine: hyperlink extraction over parsed HTML trees.
mod decode;
mod links;
mod node;
mod parse;
mod text;
mod types;

pub use decode::{decode_html, CharsetSource, DecodeError, DecodedHtml};
pub use links::{extract_first_link, extract_links, links, LinkExtractor, Links};
pub use node::{document_root, DomNode, NodeKind};
pub use parse::{
    parse_first_link, parse_html, parse_links, parse_links_with, ParseError, ParseSettings,
    ParsedDocument,
};
pub use text::{flatten_text, normalize_whitespace, visible_text};
pub use types::{ExtractError, Link};
