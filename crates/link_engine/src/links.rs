use std::marker::PhantomData;

use link_logging::{link_debug, link_trace};
use scraper::Html;
use thiserror::Error;

use crate::node::{document_root, DomNode, NodeKind};
use crate::text::visible_text;
use crate::types::{ExtractError, Link};

const ANCHOR_TAG: &str = "a";
const HREF_ATTRIBUTE: &str = "href";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("anchor has no href attribute")]
pub(crate) struct MissingHref;

/// Finds anchors in a document tree and turns them into [`Link`]s.
///
/// Traversal is depth-first pre-order, so links come out in document order
/// and an anchor is reported before any anchor nested inside it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkExtractor {
    max_links: Option<usize>,
}

impl LinkExtractor {
    pub fn new() -> Self {
        Self { max_links: None }
    }

    /// Stop after the first `max_links` links in document order.
    pub fn with_max_links(max_links: usize) -> Self {
        Self {
            max_links: Some(max_links),
        }
    }

    pub fn max_links(&self) -> Option<usize> {
        self.max_links
    }

    pub fn extract<'a, N: DomNode<'a>>(&self, root: N) -> Vec<Link> {
        let links: Vec<Link> = self.iter(root).collect();
        link_debug!("extracted {} link(s)", links.len());
        links
    }

    pub fn extract_first<'a, N: DomNode<'a>>(&self, root: N) -> Result<Link, ExtractError> {
        self.iter(root).next().ok_or(ExtractError::NotFound)
    }

    pub fn extract_document(&self, html: &Html) -> Vec<Link> {
        self.extract(document_root(html))
    }

    fn iter<'a, N: DomNode<'a>>(&self, root: N) -> std::iter::Take<Links<'a, N>> {
        links(root).take(self.max_links.unwrap_or(usize::MAX))
    }
}

/// Every link below `root`, inclusive, in document order.
pub fn extract_links<'a, N: DomNode<'a>>(root: N) -> Vec<Link> {
    LinkExtractor::new().extract(root)
}

/// The first link below `root` in document order.
pub fn extract_first_link<'a, N: DomNode<'a>>(root: N) -> Result<Link, ExtractError> {
    LinkExtractor::new().extract_first(root)
}

/// Lazily walk `root` and yield links as anchors are reached.
pub fn links<'a, N: DomNode<'a>>(root: N) -> Links<'a, N> {
    Links {
        pending: vec![root],
        _tree: PhantomData,
    }
}

/// Iterator returned by [`links`].
///
/// Uses an explicit stack of pending nodes, so document depth is bounded by
/// memory rather than by the call stack.
#[derive(Debug, Clone)]
pub struct Links<'a, N> {
    pending: Vec<N>,
    _tree: PhantomData<&'a ()>,
}

impl<'a, N: DomNode<'a>> Iterator for Links<'a, N> {
    type Item = Link;

    fn next(&mut self) -> Option<Link> {
        while let Some(node) = self.pending.pop() {
            self.pending.extend(node.child_nodes().rev());
            if !is_anchor(node) {
                continue;
            }
            match build_link(node) {
                Ok(link) => {
                    link_trace!("found link to {}", link.href);
                    return Some(link);
                }
                Err(err) => link_debug!("skipping anchor: {err}"),
            }
        }
        None
    }
}

fn is_anchor<'a, N: DomNode<'a>>(node: N) -> bool {
    node.kind() == NodeKind::Element
        && node
            .tag_name()
            .is_some_and(|name| name.eq_ignore_ascii_case(ANCHOR_TAG))
}

/// Build a link from an anchor; the first `href` attribute wins.
pub(crate) fn build_link<'a, N: DomNode<'a>>(node: N) -> Result<Link, MissingHref> {
    let href = node
        .attributes()
        .find(|(key, _)| *key == HREF_ATTRIBUTE)
        .map(|(_, value)| value)
        .ok_or(MissingHref)?;
    Ok(Link::new(href, visible_text(node)))
}
