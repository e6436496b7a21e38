use crate::node::{DomNode, NodeKind};

/// Concatenate the text below `node` in document order, skipping comments.
///
/// A single space is written before the text of every descendant so words in
/// adjacent nodes (`A<b>B</b>`) never run together. The result is not
/// normalized; see [`normalize_whitespace`].
pub fn flatten_text<'a, N: DomNode<'a>>(node: N) -> String {
    match node.kind() {
        NodeKind::Text => return node.text().unwrap_or_default().to_string(),
        NodeKind::Comment => return String::new(),
        _ => {}
    }

    let mut flattened = String::new();
    // Reversed so that popping yields document order.
    let mut pending: Vec<N> = node.child_nodes().rev().collect();
    while let Some(current) = pending.pop() {
        flattened.push(' ');
        match current.kind() {
            NodeKind::Text => flattened.push_str(current.text().unwrap_or_default()),
            NodeKind::Comment => {}
            _ => pending.extend(current.child_nodes().rev()),
        }
    }
    flattened
}

/// Collapse every whitespace run to one space and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(word);
    }
    normalized
}

/// Flattened and normalized text of `node`, as used for link text.
pub fn visible_text<'a, N: DomNode<'a>>(node: N) -> String {
    normalize_whitespace(&flatten_text(node))
}

#[cfg(test)]
mod tests {
    use super::normalize_whitespace;

    #[test]
    fn normalize_collapses_mixed_whitespace() {
        assert_eq!(normalize_whitespace("\n\t a  \r\n b\t"), "a b");
    }

    #[test]
    fn normalize_of_blank_input_is_empty() {
        assert_eq!(normalize_whitespace(" \n\t "), "");
        assert_eq!(normalize_whitespace(""), "");
    }
}
