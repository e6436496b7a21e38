use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use link_logging::link_trace;

/// Where the encoding used for a document came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharsetSource {
    ByteOrderMark,
    Declared,
    Detected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedHtml {
    pub html: String,
    pub encoding: &'static str,
    pub source: CharsetSource,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unknown charset label {0:?}")]
    UnknownCharset(String),
    #[error("input is not valid {encoding}")]
    Malformed { encoding: &'static str },
}

/// Decode raw bytes into UTF-8: BOM -> declared charset -> chardetng guess.
///
/// `declared` is either a bare label (`"iso-8859-1"`) or a Content-Type
/// value (`"text/html; charset=iso-8859-1"`). A media type without a charset
/// parameter falls through to detection.
pub fn decode_html(bytes: &[u8], declared: Option<&str>) -> Result<DecodedHtml, DecodeError> {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding, CharsetSource::ByteOrderMark);
    }

    if let Some(label) = declared.and_then(declared_label) {
        let encoding = Encoding::for_label(label.as_bytes())
            .ok_or_else(|| DecodeError::UnknownCharset(label.to_string()))?;
        return decode_with(bytes, encoding, CharsetSource::Declared);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    decode_with(bytes, encoding, CharsetSource::Detected)
}

fn declared_label(declared: &str) -> Option<&str> {
    let mut parts = declared.split(';').map(str::trim);
    let first = parts.next().unwrap_or_default();
    if !first.contains('/') {
        return Some(first).filter(|label| !label.is_empty());
    }
    parts.find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches(&['"', '\''][..]))
    })
}

fn decode_with(
    bytes: &[u8],
    encoding: &'static Encoding,
    source: CharsetSource,
) -> Result<DecodedHtml, DecodeError> {
    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(DecodeError::Malformed {
            encoding: used.name(),
        });
    }
    link_trace!("decoded {} bytes as {} ({:?})", bytes.len(), used.name(), source);
    Ok(DecodedHtml {
        html: text.into_owned(),
        encoding: used.name(),
        source,
    })
}
