use anyhow::Context;
use link_engine::Link;
use link_logging::link_warn;
use url::Url;

use crate::cli::OutputFormat;

/// Render links for stdout. Hrefs that do not resolve against `base` are
/// printed as found.
pub fn render(
    links: &[Link],
    format: OutputFormat,
    base: Option<&Url>,
) -> anyhow::Result<String> {
    let links: Vec<Link> = match base {
        Some(base) => links.iter().map(|link| absolutize(link, base)).collect(),
        None => links.to_vec(),
    };

    match format {
        OutputFormat::Text => Ok(links
            .iter()
            .map(|link| format!("{}\t{}\n", link.href, link.text))
            .collect()),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(&links).context("failed to serialize links")?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn absolutize(link: &Link, base: &Url) -> Link {
    match link.resolve(base) {
        Ok(url) => Link::new(url, link.text.clone()),
        Err(err) => {
            link_warn!("keeping unresolvable href {:?}: {err}", link.href);
            link.clone()
        }
    }
}
