//! links - print the hyperlinks of an HTML document

mod cli;
mod logging;
mod output;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use link_engine::{parse_html, ParsedDocument};
use link_logging::link_info;

use crate::cli::Cli;
use crate::logging::LogDestination;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(destination) = LogDestination::select(cli.log_file.clone(), cli.quiet) {
        if let Err(err) = logging::initialize(&destination, cli.log_level.into()) {
            eprintln!("warning: {err:#}");
        }
    }

    let result = run(&cli).and_then(|rendered| write_output(io::stdout().lock(), &rendered));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Write the rendered links. A reader that hangs up early (`links | head`)
/// is not an error.
fn write_output<W: Write>(mut out: W, rendered: &str) -> anyhow::Result<()> {
    match out.write_all(rendered.as_bytes()).and_then(|()| out.flush()) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            link_info!("stdout closed early, stopping output");
            Ok(())
        }
        result => result.context("failed to write to stdout"),
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let document = read_document(cli)?;
    let extractor = cli.extractor();

    let links = if cli.first {
        vec![extractor
            .extract_first(document.root())
            .context("no link found")?]
    } else {
        extractor.extract(document.root())
    };
    link_info!("found {} link(s)", links.len());

    output::render(&links, cli.format, cli.base.as_ref())
}

fn read_document(cli: &Cli) -> anyhow::Result<ParsedDocument> {
    let settings = cli.parse_settings();
    match cli.input_path() {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            let document = parse_html(BufReader::new(file), &settings)
                .with_context(|| format!("failed to parse {}", path.display()))?;
            link_info!("read {} as {}", path.display(), document.encoding);
            Ok(document)
        }
        None => parse_html(io::stdin().lock(), &settings).context("failed to parse stdin"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::*;

    fn html_file(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    fn run_with(args: &[&str], file: &NamedTempFile) -> anyhow::Result<String> {
        let mut argv = vec!["links"];
        argv.extend_from_slice(args);
        argv.push(file.path().to_str().unwrap());
        let cli = Cli::try_parse_from(argv)?;
        run(&cli)
    }

    const PAGE: &[u8] = br#"<html><body>
        <a href="/one">One <!-- hidden --></a>
        <p>No link here</p>
        <a href="two.html">Two <em>words</em></a>
    </body></html>"#;

    #[test]
    fn lists_links_as_text() {
        let file = html_file(PAGE);
        assert_eq!(
            run_with(&[], &file).unwrap(),
            "/one\tOne\ntwo.html\tTwo words\n"
        );
    }

    #[test]
    fn first_link_with_base_as_json() {
        let file = html_file(PAGE);
        let rendered = run_with(
            &["--first", "--format", "json", "--base", "https://example.com/"],
            &file,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "href": "https://example.com/one", "text": "One" }])
        );
    }

    #[test]
    fn first_link_fails_without_links() {
        let file = html_file(b"<p>nothing</p>");
        let err = run_with(&["--first"], &file).unwrap_err();
        assert!(format!("{err:#}").contains("no link found"), "{err:#}");
    }

    #[test]
    fn document_without_links_prints_nothing() {
        let file = html_file(b"<p>nothing</p>");
        assert_eq!(run_with(&[], &file).unwrap(), "");
    }

    #[test]
    fn oversized_document_is_an_error() {
        let file = html_file(PAGE);
        let err = run_with(&["--max-bytes", "16"], &file).unwrap_err();
        assert!(format!("{err:#}").contains("exceeds 16 bytes"), "{err:#}");
    }

    /// Accepts `capacity` bytes, then fails every write with `kind`.
    struct ClosingWriter {
        written: Vec<u8>,
        capacity: usize,
        kind: io::ErrorKind,
    }

    impl ClosingWriter {
        fn new(capacity: usize, kind: io::ErrorKind) -> Self {
            Self {
                written: Vec::new(),
                capacity,
                kind,
            }
        }
    }

    impl Write for ClosingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let room = self.capacity - self.written.len();
            if room == 0 {
                return Err(io::Error::new(self.kind, "reader went away"));
            }
            let n = room.min(buf.len());
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn reader_hanging_up_is_a_quiet_success() {
        let file = html_file(PAGE);
        let rendered = run_with(&[], &file).unwrap();
        let mut out = ClosingWriter::new(5, io::ErrorKind::BrokenPipe);

        write_output(&mut out, &rendered).unwrap();
        assert_eq!(out.written, b"/one\t");
    }

    #[test]
    fn other_write_failures_are_errors() {
        let mut out = ClosingWriter::new(0, io::ErrorKind::Other);
        let err = write_output(&mut out, "/one\tOne\n").unwrap_err();
        assert!(format!("{err:#}").contains("failed to write to stdout"), "{err:#}");
    }

    #[test]
    fn complete_output_is_written_verbatim() {
        let mut out = Vec::new();
        write_output(&mut out, "/one\tOne\n").unwrap();
        assert_eq!(out, b"/one\tOne\n");
    }

    #[test]
    fn missing_file_is_an_error() {
        let cli = Cli::try_parse_from(["links", "/definitely/not/here.html"]).unwrap();
        let err = run(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("failed to open"), "{err:#}");
    }
}
