use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use link_engine::{LinkExtractor, ParseSettings};
use log::LevelFilter;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `href<TAB>text` line per link
    Text,
    /// Pretty-printed JSON array of `{ "href", "text" }` objects
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "links")]
#[command(version, about = "Extract hyperlinks from an HTML document", long_about = None)]
#[command(after_help = "EXAMPLES:
    links page.html                      List every link in page.html
    curl -s https://example.com | links  Read the document from stdin
    links --first --format json page.html")]
pub struct Cli {
    /// HTML document to read; stdin when omitted or `-`
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Print only the first link and fail when there is none
    #[arg(long)]
    pub first: bool,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Charset label or Content-Type value; detected when omitted
    #[arg(long, value_name = "LABEL")]
    pub charset: Option<String>,

    /// Refuse documents larger than this
    #[arg(long, value_name = "BYTES")]
    pub max_bytes: Option<u64>,

    /// Stop after this many links
    #[arg(long, value_name = "N")]
    pub max_links: Option<usize>,

    /// Print hrefs resolved against this URL
    #[arg(long, value_name = "URL")]
    pub base: Option<Url>,

    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Suppress log output on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// The file to read, or `None` for stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }

    pub fn parse_settings(&self) -> ParseSettings {
        ParseSettings {
            charset: self.charset.clone(),
            max_bytes: self.max_bytes,
        }
    }

    pub fn extractor(&self) -> LinkExtractor {
        match self.max_links {
            Some(max_links) => LinkExtractor::with_max_links(max_links),
            None => LinkExtractor::new(),
        }
    }
}
