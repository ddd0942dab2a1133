//! Command-line entry points for the site build.
//!
//! Every filter is exposed as a subcommand so that the external site
//! generator can shell out to it. Failures exit non-zero; the build treats
//! that as a broken page and stops.

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use exn::ResultExt;
use pineapple_config::{Config, DEFAULT_CONFIG_FILE};
use pineapple_extract::Extractor;
use pineapple_filters::{html_date_string, parse_date, readable_date};
use serde_json::to_writer_pretty;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::instrument;

use crate::error::{ErrorKind, Result};

const STDIN: &str = "-";

#[derive(Debug, Parser)]
#[command(name = "pineapple", version, about = "Content filters for the podcast website")]
pub struct Args {
    /// Configuration file; missing files are ignored.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
    /// Increase log verbosity (repeatable).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the timecodes of a rendered episode page.
    Timecodes(PageArgs),
    /// List the links of a rendered episode page.
    Links(PageArgs),
    /// Append content digests to asset URLs (production mode only).
    Hash {
        #[arg(required = true)]
        urls: Vec<String>,
    },
    /// Format a date the way the site displays it.
    Date { value: String },
}

#[derive(Debug, ClapArgs)]
pub struct PageArgs {
    /// Rendered HTML page; reads stdin when omitted or `-`.
    pub file: Option<PathBuf>,
    /// Page identifier used in error messages (defaults to the file path).
    #[arg(long)]
    pub page: Option<String>,
    /// Print JSON instead of one entry per line.
    #[arg(long)]
    pub json: bool,
}
impl PageArgs {
    fn source(&self) -> Option<&PathBuf> {
        self.file.as_ref().filter(|path| path.as_os_str() != STDIN)
    }

    fn page_id(&self) -> String {
        match (&self.page, self.source()) {
            (Some(page), _) => page.clone(),
            (None, Some(path)) => path.display().to_string(),
            (None, None) => "<stdin>".to_string(),
        }
    }

    fn read(&self) -> Result<String> {
        match self.source() {
            Some(path) => fs::read_to_string(path).or_raise(|| ErrorKind::Input(path.display().to_string())),
            None => {
                let mut html = String::new();
                io::stdin().read_to_string(&mut html).or_raise(|| ErrorKind::Input(STDIN.to_string()))?;
                Ok(html)
            },
        }
    }

    fn extractor(&self) -> Result<Extractor> {
        Ok(Extractor::from_html(&self.read()?).with_page(self.page_id()))
    }
}

pub fn run(args: Args, out: &mut impl Write) -> Result<()> {
    match args.command {
        Command::Timecodes(page) => timecodes(&page, out),
        Command::Links(page) => links(&page, out),
        Command::Hash { urls } => {
            let config = Config::load_from(&args.config).or_raise(|| ErrorKind::Config)?;
            hash(&config, &urls, out)
        },
        Command::Date { value } => date(&value, out),
    }?;
    out.flush().or_raise(|| ErrorKind::Output)
}

#[instrument(skip_all, fields(page = %args.page_id()))]
fn timecodes(args: &PageArgs, out: &mut impl Write) -> Result<()> {
    let timecodes = args.extractor()?.timecodes().or_raise(|| ErrorKind::Extract)?;
    if args.json {
        to_writer_pretty(&mut *out, &timecodes).or_raise(|| ErrorKind::Output)?;
        return writeln!(out).or_raise(|| ErrorKind::Output);
    }
    for timecode in timecodes {
        writeln!(out, "{timecode}").or_raise(|| ErrorKind::Output)?;
    }
    Ok(())
}

#[instrument(skip_all, fields(page = %args.page_id()))]
fn links(args: &PageArgs, out: &mut impl Write) -> Result<()> {
    let links = args.extractor()?.links().or_raise(|| ErrorKind::Extract)?;
    if args.json {
        to_writer_pretty(&mut *out, &links).or_raise(|| ErrorKind::Output)?;
        return writeln!(out).or_raise(|| ErrorKind::Output);
    }
    for link in links {
        writeln!(out, "{}\t{}", link.href, link.text).or_raise(|| ErrorKind::Output)?;
    }
    Ok(())
}

#[instrument(skip_all, fields(mode = %config.mode, count = urls.len()))]
fn hash(config: &Config, urls: &[String], out: &mut impl Write) -> Result<()> {
    let hasher = config.file_hasher();
    for url in urls {
        let hashed = hasher.file_hash(url).or_raise(|| ErrorKind::Asset)?;
        writeln!(out, "{hashed}").or_raise(|| ErrorKind::Output)?;
    }
    Ok(())
}

fn date(value: &str, out: &mut impl Write) -> Result<()> {
    let date = parse_date(value).or_raise(|| ErrorKind::Filter)?;
    let html = html_date_string(date).or_raise(|| ErrorKind::Filter)?;
    writeln!(out, "{}\n{html}", readable_date(date)).or_raise(|| ErrorKind::Output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pineapple_assets::Mode;
    use rstest::rstest;

    const PAGE: &str = r##"
        <h2>Timecodes</h2>
        <ul><li><a href="#00:00">00:00</a> Intro</li><li><a href="#04:20">04:20</a> Mail</li></ul>
        <h2>Links</h2>
        <ul><li><a href="https://example.com">Example</a></li></ul>
    "##;

    fn page_file(html: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("episode.html");
        fs::write(&path, html).unwrap();
        (dir, path)
    }

    fn output(command: Command) -> Result<String> {
        let args = Args { config: PathBuf::from("absent.toml"), verbose: 0, command };
        let mut out = Vec::new();
        run(args, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn page_args(file: PathBuf, json: bool) -> PageArgs {
        PageArgs { file: Some(file), page: None, json }
    }

    #[test]
    fn parses_subcommands() {
        let args = Args::try_parse_from(["pineapple", "-vv", "links", "ep.html", "--json", "--page", "ep-7"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.config, PathBuf::from(DEFAULT_CONFIG_FILE));
        let Command::Links(page) = args.command else { panic!("expected links") };
        assert_eq!(page.file, Some(PathBuf::from("ep.html")));
        assert_eq!(page.page_id(), "ep-7");
        assert!(page.json);
    }

    #[rstest]
    #[case(&["pineapple", "hash"])]
    #[case(&["pineapple", "date"])]
    #[case(&["pineapple"])]
    fn rejects_incomplete_commands(#[case] argv: &[&str]) {
        assert!(Args::try_parse_from(argv).is_err());
    }

    #[test]
    fn stdin_page_id() {
        let args = PageArgs { file: Some(PathBuf::from(STDIN)), page: None, json: false };
        assert!(args.source().is_none());
        assert_eq!(args.page_id(), "<stdin>");
    }

    #[test]
    fn prints_timecodes() {
        let (_dir, path) = page_file(PAGE);
        assert_eq!(output(Command::Timecodes(page_args(path, false))).unwrap(), "00:00 Intro\n04:20 Mail\n");
    }

    #[test]
    fn prints_links_as_json() {
        let (_dir, path) = page_file(PAGE);
        let json = output(Command::Links(page_args(path, true))).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, serde_json::json!([{ "href": "https://example.com", "text": "Example" }]));
    }

    #[test]
    fn malformed_page_fails() {
        let (_dir, path) = page_file("<p>no sections</p>");
        let err = output(Command::Timecodes(page_args(path, false))).unwrap_err();
        assert!(matches!(&*err, ErrorKind::Extract));
    }

    #[test]
    fn missing_page_fails() {
        let err = output(Command::Links(page_args(PathBuf::from("/nonexistent/page.html"), false))).unwrap_err();
        assert!(matches!(&*err, ErrorKind::Input(_)));
    }

    #[test]
    fn hashes_in_production() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("app.js"), "console.log(1)").unwrap();
        let config = Config { mode: Mode::Production, output_dir: dir.path().to_path_buf() };
        let mut out = Vec::new();
        hash(&config, &["/app.js".to_string()], &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("/app.js?v="));
        assert!(hash(&config, &["/missing.js".to_string()], &mut Vec::<u8>::new()).is_err());
    }

    #[test]
    fn passes_urls_through_in_development() {
        let config = Config { mode: Mode::Development, output_dir: PathBuf::from("/nonexistent") };
        let mut out = Vec::new();
        hash(&config, &["/app.js".to_string(), "/missing.css".to_string()], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "/app.js\n/missing.css\n");
    }

    #[test]
    fn prints_dates() {
        let out = output(Command::Date { value: "2026-10-19".to_string() }).unwrap();
        assert_eq!(out, "19 октября 2026\n2026-10-19T00:00:00.000Z\n");
        assert!(output(Command::Date { value: "someday".to_string() }).is_err());
    }
}
