//! Simple CLI that reads HTML from stdin and prints the page tree.
//!
//! Usage: `extract_stdin [--text] [URL] < page.html`
//!
//! The URL, when given, is used to resolve relative links. Without
//! `--text` the whole `Document` is printed as JSON.

use std::io::{self, Read};
use std::process;

use page_tree::{parse_bytes_with_options, Options};
use tracing_subscriber::EnvFilter;

fn main() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let mut text_only = false;
    let mut url = None;
    for arg in std::env::args().skip(1) {
        if arg == "--text" {
            text_only = true;
        } else if url.is_none() && !arg.starts_with('-') {
            url = Some(arg);
        }
    }

    let mut html = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut html) {
        eprintln!("Failed to read from stdin: {err}");
        process::exit(1);
    }

    let options = Options {
        url,
        ..Options::default()
    };

    let page = match parse_bytes_with_options(&html, &options) {
        Ok(page) => page,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    if text_only {
        println!("{}", page.plain_text());
        return;
    }

    match serde_json::to_string_pretty(&page) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("Failed to serialize document: {err}");
            process::exit(1);
        }
    }
}
