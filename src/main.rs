mod cli;

use std::io::{BufRead, Write};

use clap::Parser;
use cli::{Cli, Cmd, StatFormat};
use lettertrie::Trie;
use thiserror::Error;
use tracing::{debug, error, info};

#[derive(Debug, Error)]
enum Error {
    #[error("Unable to read the word list: {0}")]
    Io(#[from] std::io::Error),
    #[error("Line {line} of the word list: {source}")]
    WordList {
        line: usize,
        source: lettertrie::Error,
    },
    #[error(transparent)]
    Trie(#[from] lettertrie::Error),
    #[error("Unable to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    let mut cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity.level())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = entry(&mut cli, &mut std::io::stdout().lock()) {
        error!("{err}");
        std::process::exit(1)
    }
}

/// Builds a trie from one word per line, ignoring blank lines.
fn load(reader: impl BufRead) -> Result<Trie, Error> {
    let mut trie = Trie::new();
    let mut duplicates = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            debug!(line = index + 1, "Skipping blank line");
            continue;
        }
        let new = trie.insert(word).map_err(|source| Error::WordList {
            line: index + 1,
            source,
        })?;
        if !new {
            duplicates += 1;
        }
    }
    info!(words = trie.len(), duplicates, "Loaded word list");
    Ok(trie)
}

fn entry(cli: &mut Cli, out: &mut impl Write) -> Result<(), Error> {
    let trie = load(cli.words.lock())?;
    run(&trie, &cli.cmd, out)
}

fn run(trie: &Trie, cmd: &Cmd, out: &mut impl Write) -> Result<(), Error> {
    match cmd {
        Cmd::Contains(opts) => {
            for key in &opts.keys {
                writeln!(out, "{key}\t{}", trie.contains(key)?)?;
            }
        }
        Cmd::StartsWith(opts) => {
            for key in &opts.keys {
                writeln!(out, "{key}\t{}", trie.starts_with(key)?)?;
            }
        }
        Cmd::Complete(opts) => {
            let words = trie
                .completions(&opts.prefix)?
                .take(opts.limit.unwrap_or(usize::MAX));
            if opts.json {
                let words: lettertrie::Seq<String> = words.collect();
                serde_json::to_writer(&mut *out, &words)?;
                writeln!(out)?;
            } else {
                for word in words {
                    writeln!(out, "{word}")?;
                }
            }
        }
        Cmd::Stats(opts) => {
            let stats = trie.stats();
            match opts.format {
                StatFormat::Human => {
                    writeln!(out, "Keys:    {}", stats.keys)?;
                    writeln!(out, "Nodes:   {}", stats.nodes)?;
                    writeln!(out, "Symbols: {}", stats.symbols)?;
                    writeln!(out, "Depth:   {}", stats.depth)?;
                }
                StatFormat::Json => {
                    serde_json::to_writer_pretty(&mut *out, &stats)?;
                    writeln!(out)?;
                }
            }
        }
    }
    Ok(())
}
