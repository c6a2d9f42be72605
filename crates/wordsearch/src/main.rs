//! wordsearch - interactive word lookup over a small indexed corpus

mod session;

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordcache::{CachedIndex, DEFAULT_CAPACITY};
use wordindex::{
    DocumentSource, FsReader, IndexConfig, LoadReport, Tokenizer, TokenizerConfig, WordIndex,
    DEFAULT_BUCKETS, DEFAULT_MAX_WORD_LEN,
};

use crate::session::Session;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the built-in corpus (doc1.txt, doc2.txt, doc3.txt)
    #[arg(short, long, default_value = "texts")]
    texts: PathBuf,

    /// Document to index as NAME=PATH; replaces the built-in corpus (repeatable)
    #[arg(short, long = "doc", value_parser = parse_doc)]
    docs: Vec<DocumentSource>,

    /// Cache capacity (number of words)
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY, value_parser = parse_positive)]
    capacity: usize,

    /// Hash table bucket count
    #[arg(short, long, default_value_t = DEFAULT_BUCKETS, value_parser = parse_positive)]
    buckets: usize,

    /// Longest word kept, longer words are truncated (0 = no limit)
    #[arg(long, default_value_t = DEFAULT_MAX_WORD_LEN)]
    max_word_len: usize,
}

impl Args {
    fn sources(&self) -> Vec<DocumentSource> {
        if self.docs.is_empty() {
            DocumentSource::defaults(&self.texts)
        } else {
            self.docs.clone()
        }
    }

    fn tokenizer(&self) -> Tokenizer {
        Tokenizer::new(TokenizerConfig {
            max_word_len: (self.max_word_len > 0).then_some(self.max_word_len),
        })
    }
}

fn parse_doc(s: &str) -> std::result::Result<DocumentSource, String> {
    match s.split_once('=') {
        Some((name, path)) if !name.is_empty() && !path.is_empty() => {
            Ok(DocumentSource::new(name, path))
        }
        _ => Err(format!("expected NAME=PATH, got '{}'", s)),
    }
}

fn parse_positive(s: &str) -> std::result::Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be greater than 0".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// Load the corpus and freeze it behind the cache
fn build(args: &Args, sources: &[DocumentSource]) -> (CachedIndex, LoadReport) {
    let tokenizer = args.tokenizer();
    let mut index = WordIndex::new(IndexConfig {
        buckets: args.buckets,
    });

    let report = wordindex::load(&mut index, &tokenizer, &FsReader, sources);
    info!(
        "Indexed {} words, {} distinct (longest chain {})",
        report.words,
        index.len(),
        index.longest_chain()
    );

    (CachedIndex::new(index, tokenizer, args.capacity), report)
}

fn main() -> Result<()> {
    // Initialize tracing; stdout belongs to the prompt
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let sources = args.sources();

    info!("Starting wordsearch v{}", env!("CARGO_PKG_VERSION"));
    info!("Cache capacity: {}", args.capacity);

    let (cache, report) = build(&args, &sources);
    let cache = Arc::new(cache);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let names: Vec<&str> = report.indexed.iter().map(|name| &**name).collect();
    writeln!(
        out,
        "indexed {} of {} documents ({})",
        report.indexed.len(),
        sources.len(),
        names.join(", ")
    )?;
    writeln!(out, "type a word to search (empty line to quit)")?;

    let session = Session::new(Arc::clone(&cache));
    session.run(io::stdin().lock(), &mut out)?;

    info!("Session finished: {}", cache.stats());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use wordcache::Provenance;

    #[test]
    fn test_parse_doc() {
        let source = parse_doc("notes=/tmp/notes.txt").unwrap();
        assert_eq!(&*source.name, "notes");
        assert_eq!(source.path, PathBuf::from("/tmp/notes.txt"));

        assert!(parse_doc("notes").is_err());
        assert!(parse_doc("=path").is_err());
        assert!(parse_doc("name=").is_err());
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("5"), Ok(5));
        assert!(parse_positive("0").is_err());
        assert!(parse_positive("-1").is_err());
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["wordsearch"]).unwrap();

        assert_eq!(args.capacity, 5);
        assert_eq!(args.buckets, 10007);
        assert_eq!(args.tokenizer().config().max_word_len, Some(255));

        let names: Vec<_> = args.sources().iter().map(|s| s.name.to_string()).collect();
        assert_eq!(names, vec!["doc1.txt", "doc2.txt", "doc3.txt"]);
    }

    #[test]
    fn test_args_rejects_zero_capacity() {
        assert!(Args::try_parse_from(["wordsearch", "--capacity", "0"]).is_err());
    }

    #[test]
    fn test_args_unlimited_words() {
        let args = Args::try_parse_from(["wordsearch", "--max-word-len", "0"]).unwrap();
        assert_eq!(args.tokenizer().config().max_word_len, None);
    }

    #[test]
    fn test_build_from_texts_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("doc1.txt"), "apple banana").unwrap();
        std::fs::write(dir.path().join("doc2.txt"), "banana cherry").unwrap();

        let texts = dir.path().to_str().unwrap();
        let args = Args::try_parse_from(["wordsearch", "--texts", texts]).unwrap();
        let sources = args.sources();
        let (cache, report) = build(&args, &sources);

        assert_eq!(report.indexed.len(), 2);
        assert_eq!(report.skipped.len(), 1);

        let hit = cache.lookup("banana").unwrap().unwrap();
        assert_eq!(hit.provenance, Provenance::Index);
        assert_eq!(hit.documents.len(), 2);
    }

    #[test]
    fn test_build_explicit_docs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fruit.txt");
        std::fs::write(&path, "Durian!").unwrap();

        let doc = format!("fruit={}", path.display());
        let args = Args::try_parse_from(["wordsearch", "--doc", doc.as_str(), "-c", "1"]).unwrap();
        let sources = args.sources();
        let (cache, report) = build(&args, &sources);

        assert_eq!(report.indexed.len(), 1);
        assert_eq!(cache.capacity(), 1);
        let hit = cache.lookup("DURIAN").unwrap().unwrap();
        assert_eq!(hit.documents.iter().collect::<Vec<_>>(), vec!["fruit"]);
    }
}
