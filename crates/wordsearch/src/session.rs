//! Line-oriented query session

use std::fmt;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing::warn;
use wordcache::{CachedIndex, Hit};
use wordindex::Error;

/// Prompt printed before each line is read
pub const PROMPT: &str = "> ";

/// Response to one input line
pub enum Reply<'a> {
    /// Empty line: end the session
    Quit,
    /// Input had no letters or digits
    Retype,
    /// Word found
    Found(Hit<'a>),
    /// Word not in any document
    NotFound,
}

impl fmt::Display for Reply<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Quit => Ok(()),
            Reply::Retype => writeln!(f, "provide at least one letter or digit"),
            Reply::Found(hit) => {
                writeln!(f, "served from {}", hit.provenance)?;
                write!(f, "found in:")?;
                for id in hit.documents.iter_recent_first() {
                    write!(f, " {}", id)?;
                }
                writeln!(f)
            }
            Reply::NotFound => writeln!(f, "not found"),
        }
    }
}

/// Answers query lines against a shared CachedIndex
pub struct Session {
    index: Arc<CachedIndex>,
}

impl Session {
    /// Create a session over a loaded CachedIndex
    pub fn new(index: Arc<CachedIndex>) -> Self {
        Self { index }
    }

    /// Handle one line with its line terminator already removed
    pub fn handle(&self, line: &str) -> Reply<'_> {
        if line.is_empty() {
            return Reply::Quit;
        }

        match self.index.lookup(line) {
            Ok(Some(hit)) => Reply::Found(hit),
            Ok(None) => Reply::NotFound,
            Err(Error::InvalidQuery(_)) => Reply::Retype,
            Err(e) => {
                warn!("Lookup failed: {}", e);
                Reply::NotFound
            }
        }
    }

    /// Prompt, read and answer lines until an empty line or end of input
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> io::Result<()> {
        let mut buf = Vec::new();

        loop {
            output.write_all(PROMPT.as_bytes())?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                // End of input
                return Ok(());
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
            }

            let line = String::from_utf8_lossy(&buf);
            let reply = self.handle(&line);
            if matches!(reply, Reply::Quit) {
                return Ok(());
            }
            write!(output, "{}", reply)?;
        }
    }
}
