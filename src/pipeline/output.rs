//! Playlist destinations.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Where the playlist is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// A file, created or truncated when the run starts writing.
    File(PathBuf),
    /// Standard output.
    Stdout,
}

impl OutputTarget {
    /// `-` selects standard output, anything else is a file path.
    pub fn parse(s: &str) -> Self {
        if s == "-" {
            Self::Stdout
        } else {
            Self::File(PathBuf::from(s))
        }
    }

    pub fn is_stdout(&self) -> bool {
        matches!(self, Self::Stdout)
    }

    /// Open the destination for writing.
    pub fn open(&self) -> io::Result<Box<dyn Write>> {
        match self {
            Self::File(path) => {
                let file = File::create(path)?;
                Ok(Box::new(BufWriter::new(file)))
            }
            Self::Stdout => Ok(Box::new(BufWriter::new(io::stdout()))),
        }
    }
}

impl From<&str> for OutputTarget {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<PathBuf> for OutputTarget {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdout => write!(f, "<stdout>"),
        }
    }
}
