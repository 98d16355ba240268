// Line sources: standard input or a file, read asynchronously.

use std::fmt;
use std::path::PathBuf;

use tokio::io::{self, AsyncBufRead, BufReader};

/// Where input text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineSource {
    Stdin,
    File(PathBuf),
}

impl LineSource {
    /// `None` or `-` means standard input.
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) if p.as_os_str() != "-" => LineSource::File(p),
            _ => LineSource::Stdin,
        }
    }

    /// Open the source as a buffered async reader.
    pub async fn open(&self) -> io::Result<Box<dyn AsyncBufRead + Unpin + Send>> {
        match self {
            LineSource::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
            LineSource::File(path) => {
                let file = tokio::fs::File::open(path).await?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

impl fmt::Display for LineSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineSource::Stdin => write!(f, "<stdin>"),
            LineSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
