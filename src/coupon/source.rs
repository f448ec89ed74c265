//! Coupon list sources.
//!
//! A source is anything that can be opened as a line-oriented text stream. Each
//! verifier opens its own reader, so sources never share handle state.

use async_trait::async_trait;
use std::io;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, BufReader};

/// Buffered line reader handed out by [`CouponSource::open`].
pub type LineReader = Box<dyn AsyncBufRead + Send + Unpin>;

/// A named, openable list of coupon codes, one per line.
#[async_trait]
pub trait CouponSource: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Opens a fresh reader positioned at the first line.
    async fn open(&self) -> io::Result<LineReader>;
}

/// A coupon list stored in a file on disk.
#[derive(Debug, Clone)]
pub struct FileCouponSource {
    name: String,
    path: PathBuf,
}

impl FileCouponSource {
    /// The source is named after the file name, e.g. `couponbase1`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { name, path }
    }
}

#[async_trait]
impl CouponSource for FileCouponSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn open(&self) -> io::Result<LineReader> {
        let file = tokio::fs::File::open(&self.path).await?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// An in-memory coupon list.
#[derive(Debug, Clone)]
pub struct StaticCouponSource {
    name: String,
    contents: Vec<u8>,
}

impl StaticCouponSource {
    pub fn new<I, S>(name: impl Into<String>, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let contents = codes
            .into_iter()
            .map(|code| code.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join("\n")
            .into_bytes();
        Self {
            name: name.into(),
            contents,
        }
    }
}

#[async_trait]
impl CouponSource for StaticCouponSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn open(&self) -> io::Result<LineReader> {
        Ok(Box::new(io::Cursor::new(self.contents.clone())))
    }
}
