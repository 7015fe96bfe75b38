//! Output sinks that receive the resolved root directory.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::Result;

use super::{OutputFormat, OutputFormatter};

/// Destination for a published property.
pub trait OutputSink {
    /// Publish `value` under the name `property`.
    ///
    /// # Errors
    ///
    /// Returns an error if formatting or writing fails.
    fn publish(&mut self, property: &str, value: &str) -> Result<()>;
}

/// Sink that writes formatted lines to any writer, such as stdout.
pub struct WriterSink<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> WriterSink<W> {
    /// Create a sink writing `format` to `writer`.
    #[must_use]
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self {
            writer,
            formatter: format.create_formatter(),
        }
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn publish(&mut self, property: &str, value: &str) -> Result<()> {
        let line = self.formatter.format(property, value)?;
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Sink that writes to a file, replacing or appending to its contents.
///
/// # Examples
///
/// ```
/// use rootdir::output::{FileSink, OutputFormat, OutputSink};
///
/// let dir = tempfile::tempdir().unwrap();
/// let file = dir.path().join("root.properties");
///
/// let mut sink = FileSink::new(&file, OutputFormat::Properties);
/// sink.publish("rootdir", "/repo").unwrap();
///
/// assert_eq!(std::fs::read_to_string(&file).unwrap(), "rootdir=/repo\n");
/// ```
pub struct FileSink {
    path: PathBuf,
    append: bool,
    formatter: Box<dyn OutputFormatter>,
}

impl FileSink {
    /// Create a sink that truncates `path` on publish.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            path: path.into(),
            append: false,
            formatter: format.create_formatter(),
        }
    }

    /// Append to the file instead of replacing it.
    #[must_use]
    pub fn append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }

    /// The file this sink writes to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputSink for FileSink {
    fn publish(&mut self, property: &str, value: &str) -> Result<()> {
        let line = self.formatter.format(property, value)?;

        let mut options = OpenOptions::new();
        options.create(true);
        if self.append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }

        let mut file = options.open(&self.path)?;
        writeln!(file, "{line}")?;
        log::debug!("Wrote {property} to {}", self.path.display());
        Ok(())
    }
}

/// Sink that keeps published values in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    entries: Vec<(String, String)>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything published so far, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// The most recent value published under `property`.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }
}

impl OutputSink for MemorySink {
    fn publish(&mut self, property: &str, value: &str) -> Result<()> {
        self.entries.push((property.to_string(), value.to_string()));
        Ok(())
    }
}
