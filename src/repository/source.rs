use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use crate::core::error::{Error, Result};

/// One raw bulk-data line, without its line terminator.
///
/// Decoding is deferred so a single undecodable line can be skipped on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    bytes: Vec<u8>,
}

impl SourceLine {
    pub fn new(bytes: Vec<u8>) -> Self {
        SourceLine { bytes }
    }

    /// UTF-8 view of the line, `MalformedRecord` when the bytes are not UTF-8
    pub fn as_str(&self) -> Result<&str> {
        std::str::from_utf8(&self.bytes).map_err(|e| {
            Error::malformed_record(format!("Record is not valid UTF-8: {}", e))
        })
    }

    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

impl From<String> for SourceLine {
    fn from(line: String) -> Self {
        SourceLine::new(line.into_bytes())
    }
}

impl From<&str> for SourceLine {
    fn from(line: &str) -> Self {
        SourceLine::new(line.as_bytes().to_vec())
    }
}

/// Ordered bulk-data lines, one record per line
pub trait DataSource {
    fn name(&self) -> &str;

    /// Fails only when the source itself cannot be opened or read.
    fn read_all_lines(&mut self) -> Result<Vec<SourceLine>>;
}

/// Split on `\n`, dropping a trailing `\r` from each line.
fn read_raw_lines<R: BufRead>(reader: R, name: &str) -> Result<Vec<SourceLine>> {
    reader.split(b'\n')
        .map(|chunk| {
            let mut bytes = chunk.map_err(|e| {
                Error::data_source_unavailable(format!("Cannot read {}: {}", name, e))
            })?;
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            Ok(SourceLine::new(bytes))
        })
        .collect()
}

/// Text file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    pub path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        FileSource { path, name }
    }
}

impl DataSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_all_lines(&mut self) -> Result<Vec<SourceLine>> {
        let file = File::open(&self.path).map_err(|e| {
            Error::data_source_unavailable(format!("Cannot open {}: {}", self.name, e))
        })?;
        read_raw_lines(BufReader::new(file), &self.name)
    }
}

/// Lines already held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    pub lines: Vec<String>,
}

impl MemorySource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MemorySource {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl DataSource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    fn read_all_lines(&mut self) -> Result<Vec<SourceLine>> {
        Ok(self.lines.iter().map(|line| SourceLine::from(line.as_str())).collect())
    }
}

/// Any buffered reader, e.g. stdin or a response body handed over by the host
pub struct ReaderSource<R: BufRead> {
    reader: R,
    name: String,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        ReaderSource {
            reader,
            name: name.into(),
        }
    }
}

impl<R: BufRead> DataSource for ReaderSource<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_all_lines(&mut self) -> Result<Vec<SourceLine>> {
        read_raw_lines(&mut self.reader, &self.name)
    }
}
