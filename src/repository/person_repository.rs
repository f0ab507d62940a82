use rayon::prelude::*;
use tracing::{info, warn};
use crate::analysis::converter::RecordConverter;
use crate::core::config::Config;
use crate::core::error::{Error, Result};
use crate::core::types::Person;
use crate::index::inverted::PersonInvertedIndex;
use crate::repository::source::{DataSource, FileSource, MemorySource, SourceLine};

/// A bulk-data line that could not be converted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub line_number: usize,     // 1-based
    pub line: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub source: String,
    pub total_lines: usize,
    pub loaded: usize,
    pub skipped: Vec<SkippedRecord>,
}

impl LoadReport {
    pub fn is_lossless(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Read-only person store backed by an inverted index.
///
/// All records are loaded during construction; nothing is inserted afterwards,
/// so a repository can be shared across threads behind an `Arc`.
#[derive(Debug)]
pub struct PersonRepository {
    index: PersonInvertedIndex,
    report: LoadReport,
}

impl PersonRepository {
    /// Load from the file named by `config.data_path`
    pub fn open(config: &Config) -> Result<Self> {
        let mut source = FileSource::new(&config.data_path);
        Self::load(&mut source, config)
    }

    pub fn load(source: &mut dyn DataSource, config: &Config) -> Result<Self> {
        let lines = source.read_all_lines()?;
        let parsed = parse_lines(&lines, config);

        let mut index = PersonInvertedIndex::new();
        let mut report = LoadReport {
            source: source.name().to_string(),
            total_lines: lines.len(),
            ..LoadReport::default()
        };

        for (line_number, result) in parsed {
            match result {
                Ok(person) => {
                    index.add(person);
                    report.loaded += 1;
                }
                Err(e) if config.strict_load => {
                    return Err(Error::new(
                        e.kind,
                        format!("{} line {}: {}", report.source, line_number, e.context),
                    ));
                }
                Err(e) => {
                    warn!(source = %report.source, line = line_number, reason = %e.context, "Skipping malformed record");
                    report.skipped.push(SkippedRecord {
                        line_number,
                        line: lines[line_number - 1].to_string_lossy(),
                        reason: e.context,
                    });
                }
            }
        }

        info!(
            source = %report.source,
            loaded = report.loaded,
            skipped = report.skipped.len(),
            "Loaded person repository"
        );

        Ok(PersonRepository { index, report })
    }

    /// Load from in-memory lines with the default configuration
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut source = MemorySource::new(lines);
        Self::load(&mut source, &Config::default())
    }

    pub fn get(&self, token: &str) -> Vec<Person> {
        self.index.get(token)
    }

    pub fn get_all(&self) -> Vec<Person> {
        self.index.get_all()
    }

    /// Full scan with an arbitrary predicate
    pub fn find_by<F>(&self, predicate: F) -> Vec<Person>
    where
        F: Fn(&Person) -> bool,
    {
        self.get_all()
            .into_iter()
            .filter(|person| predicate(person))
            .collect()
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.report
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// Convert non-blank lines, keeping their 1-based line numbers and input order.
/// Lines that are not UTF-8 come back as `MalformedRecord` errors.
fn parse_lines(lines: &[SourceLine], config: &Config) -> Vec<(usize, Result<Person>)> {
    let convert = |(i, line): (usize, &SourceLine)| match line.as_str() {
        Ok(text) if text.trim().is_empty() => None,
        Ok(text) => Some((i + 1, RecordConverter::convert(text))),
        Err(e) => Some((i + 1, Err(e))),
    };

    if config.parallel_load && lines.len() >= config.parallel_threshold {
        lines.par_iter().enumerate().filter_map(convert).collect()
    } else {
        lines.iter().enumerate().filter_map(convert).collect()
    }
}
