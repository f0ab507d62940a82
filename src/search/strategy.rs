use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::core::error::{Error, ErrorKind};
use crate::core::types::Person;

/// Rule for combining per-token candidates into one result list.
///
/// Results contain each person at most once; their order is not significant.
pub trait SearchStrategy: Send + Sync {
    fn search(&self, tokens: &[String]) -> Vec<Person>;

    fn kind(&self) -> StrategyKind;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StrategyKind {
    /// Every token matches some field
    All,
    /// At least one token matches
    #[default]
    Any,
    /// No token matches any field
    None,
}

impl StrategyKind {
    pub const ALL_KINDS: [StrategyKind; 3] = [StrategyKind::All, StrategyKind::Any, StrategyKind::None];

    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::All => "ALL",
            StrategyKind::Any => "ANY",
            StrategyKind::None => "NONE",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::ALL_KINDS
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::new(
                ErrorKind::UnknownStrategyName,
                format!("Unknown search strategy '{}'", s),
            ))
    }
}

/// Drop repeated persons, keeping the first occurrence.
pub(crate) fn distinct<I>(persons: I) -> Vec<Person>
where
    I: IntoIterator<Item = Person>,
{
    let mut seen = HashSet::new();
    persons.into_iter()
        .filter(|person| seen.insert(person.clone()))
        .collect()
}
