pub mod core;
pub mod analysis;
pub mod index;
pub mod repository;
pub mod search;

pub use crate::core::config::Config;
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::types::{Person, PersonField};
pub use crate::search::engine::SearchEngine;
pub use crate::search::registry::StrategyRegistry;
pub use crate::search::strategy::{SearchStrategy, StrategyKind};

/*
┌──────────────────────────── PEOPLEX ─────────────────────────────┐
│                                                                   │
│  raw query ──► QueryAnalyzer ──► tokens                           │
│                (space split + lowercase)                          │
│                                     │                             │
│                                     ▼                             │
│  SearchEngine ──► StrategyRegistry ──► ALL | ANY | NONE           │
│                                     │                             │
│                                     ▼                             │
│                   Arc<PersonRepository>  (read-only after load)   │
│                     ├─ LoadReport                                 │
│                     └─ PersonInvertedIndex                        │
│                          Term (lower-cased) ──► HashSet<Person>   │
│                                                                   │
│  DataSource (file | memory | reader) ──► RecordConverter          │
│      ──► PersonRepository::load                                   │
└───────────────────────────────────────────────────────────────────┘
*/
