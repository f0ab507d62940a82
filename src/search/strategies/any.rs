use std::sync::Arc;
use crate::core::types::Person;
use crate::repository::person_repository::PersonRepository;
use crate::search::strategy::{distinct, SearchStrategy, StrategyKind};

/// Union of the index buckets of every token
pub struct AnySearchStrategy {
    pub repository: Arc<PersonRepository>,
}

impl AnySearchStrategy {
    pub fn new(repository: Arc<PersonRepository>) -> Self {
        AnySearchStrategy { repository }
    }
}

impl SearchStrategy for AnySearchStrategy {
    fn search(&self, tokens: &[String]) -> Vec<Person> {
        distinct(tokens.iter().flat_map(|token| self.repository.get(token)))
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Any
    }
}
