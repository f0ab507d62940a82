use std::sync::Arc;
use crate::core::types::Person;
use crate::repository::person_repository::PersonRepository;
use crate::search::strategy::{distinct, SearchStrategy, StrategyKind};

/// Candidates from the index, kept only when every token equals one of their
/// fields. The index lookup is case-insensitive but the token check is literal.
pub struct AllSearchStrategy {
    pub repository: Arc<PersonRepository>,
}

impl AllSearchStrategy {
    pub fn new(repository: Arc<PersonRepository>) -> Self {
        AllSearchStrategy { repository }
    }
}

impl SearchStrategy for AllSearchStrategy {
    fn search(&self, tokens: &[String]) -> Vec<Person> {
        let candidates = tokens.iter()
            .flat_map(|token| self.repository.get(token))
            .filter(|person| tokens.iter().all(|token| person.matches_exact(token)));
        distinct(candidates)
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::All
    }
}
