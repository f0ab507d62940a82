use std::sync::Arc;
use crate::core::types::Person;
use crate::repository::person_repository::PersonRepository;
use crate::search::strategy::{SearchStrategy, StrategyKind};

/// Full scan keeping persons with no field literally equal to any token.
/// Cost grows with repository size, not token count.
pub struct NoneSearchStrategy {
    pub repository: Arc<PersonRepository>,
}

impl NoneSearchStrategy {
    pub fn new(repository: Arc<PersonRepository>) -> Self {
        NoneSearchStrategy { repository }
    }
}

impl SearchStrategy for NoneSearchStrategy {
    fn search(&self, tokens: &[String]) -> Vec<Person> {
        self.repository
            .find_by(|person| !tokens.iter().any(|token| person.matches_exact(token)))
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::None
    }
}
