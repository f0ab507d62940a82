use std::sync::Arc;
use crate::repository::person_repository::PersonRepository;
use crate::search::strategies::all::AllSearchStrategy;
use crate::search::strategies::any::AnySearchStrategy;
use crate::search::strategies::none::NoneSearchStrategy;
use crate::search::strategy::{SearchStrategy, StrategyKind};

/// Maps strategy names to strategy instances bound to one shared repository.
///
/// Built once at startup and handed to every engine that needs it.
pub struct StrategyRegistry {
    repository: Arc<PersonRepository>,
    all: Arc<dyn SearchStrategy>,
    any: Arc<dyn SearchStrategy>,
    none: Arc<dyn SearchStrategy>,
}

impl StrategyRegistry {
    pub fn new(repository: Arc<PersonRepository>) -> Self {
        StrategyRegistry {
            all: Arc::new(AllSearchStrategy::new(repository.clone())),
            any: Arc::new(AnySearchStrategy::new(repository.clone())),
            none: Arc::new(NoneSearchStrategy::new(repository.clone())),
            repository,
        }
    }

    pub fn get(&self, kind: StrategyKind) -> Arc<dyn SearchStrategy> {
        match kind {
            StrategyKind::All => self.all.clone(),
            StrategyKind::Any => self.any.clone(),
            StrategyKind::None => self.none.clone(),
        }
    }

    /// `None` for any name outside `ALL`, `ANY`, `NONE`
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn SearchStrategy>> {
        name.parse::<StrategyKind>()
            .ok()
            .map(|kind| self.get(kind))
    }

    pub fn repository(&self) -> &Arc<PersonRepository> {
        &self.repository
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> StrategyRegistry {
        let repository = PersonRepository::from_lines(["Katie Jacobs", "Erick Burgess"]).unwrap();
        StrategyRegistry::new(Arc::new(repository))
    }

    #[test]
    fn lookup_resolves_known_names() {
        let registry = registry();
        for kind in StrategyKind::ALL_KINDS {
            let strategy = registry.lookup(kind.name()).unwrap();
            assert_eq!(strategy.kind(), kind);
        }
    }

    #[test]
    fn lookup_misses_are_absent_not_errors() {
        let registry = registry();
        assert!(registry.lookup("SOME").is_none());
        assert!(registry.lookup("any").is_none());
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn strategies_share_the_repository() {
        let registry = registry();
        // registry + three strategies
        assert_eq!(Arc::strong_count(registry.repository()), 4);
    }
}
