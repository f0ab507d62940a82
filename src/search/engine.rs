use std::sync::Arc;
use parking_lot::RwLock;
use tracing::debug;
use crate::analysis::analyzer::QueryAnalyzer;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::types::Person;
use crate::repository::person_repository::PersonRepository;
use crate::search::registry::StrategyRegistry;
use crate::search::strategy::StrategyKind;

/// Search facade: analyze the query, then run it through a strategy.
///
/// `search_with` is stateless and safe to call from many threads. `search`
/// uses the stored strategy that `set_strategy` swaps; a swap only affects
/// calls that start after it.
pub struct SearchEngine {
    analyzer: QueryAnalyzer,
    registry: Arc<StrategyRegistry>,
    current: RwLock<StrategyKind>,
}

impl SearchEngine {
    pub fn new(registry: Arc<StrategyRegistry>) -> Self {
        Self::with_strategy(registry, StrategyKind::default())
    }

    pub fn with_strategy(registry: Arc<StrategyRegistry>, strategy: StrategyKind) -> Self {
        SearchEngine {
            analyzer: QueryAnalyzer::standard(),
            registry,
            current: RwLock::new(strategy),
        }
    }

    /// Load the repository named by the config and build a registry over it
    pub fn open(config: &Config) -> Result<Self> {
        let repository = Arc::new(PersonRepository::open(config)?);
        let registry = Arc::new(StrategyRegistry::new(repository));
        Ok(Self::with_strategy(registry, config.default_strategy))
    }

    pub fn search(&self, raw: &str) -> Result<Vec<Person>> {
        let kind = *self.current.read();
        self.search_with(raw, kind)
    }

    pub fn search_with(&self, raw: &str, kind: StrategyKind) -> Result<Vec<Person>> {
        let tokens = self.analyzer.analyze(raw)?;
        let hits = self.registry.get(kind).search(&tokens);
        debug!(strategy = %kind, tokens = tokens.len(), hits = hits.len(), "Search executed");
        Ok(hits)
    }

    /// Every person in the repository, regardless of strategy
    pub fn find_all(&self) -> Vec<Person> {
        self.registry.repository().get_all()
    }

    pub fn set_strategy(&self, kind: StrategyKind) {
        *self.current.write() = kind;
    }

    /// Resolve `name` through the registry; an unknown name leaves the current strategy as is.
    pub fn set_strategy_by_name(&self, name: &str) -> Option<StrategyKind> {
        let kind = self.registry.lookup(name)?.kind();
        self.set_strategy(kind);
        Some(kind)
    }

    pub fn strategy(&self) -> StrategyKind {
        *self.current.read()
    }

    pub fn registry(&self) -> &Arc<StrategyRegistry> {
        &self.registry
    }
}
