use crate::analysis::filter::TokenFilter;
use crate::analysis::filters::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::{SpaceTokenizer, Tokenizer};
use crate::core::error::{Error, Result};

/// Turns a raw user query into search tokens.
///
/// The standard analyzer is the only place query text is case-folded; the
/// inverted index stores lower-cased keys so its output can be looked up as is.
pub struct QueryAnalyzer {
    pub tokenizer: Box<dyn Tokenizer>,
    pub filters: Vec<Box<dyn TokenFilter>>,
}

impl QueryAnalyzer {
    pub fn new(tokenizer: Box<dyn Tokenizer>) -> Self {
        QueryAnalyzer {
            tokenizer,
            filters: Vec::new(),
        }
    }

    pub fn add_filter(mut self, filter: Box<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Space tokenizer followed by lower-casing
    pub fn standard() -> Self {
        QueryAnalyzer::new(Box::new(SpaceTokenizer))
            .add_filter(Box::new(LowercaseFilter))
    }

    pub fn analyze(&self, raw: &str) -> Result<Vec<String>> {
        let query = raw.trim();
        if query.is_empty() {
            return Err(Error::invalid_query("Query is blank, nothing to search"));
        }

        let mut tokens = self.tokenizer.tokenize(query);
        for filter in &self.filters {
            tokens = filter.filter(tokens);
        }

        Ok(tokens)
    }
}

impl Default for QueryAnalyzer {
    fn default() -> Self {
        QueryAnalyzer::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    #[test]
    fn lowercases_and_splits() {
        let tokens = QueryAnalyzer::standard()
            .analyze("  Erick Dwight webb@gmail.com ")
            .unwrap();
        assert_eq!(tokens, vec!["erick", "dwight", "webb@gmail.com"]);
    }

    #[test]
    fn single_word_yields_one_token() {
        let tokens = QueryAnalyzer::standard().analyze("HARRINGTON").unwrap();
        assert_eq!(tokens, vec!["harrington"]);
    }

    #[test]
    fn blank_query_is_rejected() {
        for raw in ["", "   ", "\t\n"] {
            let err = QueryAnalyzer::standard().analyze(raw).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidQuery);
        }
    }

    #[test]
    fn analyzer_without_filters_keeps_case() {
        let analyzer = QueryAnalyzer::new(Box::new(SpaceTokenizer));
        assert_eq!(analyzer.analyze("Harrington Erick").unwrap(), vec!["Harrington", "Erick"]);
    }
}
