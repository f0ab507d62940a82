use crate::analysis::filter::TokenFilter;

pub struct LowercaseFilter;

impl TokenFilter for LowercaseFilter {
    fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens.into_iter()
            .map(|token| token.to_lowercase())
            .collect()
    }
}
