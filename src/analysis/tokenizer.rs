pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Splits on single ASCII spaces. Runs of spaces never produce empty tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaceTokenizer;

impl Tokenizer for SpaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(' ')
            .filter(|word| !word.is_empty())
            .map(String::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_single_spaces() {
        let tokens = SpaceTokenizer.tokenize("Erick Dwight webb@gmail.com");
        assert_eq!(tokens, vec!["Erick", "Dwight", "webb@gmail.com"]);
    }

    #[test]
    fn repeated_spaces_do_not_yield_empty_tokens() {
        let tokens = SpaceTokenizer.tokenize("Katie   Jacobs");
        assert_eq!(tokens, vec!["Katie", "Jacobs"]);
    }

    #[test]
    fn keeps_case() {
        assert_eq!(SpaceTokenizer.tokenize("ERICK"), vec!["ERICK"]);
    }
}
