pub mod analyzer;
pub mod converter;
pub mod filter;
pub mod filters;
pub mod tokenizer;
