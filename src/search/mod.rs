pub mod engine;
pub mod registry;
pub mod strategies;
pub mod strategy;
