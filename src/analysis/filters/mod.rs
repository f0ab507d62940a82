pub mod lowercase;
