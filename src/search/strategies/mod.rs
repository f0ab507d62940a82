pub mod all;
pub mod any;
pub mod none;
