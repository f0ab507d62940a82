pub mod person_repository;
pub mod source;
