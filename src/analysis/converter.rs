use crate::analysis::tokenizer::{SpaceTokenizer, Tokenizer};
use crate::core::error::{Error, Result};
use crate::core::types::Person;

/// Converts one bulk-data record (`firstName[ lastName[ email]]`) into a Person.
/// Field case is preserved.
pub struct RecordConverter;

impl RecordConverter {
    pub const MAX_FIELDS: usize = 3;

    pub fn convert(line: &str) -> Result<Person> {
        let fields = SpaceTokenizer.tokenize(line.trim());

        match fields.as_slice() {
            [first] => Ok(Person::new(first.as_str())),
            [first, last] => Ok(Person::with_last_name(first.as_str(), last.as_str())),
            [first, last, email] => Ok(Person::with_email(first.as_str(), last.as_str(), email.as_str())),
            [] => Err(Error::malformed_record("Record has no fields")),
            _ => Err(Error::malformed_record(format!(
                "Record has {} fields, expected at most {}",
                fields.len(),
                Self::MAX_FIELDS
            ))),
        }
    }
}
