use std::collections::{HashMap, HashSet};
use crate::core::types::Person;

/// Index key: a case-folded field value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term(String);

impl Term {
    pub fn new(text: &str) -> Self {
        Term(text.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Inverted index from case-folded field values to the persons carrying them.
///
/// Buckets are sets, so inserting the same person twice never duplicates it.
/// Blank fields are not indexed.
#[derive(Debug, Default)]
pub struct PersonInvertedIndex {
    pub buckets: HashMap<Term, HashSet<Person>>,
    persons: HashSet<Person>,   // distinct persons with at least one indexed field
}

impl PersonInvertedIndex {
    pub fn new() -> Self {
        PersonInvertedIndex {
            buckets: HashMap::new(),
            persons: HashSet::new(),
        }
    }

    pub fn add(&mut self, person: Person) {
        let mut indexed = false;
        for (_field, value) in person.fields() {
            if value.trim().is_empty() {
                continue;
            }
            self.buckets.entry(Term::new(value))
                .or_default()
                .insert(person.clone());
            indexed = true;
        }

        if indexed {
            self.persons.insert(person);
        }
    }

    /// Case-insensitive bucket lookup. Unknown tokens yield an empty list.
    pub fn get(&self, token: &str) -> Vec<Person> {
        self.buckets.get(&Term::new(token))
            .map(|bucket| bucket.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Union of every bucket, without duplicates
    pub fn get_all(&self) -> Vec<Person> {
        self.persons.iter().cloned().collect()
    }

    pub fn contains_term(&self, token: &str) -> bool {
        self.buckets.contains_key(&Term::new(token))
    }

    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.buckets.keys()
    }

    pub fn term_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of distinct persons
    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(persons: &[Person]) -> PersonInvertedIndex {
        let mut index = PersonInvertedIndex::new();
        for person in persons {
            index.add(person.clone());
        }
        index
    }

    #[test]
    fn finds_person_by_every_field() {
        let person = Person::with_email("first", "last", "email@gmai.com");
        let index = index_of(&[person.clone()]);

        for token in ["first", "last", "email@gmai.com"] {
            assert_eq!(index.get(token), vec![person.clone()]);
        }
    }

    #[test]
    fn keys_are_case_folded() {
        let person = Person::with_email("Erick", "Harrington", "Harrington@Gmail.com");
        let index = index_of(&[person.clone()]);

        assert!(index.contains_term("erick"));
        assert!(!index.terms().any(|t| t.as_str() == "Erick"));
        assert_eq!(index.get("ERICK"), vec![person.clone()]);
        assert_eq!(index.get("harrington@gmail.com"), vec![person]);
    }

    #[test]
    fn blank_fields_are_not_indexed() {
        let index = index_of(&[Person::new("Myrtle"), Person::with_email("Katie", "Jacobs", "  ")]);
        assert!(!index.contains_term(""));
        assert!(!index.contains_term("  "));
        assert_eq!(index.term_count(), 3);
    }

    #[test]
    fn missing_token_returns_empty() {
        let index = index_of(&[Person::new("Myrtle")]);
        assert!(index.get("nobody").is_empty());
    }

    #[test]
    fn repeated_inserts_do_not_duplicate() {
        let person = Person::with_last_name("Erick", "Burgess");
        let index = index_of(&[person.clone(), person.clone()]);
        assert_eq!(index.get("erick").len(), 1);
        assert_eq!(index.get_all(), vec![person]);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn len_counts_distinct_persons_across_buckets() {
        let index = index_of(&[
            Person::with_email("Erick", "Harrington", "harrington@gmail.com"),
            Person::with_last_name("Erick", "Burgess"),
            Person::with_last_name("Erick", "Burgess"),
            Person::with_last_name("Katie", "Burgess"),
        ]);
        assert_eq!(index.len(), 3);
        assert_eq!(index.get_all().len(), 3);
        assert_eq!(index.term_count(), 5);
    }

    #[test]
    fn person_with_only_blank_fields_is_not_stored() {
        let index = index_of(&[Person::new("  ")]);
        assert!(index.is_empty());
        assert!(index.get_all().is_empty());
    }

    #[test]
    fn shared_tokens_share_a_bucket() {
        let a = Person::with_last_name("Erick", "Burgess");
        let b = Person::with_email("Erick", "Harrington", "harrington@gmail.com");
        let index = index_of(&[a.clone(), b.clone()]);

        let erick: HashSet<_> = index.get("erick").into_iter().collect();
        assert_eq!(erick, HashSet::from([a, b]));
        assert_eq!(index.get_all().len(), 2);
    }

    #[test]
    fn same_value_in_two_fields_indexes_once() {
        let person = Person::with_last_name("Lee", "Lee");
        let index = index_of(&[person]);
        assert_eq!(index.get("lee").len(), 1);
        assert_eq!(index.term_count(), 1);
    }
}
