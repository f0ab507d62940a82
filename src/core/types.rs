use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::core::error::{Error, ErrorKind};

/// One searchable field of a [`Person`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonField {
    FirstName,
    LastName,
    Email,
}

impl PersonField {
    /// Indexing order: email first, then last name, then first name.
    pub const ALL: [PersonField; 3] = [PersonField::Email, PersonField::LastName, PersonField::FirstName];

    pub fn name(&self) -> &'static str {
        match self {
            PersonField::FirstName => "firstName",
            PersonField::LastName => "lastName",
            PersonField::Email => "email",
        }
    }
}

impl fmt::Display for PersonField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PersonField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "firstName" => Ok(PersonField::FirstName),
            "lastName" => Ok(PersonField::LastName),
            "email" => Ok(PersonField::Email),
            other => Err(Error::new(
                ErrorKind::InvalidArgument,
                format!("Unknown person field '{}', expected firstName, lastName or email", other),
            )),
        }
    }
}

/// Person record. Equality and hashing are structural over all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Person {
    pub fn new(first_name: impl Into<String>) -> Self {
        Person {
            first_name: first_name.into(),
            last_name: String::new(),
            email: String::new(),
        }
    }

    pub fn with_last_name(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Person {
            last_name: last_name.into(),
            ..Person::new(first_name)
        }
    }

    pub fn with_email(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Person {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    pub fn field(&self, field: PersonField) -> &str {
        match field {
            PersonField::FirstName => &self.first_name,
            PersonField::LastName => &self.last_name,
            PersonField::Email => &self.email,
        }
    }

    /// Fields in indexing order, paired with their values.
    pub fn fields(&self) -> impl Iterator<Item = (PersonField, &str)> {
        PersonField::ALL.into_iter().map(move |field| (field, self.field(field)))
    }

    pub fn has_email(&self) -> bool {
        !self.email.trim().is_empty()
    }

    /// Literal, case-sensitive comparison of `token` against every field.
    pub fn matches_exact(&self, token: &str) -> bool {
        self.first_name == token || self.last_name == token || self.email == token
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.has_email() {
            write!(f, "{} {} {}", self.first_name, self.last_name, self.email)
        } else {
            write!(f, "{} {}", self.first_name, self.last_name)
        }
    }
}
