use std::fmt;

use serde::Serialize;

/// A single directory entry. `reference` always mirrors the key the store
/// holds the contact under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub reference: i64,
    pub name: String,
    pub phone: String,
}

impl Contact {
    pub fn new(reference: i64, name: &str, phone: &str) -> Self {
        Contact {
            reference,
            name: name.to_string(),
            phone: phone.to_string(),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reference Number: {} |    Name: {} |    Phone Number: {}",
            self.reference, self.name, self.phone
        )
    }
}
