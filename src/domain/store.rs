use std::collections::BTreeMap;

use crate::errors::AppError;
use crate::validation::{parse_nonzero_reference, parse_reference, validate_number};

use super::Contact;

/// In-memory directory of contacts keyed by reference number.
///
/// Every mutating operation validates fully before touching the map, so a
/// failed call leaves the store exactly as it was. Invariants held across
/// every operation:
/// - keys are nonzero integers and equal the `reference` of their entry
/// - no two entries share a phone number
/// - name and phone are never empty once a record exists
#[derive(Debug, Default)]
pub struct ContactBook {
    contacts: BTreeMap<i64, Contact>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Adds a new contact. Checks run in a fixed order and the first
    /// failure wins: missing field, non-numeric reference, zero reference,
    /// phone format, duplicate reference, duplicate phone.
    pub fn add(&mut self, reference: &str, name: &str, phone: &str) -> Result<(), AppError> {
        let name = name.trim();
        let phone = phone.trim();

        if reference.trim().is_empty() || name.is_empty() || phone.is_empty() {
            return Err(AppError::MissingField);
        }

        let reference = parse_nonzero_reference(reference)?;

        if !validate_number(phone)? {
            return Err(AppError::InvalidPhoneFormat);
        }
        if self.contacts.contains_key(&reference) {
            return Err(AppError::DuplicateReference(reference));
        }
        if self.contacts.values().any(|c| c.phone == phone) {
            return Err(AppError::DuplicatePhone(phone.to_string()));
        }

        self.contacts
            .insert(reference, Contact::new(reference, name, phone));
        Ok(())
    }

    pub fn find(&self, reference: &str) -> Result<&Contact, AppError> {
        let reference = parse_reference(reference)?;

        self.contacts.get(&reference).ok_or(AppError::NotFound)
    }

    pub fn delete(&mut self, reference: &str) -> Result<(), AppError> {
        let reference = parse_reference(reference)?;

        match self.contacts.remove(&reference) {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound),
        }
    }

    /// Snapshot of every contact in ascending reference order.
    pub fn list_all(&self) -> Vec<&Contact> {
        self.contacts.values().collect()
    }

    pub fn update_name(&mut self, reference: &str, new_name: &str) -> Result<(), AppError> {
        let reference = parse_reference(reference)?;
        let new_name = new_name.trim();

        let Some(contact) = self.contacts.get_mut(&reference) else {
            return Err(AppError::NotFound);
        };

        if new_name == contact.name {
            return Err(AppError::NoChange);
        }
        if new_name.is_empty() {
            return Err(AppError::MissingField);
        }

        contact.name = new_name.to_string();
        Ok(())
    }

    pub fn update_number(&mut self, reference: &str, new_number: &str) -> Result<(), AppError> {
        let reference = parse_reference(reference)?;
        let new_number = new_number.trim();

        let Some(current) = self.contacts.get(&reference) else {
            return Err(AppError::NotFound);
        };

        if new_number == current.phone {
            return Err(AppError::NoChange);
        }
        if !validate_number(new_number)? {
            return Err(AppError::InvalidPhoneFormat);
        }
        if self.phone_taken_by_other(reference, new_number) {
            return Err(AppError::DuplicatePhone(new_number.to_string()));
        }

        if let Some(contact) = self.contacts.get_mut(&reference) {
            contact.phone = new_number.to_string();
        }
        Ok(())
    }

    /// Relocates a record from one key to another. The removal and the
    /// insertion are a single mutation: nothing happens unless every check
    /// passes. A new reference equal to the old one is caught as a
    /// duplicate, since the old key is occupied.
    pub fn update_reference(
        &mut self,
        reference: &str,
        new_reference: &str,
    ) -> Result<(), AppError> {
        let reference = parse_reference(reference)?;

        if !self.contacts.contains_key(&reference) {
            return Err(AppError::NotFound);
        }

        let new_reference = parse_nonzero_reference(new_reference)?;

        if self.contacts.contains_key(&new_reference) {
            return Err(AppError::DuplicateReference(new_reference));
        }

        if let Some(mut contact) = self.contacts.remove(&reference) {
            contact.reference = new_reference;
            self.contacts.insert(new_reference, contact);
        }
        Ok(())
    }

    /// Replaces reference, name, and phone at once. When the new reference
    /// equals the old one this degenerates to an in-place update of name
    /// and number. The no-change test compares the raw new-reference text
    /// against the decimal rendering of the old key.
    pub fn update_all(
        &mut self,
        reference: &str,
        new_reference: &str,
        new_name: &str,
        new_number: &str,
    ) -> Result<(), AppError> {
        let reference = parse_reference(reference)?;
        let new_reference = new_reference.trim();
        let new_name = new_name.trim();
        let new_number = new_number.trim();

        let Some(current) = self.contacts.get(&reference) else {
            return Err(AppError::NotFound);
        };

        if new_reference == reference.to_string()
            && new_name == current.name
            && new_number == current.phone
        {
            return Err(AppError::NoChange);
        }
        if new_reference.is_empty() || new_name.is_empty() || new_number.is_empty() {
            return Err(AppError::MissingField);
        }

        let new_reference = parse_nonzero_reference(new_reference)?;

        if !validate_number(new_number)? {
            return Err(AppError::InvalidPhoneFormat);
        }
        if self.phone_taken_by_other(reference, new_number) {
            return Err(AppError::DuplicatePhone(new_number.to_string()));
        }
        if new_reference != reference && self.contacts.contains_key(&new_reference) {
            return Err(AppError::DuplicateReference(new_reference));
        }

        self.contacts.remove(&reference);
        self.contacts.insert(
            new_reference,
            Contact::new(new_reference, new_name, new_number),
        );
        Ok(())
    }

    // A match against the record's own number is not a duplicate; that case
    // is already reported as NoChange by the update operations.
    fn phone_taken_by_other(&self, reference: i64, phone: &str) -> bool {
        self.contacts
            .values()
            .any(|c| c.phone == phone && c.reference != reference)
    }
}
