use std::collections::BTreeMap;

use crate::models::complaint::{ComplaintInput, Field};

pub const NAME_REQUIRED: &str = "Name is required.";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Invalid email format.";
pub const PHONE_REQUIRED: &str = "Phone number is required.";
pub const PHONE_INVALID: &str = "Phone number must be 10 digits.";
pub const PRODUCT_REQUIRED: &str = "Product details are required.";
pub const ISSUE_REQUIRED: &str = "Issue description is required.";

const PHONE_DIGITS: usize = 10;

/// Per-field error messages from one validation pass. A field without an
/// entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    fn insert(&mut self, field: Field, message: &str) {
        self.errors.insert(field, message.to_string());
    }
}

/// Check all five fields and collect every failure.
pub fn validate(input: &ComplaintInput) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if is_blank(&input.name) {
        errors.insert(Field::Name, NAME_REQUIRED);
    }

    if is_blank(&input.email) {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    } else if !looks_like_email(&input.email) {
        errors.insert(Field::Email, EMAIL_INVALID);
    }

    if is_blank(&input.phone) {
        errors.insert(Field::Phone, PHONE_REQUIRED);
    } else if !is_phone_number(&input.phone) {
        errors.insert(Field::Phone, PHONE_INVALID);
    }

    if is_blank(&input.product) {
        errors.insert(Field::Product, PRODUCT_REQUIRED);
    }

    if is_blank(&input.issue) {
        errors.insert(Field::Issue, ISSUE_REQUIRED);
    }

    errors
}

pub fn is_valid(input: &ComplaintInput) -> bool {
    validate(input).is_empty()
}

fn is_blank(value: &str) -> bool {
    value.chars().all(is_form_whitespace)
}

/// Whitespace as browsers see it in form input: Unicode White_Space plus the
/// byte order mark, minus NEXT LINE (U+0085).
pub fn is_form_whitespace(c: char) -> bool {
    c != '\u{85}' && (c.is_whitespace() || c == '\u{FEFF}')
}

/// Minimal structural check: somewhere in the value there is a run of
/// non-whitespace, an `@`, more non-whitespace, a `.` and at least one more
/// non-whitespace character. Surrounding text is not inspected.
pub fn looks_like_email(value: &str) -> bool {
    value
        .split(is_form_whitespace)
        .any(token_has_email_shape)
}

fn token_has_email_shape(token: &str) -> bool {
    // Any '@' with a non-empty local part works; the domain part after it must
    // contain a '.' that has something on both sides.
    token.char_indices().any(|(at, c)| {
        if c != '@' || at == 0 {
            return false;
        }
        let domain = &token[at + 1..];
        domain
            .char_indices()
            .any(|(dot, c)| c == '.' && dot > 0 && dot + 1 < domain.len())
    })
}

/// Exactly ten ASCII digits, nothing else (no trimming, no separators).
pub fn is_phone_number(value: &str) -> bool {
    value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;
