use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five inputs of the complaint form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Product,
    Issue,
}

impl Field {
    /// All fields in the order they appear on the form.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Product,
        Field::Issue,
    ];

    /// Key used for the field in the request body and in input names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Product => "product",
            Field::Issue => "issue",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone Number",
            Field::Product => "Product Details",
            Field::Issue => "Issue Description",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Enter your full name",
            Field::Email => "Enter your email address",
            Field::Phone => "Enter your phone number",
            Field::Product => "Enter product name or ID",
            Field::Issue => "Describe the issue you're facing",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when an input name does not belong to the complaint form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown complaint field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Raw text typed into the complaint form. This is also the request body
/// sent to the complaint service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub product: String,
    pub issue: String,
}

impl ComplaintInput {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Product => &self.product,
            Field::Issue => &self.issue,
        }
    }

    /// Replace the value of a single field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Product => &mut self.product,
            Field::Issue => &mut self.issue,
        };
        *slot = value.into();
    }

    /// Clear every field back to the empty string.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}
