//! # Customer Records
//!
//! A [`Customer`] carries two identities:
//!
//! - `id`: a [`Uuid`] assigned when the store creates the record. It never changes and is
//!   what every store operation is keyed on.
//! - `customer_id`: the short, zero-padded number users see and type (`"07"`, `"042"`).
//!   It is owned by [`crate::sequence`] and may be rewritten for every record when the
//!   population changes. Nothing outside the sequence module writes it.
//!
//! Field rules mirror what the CLI accepts: names are trimmed and need at least two
//! characters, while phone and email fall back to [`NOT_PROVIDED`] when left empty.

use crate::error::{Result, RosterError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Placeholder stored for optional contact fields left empty.
pub const NOT_PROVIDED: &str = "Not provided";

const NAME_MIN_LEN: usize = 2;
const PHONE_MIN_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    #[serde(default)]
    pub customer_id: Option<String>,
    pub firstname: String,
    pub lastname: String,
    pub phone: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Builds a record from validated fields. The customer id is left unassigned.
    pub fn new(fields: NewCustomer) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            customer_id: None,
            firstname: fields.firstname,
            lastname: fields.lastname,
            phone: fields.phone,
            email: fields.email,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }

    /// The display id, or an empty string while unassigned.
    pub fn display_id(&self) -> &str {
        self.customer_id.as_deref().unwrap_or("")
    }

    /// Applies a single field change, validating the new value first.
    pub fn apply(&mut self, field: CustomerField, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(RosterError::Validation("Value is required".to_string()));
        }
        match field {
            CustomerField::FirstName => self.firstname = validate_name("First name", value)?,
            CustomerField::LastName => self.lastname = validate_name("Last name", value)?,
            CustomerField::Email => self.email = validate_email(value)?,
            CustomerField::Phone => self.phone = validate_phone(value)?,
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn to_row(&self) -> CustomerRow {
        CustomerRow {
            id: self.display_id().to_string(),
            name: self.full_name(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            created: self.created_at.format("%b %-d, %Y").to_string(),
        }
    }
}

/// Input for a new record, before the store has given it an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub firstname: String,
    pub lastname: String,
    pub phone: String,
    pub email: String,
}

impl NewCustomer {
    /// Trims and validates raw input. Empty phone or email become [`NOT_PROVIDED`].
    pub fn parse(
        firstname: &str,
        lastname: &str,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            firstname: validate_name("First name", firstname)?,
            lastname: validate_name("Last name", lastname)?,
            email: optional(email, validate_email)?,
            phone: optional(phone, validate_phone)?,
        })
    }
}

/// The user-editable fields of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerField {
    FirstName,
    LastName,
    Email,
    Phone,
}

impl std::fmt::Display for CustomerField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CustomerField::FirstName => "first name",
            CustomerField::LastName => "last name",
            CustomerField::Email => "email",
            CustomerField::Phone => "phone",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for CustomerField {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "firstname" | "first" => Ok(CustomerField::FirstName),
            "lastname" | "last" => Ok(CustomerField::LastName),
            "email" => Ok(CustomerField::Email),
            "phone" => Ok(CustomerField::Phone),
            _ => Err(RosterError::Validation(format!(
                "Unknown field: {} (expected firstname, lastname, email or phone)",
                s
            ))),
        }
    }
}

/// A record as presented to users, and as kept in the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created: String,
}

fn optional(value: Option<&str>, validate: fn(&str) -> Result<String>) -> Result<String> {
    match value.map(str::trim) {
        None | Some("") => Ok(NOT_PROVIDED.to_string()),
        Some(v) if v == NOT_PROVIDED => Ok(NOT_PROVIDED.to_string()),
        Some(v) => validate(v),
    }
}

fn validate_name(label: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(RosterError::Validation(format!("{} is required", label)));
    }
    if value.chars().count() < NAME_MIN_LEN {
        return Err(RosterError::Validation(format!(
            "{} must be at least {} characters",
            label, NAME_MIN_LEN
        )));
    }
    Ok(value.to_string())
}

/// Accepts `local@domain.tld`: one `@`, no whitespace, and a dot inside the domain.
pub fn validate_email(value: &str) -> Result<String> {
    let invalid = || RosterError::Validation(format!("Invalid email: {}", value));

    if value.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let has_inner_dot = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());
    if !has_inner_dot {
        return Err(invalid());
    }
    Ok(value.to_string())
}

/// Accepts an optional leading `+` and at least ten digits, spaces or dashes.
pub fn validate_phone(value: &str) -> Result<String> {
    let body = value.strip_prefix('+').unwrap_or(value);
    let valid = body.chars().count() >= PHONE_MIN_LEN
        && body
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || c == '-');
    if !valid {
        return Err(RosterError::Validation(format!(
            "Invalid phone number: {}",
            value
        )));
    }
    Ok(value.to_string())
}
