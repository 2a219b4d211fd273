//! Validated contact fields: name, phone, email, birthday, address.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{9}$").expect("phone pattern is valid"));

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.+-]+@[A-Za-z0-9-]+\.[A-Za-z0-9.-]+$").expect("email pattern is valid")
});

static BIRTHDAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is valid"));

/// The kind of a contact field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Phone,
    Email,
    Birthday,
    Address,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FieldKind::Name => "name",
            FieldKind::Phone => "phone number",
            FieldKind::Email => "email address",
            FieldKind::Birthday => "birthday",
            FieldKind::Address => "address",
        };
        f.write_str(label)
    }
}

/// Error returned when a raw string does not satisfy a field's format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} '{value}': {reason}")]
pub struct ValidationError {
    kind: FieldKind,
    value: String,
    reason: &'static str,
}

impl ValidationError {
    fn new(kind: FieldKind, value: &str, reason: &'static str) -> Self {
        Self {
            kind,
            value: value.to_string(),
            reason,
        }
    }

    /// Returns the kind of field that failed validation.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Returns the rejected input.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

/// A contact's display name.
///
/// Any string with at least one non-whitespace character, stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Creates a name, rejecting empty or whitespace-only input.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::new(
                FieldKind::Name,
                s,
                "name cannot be empty",
            ));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A phone number of exactly nine ASCII digits.
///
/// # Examples
///
/// ```
/// use rolo::domain::Phone;
///
/// assert!(Phone::new("123456789").is_ok());
/// assert!(Phone::new("123-456-789").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if !PHONE_RE.is_match(s) {
            return Err(ValidationError::new(
                FieldKind::Phone,
                s,
                "expected exactly 9 digits",
            ));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An email address shaped like `local@domain.tld`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if !EMAIL_RE.is_match(s) {
            return Err(ValidationError::new(
                FieldKind::Email,
                s,
                "expected an address like user@example.com",
            ));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A birthday given as a real calendar date in `YYYY-MM-DD` form.
///
/// # Examples
///
/// ```
/// use rolo::domain::Birthday;
///
/// assert!(Birthday::new("2020-02-29").is_ok());
/// assert!(Birthday::new("2021-02-29").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if !BIRTHDAY_RE.is_match(s) {
            return Err(ValidationError::new(
                FieldKind::Birthday,
                s,
                "expected a date in YYYY-MM-DD format",
            ));
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| ValidationError::new(FieldKind::Birthday, s, "no such calendar date"))
    }

    /// Returns the underlying date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

/// A postal address made of four free-text parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    street: String,
    city: String,
    postal_code: String,
    country: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            postal_code: postal_code.into(),
            country: country.into(),
        }
    }

    /// Parses `street, city, postal_code, country`, trimming each part.
    ///
    /// Parts cannot contain commas, so the display form of an address whose
    /// parts do is rejected rather than read back.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        match parts.as_slice() {
            [street, city, postal_code, country] => {
                Ok(Self::new(*street, *city, *postal_code, *country))
            }
            _ => Err(ValidationError::new(
                FieldKind::Address,
                s,
                "expected 'street, city, postal code, country'",
            )),
        }
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

/// A single validated field value, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Name(Name),
    Phone(Phone),
    Email(Email),
    Birthday(Birthday),
    Address(Address),
}

impl Field {
    /// Validates `raw` as a field of the given kind.
    pub fn parse(kind: FieldKind, raw: &str) -> Result<Self, ValidationError> {
        match kind {
            FieldKind::Name => Name::new(raw).map(Field::Name),
            FieldKind::Phone => Phone::new(raw).map(Field::Phone),
            FieldKind::Email => Email::new(raw).map(Field::Email),
            FieldKind::Birthday => Birthday::new(raw).map(Field::Birthday),
            FieldKind::Address => Address::parse(raw).map(Field::Address),
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Name(_) => FieldKind::Name,
            Field::Phone(_) => FieldKind::Phone,
            Field::Email(_) => FieldKind::Email,
            Field::Birthday(_) => FieldKind::Birthday,
            Field::Address(_) => FieldKind::Address,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name(v) => write!(f, "{v}"),
            Field::Phone(v) => write!(f, "{v}"),
            Field::Email(v) => write!(f, "{v}"),
            Field::Birthday(v) => write!(f, "{v}"),
            Field::Address(v) => write!(f, "{v}"),
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.street, self.city, self.postal_code, self.country
        )
    }
}

macro_rules! string_field_impls {
    ($($ty:ident),* $(,)?) => {
        $(
            impl FromStr for $ty {
                type Err = ValidationError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Self::new(s)
                }
            }

            impl Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    serializer.collect_str(self)
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: serde::Deserializer<'de>,
                {
                    let s = String::deserialize(deserializer)?;
                    s.parse().map_err(serde::de::Error::custom)
                }
            }
        )*
    };
}

string_field_impls!(Name, Phone, Email, Birthday);
