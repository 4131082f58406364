use super::ProductId;
use thiserror::Error;

/// The longest product name the ledger will accept, in characters.
pub const MAX_NAME_LEN: usize = 255;

/// The largest price the ledger will accept (ten digits, two of them decimal).
pub const MAX_PRICE: f64 = 99_999_999.99;

/// An error type for the ways in which submitted product fields may be invalid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The name was empty or only whitespace
    #[error("product name cannot be empty")]
    EmptyName,
    /// The name exceeded [`MAX_NAME_LEN`] characters
    #[error("product name cannot exceed {MAX_NAME_LEN} characters")]
    NameTooLong,
    /// The price was NaN or infinite
    #[error("price must be a finite number")]
    NonFinitePrice,
    /// The price was below zero
    #[error("price cannot be negative")]
    NegativePrice,
    /// The price exceeded [`MAX_PRICE`]
    #[error("price cannot exceed {MAX_PRICE}")]
    PriceTooLarge,
}

/// A validated product name.
///
/// Names must contain at least one non-whitespace character and are limited to
/// [`MAX_NAME_LEN`] characters. The original text is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema), schemars(transparent))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct ProductName(String);

impl TryFrom<String> for ProductName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            Err(ValidationError::EmptyName)
        } else if value.chars().count() > MAX_NAME_LEN {
            Err(ValidationError::NameTooLong)
        } else {
            Ok(Self(value))
        }
    }
}

impl TryFrom<&str> for ProductName {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.to_owned().try_into()
    }
}

impl From<ProductName> for String {
    fn from(value: ProductName) -> Self {
        value.0
    }
}

impl std::ops::Deref for ProductName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ProductName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated unit price.
///
/// Prices are finite, non-negative and no greater than [`MAX_PRICE`]. They are
/// rounded to cents on construction, mirroring a `DECIMAL(10, 2)` column, so
/// every backend reports the same value for the same input.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema), schemars(transparent))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct Price(f64);

impl Price {
    /// The price as a plain float.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(ValidationError::NonFinitePrice);
        }
        if value < 0.0 {
            return Err(ValidationError::NegativePrice);
        }
        let cents = (value * 100.0).round() / 100.0;
        if cents > MAX_PRICE {
            return Err(ValidationError::PriceTooLarge);
        }
        Ok(Self(cents))
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

/// The caller-controlled fields of a product.
///
/// Quantity is deliberately absent: stock is only changed by transactions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductData {
    /// Display name of the product
    pub name: ProductName,
    /// Unit price of the product
    pub price: Price,
    /// Free-text description
    pub details: String,
}

/// A product as held by the ledger.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductRecord {
    /// Unique identifier, assigned at creation
    pub id: ProductId,
    /// Units currently in stock
    pub quantity: i64,
    /// The caller-controlled fields
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub data: ProductData,
}

/// A partial update to a product's caller-controlled fields.
///
/// Fields left as `None` are not touched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    /// Replacement name
    pub name: Option<ProductName>,
    /// Replacement price
    pub price: Option<Price>,
    /// Replacement details
    pub details: Option<String>,
}

impl ProductUpdate {
    /// Apply the update in place.
    pub fn apply(self, data: &mut ProductData) {
        if let Some(name) = self.name {
            data.name = name;
        }
        if let Some(price) = self.price {
            data.price = price;
        }
        if let Some(details) = self.details {
            data.details = details;
        }
    }
}

impl From<ProductData> for ProductUpdate {
    fn from(value: ProductData) -> Self {
        Self {
            name: Some(value.name),
            price: Some(value.price),
            details: Some(value.details),
        }
    }
}
