use super::{DateTime, ProductId, TransactionId};
use thiserror::Error;

/// Whether a transaction added stock or removed it.
///
/// The type is never chosen by the caller; it follows from the sign of the
/// quantity, see [`TransactionType::from_delta`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum TransactionType {
    /// Stock was received
    Buy,
    /// Stock was given out
    Sell,
}

impl TransactionType {
    /// Classify a non-zero stock delta.
    pub fn from_delta(delta: i64) -> Self {
        if delta > 0 { Self::Buy } else { Self::Sell }
    }

    /// The label used on the wire and in storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a label that is neither `BUY` nor `SELL`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown transaction type `{0}`")]
pub struct UnknownTransactionType(pub String);

impl std::str::FromStr for TransactionType {
    type Err = UnknownTransactionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUY" => Ok(Self::Buy),
            "SELL" => Ok(Self::Sell),
            other => Err(UnknownTransactionType(other.to_owned())),
        }
    }
}

/// An immutable record of a change to a product's stock.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransactionRecord {
    /// Unique identifier, assigned at creation
    pub id: TransactionId,
    /// The product whose stock changed
    pub product_id: ProductId,
    /// When the transaction was recorded
    pub transaction_date: DateTime,
    /// The signed change in stock
    pub quantity: i64,
    /// `BUY` for positive quantities, `SELL` for negative ones
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: TransactionType,
}

/// The ways in which a transaction can be refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionFailure {
    /// The referenced product does not exist
    #[error("Product not found")]
    ProductNotFound(ProductId),
    /// A transaction must move stock in one direction or the other
    #[error("Quantity cannot be zero")]
    InvalidQuantity,
    /// Selling would leave stock below zero
    #[error("Not enough product quantity")]
    InsufficientStock {
        /// Units in stock at the time of the request
        available: i64,
        /// Units the transaction tried to remove
        requested: i64,
    },
}

/// Compute the stock level that results from applying `delta` to `quantity`.
///
/// This is the single rule that governs stock: a transaction must be non-zero
/// and may not drive stock below zero. Callers are responsible for resolving
/// the product first and for holding their critical section across the read
/// of `quantity` and the write of the result.
///
/// # Examples
///
/// ```
/// # use inv_core::models::{TransactionFailure, apply_delta};
/// assert_eq!(apply_delta(0, 5), Ok(5));
/// assert_eq!(apply_delta(5, -5), Ok(0));
/// assert_eq!(apply_delta(5, 0), Err(TransactionFailure::InvalidQuantity));
/// assert_eq!(
///     apply_delta(5, -10),
///     Err(TransactionFailure::InsufficientStock { available: 5, requested: 10 })
/// );
/// ```
pub fn apply_delta(quantity: i64, delta: i64) -> Result<i64, TransactionFailure> {
    if delta == 0 {
        return Err(TransactionFailure::InvalidQuantity);
    }
    // an overflowing buy is not a meaningful stock level either
    let updated = quantity
        .checked_add(delta)
        .ok_or(TransactionFailure::InvalidQuantity)?;
    if updated < 0 {
        return Err(TransactionFailure::InsufficientStock {
            available: quantity,
            requested: delta.unsigned_abs().min(i64::MAX as u64) as i64,
        });
    }
    Ok(updated)
}

/// The delta that moves stock from `quantity` to `target`, if any.
///
/// Setting a product's quantity is expressed as a transaction so that stock
/// keeps matching the transaction history.
pub fn adjustment(quantity: i64, target: u32) -> Option<i64> {
    let delta = i64::from(target) - quantity;
    (delta != 0).then_some(delta)
}
