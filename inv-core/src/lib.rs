#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the inv-core crate.
//! [inv_core]: https://docs.rs/inv_core/latest/inv_core/index.html
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Core domain models for the inventory ledger.
///
/// This module contains the fundamental data structures that represent products
/// and the transactions that move their stock, along with the validation that
/// guards their fields.
///
/// Apart from the stock rule in [`models::apply_delta`], the models are plain
/// data, keeping the domain separate from how it is persisted or served.
pub mod models;

/// Interface traits for the inventory ledger.
///
/// This module contains the "ports" in the hexagonal architecture pattern.
///
/// These traits define the contract between the domain and the storage adapters
/// without specifying implementation details, so the HTTP layer can run against
/// either the in-memory or the SQLite ledger unchanged.
pub mod ports;
