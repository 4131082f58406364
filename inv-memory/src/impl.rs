//! Repository trait implementations for the in-process ledger.

use crate::MemoryDb;
use inv_core::ports::Repository;

mod product;
mod transaction;

impl Repository for MemoryDb {
    type Error = std::convert::Infallible;
}
