//! The concrete application served by the demo binary.

use inv_core::{
    models::DateTime,
    ports::{Application, InventoryRepository},
};

/// An application over any ledger implementation, stamping transactions with
/// the current UTC time.
#[derive(Clone)]
pub struct DemoApp<R> {
    /// The ledger
    pub db: R,
}

impl<R: InventoryRepository> Application for DemoApp<R> {
    type Repository = R;

    fn database(&self) -> &Self::Repository {
        &self.db
    }

    fn now(&self) -> DateTime {
        DateTime::now()
    }
}
