use inv_core::{
    models::DateTime,
    ports::{Application, InventoryRepository},
};

/// A bare application over any ledger, stamping transactions with the wall clock.
#[derive(Clone)]
pub struct TestApp<R>(pub R);

impl<R: InventoryRepository> Application for TestApp<R> {
    type Repository = R;

    fn database(&self) -> &Self::Repository {
        &self.0
    }

    fn now(&self) -> DateTime {
        DateTime::now()
    }
}
