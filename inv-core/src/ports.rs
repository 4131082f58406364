mod product;
mod transaction;

pub use product::ProductRepository;
pub use transaction::TransactionRepository;

use crate::models::DateTime;

/// The base trait shared by every repository port.
///
/// It only fixes the infrastructure error type; domain outcomes such as a
/// missing product or a refused transaction are reported through the return
/// values of the individual operations instead.
pub trait Repository {
    /// Errors raised by the underlying storage
    type Error: std::error::Error + Send + Sync + 'static;
}

/// The "marker" trait that implies implementation of all the ledger ports.
pub trait InventoryRepository: ProductRepository + TransactionRepository {}

impl<T: ProductRepository + TransactionRepository> InventoryRepository for T {}

/// The glue between a ledger implementation and the outside world.
///
/// An application owns its repository and decides what "now" means, which is
/// all the HTTP layer needs to serve requests.
pub trait Application {
    /// The ledger implementation
    type Repository: InventoryRepository;

    /// Get the ledger
    fn database(&self) -> &Self::Repository;

    /// The timestamp to stamp onto new transactions
    fn now(&self) -> DateTime;
}
