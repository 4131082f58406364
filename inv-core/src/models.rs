mod datetime;
pub use datetime::DateTime;

mod ids;
pub use ids::{ProductId, TransactionId};

mod product;
pub use product::{
    MAX_NAME_LEN, MAX_PRICE, Price, ProductData, ProductName, ProductRecord, ProductUpdate,
    ValidationError,
};

mod transaction;
pub use transaction::{
    TransactionFailure, TransactionRecord, TransactionType, UnknownTransactionType, adjustment,
    apply_delta,
};
