pub mod transaction_receipt;
