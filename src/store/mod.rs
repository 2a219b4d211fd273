//! In-memory record store with ID allocation, search and batched iteration

mod address_book;

pub use address_book::{AddressBook, Batches, DEFAULT_BATCH_SIZE, StoreError, StoreResult};
