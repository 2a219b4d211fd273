//! File I/O: JSON persistence and the data directory

pub mod persist;
mod storage;

pub use persist::PersistError;
pub use storage::Storage;
