pub mod entry;
pub mod store;

pub use entry::{Entry, EntryFilter, Priority};
pub use store::{EntryStore, StoreError, DEFAULT_CAPACITY};
