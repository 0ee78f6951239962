pub mod file;

pub use file::{default_data_path, load_entries, save_entries, PersistenceError, TASKS_FILE};
