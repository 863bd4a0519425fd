mod loader;

pub use loader::{load_records, parse_records};
