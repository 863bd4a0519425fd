pub mod filter;
pub mod groups;
pub mod summary;

pub use filter::{FilterState, FilteredView, StatusFilter};
pub use groups::{Assignment, Count};
pub use summary::{Summary, YearSpan};
