mod record;
mod status;

pub use record::{ProjectRecord, ProjectSummary};
pub use status::{Priority, Status};
