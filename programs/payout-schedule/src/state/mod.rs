pub mod report_state;
pub mod schedule_state;

pub use report_state::*;
pub use schedule_state::*;
