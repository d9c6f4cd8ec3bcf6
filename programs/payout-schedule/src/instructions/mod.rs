pub mod claim;
pub mod close;
pub mod create_schedule;
pub mod deposit_tokens;
pub mod emit_schedule_quote;
pub mod initialize;
pub mod submit_report;

pub use claim::*;
pub use close::*;
pub use create_schedule::*;
pub use deposit_tokens::*;
pub use emit_schedule_quote::*;
pub use initialize::*;
pub use submit_report::*;
