//! Input collection module
//!
//! Validated interactive intake and the single-shot legacy flow.

pub mod field;
pub mod interactive;
pub mod legacy;

pub use field::{prompt_until_valid, IntakeError, IntakeResult};
pub use interactive::collect;
pub use legacy::collect_single_shot;
