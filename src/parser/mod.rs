pub mod markdown;
pub mod quiz;

pub use markdown::reformat_plan;
pub use quiz::parse_questions;
