pub mod plan;
pub mod quiz;

pub use plan::generate_plan;
pub use quiz::generate_quiz;
