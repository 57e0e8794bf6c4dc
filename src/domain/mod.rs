pub mod quiz;
pub mod request;

pub use quiz::{QuizQuestion, MAX_OPTIONS};
pub use request::{PlanParams, PlanRequest, QuizParams, QuizRequest};
