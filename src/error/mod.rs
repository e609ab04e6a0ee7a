mod app_error;
mod conversions;
mod db_mapping;
mod problem;
mod startup_error;
mod validation_mapping;


pub use app_error::{AppError, AppResult, ValidationIssue};
pub use problem::{ProblemDetails, PROBLEM_JSON};
pub use startup_error::StartupError;
