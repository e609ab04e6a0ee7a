pub mod auth;
pub mod problem_details;
pub mod request_logging;

pub use auth::{AuthenticatedUser, Principal};
pub use problem_details::{exception_handler, status_code_pages, PreserveBody};
