//! Helpers shared by the backend's integration tests: one-time logging
//! setup and assertions over problem-details error responses.

pub mod logging;
pub mod problem_details;

pub use problem_details::{assert_problem_details_from_parts, assert_problem_details_from_service_response};
