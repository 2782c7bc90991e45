pub mod grading_service;
pub mod quiz_service;
