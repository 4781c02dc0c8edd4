#[allow(dead_code, unused_imports)]
pub mod lms_api;

#[allow(dead_code, unused_imports)]
pub use lms_api::MockLmsApi;
