// HTTP client tests against a stub complaint service
#[path = "integration_tests.rs"]
mod integration_tests;
