// Integration tests for quitpath
// This file serves as the main entry point for integration tests

#[path = "integration/quiz_flow.rs"]
mod quiz_flow;

#[path = "integration/navigation_contract.rs"]
mod navigation_contract;

#[path = "integration/home_dashboard.rs"]
mod home_dashboard;
