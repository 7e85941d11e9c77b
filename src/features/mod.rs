pub mod reports;
// Pure view-layer logic, reached through consumers rather than routes
#[allow(dead_code)]
pub mod triage;
