// Livegate API Library
//
// HTTP surface over the live-stream resolution pipeline

pub mod http;

// Re-export commonly used types
pub use http::{create_router, AppState};
