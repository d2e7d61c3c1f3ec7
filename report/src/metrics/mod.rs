pub mod capacity_data;
pub mod tier_bytes;
pub mod worker_data;

// Re-export the main types for easy access
pub use capacity_data::*;
pub use tier_bytes::TierBytes;
pub use worker_data::*;
