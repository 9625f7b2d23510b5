/// Crop identities, fixed tables, and catalog generation.
pub mod crops;
pub mod engine;
/// Per-month environmental sample generation.
pub mod environment;
pub mod rng;
pub mod types;
