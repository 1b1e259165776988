// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Service discovery and liveness endpoints. Nothing here reads or writes
// goal data.
//
// Security Level: None (completely public access)
// Route Prefix: No /api prefix (e.g., /, /health)

pub mod status;

pub use status::{health, not_found, root};
