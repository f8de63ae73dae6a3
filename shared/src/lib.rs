pub mod models;
pub mod utils;

// Table model and locale helpers used by the converter crate.
// No I/O lives here.
