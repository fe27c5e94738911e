//! Command implementations

pub mod batch;

pub use batch::run_batch;
