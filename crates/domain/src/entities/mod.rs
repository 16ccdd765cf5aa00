pub mod observation;

// Re-export for easier access
pub use observation::Observation;
