use serde::{Deserialize, Serialize};

/// Which slice of the history summary statistics are computed over.
///
/// Summarizing the entire persisted history conflates the current run
/// with prior runs, so the scope is an explicit choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatsScope {
    /// Every observation in the persisted history.
    #[default]
    Lifetime,
    /// Only observations recorded by the current tracking run.
    Session,
}
