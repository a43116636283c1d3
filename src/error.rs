//! Error type shared by every component of the engine.

use thiserror::Error;

/// Errors raised while resolving attributes, loading catalogs, or simulating.
///
/// A slot-limit overflow is not represented here: it yields a combined
/// probability of exactly 0.
#[derive(Error, Debug)]
pub enum OddsError {
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("No tier of '{attribute}' is available at level {level} (lowest requirement is {required})")]
    LevelTooLow {
        attribute: String,
        level: u32,
        required: u32,
    },

    #[error("Cannot simulate with combined probability {0}")]
    InvalidProbability(f64),

    #[error("None of the {trials} simulated trials succeeded")]
    NoSuccessfulTrials { trials: u32 },

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Failed to parse catalog JSON: {0}")]
    CatalogParse(#[from] serde_json::Error),
}

impl OddsError {
    /// True for the per-attribute failures a caller may skip past.
    pub fn is_resolution_failure(&self) -> bool {
        matches!(
            self,
            OddsError::UnknownAttribute(_) | OddsError::LevelTooLow { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, OddsError>;
