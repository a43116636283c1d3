use crate::core::constants::Z_95;
use crate::core::Bounded;
use serde::Serialize;

/// 95% interval on the number of attempts needed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    pub lower: Bounded,
    pub upper: Bounded,
}

impl ConfidenceInterval {
    pub fn unbounded() -> Self {
        Self {
            lower: Bounded::Unbounded,
            upper: Bounded::Unbounded,
        }
    }
}

/// Attempts follow a geometric distribution with variance (1-p)/p².
pub fn confidence_interval(probability: f64, expected_attempts: Bounded) -> ConfidenceInterval {
    let expected = match expected_attempts {
        Bounded::Finite(e) if probability > 0.0 => e,
        _ => return ConfidenceInterval::unbounded(),
    };

    let variance = (1.0 - probability) / (probability * probability);
    let margin = Z_95 * variance.sqrt();

    ConfidenceInterval {
        lower: Bounded::Finite((expected - margin).max(1.0)),
        upper: Bounded::Finite(expected + margin),
    }
}
