//! Finite-or-unbounded quantities.
//!
//! A combined probability of 0 makes expected attempts, costs and confidence
//! bounds infinite. Those are carried as `Bounded::Unbounded` instead of
//! `f64::INFINITY` so no NaN can leak through later arithmetic.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bounded {
    Finite(f64),
    Unbounded,
}

impl Bounded {
    /// Expected attempts of a geometric process with success chance `p`.
    pub fn attempts_for(probability: f64) -> Self {
        if probability > 0.0 {
            Bounded::Finite(1.0 / probability)
        } else {
            Bounded::Unbounded
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Bounded::Unbounded)
    }

    pub fn finite(&self) -> Option<f64> {
        match self {
            Bounded::Finite(v) => Some(*v),
            Bounded::Unbounded => None,
        }
    }

    /// Apply `f` to a finite value; unbounded stays unbounded.
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Bounded::Finite(v) => Bounded::Finite(f(v)),
            Bounded::Unbounded => Bounded::Unbounded,
        }
    }
}

impl From<f64> for Bounded {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            Bounded::Finite(value)
        } else {
            Bounded::Unbounded
        }
    }
}

impl fmt::Display for Bounded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Bounded::Finite(v) => match f.precision() {
                Some(p) => format!("{:.*}", p, v),
                None => v.to_string(),
            },
            Bounded::Unbounded => "unbounded".to_string(),
        };
        // Width and alignment still apply to the rendered text
        match f.width() {
            Some(width) => {
                let pad = width.saturating_sub(text.chars().count());
                let (left, right) = match f.align() {
                    Some(fmt::Alignment::Left) => (0, pad),
                    Some(fmt::Alignment::Center) => (pad / 2, pad - pad / 2),
                    _ => (pad, 0),
                };
                write!(f, "{}{}{}", " ".repeat(left), text, " ".repeat(right))
            }
            None => f.write_str(&text),
        }
    }
}

// Finite values serialize as plain numbers, the sentinel as a string.
impl serde::Serialize for Bounded {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Bounded::Finite(v) => serializer.serialize_f64(*v),
            Bounded::Unbounded => serializer.serialize_str("unbounded"),
        }
    }
}
