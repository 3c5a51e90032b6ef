use crate::foundation::error::{RevealError, RevealResult};

/// Overshoot used by `back.out` when no parameter is given.
pub const DEFAULT_BACK_OVERSHOOT: f64 = 1.70158;

/// Easing curves understood by the tween engine.
///
/// The engine performs interpolation itself; the curve travels across the boundary as an
/// identifier (see [`Ease::name`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-in (`power1.in`).
    InQuad,
    /// Quadratic ease-out (`power1.out`), the engine default.
    #[default]
    OutQuad,
    /// Quadratic ease-in/out (`power1.inOut`).
    InOutQuad,
    /// Cubic ease-in (`power2.in`).
    InCubic,
    /// Cubic ease-out (`power2.out`).
    OutCubic,
    /// Cubic ease-in/out (`power2.inOut`).
    InOutCubic,
    /// Ease-out that overshoots the end state before settling (`back.out(n)`).
    BackOut {
        /// Overshoot strength.
        overshoot: f64,
    },
}

impl Ease {
    /// Engine identifier for this curve, e.g. `power1.inOut` or `back.out(1.5)`.
    pub fn name(self) -> String {
        match self {
            Self::Linear => "linear".to_owned(),
            Self::InQuad => "power1.in".to_owned(),
            Self::OutQuad => "power1.out".to_owned(),
            Self::InOutQuad => "power1.inOut".to_owned(),
            Self::InCubic => "power2.in".to_owned(),
            Self::OutCubic => "power2.out".to_owned(),
            Self::InOutCubic => "power2.inOut".to_owned(),
            Self::BackOut { overshoot } => format!("back.out({overshoot})"),
        }
    }

    /// Parse an engine identifier. Accepts the forms produced by [`Ease::name`], plus
    /// `none` for linear and bare `back.out` for the default overshoot.
    pub fn from_name(name: &str) -> RevealResult<Self> {
        let name = name.trim();
        let ease = match name {
            "linear" | "none" => Self::Linear,
            "power1.in" => Self::InQuad,
            "power1.out" | "power1" => Self::OutQuad,
            "power1.inOut" => Self::InOutQuad,
            "power2.in" => Self::InCubic,
            "power2.out" | "power2" => Self::OutCubic,
            "power2.inOut" => Self::InOutCubic,
            "back.out" => Self::BackOut {
                overshoot: DEFAULT_BACK_OVERSHOOT,
            },
            _ => {
                let arg = name
                    .strip_prefix("back.out(")
                    .and_then(|rest| rest.strip_suffix(')'))
                    .ok_or_else(|| RevealError::validation(format!("unknown ease '{name}'")))?;
                let overshoot = arg.trim().parse::<f64>().map_err(|_| {
                    RevealError::validation(format!("ease '{name}' has a non-numeric parameter"))
                })?;
                if !overshoot.is_finite() {
                    return Err(RevealError::validation(format!(
                        "ease '{name}' parameter must be finite"
                    )));
                }
                Self::BackOut { overshoot }
            }
        };
        Ok(ease)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
