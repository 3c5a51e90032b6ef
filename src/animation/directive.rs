use crate::{
    animation::ease::Ease,
    foundation::error::{RevealError, RevealResult},
};

/// Visible stroke range a tween starts from, as fractions of the path length.
///
/// `{ start: 1.0, end: 1.0 }` is a stroke that has not been drawn yet.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DrawRange {
    /// Start of the visible segment in `[0, 1]`.
    pub start: f64,
    /// End of the visible segment in `[0, 1]`.
    pub end: f64,
}

impl DrawRange {
    /// Nothing drawn yet; the stroke grows back toward its full length.
    pub const UNDRAWN_AT_END: Self = Self {
        start: 1.0,
        end: 1.0,
    };
}

/// The attributes an "animate-from" tween starts at.
///
/// The primitive's current attributes are the end state; every `Some` field here is where the
/// engine starts interpolating from. Translation is an offset in emblem units, rotation is in
/// radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FromState {
    /// Horizontal translation.
    pub x: Option<f64>,
    /// Vertical translation.
    pub y: Option<f64>,
    /// Rotation in radians.
    pub rotation_rad: Option<f64>,
    /// Uniform scale.
    pub scale: Option<f64>,
    /// Horizontal-only scale.
    pub scale_x: Option<f64>,
    /// Opacity in `[0, 1]`.
    pub opacity: Option<f64>,
    /// Stroke draw range.
    pub draw: Option<DrawRange>,
}

impl FromState {
    /// Whether no attribute is animated.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Rotation converted to degrees, for engines that expect them.
    pub fn rotation_degrees(&self) -> Option<f64> {
        self.rotation_rad.map(f64::to_degrees)
    }
}

/// Declarative parameters for one entrance tween.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Directive {
    /// Tween duration in seconds.
    pub duration_s: f64,
    /// Delay before the tween starts, in seconds.
    #[serde(default)]
    pub delay_s: f64,
    /// Easing curve.
    #[serde(default)]
    pub ease: Ease,
    /// Start state.
    #[serde(default)]
    pub from: FromState,
    /// Progress at which the owning stage's completion signal fires.
    #[serde(default)]
    pub completion_threshold: Option<f64>,
}

impl Directive {
    /// Directive with the default ease, no delay and an empty start state.
    pub fn new(duration_s: f64) -> Self {
        Self {
            duration_s,
            delay_s: 0.0,
            ease: Ease::default(),
            from: FromState::default(),
            completion_threshold: None,
        }
    }

    /// Set the start delay.
    pub fn delay(mut self, delay_s: f64) -> Self {
        self.delay_s = delay_s;
        self
    }

    /// Set the easing curve.
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Start from a horizontal offset.
    pub fn from_x(mut self, x: f64) -> Self {
        self.from.x = Some(x);
        self
    }

    /// Start from a vertical offset.
    pub fn from_y(mut self, y: f64) -> Self {
        self.from.y = Some(y);
        self
    }

    /// Start from a rotation, in radians.
    pub fn from_rotation(mut self, rad: f64) -> Self {
        self.from.rotation_rad = Some(rad);
        self
    }

    /// Start from a uniform scale.
    pub fn from_scale(mut self, scale: f64) -> Self {
        self.from.scale = Some(scale);
        self
    }

    /// Start from a horizontal-only scale.
    pub fn from_scale_x(mut self, scale_x: f64) -> Self {
        self.from.scale_x = Some(scale_x);
        self
    }

    /// Start from an opacity.
    pub fn from_opacity(mut self, opacity: f64) -> Self {
        self.from.opacity = Some(opacity);
        self
    }

    /// Start from a stroke draw range.
    pub fn from_draw(mut self, draw: DrawRange) -> Self {
        self.from.draw = Some(draw);
        self
    }

    /// Fire the stage's completion signal once progress reaches `threshold`.
    pub fn complete_at(mut self, threshold: f64) -> Self {
        self.completion_threshold = Some(threshold);
        self
    }

    /// Check durations, opacity and threshold ranges.
    pub fn validate(&self) -> RevealResult<()> {
        if !self.duration_s.is_finite() || self.duration_s < 0.0 {
            return Err(RevealError::validation(
                "directive duration must be finite and >= 0",
            ));
        }
        if !self.delay_s.is_finite() || self.delay_s < 0.0 {
            return Err(RevealError::validation(
                "directive delay must be finite and >= 0",
            ));
        }
        if let Some(opacity) = self.from.opacity
            && !(0.0..=1.0).contains(&opacity)
        {
            return Err(RevealError::validation(
                "directive start opacity must be in [0, 1]",
            ));
        }
        if let Some(threshold) = self.completion_threshold
            && !(0.0..=1.0).contains(&threshold)
        {
            return Err(RevealError::validation(
                "completion threshold must be in [0, 1]",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/directive.rs"]
mod tests;
