use std::{cell::Cell, rc::Rc};

use crate::{
    animation::{
        directive::{Directive, FromState},
        ease::Ease,
    },
    stage::signal::CompletionLatch,
};

/// The primitives a single tween animates.
#[derive(Clone, Debug, PartialEq)]
pub enum Targets<H> {
    /// One primitive.
    One(H),
    /// Several primitives animated together by the same tween.
    Many(Vec<H>),
}

impl<H> Targets<H> {
    /// Number of primitives addressed.
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(v) => v.len(),
        }
    }

    /// Whether no primitive is addressed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the addressed primitives.
    pub fn iter(&self) -> std::slice::Iter<'_, H> {
        match self {
            Self::One(h) => std::slice::from_ref(h).iter(),
            Self::Many(v) => v.iter(),
        }
    }
}

/// An "animate-from" request handed to the [`TweenEngine`].
#[derive(Clone, Debug)]
pub struct Tween {
    /// Duration in seconds.
    pub duration_s: f64,
    /// Delay before the tween starts, in seconds.
    pub delay_s: f64,
    /// Easing curve.
    pub ease: Ease,
    /// Start state; the primitive's current attributes are the end state.
    pub from: FromState,
    /// Progress callback, present when the directive gates a completion signal.
    pub probe: Option<ProgressProbe>,
}

impl Tween {
    pub(crate) fn from_directive(directive: &Directive, probe: Option<ProgressProbe>) -> Self {
        Self {
            duration_s: directive.duration_s,
            delay_s: directive.delay_s,
            ease: directive.ease,
            from: directive.from,
            probe,
        }
    }
}

/// The external interpolation engine.
///
/// Implementations own per-frame interpolation, easing and transform composition. When a tween
/// carries a [`ProgressProbe`] the engine reports progress through it on every frame and calls
/// [`ProgressProbe::complete`] or [`ProgressProbe::cancel`] when the tween ends.
pub trait TweenEngine<H> {
    /// Start animating `targets` from `tween.from` to their current attributes.
    fn animate_from(&mut self, targets: Targets<H>, tween: Tween);
}

impl<H, E> TweenEngine<H> for &mut E
where
    E: TweenEngine<H> + ?Sized,
{
    fn animate_from(&mut self, targets: Targets<H>, tween: Tween) {
        (**self).animate_from(targets, tween);
    }
}

#[derive(Debug)]
struct ProbeState {
    threshold: f64,
    latch: Rc<CompletionLatch>,
    finished: Cell<bool>,
}

/// Progress callback wrapped around a threshold-gated tween.
///
/// The first sample at or above the threshold trips the owning stage's completion signal; every
/// later sample is ignored. Natural completion counts as a final sample of `1.0`. Cancellation
/// without a crossing leaves the signal untripped.
#[derive(Clone, Debug)]
pub struct ProgressProbe {
    state: Rc<ProbeState>,
}

impl ProgressProbe {
    pub(crate) fn new(threshold: f64, latch: Rc<CompletionLatch>) -> Self {
        Self {
            state: Rc::new(ProbeState {
                threshold,
                latch,
                finished: Cell::new(false),
            }),
        }
    }

    /// Progress at which the completion signal fires.
    pub fn threshold(&self) -> f64 {
        self.state.threshold
    }

    /// Report measured progress in `[0, 1]`. Returns `true` if this sample fired the signal.
    pub fn report(&self, progress: f64) -> bool {
        let state = &self.state;
        if state.finished.get() || state.latch.is_closed() || state.latch.is_fired() {
            return false;
        }
        if progress.is_nan() || progress < state.threshold {
            return false;
        }
        let fired = state.latch.trip();
        if fired {
            tracing::debug!(
                progress,
                threshold = state.threshold,
                "completion threshold crossed"
            );
        }
        fired
    }

    /// The tween ran to its end. Returns `true` if this fired the signal.
    pub fn complete(&self) -> bool {
        let fired = self.report(1.0);
        self.state.finished.set(true);
        fired
    }

    /// The tween was killed early; no further samples are accepted.
    pub fn cancel(&self) {
        if !self.state.finished.replace(true) && !self.state.latch.is_fired() {
            tracing::debug!(
                threshold = self.state.threshold,
                "tween cancelled before completion threshold"
            );
        }
    }

    /// Whether the tween has completed or been cancelled.
    pub fn is_finished(&self) -> bool {
        self.state.finished.get()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
