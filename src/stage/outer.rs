use std::f64::consts::PI;

use crate::{
    animation::{directive::Directive, ease::Ease},
    stage::entrance::{DispatchTable, Step},
};

/// Registry path of the single square primitive in each outer stage.
pub const OUTER_TARGET: &str = "path";

/// Dimensions and timings the outer tier is derived from.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OuterMetrics {
    /// Width of one square, the emblem's unit length.
    pub unit_width: f64,
    /// Overlap between neighbouring squares.
    pub overlap: f64,
    /// Base entrance duration in seconds.
    pub base_duration_s: f64,
    /// Progress at which variant 0 unlocks the inner tier.
    pub completion_threshold: f64,
}

/// Six-fold symmetric variant table for the outer ring of squares.
///
/// Horizontal variants fly in from three unit widths away while spinning half a turn; the two
/// middle variants slide vertically, starting a little later. Only variant 0 carries a
/// completion threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OuterTierTable {
    metrics: OuterMetrics,
}

impl OuterTierTable {
    /// Number of outer variants.
    pub const VARIANTS: usize = 6;

    /// Table for the given metrics.
    pub fn new(metrics: OuterMetrics) -> Self {
        Self { metrics }
    }

    /// Metrics the table was built from.
    pub fn metrics(&self) -> OuterMetrics {
        self.metrics
    }

    /// Directive for `variant`, or `None` outside `0..6`.
    pub fn directive(&self, variant: usize) -> Option<Directive> {
        let m = self.metrics;
        let base = m.base_duration_s;
        let fly = m.unit_width * 3.0;
        let slide = m.unit_width / 2.0 - m.overlap / 2.0;
        let vertical = |dy: f64| {
            Directive::new(base - 0.1)
                .delay(0.1)
                .ease(Ease::InOutQuad)
                .from_y(dy)
        };
        let d = match variant {
            0 => Directive::new(base)
                .from_x(-fly)
                .from_rotation(-PI)
                .complete_at(m.completion_threshold),
            1 => vertical(slide),
            2 => Directive::new(base).from_x(fly).from_rotation(PI),
            3 => Directive::new(base).from_x(-fly).from_rotation(PI),
            4 => vertical(-slide),
            5 => Directive::new(base).from_x(fly).from_rotation(-PI),
            _ => return None,
        };
        Some(d)
    }
}

impl DispatchTable for OuterTierTable {
    fn len(&self) -> usize {
        Self::VARIANTS
    }

    fn steps(&self, variant: usize) -> Option<Vec<Step>> {
        let directive = self.directive(variant)?;
        Some(vec![Step::new(OUTER_TARGET, directive).ok()?])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/outer.rs"]
mod tests;
