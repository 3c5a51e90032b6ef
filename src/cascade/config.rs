use crate::{
    emblem::layout::{ElementKind, EmblemMetrics, Palette},
    foundation::error::{RevealError, RevealResult},
    stage::outer::{OuterMetrics, OuterTierTable},
};

/// Number of dots in the cluster.
pub const DOT_COUNT: usize = 12;

/// Gate delays of the inner-tier elements, counted from the moment the tier unlocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct InnerDelays {
    /// Centre square.
    pub center_square_ms: u64,
    /// Wordmark.
    pub wordmark_ms: u64,
    /// Dot cluster.
    pub dots_ms: u64,
    /// Left and right single leaves.
    pub side_leaves_ms: u64,
    /// Top and bottom leaf clusters.
    pub leaf_clusters_ms: u64,
}

impl Default for InnerDelays {
    fn default() -> Self {
        Self {
            center_square_ms: 200,
            wordmark_ms: 0,
            dots_ms: 300,
            side_leaves_ms: 900,
            leaf_clusters_ms: 860,
        }
    }
}

/// Timings, ordering and geometry of the whole reveal.
///
/// Every field has a default, so a partial JSON document only overrides what it names.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Delay before the outer ring mounts at all.
    pub reveal_delay_ms: u64,
    /// Base entrance duration of the outer squares, in seconds.
    pub base_duration_s: f64,
    /// Progress of outer variant 0 that unlocks the inner tier.
    pub completion_threshold: f64,
    /// Per-element inner gate delays.
    pub inner_delays: InnerDelays,
    /// Order in which the dots appear, as dot indices.
    pub dot_order: Vec<usize>,
    /// Delay between consecutive dots, in seconds.
    pub dot_increment_s: f64,
    /// Emblem dimensions.
    pub metrics: EmblemMetrics,
    /// Emblem colors.
    pub palette: Palette,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 1_000,
            base_duration_s: 0.5,
            completion_threshold: 0.3,
            inner_delays: InnerDelays::default(),
            dot_order: vec![5, 7, 1, 2, 4, 11, 0, 10, 8, 6, 9, 3],
            dot_increment_s: 0.1,
            metrics: EmblemMetrics::default(),
            palette: Palette::default(),
        }
    }
}

impl RevealConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> RevealResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Pretty JSON form.
    pub fn to_json_string(&self) -> RevealResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check ranges and that `dot_order` is a permutation of the dot indices.
    pub fn validate(&self) -> RevealResult<()> {
        if !self.base_duration_s.is_finite() || self.base_duration_s < 0.1 {
            return Err(RevealError::config(
                "base_duration_s must be finite and >= 0.1 (vertical variants run 0.1s shorter)",
            ));
        }
        if !(0.0..=1.0).contains(&self.completion_threshold) {
            return Err(RevealError::config("completion_threshold must be in [0, 1]"));
        }
        if !self.dot_increment_s.is_finite() || self.dot_increment_s < 0.0 {
            return Err(RevealError::config("dot_increment_s must be finite and >= 0"));
        }
        if self.dot_order.len() != DOT_COUNT {
            return Err(RevealError::config(format!(
                "dot_order must list {DOT_COUNT} dots, got {}",
                self.dot_order.len()
            )));
        }
        let mut seen = [false; DOT_COUNT];
        for &idx in &self.dot_order {
            let Some(slot) = seen.get_mut(idx) else {
                return Err(RevealError::config(format!("dot_order index {idx} is out of range")));
            };
            if std::mem::replace(slot, true) {
                return Err(RevealError::config(format!("dot_order lists dot {idx} twice")));
            }
        }
        let m = &self.metrics;
        if !(m.width > 0.0 && m.height > 0.0 && m.square_width > 0.0) {
            return Err(RevealError::config("emblem dimensions must be positive"));
        }
        if !(0.0..1.0).contains(&m.overlap_ratio) {
            return Err(RevealError::config("overlap_ratio must be in [0, 1)"));
        }
        Ok(())
    }

    /// Gate delay for `kind`. Outer squares mount with the reveal gate and have none.
    pub fn gate_delay_ms(&self, kind: ElementKind) -> u64 {
        let d = &self.inner_delays;
        match kind {
            ElementKind::OuterSquare(_) => 0,
            ElementKind::CenterSquare => d.center_square_ms,
            ElementKind::Wordmark => d.wordmark_ms,
            ElementKind::DotCluster => d.dots_ms,
            ElementKind::LeafLeft | ElementKind::LeafRight => d.side_leaves_ms,
            ElementKind::TopLeaves | ElementKind::BottomLeaves => d.leaf_clusters_ms,
        }
    }

    /// Variant table for the outer ring.
    pub fn outer_table(&self) -> OuterTierTable {
        OuterTierTable::new(OuterMetrics {
            unit_width: self.metrics.square_width,
            overlap: self.metrics.overlap(),
            base_duration_s: self.base_duration_s,
            completion_threshold: self.completion_threshold,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cascade/config.rs"]
mod tests;
