use crate::{
    animation::{
        directive::{Directive, DrawRange},
        ease::Ease,
    },
    cascade::config::RevealConfig,
    emblem::layout::{ElementKind, wordmark_translate_y},
    foundation::error::{RevealError, RevealResult},
    stage::entrance::{DispatchTable, Step},
};

/// `(dot index, delay in seconds)` for each dot, in reveal order.
///
/// The dot at position `k` of `order` starts `k * increment_s` after the cluster mounts.
pub fn dot_schedule(order: &[usize], increment_s: f64) -> Vec<(usize, f64)> {
    order
        .iter()
        .enumerate()
        .map(|(position, &dot)| (dot, position as f64 * increment_s))
        .collect()
}

fn stem_draw(duration_s: f64) -> Directive {
    Directive::new(duration_s)
        .from_draw(DrawRange::UNDRAWN_AT_END)
        .from_opacity(0.8)
}

/// Steps of the entrance effect of `kind`.
pub fn element_steps(kind: ElementKind, cfg: &RevealConfig) -> RevealResult<Vec<Step>> {
    let steps = match kind {
        ElementKind::OuterSquare(variant) => {
            cfg.outer_table().steps(usize::from(variant)).ok_or_else(|| {
                RevealError::validation(format!("outer variant {variant} is out of range"))
            })?
        }
        ElementKind::CenterSquare => vec![Step::new(
            "path",
            Directive::new(0.5)
                .from_opacity(0.0)
                .from_scale(0.6)
                .ease(Ease::BackOut { overshoot: 1.5 }),
        )?],
        ElementKind::Wordmark => vec![Step::new(
            "g",
            Directive::new(1.2)
                .from_opacity(0.0)
                .from_scale_x(0.6)
                .from_y(wordmark_translate_y(&cfg.metrics) - 2.0),
        )?],
        ElementKind::DotCluster => dot_schedule(&cfg.dot_order, cfg.dot_increment_s)
            .into_iter()
            .map(|(dot, delay)| {
                Step::new(
                    &format!("circles.{dot}"),
                    Directive::new(0.2)
                        .from_opacity(0.0)
                        .from_scale(0.9)
                        .delay(delay),
                )
            })
            .collect::<RevealResult<Vec<_>>>()?,
        ElementKind::LeafLeft | ElementKind::LeafRight => vec![
            Step::new("stem", stem_draw(0.4))?,
            Step::new("leaf", Directive::new(0.6).from_opacity(0.0).delay(0.1))?,
        ],
        ElementKind::TopLeaves | ElementKind::BottomLeaves => vec![
            Step::new("centerStem", stem_draw(0.4))?,
            Step::many(&["leftStem", "rightStem"], stem_draw(0.4))?,
            Step::new(
                "leafs",
                Directive::new(0.45)
                    .from_opacity(0.0)
                    .delay(0.2)
                    .ease(Ease::Linear),
            )?,
        ],
    };
    Ok(steps)
}

#[cfg(test)]
#[path = "../../tests/unit/emblem/choreography.rs"]
mod tests;
