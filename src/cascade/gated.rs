use crate::{
    animation::tween::TweenEngine,
    cascade::render::Renderer,
    emblem::layout::{ElementKind, ElementLayout},
    foundation::{core::Millis, error::RevealResult},
    gate::{
        mount_gate::MountGate,
        timers::{TimerId, Timers},
    },
    stage::entrance::{DispatchReport, Stage},
};

/// An element whose mount is held back by its own gate.
///
/// When the gate opens the element is mounted through the [`Renderer`] and its stage dispatches
/// the entrance. Tearing it down cancels the gate, silences the stage and unmounts anything
/// already mounted.
#[derive(Debug)]
pub struct GatedStage<H> {
    layout: ElementLayout,
    gate: MountGate,
    stage: Stage<H>,
    mounted: bool,
}

impl<H: Clone> GatedStage<H> {
    /// Bind `stage` to a gate of `delay_ms`.
    pub fn new(layout: ElementLayout, delay_ms: u64, stage: Stage<H>) -> Self {
        Self {
            layout,
            gate: MountGate::new(delay_ms),
            stage,
            mounted: false,
        }
    }

    /// Element this stage animates.
    pub fn kind(&self) -> ElementKind {
        self.layout.kind
    }

    /// The element's gate.
    pub fn gate(&self) -> &MountGate {
        &self.gate
    }

    /// The element's stage.
    pub fn stage(&self) -> &Stage<H> {
        &self.stage
    }

    /// Whether the element is currently mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Arm the gate with `token` as its timer payload.
    pub fn arm<Q>(&mut self, timers: &mut Q, token: Q::Token) -> bool
    where
        Q: Timers + ?Sized,
    {
        self.gate.arm(timers, token)
    }

    /// Deliver a timer expiry. When it opens the gate, mount and dispatch; the report of that
    /// dispatch is returned.
    pub fn on_timer<R, E>(
        &mut self,
        id: TimerId,
        now: Millis,
        renderer: &mut R,
        engine: &mut E,
    ) -> RevealResult<Option<DispatchReport>>
    where
        R: Renderer<H> + ?Sized,
        E: TweenEngine<H> + ?Sized,
    {
        if !self.gate.on_timer(id, now) {
            return Ok(None);
        }
        renderer.mount(&self.layout, self.stage.attach_sink());
        self.mounted = true;
        tracing::debug!(element = %self.layout.kind, %now, "element mounted");
        self.stage.on_all_handles_attached(engine).map(Some)
    }

    /// Cancel, silence and unmount. Idempotent.
    pub fn teardown<Q, R>(&mut self, timers: &mut Q, renderer: &mut R)
    where
        Q: Timers + ?Sized,
        R: Renderer<H> + ?Sized,
    {
        self.gate.teardown(timers);
        self.stage.teardown();
        if std::mem::replace(&mut self.mounted, false) {
            renderer.unmount(self.layout.kind);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cascade/gated.rs"]
mod tests;
