use crate::{
    animation::tween::TweenEngine,
    cascade::{config::RevealConfig, gated::GatedStage, render::Renderer},
    emblem::{
        choreography::element_steps,
        layout::{ElementKind, element_layout},
    },
    foundation::{
        core::Millis,
        error::{RevealError, RevealResult},
    },
    gate::{
        mount_gate::MountGate,
        timers::{TimerId, TimerQueue, Timers},
    },
    stage::{
        entrance::Stage,
        signal::{CompletionReceiver, completion_channel},
    },
};

/// Timer payload identifying which gate expired.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum GateKey {
    /// The top-level gate in front of the outer ring.
    Reveal,
    /// An element's own gate.
    Element(ElementKind),
}

/// Lifecycle of a [`Cascade`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum CascadePhase {
    /// Built, not started.
    Idle,
    /// Started; gates and stages are live.
    Running,
    /// Torn down; terminal.
    TornDown,
}

/// What happened during a reveal.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RevealEventKind {
    /// A gate opened.
    GateReady {
        /// Which gate.
        gate: GateKey,
    },
    /// An element was mounted.
    Mounted {
        /// Which element.
        element: ElementKind,
    },
    /// An element's stage handed its tweens to the engine.
    Dispatched {
        /// Which element.
        element: ElementKind,
        /// Tweens issued.
        issued: usize,
        /// Steps skipped for missing handles.
        skipped: usize,
    },
    /// The outer ring's completion signal was observed and the inner tier unlocked.
    InnerUnlocked,
    /// The cascade was torn down.
    TornDown,
}

/// A timestamped [`RevealEventKind`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RevealEvent {
    /// Host time of the event.
    pub at: Millis,
    /// What happened.
    #[serde(flatten)]
    pub kind: RevealEventKind,
}

/// The two-tier reveal lattice.
///
/// ```text
/// reveal gate ──► outer squares 0..6 (each dispatches its own entrance)
///                  └─ square 0 completion ──► inner tier unlocked
///                                              ├─ centre square gate
///                                              ├─ wordmark gate
///                                              ├─ dot cluster gate
///                                              ├─ side leaf gates
///                                              └─ leaf cluster gates
/// ```
///
/// The host drives time through [`Cascade::advance`], after letting the tween engine report
/// progress for the frame. A completion observed inside `advance` arms the inner gates at the
/// instant it happened; one reported between calls is observed, and arms them, at the next
/// `advance`.
#[derive(Debug)]
pub struct Cascade<H> {
    config: RevealConfig,
    timers: TimerQueue<GateKey>,
    reveal_gate: MountGate,
    outer: Vec<GatedStage<H>>,
    inner: Vec<GatedStage<H>>,
    completion: CompletionReceiver,
    inner_unlocked: bool,
    phase: CascadePhase,
    events: Vec<RevealEvent>,
}

impl<H: Clone> Cascade<H> {
    /// Validate `config` and build every gate and stage of the lattice.
    pub fn new(config: RevealConfig) -> RevealResult<Self> {
        config.validate()?;
        let (emitter, completion) = completion_channel();

        let build = |kind: ElementKind, with_emitter: bool| -> RevealResult<GatedStage<H>> {
            let mut builder = Stage::builder(kind.label()).steps(element_steps(kind, &config)?);
            if with_emitter {
                builder = builder.emitter(emitter.clone());
            }
            let layout = element_layout(kind, &config.metrics, &config.palette);
            Ok(GatedStage::new(
                layout,
                config.gate_delay_ms(kind),
                builder.build()?,
            ))
        };
        let outer = ElementKind::outer()
            .map(|kind| build(kind, kind == ElementKind::OuterSquare(0)))
            .collect::<RevealResult<Vec<_>>>()?;
        let inner = ElementKind::INNER
            .into_iter()
            .map(|kind| build(kind, false))
            .collect::<RevealResult<Vec<_>>>()?;

        Ok(Self {
            reveal_gate: MountGate::new(config.reveal_delay_ms),
            config,
            timers: TimerQueue::new(),
            outer,
            inner,
            completion,
            inner_unlocked: false,
            phase: CascadePhase::Idle,
            events: Vec::new(),
        })
    }

    /// Start building a cascade from the default configuration.
    pub fn builder() -> CascadeBuilder {
        CascadeBuilder::default()
    }

    /// Configuration in use.
    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Current phase.
    pub fn phase(&self) -> CascadePhase {
        self.phase
    }

    /// Time of the last processed instant.
    pub fn now(&self) -> Millis {
        self.timers.now()
    }

    /// Earliest pending gate expiry, for hosts that sleep between frames.
    pub fn next_due(&self) -> Option<Millis> {
        self.timers.next_due()
    }

    /// Whether the top-level gate has opened (the outer ring is mounted).
    pub fn outer_tier_mounted(&self) -> bool {
        self.reveal_gate.is_ready()
    }

    /// The inner tier's mount flag: `true` once outer variant 0 has completed.
    pub fn inner_tier_mounted(&self) -> bool {
        self.inner_unlocked
    }

    /// Whether `kind` is currently mounted.
    pub fn is_mounted(&self, kind: ElementKind) -> bool {
        self.element(kind).is_some_and(GatedStage::is_mounted)
    }

    /// The gated stage of `kind`.
    pub fn element(&self, kind: ElementKind) -> Option<&GatedStage<H>> {
        self.outer
            .iter()
            .chain(self.inner.iter())
            .find(|g| g.kind() == kind)
    }

    /// Events so far, in order.
    pub fn events(&self) -> &[RevealEvent] {
        &self.events
    }

    /// Arm the top-level gate at `now`. A cascade runs once; starting it again is an error.
    pub fn start(&mut self, now: Millis) -> RevealResult<()> {
        if self.phase != CascadePhase::Idle {
            return Err(RevealError::stage(format!(
                "cascade cannot start from {:?}",
                self.phase
            )));
        }
        self.timers.settle(now);
        self.reveal_gate.arm(&mut self.timers, GateKey::Reveal);
        self.phase = CascadePhase::Running;
        tracing::debug!(%now, delay_ms = self.config.reveal_delay_ms, "reveal started");
        Ok(())
    }

    /// Process every gate due at or before `now`, mounting and dispatching what they unlock.
    #[tracing::instrument(skip(self, renderer, engine))]
    pub fn advance<R, E>(
        &mut self,
        now: Millis,
        renderer: &mut R,
        engine: &mut E,
    ) -> RevealResult<()>
    where
        R: Renderer<H> + ?Sized,
        E: TweenEngine<H> + ?Sized,
    {
        if self.phase != CascadePhase::Running {
            return Ok(());
        }
        let observed_between_frames = self.take_completion();
        self.drain(now, renderer, engine)?;
        self.timers.settle(now);
        if observed_between_frames {
            self.unlock_inner();
            self.drain(now, renderer, engine)?;
        }
        Ok(())
    }

    /// Cancel every pending gate, silence every stage and unmount everything mounted.
    /// Idempotent.
    pub fn teardown<R>(&mut self, renderer: &mut R)
    where
        R: Renderer<H> + ?Sized,
    {
        if self.phase == CascadePhase::TornDown {
            return;
        }
        self.reveal_gate.teardown(&mut self.timers);
        for g in self.outer.iter_mut().chain(self.inner.iter_mut()) {
            g.teardown(&mut self.timers, renderer);
        }
        self.timers.clear();
        self.phase = CascadePhase::TornDown;
        self.record(RevealEventKind::TornDown);
        tracing::debug!(now = %self.timers.now(), "reveal torn down");
    }

    fn drain<R, E>(&mut self, now: Millis, renderer: &mut R, engine: &mut E) -> RevealResult<()>
    where
        R: Renderer<H> + ?Sized,
        E: TweenEngine<H> + ?Sized,
    {
        while let Some((id, key)) = self.timers.pop_due(now) {
            self.on_timer(id, key, renderer, engine)?;
            if self.take_completion() {
                self.unlock_inner();
            }
        }
        Ok(())
    }

    fn on_timer<R, E>(
        &mut self,
        id: TimerId,
        key: GateKey,
        renderer: &mut R,
        engine: &mut E,
    ) -> RevealResult<()>
    where
        R: Renderer<H> + ?Sized,
        E: TweenEngine<H> + ?Sized,
    {
        let at = self.timers.now();
        match key {
            GateKey::Reveal => {
                if !self.reveal_gate.on_timer(id, at) {
                    return Ok(());
                }
                self.record(RevealEventKind::GateReady { gate: key });
                for g in &mut self.outer {
                    let token = GateKey::Element(g.kind());
                    g.arm(&mut self.timers, token);
                }
            }
            GateKey::Element(kind) => {
                let Some(g) = self
                    .outer
                    .iter_mut()
                    .chain(self.inner.iter_mut())
                    .find(|g| g.kind() == kind)
                else {
                    return Ok(());
                };
                let Some(report) = g.on_timer(id, at, renderer, engine)? else {
                    return Ok(());
                };
                self.record(RevealEventKind::GateReady { gate: key });
                self.record(RevealEventKind::Mounted { element: kind });
                self.record(RevealEventKind::Dispatched {
                    element: kind,
                    issued: report.issued,
                    skipped: report.skipped.len(),
                });
            }
        }
        Ok(())
    }

    fn take_completion(&mut self) -> bool {
        !self.inner_unlocked && self.completion.try_recv()
    }

    fn unlock_inner(&mut self) {
        if std::mem::replace(&mut self.inner_unlocked, true) {
            return;
        }
        for g in &mut self.inner {
            let token = GateKey::Element(g.kind());
            g.arm(&mut self.timers, token);
        }
        self.record(RevealEventKind::InnerUnlocked);
        tracing::debug!(now = %self.timers.now(), "inner tier unlocked");
    }

    fn record(&mut self, kind: RevealEventKind) {
        self.events.push(RevealEvent {
            at: self.timers.now(),
            kind,
        });
    }
}

/// Fluent constructor for [`Cascade`] over a [`RevealConfig`].
#[derive(Clone, Debug, Default)]
pub struct CascadeBuilder {
    config: RevealConfig,
}

impl CascadeBuilder {
    /// Start from an explicit configuration.
    pub fn from_config(config: RevealConfig) -> Self {
        Self { config }
    }

    /// Delay before the outer ring mounts.
    pub fn reveal_delay_ms(mut self, ms: u64) -> Self {
        self.config.reveal_delay_ms = ms;
        self
    }

    /// Base duration of the outer entrances.
    pub fn base_duration_s(mut self, secs: f64) -> Self {
        self.config.base_duration_s = secs;
        self
    }

    /// Progress of outer variant 0 that unlocks the inner tier.
    pub fn completion_threshold(mut self, threshold: f64) -> Self {
        self.config.completion_threshold = threshold;
        self
    }

    /// Override one inner element's gate delay.
    pub fn inner_delay_ms(mut self, kind: ElementKind, ms: u64) -> Self {
        let d = &mut self.config.inner_delays;
        match kind {
            ElementKind::OuterSquare(_) => {}
            ElementKind::CenterSquare => d.center_square_ms = ms,
            ElementKind::Wordmark => d.wordmark_ms = ms,
            ElementKind::DotCluster => d.dots_ms = ms,
            ElementKind::LeafLeft | ElementKind::LeafRight => d.side_leaves_ms = ms,
            ElementKind::TopLeaves | ElementKind::BottomLeaves => d.leaf_clusters_ms = ms,
        }
        self
    }

    /// Dot reveal order and spacing.
    pub fn dot_sequence(mut self, order: Vec<usize>, increment_s: f64) -> Self {
        self.config.dot_order = order;
        self.config.dot_increment_s = increment_s;
        self
    }

    /// Validate and build.
    pub fn build<H: Clone>(self) -> RevealResult<Cascade<H>> {
        Cascade::new(self.config)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cascade/reveal.rs"]
mod tests;
