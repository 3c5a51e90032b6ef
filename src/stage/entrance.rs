use std::rc::Rc;

use crate::{
    animation::{
        directive::Directive,
        tween::{ProgressProbe, Targets, Tween, TweenEngine},
    },
    foundation::error::{RevealError, RevealResult},
    registry::{
        path::HandlePath,
        store::{HandleRegistry, Slot},
    },
    stage::signal::{CompletionLatch, CompletionSender},
};

/// One directive bound to the registry paths it animates.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    /// Paths resolved against the stage registry; each may hold a handle or a list.
    pub targets: Vec<HandlePath>,
    /// Tween parameters.
    pub directive: Directive,
}

impl Step {
    /// Step animating whatever is registered at `path`.
    pub fn new(path: &str, directive: Directive) -> RevealResult<Self> {
        Self::many(&[path], directive)
    }

    /// Step animating several paths with one tween.
    pub fn many(paths: &[&str], directive: Directive) -> RevealResult<Self> {
        let targets = paths
            .iter()
            .map(|p| HandlePath::parse(p))
            .collect::<RevealResult<Vec<_>>>()?;
        if targets.is_empty() {
            return Err(RevealError::validation("step needs at least one target path"));
        }
        Ok(Self { targets, directive })
    }
}

/// Maps a small variant index to the steps of one stage.
pub trait DispatchTable {
    /// Number of variants, indexed `0..len`.
    fn len(&self) -> usize;

    /// Steps for `variant`, or `None` when out of range.
    fn steps(&self, variant: usize) -> Option<Vec<Step>>;

    /// Whether the table has no variants.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Where a stage is in its single entrance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum StagePhase {
    /// Handles are being registered.
    Attaching,
    /// The entrance effect has been issued.
    Dispatched,
    /// Torn down; terminal.
    TornDown,
}

/// Outcome of dispatching a stage's steps.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct DispatchReport {
    /// Tweens handed to the engine.
    pub issued: usize,
    /// Indices of steps skipped because no target handle was attached.
    pub skipped: Vec<usize>,
}

/// One entrance effect bound to one handle registry.
///
/// A stage fires exactly once: [`Stage::on_all_handles_attached`] issues one "animate-from"
/// request per step. Steps whose directive carries a completion threshold get a
/// [`ProgressProbe`] tied to this stage's write-once completion signal.
#[derive(Debug)]
pub struct Stage<H> {
    label: String,
    registry: HandleRegistry<H>,
    steps: Vec<Step>,
    latch: Rc<CompletionLatch>,
    phase: StagePhase,
}

impl<H: Clone> Stage<H> {
    /// Start building a stage.
    pub fn builder(label: impl Into<String>) -> StageBuilder<H> {
        StageBuilder::new(label)
    }

    /// Diagnostic label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Configured steps.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Current phase.
    pub fn phase(&self) -> StagePhase {
        self.phase
    }

    /// Read access to the registry.
    pub fn registry(&self) -> &HandleRegistry<H> {
        &self.registry
    }

    /// Registry the rendering collaborator attaches handles into.
    pub fn attach_sink(&mut self) -> &mut HandleRegistry<H> {
        &mut self.registry
    }

    /// Attach `handle` at `path`.
    pub fn attach(&mut self, path: &str, handle: H) -> bool {
        self.registry.attach(path, handle)
    }

    /// Mark the primitive at `path` as detached.
    pub fn detach(&mut self, path: &str) -> bool {
        self.registry.detach(path)
    }

    /// Target paths that currently resolve to no attached handle.
    pub fn missing_targets(&self) -> Vec<&HandlePath> {
        self.steps
            .iter()
            .flat_map(|s| s.targets.iter())
            .filter(|p| {
                self.registry
                    .get_path(p)
                    .is_none_or(|slot| slot.attached().is_empty())
            })
            .collect()
    }

    /// Whether the completion signal has fired.
    pub fn completion_fired(&self) -> bool {
        self.latch.is_fired()
    }

    /// Whether the entrance has been issued.
    pub fn is_dispatched(&self) -> bool {
        self.phase == StagePhase::Dispatched
    }

    /// Whether the stage has been torn down.
    pub fn is_torn_down(&self) -> bool {
        self.phase == StagePhase::TornDown
    }

    /// Issue the entrance effect. Call once, after every primitive the steps address has
    /// attached.
    ///
    /// Steps whose targets resolve to no attached handle are skipped without affecting the
    /// others. A torn-down stage issues nothing. A second call is rejected.
    #[tracing::instrument(skip(self, engine), fields(stage = %self.label))]
    pub fn on_all_handles_attached<E>(&mut self, engine: &mut E) -> RevealResult<DispatchReport>
    where
        E: TweenEngine<H> + ?Sized,
    {
        match self.phase {
            StagePhase::TornDown => {
                tracing::debug!("stage torn down, entrance not issued");
                return Ok(DispatchReport::default());
            }
            StagePhase::Dispatched => {
                return Err(RevealError::stage(format!(
                    "stage '{}' already dispatched its entrance",
                    self.label
                )));
            }
            StagePhase::Attaching => {}
        }

        let mut report = DispatchReport::default();
        for (idx, step) in self.steps.iter().enumerate() {
            let Some(targets) = resolve_targets(&self.registry, &step.targets) else {
                tracing::debug!(step = idx, "no attached handle, step skipped");
                report.skipped.push(idx);
                continue;
            };
            let probe = step
                .directive
                .completion_threshold
                .map(|threshold| ProgressProbe::new(threshold, Rc::clone(&self.latch)));
            engine.animate_from(targets, Tween::from_directive(&step.directive, probe));
            report.issued += 1;
        }
        self.phase = StagePhase::Dispatched;
        tracing::debug!(
            issued = report.issued,
            skipped = report.skipped.len(),
            "entrance dispatched"
        );
        Ok(report)
    }

    /// Release the stage: close the completion signal and the registry. Idempotent.
    pub fn teardown(&mut self) {
        if self.phase == StagePhase::TornDown {
            return;
        }
        self.latch.close();
        self.registry.close();
        self.phase = StagePhase::TornDown;
        tracing::trace!(stage = %self.label, "stage torn down");
    }
}

fn resolve_targets<H: Clone>(
    registry: &HandleRegistry<H>,
    paths: &[HandlePath],
) -> Option<Targets<H>> {
    if let [path] = paths
        && let Some(Slot::Handle(handle)) = registry.get_path(path)
    {
        return handle.clone().map(Targets::One);
    }
    let handles: Vec<H> = paths
        .iter()
        .filter_map(|p| registry.get_path(p))
        .flat_map(|slot| slot.attached())
        .cloned()
        .collect();
    if handles.is_empty() {
        None
    } else {
        Some(Targets::Many(handles))
    }
}

/// Fluent constructor for [`Stage`].
#[derive(Debug)]
pub struct StageBuilder<H> {
    label: String,
    registry: HandleRegistry<H>,
    emitter: Option<CompletionSender>,
    steps: Vec<Step>,
}

impl<H: Clone> StageBuilder<H> {
    /// Builder with a fresh registry and no steps.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            registry: HandleRegistry::new(),
            emitter: None,
            steps: Vec::new(),
        }
    }

    /// Use `registry` instead of a fresh one.
    pub fn registry(mut self, registry: HandleRegistry<H>) -> Self {
        self.registry = registry;
        self
    }

    /// Forward the completion signal to `emitter`.
    pub fn emitter(mut self, emitter: CompletionSender) -> Self {
        self.emitter = Some(emitter);
        self
    }

    /// Append one step.
    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Append several steps.
    pub fn steps(mut self, steps: impl IntoIterator<Item = Step>) -> Self {
        self.steps.extend(steps);
        self
    }

    /// Append the steps `table` assigns to `variant`.
    pub fn variant(
        self,
        table: &(impl DispatchTable + ?Sized),
        variant: usize,
    ) -> RevealResult<Self> {
        let steps = table.steps(variant).ok_or_else(|| {
            RevealError::validation(format!(
                "variant {variant} is outside the dispatch table (0..{})",
                table.len()
            ))
        })?;
        Ok(self.steps(steps))
    }

    /// Validate every directive and build the stage.
    pub fn build(self) -> RevealResult<Stage<H>> {
        if self.registry.is_closed() {
            return Err(RevealError::stage("cannot build a stage on a closed registry"));
        }
        for step in &self.steps {
            step.directive.validate()?;
        }
        Ok(Stage {
            label: self.label,
            registry: self.registry,
            steps: self.steps,
            latch: Rc::new(CompletionLatch::new(self.emitter)),
            phase: StagePhase::Attaching,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/entrance.rs"]
mod tests;
