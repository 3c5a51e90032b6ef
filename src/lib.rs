//! Emblem reveal is a choreography engine for staged entrance animations.
//!
//! It decides *when* each part of an emblem mounts and *which* "animate-from" requests are
//! issued once it has mounted. Drawing and tween interpolation belong to collaborators behind
//! the [`Renderer`] and [`TweenEngine`] traits.
//!
//! # Building blocks
//!
//! 1. **Register**: a mounting element attaches each primitive handle into a [`HandleRegistry`]
//!    under a dotted path (`"circles.3"`, `"leafs.0"`).
//! 2. **Gate**: a [`MountGate`] holds an element back for a fixed delay on a [`Timers`] facility.
//! 3. **Dispatch**: once every handle is attached, a [`Stage`] issues one tween per [`Step`],
//!    and may emit a write-once completion signal when a tween crosses its progress threshold.
//! 4. **Cascade**: the [`Cascade`] wires the outer ring behind one top-level gate and unlocks the
//!    inner tier when outer variant 0 reports completion.
//!
//! Everything is single-threaded and deterministic: time only moves when the host calls
//! [`Cascade::advance`], and the bundled [`TimerQueue`] is a virtual clock.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod cascade;
mod emblem;
mod foundation;
mod gate;
mod registry;
mod stage;

pub use animation::directive::{Directive, DrawRange, FromState};
pub use animation::ease::{DEFAULT_BACK_OVERSHOOT, Ease};
pub use animation::tween::{ProgressProbe, Targets, Tween, TweenEngine};
pub use cascade::config::{DOT_COUNT, InnerDelays, RevealConfig};
pub use cascade::gated::GatedStage;
pub use cascade::render::Renderer;
pub use cascade::reveal::{
    Cascade, CascadeBuilder, CascadePhase, GateKey, RevealEvent, RevealEventKind,
};
pub use emblem::choreography::{dot_schedule, element_steps};
pub use emblem::layout::{
    ElementKind, ElementLayout, EmblemMetrics, Paint, Palette, Primitive, Shape, Stroke,
    element_layout, wordmark_translate_y,
};
pub use foundation::core::{Affine, BezPath, Circle, Line, Millis, Point, Rgba8, Vec2};
pub use foundation::error::{RevealError, RevealResult};
pub use gate::mount_gate::{GateState, MountGate};
pub use gate::timers::{TimerId, TimerQueue, Timers};
pub use registry::path::{HandlePath, MAX_LIST_INDEX, PathSegment};
pub use registry::store::{HandleRegistry, Slot};
pub use stage::entrance::{DispatchReport, DispatchTable, Stage, StageBuilder, StagePhase, Step};
pub use stage::outer::{OUTER_TARGET, OuterMetrics, OuterTierTable};
pub use stage::signal::{CompletionReceiver, CompletionSender, completion_channel};
