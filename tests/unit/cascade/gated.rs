use super::*;
use crate::{
    animation::{
        directive::Directive,
        tween::{Targets, Tween},
    },
    emblem::layout::{EmblemMetrics, Palette, element_layout},
    gate::timers::TimerQueue,
    registry::store::HandleRegistry,
    stage::entrance::Step,
};

#[derive(Default)]
struct Surface {
    next: u32,
    mounted: Vec<ElementKind>,
    unmounted: Vec<ElementKind>,
}

impl Renderer<u32> for Surface {
    fn mount(&mut self, layout: &ElementLayout, sink: &mut HandleRegistry<u32>) {
        for p in &layout.primitives {
            self.next += 1;
            sink.attach(&p.path, self.next);
        }
        self.mounted.push(layout.kind);
    }

    fn unmount(&mut self, kind: ElementKind) {
        self.unmounted.push(kind);
    }
}

#[derive(Default)]
struct Recorder {
    calls: Vec<(Targets<u32>, Tween)>,
}

impl TweenEngine<u32> for Recorder {
    fn animate_from(&mut self, targets: Targets<u32>, tween: Tween) {
        self.calls.push((targets, tween));
    }
}

fn center_square(delay_ms: u64) -> GatedStage<u32> {
    let layout = element_layout(
        ElementKind::CenterSquare,
        &EmblemMetrics::default(),
        &Palette::default(),
    );
    let stage = Stage::builder("center-square")
        .step(Step::new("path", Directive::new(0.5).from_opacity(0.0)).unwrap())
        .build()
        .unwrap();
    GatedStage::new(layout, delay_ms, stage)
}

#[test]
fn expiry_mounts_then_dispatches() {
    let mut timers = TimerQueue::new();
    let mut surface = Surface::default();
    let mut engine = Recorder::default();
    let mut gated = center_square(200);

    assert!(gated.arm(&mut timers, ()));
    assert!(timers.pop_due(Millis(199)).is_none());
    let (id, ()) = timers.pop_due(Millis(200)).unwrap();

    let report = gated
        .on_timer(id, Millis(200), &mut surface, &mut engine)
        .unwrap()
        .unwrap();
    assert_eq!(report.issued, 1);
    assert!(gated.is_mounted());
    assert_eq!(surface.mounted, vec![ElementKind::CenterSquare]);
    assert_eq!(engine.calls.len(), 1);
    assert_eq!(engine.calls[0].0, Targets::One(1));
    assert_eq!(gated.gate().ready_at(), Some(Millis(200)));
}

#[test]
fn stale_expiry_does_nothing() {
    let mut timers = TimerQueue::new();
    let mut surface = Surface::default();
    let mut engine = Recorder::default();
    let mut gated = center_square(50);
    gated.arm(&mut timers, ());
    let (id, ()) = timers.pop_due(Millis(50)).unwrap();
    gated
        .on_timer(id, Millis(50), &mut surface, &mut engine)
        .unwrap();

    let again = gated
        .on_timer(id, Millis(60), &mut surface, &mut engine)
        .unwrap();
    assert!(again.is_none());
    assert_eq!(surface.mounted.len(), 1);
    assert_eq!(engine.calls.len(), 1);
}

#[test]
fn teardown_before_expiry_leaves_no_trace() {
    let mut timers = TimerQueue::new();
    let mut surface = Surface::default();
    let mut gated = center_square(200);
    gated.arm(&mut timers, ());
    let revision = gated.stage().registry().revision();

    gated.teardown(&mut timers, &mut surface);
    assert!(timers.is_empty());
    assert!(gated.gate().is_torn_down());
    assert!(!gated.is_mounted());
    assert!(surface.mounted.is_empty());
    assert!(surface.unmounted.is_empty());
    assert_eq!(gated.stage().registry().revision(), revision);
    assert!(timers.advance_to(Millis(10_000)).is_empty());
}

#[test]
fn teardown_after_mount_unmounts_once() {
    let mut timers = TimerQueue::new();
    let mut surface = Surface::default();
    let mut engine = Recorder::default();
    let mut gated = center_square(0);
    gated.arm(&mut timers, ());
    let (id, ()) = timers.pop_due(Millis::ZERO).unwrap();
    gated
        .on_timer(id, Millis::ZERO, &mut surface, &mut engine)
        .unwrap();

    gated.teardown(&mut timers, &mut surface);
    gated.teardown(&mut timers, &mut surface);
    assert_eq!(surface.unmounted, vec![ElementKind::CenterSquare]);
    assert!(gated.stage().is_torn_down());
    assert!(!gated.is_mounted());
}
