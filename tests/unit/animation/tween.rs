use super::*;
use crate::stage::signal::completion_channel;

fn probe(threshold: f64) -> (ProgressProbe, crate::stage::signal::CompletionReceiver) {
    let (tx, rx) = completion_channel();
    let latch = Rc::new(CompletionLatch::new(Some(tx)));
    (ProgressProbe::new(threshold, latch), rx)
}

#[test]
fn fires_once_on_first_sample_at_threshold() {
    let (probe, rx) = probe(0.3);
    let fired: Vec<bool> = [0.1, 0.35, 0.5, 0.9]
        .into_iter()
        .map(|p| probe.report(p))
        .collect();
    assert_eq!(fired, vec![false, true, false, false]);
    assert!(rx.try_recv());
    assert!(!rx.try_recv());
}

#[test]
fn exact_threshold_counts_as_crossed() {
    let (probe, _rx) = probe(0.3);
    assert!(probe.report(0.3));
}

#[test]
fn completion_without_crossing_fires() {
    let (probe, rx) = probe(0.3);
    assert!(!probe.report(0.1));
    assert!(probe.complete());
    assert!(probe.is_finished());
    assert!(rx.is_sent());
}

#[test]
fn cancellation_leaves_signal_untripped() {
    let (probe, rx) = probe(0.3);
    probe.report(0.2);
    probe.cancel();
    assert!(!probe.report(0.9));
    assert!(!probe.complete());
    assert!(!rx.is_sent());
}

#[test]
fn clones_share_dedupe_state() {
    let (probe, _rx) = probe(0.5);
    let other = probe.clone();
    assert!(other.report(0.6));
    assert!(!probe.report(0.7));
}

#[test]
fn closed_latch_blocks_reports() {
    let (tx, rx) = completion_channel();
    let latch = Rc::new(CompletionLatch::new(Some(tx)));
    let probe = ProgressProbe::new(0.3, Rc::clone(&latch));
    latch.close();
    assert!(!probe.report(1.0));
    assert!(!rx.is_sent());
}

#[test]
fn targets_iterate_in_order() {
    assert_eq!(Targets::One(3).iter().copied().collect::<Vec<_>>(), vec![3]);
    let many = Targets::Many(vec![1, 2]);
    assert_eq!(many.len(), 2);
    assert!(!many.is_empty());
    assert!(Targets::<u8>::Many(Vec::new()).is_empty());
}

#[test]
fn threshold_compares_time_progress_not_the_curve() {
    let (tx, rx) = completion_channel();
    let latch = Rc::new(CompletionLatch::new(Some(tx)));
    let directive = Directive::new(0.5)
        .ease(Ease::BackOut { overshoot: 1.5 })
        .complete_at(0.3);
    let tween = Tween::from_directive(&directive, Some(ProgressProbe::new(0.3, latch)));
    assert_eq!(tween.ease.name(), "back.out(1.5)");

    let probe = tween.probe.clone().unwrap();
    assert!(!probe.report(0.29));
    assert!(!rx.is_sent());
    assert!(probe.report(0.3));
    assert!(rx.try_recv());
}
