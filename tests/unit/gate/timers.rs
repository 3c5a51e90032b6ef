use super::*;

#[test]
fn expires_in_due_order_then_schedule_order() {
    let mut q = TimerQueue::new();
    q.schedule(300, "c");
    q.schedule(100, "a");
    q.schedule(100, "b");
    let fired: Vec<&str> = q.advance_to(Millis(300)).into_iter().map(|(_, t)| t).collect();
    assert_eq!(fired, vec!["a", "b", "c"]);
    assert_eq!(q.now(), Millis(300));
    assert!(q.is_empty());
}

#[test]
fn nothing_expires_before_due() {
    let mut q = TimerQueue::new();
    let id = q.schedule(250, ());
    assert!(q.advance_to(Millis(249)).is_empty());
    assert!(q.is_pending(id));
    assert_eq!(q.next_due(), Some(Millis(250)));
    assert_eq!(q.advance_to(Millis(250)).len(), 1);
}

#[test]
fn cancel_is_idempotent() {
    let mut q = TimerQueue::new();
    let id = q.schedule(10, ());
    assert!(q.cancel(id));
    assert!(!q.cancel(id));
    assert!(q.advance_to(Millis(100)).is_empty());
}

#[test]
fn cancel_after_expiry_is_noop() {
    let mut q = TimerQueue::new();
    let id = q.schedule(10, ());
    q.advance_to(Millis(10));
    assert!(!q.cancel(id));
}

#[test]
fn pop_due_moves_clock_to_due_time() {
    let mut q = TimerQueue::starting_at(Millis(1_000));
    q.schedule(200, 1);
    let (_, tok) = q.pop_due(Millis(5_000)).unwrap();
    assert_eq!(tok, 1);
    assert_eq!(q.now(), Millis(1_200));
    q.schedule(300, 2);
    assert_eq!(q.next_due(), Some(Millis(1_500)));
}

#[test]
fn clock_never_runs_backwards() {
    let mut q = TimerQueue::<()>::starting_at(Millis(50));
    q.settle(Millis(10));
    assert_eq!(q.now(), Millis(50));
}

#[test]
fn zero_delay_expires_at_current_instant() {
    let mut q = TimerQueue::starting_at(Millis(7));
    q.schedule(0, ());
    assert_eq!(q.advance_to(Millis(7)).len(), 1);
}
