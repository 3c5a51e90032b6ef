use super::*;
use crate::gate::timers::TimerQueue;

fn drive(gate: &mut MountGate, q: &mut TimerQueue<()>, until: Millis) -> usize {
    let mut transitions = 0;
    for (id, ()) in q.advance_to(until) {
        if gate.on_timer(id, q.now()) {
            transitions += 1;
        }
    }
    transitions
}

#[test]
fn ready_exactly_at_delay_and_never_before() {
    for delay in [0u64, 1, 200, 860, 1_000] {
        let t0 = Millis(40);
        let mut q = TimerQueue::starting_at(t0);
        let mut gate = MountGate::new(delay);
        assert!(gate.arm(&mut q, ()));
        let mut transitions = 0;
        for t in (t0.0..t0.0 + delay + 50).map(Millis) {
            transitions += drive(&mut gate, &mut q, t);
            assert_eq!(gate.is_ready(), t.0 >= t0.0 + delay, "delay {delay} at {t}");
        }
        assert_eq!(transitions, 1);
        assert_eq!(gate.ready_at(), Some(t0.after(delay)));
    }
}

#[test]
fn arming_twice_schedules_once() {
    let mut q = TimerQueue::new();
    let mut gate = MountGate::new(10);
    assert!(gate.arm(&mut q, ()));
    assert!(!gate.arm(&mut q, ()));
    assert_eq!(q.len(), 1);
}

#[test]
fn teardown_before_expiry_cancels_timer() {
    let mut q = TimerQueue::new();
    let mut gate = MountGate::new(100);
    gate.arm(&mut q, ());
    gate.teardown(&mut q);
    assert!(q.is_empty());
    assert_eq!(drive(&mut gate, &mut q, Millis(1_000)), 0);
    assert!(!gate.is_ready());
    assert!(gate.is_torn_down());
}

#[test]
fn teardown_is_idempotent_and_safe_when_idle() {
    let mut q = TimerQueue::<()>::new();
    let mut gate = MountGate::new(5);
    gate.teardown(&mut q);
    gate.teardown(&mut q);
    assert!(gate.is_torn_down());
    assert!(!gate.arm(&mut q, ()));
}

#[test]
fn late_expiry_after_teardown_is_ignored() {
    let mut q = TimerQueue::new();
    let mut gate = MountGate::new(5);
    gate.arm(&mut q, ());
    let GateState::Armed { timer, .. } = gate.state() else {
        panic!("gate should be armed");
    };
    // Teardown against a different queue leaves the original timer pending.
    let mut other = TimerQueue::<()>::new();
    gate.teardown(&mut other);
    assert!(!gate.on_timer(timer, Millis(10)));
    assert!(!gate.is_ready());
}

#[test]
fn foreign_timer_ids_are_ignored() {
    let mut q = TimerQueue::new();
    let mut gate = MountGate::new(5);
    gate.arm(&mut q, ());
    assert!(!gate.on_timer(TimerId(999), Millis(10)));
    assert!(gate.is_armed());
}
