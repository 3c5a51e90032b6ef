use crate::{
    foundation::core::Millis,
    gate::timers::{TimerId, Timers},
};

/// Lifecycle of a [`MountGate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum GateState {
    /// Constructed, timer not scheduled yet.
    Idle,
    /// Timer scheduled.
    Armed {
        /// Pending timer.
        #[serde(skip)]
        timer: TimerId,
        /// Instant the gate was armed.
        armed_at: Millis,
    },
    /// The delay elapsed; terminal.
    Ready {
        /// Instant the transition happened.
        at: Millis,
    },
    /// Torn down before (or after) becoming ready; terminal.
    TornDown,
}

/// One-shot delayed boolean unlock.
///
/// `ready` flips from `false` to `true` at most once, no earlier than `delay_ms` after arming.
/// Tearing the gate down cancels its pending timer; a late expiry delivered after teardown is
/// ignored.
#[derive(Clone, Debug)]
pub struct MountGate {
    delay_ms: u64,
    state: GateState,
}

impl MountGate {
    /// Gate that opens `delay_ms` after it is armed.
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            state: GateState::Idle,
        }
    }

    /// Configured delay.
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Current lifecycle state.
    pub fn state(&self) -> GateState {
        self.state
    }

    /// Whether the delay has elapsed.
    pub fn is_ready(&self) -> bool {
        matches!(self.state, GateState::Ready { .. })
    }

    /// Whether a timer is pending.
    pub fn is_armed(&self) -> bool {
        matches!(self.state, GateState::Armed { .. })
    }

    /// Whether the gate has been torn down.
    pub fn is_torn_down(&self) -> bool {
        matches!(self.state, GateState::TornDown)
    }

    /// Instant the gate became ready.
    pub fn ready_at(&self) -> Option<Millis> {
        match self.state {
            GateState::Ready { at } => Some(at),
            _ => None,
        }
    }

    /// Schedule the one-shot timer carrying `token`. Only an idle gate can be armed; returns
    /// whether a timer was scheduled.
    pub fn arm<Q>(&mut self, timers: &mut Q, token: Q::Token) -> bool
    where
        Q: Timers + ?Sized,
    {
        if self.state != GateState::Idle {
            return false;
        }
        let armed_at = timers.now();
        let timer = timers.schedule(self.delay_ms, token);
        tracing::trace!(delay_ms = self.delay_ms, %armed_at, "gate armed");
        self.state = GateState::Armed { timer, armed_at };
        true
    }

    /// Deliver an expired timer. Returns `true` exactly once, when this expiry opens the gate;
    /// the caller then re-evaluates whatever the gate guards.
    pub fn on_timer(&mut self, id: TimerId, now: Millis) -> bool {
        match self.state {
            GateState::Armed { timer, armed_at } if timer == id => {
                if now.since(armed_at) < self.delay_ms {
                    tracing::warn!(
                        %now,
                        %armed_at,
                        delay_ms = self.delay_ms,
                        "early gate expiry ignored"
                    );
                    return false;
                }
                self.state = GateState::Ready { at: now };
                tracing::debug!(delay_ms = self.delay_ms, %now, "gate ready");
                true
            }
            GateState::TornDown => {
                tracing::trace!(?id, "gate expiry after teardown ignored");
                false
            }
            _ => false,
        }
    }

    /// Cancel any pending timer and make the gate terminal. Safe to call any number of times.
    pub fn teardown<Q>(&mut self, timers: &mut Q)
    where
        Q: Timers + ?Sized,
    {
        if let GateState::Armed { timer, .. } = self.state {
            timers.cancel(timer);
        }
        self.state = GateState::TornDown;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gate/mount_gate.rs"]
mod tests;
