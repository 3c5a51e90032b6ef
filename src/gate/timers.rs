use std::collections::{BTreeMap, HashMap};

use crate::foundation::core::Millis;

/// Identifier of a scheduled one-shot timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

/// Host timer facility used to arm gates.
///
/// Expiry is delivered by the host back to whoever owns the timer; see [`TimerQueue`] for the
/// deterministic implementation driven by an explicit clock.
pub trait Timers {
    /// Payload delivered back to the owner on expiry.
    type Token;

    /// Current host time.
    fn now(&self) -> Millis;

    /// Schedule `token` to expire `delay_ms` after [`Timers::now`].
    fn schedule(&mut self, delay_ms: u64, token: Self::Token) -> TimerId;

    /// Cancel a pending timer. Returns whether it was still pending; cancelling twice or
    /// cancelling an expired timer is a no-op.
    fn cancel(&mut self, id: TimerId) -> bool;
}

/// Deterministic one-shot timer queue on a virtual clock.
///
/// Timers expire in due-time order; timers due at the same instant expire in scheduling order.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    now: Millis,
    next_id: u64,
    pending: BTreeMap<(Millis, TimerId), T>,
    due_by_id: HashMap<TimerId, Millis>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Empty queue with the clock at zero.
    pub fn new() -> Self {
        Self::starting_at(Millis::ZERO)
    }

    /// Empty queue with the clock at `now`.
    pub fn starting_at(now: Millis) -> Self {
        Self {
            now,
            next_id: 0,
            pending: BTreeMap::new(),
            due_by_id: HashMap::new(),
        }
    }

    /// Whether `id` is still waiting to expire.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.due_by_id.contains_key(&id)
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no timer is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Due time of the earliest pending timer.
    pub fn next_due(&self) -> Option<Millis> {
        self.pending.keys().next().map(|(due, _)| *due)
    }

    /// Pop the earliest timer due at or before `until`, moving the clock to its due time.
    ///
    /// Timers scheduled while draining are measured from that due time, so chains of gates keep
    /// their exact offsets.
    pub fn pop_due(&mut self, until: Millis) -> Option<(TimerId, T)> {
        let (&(due, id), _) = self.pending.iter().next()?;
        if due > until {
            return None;
        }
        let token = self.pending.remove(&(due, id))?;
        self.due_by_id.remove(&id);
        self.now = self.now.max(due);
        Some((id, token))
    }

    /// Move the clock forward to `until`. Never moves it backwards.
    pub fn settle(&mut self, until: Millis) {
        self.now = self.now.max(until);
    }

    /// Expire every timer due at or before `until` and move the clock there.
    pub fn advance_to(&mut self, until: Millis) -> Vec<(TimerId, T)> {
        let mut out = Vec::new();
        while let Some(expired) = self.pop_due(until) {
            out.push(expired);
        }
        self.settle(until);
        out
    }

    /// Drop every pending timer.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.due_by_id.clear();
    }
}

impl<T> Timers for TimerQueue<T> {
    type Token = T;

    fn now(&self) -> Millis {
        self.now
    }

    fn schedule(&mut self, delay_ms: u64, token: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let due = self.now.after(delay_ms);
        self.pending.insert((due, id), token);
        self.due_by_id.insert(id, due);
        id
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        match self.due_by_id.remove(&id) {
            Some(due) => self.pending.remove(&(due, id)).is_some(),
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gate/timers.rs"]
mod tests;
