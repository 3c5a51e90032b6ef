//! One-shot completion signalling from a stage to its downstream observer.
//!
//! Everything here is single-threaded (`Rc`/`Cell`): stages, probes and the cascade all live on
//! the host's event loop.

use std::{cell::Cell, rc::Rc};

#[derive(Debug, Default)]
struct Channel {
    sent: Cell<bool>,
    delivered: Cell<bool>,
}

/// Create a one-shot completion channel.
///
/// The sender may be triggered any number of times but only the first call is recorded; the
/// receiver observes that event at most once.
pub fn completion_channel() -> (CompletionSender, CompletionReceiver) {
    let channel = Rc::new(Channel::default());
    (
        CompletionSender {
            channel: Rc::clone(&channel),
        },
        CompletionReceiver { channel },
    )
}

/// Emitting half of a completion channel.
#[derive(Clone, Debug)]
pub struct CompletionSender {
    channel: Rc<Channel>,
}

impl CompletionSender {
    /// Record the event. Returns `true` only for the first call.
    pub fn send(&self) -> bool {
        !self.channel.sent.replace(true)
    }

    /// Whether the event has been recorded.
    pub fn is_sent(&self) -> bool {
        self.channel.sent.get()
    }
}

/// Observing half of a completion channel.
#[derive(Debug)]
pub struct CompletionReceiver {
    channel: Rc<Channel>,
}

impl CompletionReceiver {
    /// Take the event if it has been sent and not yet taken.
    pub fn try_recv(&self) -> bool {
        if self.channel.sent.get() && !self.channel.delivered.get() {
            self.channel.delivered.set(true);
            return true;
        }
        false
    }

    /// Whether the event has been sent, regardless of delivery.
    pub fn is_sent(&self) -> bool {
        self.channel.sent.get()
    }
}

/// Write-once completion flag owned by one stage instance.
///
/// Tripping it sets the flag and forwards to the optional emitter exactly once. After
/// [`CompletionLatch::close`] nothing can trip it.
#[derive(Debug, Default)]
pub(crate) struct CompletionLatch {
    fired: Cell<bool>,
    closed: Cell<bool>,
    emitter: Option<CompletionSender>,
}

impl CompletionLatch {
    pub(crate) fn new(emitter: Option<CompletionSender>) -> Self {
        Self {
            fired: Cell::new(false),
            closed: Cell::new(false),
            emitter,
        }
    }

    pub(crate) fn trip(&self) -> bool {
        if self.closed.get() || self.fired.get() {
            return false;
        }
        self.fired.set(true);
        if let Some(emitter) = &self.emitter {
            emitter.send();
        }
        true
    }

    pub(crate) fn close(&self) {
        self.closed.set(true);
    }

    pub(crate) fn is_fired(&self) -> bool {
        self.fired.get()
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.closed.get()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/signal.rs"]
mod tests;
