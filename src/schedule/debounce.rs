//! Time-coalescing scheduler
//!
//! A [`Debouncer`] holds at most one deferred action. Scheduling again
//! before the deadline replaces the pending action and restarts the delay,
//! so a burst of triggers yields exactly one action, the last one, `delay`
//! after the last trigger.
//!
//! The debouncer never reads a clock or spawns a timer itself: the owner
//! passes `now` in and drives it with [`Debouncer::poll`]. That keeps it
//! usable from a browser `setTimeout` callback and from tests with a
//! virtual clock alike.

#[derive(Debug, Clone, PartialEq)]
struct Pending<A> {
    deadline: f64,
    action: A,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Debouncer<A> {
    pending: Option<Pending<A>>,
}

impl<A> Default for Debouncer<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Debouncer<A> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Arm the debouncer, superseding any pending action
    ///
    /// Returns `true` if a pending action was discarded.
    pub fn schedule(&mut self, action: A, delay_ms: u32, now: f64) -> bool {
        let superseded = self
            .pending
            .replace(Pending {
                deadline: now + f64::from(delay_ms),
                action,
            })
            .is_some();
        if superseded {
            log::trace!("debounce: superseded pending action");
        }
        superseded
    }

    /// Drop the pending action, if any
    ///
    /// A cancelled action can never be returned by a later `poll`.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Take the pending action if its deadline has passed
    pub fn poll(&mut self, now: f64) -> Option<A> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| now >= pending.deadline);
        if !due {
            return None;
        }
        self.pending.take().map(|pending| pending.action)
    }

    /// When the pending action becomes due
    pub fn deadline(&self) -> Option<f64> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
