//! Debouncer: delays a rapidly-changing value until it settles
//!
//! Each field gets its own instance; pushes to one never affect another.
//! Designed for use inside a `tokio::select!` loop: `settled` is
//! cancellation-safe because all state lives on `self`.

use std::future;
use std::pin::Pin;
use std::time::Duration;
use tokio::time::{Instant, Sleep, sleep_until};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

struct Pending<T> {
    value: T,
    deadline: Instant,
    sleep: Pin<Box<Sleep>>,
}

pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Replace any pending value and restart the wait. The previously
    /// pending value will never be emitted.
    pub fn push(&mut self, value: T) {
        let deadline = Instant::now() + self.delay;
        self.pending = Some(Pending {
            value,
            deadline,
            sleep: Box::pin(sleep_until(deadline)),
        });
    }

    /// Discard the pending value without emitting it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Resolves with the pending value once the delay has elapsed with no
    /// new push. Never resolves while nothing is pending.
    pub async fn settled(&mut self) -> T {
        match self.pending.as_mut() {
            Some(pending) => {
                pending.sleep.as_mut().await;
                // No await between the timer firing and the take.
                self.pending.take().map(|p| p.value).unwrap()
            }
            None => future::pending::<T>().await,
        }
    }

    /// Drain the pending value if its deadline has already passed. Lets
    /// the engine coalesce fields that settle in the same tick.
    pub fn try_settle(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref().is_some_and(|p| p.deadline <= now) {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }
}
