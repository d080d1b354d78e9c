use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use crate::state::ViewState;

/// Claim on the latest intent; pairs a [`StateCell::begin`] with its
/// [`StateCell::complete`].
#[derive(Debug)]
pub struct Ticket(u64);

/// Snapshot publisher for one screen.
///
/// Every remote intent follows the same protocol: `begin` publishes a
/// loading snapshot and claims a ticket, the caller awaits exactly one
/// asynchronous operation, and `complete` publishes the outcome. Tickets
/// are issued from a monotonic sequence and only the latest one may
/// publish, so overlapping intents resolve deterministically to the most
/// recently started call regardless of completion order.
///
/// A cell is exclusively owned by its screen's store; consumers observe it
/// through [`StateCell::subscribe`].
pub struct StateCell<T> {
    tx: watch::Sender<ViewState<T>>,
    seq: AtomicU64,
}

impl<T: Clone> StateCell<T> {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ViewState::Idle);
        Self {
            tx,
            seq: AtomicU64::new(0),
        }
    }

    /// A cell that starts out with data instead of `Idle`; used by screens
    /// whose empty state is still content (e.g. an empty shelf).
    pub fn loaded(initial: T) -> Self {
        let (tx, _rx) = watch::channel(ViewState::Loaded(initial));
        Self {
            tx,
            seq: AtomicU64::new(0),
        }
    }

    /// Observe snapshot publications. The receiver always sees the latest
    /// value; publications within one cell are totally ordered.
    pub fn subscribe(&self) -> watch::Receiver<ViewState<T>> {
        self.tx.subscribe()
    }

    /// Clone of the latest snapshot.
    pub fn snapshot(&self) -> ViewState<T> {
        self.tx.borrow().clone()
    }

    /// Step one of the intent protocol: publish `Loading` with the current
    /// payload carried over, and claim the latest ticket.
    pub fn begin(&self) -> Ticket {
        let token = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.tx.send_modify(|state| *state = state.to_loading());
        Ticket(token)
    }

    /// Step three: publish the intent's outcome.
    ///
    /// Returns `false` without publishing when a newer intent superseded
    /// this ticket or the cell was invalidated in the meantime. On failure
    /// the pre-intent payload is preserved next to the message.
    pub fn complete<E: Display>(&self, ticket: Ticket, outcome: Result<T, E>) -> bool {
        if ticket.0 != self.seq.load(Ordering::SeqCst) {
            tracing::debug!(ticket = ticket.0, "discarding stale intent completion");
            return false;
        }
        match outcome {
            Ok(data) => self.tx.send_modify(|state| *state = ViewState::Loaded(data)),
            Err(err) => {
                let message = err.to_string();
                self.tx.send_modify(|state| {
                    *state = ViewState::Failed {
                        message,
                        last: state.data().cloned(),
                    };
                });
            }
        }
        true
    }

    /// Publish a failure that needed no asynchronous work (e.g. local
    /// validation). Claims the latest ticket, superseding any in-flight
    /// intent.
    pub fn reject(&self, message: impl Into<String>) {
        self.seq.fetch_add(1, Ordering::SeqCst);
        let message = message.into();
        self.tx.send_modify(|state| {
            *state = ViewState::Failed {
                message,
                last: state.data().cloned(),
            };
        });
    }

    /// Apply a pure local transform to the loaded payload and republish.
    /// Returns whether a payload was there to transform; `Idle`, `Loading`
    /// and `Failed` snapshots are left untouched.
    pub fn mutate_loaded(&self, f: impl FnOnce(&mut T)) -> bool {
        let mut applied = false;
        self.tx.send_if_modified(|state| {
            if let ViewState::Loaded(data) = state {
                f(data);
                applied = true;
                true
            } else {
                false
            }
        });
        applied
    }

    /// Invalidate outstanding tickets without publishing, so completions of
    /// in-flight intents are discarded. Called on screen teardown.
    pub fn invalidate(&self) {
        self.seq.fetch_add(1, Ordering::SeqCst);
    }
}

impl<T: Clone> Default for StateCell<T> {
    fn default() -> Self {
        Self::new()
    }
}
