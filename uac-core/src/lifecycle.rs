// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! A small reusable lifecycle state machine shared by every long-lived communication
//! object in this crate family (secure channels, transports, sessions): `Created ->
//! Opening -> Opened -> Closing -> Closed`, with `Faulted` reachable from `Opening` or
//! `Opened` once an unrecoverable error occurs. `close()` and `abort()` are both safe
//! to call any number of times from any state.

use crate::sync::Mutex;

/// A state in a [`CommunicationState`] machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommunicationObjectState {
    /// Constructed, but `open()` has not yet been called.
    Created,
    /// An open sequence (handshake, `CreateSession`, ...) is in flight.
    Opening,
    /// Open and usable.
    Opened,
    /// A close sequence is in flight.
    Closing,
    /// Closed. Terminal: an object never leaves `Closed` once it arrives.
    Closed,
    /// An unrecoverable error occurred while opening or while open. Terminal, like
    /// `Closed`, but distinguishes a deliberate close from a failure.
    Faulted,
}

type Listener = Box<dyn Fn(CommunicationObjectState, CommunicationObjectState) + Send + Sync>;

/// Drives a [`CommunicationObjectState`] machine and notifies registered listeners of
/// every transition. Transports and sessions each own one instead of tracking their
/// own ad hoc open/closed flags.
pub struct CommunicationState {
    state: Mutex<CommunicationObjectState>,
    listeners: Mutex<Vec<Listener>>,
}

impl std::fmt::Debug for CommunicationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommunicationState")
            .field("state", &*self.state.lock())
            .finish()
    }
}

impl Default for CommunicationState {
    fn default() -> Self {
        Self::new()
    }
}

impl CommunicationState {
    /// A new state machine in [`CommunicationObjectState::Created`].
    pub fn new() -> Self {
        Self {
            state: Mutex::new(CommunicationObjectState::Created),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// The current state.
    pub fn get(&self) -> CommunicationObjectState {
        *self.state.lock()
    }

    /// Registers a callback invoked with `(before, after)` on every transition. Also
    /// fires for the no-op transitions `close`/`abort` perform once already closed, so
    /// a listener can treat every call uniformly as "this is where it ended up".
    pub fn on_transition(
        &self,
        listener: impl Fn(CommunicationObjectState, CommunicationObjectState) + Send + Sync + 'static,
    ) {
        self.listeners.lock().push(Box::new(listener));
    }

    fn notify(&self, before: CommunicationObjectState, after: CommunicationObjectState) {
        if before != after {
            for listener in self.listeners.lock().iter() {
                listener(before, after);
            }
        }
    }

    /// Moves `Created` -> `Opening`. A no-op once past `Created` (a reconnecting
    /// transport or session calls this again; only the first call is meaningful).
    pub fn open(&self) {
        let before = {
            let mut state = self.state.lock();
            let before = *state;
            if before == CommunicationObjectState::Created {
                *state = CommunicationObjectState::Opening;
            }
            before
        };
        self.notify(before, self.get());
    }

    /// Moves `Opening` -> `Opened`. A no-op if not currently `Opening` (e.g. `abort`
    /// raced ahead of the open sequence completing, or this is a no-op re-entry after
    /// the first successful open).
    pub fn opened(&self) {
        let before = {
            let mut state = self.state.lock();
            let before = *state;
            if before == CommunicationObjectState::Opening {
                *state = CommunicationObjectState::Opened;
            }
            before
        };
        self.notify(before, self.get());
    }

    /// Begins an orderly shutdown: `Opening`/`Opened` -> `Closing`. Idempotent —
    /// calling this while already `Closing`, or after reaching `Closed`/`Faulted`, has
    /// no effect and just returns the current state.
    pub fn close(&self) -> CommunicationObjectState {
        let before = {
            let mut state = self.state.lock();
            let before = *state;
            if matches!(
                before,
                CommunicationObjectState::Opening | CommunicationObjectState::Opened
            ) {
                *state = CommunicationObjectState::Closing;
            }
            before
        };
        let after = self.get();
        self.notify(before, after);
        after
    }

    /// Finishes an orderly shutdown: `Closing` -> `Closed`. A no-op if `close()` was
    /// never called (e.g. `abort()` already forced the object to `Closed`).
    pub fn closed(&self) {
        let before = {
            let mut state = self.state.lock();
            let before = *state;
            if before == CommunicationObjectState::Closing {
                *state = CommunicationObjectState::Closed;
            }
            before
        };
        self.notify(before, self.get());
    }

    /// Unconditionally forces the object to `Closed`, regardless of which state it was
    /// in — including mid-`Opening`, per the contract that aborting never leaves an
    /// object `Opened`. Always succeeds and is safe to call repeatedly.
    pub fn abort(&self) {
        let before = {
            let mut state = self.state.lock();
            let before = *state;
            *state = CommunicationObjectState::Closed;
            before
        };
        self.notify(before, CommunicationObjectState::Closed);
    }

    /// Marks the object `Faulted` after an unrecoverable error. A no-op once the
    /// object has already reached `Closed` or `Faulted` — a fault never reopens or
    /// reclassifies an object that already finished its lifecycle.
    pub fn fault(&self) {
        let before = {
            let mut state = self.state.lock();
            let before = *state;
            if !matches!(
                before,
                CommunicationObjectState::Closed | CommunicationObjectState::Faulted
            ) {
                *state = CommunicationObjectState::Faulted;
            }
            before
        };
        self.notify(before, self.get());
    }

    /// `true` once the object has reached `Closed` or `Faulted`, states it never
    /// leaves.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.get(),
            CommunicationObjectState::Closed | CommunicationObjectState::Faulted
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_then_abort_never_reaches_opened() {
        let lifecycle = CommunicationState::new();
        lifecycle.open();
        assert_eq!(lifecycle.get(), CommunicationObjectState::Opening);
        lifecycle.abort();
        assert_eq!(lifecycle.get(), CommunicationObjectState::Closed);
        lifecycle.opened();
        assert_eq!(lifecycle.get(), CommunicationObjectState::Closed);
    }

    #[test]
    fn close_is_idempotent() {
        let lifecycle = CommunicationState::new();
        lifecycle.open();
        lifecycle.opened();
        assert_eq!(lifecycle.close(), CommunicationObjectState::Closing);
        lifecycle.closed();
        assert_eq!(lifecycle.get(), CommunicationObjectState::Closed);
        assert_eq!(lifecycle.close(), CommunicationObjectState::Closed);
        assert_eq!(lifecycle.get(), CommunicationObjectState::Closed);
    }

    #[test]
    fn fault_does_not_reopen_a_closed_object() {
        let lifecycle = CommunicationState::new();
        lifecycle.open();
        lifecycle.opened();
        lifecycle.abort();
        lifecycle.fault();
        assert_eq!(lifecycle.get(), CommunicationObjectState::Closed);
    }

    #[test]
    fn transition_listener_observes_every_move() {
        let lifecycle = CommunicationState::new();
        let seen = std::sync::Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        lifecycle.on_transition(move |before, after| {
            seen_clone.lock().push((before, after));
        });
        lifecycle.open();
        lifecycle.opened();
        lifecycle.close();
        lifecycle.closed();

        let seen = seen.lock();
        assert_eq!(
            *seen,
            vec![
                (
                    CommunicationObjectState::Created,
                    CommunicationObjectState::Opening
                ),
                (
                    CommunicationObjectState::Opening,
                    CommunicationObjectState::Opened
                ),
                (
                    CommunicationObjectState::Opened,
                    CommunicationObjectState::Closing
                ),
                (
                    CommunicationObjectState::Closing,
                    CommunicationObjectState::Closed
                ),
            ]
        );
    }
}
