//! # Edit Session State Machine
//!
//! Per edit session: `Idle -> Loading -> {Ready, LoadFailed}` and
//! `Ready -> Saving -> {Idle, back to Ready on failure}`. A second save
//! attempt while one is in flight is rejected as a surfaced no-op, so
//! submissions are never re-entrant.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Idle,
    Loading,
    Ready,
    LoadFailed,
    Saving,
}

#[derive(Debug)]
pub struct EditSession {
    state: EditState,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditSession {
    pub fn new() -> Self {
        Self { state: EditState::Idle }
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    /// Starts a load from `Idle` or after a failed load. Returns false if a
    /// load or save is already in progress.
    pub fn try_begin_load(&mut self) -> bool {
        match self.state {
            EditState::Idle | EditState::LoadFailed => {
                self.state = EditState::Loading;
                true
            }
            _ => false,
        }
    }

    pub fn load_succeeded(&mut self) {
        if self.state == EditState::Loading {
            self.state = EditState::Ready;
        }
    }

    /// The UI shows the last-known-good snapshot; the session can retry.
    pub fn load_failed(&mut self) {
        if self.state == EditState::Loading {
            self.state = EditState::LoadFailed;
        }
    }

    /// Starts a save. Returns false — and changes nothing — unless the session
    /// is `Ready`; in particular a save already in flight rejects the attempt.
    pub fn try_begin_save(&mut self) -> bool {
        if self.state == EditState::Ready {
            self.state = EditState::Saving;
            true
        } else {
            false
        }
    }

    /// Successful save ends the session (the UI navigates away).
    pub fn save_succeeded(&mut self) {
        if self.state == EditState::Saving {
            self.state = EditState::Idle;
        }
    }

    /// Failed save returns to `Ready`: in-progress input stays editable.
    pub fn save_failed(&mut self) {
        if self.state == EditState::Saving {
            self.state = EditState::Ready;
        }
    }
}
