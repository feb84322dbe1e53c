//! Dual-mode routing between the remote API and the session store.

pub mod orchestrator;

pub use orchestrator::Orchestrator;

/// Operation target for the current session, fixed by the startup probe.
///
/// The only transition is `Remote` to `Local`, taken the instant a remote
/// create fails mid-session. There is no promotion back to `Remote` and no
/// periodic re-probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Remote,
    Local,
}

impl Mode {
    pub fn is_remote(self) -> bool {
        matches!(self, Mode::Remote)
    }
}
