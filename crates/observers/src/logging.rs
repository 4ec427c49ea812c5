use coil_core::Observer;
use log::{Level, log, log_enabled};

use crate::traits::{HasLocalError, HasPosition, HasStepSize};

/// An observer that forwards every event to the `log` facade.
///
/// Each event becomes one record at the configured level, so the output is
/// controlled entirely by the installed logger (for example `RUST_LOG` with
/// `env_logger`). The observer never requests an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    level: Level,
    events: usize,
}

impl LogObserver {
    /// Creates an observer that logs at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level, events: 0 }
    }

    /// Returns the number of events observed so far.
    #[must_use]
    pub fn events(&self) -> usize {
        self.events
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: HasPosition + HasStepSize + HasLocalError,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let index = self.events;
        self.events += 1;

        if !log_enabled!(self.level) {
            return None;
        }
        match event.step_size() {
            Some(h) => log!(
                self.level,
                "event {index}: x = {:.6e}, h = {h:.3e}, error = {:.3e}",
                event.x(),
                event.local_error()
            ),
            None => log!(self.level, "event {index}: start at x = {:.6e}", event.x()),
        }
        None
    }
}
