//! The seam between a logging framework and the hooks it drives.

use crate::{Level, LogEvent};

/// A hook a logging framework invokes synchronously for each event.
///
/// The framework consults [`Hook::levels`] (or [`Hook::accepts`]) first and
/// only calls [`Hook::fire`] for events at an accepted level. An error from
/// `fire` fails dispatch of that event.
pub trait Hook: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Levels this hook wants to see.
    fn levels(&self) -> Vec<Level>;

    /// Whether an event at `level` should be passed to [`Hook::fire`].
    fn accepts(&self, level: Level) -> bool {
        self.levels().contains(&level)
    }

    /// Process an event in place.
    fn fire(&self, event: &mut LogEvent) -> Result<(), Self::Error>;
}
