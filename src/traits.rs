//! Core traits that decouple wspick from any specific host application or
//! transport mechanism.
//!
//! The host implements [`WorkspaceStore`]; a frontend (a terminal, a test
//! harness, …) implements [`InputSource`].  The
//! [`WorkspaceSwitcher`](crate::switcher::WorkspaceSwitcher) only depends on
//! these abstractions.

use crate::source::Request;
use std::sync::mpsc;

/// Abstraction over the host's workspace store.
///
/// The store owns every workspace layout and the active-workspace pointer.
/// The picker never caches what it reads from here across commands: it
/// re-reads after every mutation.
///
/// All methods take `&self` so the store can be shared as an `Rc` with the
/// confirmation dialog's accept handler.  Implementations that record or
/// mutate state use interior mutability.
pub trait WorkspaceStore {
    /// The error type produced by this store.
    type Error: std::error::Error + Send + 'static;

    /// Every workspace name.  Iteration order is unspecified; the picker
    /// sorts.
    fn workspace_names(&self) -> Result<Vec<String>, Self::Error>;

    /// Name of the active workspace.  It may be empty, or a name that no
    /// longer exists.
    fn active_workspace(&self) -> Result<String, Self::Error>;

    /// Save the current layout under `name`, replacing any existing entry.
    fn save(&self, name: &str) -> Result<(), Self::Error>;

    /// Remove the workspace `name`.
    fn delete(&self, name: &str) -> Result<(), Self::Error>;

    /// Apply the layout stored under `name`.
    fn load(&self, name: &str) -> Result<(), Self::Error>;

    /// Point the active-workspace pointer at `name`.
    fn set_active(&self, name: &str) -> Result<(), Self::Error>;

    /// Move the workspace `from` to the name `to`.
    ///
    /// The default removes `from` and saves the current layout as `to`.
    /// Stores that can move a stored layout without touching the current
    /// one should override this.
    fn rename(&self, from: &str, to: &str) -> Result<(), Self::Error> {
        self.delete(from)?;
        self.save(to)
    }
}

/// Notifications sent from the [`WorkspaceSwitcher`](crate::switcher::WorkspaceSwitcher)
/// over an [`mpsc`](std::sync::mpsc) channel.
///
/// Any listener (a status bar, a debug logger, the host's layout watcher)
/// can receive these without being owned by the switcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// The workspace layout changed.  Fired once when the picker closes and
    /// once after a rename is committed.
    LayoutChanged,

    /// A user-facing notice, e.g. after a successful save.
    Notice(String),

    /// The entry at this displayed index should be scrolled into view.
    Reveal(usize),
}

/// A source of [`Request`]s.
///
/// Implementations read some transport (stdin, a socket, an in-memory
/// buffer, …) and forward parsed requests into the provided
/// [`mpsc::Sender`].
///
/// # Contract
///
/// * [`run`](InputSource::run) **blocks** until the source is exhausted or
///   an unrecoverable error occurs.
/// * Each received request must be sent through `sink` exactly once.
/// * Implementations must be [`Send`] so they can run on a dedicated thread.
pub trait InputSource: Send {
    /// The error type produced by this source.
    type Error: std::error::Error + Send + 'static;

    /// Start reading and forward every incoming [`Request`] into `sink`.
    fn run(&mut self, sink: mpsc::Sender<Request>) -> Result<(), Self::Error>;
}
