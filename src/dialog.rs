//! A minimal yes/no confirmation dialog.
//!
//! The dialog shows a title, a body, a Cancel control and a call-to-action
//! (CTA) control.  Cancel closes it with no side effect.  The CTA runs an
//! asynchronous accept handler and closes once the handler has succeeded.

use crate::scope::{ModalStack, ScopeGuard};
use futures::future::LocalBoxFuture;
use log::{debug, info};
use std::fmt;
use std::time::Duration;

/// Delay before the CTA takes focus after the dialog opens.
pub const FOCUS_DELAY: Duration = Duration::from_millis(50);

/// Handler run when the CTA is pressed.
///
/// It may be invoked again if a previous run failed and the user retries.
pub type AcceptHandler<E> = Box<dyn FnMut() -> LocalBoxFuture<'static, Result<(), E>>>;

/// The two controls the dialog shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogControl {
    Cancel,
    Cta,
}

/// A modal confirmation prompt.
///
/// # Typical usage
///
/// ```ignore
/// let mut dialog = ConfirmDialog::new("Delete Workspace", body, "Delete", handler);
/// dialog.open(&stack);
/// dialog.accept().await?;
/// ```
pub struct ConfirmDialog<E> {
    title: String,
    body: String,
    cta: String,
    on_accept: AcceptHandler<E>,
    scope: Option<ScopeGuard>,
}

impl<E> ConfirmDialog<E> {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        cta: impl Into<String>,
        on_accept: AcceptHandler<E>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            cta: cta.into(),
            on_accept,
            scope: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn cta(&self) -> &str {
        &self.cta
    }

    /// Show the dialog, taking the top input scope on `stack`.
    pub fn open(&mut self, stack: &ModalStack) {
        if self.scope.is_none() {
            self.scope = Some(stack.push("confirm"));
            debug!("confirm dialog opened: {}", self.title);
        }
    }

    pub fn is_open(&self) -> bool {
        self.scope.is_some()
    }

    /// The control that receives focus after opening, and how long after.
    pub fn initial_focus(&self) -> (DialogControl, Duration) {
        (DialogControl::Cta, FOCUS_DELAY)
    }

    /// Dismiss without running the accept handler.
    pub fn cancel(&mut self) {
        if self.scope.take().is_some() {
            info!("confirm dialog cancelled: {}", self.title);
        }
    }

    /// Run the accept handler and close once it has completed.
    ///
    /// A handler error is returned as-is and the dialog stays open.  Calling
    /// this on a dialog that was never opened, or is already closed, does
    /// nothing.
    pub async fn accept(&mut self) -> Result<(), E> {
        if !self.is_open() {
            return Ok(());
        }
        (self.on_accept)().await?;
        self.scope = None;
        info!("confirm dialog accepted: {}", self.title);
        Ok(())
    }
}

impl<E> fmt::Debug for ConfirmDialog<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmDialog")
            .field("title", &self.title)
            .field("body", &self.body)
            .field("cta", &self.cta)
            .field("open", &self.is_open())
            .finish()
    }
}
