//! **wspick**: a fuzzy workspace-layout picker.
//!
//! A host application keeps named workspace layouts.  wspick shows them in a
//! searchable list and turns key presses and clicks into switch, save,
//! rename and delete requests against the host.
//!
//! # Architecture
//!
//! The crate is organised around two core traits:
//!
//! * [`traits::WorkspaceStore`]: the host's store of layouts and its
//!   active-workspace pointer.  The picker owns none of that data.
//! * [`traits::InputSource`]: the transport that delivers user requests, so
//!   the binary is not coupled to any specific frontend.
//!
//! [`picker::PickerState`] is the pure selection and edit state machine.
//! [`switcher::WorkspaceSwitcher`] drives it and carries out its effects,
//! asking through a [`dialog::ConfirmDialog`] before deletes.  An in-memory
//! store lives in [`memory`], and a JSON-line input source in [`source`].

pub mod command;
pub mod config;
pub mod dialog;
pub mod filter;
pub mod memory;
pub mod picker;
pub mod scope;
pub mod source;
pub mod switcher;
pub mod traits;
