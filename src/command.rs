//! Inputs and commands used throughout wspick.
//!
//! This module defines the vocabulary that all components share:
//! [`Input`] describes every raw event the picker can receive (keys, clicks,
//! hover, rename edits), and [`Command`] is what an input resolves to once
//! modifiers have been interpreted.
//!
//! Inputs are serde-deserializable so a headless frontend can stream them as
//! JSON (see [`source`](crate::source)).

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// The fixed set of keys the picker reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Key {
    Enter,
    Delete,
    Escape,
    ArrowUp,
    ArrowDown,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Enter => write!(f, "enter"),
            Key::Delete => write!(f, "delete"),
            Key::Escape => write!(f, "escape"),
            Key::ArrowUp => write!(f, "up"),
            Key::ArrowDown => write!(f, "down"),
        }
    }
}

/// Parse a key name (case-insensitive; accepts "enter", "ArrowUp", "esc", etc.).
fn parse_key(s: &str) -> Option<Key> {
    let normalized: String = s
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(|c| c.to_lowercase())
        .collect();
    match normalized.as_str() {
        "enter" | "return" => Some(Key::Enter),
        "delete" | "del" => Some(Key::Delete),
        "escape" | "esc" => Some(Key::Escape),
        "arrowup" | "up" => Some(Key::ArrowUp),
        "arrowdown" | "down" => Some(Key::ArrowDown),
        _ => None,
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_key(&s).ok_or_else(|| DeError::custom(format!("invalid key: {:?}", s)))
    }
}

/// Modifier keys held while a key was pressed or an entry was clicked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub alt: bool,
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        alt: false,
        ctrl: false,
    };

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Self::NONE
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    /// Resolve Shift/Alt into one of the three choose modes.
    ///
    /// The set is closed: Shift together with Alt is *not* a fourth mode, it
    /// falls back to [`ChooseMode::Plain`].  Ctrl is not considered here.
    pub fn choose_mode(self) -> ChooseMode {
        match (self.shift, self.alt) {
            (true, false) => ChooseMode::SaveAs,
            (false, true) => ChooseMode::SaveAndLoad,
            _ => ChooseMode::Plain,
        }
    }
}

/// How a chosen entry is acted upon, derived from Shift/Alt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChooseMode {
    /// Neither modifier (or both): switch to the entry.
    Plain,
    /// Shift only: save under the entry's name and make it active.
    SaveAs,
    /// Alt only: save the active workspace, then load the entry.
    SaveAndLoad,
}

/// Every raw event the picker can receive.
///
/// On the wire each variant is externally tagged, e.g.
/// `{"Key":{"key":"Enter","mods":{"shift":true}}}` or `"Blur"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    /// The filter text changed to the given value.
    Filter(String),

    /// A key was pressed in the picker.
    ///
    /// `composing` is set while an IME composition is in progress; such keys
    /// belong to the input method and are ignored.
    Key {
        key: Key,
        #[serde(default)]
        mods: Modifiers,
        #[serde(default)]
        composing: bool,
    },

    /// A (non-editable) entry at the given displayed index was clicked.
    Click {
        index: usize,
        #[serde(default)]
        mods: Modifiers,
    },

    /// The rename icon of the entry at the given index was clicked.
    ClickRename(usize),

    /// The delete icon of the entry at the given index was clicked.
    ClickDelete(usize),

    /// The pointer moved over the entry at the given index.
    Hover(usize),

    /// The text of the entry being renamed was edited.
    RenameText(String),

    /// The entry being renamed lost focus.
    Blur,

    /// Close the picker from outside (e.g. the host dismissed it).
    Close,
}

impl Input {
    /// Shorthand for a key press without IME composition.
    pub fn key(key: Key, mods: Modifiers) -> Self {
        Input::Key {
            key,
            mods,
            composing: false,
        }
    }
}

/// What an [`Input`] means once the picker state and modifiers are taken into
/// account.
///
/// Commands are produced and consumed inside the
/// [`PickerState`](crate::picker::PickerState) transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Choose the entry at the index, acted on according to the mode.
    Choose { index: Option<usize>, mode: ChooseMode },
    /// Start renaming the entry at the index.
    BeginRename(usize),
    /// Commit the rename session in progress.
    CommitRename,
    /// Revert the rename session in progress.
    RevertRename,
    /// Run the delete flow on the entry at the index.
    Delete(usize),
    /// Move the cursor by the given offset.
    Move(isize),
    /// Close the picker.
    Close,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Choose { index, mode } => write!(f, "choose {:?} ({:?})", index, mode),
            Command::BeginRename(i) => write!(f, "begin rename #{}", i),
            Command::CommitRename => write!(f, "commit rename"),
            Command::RevertRename => write!(f, "revert rename"),
            Command::Delete(i) => write!(f, "delete #{}", i),
            Command::Move(d) => write!(f, "move {:+}", d),
            Command::Close => write!(f, "close"),
        }
    }
}
