//! The picker's selection and edit state machine.
//!
//! [`PickerState`] holds everything the picker shows: the sorted workspace
//! names, the filter text, the projected (displayed) subset, the cursor and
//! the current [`Mode`].  [`PickerState::step`] consumes one [`Input`],
//! updates the state and returns the [`Effect`]s the caller must carry out
//! against the host store.  The state itself never talks to the store.
//!
//! ```text
//!              Ctrl+Enter / rename icon
//!   Browsing ─────────────────────────────▶ Renaming
//!      ▲  │                                    │
//!      │  │ Esc, Enter, click         commit / revert
//!      │  ▼                                    │
//!      │ Closed                                │
//!      └───────────────────────────────────────┘
//! ```

use crate::command::{ChooseMode, Command, Input, Key, Modifiers};
use crate::config::PickerConfig;
use crate::filter::CandidateFilter;
use log::{debug, info, warn};

/// Shown in place of the list when no workspace matches the filter text.
pub const EMPTY_STATE_HINT: &str = "No workspace found. Press shift ↵ to save it as a new workspace.";

/// In-place edit of one entry's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameSession {
    /// Displayed index of the entry being edited.
    pub index: usize,
    /// Name before editing; restored on revert.
    pub original: String,
    /// Live edited text.
    pub text: String,
}

/// Where the picker is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    Renaming(RenameSession),
    Closed,
}

/// Which entry the cursor should land on after a refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reselect {
    /// The entry with this name, if it is displayed.
    Name(String),
    /// This displayed index, clamped into range.
    Index(usize),
}

/// Work the caller must perform after a transition, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Save(String),
    Delete(String),
    Load(String),
    SetActive(String),
    Rename { from: String, to: String },
    /// Show a user-facing notice.
    Notice(String),
    /// Ask the user before deleting `name` (displayed at `index`).
    ConfirmDelete { name: String, index: usize },
    /// Re-read the store and reposition the cursor.
    Refresh(Reselect),
    /// Scroll the entry at this index into view.
    Reveal(usize),
    LayoutChanged,
    Close,
}

/// Sort workspace names for display and drop duplicates.
pub fn sort_names(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names.dedup();
    names
}

/// Command hints shown under the list, as `(key, description)` pairs.
///
/// Empty when `show_instructions` is off.
pub fn instructions(config: &PickerConfig) -> Vec<(&'static str, &'static str)> {
    if !config.show_instructions {
        return Vec::new();
    }
    vec![
        ("↑↓", "navigate"),
        ("↵", if config.save_on_change { "save and switch" } else { "switch" }),
        ("shift ↵", "save workspace"),
        ("alt ↵", "save current and load"),
        ("ctrl ↵", "rename workspace"),
        ("shift del", "delete workspace"),
        ("esc", "dismiss"),
    ]
}

/// State of one open picker.
#[derive(Debug, Clone)]
pub struct PickerState {
    names: Vec<String>,
    active: String,
    query: String,
    /// Indices into `names`, in display order.
    displayed: Vec<usize>,
    cursor: Option<usize>,
    mode: Mode,
}

impl Default for PickerState {
    /// An empty picker that has not been opened (or has been closed).
    fn default() -> Self {
        Self {
            names: Vec::new(),
            active: String::new(),
            query: String::new(),
            displayed: Vec::new(),
            cursor: None,
            mode: Mode::Closed,
        }
    }
}

impl PickerState {
    /// Build the state for a freshly opened picker.
    ///
    /// The cursor starts on `active` when it is listed, otherwise on the
    /// first entry.
    pub fn open(
        names: Vec<String>,
        active: String,
        filter: &mut dyn CandidateFilter,
    ) -> (Self, Vec<Effect>) {
        let mut state = Self {
            names: sort_names(names),
            active,
            query: String::new(),
            displayed: Vec::new(),
            cursor: None,
            mode: Mode::Browsing,
        };
        state.reproject(filter);
        let start = state.position_of(&state.active).unwrap_or(0);
        state.cursor = state.clamp(start);
        info!(
            "picker opened with {} workspace(s), active {:?}",
            state.names.len(),
            state.active
        );
        let effects = state.cursor.map(Effect::Reveal).into_iter().collect();
        (state, effects)
    }

    //  Accessors

    /// Names currently displayed, in display order.
    pub fn displayed(&self) -> Vec<&str> {
        self.displayed
            .iter()
            .map(|&i| self.names[i].as_str())
            .collect()
    }

    pub fn displayed_len(&self) -> usize {
        self.displayed.len()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Name under the cursor.
    pub fn selected(&self) -> Option<&str> {
        self.cursor.and_then(|i| self.name_at(i))
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn rename_session(&self) -> Option<&RenameSession> {
        match &self.mode {
            Mode::Renaming(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_renaming(&self) -> bool {
        matches!(self.mode, Mode::Renaming(_))
    }

    pub fn is_closed(&self) -> bool {
        self.mode == Mode::Closed
    }

    /// The empty-state hint, when nothing is displayed.
    pub fn empty_hint(&self) -> Option<&'static str> {
        self.displayed.is_empty().then_some(EMPTY_STATE_HINT)
    }

    /// Text to show for the entry at `index`: the live edit for the entry
    /// being renamed, its name otherwise.
    pub fn label(&self, index: usize) -> Option<&str> {
        match &self.mode {
            Mode::Renaming(session) if session.index == index => Some(session.text.as_str()),
            _ => self.name_at(index),
        }
    }

    //  Transitions

    /// Close without going through [`step`](Self::step).  Closing twice is
    /// harmless.
    pub fn close(&mut self) {
        if !self.is_closed() {
            debug!("picker state closed");
            self.mode = Mode::Closed;
        }
    }

    /// Replace the list with a fresh read from the store.
    pub fn reload(
        &mut self,
        names: Vec<String>,
        active: String,
        reselect: Reselect,
        filter: &mut dyn CandidateFilter,
    ) -> Vec<Effect> {
        self.names = sort_names(names);
        self.active = active;
        self.reproject(filter);
        let target = match reselect {
            Reselect::Name(name) => self
                .position_of(&name)
                .or(self.cursor)
                .unwrap_or(0),
            Reselect::Index(i) => i,
        };
        self.cursor = self.clamp(target);
        debug!("reloaded {} workspace(s), cursor {:?}", self.names.len(), self.cursor);
        self.cursor.map(Effect::Reveal).into_iter().collect()
    }

    /// Consume one input and return the resulting effects.
    pub fn step(
        &mut self,
        input: Input,
        config: &PickerConfig,
        filter: &mut dyn CandidateFilter,
    ) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.is_closed() {
            debug!("input {:?} after close ignored", input);
            return effects;
        }

        match input {
            Input::Filter(text) => {
                if self.is_renaming() {
                    debug!("filter change ignored while renaming");
                } else {
                    self.query = text;
                    self.reproject(filter);
                    self.cursor = self.clamp(self.cursor.unwrap_or(0));
                    debug!("filter {:?} shows {} entries", self.query, self.displayed.len());
                }
            }

            Input::RenameText(text) => {
                if let Mode::Renaming(session) = &mut self.mode {
                    session.text = text;
                }
            }

            Input::Hover(index) => {
                if !self.is_renaming() && index < self.displayed.len() {
                    self.cursor = Some(index);
                }
            }

            Input::Blur => {
                if self.is_renaming() {
                    self.run(Command::CommitRename, config, &mut effects);
                }
            }

            Input::Close => self.run(Command::Close, config, &mut effects),

            Input::Key { composing: true, key, .. } => {
                debug!("{} ignored during IME composition", key);
            }

            Input::Key { key, mods, .. } => {
                if let Some(cmd) = self.key_command(key, mods) {
                    self.run(cmd, config, &mut effects);
                }
            }

            Input::Click { index, mods } => {
                if let Some(editing) = self.rename_session().map(|s| s.index) {
                    if editing != index {
                        self.run(Command::CommitRename, config, &mut effects);
                    }
                } else if index < self.displayed.len() {
                    self.cursor = Some(index);
                    let cmd = Command::Choose {
                        index: Some(index),
                        mode: mods.choose_mode(),
                    };
                    self.run(cmd, config, &mut effects);
                }
            }

            Input::ClickRename(index) => {
                if self.is_renaming() {
                    self.run(Command::CommitRename, config, &mut effects);
                } else {
                    self.run(Command::BeginRename(index), config, &mut effects);
                }
            }

            Input::ClickDelete(index) => {
                if self.is_renaming() {
                    self.run(Command::CommitRename, config, &mut effects);
                } else {
                    self.run(Command::Delete(index), config, &mut effects);
                }
            }
        }
        effects
    }

    /// Map a key press to a command for the current mode.
    fn key_command(&self, key: Key, mods: Modifiers) -> Option<Command> {
        if self.is_renaming() {
            return match key {
                Key::Enter => Some(Command::CommitRename),
                Key::Escape => Some(Command::RevertRename),
                _ => None,
            };
        }
        match key {
            Key::Enter if mods.ctrl => self.cursor.map(Command::BeginRename),
            Key::Enter => Some(Command::Choose {
                index: self.cursor,
                mode: mods.choose_mode(),
            }),
            Key::Delete if mods.shift => self.cursor.map(Command::Delete),
            Key::Delete => None,
            Key::Escape => Some(Command::Close),
            Key::ArrowUp => Some(Command::Move(-1)),
            Key::ArrowDown => Some(Command::Move(1)),
        }
    }

    fn run(&mut self, cmd: Command, config: &PickerConfig, effects: &mut Vec<Effect>) {
        debug!("run {}", cmd);
        match cmd {
            Command::Move(delta) => {
                if let Some(cur) = self.cursor {
                    let next = cur.saturating_add_signed(delta);
                    self.cursor = self.clamp(next);
                    effects.extend(self.cursor.map(Effect::Reveal));
                }
            }

            Command::Choose { index, mode } => self.choose(index, mode, config, effects),

            Command::BeginRename(index) => {
                if let Some(name) = self.name_at(index) {
                    info!("rename {:?}", name);
                    let session = RenameSession {
                        index,
                        original: name.to_string(),
                        text: name.to_string(),
                    };
                    self.cursor = Some(index);
                    self.mode = Mode::Renaming(session);
                }
            }

            Command::CommitRename => {
                let Mode::Renaming(session) = std::mem::replace(&mut self.mode, Mode::Browsing)
                else {
                    return;
                };
                let to = session.text.trim();
                if to.is_empty() || to == session.original {
                    debug!("rename of {:?} left unchanged", session.original);
                    return;
                }
                if self.names.iter().any(|n| n == to) {
                    warn!(
                        "cannot rename {:?} to {:?}: a workspace with that name exists",
                        session.original, to
                    );
                    return;
                }
                info!("rename {:?} → {:?}", session.original, to);
                effects.push(Effect::Rename {
                    from: session.original.clone(),
                    to: to.to_string(),
                });
                if session.original == self.active {
                    effects.push(Effect::SetActive(to.to_string()));
                    effects.push(Effect::Load(to.to_string()));
                }
                effects.push(Effect::LayoutChanged);
                effects.push(Effect::Refresh(Reselect::Name(to.to_string())));
            }

            Command::RevertRename => {
                if let Mode::Renaming(session) = std::mem::replace(&mut self.mode, Mode::Browsing) {
                    debug!("rename of {:?} reverted", session.original);
                }
            }

            Command::Delete(index) => {
                let Some(name) = self.name_at(index).map(str::to_string) else {
                    return;
                };
                if config.show_delete_prompt {
                    effects.push(Effect::ConfirmDelete { name, index });
                } else {
                    info!("delete {:?}", name);
                    effects.push(Effect::Delete(name));
                    effects.push(Effect::Refresh(Reselect::Index(index.saturating_sub(1))));
                }
            }

            Command::Close => {
                self.mode = Mode::Closed;
                effects.push(Effect::Close);
            }
        }
    }

    fn choose(
        &mut self,
        index: Option<usize>,
        mode: ChooseMode,
        config: &PickerConfig,
        effects: &mut Vec<Effect>,
    ) {
        let target = index.and_then(|i| self.name_at(i)).map(str::to_string);
        match mode {
            ChooseMode::SaveAs => {
                let name = target.or_else(|| {
                    let typed = self.query.trim();
                    (!typed.is_empty()).then(|| typed.to_string())
                });
                let Some(name) = name else {
                    return;
                };
                info!("save workspace {:?}", name);
                effects.push(Effect::Save(name.clone()));
                effects.push(Effect::Notice(format!("Successfully saved workspace: {}", name)));
                effects.push(Effect::SetActive(name));
            }

            ChooseMode::SaveAndLoad => {
                let Some(name) = target else {
                    return;
                };
                info!("save {:?} and load {:?}", self.active, name);
                if !self.active.is_empty() {
                    effects.push(Effect::Save(self.active.clone()));
                }
                effects.push(Effect::Load(name));
            }

            ChooseMode::Plain => {
                let save_active =
                    (config.save_on_change || config.save_on_switch) && !self.active.is_empty();
                if let Some(name) = target {
                    info!("switch to {:?}", name);
                    if save_active {
                        effects.push(Effect::Save(self.active.clone()));
                    }
                    effects.push(Effect::SetActive(name.clone()));
                    effects.push(Effect::Load(name));
                } else {
                    // With save_on_change, Enter on unmatched filter text keeps
                    // the current layout under that name.
                    let typed = self.query.trim();
                    if !config.save_on_change || typed.is_empty() {
                        return;
                    }
                    let name = typed.to_string();
                    info!("save current layout as {:?}", name);
                    if save_active {
                        effects.push(Effect::Save(self.active.clone()));
                    }
                    effects.push(Effect::Save(name.clone()));
                    effects.push(Effect::Notice(format!("Successfully saved workspace: {}", name)));
                    effects.push(Effect::SetActive(name));
                }
            }
        }
        self.mode = Mode::Closed;
        effects.push(Effect::Close);
    }

    //  Helpers

    fn reproject(&mut self, filter: &mut dyn CandidateFilter) {
        self.displayed = filter.project(&self.names, &self.query);
    }

    fn name_at(&self, index: usize) -> Option<&str> {
        self.displayed
            .get(index)
            .map(|&i| self.names[i].as_str())
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.displayed.iter().position(|&i| self.names[i] == name)
    }

    fn clamp(&self, index: usize) -> Option<usize> {
        if self.displayed.is_empty() {
            None
        } else {
            Some(index.min(self.displayed.len() - 1))
        }
    }
}
