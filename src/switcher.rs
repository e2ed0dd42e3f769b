//! The driver that ties the picker state, the host store and the
//! confirmation dialog together.
//!
//! [`WorkspaceSwitcher`] owns the [`PickerState`], feeds it [`Input`]s, and
//! carries out the resulting [`Effect`]s against the [`WorkspaceStore`].

use crate::command::Input;
use crate::config::PickerConfig;
use crate::dialog::{AcceptHandler, ConfirmDialog};
use crate::filter::{CandidateFilter, FuzzyFilter};
use crate::picker::{Effect, PickerState, Reselect};
use crate::scope::{ModalStack, ScopeGuard};
use crate::traits::{PickerEvent, WorkspaceStore};
use futures::FutureExt;
use log::{debug, info, warn};
use std::rc::Rc;
use std::sync::mpsc;

/// Possible errors from the switcher.
#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    /// The workspace store returned an error.
    #[error("workspace store error: {0}")]
    Store(String),
}

fn store_err<E: std::error::Error>(e: E) -> PickerError {
    PickerError::Store(e.to_string())
}

/// A delete waiting on the user's answer.
struct PendingDelete {
    dialog: ConfirmDialog<PickerError>,
    index: usize,
}

/// Runs the workspace picker against a host store.
///
/// The switcher is generic over any [`WorkspaceStore`] implementation.  The
/// store is shared as an `Rc` because the delete confirmation's accept
/// handler needs its own handle to it.
///
/// # Typical usage
///
/// ```ignore
/// let modals = ModalStack::new();
/// let mut switcher = WorkspaceSwitcher::new(Rc::new(store), &modals);
/// switcher.set_config(config.picker.clone());
/// switcher.open()?;
/// switcher.handle(Input::key(Key::Enter, Modifiers::NONE))?;
/// ```
pub struct WorkspaceSwitcher<S: WorkspaceStore + 'static> {
    store: Rc<S>,
    state: PickerState,
    filter: Box<dyn CandidateFilter>,
    config: PickerConfig,
    modals: ModalStack,
    scope: Option<ScopeGuard>,
    pending: Option<PendingDelete>,
    event_tx: Option<mpsc::Sender<PickerEvent>>,
}

impl<S: WorkspaceStore + 'static> WorkspaceSwitcher<S> {
    /// Create a closed switcher.  Call [`open`](Self::open) to show it.
    pub fn new(store: Rc<S>, modals: &ModalStack) -> Self {
        Self {
            store,
            state: PickerState::default(),
            filter: Box::new(FuzzyFilter::new()),
            config: PickerConfig::default(),
            modals: modals.clone(),
            scope: None,
            pending: None,
            event_tx: None,
        }
    }

    /// Replace the picker settings.  The new values apply from the next
    /// command on, including to a picker that is already open.
    pub fn set_config(&mut self, config: PickerConfig) {
        self.config = config;
    }

    /// Attach a channel for [`PickerEvent`]s.
    pub fn set_events(&mut self, tx: mpsc::Sender<PickerEvent>) {
        self.event_tx = Some(tx);
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        !self.state.is_closed()
    }

    /// The delete confirmation currently shown, if any.
    pub fn pending_confirmation(&self) -> Option<&ConfirmDialog<PickerError>> {
        self.pending.as_ref().map(|p| &p.dialog)
    }

    /// Read the store and show the picker.
    ///
    /// Opening an already open picker re-reads the store and reseeds the
    /// cursor.
    pub fn open(&mut self) -> Result<(), PickerError> {
        let names = self.store.workspace_names().map_err(store_err)?;
        let active = self.store.active_workspace().map_err(store_err)?;
        let (state, effects) = PickerState::open(names, active, self.filter.as_mut());
        self.state = state;
        if self.scope.is_none() {
            self.scope = Some(self.modals.push("workspace-picker"));
        }
        self.apply(effects)
    }

    /// Process a single [`Input`].
    ///
    /// While a delete confirmation is shown, the picker does not receive
    /// input.  If the store fails, the remaining effects of this input are
    /// skipped and the error is returned.  A command that closes the picker
    /// still closes it; one that keeps it open re-reads the store first.
    pub fn handle(&mut self, input: Input) -> Result<(), PickerError> {
        if self.pending.is_some() {
            debug!("input {:?} ignored while confirmation is open", input);
            return Ok(());
        }
        let effects = self.state.step(input, &self.config, self.filter.as_mut());
        let renamed = effects.iter().any(|e| matches!(e, Effect::Rename { .. }));
        let result = self.apply(effects);
        if self.state.is_closed() {
            self.finish_close();
        } else if result.is_err() {
            if renamed {
                // The store may hold a partial rename.
                self.emit(PickerEvent::LayoutChanged);
            }
            let index = self.state.cursor().unwrap_or(0);
            if let Err(e) = self.refresh(Reselect::Index(index)) {
                warn!("cannot re-read workspaces after a failed command: {}", e);
            }
        }
        result
    }

    /// Confirm the pending delete: delete, refresh and move the cursor to
    /// the previous neighbour.
    ///
    /// If the store fails, the error is returned and the dialog stays open.
    pub async fn accept_confirmation(&mut self) -> Result<(), PickerError> {
        let Some(pending) = self.pending.as_mut() else {
            return Ok(());
        };
        pending.dialog.accept().await?;
        let index = pending.index;
        self.pending = None;
        self.refresh(Reselect::Index(index.saturating_sub(1)))
    }

    /// Dismiss the pending delete without deleting anything.
    pub fn cancel_confirmation(&mut self) {
        if let Some(mut pending) = self.pending.take() {
            pending.dialog.cancel();
        }
    }

    /// Close the picker, dismissing any pending confirmation.
    pub fn close(&mut self) {
        self.cancel_confirmation();
        self.state.close();
        self.finish_close();
    }

    /// Release the input scope and notify, once per open.
    fn finish_close(&mut self) {
        if self.scope.take().is_some() {
            self.emit(PickerEvent::LayoutChanged);
            info!("picker closed");
        }
    }

    //  Effects

    fn apply(&mut self, effects: Vec<Effect>) -> Result<(), PickerError> {
        for effect in effects {
            match effect {
                Effect::Save(name) => {
                    debug!("store: save {:?}", name);
                    self.store.save(&name).map_err(store_err)?;
                }
                Effect::Delete(name) => {
                    debug!("store: delete {:?}", name);
                    self.store.delete(&name).map_err(store_err)?;
                }
                Effect::Load(name) => {
                    debug!("store: load {:?}", name);
                    self.store.load(&name).map_err(store_err)?;
                }
                Effect::SetActive(name) => {
                    debug!("store: set active {:?}", name);
                    self.store.set_active(&name).map_err(store_err)?;
                }
                Effect::Rename { from, to } => {
                    debug!("store: rename {:?} to {:?}", from, to);
                    self.store.rename(&from, &to).map_err(store_err)?;
                }
                Effect::Notice(text) => {
                    info!("{}", text);
                    self.emit(PickerEvent::Notice(text));
                }
                Effect::ConfirmDelete { name, index } => self.confirm_delete(name, index),
                Effect::Refresh(reselect) => self.refresh(reselect)?,
                Effect::Reveal(index) => self.emit(PickerEvent::Reveal(index)),
                Effect::LayoutChanged => self.emit(PickerEvent::LayoutChanged),
                Effect::Close => self.finish_close(),
            }
        }
        Ok(())
    }

    fn refresh(&mut self, reselect: Reselect) -> Result<(), PickerError> {
        let names = self.store.workspace_names().map_err(store_err)?;
        let active = self.store.active_workspace().map_err(store_err)?;
        let effects = self.state.reload(names, active, reselect, self.filter.as_mut());
        self.apply(effects)
    }

    fn confirm_delete(&mut self, name: String, index: usize) {
        let store = Rc::clone(&self.store);
        let target = name.clone();
        let on_accept: AcceptHandler<PickerError> = Box::new(move || {
            let store = Rc::clone(&store);
            let target = target.clone();
            async move {
                info!("delete {:?}", target);
                store.delete(&target).map_err(store_err)
            }
            .boxed_local()
        });
        let mut dialog = ConfirmDialog::new(
            "Delete Workspace",
            format!("Are you sure you want to delete \"{}\"?", name),
            "Delete",
            on_accept,
        );
        dialog.open(&self.modals);
        self.pending = Some(PendingDelete { dialog, index });
    }

    fn emit(&self, event: PickerEvent) {
        if let Some(tx) = &self.event_tx {
            let _ = tx.send(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Key, Modifiers};
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::collections::BTreeSet;

    //  Recording store

    #[derive(Debug, thiserror::Error)]
    #[error("recorder error")]
    struct RecorderErr;

    /// A store that keeps names in memory and logs every mutating call.
    #[derive(Debug, Default)]
    struct RecorderStore {
        names: RefCell<BTreeSet<String>>,
        active: RefCell<String>,
        calls: RefCell<Vec<String>>,
        fail_delete: Cell<bool>,
        fail_save: Cell<bool>,
        fail_load: Cell<bool>,
    }

    impl RecorderStore {
        fn with(names: &[&str], active: &str) -> Rc<Self> {
            let store = Self::default();
            store
                .names
                .borrow_mut()
                .extend(names.iter().map(|s| s.to_string()));
            *store.active.borrow_mut() = active.to_string();
            Rc::new(store)
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn listed(&self) -> Vec<String> {
            self.names.borrow().iter().cloned().collect()
        }
    }

    impl WorkspaceStore for RecorderStore {
        type Error = RecorderErr;

        fn workspace_names(&self) -> Result<Vec<String>, RecorderErr> {
            // Reverse order on purpose: the picker must sort.
            Ok(self.names.borrow().iter().rev().cloned().collect())
        }

        fn active_workspace(&self) -> Result<String, RecorderErr> {
            Ok(self.active.borrow().clone())
        }

        fn save(&self, name: &str) -> Result<(), RecorderErr> {
            if self.fail_save.get() {
                return Err(RecorderErr);
            }
            self.calls.borrow_mut().push(format!("save {}", name));
            self.names.borrow_mut().insert(name.into());
            Ok(())
        }

        fn delete(&self, name: &str) -> Result<(), RecorderErr> {
            if self.fail_delete.get() {
                return Err(RecorderErr);
            }
            self.calls.borrow_mut().push(format!("delete {}", name));
            self.names.borrow_mut().remove(name);
            Ok(())
        }

        fn load(&self, name: &str) -> Result<(), RecorderErr> {
            if self.fail_load.get() {
                return Err(RecorderErr);
            }
            self.calls.borrow_mut().push(format!("load {}", name));
            Ok(())
        }

        fn set_active(&self, name: &str) -> Result<(), RecorderErr> {
            self.calls.borrow_mut().push(format!("set_active {}", name));
            *self.active.borrow_mut() = name.into();
            Ok(())
        }
    }

    fn make_switcher(
        store: &Rc<RecorderStore>,
        config: PickerConfig,
    ) -> (WorkspaceSwitcher<RecorderStore>, ModalStack, mpsc::Receiver<PickerEvent>) {
        let modals = ModalStack::new();
        let (tx, rx) = mpsc::channel();
        let mut s = WorkspaceSwitcher::new(Rc::clone(store), &modals);
        s.set_config(config);
        s.set_events(tx);
        s.open().unwrap();
        (s, modals, rx)
    }

    fn no_prompt() -> PickerConfig {
        PickerConfig {
            show_delete_prompt: false,
            ..PickerConfig::default()
        }
    }

    fn key(k: Key) -> Input {
        Input::key(k, Modifiers::NONE)
    }

    fn layout_changes(rx: &mpsc::Receiver<PickerEvent>) -> usize {
        rx.try_iter()
            .filter(|e| *e == PickerEvent::LayoutChanged)
            .count()
    }

    #[test]
    fn open_pushes_scope_and_selects_active() {
        let store = RecorderStore::with(&["Writing", "Default"], "Default");
        let (s, modals, rx) = make_switcher(&store, PickerConfig::default());
        assert!(s.is_open());
        assert_eq!(modals.top(), Some("workspace-picker"));
        assert_eq!(s.state().displayed(), vec!["Default", "Writing"]);
        assert_eq!(s.state().selected(), Some("Default"));
        assert_eq!(rx.try_recv().unwrap(), PickerEvent::Reveal(0));
    }

    #[test]
    fn arrow_down_then_enter_switches_and_closes() {
        let store = RecorderStore::with(&["Default", "Writing"], "Default");
        let (mut s, modals, rx) = make_switcher(&store, PickerConfig::default());
        s.handle(key(Key::ArrowDown)).unwrap();
        assert_eq!(s.state().selected(), Some("Writing"));
        s.handle(key(Key::Enter)).unwrap();
        assert_eq!(store.calls(), vec!["set_active Writing", "load Writing"]);
        assert!(!s.is_open());
        assert!(modals.is_empty());
        assert_eq!(layout_changes(&rx), 1);
    }

    #[test]
    fn shift_enter_saves_new_workspace() {
        let store = RecorderStore::with(&["Default"], "Default");
        let (mut s, modals, rx) = make_switcher(&store, PickerConfig::default());
        s.handle(Input::Filter("NewOne".into())).unwrap();
        s.handle(Input::key(Key::Enter, Modifiers::shift())).unwrap();
        assert_eq!(store.calls(), vec!["save NewOne", "set_active NewOne"]);
        let events: Vec<PickerEvent> = rx.try_iter().collect();
        assert!(events.contains(&PickerEvent::Notice(
            "Successfully saved workspace: NewOne".into()
        )));
        assert!(!s.is_open());
        assert!(modals.is_empty());
    }

    #[test]
    fn save_on_change_saves_before_loading() {
        let store = RecorderStore::with(&["Default", "Writing"], "Default");
        let config = PickerConfig {
            save_on_change: true,
            ..PickerConfig::default()
        };
        let (mut s, _modals, _rx) = make_switcher(&store, config);
        s.handle(Input::Hover(1)).unwrap();
        s.handle(key(Key::Enter)).unwrap();
        assert_eq!(
            store.calls(),
            vec!["save Default", "set_active Writing", "load Writing"]
        );
    }

    #[test]
    fn save_on_switch_applies_to_click() {
        let store = RecorderStore::with(&["Default", "Writing"], "Default");
        let config = PickerConfig {
            save_on_switch: true,
            ..PickerConfig::default()
        };
        let (mut s, _modals, _rx) = make_switcher(&store, config);
        s.handle(Input::Click { index: 1, mods: Modifiers::NONE }).unwrap();
        assert_eq!(store.calls()[0], "save Default");
    }

    #[test]
    fn alt_enter_loads_without_setting_active() {
        let store = RecorderStore::with(&["Default", "Writing"], "Default");
        let (mut s, _modals, _rx) = make_switcher(&store, PickerConfig::default());
        s.handle(Input::Hover(1)).unwrap();
        s.handle(Input::key(Key::Enter, Modifiers::alt())).unwrap();
        assert_eq!(store.calls(), vec!["save Default", "load Writing"]);
        assert_eq!(*store.active.borrow(), "Default");
    }

    #[test]
    fn delete_with_prompt_waits_for_cta() {
        let store = RecorderStore::with(&["a", "b", "c"], "a");
        let (mut s, modals, _rx) = make_switcher(&store, PickerConfig::default());
        s.handle(Input::Hover(2)).unwrap();
        s.handle(Input::key(Key::Delete, Modifiers::shift())).unwrap();

        let dialog = s.pending_confirmation().expect("dialog shown");
        assert!(dialog.body().contains("\"c\""));
        assert_eq!(modals.top(), Some("confirm"));
        assert!(store.calls().is_empty());

        block_on(s.accept_confirmation()).unwrap();
        assert_eq!(store.calls(), vec!["delete c"]);
        assert_eq!(s.state().displayed(), vec!["a", "b"]);
        assert_eq!(s.state().cursor(), Some(1));
        assert_eq!(modals.top(), Some("workspace-picker"));
    }

    #[test]
    fn delete_cancel_leaves_list_unchanged() {
        let store = RecorderStore::with(&["a", "b"], "a");
        let (mut s, modals, _rx) = make_switcher(&store, PickerConfig::default());
        s.handle(Input::ClickDelete(1)).unwrap();
        s.cancel_confirmation();
        assert!(s.pending_confirmation().is_none());
        assert!(store.calls().is_empty());
        assert_eq!(store.listed(), vec!["a", "b"]);
        assert_eq!(s.state().displayed(), vec!["a", "b"]);
        assert_eq!(modals.top(), Some("workspace-picker"));
    }

    #[test]
    fn picker_ignores_input_while_confirming() {
        let store = RecorderStore::with(&["a", "b"], "a");
        let (mut s, _modals, _rx) = make_switcher(&store, PickerConfig::default());
        s.handle(Input::ClickDelete(1)).unwrap();
        s.handle(key(Key::Enter)).unwrap();
        assert!(store.calls().is_empty());
        assert!(s.is_open());
    }

    #[test]
    fn failing_delete_keeps_dialog_open() {
        let store = RecorderStore::with(&["a", "b"], "a");
        let (mut s, _modals, _rx) = make_switcher(&store, PickerConfig::default());
        s.handle(Input::ClickDelete(1)).unwrap();
        store.fail_delete.set(true);
        let err = block_on(s.accept_confirmation()).unwrap_err();
        assert!(matches!(err, PickerError::Store(_)));
        assert!(s.pending_confirmation().is_some_and(|d| d.is_open()));
        assert_eq!(store.listed(), vec!["a", "b"]);
    }

    #[test]
    fn delete_without_prompt_moves_cursor_back() {
        let store = RecorderStore::with(&["a", "b", "c"], "a");
        let (mut s, _modals, _rx) = make_switcher(&store, no_prompt());
        s.handle(Input::Hover(1)).unwrap();
        s.handle(Input::key(Key::Delete, Modifiers::shift())).unwrap();
        assert!(s.pending_confirmation().is_none());
        assert_eq!(store.listed(), vec!["a", "c"]);
        assert_eq!(s.state().displayed(), vec!["a", "c"]);
        assert_eq!(s.state().cursor(), Some(0));
    }

    #[test]
    fn delete_prompt_setting_is_read_per_delete() {
        let store = RecorderStore::with(&["a", "b", "c"], "a");
        let (mut s, _modals, _rx) = make_switcher(&store, no_prompt());
        s.handle(Input::ClickDelete(2)).unwrap();
        assert_eq!(store.listed(), vec!["a", "b"]);
        s.set_config(PickerConfig::default());
        s.handle(Input::ClickDelete(1)).unwrap();
        assert!(s.pending_confirmation().is_some());
        assert_eq!(store.listed(), vec!["a", "b"]);
    }

    #[test]
    fn rename_active_round_trip() {
        let store = RecorderStore::with(&["Foo", "Other"], "Foo");
        let (mut s, _modals, rx) = make_switcher(&store, PickerConfig::default());
        s.handle(Input::key(Key::Enter, Modifiers::ctrl())).unwrap();
        s.handle(Input::RenameText("Bar".into())).unwrap();
        s.handle(Input::Blur).unwrap();

        assert_eq!(
            store.calls(),
            vec!["delete Foo", "save Bar", "set_active Bar", "load Bar"]
        );
        assert_eq!(store.listed(), vec!["Bar", "Other"]);
        assert_eq!(s.state().active(), "Bar");
        assert_eq!(s.state().selected(), Some("Bar"));
        assert!(s.is_open());
        assert_eq!(layout_changes(&rx), 1);
    }

    #[test]
    fn rename_revert_leaves_store_untouched() {
        let store = RecorderStore::with(&["Foo"], "Foo");
        let (mut s, _modals, _rx) = make_switcher(&store, PickerConfig::default());
        s.handle(Input::ClickRename(0)).unwrap();
        s.handle(Input::RenameText("Baz".into())).unwrap();
        s.handle(key(Key::Escape)).unwrap();
        assert!(store.calls().is_empty());
        assert_eq!(s.state().displayed(), vec!["Foo"]);
        assert!(s.is_open());
    }

    #[test]
    fn escape_closes_and_notifies_once() {
        let store = RecorderStore::with(&["a"], "a");
        let (mut s, modals, rx) = make_switcher(&store, PickerConfig::default());
        s.handle(key(Key::Escape)).unwrap();
        s.handle(key(Key::Escape)).unwrap();
        s.close();
        assert!(!s.is_open());
        assert!(modals.is_empty());
        assert_eq!(layout_changes(&rx), 1);
    }

    #[test]
    fn close_dismisses_pending_confirmation() {
        let store = RecorderStore::with(&["a", "b"], "a");
        let (mut s, modals, _rx) = make_switcher(&store, PickerConfig::default());
        s.handle(Input::ClickDelete(0)).unwrap();
        s.close();
        assert!(s.pending_confirmation().is_none());
        assert!(modals.is_empty());
        assert_eq!(store.listed(), vec!["a", "b"]);
    }

    #[test]
    fn reopen_rereads_store() {
        let store = RecorderStore::with(&["a"], "a");
        let (mut s, modals, _rx) = make_switcher(&store, PickerConfig::default());
        s.close();
        store.names.borrow_mut().insert("b".into());
        *store.active.borrow_mut() = "b".into();
        s.open().unwrap();
        assert_eq!(s.state().selected(), Some("b"));
        assert_eq!(modals.depth(), 1);
    }

    #[test]
    fn failing_load_still_closes() {
        let store = RecorderStore::with(&["Default", "Writing"], "Default");
        let (mut s, modals, rx) = make_switcher(&store, PickerConfig::default());
        store.fail_load.set(true);
        s.handle(key(Key::ArrowDown)).unwrap();
        let err = s.handle(key(Key::Enter)).unwrap_err();
        assert!(matches!(err, PickerError::Store(_)));
        assert_eq!(store.calls(), vec!["set_active Writing"]);
        assert!(!s.is_open());
        assert!(modals.is_empty());
        s.close();
        assert_eq!(layout_changes(&rx), 1);
    }

    #[test]
    fn failing_save_as_closes_without_notice() {
        let store = RecorderStore::with(&["Default"], "Default");
        let (mut s, modals, rx) = make_switcher(&store, PickerConfig::default());
        store.fail_save.set(true);
        s.handle(Input::Filter("NewOne".into())).unwrap();
        assert!(s.handle(Input::key(Key::Enter, Modifiers::shift())).is_err());
        assert!(store.calls().is_empty());
        assert!(!s.is_open());
        assert!(modals.is_empty());
        let events: Vec<PickerEvent> = rx.try_iter().collect();
        assert!(!events.iter().any(|e| matches!(e, PickerEvent::Notice(_))));
        assert_eq!(
            events.iter().filter(|e| **e == PickerEvent::LayoutChanged).count(),
            1
        );
    }

    #[test]
    fn failing_save_skips_alt_enter_load() {
        let store = RecorderStore::with(&["Default", "Writing"], "Default");
        let (mut s, modals, _rx) = make_switcher(&store, PickerConfig::default());
        store.fail_save.set(true);
        s.handle(Input::Hover(1)).unwrap();
        assert!(s.handle(Input::key(Key::Enter, Modifiers::alt())).is_err());
        assert!(store.calls().is_empty());
        assert!(!s.is_open());
        assert!(modals.is_empty());
    }

    #[test]
    fn failing_rename_resyncs_list_and_stays_open() {
        let store = RecorderStore::with(&["Foo", "Other"], "Other");
        let (mut s, modals, rx) = make_switcher(&store, PickerConfig::default());
        s.handle(Input::ClickRename(0)).unwrap();
        s.handle(Input::RenameText("Bar".into())).unwrap();
        store.fail_save.set(true);
        assert!(s.handle(Input::Blur).is_err());

        // The default rename deleted "Foo" before the save failed.
        assert_eq!(store.calls(), vec!["delete Foo"]);
        assert_eq!(s.state().displayed(), vec!["Other"]);
        assert!(s.is_open());
        assert!(!s.state().is_renaming());
        assert_eq!(modals.top(), Some("workspace-picker"));
        assert_eq!(layout_changes(&rx), 1);
    }

    #[test]
    fn save_on_change_enter_keeps_layout_under_filter_text() {
        let store = RecorderStore::with(&["Default"], "Default");
        let config = PickerConfig {
            save_on_change: true,
            ..PickerConfig::default()
        };
        let (mut s, modals, _rx) = make_switcher(&store, config);
        s.handle(Input::Filter("Drafts".into())).unwrap();
        s.handle(key(Key::Enter)).unwrap();
        assert_eq!(
            store.calls(),
            vec!["save Default", "save Drafts", "set_active Drafts"]
        );
        assert_eq!(store.listed(), vec!["Default", "Drafts"]);
        assert!(!s.is_open());
        assert!(modals.is_empty());
    }

    #[test]
    fn close_on_closed_switcher_is_silent() {
        let store = RecorderStore::with(&["a"], "a");
        let modals = ModalStack::new();
        let (tx, rx) = mpsc::channel();
        let mut s = WorkspaceSwitcher::new(Rc::clone(&store), &modals);
        s.set_events(tx);
        s.close();
        assert!(!s.is_open());
        assert_eq!(layout_changes(&rx), 0);
    }

    #[test]
    fn dropping_switcher_releases_scope() {
        let store = RecorderStore::with(&["a"], "a");
        let (s, modals, _rx) = make_switcher(&store, PickerConfig::default());
        drop(s);
        assert!(modals.is_empty());
    }
}
