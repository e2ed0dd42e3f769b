//! In-memory [`WorkspaceStore`] implementation.
//!
//! Layouts are opaque strings.  The store tracks the layout currently on
//! screen: [`save`](WorkspaceStore::save) snapshots it under a name and
//! [`load`](WorkspaceStore::load) puts a stored one back on screen.  Nothing
//! is persisted.

use crate::traits::WorkspaceStore;
use std::cell::RefCell;
use std::collections::BTreeMap;

/// A workspace store that lives for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    layouts: RefCell<BTreeMap<String, String>>,
    active: RefCell<String>,
    current: RefCell<String>,
}

/// Errors produced by the in-memory store.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MemoryStoreError {
    #[error("no workspace named {0:?}")]
    Unknown(String),
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with one placeholder layout per name.
    pub fn with_workspaces<I, N>(names: I, active: &str) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let store = Self::new();
        {
            let mut layouts = store.layouts.borrow_mut();
            for name in names {
                let name = name.into();
                let layout = format!("layout:{}", name);
                layouts.insert(name, layout);
            }
        }
        *store.active.borrow_mut() = active.to_string();
        if let Some(layout) = store.layouts.borrow().get(active) {
            *store.current.borrow_mut() = layout.clone();
        }
        store
    }

    /// The layout currently on screen.
    pub fn current_layout(&self) -> String {
        self.current.borrow().clone()
    }

    /// Change what is on screen (as if the user rearranged panels).
    pub fn set_current_layout(&self, layout: impl Into<String>) {
        *self.current.borrow_mut() = layout.into();
    }

    /// The layout stored under `name`.
    pub fn layout(&self, name: &str) -> Option<String> {
        self.layouts.borrow().get(name).cloned()
    }
}

impl WorkspaceStore for MemoryStore {
    type Error = MemoryStoreError;

    fn workspace_names(&self) -> Result<Vec<String>, MemoryStoreError> {
        Ok(self.layouts.borrow().keys().cloned().collect())
    }

    fn active_workspace(&self) -> Result<String, MemoryStoreError> {
        Ok(self.active.borrow().clone())
    }

    fn save(&self, name: &str) -> Result<(), MemoryStoreError> {
        let layout = self.current_layout();
        self.layouts.borrow_mut().insert(name.to_string(), layout);
        Ok(())
    }

    fn delete(&self, name: &str) -> Result<(), MemoryStoreError> {
        self.layouts
            .borrow_mut()
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| MemoryStoreError::Unknown(name.to_string()))
    }

    fn load(&self, name: &str) -> Result<(), MemoryStoreError> {
        let layout = self
            .layout(name)
            .ok_or_else(|| MemoryStoreError::Unknown(name.to_string()))?;
        self.set_current_layout(layout);
        Ok(())
    }

    fn set_active(&self, name: &str) -> Result<(), MemoryStoreError> {
        *self.active.borrow_mut() = name.to_string();
        Ok(())
    }

    /// Move the stored layout; the layout on screen is left alone.
    fn rename(&self, from: &str, to: &str) -> Result<(), MemoryStoreError> {
        let mut layouts = self.layouts.borrow_mut();
        let layout = layouts
            .remove(from)
            .ok_or_else(|| MemoryStoreError::Unknown(from.to_string()))?;
        layouts.insert(to.to_string(), layout);
        Ok(())
    }
}
