//! The modal input-scope stack.
//!
//! Whichever modal is on top of the stack receives keyboard input.  Opening
//! a modal pushes a scope and hands back a [`ScopeGuard`]; dropping the guard
//! pops it again, so every exit path (including `?` on an error) releases
//! the scope.

use log::{debug, warn};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to the stack of open modal scopes.
///
/// Cloning the handle shares the same stack.
#[derive(Debug, Clone, Default)]
pub struct ModalStack {
    inner: Rc<RefCell<StackInner>>,
}

#[derive(Debug, Default)]
struct StackInner {
    next_id: u64,
    scopes: Vec<(u64, &'static str)>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a scope named `name` and return the guard that owns it.
    pub fn push(&self, name: &'static str) -> ScopeGuard {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.scopes.push((id, name));
        debug!("push input scope {} (depth {})", name, inner.scopes.len());
        ScopeGuard {
            stack: Rc::clone(&self.inner),
            id,
            name,
        }
    }

    /// Name of the scope currently receiving input.
    pub fn top(&self) -> Option<&'static str> {
        self.inner.borrow().scopes.last().map(|(_, name)| *name)
    }

    pub fn depth(&self) -> usize {
        self.inner.borrow().scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depth() == 0
    }
}

/// Owns one entry on a [`ModalStack`].  The entry is removed on drop.
#[derive(Debug)]
pub struct ScopeGuard {
    stack: Rc<RefCell<StackInner>>,
    id: u64,
    name: &'static str,
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        let mut inner = self.stack.borrow_mut();
        match inner.scopes.iter().rposition(|(id, _)| *id == self.id) {
            Some(pos) => {
                if pos + 1 != inner.scopes.len() {
                    warn!("input scope {} released out of order", self.name);
                }
                inner.scopes.remove(pos);
                debug!("pop input scope {} (depth {})", self.name, inner.scopes.len());
            }
            None => warn!("input scope {} already released", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drop_restores_depth() {
        let stack = ModalStack::new();
        {
            let _g = stack.push("picker");
            assert_eq!(stack.depth(), 1);
            assert_eq!(stack.top(), Some("picker"));
        }
        assert!(stack.is_empty());
    }

    #[test]
    fn nested_scopes_pop_in_order() {
        let stack = ModalStack::new();
        let outer = stack.push("picker");
        let inner = stack.push("confirm");
        assert_eq!(stack.top(), Some("confirm"));
        drop(inner);
        assert_eq!(stack.top(), Some("picker"));
        drop(outer);
        assert_eq!(stack.top(), None);
    }

    #[test]
    fn out_of_order_release_removes_the_right_scope() {
        let stack = ModalStack::new();
        let outer = stack.push("picker");
        let inner = stack.push("confirm");
        drop(outer);
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.top(), Some("confirm"));
        drop(inner);
        assert!(stack.is_empty());
    }

    #[test]
    fn guard_released_on_error_path() {
        fn host_call() -> Result<(), &'static str> {
            Err("host failure")
        }
        fn fails(stack: &ModalStack) -> Result<(), &'static str> {
            let _g = stack.push("picker");
            host_call()?;
            Ok(())
        }
        let stack = ModalStack::new();
        assert!(fails(&stack).is_err());
        assert!(stack.is_empty());
    }

    #[test]
    fn clones_share_the_stack() {
        let stack = ModalStack::new();
        let other = stack.clone();
        let _g = stack.push("picker");
        assert_eq!(other.top(), Some("picker"));
    }
}
