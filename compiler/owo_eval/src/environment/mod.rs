//! Name scopes.
//!
//! Scopes form a chain: each call frame and each closure capture is an
//! [`Environment`] pointing at the scope it was created inside. The chain
//! is shared through [`SharedEnv`] handles, which is what lets a closure
//! mutate a binding its defining scope still owns.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::value::Value;


/// One scope: its bindings plus the optional enclosing scope.
#[derive(Debug, Default)]
pub struct Environment {
    store: FxHashMap<Rc<str>, Value>,
    outer: Option<SharedEnv>,
}

/// A counted handle to an interior-mutable [`Environment`].
///
/// Closures keep their defining scope alive through this handle, so a
/// scope routinely outlives the call frame that created it. The runtime
/// is single-threaded, hence `Rc<RefCell<_>>` rather than anything
/// heavier.
#[derive(Clone, Debug, Default)]
#[repr(transparent)]
pub struct SharedEnv(Rc<RefCell<Environment>>);

impl SharedEnv {
    /// A fresh outermost scope.
    pub fn new() -> Self {
        SharedEnv::default()
    }

    /// A fresh innermost scope enclosing `outer`.
    pub fn enclosed(outer: &SharedEnv) -> Self {
        SharedEnv(Rc::new(RefCell::new(Environment {
            store: FxHashMap::default(),
            outer: Some(outer.clone()),
        })))
    }

    /// Creates or replaces `name` in this scope, never in an outer one.
    pub fn define(&self, name: impl Into<Rc<str>>, value: Value) {
        self.0.borrow_mut().store.insert(name.into(), value);
    }

    /// Looks `name` up in this scope, then outward through the chain.
    pub fn get(&self, name: &str) -> Option<Value> {
        let env = self.0.borrow();
        if let Some(value) = env.store.get(name) {
            return Some(value.clone());
        }
        env.outer.as_ref().and_then(|outer| outer.get(name))
    }

    /// Overwrites `name` in the scope where lookup finds it. Returns
    /// `false` when no scope in the chain knows the name; nothing is
    /// created in that case.
    #[must_use]
    pub fn assign(&self, name: &str, value: Value) -> bool {
        let mut env = self.0.borrow_mut();
        if let Some(slot) = env.store.get_mut(name) {
            *slot = value;
            return true;
        }
        match &env.outer {
            Some(outer) => outer.assign(name, value),
            None => false,
        }
    }
}
