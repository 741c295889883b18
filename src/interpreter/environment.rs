use std::collections::HashMap;

use super::Value;

/// A lexically scoped mapping from identifier to value. Logically
/// immutable: `define`, `assign`, `push_scope` and `pop_scope` all return a
/// new `Environment` rather than mutating `self`, so the evaluator can
/// thread it through statement execution as an ordinary value.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    frames: Vec<HashMap<String, Value>>,
}

impl Environment {
    /// A fresh environment with a single (global) frame.
    pub fn new() -> Self {
        Self {
            frames: vec![HashMap::new()],
        }
    }

    /// Push a new, empty frame for a block's scope.
    pub fn push_scope(&self) -> Self {
        let mut next = self.clone();
        next.frames.push(HashMap::new());
        next
    }

    /// Pop the innermost frame, discarding any bindings made within it.
    pub fn pop_scope(&self) -> Self {
        let mut next = self.clone();
        next.frames.pop();
        next
    }

    /// Bind `name` to `value` in the innermost frame.
    pub fn define(&self, name: &str, value: Value) -> Self {
        let mut next = self.clone();
        next.frames
            .last_mut()
            .expect("environment always has at least one frame")
            .insert(name.to_owned(), value);
        next
    }

    /// Look up `name`, searching from the innermost frame outward.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.frames.iter().rev().find_map(|frame| frame.get(name).cloned())
    }

    /// Rebind an already-defined `name` in the innermost frame that
    /// declares it. Returns `None` if `name` is undefined anywhere.
    pub fn assign(&self, name: &str, value: Value) -> Option<Self> {
        let mut next = self.clone();
        for frame in next.frames.iter_mut().rev() {
            if frame.contains_key(name) {
                frame.insert(name.to_owned(), value);
                return Some(next);
            }
        }
        None
    }
}
