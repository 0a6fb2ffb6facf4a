#![forbid(unsafe_code)]

//! Snapshot undo/redo history.
//!
//! [`History`] keeps the present state plus the states before and after it.
//! Snapshots are held as [`Arc`]s, so pushing the same snapshot twice is
//! detected by pointer identity and ignored.
//!
//! ```text
//! set(s3)
//! ┌──────────────────────────────────────────────┐
//! │ past:    [s0, s1, s2]       (oldest first)   │
//! │ present: s3                                  │
//! │ future:  []                                  │
//! └──────────────────────────────────────────────┘
//!
//! undo() x2
//! ┌──────────────────────────────────────────────┐
//! │ past:    [s0]                                │
//! │ present: s1                                  │
//! │ future:  [s2, s3]           (nearest first)  │
//! └──────────────────────────────────────────────┘
//!
//! set(s4): new branch, clears future
//! ┌──────────────────────────────────────────────┐
//! │ past:    [s0, s1]                            │
//! │ present: s4                                  │
//! │ future:  []                                  │
//! └──────────────────────────────────────────────┘
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

/// Configuration for the history.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HistoryConfig {
    /// Maximum number of past snapshots. Oldest are evicted first.
    pub max_depth: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { max_depth: 100 }
    }
}

impl HistoryConfig {
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// No depth limit.
    #[must_use]
    pub fn unlimited() -> Self {
        Self {
            max_depth: usize::MAX,
        }
    }
}

/// Undo/redo history over snapshots of `T`.
pub struct History<T> {
    past: VecDeque<Arc<T>>,
    present: Arc<T>,
    future: VecDeque<Arc<T>>,
    config: HistoryConfig,
}

impl<T> fmt::Debug for History<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("History")
            .field("past", &self.past.len())
            .field("future", &self.future.len())
            .field("config", &self.config)
            .finish()
    }
}

impl<T> Clone for History<T> {
    fn clone(&self) -> Self {
        Self {
            past: self.past.clone(),
            present: Arc::clone(&self.present),
            future: self.future.clone(),
            config: self.config.clone(),
        }
    }
}

impl<T> History<T> {
    /// Start a history at `present` with the default configuration.
    pub fn new(present: T) -> Self {
        Self::with_config(present, HistoryConfig::default())
    }

    pub fn with_config(present: T, config: HistoryConfig) -> Self {
        Self {
            past: VecDeque::new(),
            present: Arc::new(present),
            future: VecDeque::new(),
            config,
        }
    }

    /// Current snapshot.
    pub fn present(&self) -> &Arc<T> {
        &self.present
    }

    /// Make `next` the present.
    ///
    /// Returns `false` without changes when `next` is the current present.
    /// Otherwise the old present moves to the past and the future is dropped.
    pub fn set(&mut self, next: Arc<T>) -> bool {
        if Arc::ptr_eq(&self.present, &next) {
            return false;
        }
        let previous = std::mem::replace(&mut self.present, next);
        self.past.push_back(previous);
        self.future.clear();
        self.enforce_depth();
        true
    }

    /// Step back one snapshot. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop_back() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, previous);
        self.future.push_front(current);
        true
    }

    /// Step forward one snapshot. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop_front() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, next);
        self.past.push_back(current);
        self.enforce_depth();
        true
    }

    /// Replace the present and forget both stacks.
    pub fn reset(&mut self, present: Arc<T>) {
        self.past.clear();
        self.future.clear();
        self.present = present;
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    /// Past snapshots, oldest first.
    pub fn past(&self) -> impl Iterator<Item = &Arc<T>> {
        self.past.iter()
    }

    /// Future snapshots, nearest first.
    pub fn future(&self) -> impl Iterator<Item = &Arc<T>> {
        self.future.iter()
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    fn enforce_depth(&mut self) {
        while self.past.len() > self.config.max_depth {
            self.past.pop_front();
        }
    }
}
