//! # Scheduler
//!
//! A virtual-clock timer queue. Every timer in Folio is a task scheduled
//! here, addressed by a [`TaskHandle`] that can be cancelled at any time.
//!
//! Time never comes from the wall clock: the caller passes `now_ms` into
//! [`Scheduler::pop_due`]. The TUI loop feeds it real elapsed time, tests
//! feed it whatever they like.
//!
//! ```text
//! schedule_at(1200, Typewriter) ──┐
//! schedule_at(  28, Counters)   ──┼──► queue ordered by (due_ms, id)
//! schedule_at(  28, Radar)      ──┘
//!
//! pop_due(30) → Counters, Radar     (FIFO among equal due times)
//! pop_due(30) → None
//! ```

use std::collections::{BTreeMap, HashMap};

/// Opaque handle to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

/// A task that came due.
#[derive(Debug, PartialEq)]
pub struct DueTask<T> {
    pub handle: TaskHandle,
    /// When the task was scheduled to run (may be earlier than `now`).
    pub due_ms: u64,
    pub task: T,
}

#[derive(Debug)]
pub struct Scheduler<T> {
    next_id: u64,
    queue: BTreeMap<(u64, u64), T>,
    due_by_id: HashMap<u64, u64>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            queue: BTreeMap::new(),
            due_by_id: HashMap::new(),
        }
    }

    /// Schedule `task` to run once at `due_ms`.
    pub fn schedule_at(&mut self, due_ms: u64, task: T) -> TaskHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.queue.insert((due_ms, id), task);
        self.due_by_id.insert(id, due_ms);
        TaskHandle(id)
    }

    /// Cancel a pending task. Returns false if it already ran or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        match self.due_by_id.remove(&handle.0) {
            Some(due_ms) => self.queue.remove(&(due_ms, handle.0)).is_some(),
            None => false,
        }
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.due_by_id.contains_key(&handle.0)
    }

    /// Remove and return the earliest task due at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<DueTask<T>> {
        let (&(due_ms, id), _) = self.queue.first_key_value()?;
        if due_ms > now_ms {
            return None;
        }
        let task = self.queue.remove(&(due_ms, id))?;
        self.due_by_id.remove(&id);
        Some(DueTask {
            handle: TaskHandle(id),
            due_ms,
            task,
        })
    }

    /// Due time of the earliest pending task.
    pub fn next_due(&self) -> Option<u64> {
        self.queue.keys().next().map(|&(due_ms, _)| due_ms)
    }

    /// Drop every pending task.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.due_by_id.clear();
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
