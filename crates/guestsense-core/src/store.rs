//! Process-local stores for feedback and synthesis results
//!
//! Each collection sits behind its own lock so readers of one store never
//! wait on writers of another. Guards are never held across an await point:
//! callers take a lock, copy in or out, and release.

use crate::types::{AITextDraft, Insight, RawFeedback, SynthesisOutput, TaskStatus, TaskTicket};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} store is corrupted: a writer panicked while holding its lock")]
    Poisoned(&'static str),
}

/// Item counts per collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub feedback: usize,
    pub tasks: usize,
    pub open_tasks: usize,
    pub drafts: usize,
    pub insights: usize,
}

/// Id-keyed map that lists values in first-insertion order
#[derive(Debug)]
struct Keyed<T> {
    order: Vec<String>,
    items: HashMap<String, T>,
}

impl<T: Clone> Keyed<T> {
    fn new() -> Self {
        Self {
            order: Vec::new(),
            items: HashMap::new(),
        }
    }

    /// Last write wins; an overwritten key keeps its original position
    fn insert(&mut self, key: String, value: T) {
        if self.items.insert(key.clone(), value).is_none() {
            self.order.push(key);
        }
    }

    fn get(&self, key: &str) -> Option<&T> {
        self.items.get(key)
    }

    fn values(&self) -> Vec<T> {
        self.order
            .iter()
            .filter_map(|key| self.items.get(key))
            .cloned()
            .collect()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

pub struct FeedbackStore {
    raw_feedback: RwLock<Keyed<RawFeedback>>,
    tasks: RwLock<Vec<TaskTicket>>,
    drafts: RwLock<Vec<AITextDraft>>,
    insights: RwLock<Keyed<Insight>>,
}

fn read<'a, T>(
    lock: &'a RwLock<T>,
    name: &'static str,
) -> Result<RwLockReadGuard<'a, T>, StoreError> {
    lock.read().map_err(|_| StoreError::Poisoned(name))
}

fn write<'a, T>(
    lock: &'a RwLock<T>,
    name: &'static str,
) -> Result<RwLockWriteGuard<'a, T>, StoreError> {
    lock.write().map_err(|_| StoreError::Poisoned(name))
}

impl FeedbackStore {
    pub fn new() -> Self {
        Self {
            raw_feedback: RwLock::new(Keyed::new()),
            tasks: RwLock::new(Vec::new()),
            drafts: RwLock::new(Vec::new()),
            insights: RwLock::new(Keyed::new()),
        }
    }

    /// Store a batch of feedback, assigning a fresh id to any item without one.
    ///
    /// Ids are written back into `batch` so callers see the effective ids.
    pub fn upsert_feedback(&self, batch: &mut [RawFeedback]) -> Result<(), StoreError> {
        let mut store = write(&self.raw_feedback, "raw_feedback")?;
        for item in batch.iter_mut() {
            let id = item.ensure_id().to_string();
            store.insert(id, item.clone());
        }
        Ok(())
    }

    pub fn get_feedback(&self, id: &str) -> Result<Option<RawFeedback>, StoreError> {
        Ok(read(&self.raw_feedback, "raw_feedback")?.get(id).cloned())
    }

    pub fn list_feedback(&self) -> Result<Vec<RawFeedback>, StoreError> {
        Ok(read(&self.raw_feedback, "raw_feedback")?.values())
    }

    pub fn append_tasks(&self, tasks: Vec<TaskTicket>) -> Result<(), StoreError> {
        write(&self.tasks, "tasks")?.extend(tasks);
        Ok(())
    }

    /// Tasks that are not yet complete, in store order
    pub fn list_open_tasks(&self) -> Result<Vec<TaskTicket>, StoreError> {
        Ok(read(&self.tasks, "tasks")?
            .iter()
            .filter(|task| !task.status.is_complete())
            .cloned()
            .collect())
    }

    pub fn list_tasks(&self) -> Result<Vec<TaskTicket>, StoreError> {
        Ok(read(&self.tasks, "tasks")?.clone())
    }

    /// Change a task's status in place. Returns the updated task, or `None` if unknown.
    pub fn update_task_status(
        &self,
        task_id: &str,
        status: TaskStatus,
    ) -> Result<Option<TaskTicket>, StoreError> {
        let mut tasks = write(&self.tasks, "tasks")?;
        Ok(tasks
            .iter_mut()
            .find(|task| task.task_id == task_id)
            .map(|task| {
                task.status = status;
                task.clone()
            }))
    }

    pub fn append_drafts(&self, drafts: Vec<AITextDraft>) -> Result<(), StoreError> {
        write(&self.drafts, "drafts")?.extend(drafts);
        Ok(())
    }

    pub fn list_drafts(&self) -> Result<Vec<AITextDraft>, StoreError> {
        Ok(read(&self.drafts, "drafts")?.clone())
    }

    /// Insert insights keyed by their (already assigned) id
    pub fn insert_insights(&self, insights: Vec<Insight>) -> Result<(), StoreError> {
        let mut store = write(&self.insights, "insights")?;
        for insight in insights {
            store.insert(insight.id.clone(), insight);
        }
        Ok(())
    }

    pub fn list_insights(&self) -> Result<Vec<Insight>, StoreError> {
        Ok(read(&self.insights, "insights")?.values())
    }

    /// Store the tasks, drafts and insights of one synthesis pass.
    ///
    /// All three locks are taken before anything is written, so a corrupted
    /// store leaves the others untouched. Lock order matches `stats`.
    pub fn record_synthesis(&self, output: &SynthesisOutput) -> Result<(), StoreError> {
        let mut tasks = write(&self.tasks, "tasks")?;
        let mut drafts = write(&self.drafts, "drafts")?;
        let mut insights = write(&self.insights, "insights")?;

        tasks.extend(output.tasks_to_create.iter().cloned());
        drafts.extend(output.drafted_responses.iter().cloned());
        for insight in &output.insights {
            insights.insert(insight.id.clone(), insight.clone());
        }
        Ok(())
    }

    pub fn stats(&self) -> Result<StoreStats, StoreError> {
        let tasks = read(&self.tasks, "tasks")?;
        Ok(StoreStats {
            feedback: read(&self.raw_feedback, "raw_feedback")?.len(),
            tasks: tasks.len(),
            open_tasks: tasks.iter().filter(|t| !t.status.is_complete()).count(),
            drafts: read(&self.drafts, "drafts")?.len(),
            insights: read(&self.insights, "insights")?.len(),
        })
    }
}

impl Default for FeedbackStore {
    fn default() -> Self {
        Self::new()
    }
}
