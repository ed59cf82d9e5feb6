use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::Result;
use crate::task::{Capacity, Task, TaskList};

pub const DEFAULT_MAX_DAYS: usize = 100;

/// Built-in tasks as (fee, days), used when no task file is given.
const DEFAULT_TASKS: [(u32, u32); 16] = [
    (130, 9),
    (150, 12),
    (190, 20),
    (190, 23),
    (230, 27),
    (290, 33),
    (330, 31),
    (70, 9),
    (330, 30),
    (110, 9),
    (90, 6),
    (310, 34),
    (330, 34),
    (190, 22),
    (230, 25),
    (170, 13),
];

pub fn default_tasks() -> TaskList {
    TaskList::from_tasks(DEFAULT_TASKS.iter().map(|&(fee, days)| Task::new(fee, days)))
}

/// A task as written in a task file. Signed so that negative values reach
/// validation instead of failing deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTask {
    pub fee: i64,
    pub days: i64,
}

/// On-disk problem description. The sentinel is implicit and never written.
///
/// ```json
/// { "max_days": 50, "tasks": [{ "fee": 60, "days": 10 }] }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskFile {
    #[serde(default)]
    pub max_days: Option<i64>,
    pub tasks: Vec<RawTask>,
}

impl TaskFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading tasks from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Validates every entry. Task numbering starts at 1, after the sentinel.
    pub fn task_list(&self) -> Result<TaskList> {
        let tasks = self
            .tasks
            .iter()
            .enumerate()
            .map(|(i, raw)| Task::from_raw(i + 1, raw.fee, raw.days))
            .collect::<Result<Vec<_>>>()?;
        Ok(TaskList::from_tasks(tasks))
    }

    /// The command line wins over the file, the file over the default.
    pub fn capacity(&self, override_days: Option<i64>) -> Result<Capacity> {
        resolve_capacity(override_days.or(self.max_days))
    }
}

pub fn resolve_capacity(days: Option<i64>) -> Result<Capacity> {
    match days {
        Some(days) => Capacity::try_from(days),
        None => Ok(Capacity::new(DEFAULT_MAX_DAYS)),
    }
}
