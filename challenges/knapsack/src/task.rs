use serde::Serialize;

use crate::error::{KnapsackError, Result};

/// A candidate task: the fee it pays and the number of days it takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Task {
    pub fee: u32,
    #[serde(rename = "days")]
    pub cost: u32,
}

impl Task {
    /// Occupies index 0 of every task list: "no task considered yet".
    pub const SENTINEL: Task = Task { fee: 0, cost: 0 };

    pub const fn new(fee: u32, cost: u32) -> Self {
        Task { fee, cost }
    }

    /// Builds a task from unchecked signed input. `index` is only used for
    /// the error message.
    pub fn from_raw(index: usize, fee: i64, cost: i64) -> Result<Self> {
        if fee < 0 {
            return Err(KnapsackError::NegativeFee { index, fee });
        }
        if cost < 0 {
            return Err(KnapsackError::NegativeCost { index, cost });
        }
        let fee = u32::try_from(fee).map_err(|_| KnapsackError::OutOfRange {
            what: "fee",
            value: fee,
        })?;
        let cost = u32::try_from(cost).map_err(|_| KnapsackError::OutOfRange {
            what: "cost",
            value: cost,
        })?;
        Ok(Task { fee, cost })
    }

    pub fn is_sentinel(&self) -> bool {
        *self == Task::SENTINEL
    }
}

/// Ordered, immutable list of tasks. Index 0 always holds the sentinel, so
/// `len()` is the number of real tasks plus one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TaskList(Vec<Task>);

impl TaskList {
    /// Accepts a list that already carries the sentinel at index 0.
    pub fn new(tasks: Vec<Task>) -> Result<Self> {
        match tasks.first() {
            None => Err(KnapsackError::EmptyTaskList),
            Some(first) if !first.is_sentinel() => Err(KnapsackError::MissingSentinel {
                fee: first.fee,
                cost: first.cost,
            }),
            Some(_) => Ok(TaskList(tasks)),
        }
    }

    /// Prepends the sentinel to the given real tasks.
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut all = vec![Task::SENTINEL];
        all.extend(tasks);
        TaskList(all)
    }

    /// Task count including the sentinel.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: the sentinel is there.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.0.get(index)
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Maximum number of days available for the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Capacity(usize);

impl Capacity {
    pub const fn new(days: usize) -> Self {
        Capacity(days)
    }

    pub const fn days(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for Capacity {
    type Error = KnapsackError;

    fn try_from(days: i64) -> Result<Self> {
        if days < 0 {
            return Err(KnapsackError::NegativeCapacity(days));
        }
        usize::try_from(days)
            .map(Capacity)
            .map_err(|_| KnapsackError::OutOfRange {
                what: "capacity",
                value: days,
            })
    }
}
