use log::info;

use crate::backtrack::{SelectionVector, backtrack};
use crate::error::Result;
use crate::solver::{ValueTable, compute};
use crate::task::{Capacity, Task, TaskList};

/// A solved instance: the inputs together with the finished table and the
/// selection recovered from it. Everything a report needs.
#[derive(Debug, Clone)]
pub struct Plan {
    tasks: TaskList,
    capacity: Capacity,
    table: ValueTable,
    selection: SelectionVector,
}

impl Plan {
    pub fn solve(tasks: TaskList, capacity: Capacity) -> Result<Self> {
        let table = compute(&tasks, capacity)?;
        let selection = backtrack(&table, &tasks, capacity);
        info!(
            "planned {} of {} tasks within {} days for a fee of {}",
            selection.indices().count(),
            tasks.len() - 1,
            capacity.days(),
            table.optimal_value()
        );
        Ok(Plan {
            tasks,
            capacity,
            table,
            selection,
        })
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    pub fn table(&self) -> &ValueTable {
        &self.table
    }

    pub fn selection(&self) -> &SelectionVector {
        &self.selection
    }

    pub fn optimal_value(&self) -> u64 {
        self.table.optimal_value()
    }

    pub fn selected(&self) -> impl Iterator<Item = (usize, &Task)> + '_ {
        self.selection.chosen(&self.tasks)
    }

    pub fn total_fee(&self) -> u64 {
        self.selection.total_fee(&self.tasks)
    }

    pub fn total_cost(&self) -> u64 {
        self.selection.total_cost(&self.tasks)
    }
}
