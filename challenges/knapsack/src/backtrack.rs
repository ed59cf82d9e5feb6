use log::debug;

use crate::solver::ValueTable;
use crate::task::{Capacity, Task, TaskList};

/// Which tasks made it into the solution, indexed like the task list.
/// Index 0 (the sentinel) is never selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionVector(Vec<bool>);

impl SelectionVector {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    /// Indices of the selected tasks in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, &chosen)| chosen.then_some(i))
    }

    /// Selected tasks paired with their index.
    pub fn chosen<'a>(&'a self, tasks: &'a TaskList) -> impl Iterator<Item = (usize, &'a Task)> + 'a {
        self.indices()
            .filter_map(move |i| tasks.get(i).map(|task| (i, task)))
    }

    pub fn total_fee(&self, tasks: &TaskList) -> u64 {
        self.chosen(tasks).map(|(_, t)| u64::from(t.fee)).sum()
    }

    pub fn total_cost(&self, tasks: &TaskList) -> u64 {
        self.chosen(tasks).map(|(_, t)| u64::from(t.cost)).sum()
    }
}

/// Recovers the chosen tasks from a table built by [`crate::solver::compute`]
/// for the same tasks and capacity.
///
/// Walks the tasks from last to first. A task is taken when its fee added to
/// the previous row, at the budget left after paying for it, reproduces the
/// current cell. The higher index wins when several subsets are optimal.
/// A mismatched table gives a meaningless selection but never panics.
pub fn backtrack(table: &ValueTable, tasks: &TaskList, max_days: Capacity) -> SelectionVector {
    let mut chosen = vec![false; tasks.len()];
    let mut days_left = max_days.days();

    for (index, task) in tasks.iter().enumerate().skip(1).rev() {
        let cost = task.cost as usize;
        // a task costing more than what is left can't have been taken
        if cost > days_left {
            continue;
        }

        let (Some(max), Some(previous)) = (
            table.get(index, days_left),
            table.get(index - 1, days_left - cost),
        ) else {
            continue;
        };

        if previous + u64::from(task.fee) == max {
            debug!("task {} selected (fee {}, {} days)", index, task.fee, task.cost);
            chosen[index] = true;
            days_left -= cost;
        }
    }

    SelectionVector(chosen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::compute;

    fn run(tasks: &TaskList, days: usize) -> SelectionVector {
        let capacity = Capacity::new(days);
        backtrack(&compute(tasks, capacity).unwrap(), tasks, capacity)
    }

    #[test]
    fn test_example() {
        let tasks =
            TaskList::from_tasks([Task::new(60, 10), Task::new(100, 20), Task::new(120, 30)]);
        let selection = run(&tasks, 50);
        assert_eq!(selection.as_slice(), &[false, false, true, true]);
        assert_eq!(selection.indices().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(selection.total_fee(&tasks), 220);
        assert_eq!(selection.total_cost(&tasks), 50);
    }

    #[test]
    fn test_unaffordable_task_is_skipped() {
        let tasks = TaskList::from_tasks([Task::new(500, 999)]);
        let selection = run(&tasks, 10);
        assert_eq!(selection.as_slice(), &[false, false]);
    }

    #[test]
    fn test_zero_capacity_selects_nothing() {
        let tasks = TaskList::from_tasks([Task::new(5, 1), Task::new(7, 2)]);
        let selection = run(&tasks, 0);
        assert!(selection.as_slice().iter().all(|&c| !c));
    }

    #[test]
    fn test_sentinel_only() {
        let tasks = TaskList::from_tasks([]);
        let selection = run(&tasks, 12);
        assert_eq!(selection.as_slice(), &[false]);
        assert_eq!(selection.total_fee(&tasks), 0);
    }

    #[test]
    fn test_tie_goes_to_higher_index() {
        // both tasks are worth the same and only one fits
        let tasks = TaskList::from_tasks([Task::new(50, 5), Task::new(50, 5)]);
        let selection = run(&tasks, 7);
        assert_eq!(selection.as_slice(), &[false, false, true]);
    }

    #[test]
    fn test_mismatched_table_does_not_panic() {
        let small = TaskList::from_tasks([Task::new(1, 1)]);
        let table = compute(&small, Capacity::new(2)).unwrap();

        let large = TaskList::from_tasks([Task::new(3, 1), Task::new(4, 2), Task::new(9, 9)]);
        let selection = backtrack(&table, &large, Capacity::new(40));
        assert_eq!(selection.len(), large.len());
        assert!(!selection.is_selected(0));
    }
}
