use log::debug;

use crate::error::{KnapsackError, Result};
use crate::task::{Capacity, TaskList};

/// Largest table `compute` agrees to allocate: 2^27 cells, 1 GiB of `u64`.
pub const MAX_TABLE_CELLS: usize = 1 << 27;

/// Best achievable fee per (task prefix, day budget).
///
/// Stored row-major: one row per task (sentinel included), `max_days + 1`
/// columns. Cell `(i, d)` is the best total fee using only tasks `0..=i`
/// within `d` days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueTable {
    task_count: usize,
    width: usize,
    cells: Vec<u64>,
}

impl ValueTable {
    fn zeroed(task_count: usize, max_days: Capacity) -> Result<Self> {
        let cells = cell_count(task_count, max_days)?;
        Ok(ValueTable {
            task_count,
            width: max_days.days() + 1,
            cells: vec![0; cells],
        })
    }

    /// Number of rows, the sentinel row included.
    pub fn task_count(&self) -> usize {
        self.task_count
    }

    pub fn max_days(&self) -> usize {
        self.width - 1
    }

    pub fn get(&self, task: usize, days: usize) -> Option<u64> {
        if task < self.task_count && days < self.width {
            Some(self.cells[task * self.width + days])
        } else {
            None
        }
    }

    pub fn row(&self, task: usize) -> Option<&[u64]> {
        if task < self.task_count {
            let start = task * self.width;
            Some(&self.cells[start..start + self.width])
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u64]> {
        self.cells.chunks(self.width)
    }

    /// The answer: the bottom right cell, every task within the full budget.
    pub fn optimal_value(&self) -> u64 {
        // task_count >= 1 and width >= 1 for every table built by `compute`
        self.cells.last().copied().unwrap_or(0)
    }
}

/// Cells needed for `task_count` rows of `max_days + 1` columns, refused
/// past [`MAX_TABLE_CELLS`].
fn cell_count(task_count: usize, max_days: Capacity) -> Result<usize> {
    max_days
        .days()
        .checked_add(1)
        .and_then(|width| width.checked_mul(task_count))
        .filter(|&cells| cells <= MAX_TABLE_CELLS)
        .ok_or_else(|| KnapsackError::OutOfRange {
            what: "table size",
            value: i64::try_from(max_days.days()).unwrap_or(i64::MAX),
        })
}

/// Fills the value table bottom-up.
///
/// Row 0 belongs to the sentinel and stays zero. Each following row only
/// reads the row above it. The only failure is a table larger than
/// [`MAX_TABLE_CELLS`], reported before anything is allocated.
pub fn compute(tasks: &TaskList, max_days: Capacity) -> Result<ValueTable> {
    let mut table = ValueTable::zeroed(tasks.len(), max_days)?;
    let width = table.width;

    for (index, task) in tasks.iter().enumerate().skip(1) {
        let (done, rest) = table.cells.split_at_mut(index * width);
        let previous = &done[(index - 1) * width..];
        let current = &mut rest[..width];
        let cost = task.cost as usize;

        for days in 0..width {
            current[days] = if cost > days {
                // unaffordable at this budget: carry the previous prefix forward
                previous[days]
            } else {
                // exclusion wins ties
                previous[days].max(previous[days - cost] + u64::from(task.fee))
            };
        }
    }

    debug!(
        "filled value table: {} tasks x {} day budgets, optimal value {}",
        table.task_count,
        width,
        table.optimal_value()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Task;

    fn example_tasks() -> TaskList {
        TaskList::from_tasks([Task::new(60, 10), Task::new(100, 20), Task::new(120, 30)])
    }

    #[test]
    fn test_example() {
        let table = compute(&example_tasks(), Capacity::new(50)).unwrap();
        assert_eq!(table.task_count(), 4);
        assert_eq!(table.max_days(), 50);
        assert_eq!(table.get(3, 50), Some(220));
        assert_eq!(table.optimal_value(), 220);
        // only the first task fits into 10..20 days
        assert_eq!(table.get(3, 15), Some(60));
        assert_eq!(table.get(1, 50), Some(60));
        assert_eq!(table.get(2, 30), Some(160));
    }

    #[test]
    fn test_sentinel_row_is_zero() {
        let table = compute(&example_tasks(), Capacity::new(20)).unwrap();
        assert!(table.row(0).unwrap().iter().all(|&v| v == 0));

        let only_sentinel = compute(&TaskList::from_tasks([]), Capacity::new(7)).unwrap();
        assert_eq!(only_sentinel.task_count(), 1);
        assert_eq!(only_sentinel.rows().count(), 1);
        assert_eq!(only_sentinel.row(0).unwrap(), &[0; 8]);
    }

    #[test]
    fn test_zero_capacity() {
        let table = compute(&example_tasks(), Capacity::new(0)).unwrap();
        assert_eq!(table.max_days(), 0);
        for task in 0..table.task_count() {
            assert_eq!(table.get(task, 0), Some(0));
        }
    }

    #[test]
    fn test_zero_cost_task_is_free() {
        let tasks = TaskList::from_tasks([Task::new(40, 0), Task::new(10, 3)]);
        let table = compute(&tasks, Capacity::new(0)).unwrap();
        assert_eq!(table.optimal_value(), 40);
    }

    #[test]
    fn test_unaffordable_task() {
        let tasks = TaskList::from_tasks([Task::new(500, 999)]);
        let table = compute(&tasks, Capacity::new(10)).unwrap();
        assert_eq!(table.get(1, 10), Some(0));
    }

    #[test]
    fn test_out_of_bounds_access() {
        let table = compute(&example_tasks(), Capacity::new(5)).unwrap();
        assert_eq!(table.get(4, 0), None);
        assert_eq!(table.get(0, 6), None);
        assert!(table.row(4).is_none());
    }

    #[test]
    fn test_oversized_table_is_rejected() {
        let tasks = TaskList::from_tasks([Task::new(1, 1), Task::new(2, 2)]);
        let err = compute(&tasks, Capacity::try_from(i64::MAX / 2).unwrap()).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(matches!(
            err,
            KnapsackError::OutOfRange {
                what: "table size",
                ..
            }
        ));

        // width overflows before the multiplication does
        assert!(compute(&tasks, Capacity::new(usize::MAX)).is_err());

        // 3 rows x (MAX_TABLE_CELLS / 3) columns fits, one more column does not
        let fits = Capacity::new(MAX_TABLE_CELLS / 3 - 1);
        assert_eq!(cell_count(3, fits).unwrap(), 3 * (MAX_TABLE_CELLS / 3));
        assert!(cell_count(3, Capacity::new(MAX_TABLE_CELLS / 3 + 1)).is_err());
    }
}
