use thiserror::Error;

/// Everything that can go wrong before the solver runs. Once a `TaskList`
/// and a `Capacity` exist the computation itself cannot fail.
#[derive(Debug, Error)]
pub enum KnapsackError {
    #[error("invalid input: task list is empty")]
    EmptyTaskList,

    #[error("invalid input: task 0 must be the zero fee, zero cost sentinel (got fee {fee}, cost {cost})")]
    MissingSentinel { fee: u32, cost: u32 },

    #[error("invalid input: task {index} has negative fee {fee}")]
    NegativeFee { index: usize, fee: i64 },

    #[error("invalid input: task {index} has negative cost {cost}")]
    NegativeCost { index: usize, cost: i64 },

    #[error("invalid input: capacity {0} is negative")]
    NegativeCapacity(i64),

    #[error("invalid input: value {value} out of range for {what}")]
    OutOfRange { what: &'static str, value: i64 },

    #[error("parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl KnapsackError {
    /// True for the input validation failures raised at the boundary.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            KnapsackError::EmptyTaskList
                | KnapsackError::MissingSentinel { .. }
                | KnapsackError::NegativeFee { .. }
                | KnapsackError::NegativeCost { .. }
                | KnapsackError::NegativeCapacity(_)
                | KnapsackError::OutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, KnapsackError>;
