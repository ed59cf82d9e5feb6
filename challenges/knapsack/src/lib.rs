use std::io::BufRead;
use std::str::FromStr;

pub mod backtrack;
pub mod config;
pub mod error;
pub mod plan;
pub mod report;
pub mod solver;
pub mod task;

pub use backtrack::{SelectionVector, backtrack};
pub use error::{KnapsackError, Result};
pub use plan::Plan;
pub use solver::{ValueTable, compute};
pub use task::{Capacity, Task, TaskList};

/// Line oriented input reader.
pub struct Scanner {
    reader: Box<dyn BufRead>,
}

impl Scanner {
    pub fn new(reader: impl BufRead + 'static) -> Self {
        Self {
            reader: Box::new(reader),
        }
    }

    /// Next line, trimmed. Empty once the input is exhausted.
    pub fn next_line(&mut self) -> Result<String> {
        let mut input = String::new();
        self.reader.read_line(&mut input)?;
        Ok(input.trim().to_string())
    }

    /// All whitespace separated values of the next line.
    pub fn parse_vec<T: FromStr>(&mut self) -> Result<Vec<T>> {
        self.next_line()?
            .split_whitespace()
            .map(|s| {
                s.parse()
                    .map_err(|_| KnapsackError::Parse(format!("not a number: {:?}", s)))
            })
            .collect()
    }
}

/// Output writer (writes to memory buffer)
pub struct Writer(String);

impl Writer {
    pub fn new() -> Self {
        Self(String::new())
    }

    pub fn print<T: std::fmt::Display>(&mut self, value: T) {
        self.0.push_str(&value.to_string());
    }

    pub fn println<T: std::fmt::Display>(&mut self, value: T) {
        self.print(value);
        self.0.push('\n');
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

/// Solves one instance in the plain text format:
///
/// ```text
/// n max_days
/// fee_1 .. fee_n
/// days_1 .. days_n
/// ```
///
/// and writes the optimal fee followed by the chosen task numbers (1-based).
pub fn solve(input: &mut Scanner, out: &mut Writer) -> Result<()> {
    let header: Vec<i64> = input.parse_vec()?;
    let [n, max_days] = header[..] else {
        return Err(KnapsackError::Parse(
            "expected two initial inputs: n and max_days".to_string(),
        ));
    };
    let n = usize::try_from(n)
        .map_err(|_| KnapsackError::Parse(format!("invalid task count {}", n)))?;
    let capacity = Capacity::try_from(max_days)?;

    let fees: Vec<i64> = input.parse_vec()?;
    let days: Vec<i64> = input.parse_vec()?;
    if fees.len() != n || days.len() != n {
        return Err(KnapsackError::Parse(format!(
            "expected {} fees and {} days, got {} and {}",
            n,
            n,
            fees.len(),
            days.len()
        )));
    }

    let tasks = fees
        .iter()
        .zip(&days)
        .enumerate()
        .map(|(i, (&fee, &cost))| Task::from_raw(i + 1, fee, cost))
        .collect::<Result<Vec<_>>>()?;

    let plan = Plan::solve(TaskList::from_tasks(tasks), capacity)?;

    out.println(plan.optimal_value());
    let chosen = plan
        .selection()
        .indices()
        .map(|i| i.to_string())
        .collect::<Vec<_>>();
    out.println(chosen.join(" "));
    Ok(())
}

/// Fixture runner: every `<n>.in` in a directory is fed to a solve function
/// and its output compared, trimmed, with `<n>.out`.
pub mod testing {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::{Path, PathBuf};
    use std::time::{Duration, Instant};

    /// Where the bundled fixtures live, relative to the crate root.
    pub const FIXTURE_DIR: &str = "data/knapsack";

    pub fn fixture_dir() -> PathBuf {
        PathBuf::from(FIXTURE_DIR)
    }

    /// Result of one fixture.
    #[derive(Debug)]
    pub enum Outcome {
        Passed,
        Failed { expected: String, actual: String },
        Error(String),
    }

    #[derive(Debug)]
    pub struct CaseReport {
        pub num: usize,
        pub duration: Duration,
        pub outcome: Outcome,
    }

    /// Fixture numbers in a directory, ascending.
    pub fn discover_tests(test_dir: &Path) -> Vec<usize> {
        let mut test_numbers: Vec<usize> = fs::read_dir(test_dir)
            .into_iter()
            .flatten()
            .flatten()
            .filter_map(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .and_then(|name| name.strip_suffix(".in"))
                    .and_then(|num| num.parse().ok())
            })
            .collect();
        test_numbers.sort_unstable();
        test_numbers
    }

    pub fn run_test_case<F>(test_dir: &Path, num: usize, solve_fn: F) -> CaseReport
    where
        F: FnOnce(&mut Scanner, &mut Writer) -> Result<()>,
    {
        let read = |ext: &str| {
            let path = test_dir.join(format!("{}.{}", num, ext));
            fs::read_to_string(&path).map_err(|e| format!("{}: {}", path.display(), e))
        };
        let start = Instant::now();
        let outcome = match (read("in"), read("out")) {
            (Ok(input), Ok(expected)) => {
                let mut scanner = Scanner::new(Cursor::new(input));
                let mut writer = Writer::new();
                match solve_fn(&mut scanner, &mut writer) {
                    Ok(()) => {
                        let expected = expected.trim();
                        let actual = writer.as_str().trim();
                        if actual == expected {
                            Outcome::Passed
                        } else {
                            Outcome::Failed {
                                expected: expected.to_string(),
                                actual: actual.to_string(),
                            }
                        }
                    }
                    Err(e) => Outcome::Error(e.to_string()),
                }
            }
            (Err(e), _) | (_, Err(e)) => Outcome::Error(e),
        };
        CaseReport {
            num,
            duration: start.elapsed(),
            outcome,
        }
    }

    /// Runs every fixture in `test_dir`.
    pub fn run_cases<F>(test_dir: &Path, solve_fn: F) -> Vec<CaseReport>
    where
        F: Fn(&mut Scanner, &mut Writer) -> Result<()>,
    {
        discover_tests(test_dir)
            .into_iter()
            .map(|num| run_test_case(test_dir, num, &solve_fn))
            .collect()
    }

    /// Test harness entry: panics unless every fixture passes.
    pub fn verify_all_tests<F>(test_dir: &Path, solve_fn: F)
    where
        F: Fn(&mut Scanner, &mut Writer) -> Result<()>,
    {
        let reports = run_cases(test_dir, solve_fn);
        assert!(!reports.is_empty(), "No test cases found in {}", test_dir.display());
        for report in reports {
            match report.outcome {
                Outcome::Passed => {}
                Outcome::Failed { expected, actual } => panic!(
                    "Test case {} failed\nExpected:\n{}\nActual:\n{}",
                    report.num, expected, actual
                ),
                Outcome::Error(e) => panic!("Test case {} error: {}", report.num, e),
            }
        }
    }

    /// CLI entry: prints one line per fixture and a tally. True when all passed.
    pub fn run_all_tests<F>(test_dir: &Path, solve_fn: F) -> bool
    where
        F: Fn(&mut Scanner, &mut Writer) -> Result<()>,
    {
        let reports = run_cases(test_dir, solve_fn);
        if reports.is_empty() {
            println!("No test cases found in {}", test_dir.display());
            return true;
        }

        let mut failed = 0;
        for report in &reports {
            let secs = report.duration.as_secs_f64();
            match &report.outcome {
                Outcome::Passed => println!("✓ Test case {}: PASSED ({:.2}s)", report.num, secs),
                Outcome::Failed { expected, actual } => {
                    println!("✗ Test case {}: FAILED ({:.2}s)", report.num, secs);
                    println!("  Expected: {}", expected);
                    println!("  Actual:   {}", actual);
                    failed += 1;
                }
                Outcome::Error(e) => {
                    println!("✗ Test case {}: ERROR - {}", report.num, e);
                    failed += 1;
                }
            }
        }

        let total: Duration = reports.iter().map(|r| r.duration).sum();
        println!("\nResults: {} passed, {} failed", reports.len() - failed, failed);
        println!("Total time: {:.2}s", total.as_secs_f64());
        failed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::Path;

    fn run(input: &str) -> Result<String> {
        let mut scanner = Scanner::new(Cursor::new(input.to_string()));
        let mut writer = Writer::new();
        solve(&mut scanner, &mut writer)?;
        Ok(writer.into_string())
    }

    #[test]
    fn test_example() {
        assert_eq!(run("3 50\n60 100 120\n10 20 30\n").unwrap(), "220\n2 3\n");
    }

    #[test]
    fn test_nothing_fits() {
        assert_eq!(run("1 10\n500\n999\n").unwrap(), "0\n\n");
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(run("3\n"), Err(KnapsackError::Parse(_))));
        assert!(matches!(run("2 10\n1 2\n3\n"), Err(KnapsackError::Parse(_))));
        assert!(matches!(run("1 10\nx\n1\n"), Err(KnapsackError::Parse(_))));
        assert!(matches!(
            run("1 -4\n1\n1\n"),
            Err(KnapsackError::NegativeCapacity(-4))
        ));
        let err = run("2 10\n5 -1\n1 1\n").unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_huge_capacity_is_rejected() {
        let err = run("2 4611686018427387903\n1 2\n1 2\n").unwrap_err();
        assert!(matches!(
            err,
            KnapsackError::OutOfRange {
                what: "table size",
                ..
            }
        ));
    }

    #[test]
    fn test_fixtures() {
        testing::verify_all_tests(&testing::fixture_dir(), solve);
    }

    #[test]
    fn test_runner_reports_mismatch() {
        let reports = testing::run_cases(&testing::fixture_dir(), |_, out| {
            out.println("0");
            Ok(())
        });
        assert!(!reports.is_empty());
        // fixture 2 expects 0, fixture 1 expects 220
        assert!(reports.iter().any(|r| matches!(r.outcome, testing::Outcome::Passed)));
        assert!(
            reports
                .iter()
                .any(|r| r.num == 1 && matches!(r.outcome, testing::Outcome::Failed { .. }))
        );
        assert!(testing::run_cases(Path::new("no/such/dir"), solve).is_empty());
    }
}
