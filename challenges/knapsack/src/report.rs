use serde::Serialize;

use crate::Writer;
use crate::error::Result;
use crate::plan::Plan;
use crate::task::Task;

/// Every column in the matrix view is this wide.
const CELL_WIDTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// Full value table followed by the summary
    Table,
    /// Optimal fee and chosen tasks only
    Summary,
    /// Machine readable, table included
    Json,
}

pub fn render(plan: &Plan, format: Format, out: &mut Writer) -> Result<()> {
    match format {
        Format::Table => {
            render_matrix(plan, out);
            out.println("");
            render_summary(plan, out);
        }
        Format::Summary => render_summary(plan, out),
        Format::Json => render_json(plan, out)?,
    }
    Ok(())
}

/// One column per task, one line per day budget. The optimal cell is
/// bracketed.
pub fn render_matrix(plan: &Plan, out: &mut Writer) {
    let table = plan.table();
    let task_count = table.task_count();
    let max_days = table.max_days();
    let rule = format!("{}|", "-".repeat(task_count * CELL_WIDTH));

    out.println("The Matrix:");
    out.println("");
    render_task_header(plan.tasks().as_slice(), out);
    out.println(&rule);

    for days in 0..=max_days {
        for task in 0..task_count {
            let value = table.get(task, days).unwrap_or_default();
            if task == task_count - 1 && days == max_days {
                out.print(format!("[{:04}]", value));
            } else {
                out.print(format!(" {:04} ", value));
            }
        }
        out.println(format!("|{}", days));
    }

    out.println(&rule);
    render_task_header(plan.tasks().as_slice(), out);
}

fn render_task_header(tasks: &[Task], out: &mut Writer) {
    out.println(header_line(tasks, |i, _| format!(" # {:02} ", i)));
    out.println(header_line(tasks, |_, t| format!(" F{:03} ", t.fee)));
    out.println(header_line(tasks, |_, t| format!(" D {:02} ", t.cost)));
}

fn header_line(tasks: &[Task], cell: impl Fn(usize, &Task) -> String) -> String {
    tasks.iter().enumerate().map(|(i, t)| cell(i, t)).collect()
}

pub fn render_summary(plan: &Plan, out: &mut Writer) {
    out.println(format!("Max fees: {}", plan.optimal_value()));

    let chosen = plan
        .selected()
        .map(|(i, t)| format!("#{:02}(F{})", i, t.fee))
        .collect::<Vec<_>>();
    let chosen = if chosen.is_empty() {
        "none".to_string()
    } else {
        chosen.join(" + ")
    };
    out.println(format!("Tasks: {} = {}", chosen, plan.total_fee()));
}

#[derive(Serialize)]
struct JsonReport<'a> {
    max_days: usize,
    optimal_value: u64,
    total_cost: u64,
    selected: Vec<usize>,
    tasks: &'a [Task],
    table: Vec<&'a [u64]>,
}

pub fn render_json(plan: &Plan, out: &mut Writer) -> Result<()> {
    let report = JsonReport {
        max_days: plan.capacity().days(),
        optimal_value: plan.optimal_value(),
        total_cost: plan.total_cost(),
        selected: plan.selection().indices().collect(),
        tasks: plan.tasks().as_slice(),
        table: plan.table().rows().collect(),
    };
    out.println(serde_json::to_string_pretty(&report)?);
    Ok(())
}
