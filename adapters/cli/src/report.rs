use std::io::{self, Write};

use lumberjack_system_solver::Path;
use serde::Serialize;

const ACTOR_MARK: &str = "@";

/// Machine-readable description of a solve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub(crate) struct Report {
    /// Minimum distance, or `null` when the forest cannot be cleared.
    distance: Option<u32>,
    /// Positions visited together with the distance walked to reach each.
    path: Vec<ReportStep>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
struct ReportStep {
    row: i32,
    column: i32,
    distance: u32,
}

impl Report {
    /// Summarises the outcome of a search.
    pub(crate) fn from_solution(solution: Option<&Path>) -> Self {
        let Some(path) = solution else {
            return Self {
                distance: None,
                path: Vec::new(),
            };
        };

        let steps = path
            .steps()
            .iter()
            .map(|step| ReportStep {
                row: step.state.actor().row(),
                column: step.state.actor().column(),
                distance: step.distance,
            })
            .collect();

        Self {
            distance: Some(path.total_distance()),
            path: steps,
        }
    }
}

/// Writes the JSON report followed by a newline.
pub(crate) fn write_json(out: &mut impl Write, solution: Option<&Path>) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &Report::from_solution(solution))?;
    writeln!(out)
}

/// Writes a human-readable summary, optionally rendering every chop.
pub(crate) fn write_text(
    out: &mut impl Write,
    solution: Option<&Path>,
    show_path: bool,
) -> io::Result<()> {
    let Some(path) = solution else {
        return writeln!(out, "no solution");
    };

    if show_path {
        let mut walked = 0u32;
        for (index, step) in path.steps().iter().enumerate() {
            walked = walked.saturating_add(step.distance);
            let actor = step.state.actor();
            if index == 0 {
                writeln!(out, "start at {actor}")?;
            } else {
                writeln!(
                    out,
                    "chop {index} at {actor}: walked {}, total {walked}",
                    step.distance
                )?;
            }
            write!(out, "{}", step.state.grid().annotate(actor, ACTOR_MARK))?;
            writeln!(out)?;
        }
        writeln!(out, "path: {path}")?;
    }

    writeln!(out, "minimum distance: {}", path.total_distance())
}
