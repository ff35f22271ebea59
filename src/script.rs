//! # Script Runner
//!
//! Headless driver: reads one command per line, applies it, and reports.
//! Blank lines and `#` comments are skipped. An `exit` line stops the run.
//!
//! In text mode every command is echoed with its outcome. In JSON mode a
//! single report is written at the end with every step and the final tower.

use log::{info, warn};
use serde::Serialize;
use std::io::{self, BufRead, Write};

use crate::OutputFormat;
use crate::core::action::{Effect, update};
use crate::core::command;
use crate::core::snapshot::TowerSnapshot;
use crate::core::state::App;

#[derive(Debug, Serialize)]
pub struct StepReport {
    pub command: String,
    pub ok: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ScriptReport {
    pub steps: Vec<StepReport>,
    pub ok: bool,
    pub tower: TowerSnapshot,
}

pub fn run<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    app: &mut App,
    format: OutputFormat,
) -> io::Result<()> {
    let mut steps = Vec::new();

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (step, effect) = match command::parse(line) {
            Ok(action) => {
                let effect = update(app, action);
                let step = StepReport {
                    command: line.to_string(),
                    ok: app.last_ok,
                    message: app.status_message.clone(),
                };
                (step, effect)
            }
            Err(e) => {
                warn!("Bad script line {:?}: {}", line, e);
                let step = StepReport {
                    command: line.to_string(),
                    ok: false,
                    message: format!("error: {e}"),
                };
                (step, Effect::None)
            }
        };

        if matches!(format, OutputFormat::Text) {
            writeln!(output, "> {}", step.command)?;
            writeln!(output, "{}", step.message)?;
        }
        steps.push(step);

        if effect == Effect::Quit {
            break;
        }
    }

    info!("Script finished after {} commands", steps.len());

    if matches!(format, OutputFormat::Json) {
        let report = ScriptReport {
            steps,
            ok: app.last_ok,
            tower: app.tower.snapshot(),
        };
        serde_json::to_writer_pretty(&mut *output, &report)?;
        writeln!(output)?;
    }
    Ok(())
}
