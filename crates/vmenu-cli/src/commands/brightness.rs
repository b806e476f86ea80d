//! Interactive brightness menu
//!
//! Discovers connected outputs via `xrandr --listmonitors` and drives the
//! external brightness helper per output. "all" in the output picker
//! applies the chosen level to every monitor.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};

use vmenu_core::brightness::{parse_monitors, BrightnessControl};
use vmenu_core::CommandRunner;

use crate::console::CliConsole;

const ALL_OUTPUTS: &str = "all";

pub async fn run(helper: Option<PathBuf>) -> Result<()> {
    let console = CliConsole::new(false);
    let runner = CommandRunner::new();
    let theme = ColorfulTheme::default();

    let control = match helper {
        Some(path) => BrightnessControl::with_helper(path),
        None => BrightnessControl::new(),
    };

    let output = runner.capture(&BrightnessControl::list_monitors_spec()).await?;
    let monitors = parse_monitors(&output);
    tracing::debug!(?monitors, "outputs discovered");
    if monitors.is_empty() {
        return Err(anyhow!("xrandr reported no connected monitors"));
    }

    let actions = ["adjust", "reset"];
    let action = Select::with_theme(&theme)
        .with_prompt("Choose action")
        .items(&actions)
        .default(0)
        .interact()?;

    match actions[action] {
        "reset" => {
            for monitor in &monitors {
                let spec = control.reset_spec(monitor);
                runner.execute(&spec).await?.require_success(&spec)?;
            }
            console.success("Brightness reset on all outputs.");
        }
        _ => {
            let targets = select_outputs(&theme, &monitors)?;
            let level = ask_level(&theme)?;
            for monitor in &targets {
                let spec = control.set_spec(monitor, level);
                runner.execute(&spec).await?.require_success(&spec)?;
            }
            console.success(&format!("Brightness set to {level} on {} output(s).", targets.len()));
        }
    }

    Ok(())
}

/// Multi-select over the monitor list plus an "all" pseudo-entry, which is
/// preselected and expands to every monitor.
fn select_outputs(theme: &ColorfulTheme, monitors: &[String]) -> Result<Vec<String>> {
    let mut choices: Vec<&str> = monitors.iter().map(String::as_str).collect();
    choices.push(ALL_OUTPUTS);
    let defaults: Vec<bool> = choices.iter().map(|c| *c == ALL_OUTPUTS).collect();

    let selected = MultiSelect::with_theme(theme)
        .with_prompt("Select outputs to adjust")
        .items(&choices)
        .defaults(&defaults)
        .interact()?;

    if selected.iter().any(|&i| choices[i] == ALL_OUTPUTS) {
        return Ok(monitors.to_vec());
    }
    if selected.is_empty() {
        return Err(anyhow!("no outputs selected"));
    }
    Ok(selected.iter().map(|&i| choices[i].to_string()).collect())
}

fn ask_level(theme: &ColorfulTheme) -> Result<f64> {
    let level: f64 = Input::with_theme(theme)
        .with_prompt("Brightness (0.0 - 1.0)")
        .default(1.0)
        .validate_with(|value: &f64| {
            if (0.0..=1.0).contains(value) {
                Ok(())
            } else {
                Err("Brightness must be between 0.0 and 1.0")
            }
        })
        .interact_text()?;
    Ok(level)
}
