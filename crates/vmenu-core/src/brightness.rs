//! Bindings for the external xrandr brightness helper
//!
//! Wraps the `brightness.sh` script from
//! <https://github.com/philippnormann/xrandr-brightness-script>: monitor
//! discovery via `xrandr --listmonitors` and per-output set/reset specs.
//! Like everything else, invocations are argv vectors, never shell
//! strings, so monitor names go through untouched.

use std::path::PathBuf;

use crate::command::CommandSpec;

/// Default install location of the helper script.
// TODO: resolve the helper via $PATH once it ships as a packaged binary,
// so a moved home directory does not break the menu.
pub const DEFAULT_HELPER: &str = "~/Utils/bin/brightness.sh";

/// Builds command specs for the brightness helper.
#[derive(Debug, Clone)]
pub struct BrightnessControl {
    helper: PathBuf,
}

impl BrightnessControl {
    /// Use the default helper path, tilde-expanded against $HOME.
    pub fn new() -> Self {
        Self {
            helper: PathBuf::from(shellexpand::tilde(DEFAULT_HELPER).into_owned()),
        }
    }

    /// Use an explicit helper path (no expansion applied).
    pub fn with_helper(helper: impl Into<PathBuf>) -> Self {
        Self {
            helper: helper.into(),
        }
    }

    /// Spec that lists connected monitors.
    pub fn list_monitors_spec() -> CommandSpec {
        CommandSpec::new(["xrandr", "--listmonitors"])
    }

    /// Spec that sets one output to the given level (0.0 to 1.0).
    pub fn set_spec(&self, monitor: &str, level: f64) -> CommandSpec {
        CommandSpec::new([
            self.helper.display().to_string(),
            "=".to_string(),
            monitor.to_string(),
            level.to_string(),
        ])
    }

    /// Spec that resets one output to full brightness.
    pub fn reset_spec(&self, monitor: &str) -> CommandSpec {
        CommandSpec::new([
            self.helper.display().to_string(),
            "=".to_string(),
            monitor.to_string(),
        ])
    }
}

impl Default for BrightnessControl {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract monitor names from `xrandr --listmonitors` output.
///
/// Each monitor line looks like
/// ` 0: +*eDP-1 1920/309x1080/174+0+0  eDP-1`; the name is the final
/// whitespace-separated token. The `Monitors: N` header is skipped.
pub fn parse_monitors(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| {
            line.trim_start()
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_digit())
        })
        .filter_map(|line| line.split_whitespace().last())
        .map(String::from)
        .collect()
}
