//! Interactive VM launcher flow
//!
//! Walks the user through tool selection, resource sizing and disk/ISO
//! selection, then builds and executes the resulting command. A freshly
//! created disk image is added to the selectable list and preselected.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use vmenu_core::{CommandRunner, LaunchConfig, Tool, VmWorkspace};

use crate::console::CliConsole;

pub async fn run(root: PathBuf) -> Result<()> {
    let console = CliConsole::new(true);
    let runner = CommandRunner::new();
    let theme = ColorfulTheme::default();

    let mut workspace = VmWorkspace::scan(&root)?;
    tracing::debug!(
        isos = workspace.iso_files().len(),
        drives = workspace.drive_files().len(),
        root = %root.display(),
        "vm launcher started"
    );

    let tool = select_tool(&theme)?;

    let vcpus: u32 = Input::with_theme(&theme)
        .with_prompt("Enter the number of vCPUs")
        .default(2)
        .interact_text()?;
    let memory_mb: u32 = Input::with_theme(&theme)
        .with_prompt("Enter the memory size (in MB)")
        .default(2048)
        .interact_text()?;

    let drive = select_or_create_drive(&theme, &console, &runner, &mut workspace).await?;
    let iso = select_iso(&theme, &workspace)?;

    let config = LaunchConfig::default()
        .with_iso(iso)
        .with_drive(drive)
        .with_vcpus(vcpus)
        .with_memory_mb(memory_mb);

    let spec = tool.build(&config)?;
    console.info("Starting VM...");
    console.command(&spec.to_string());
    runner.execute(&spec).await?.require_success(&spec)?;
    console.success("Command completed successfully.");
    Ok(())
}

fn select_tool(theme: &ColorfulTheme) -> Result<Tool> {
    let tools = [Tool::VirtInstall, Tool::QemuSystem];
    let labels: Vec<&str> = tools.iter().map(|t| t.program_name()).collect();
    let index = Select::with_theme(theme)
        .with_prompt("Select QEMU command")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(tools[index])
}

/// Either pick an existing qcow2 image or create a new one with
/// `qemu-img`. Creation happens immediately so a failed create aborts the
/// flow before any boot attempt.
async fn select_or_create_drive(
    theme: &ColorfulTheme,
    console: &CliConsole,
    runner: &CommandRunner,
    workspace: &mut VmWorkspace,
) -> Result<PathBuf> {
    // Enter answers yes, same as the original prompt
    let create_new = Confirm::with_theme(theme)
        .with_prompt("Create a new QEMU disk?")
        .default(true)
        .interact()?;

    if create_new {
        let name: String = Input::with_theme(theme)
            .with_prompt("Enter a name for the new QEMU disk (without extension)")
            .validate_with(|input: &String| {
                if input.trim().is_empty() {
                    Err("Name cannot be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;
        let size_gb: u32 = Input::with_theme(theme)
            .with_prompt("Enter the size of the new QEMU disk (in GB)")
            .default(20)
            .interact_text()?;

        let path = workspace
            .drive_folder()
            .join(format!("{}.qcow2", name.trim()));
        let config = LaunchConfig::default()
            .with_drive(path.clone())
            .with_disk_size_gb(size_gb);
        let spec = Tool::QemuImg.build(&config)?;

        console.info("Creating new disk...");
        console.command(&spec.to_string());
        runner.execute(&spec).await?.require_success(&spec)?;
        console.success(&format!("Disk created at {}", path.display()));

        workspace.add_drive(path.clone());
        return Ok(path);
    }

    if workspace.drive_files().is_empty() {
        return Err(anyhow!(
            "no existing drive files found in {}; create one first",
            workspace.drive_folder().display()
        ));
    }

    let labels: Vec<String> = workspace
        .drive_files()
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    let index = Select::with_theme(theme)
        .with_prompt("Select drive file")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(workspace.drive_files()[index].clone())
}

fn select_iso(theme: &ColorfulTheme, workspace: &VmWorkspace) -> Result<PathBuf> {
    if workspace.iso_files().is_empty() {
        return Err(anyhow!(
            "no ISO files found in {}",
            workspace.iso_folder().display()
        ));
    }

    let labels: Vec<String> = workspace
        .iso_files()
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    let index = Select::with_theme(theme)
        .with_prompt("Select ISO file")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(workspace.iso_files()[index].clone())
}
