//! Per-tool command builders
//!
//! Each [`Tool`] variant is a pure mapping from a [`LaunchConfig`] to a
//! [`CommandSpec`]: no I/O, no side effects, and the only failure mode is
//! a missing required field. Flag spelling and token order are the wire
//! contract of the downstream tools and must not change.

use std::path::PathBuf;

use crate::error::{VmenuError, VmenuResult};

use super::spec::CommandSpec;

/// User choices feeding a command builder.
///
/// All fields are optional at the type level; each builder validates the
/// subset it requires before any process can be spawned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchConfig {
    pub iso: Option<PathBuf>,
    pub drive: Option<PathBuf>,
    pub vcpus: Option<u32>,
    pub memory_mb: Option<u32>,
    pub disk_size_gb: Option<u32>,
}

impl LaunchConfig {
    pub fn with_iso(mut self, iso: impl Into<PathBuf>) -> Self {
        self.iso = Some(iso.into());
        self
    }

    pub fn with_drive(mut self, drive: impl Into<PathBuf>) -> Self {
        self.drive = Some(drive.into());
        self
    }

    pub fn with_vcpus(mut self, vcpus: u32) -> Self {
        self.vcpus = Some(vcpus);
        self
    }

    pub fn with_memory_mb(mut self, memory_mb: u32) -> Self {
        self.memory_mb = Some(memory_mb);
        self
    }

    pub fn with_disk_size_gb(mut self, disk_size_gb: u32) -> Self {
        self.disk_size_gb = Some(disk_size_gb);
        self
    }
}

/// The closed set of external tools vmenu drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Boot a VM directly with `qemu-system-x86_64`
    QemuSystem,
    /// Create and start a libvirt VM with `virt-install` (needs sudo)
    VirtInstall,
    /// Create a qcow2 disk image with `qemu-img create`
    QemuImg,
}

impl Tool {
    /// Map a config to the argv token vector for this tool.
    pub fn build(&self, config: &LaunchConfig) -> VmenuResult<CommandSpec> {
        match self {
            Self::QemuSystem => build_qemu_system(config),
            Self::VirtInstall => build_virt_install(config),
            Self::QemuImg => build_qemu_img(config),
        }
    }

    /// The tool's program name as invoked (without elevation prefix)
    pub const fn program_name(&self) -> &'static str {
        match self {
            Self::QemuSystem => "qemu-system-x86_64",
            Self::VirtInstall => "virt-install",
            Self::QemuImg => "qemu-img",
        }
    }
}

fn build_qemu_system(config: &LaunchConfig) -> VmenuResult<CommandSpec> {
    let iso = require_path(&config.iso, "iso")?;
    let drive = require_path(&config.drive, "drive")?;
    let vcpus = require_number(config.vcpus, "vcpus")?;
    let memory = require_number(config.memory_mb, "memory_mb")?;

    Ok(CommandSpec::new([
        "qemu-system-x86_64".to_string(),
        "-cdrom".to_string(),
        iso,
        "-cpu".to_string(),
        "host".to_string(),
        "-enable-kvm".to_string(),
        "-m".to_string(),
        memory,
        "-smp".to_string(),
        vcpus,
        "-drive".to_string(),
        format!("file={drive},format=qcow2"),
        "-device".to_string(),
        "intel-hda".to_string(),
    ]))
}

fn build_virt_install(config: &LaunchConfig) -> VmenuResult<CommandSpec> {
    let iso = require_path(&config.iso, "iso")?;
    let drive = require_path(&config.drive, "drive")?;
    let vcpus = require_number(config.vcpus, "vcpus")?;
    let memory = require_number(config.memory_mb, "memory_mb")?;

    Ok(CommandSpec::new([
        // virt-install typically requires elevated privileges
        "sudo".to_string(),
        "virt-install".to_string(),
        "--osinfo".to_string(),
        "detect=on,name=archlinux".to_string(),
        "--cdrom".to_string(),
        iso,
        "--disk".to_string(),
        drive,
        "--cpu".to_string(),
        "host".to_string(),
        "--memory".to_string(),
        memory,
        "--vcpus".to_string(),
        vcpus,
        "--network".to_string(),
        "default".to_string(),
    ]))
}

fn build_qemu_img(config: &LaunchConfig) -> VmenuResult<CommandSpec> {
    let drive = require_path(&config.drive, "drive")?;
    let size_gb = require_number(config.disk_size_gb, "disk_size_gb")?;

    Ok(CommandSpec::new([
        "qemu-img".to_string(),
        "create".to_string(),
        "-f".to_string(),
        "qcow2".to_string(),
        drive,
        format!("{size_gb}G"),
    ]))
}

fn require_path(field: &Option<PathBuf>, name: &'static str) -> VmenuResult<String> {
    field
        .as_ref()
        .map(|path| path.display().to_string())
        .ok_or(VmenuError::missing_field(name))
}

fn require_number(field: Option<u32>, name: &'static str) -> VmenuResult<String> {
    field
        .map(|value| value.to_string())
        .ok_or(VmenuError::missing_field(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boot_config() -> LaunchConfig {
        LaunchConfig::default()
            .with_iso("/out/arch.iso")
            .with_drive("/qcow2/vm1.qcow2")
            .with_vcpus(2)
            .with_memory_mb(2048)
    }

    #[test]
    fn qemu_system_token_sequence() {
        let spec = Tool::QemuSystem.build(&boot_config()).unwrap();
        assert_eq!(
            spec.tokens(),
            [
                "qemu-system-x86_64",
                "-cdrom",
                "/out/arch.iso",
                "-cpu",
                "host",
                "-enable-kvm",
                "-m",
                "2048",
                "-smp",
                "2",
                "-drive",
                "file=/qcow2/vm1.qcow2,format=qcow2",
                "-device",
                "intel-hda",
            ]
        );
    }

    #[test]
    fn virt_install_token_sequence() {
        let spec = Tool::VirtInstall.build(&boot_config()).unwrap();
        assert_eq!(
            spec.tokens(),
            [
                "sudo",
                "virt-install",
                "--osinfo",
                "detect=on,name=archlinux",
                "--cdrom",
                "/out/arch.iso",
                "--disk",
                "/qcow2/vm1.qcow2",
                "--cpu",
                "host",
                "--memory",
                "2048",
                "--vcpus",
                "2",
                "--network",
                "default",
            ]
        );
    }

    #[test]
    fn qemu_img_suffixes_size_with_g() {
        let config = LaunchConfig::default()
            .with_drive("/x/y.qcow2")
            .with_disk_size_gb(20);
        let spec = Tool::QemuImg.build(&config).unwrap();
        assert_eq!(
            spec.tokens(),
            ["qemu-img", "create", "-f", "qcow2", "/x/y.qcow2", "20G"]
        );
        assert!(spec.tokens().contains(&"20G".to_string()));
        assert!(!spec.tokens().contains(&"20".to_string()));
    }

    fn assert_missing(tool: Tool, config: &LaunchConfig, expected: &str) {
        match tool.build(config).unwrap_err() {
            VmenuError::MissingField { field } => assert_eq!(field, expected),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_fields_are_named() {
        let mut config = boot_config();
        config.iso = None;
        assert_missing(Tool::QemuSystem, &config, "iso");

        let mut config = boot_config();
        config.vcpus = None;
        assert_missing(Tool::QemuSystem, &config, "vcpus");

        let mut config = boot_config();
        config.memory_mb = None;
        assert_missing(Tool::VirtInstall, &config, "memory_mb");

        let config = LaunchConfig::default().with_drive("/x/y.qcow2");
        assert_missing(Tool::QemuImg, &config, "disk_size_gb");
    }

    #[test]
    fn qemu_img_requires_drive() {
        let config = LaunchConfig::default().with_disk_size_gb(20);
        assert_missing(Tool::QemuImg, &config, "drive");
    }

    #[test]
    fn builders_are_deterministic() {
        let config = boot_config();
        assert_eq!(
            Tool::QemuSystem.build(&config).unwrap(),
            Tool::QemuSystem.build(&config).unwrap()
        );
    }
}
