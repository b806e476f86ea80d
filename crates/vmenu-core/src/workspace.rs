//! ISO and disk image folder scanning
//!
//! The VM flow works out of a single application root: ISOs live under
//! `<root>/out`, qcow2 images under `<root>/qcow2`. The drive folder is
//! created on first use so a fresh checkout can create its first disk
//! without any setup.

use std::path::{Path, PathBuf};

use glob::glob;

use crate::error::{VmenuError, VmenuResult};

const ISO_FOLDER: &str = "out";
const DRIVE_FOLDER: &str = "qcow2";

/// Scanned view of the application root.
#[derive(Debug, Clone)]
pub struct VmWorkspace {
    iso_folder: PathBuf,
    drive_folder: PathBuf,
    iso_files: Vec<PathBuf>,
    drive_files: Vec<PathBuf>,
}

impl VmWorkspace {
    /// Scan `root` for ISOs and disk images, creating the drive folder if
    /// it does not exist yet.
    pub fn scan(root: impl AsRef<Path>) -> VmenuResult<Self> {
        let root = root.as_ref();
        let iso_folder = root.join(ISO_FOLDER);
        let drive_folder = root.join(DRIVE_FOLDER);

        if !drive_folder.is_dir() {
            std::fs::create_dir_all(&drive_folder)?;
        }

        let iso_files = sorted_matches(&iso_folder, "*.iso")?;
        let drive_files = sorted_matches(&drive_folder, "*.qcow2")?;

        tracing::debug!(
            isos = iso_files.len(),
            drives = drive_files.len(),
            root = %root.display(),
            "workspace scanned"
        );

        Ok(Self {
            iso_folder,
            drive_folder,
            iso_files,
            drive_files,
        })
    }

    pub fn iso_folder(&self) -> &Path {
        &self.iso_folder
    }

    pub fn drive_folder(&self) -> &Path {
        &self.drive_folder
    }

    pub fn iso_files(&self) -> &[PathBuf] {
        &self.iso_files
    }

    pub fn drive_files(&self) -> &[PathBuf] {
        &self.drive_files
    }

    /// Register a newly created disk image, keeping the list sorted.
    pub fn add_drive(&mut self, path: impl Into<PathBuf>) {
        self.drive_files.push(path.into());
        self.drive_files.sort();
    }
}

fn sorted_matches(folder: &Path, pattern: &str) -> VmenuResult<Vec<PathBuf>> {
    let pattern = folder.join(pattern);
    let pattern = pattern
        .to_str()
        .ok_or_else(|| VmenuError::workspace(format!("non-UTF8 path: {}", pattern.display())))?;

    let mut files: Vec<PathBuf> = glob(pattern)
        .map_err(|e| VmenuError::workspace(e.to_string()))?
        .filter_map(Result::ok)
        .collect();
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_creates_the_drive_folder() {
        let root = tempfile::tempdir().unwrap();
        let workspace = VmWorkspace::scan(root.path()).unwrap();
        assert!(workspace.drive_folder().is_dir());
        assert!(workspace.iso_files().is_empty());
        assert!(workspace.drive_files().is_empty());
    }

    #[test]
    fn scan_finds_sorted_files() {
        let root = tempfile::tempdir().unwrap();
        let iso_folder = root.path().join("out");
        let drive_folder = root.path().join("qcow2");
        std::fs::create_dir_all(&iso_folder).unwrap();
        std::fs::create_dir_all(&drive_folder).unwrap();

        std::fs::write(iso_folder.join("b.iso"), b"").unwrap();
        std::fs::write(iso_folder.join("a.iso"), b"").unwrap();
        std::fs::write(iso_folder.join("notes.txt"), b"").unwrap();
        std::fs::write(drive_folder.join("vm2.qcow2"), b"").unwrap();
        std::fs::write(drive_folder.join("vm1.qcow2"), b"").unwrap();

        let workspace = VmWorkspace::scan(root.path()).unwrap();
        assert_eq!(
            workspace.iso_files(),
            [iso_folder.join("a.iso"), iso_folder.join("b.iso")]
        );
        assert_eq!(
            workspace.drive_files(),
            [drive_folder.join("vm1.qcow2"), drive_folder.join("vm2.qcow2")]
        );
    }

    #[test]
    fn add_drive_keeps_the_list_sorted() {
        let root = tempfile::tempdir().unwrap();
        let drive_folder = root.path().join("qcow2");
        std::fs::create_dir_all(&drive_folder).unwrap();
        std::fs::write(drive_folder.join("vm2.qcow2"), b"").unwrap();

        let mut workspace = VmWorkspace::scan(root.path()).unwrap();
        workspace.add_drive(drive_folder.join("vm1.qcow2"));
        assert_eq!(
            workspace.drive_files(),
            [drive_folder.join("vm1.qcow2"), drive_folder.join("vm2.qcow2")]
        );
    }
}
