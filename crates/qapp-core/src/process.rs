//! Blocking subprocess steps: dependency install and editor launch.
//!
//! Both inherit the parent's standard streams so the user sees the child's
//! output live. Binaries are resolved through `which` so Windows shims such
//! as `npm.cmd` are found.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use tracing::debug;

use crate::error::{QappError, Result};

fn resolve(program: &str) -> Result<PathBuf> {
    which::which(program).map_err(|_| QappError::ToolNotFound(program.to_string()))
}

fn describe(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Dependency install
// ---------------------------------------------------------------------------

/// Run `<package_manager> install` inside `project_dir` and wait for it.
///
/// Stdio is inherited. A non-zero exit is an error carrying the exit status.
pub fn install_dependencies(package_manager: &str, project_dir: &Path) -> Result<()> {
    let bin = resolve(package_manager)?;
    debug!(bin = %bin.display(), dir = %project_dir.display(), "running install");

    let status = Command::new(&bin)
        .arg("install")
        .current_dir(project_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        return Err(QappError::InstallFailed {
            command: format!("{package_manager} install"),
            status: describe(status),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Editor
// ---------------------------------------------------------------------------

/// Probe for `editor` by running `<editor> --version` with output discarded.
pub fn probe_editor(editor: &str) -> Result<PathBuf> {
    let bin = resolve(editor).map_err(|e| QappError::EditorUnavailable(e.to_string()))?;
    let status = Command::new(&bin)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|e| QappError::EditorUnavailable(format!("{editor} --version: {e}")))?;

    if !status.success() {
        return Err(QappError::EditorUnavailable(format!(
            "'{editor} --version' exited with {}",
            describe(status)
        )));
    }
    Ok(bin)
}

/// Open `project_dir` in the editor binary found by [`probe_editor`].
pub fn open_editor(editor_bin: &Path, project_dir: &Path) -> Result<()> {
    debug!(bin = %editor_bin.display(), dir = %project_dir.display(), "launching editor");

    let status = Command::new(editor_bin)
        .arg(project_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| QappError::EditorUnavailable(format!("{}: {e}", editor_bin.display())))?;

    if !status.success() {
        return Err(QappError::EditorUnavailable(format!(
            "'{}' exited with {}",
            editor_bin.display(),
            describe(status)
        )));
    }
    Ok(())
}
