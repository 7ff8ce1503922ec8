//! Sparse template fetch.
//!
//! Downloads the repository tarball and unpacks only the entries below
//! `<top-level>/<template>/`, with that prefix stripped, into the project
//! directory. Nothing is cached between runs. A failure part-way through can
//! leave a partially written directory behind; it is not cleaned up.

use std::fs;
use std::io::Read;
use std::path::{Component, Path, PathBuf};

use flate2::read::GzDecoder;
use tar::{Archive, EntryType};
use tracing::debug;

use crate::config::RepoConfig;
use crate::error::{QappError, Result};

/// Copy the `template` subdirectory of the remote repository into `dest`.
///
/// `dest` must not exist yet.
pub fn fetch_template(repo: &RepoConfig, template: &str, dest: &Path) -> Result<()> {
    if dest.exists() {
        return Err(QappError::DirectoryExists(dest.display().to_string()));
    }

    let url = repo.archive_url();
    debug!(%url, template, "downloading template archive");
    let response = repo
        .http_client()?
        .get(&url)
        .send()
        .map_err(|e| QappError::Fetch(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(QappError::Fetch(format!("GET {url} returned {status}")));
    }

    let written = extract_template(response, template, dest)?;
    debug!(written, dest = %dest.display(), "template unpacked");
    Ok(())
}

/// Unpack the `template` subtree of a gzipped repository tarball into `dest`.
/// Returns the number of entries written below `dest`.
pub fn extract_template<R: Read>(tarball: R, template: &str, dest: &Path) -> Result<usize> {
    let mut archive = Archive::new(GzDecoder::new(tarball));
    let mut found = false;
    let mut written = 0;

    for entry in archive.entries()? {
        let mut entry = entry?;
        let path = entry.path()?.into_owned();
        let Some(relative) = template_relative_path(&path, template)? else {
            continue;
        };

        if !found {
            fs::create_dir_all(dest)?;
            found = true;
        }
        if relative.as_os_str().is_empty() {
            continue;
        }
        if entry.header().entry_type() == EntryType::Link {
            return Err(QappError::Fetch(format!(
                "refusing to unpack hard link: {}",
                path.display()
            )));
        }
        reject_symlinked_path(dest, &relative)?;

        let target = dest.join(&relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        entry.unpack(&target)?;
        written += 1;
    }

    if !found {
        return Err(QappError::TemplateNotFound(template.to_string()));
    }
    Ok(written)
}

/// Path of an archive entry relative to the template root, or `None` when the
/// entry lies outside the template.
fn template_relative_path(path: &Path, template: &str) -> Result<Option<PathBuf>> {
    let mut components = path.components().filter(|c| !matches!(c, Component::CurDir));

    // Top-level `<repo>-<sha>/` directory.
    match components.next() {
        Some(Component::Normal(_)) => {}
        _ => return Ok(None),
    }
    match components.next() {
        Some(Component::Normal(dir)) if dir == template => {}
        _ => return Ok(None),
    }

    let mut relative = PathBuf::new();
    for component in components {
        match component {
            Component::Normal(part) => relative.push(part),
            _ => {
                return Err(QappError::Fetch(format!(
                    "refusing to unpack entry outside the template: {}",
                    path.display()
                )))
            }
        }
    }
    Ok(Some(relative))
}

/// Fail if `dest/relative`, or any directory on the way to it, is already a
/// symlink. Unpacking through one could write outside `dest`.
fn reject_symlinked_path(dest: &Path, relative: &Path) -> Result<()> {
    let mut current = dest.to_path_buf();
    for part in relative.components() {
        current.push(part);
        let is_symlink = fs::symlink_metadata(&current)
            .map(|meta| meta.file_type().is_symlink())
            .unwrap_or(false);
        if is_symlink {
            return Err(QappError::Fetch(format!(
                "refusing to unpack through symlink: {}",
                relative.display()
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
