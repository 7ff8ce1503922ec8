use crate::error::{QappError, Result};
use crate::io;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Set the `name` field of the project manifest to `name`.
///
/// A missing manifest is not an error: templates without one are left alone
/// and `Ok(false)` is returned. An existing manifest that is not a JSON object
/// is fatal. Other fields keep their values and their order; the file is
/// rewritten with 2-space indentation.
pub fn patch_manifest(project_dir: &Path, manifest_file: &str, name: &str) -> Result<bool> {
    let path = project_dir.join(manifest_file);
    if !path.exists() {
        debug!(path = %path.display(), "no manifest, skipping rename");
        return Ok(false);
    }

    let content = std::fs::read_to_string(&path)?;
    let mut manifest: Value =
        serde_json::from_str(&content).map_err(|source| QappError::Manifest {
            path: manifest_file.to_string(),
            source,
        })?;

    let Some(fields) = manifest.as_object_mut() else {
        return Err(QappError::ManifestNotObject(manifest_file.to_string()));
    };
    fields.insert("name".to_string(), Value::String(name.to_string()));

    let rendered = serde_json::to_string_pretty(&manifest)?;
    io::atomic_write(&path, rendered.as_bytes())?;
    Ok(true)
}
