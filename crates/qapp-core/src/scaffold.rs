//! Project creation, start to finish.
//!
//! The run is a strictly linear sequence of stages:
//!
//! ```text
//! CollectName -> ListTemplates -> SelectTemplate -> Clone -> PatchManifest
//!             -> Install -> LaunchEditor -> Done
//! ```
//!
//! Any fatal error moves the run to the terminal `Failed` stage and is
//! reported together with the stage it happened in. Editor problems are never fatal; they surface as an
//! [`Event::EditorUnavailable`] advisory.
//!
//! Prompts and terminal output go through [`Ui`]; network and subprocess work
//! goes through [`Toolchain`]. The CLI provides the real implementations.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::config::{RepoConfig, ScaffoldConfig};
use crate::error::{QappError, Result};
use crate::{fetch, manifest, name, process, templates};

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CollectName,
    ListTemplates,
    SelectTemplate,
    Clone,
    PatchManifest,
    Install,
    LaunchEditor,
    Done,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::CollectName => "collect-name",
            Stage::ListTemplates => "list-templates",
            Stage::SelectTemplate => "select-template",
            Stage::Clone => "clone",
            Stage::PatchManifest => "patch-manifest",
            Stage::Install => "install",
            Stage::LaunchEditor => "launch-editor",
            Stage::Done => "done",
            Stage::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// A fatal error and the stage that raised it (never `Failed` itself).
#[derive(Debug, Error)]
#[error("{error}")]
pub struct ScaffoldError {
    pub stage: Stage,
    pub error: QappError,
}

// ---------------------------------------------------------------------------
// Ui / Toolchain
// ---------------------------------------------------------------------------

/// Progress notifications, in the order a successful run emits them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    FetchingTemplates,
    Creating { name: String, template: String },
    Cloned,
    ManifestUpdated { file: String },
    Installing,
    Ready { name: String, package_manager: String },
    OpeningEditor { editor: String },
    EditorUnavailable { editor: String },
}

pub trait Ui {
    /// Ask for the raw project name. Implementations reject blank input.
    fn project_name(&mut self) -> Result<String>;

    /// Ask the user to pick one of `templates` (never empty).
    fn select_template(&mut self, templates: &[String]) -> Result<String>;

    fn notify(&mut self, event: Event);
}

pub trait Toolchain {
    fn list_templates(&self, repo: &RepoConfig) -> Vec<String>;
    fn fetch_template(&self, repo: &RepoConfig, template: &str, dest: &Path) -> Result<()>;
    fn install_dependencies(&self, package_manager: &str, project_dir: &Path) -> Result<()>;
    fn probe_editor(&self, editor: &str) -> Result<PathBuf>;
    fn open_editor(&self, editor_bin: &Path, project_dir: &Path) -> Result<()>;
}

/// The real thing: GitHub over HTTPS and local subprocesses.
#[derive(Debug, Default, Clone, Copy)]
pub struct Remote;

impl Toolchain for Remote {
    fn list_templates(&self, repo: &RepoConfig) -> Vec<String> {
        templates::list_templates(repo)
    }

    fn fetch_template(&self, repo: &RepoConfig, template: &str, dest: &Path) -> Result<()> {
        fetch::fetch_template(repo, template, dest)
    }

    fn install_dependencies(&self, package_manager: &str, project_dir: &Path) -> Result<()> {
        process::install_dependencies(package_manager, project_dir)
    }

    fn probe_editor(&self, editor: &str) -> Result<PathBuf> {
        process::probe_editor(editor)
    }

    fn open_editor(&self, editor_bin: &Path, project_dir: &Path) -> Result<()> {
        process::open_editor(editor_bin, project_dir)
    }
}

// ---------------------------------------------------------------------------
// Scaffold
// ---------------------------------------------------------------------------

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scaffolded {
    pub name: String,
    pub template: String,
    pub path: PathBuf,
    pub manifest_updated: bool,
    pub editor_opened: bool,
}

pub struct Scaffold<'a> {
    config: &'a ScaffoldConfig,
    cwd: &'a Path,
    stage: Stage,
}

impl<'a> Scaffold<'a> {
    /// New projects are created as `<cwd>/<sanitized name>`.
    pub fn new(config: &'a ScaffoldConfig, cwd: &'a Path) -> Self {
        Self {
            config,
            cwd,
            stage: Stage::CollectName,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    fn enter(&mut self, stage: Stage) {
        debug!(from = %self.stage, to = %stage, "stage transition");
        self.stage = stage;
    }

    fn fail(&mut self, error: QappError) -> ScaffoldError {
        let stage = self.stage;
        debug!(%stage, "scaffold failed: {error}");
        self.enter(Stage::Failed);
        ScaffoldError { stage, error }
    }

    pub fn run(
        &mut self,
        ui: &mut dyn Ui,
        tools: &dyn Toolchain,
    ) -> std::result::Result<Scaffolded, ScaffoldError> {
        let config = self.config;

        self.enter(Stage::CollectName);
        let raw = ui.project_name().map_err(|e| self.fail(e))?;
        let name = name::project_name(&raw).map_err(|e| self.fail(e))?;

        self.enter(Stage::ListTemplates);
        ui.notify(Event::FetchingTemplates);
        let available = tools.list_templates(&config.repo);
        if available.is_empty() {
            return Err(self.fail(QappError::NoTemplates));
        }

        self.enter(Stage::SelectTemplate);
        let template = ui.select_template(&available).map_err(|e| self.fail(e))?;
        ui.notify(Event::Creating {
            name: name.clone(),
            template: template.clone(),
        });

        self.enter(Stage::Clone);
        let path = self.cwd.join(&name);
        if path.exists() {
            return Err(self.fail(QappError::DirectoryExists(name)));
        }
        tools
            .fetch_template(&config.repo, &template, &path)
            .map_err(|e| self.fail(e))?;
        ui.notify(Event::Cloned);

        self.enter(Stage::PatchManifest);
        let manifest_updated = manifest::patch_manifest(&path, &config.manifest_file, &name)
            .map_err(|e| self.fail(e))?;
        if manifest_updated {
            ui.notify(Event::ManifestUpdated {
                file: config.manifest_file.clone(),
            });
        }

        self.enter(Stage::Install);
        ui.notify(Event::Installing);
        tools
            .install_dependencies(&config.package_manager, &path)
            .map_err(|e| self.fail(e))?;
        ui.notify(Event::Ready {
            name: name.clone(),
            package_manager: config.package_manager.clone(),
        });

        self.enter(Stage::LaunchEditor);
        let editor_opened = match self.launch_editor(ui, tools, &path) {
            Ok(()) => true,
            Err(e) => {
                debug!("editor not opened: {e}");
                ui.notify(Event::EditorUnavailable {
                    editor: config.editor.clone(),
                });
                false
            }
        };

        self.enter(Stage::Done);
        Ok(Scaffolded {
            name,
            template,
            path,
            manifest_updated,
            editor_opened,
        })
    }

    fn launch_editor(&self, ui: &mut dyn Ui, tools: &dyn Toolchain, path: &Path) -> Result<()> {
        let editor = &self.config.editor;
        let bin = tools.probe_editor(editor)?;
        ui.notify(Event::OpeningEditor {
            editor: editor.clone(),
        });
        tools.open_editor(&bin, path)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
