use thiserror::Error;

#[derive(Debug, Error)]
pub enum QappError {
    #[error("invalid project name '{0}': use letters, numbers, and dashes only")]
    InvalidProjectName(String),

    #[error("no templates found: check the template repository structure")]
    NoTemplates,

    #[error("directory \"{0}\" already exists")]
    DirectoryExists(String),

    #[error("failed to fetch template: {0}")]
    Fetch(String),

    #[error("template '{0}' not found in repository archive")]
    TemplateNotFound(String),

    #[error("failed to parse {path}: {source}")]
    Manifest {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} is not a JSON object")]
    ManifestNotObject(String),

    #[error("'{command}' exited with {status}")]
    InstallFailed { command: String, status: String },

    #[error("'{0}' not found on PATH")]
    ToolNotFound(String),

    #[error("editor unavailable: {0}")]
    EditorUnavailable(String),

    #[error("prompt failed: {0}")]
    Prompt(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, QappError>;
