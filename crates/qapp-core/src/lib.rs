pub mod config;
pub mod error;
pub mod fetch;
pub mod io;
pub mod manifest;
pub mod name;
pub mod process;
pub mod scaffold;
pub mod templates;

pub use config::{RepoConfig, ScaffoldConfig};
pub use error::{QappError, Result};
pub use scaffold::{Event, Remote, Scaffold, ScaffoldError, Scaffolded, Stage, Toolchain, Ui};
