//! Project-wide constants.

use std::path::PathBuf;

pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// Field ids the page is wired with. The coordinator resolves its ports
/// against these once, at startup.
pub const NAME_FIELD: &str = "name";
pub const GREETING_FIELD: &str = "greeting";
pub const SUBMIT_CONTROL: &str = "submit";

/// Default base URL of the greeting service when neither the CLI nor the
/// settings store names one.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:4943";

/// Default settings path: `~/.salve/salve.db`.
pub fn default_db_path() -> PathBuf {
    dirs::home_dir()
        .expect("cannot determine home directory")
        .join(".salve")
        .join("salve.db")
}
