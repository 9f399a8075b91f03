use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;

/// Environment override for the base directory holding the document file.
pub const DIR_ENV: &str = "TASKPAD_DIR";

/// Resolve the base directory: `TASKPAD_DIR` when set, otherwise the
/// platform data dir, otherwise `./.taskpad`. Absence of the directory is
/// the normal empty state; the store creates it on first use.
pub fn base_dir() -> PathBuf {
    if let Some(dir) = env::var_os(DIR_ENV) {
        return PathBuf::from(dir);
    }
    ProjectDirs::from("com", "taskpad", "taskpad")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".taskpad"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_override_wins() {
        // set_var is process-global; keep this the only test touching it
        env::set_var(DIR_ENV, "/tmp/taskpad-test");
        assert_eq!(base_dir(), PathBuf::from("/tmp/taskpad-test"));
        env::remove_var(DIR_ENV);
    }

    #[test]
    fn default_is_not_empty() {
        // run after remove_var above may interleave; only assert shape
        let dir = base_dir();
        assert!(!dir.as_os_str().is_empty());
    }
}
