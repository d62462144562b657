//! Command Resolution
//!
//! PATH-based lookup for external commands: a real search over real
//! directories, with a real executable-bit test.

use std::path::{Path, PathBuf};

use is_executable::IsExecutable;

/// Default `PATH` when the environment does not define one.
pub const DEFAULT_PATH: &str = "/usr/bin:/bin";

/// Split a `PATH` value into its component directories, dropping empties.
pub fn split_path(path_env: &str) -> Vec<&str> {
    path_env.split(':').filter(|s| !s.is_empty()).collect()
}

/// Search `PATH` for an executable file named `name`; first hit wins.
pub fn resolve_on_path(name: &str, path_env: &str) -> Option<PathBuf> {
    for dir in split_path(path_env) {
        let candidate = Path::new(dir).join(name);
        if candidate.is_file() && candidate.is_executable() {
            return Some(candidate);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    #[test]
    fn split_path_drops_empty_entries() {
        assert_eq!(split_path("/usr/bin::/bin:"), vec!["/usr/bin", "/bin"]);
    }

    #[test]
    fn resolve_on_path_finds_first_executable_hit() {
        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join("mytool");
        fs::write(&exe, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&exe, fs::Permissions::from_mode(0o755)).unwrap();

        let path_env = dir.path().to_string_lossy().to_string();
        let found = resolve_on_path("mytool", &path_env).unwrap();
        assert_eq!(found, exe);
    }

    #[test]
    fn resolve_on_path_skips_non_executable_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("data.txt");
        fs::write(&file, "not a program").unwrap();
        fs::set_permissions(&file, fs::Permissions::from_mode(0o644)).unwrap();

        let path_env = dir.path().to_string_lossy().to_string();
        assert!(resolve_on_path("data.txt", &path_env).is_none());
    }

    #[test]
    fn resolve_on_path_returns_none_when_not_found() {
        let path_env = DEFAULT_PATH;
        assert!(resolve_on_path("definitely-not-a-real-command-xyz", path_env).is_none());
    }
}
