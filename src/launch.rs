//! Pre-launch validation and launcher spawning

use std::error::Error;
use std::process::{Child, Command, Stdio};

use crate::config::LaunchConfig;

/// Validate that the configured executables exist on disk.
///
/// The working directory is deliberately not checked here; if it is wrong the
/// spawn itself fails and that error is reported instead.
pub fn validate_paths(cfg: &LaunchConfig) -> Result<(), Box<dyn Error>> {
    if !cfg.launcher_path.is_file() {
        return Err(format!("Launcher not found at: {}", cfg.launcher_path.display()).into());
    }
    if !cfg.target_path.is_file() {
        return Err(format!(
            "Target executable not found at: {}",
            cfg.target_path.display()
        )
        .into());
    }
    Ok(())
}

/// Start the launcher with `--launch <target>` in the configured working
/// directory. The target path is passed as its own argv entry, so embedded
/// spaces need no quoting. The child's stdio is detached from our console.
pub fn spawn_launcher(cfg: &LaunchConfig) -> Result<Child, Box<dyn Error>> {
    Command::new(&cfg.launcher_path)
        .arg("--launch")
        .arg(&cfg.target_path)
        .current_dir(&cfg.working_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| format!("Failed to start {}: {}", cfg.launcher_path.display(), e).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn test_config(dir: &std::path::Path) -> LaunchConfig {
        LaunchConfig {
            launcher_path: dir.join("launcher"),
            target_path: dir.join("game"),
            working_dir: dir.to_path_buf(),
        }
    }

    #[test]
    fn test_missing_launcher_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = test_config(dir.path());
        fs::write(&cfg.target_path, "").unwrap();

        let err = validate_paths(&cfg).unwrap_err();
        assert!(err.to_string().contains("Launcher not found"));
    }

    #[test]
    fn test_missing_target_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = test_config(dir.path());
        fs::write(&cfg.launcher_path, "").unwrap();

        let err = validate_paths(&cfg).unwrap_err();
        assert!(err.to_string().contains("Target executable not found"));
    }

    #[test]
    fn test_valid_paths_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = test_config(dir.path());
        fs::write(&cfg.launcher_path, "").unwrap();
        fs::write(&cfg.target_path, "").unwrap();

        assert!(validate_paths(&cfg).is_ok());
    }

    #[test]
    fn test_spawn_failure_reported() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = test_config(dir.path());
        // Plain files with no execute bit; spawn must fail with a diagnostic
        fs::write(&cfg.launcher_path, "").unwrap();
        fs::write(&cfg.target_path, "").unwrap();

        let err = spawn_launcher(&cfg).unwrap_err();
        assert!(err.to_string().contains("Failed to start"));
    }
}
