//! Configuration loading for launch_config.ini
//!
//! The config is a flat INI-style file with one `[Paths]` section naming the
//! launcher executable, the target executable and the launcher's working
//! directory. If the file is missing or a required key is absent, a default
//! template is written out for the user to edit.

use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed relative name of the configuration file
pub const CONFIG_FILE_NAME: &str = "launch_config.ini";

pub const KEY_LAUNCHER: &str = "LauncherPath";
pub const KEY_TARGET: &str = "TargetExecutablePath";
pub const KEY_WORKDIR: &str = "LauncherWorkingDirectory";

const REQUIRED_KEYS: [&str; 3] = [KEY_LAUNCHER, KEY_TARGET, KEY_WORKDIR];

/// Template written when no usable configuration exists. The paths are
/// placeholders the user is expected to replace.
pub const DEFAULT_CONFIG: &str = "\
[Paths]
LauncherPath = C:\\Games\\Launcher\\Launcher.exe
TargetExecutablePath = C:\\Games\\Game\\game.exe
LauncherWorkingDirectory = C:\\Games\\Launcher
";

/// The three validated paths read from the config file
pub struct LaunchConfig {
    pub launcher_path: PathBuf,
    pub target_path: PathBuf,
    pub working_dir: PathBuf,
}

/// Parse INI-style content into a key/value map.
///
/// Section headers (lines starting with `[`) and blank lines are skipped.
/// Everything else is split on the first `=` with key and value trimmed;
/// lines without a `=` are ignored.
pub fn parse_ini(content: &str) -> HashMap<String, String> {
    let mut values = HashMap::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('[') {
            continue;
        }
        if let Some((key, value)) = trimmed.split_once('=') {
            values.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    values
}

/// Write the default config template to `path`
pub fn write_default(path: &Path) -> Result<(), Box<dyn Error>> {
    fs::write(path, DEFAULT_CONFIG)
        .map_err(|e| format!("Failed to create default config at '{}': {}", path.display(), e))?;
    println!(
        "[modlaunch] Default config written to '{}'. Update the paths and run again.",
        path.display()
    );
    Ok(())
}

/// Load the configuration from `path`.
///
/// Returns `Ok(Some(_))` with a complete record, or `Ok(None)` when the run
/// cannot continue but the situation was handled: file or key missing (the
/// default template is written) or a key present but empty (reported without
/// touching the file). I/O failures are returned as errors.
pub fn load_or_init(path: &Path) -> Result<Option<LaunchConfig>, Box<dyn Error>> {
    if !path.exists() {
        println!("[modlaunch] Config file '{}' not found.", path.display());
        write_default(path)?;
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| format!("Error reading '{}': {}", path.display(), e))?;
    let values = parse_ini(&content);

    for key in REQUIRED_KEYS {
        if !values.contains_key(key) {
            println!("[modlaunch] '{}' is missing from '{}'.", key, path.display());
            write_default(path)?;
            return Ok(None);
        }
    }

    // Values are trimmed during parsing, so whitespace-only comes back empty.
    // An empty value means the user started editing; don't overwrite the file.
    for key in REQUIRED_KEYS {
        if values[key].is_empty() {
            println!("[modlaunch] '{}' in '{}' is empty.", key, path.display());
            return Ok(None);
        }
    }

    Ok(Some(LaunchConfig {
        launcher_path: PathBuf::from(&values[KEY_LAUNCHER]),
        target_path: PathBuf::from(&values[KEY_TARGET]),
        working_dir: PathBuf::from(&values[KEY_WORKDIR]),
    }))
}
