//! Process watch: block until the target process leaves the process table
//!
//! The target is usually started indirectly by the launcher, so there is no
//! child handle to wait on. Instead the process table is polled by name once
//! per second until no match remains.

use std::path::Path;
use std::thread;
use std::time::Duration;

use sysinfo::{ProcessExt, System, SystemExt};

/// Delay between process table polls
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Time given to the launcher to bring the target up before polling starts
pub const STARTUP_GRACE: Duration = Duration::from_secs(5);

/// Short canonical process name for the target: the file stem of its path
/// (base name without extension)
pub fn watch_name(target: &Path) -> String {
    target
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Whether a process-table name counts as the watched target. Windows process
/// names keep the `.exe` suffix; the watch name does not.
pub fn name_matches(process_name: &str, watch: &str) -> bool {
    process_name == watch || process_name.strip_suffix(".exe") == Some(watch)
}

fn target_running(sys: &mut System, watch: &str) -> bool {
    sys.refresh_processes();
    sys.processes().values().any(|p| name_matches(p.name(), watch))
}

/// Block until no process named `watch` remains. A single empty poll is
/// enough to conclude the target has exited; there is no timeout, so this
/// keeps the program alive exactly as long as the target runs.
pub fn wait_for_exit(watch: &str) {
    let mut sys = System::new();

    while target_running(&mut sys, watch) {
        thread::sleep(POLL_INTERVAL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_watch_name_strips_extension() {
        assert_eq!(watch_name(Path::new("/games/game.exe")), "game");
        assert_eq!(watch_name(Path::new("/opt/loader/loader")), "loader");
    }

    #[test]
    fn test_name_matches_exe_suffix() {
        assert!(name_matches("game", "game"));
        assert!(name_matches("game.exe", "game"));
        assert!(!name_matches("game2", "game"));
        assert!(!name_matches("game.exe", "other"));
    }

    #[test]
    fn test_wait_returns_when_target_absent() {
        let start = Instant::now();
        wait_for_exit("modlaunch-no-such-process");
        // One empty poll must be enough; allow slack for the table refresh
        assert!(start.elapsed() < POLL_INTERVAL * 2);
    }
}
