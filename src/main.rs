mod config;
mod launch;
mod watch;

use std::path::Path;

use crate::config::{CONFIG_FILE_NAME, load_or_init};
use crate::launch::{spawn_launcher, validate_paths};
use crate::watch::{STARTUP_GRACE, wait_for_exit, watch_name};

fn main() {
    if std::env::args().any(|arg| arg == "--help") {
        println!("{}", USAGE_TEXT);
        return;
    }

    // Every failure path prints a line and exits 0; the exit code carries no
    // meaning in this tool.
    let cfg = match load_or_init(Path::new(CONFIG_FILE_NAME)) {
        Ok(Some(cfg)) => cfg,
        Ok(None) => return,
        Err(e) => {
            println!("[modlaunch] {}", e);
            return;
        }
    };

    if let Err(e) = validate_paths(&cfg) {
        println!("[modlaunch] {}", e);
        return;
    }

    let watch = watch_name(&cfg.target_path);

    if let Err(e) = spawn_launcher(&cfg) {
        println!("[modlaunch] {}", e);
        return;
    }

    println!(
        "[modlaunch] Waiting for {} to bring up {} ...",
        cfg.launcher_path.display(),
        watch
    );
    std::thread::sleep(STARTUP_GRACE);

    println!("[modlaunch] {} is running, waiting for it to exit", watch);
    wait_for_exit(&watch);

    println!("[modlaunch] {} has exited", watch);
}

static USAGE_TEXT: &str = r#"
Usage: modlaunch

Reads launch_config.ini from the working directory, starts the configured
launcher with `--launch <target>`, then stays alive until the target process
has exited. If the config file is missing or incomplete, a default
launch_config.ini is written for editing and nothing is launched.

Options:
    --help    Show this help text
"#;
