use std::env;
use std::path::PathBuf;
use std::process::{self, Command};

fn main() {
    // This is a simple proxy to launch the bank-console binary
    let current_dir = match env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Failed to get current directory: {}", e);
            process::exit(1);
        }
    };

    // Determine target directory and build profile
    let profile = if cfg!(debug_assertions) { "debug" } else { "release" };

    // First look next to this executable, then in the workspace target directory
    let mut binary_path = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("bank-console")))
        .unwrap_or_else(|| current_dir.join(format!("target/{}/bank-console", profile)));

    if !binary_path.exists() {
        if let Ok(workspace_dir) = env::var("CARGO_WORKSPACE_DIR") {
            binary_path = PathBuf::from(workspace_dir).join(format!("target/{}/bank-console", profile));
        }
    }

    // Add .exe extension on Windows
    #[cfg(target_os = "windows")]
    {
        binary_path.set_extension("exe");
    }

    // Execute the console, inheriting stdin/stdout so the menu stays interactive
    let status = Command::new(&binary_path)
        .args(env::args().skip(1))
        .status()
        .unwrap_or_else(|e| {
            eprintln!("Failed to execute bank-console binary at {:?}: {}", binary_path, e);
            process::exit(1);
        });

    // Exit with the same status code
    process::exit(status.code().unwrap_or(1));
}
