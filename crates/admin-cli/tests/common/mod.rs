use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Run the CLI binary with an isolated data directory.
pub fn run_cli(args: &[&str], data_dir: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_admin"));
    cmd.args(args);
    cmd.env("RESTASH_DATA_DIR", data_dir);
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
pub fn run_cli_success(args: &[&str], data_dir: &Path) -> String {
    let output = run_cli(args, data_dir);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI with a JSON body piped to stdin and expect success.
pub fn run_cli_with_stdin(args: &[&str], data_dir: &Path, body: &str) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_admin"));
    cmd.args(args);
    cmd.env("RESTASH_DATA_DIR", data_dir);
    cmd.stdin(Stdio::piped());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let mut child = cmd.spawn().expect("Failed to spawn CLI");
    {
        use std::io::Write;
        let stdin = child.stdin.as_mut().expect("Failed to open stdin");
        stdin
            .write_all(body.as_bytes())
            .expect("Failed to write to stdin");
    }
    let output = child.wait_with_output().expect("Failed to wait for CLI");

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }

    String::from_utf8_lossy(&output.stdout).to_string()
}
