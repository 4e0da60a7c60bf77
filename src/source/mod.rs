//! External collaborators that produce edge lists.
//!
//! These helpers shell out to `git` and `go`. Every command runs in an
//! explicit working directory; the process directory is never changed.

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::{Command, Output};
use tracing::{debug, info};

/// Default Go toolchain binary.
pub const DEFAULT_GO: &str = "go";

/// Runs `go mod graph` in `dir` and returns its stdout.
///
/// # Arguments
///
/// * `dir` - Directory containing a `go.mod`
/// * `go_binary` - Go executable to invoke (usually [`DEFAULT_GO`])
pub fn go_mod_graph(dir: &Path, go_binary: &str) -> Result<String> {
    info!("Running {} mod graph in {}", go_binary, dir.display());

    let output = Command::new(go_binary)
        .args(["mod", "graph"])
        .env("GO111MODULE", "on")
        .current_dir(dir)
        .output()
        .with_context(|| format!("Failed to run {} mod graph", go_binary))?;

    let stdout = check_output(output, "go mod graph")?;
    debug!(lines = stdout.lines().count(), "Collected module graph");
    Ok(stdout)
}

/// Clones `url` into `dest`, including submodules.
pub fn clone_repository(url: &str, dest: &Path) -> Result<()> {
    info!("git clone {} {} --recursive", url, dest.display());

    let output = Command::new("git")
        .args(["clone", "--recursive", url])
        .arg(dest)
        .output()
        .context("Failed to run git clone")?;

    check_output(output, "git clone")?;
    Ok(())
}

/// Checks out a branch, tag or commit in the repository at `dir`.
pub fn checkout(dir: &Path, revision: &str) -> Result<()> {
    info!("git checkout {}", revision);

    let output = Command::new("git")
        .args(["checkout", revision])
        .current_dir(dir)
        .output()
        .context("Failed to run git checkout")?;

    check_output(output, "git checkout")
        .with_context(|| format!("failed to checkout branch/tag: {}", revision))?;
    Ok(())
}

/// Extracts the repository name from a clone URL.
///
/// # Example
///
/// ```
/// use modtree::source::repo_name;
///
/// assert_eq!(repo_name("https://github.com/rsc/quote.git"), "quote");
/// assert_eq!(repo_name("https://github.com/rsc/quote"), "quote");
/// ```
pub fn repo_name(url: &str) -> String {
    let last = url.rsplit('/').next().unwrap_or(url);
    last.strip_suffix(".git").unwrap_or(last).to_string()
}

fn check_output(output: Output, what: &str) -> Result<String> {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("{} failed ({}): {}", what, output.status, stderr.trim());
    }
    String::from_utf8(output.stdout).with_context(|| format!("{} produced non-UTF-8 output", what))
}
