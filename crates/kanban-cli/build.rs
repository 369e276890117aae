use std::process::Command;

/// Stamps the binary with the commit it was built from, shown by
/// `kanban --version`.
fn main() {
    println!("cargo::rerun-if-changed=../../.git/HEAD");
    println!("cargo::rerun-if-env-changed=GIT_COMMIT_HASH");

    let from_env = std::env::var("GIT_COMMIT_HASH")
        .ok()
        .filter(|hash| !hash.is_empty() && hash != "unknown");

    let hash = from_env
        .or_else(short_head)
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo::rustc-env=GIT_COMMIT_HASH={hash}");
}

fn short_head() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}
