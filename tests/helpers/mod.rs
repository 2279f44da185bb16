use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Run git with the given arguments in a directory, returning trimmed stdout
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn git {:?}: {}", args, e));

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Fresh repository with a commit identity configured
pub fn create_test_repo() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let repo_path = temp_dir.path().to_path_buf();

    let setup: [&[&str]; 3] = [
        &["init"],
        &["config", "user.name", "Test User"],
        &["config", "user.email", "test@example.com"],
    ];
    for args in setup {
        git(&repo_path, args);
    }

    (temp_dir, repo_path)
}

/// Write a file and commit it
pub fn create_commit(repo_path: &PathBuf, file: &str, content: &str, message: &str) {
    fs::write(repo_path.join(file), content).expect("Failed to write file");
    git(repo_path, &["add", file]);
    git(repo_path, &["commit", "-m", message]);
}

/// Current branch name as git reports it
pub fn current_branch(repo_path: &PathBuf) -> String {
    git(repo_path, &["rev-parse", "--abbrev-ref", "HEAD"])
}
