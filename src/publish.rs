//! Publishing - commit the changed files and push them to the hosting remote

use chrono::{DateTime, Local};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use thiserror::Error;

use crate::config::GitConfig;

/// Errors from a publish step; they are logged and never rolled back
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("failed to run git: {0}")]
    Spawn(#[from] io::Error),

    #[error("git add failed: {0}")]
    Stage(String),

    #[error("git commit failed: {0}")]
    Commit(String),

    #[error("git push failed: {0}")]
    Push(String),
}

/// Commit message for a post
pub fn commit_message(topic: &str, timestamp: &DateTime<Local>) -> String {
    format!(
        "Add post: {} ({})",
        topic,
        timestamp.format("%Y-%m-%d %H:%M:%S")
    )
}

/// Where a run's changes go
pub trait Publisher {
    /// Stage `paths`, commit them with `message`, and push
    fn publish(&self, paths: &[PathBuf], message: &str) -> Result<(), PublishError>;

    /// Commits made by earlier runs that never reached the remote
    ///
    /// `None` when this publisher cannot tell.
    fn unpushed_commits(&self) -> Option<usize> {
        None
    }
}

/// Publishes through the `git` command line
#[derive(Debug, Clone)]
pub struct GitPublisher {
    repo_dir: PathBuf,
    remote: String,
    branch: String,
    push: bool,
}

impl GitPublisher {
    pub fn new(repo_dir: &Path, config: &GitConfig) -> Self {
        Self {
            repo_dir: repo_dir.to_path_buf(),
            remote: config.remote.clone(),
            branch: config.branch.clone(),
            push: true,
        }
    }

    /// Commit only, leaving the push to a later run
    pub fn without_push(mut self) -> Self {
        self.push = false;
        self
    }

    fn git(&self, args: &[&str]) -> Result<Output, io::Error> {
        Command::new("git")
            .args(args)
            .current_dir(&self.repo_dir)
            .output()
    }
}

impl Publisher for GitPublisher {
    fn publish(&self, paths: &[PathBuf], message: &str) -> Result<(), PublishError> {
        let mut add: Vec<String> = vec!["add".to_string(), "--".to_string()];
        add.extend(paths.iter().map(|p| p.to_string_lossy().to_string()));
        let add: Vec<&str> = add.iter().map(String::as_str).collect();

        let output = self.git(&add)?;
        if !output.status.success() {
            return Err(PublishError::Stage(describe(&output)));
        }

        let output = self.git(&["commit", "-m", message])?;
        if !output.status.success() {
            return Err(PublishError::Commit(describe(&output)));
        }
        tracing::info!("Committed: {}", message);

        if !self.push {
            tracing::info!("Push skipped");
            return Ok(());
        }

        let output = self.git(&["push", &self.remote, &self.branch])?;
        if !output.status.success() {
            return Err(PublishError::Push(describe(&output)));
        }
        tracing::info!("Pushed to {} {}", self.remote, self.branch);

        Ok(())
    }

    fn unpushed_commits(&self) -> Option<usize> {
        let output = self.git(&["rev-list", "--count", "@{u}..HEAD"]).ok()?;
        if !output.status.success() {
            return None;
        }
        String::from_utf8_lossy(&output.stdout).trim().parse().ok()
    }
}

/// Stderr, or stdout when stderr is empty, folded onto one line
fn describe(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let text = if stderr.trim().is_empty() {
        String::from_utf8_lossy(&output.stdout)
    } else {
        stderr
    };
    fold_lines(&text)
}

/// Every log record must stay on a single timestamped line
fn fold_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::fs;

    fn run(dir: &Path, args: &[&str]) -> bool {
        Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    /// A work tree on `main` with one commit, tracking a bare `origin`
    fn repo_with_remote() -> Option<(tempfile::TempDir, PathBuf, PathBuf)> {
        let root = tempfile::tempdir().unwrap();
        let remote = root.path().join("remote.git");
        let work = root.path().join("work");
        fs::create_dir_all(&work).unwrap();

        if !run(root.path(), &["init", "--bare", "-q", remote.to_str()?]) {
            return None;
        }
        let ok = run(&work, &["init", "-q"])
            && run(&work, &["symbolic-ref", "HEAD", "refs/heads/main"])
            && run(&work, &["config", "user.email", "test@example.com"])
            && run(&work, &["config", "user.name", "Test"])
            && run(&work, &["config", "commit.gpgsign", "false"])
            && run(&work, &["remote", "add", "origin", remote.to_str()?]);
        if !ok {
            return None;
        }

        fs::write(work.join("index.html"), "<header>\n</header>\n").unwrap();
        let ok = run(&work, &["add", "index.html"])
            && run(&work, &["commit", "-q", "-m", "init"])
            && run(&work, &["push", "-q", "-u", "origin", "main"]);
        if !ok {
            return None;
        }

        Some((root, work, remote))
    }

    fn head_message(dir: &Path) -> String {
        let out = Command::new("git")
            .args(["log", "-1", "--format=%s", "main"])
            .current_dir(dir)
            .output()
            .unwrap();
        String::from_utf8_lossy(&out.stdout).trim().to_string()
    }

    #[test]
    fn test_git_output_folds_to_one_line() {
        let stderr = "To ../remote.git\n ! [rejected]        main -> main (fetch first)\n\nerror: failed to push some refs\n";
        let folded = fold_lines(stderr);
        assert!(!folded.contains('\n'));
        assert_eq!(
            folded,
            "To ../remote.git; ! [rejected]        main -> main (fetch first); error: failed to push some refs"
        );

        let err = PublishError::Push(folded);
        assert_eq!(err.to_string().lines().count(), 1);
    }

    #[test]
    fn test_commit_message() {
        let ts = Local.with_ymd_and_hms(2025, 2, 3, 4, 5, 6).unwrap();
        assert_eq!(
            commit_message("Transport Layers", &ts),
            "Add post: Transport Layers (2025-02-03 04:05:06)"
        );
    }

    #[test]
    fn test_publish_commits_and_pushes() {
        let Some((_root, work, remote)) = repo_with_remote() else {
            return;
        };
        fs::write(work.join("index.html"), "<header>\n</header>\n<p>x</p>\n").unwrap();

        let publisher = GitPublisher::new(&work, &GitConfig::default());
        publisher
            .publish(&[PathBuf::from("index.html")], "Add post: Topic (now)")
            .unwrap();

        assert_eq!(head_message(&work), "Add post: Topic (now)");
        assert_eq!(head_message(&remote), "Add post: Topic (now)");
        assert_eq!(publisher.unpushed_commits(), Some(0));
    }

    #[test]
    fn test_without_push_leaves_commit_local() {
        let Some((_root, work, remote)) = repo_with_remote() else {
            return;
        };
        fs::write(work.join("index.html"), "changed\n").unwrap();

        let publisher = GitPublisher::new(&work, &GitConfig::default()).without_push();
        publisher
            .publish(&[PathBuf::from("index.html")], "Add post: Local")
            .unwrap();

        assert_eq!(head_message(&work), "Add post: Local");
        assert_eq!(head_message(&remote), "init");
        assert_eq!(publisher.unpushed_commits(), Some(1));
    }

    #[test]
    fn test_push_failure_keeps_local_commit() {
        let Some((_root, work, _remote)) = repo_with_remote() else {
            return;
        };
        fs::write(work.join("index.html"), "changed\n").unwrap();

        let config = GitConfig {
            remote: "nowhere".to_string(),
            branch: "main".to_string(),
        };
        let err = GitPublisher::new(&work, &config)
            .publish(&[PathBuf::from("index.html")], "Add post: Stranded")
            .unwrap_err();

        assert!(matches!(err, PublishError::Push(_)));
        assert_eq!(head_message(&work), "Add post: Stranded");
    }

    #[test]
    fn test_nothing_to_commit_is_commit_error() {
        let Some((_root, work, _remote)) = repo_with_remote() else {
            return;
        };
        let err = GitPublisher::new(&work, &GitConfig::default())
            .publish(&[PathBuf::from("index.html")], "Add post: Nothing")
            .unwrap_err();
        assert!(matches!(err, PublishError::Commit(_)));
    }
}
