use std::env;
use std::path::PathBuf;
use std::process::Command as GitCommand;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("no workspace directory is open")]
    NoWorkspace,

    #[error("{} is not inside a git repository", .0.display())]
    NotARepository(PathBuf),

    #[error("target branch '{0}' does not exist locally or on origin")]
    TargetBranchNotFound(String),

    #[error("error obtaining commit messages: {0}")]
    CommitExtraction(String),

    #[error("git {args} exited with {message}")]
    QueryFailed { args: String, message: String },
}

/// Where a branch name resolved, if anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchLookup {
    Local,
    Remote,
    NotFound,
}

/// A git work tree rooted at a known directory. All queries are read-only.
#[derive(Debug, Clone)]
pub struct GitRepo {
    root: PathBuf,
}

impl GitRepo {
    /// Open the repository at `root`, or at the current directory when no
    /// root is given. Verifies the directory is inside a git work tree.
    pub fn open(root: Option<PathBuf>) -> Result<Self, GitError> {
        let root = match root {
            Some(path) => path,
            None => env::current_dir().map_err(|_| GitError::NoWorkspace)?,
        };
        if !root.is_dir() {
            return Err(GitError::NoWorkspace);
        }

        let repo = GitRepo { root };
        if !repo.git_check(&["rev-parse", "--is-inside-work-tree"])? {
            return Err(GitError::NotARepository(repo.root));
        }
        Ok(repo)
    }

    /// Run a git command in the repo root and capture stdout as String.
    fn git_output(&self, args: &[&str]) -> Result<String, GitError> {
        let output = GitCommand::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()
            .map_err(|e| GitError::QueryFailed {
                args: format!("{args:?}"),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(GitError::QueryFailed {
                args: format!("{args:?}"),
                message: if stderr.is_empty() {
                    format!("status {:?}", output.status.code())
                } else {
                    stderr
                },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    /// Run a git command and report only whether it succeeded. Failure to
    /// launch git at all is still an error.
    fn git_check(&self, args: &[&str]) -> Result<bool, GitError> {
        let status = GitCommand::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()
            .map_err(|e| GitError::QueryFailed {
                args: format!("{args:?}"),
                message: e.to_string(),
            })?
            .status;

        Ok(status.success())
    }

    /// Get the current branch name.
    pub fn current_branch(&self) -> Result<String, GitError> {
        let name = self
            .git_output(&["rev-parse", "--abbrev-ref", "HEAD"])?
            .trim()
            .to_string();
        Ok(name)
    }

    /// Resolve a branch name: local refs are authoritative and cheap, so the
    /// remote is only consulted when the local lookup misses.
    pub fn find_branch(&self, name: &str) -> Result<BranchLookup, GitError> {
        let local_ref = format!("refs/heads/{name}");
        lookup_branch(
            || self.git_check(&["show-ref", "--verify", "--quiet", &local_ref]),
            || {
                let listing = self.git_output(&["ls-remote", "--heads", "origin", name])?;
                Ok(!listing.trim().is_empty())
            },
        )
    }

    /// Commit subjects and bodies for the commits reachable from `current`
    /// but not from `target`, each commit's unified diff appended when
    /// `with_diff` is set.
    ///
    /// Returns the empty string when the range holds no commits; callers
    /// must treat that as "nothing to summarize", not as a failure.
    pub fn commit_range(
        &self,
        target: &str,
        current: &str,
        with_diff: bool,
    ) -> Result<String, GitError> {
        let range = format!("{target}..{current}");
        let mut args = vec!["log", "--pretty=format:%s%n%n%b", range.as_str()];
        if with_diff {
            args.push("-p");
        }

        let log_output = self
            .git_output(&args)
            .map_err(|e| GitError::CommitExtraction(e.to_string()))?;

        Ok(log_output.trim().to_string())
    }
}

/// Two-step branch lookup as an explicit tri-state. Short-circuits on the
/// local probe so the remote is never touched for a branch that exists here.
fn lookup_branch<L, R>(local: L, remote: R) -> Result<BranchLookup, GitError>
where
    L: FnOnce() -> Result<bool, GitError>,
    R: FnOnce() -> Result<bool, GitError>,
{
    if local()? {
        return Ok(BranchLookup::Local);
    }
    if remote()? {
        return Ok(BranchLookup::Remote);
    }
    Ok(BranchLookup::NotFound)
}
