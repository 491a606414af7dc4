use crate::error::Result;
use git2::{ApplyLocation, Diff, DiffFormat, DiffOptions, Oid, Repository, Signature};
use std::path::Path;

const FALLBACK_COMMITTER_NAME: &str = "hypersonic";
const FALLBACK_COMMITTER_EMAIL: &str = "hypersonic@users.noreply.github.com";

/// Unified patch of the index and working tree against `HEAD`, limited to
/// `files` when any are given.
pub fn local_diff(repo_path: impl AsRef<Path>, files: &[&str]) -> Result<String> {
    let repo = Repository::open(repo_path)?;
    let head = repo.head()?.peel_to_tree()?;

    let mut options = DiffOptions::new();
    for file in files {
        options.pathspec(file);
    }

    let diff = repo.diff_tree_to_workdir_with_index(Some(&head), Some(&mut options))?;

    let mut patch = String::new();
    diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
        if matches!(line.origin(), '+' | '-' | ' ') {
            patch.push(line.origin());
        }
        patch.push_str(&String::from_utf8_lossy(line.content()));
        true
    })?;

    Ok(patch)
}

/// Applies a unified patch to the index and working tree and commits the
/// result on `HEAD`.
pub fn apply_diff(repo_path: impl AsRef<Path>, diff: &str, message: &str) -> Result<Oid> {
    let repo = Repository::open(repo_path)?;
    let diff = Diff::from_buffer(diff.as_bytes())?;

    repo.apply(&diff, ApplyLocation::Both, None)?;

    let mut index = repo.index()?;
    index.read(true)?;
    let tree = repo.find_tree(index.write_tree()?)?;

    let signature = match repo.signature() {
        Ok(signature) => signature,
        Err(_) => Signature::now(FALLBACK_COMMITTER_NAME, FALLBACK_COMMITTER_EMAIL)?,
    };
    let parent = repo.head()?.peel_to_commit()?;

    let oid = repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        message,
        &tree,
        &[&parent],
    )?;
    log::debug!("Committed {} on {}", oid, repo.path().display());

    Ok(oid)
}
