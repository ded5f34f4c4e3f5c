// crates/infra/src/filesystem.rs
use std::path::{Path, PathBuf};

use ignore::{DirEntry, WalkBuilder};
use line_counter_domain::config::ExtensionAllowList;
use line_counter_ports::filesystem::{FileSystem, PathStatus, WalkPlan};
use line_counter_shared_kernel::{InfrastructureError, Result};
use tracing::{trace, warn};

/// Filesystem adapter implementing the `FileSystem` port with a sequential recursive walk.
///
/// Unlike a typical source walker, nothing is pruned: hidden entries and
/// `.gitignore`d paths are visited like any other.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeWalker;

impl TreeWalker {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for TreeWalker {
    fn status(&self, path: &Path) -> PathStatus {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => PathStatus::File,
            Ok(meta) if meta.is_dir() => PathStatus::Directory,
            Ok(_) => PathStatus::Other,
            Err(_) => PathStatus::Missing,
        }
    }

    fn collect(&self, plan: &WalkPlan) -> Result<Vec<PathBuf>> {
        walk_root(plan)
    }
}

fn walk_root(plan: &WalkPlan) -> Result<Vec<PathBuf>> {
    if !plan.root.is_dir() {
        return Err(InfrastructureError::Walk {
            path: plan.root.clone(),
            details: "not a directory".to_string(),
        }
        .into());
    }

    let mut builder = WalkBuilder::new(&plan.root);
    builder
        .standard_filters(false)
        .follow_links(plan.follow_links)
        // 兄弟エントリを名前順に並べ、実行ごとに同じ順序にする
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut paths = Vec::new();
    for result in builder.build() {
        match result {
            Ok(entry) => {
                if let Some(path) = accept_entry(entry, &plan.extensions, plan.follow_links) {
                    paths.push(path);
                }
            }
            // Loops (only possible with follow_links) and unreadable directories land here.
            Err(err) => warn!(root = %plan.root.display(), error = %err, "walk error"),
        }
    }
    Ok(paths)
}

fn accept_entry(entry: DirEntry, extensions: &ExtensionAllowList, follow_links: bool) -> Option<PathBuf> {
    let file_type = entry.file_type()?;
    let is_file = if file_type.is_file() {
        true
    } else if file_type.is_symlink() && !follow_links {
        // 追跡しないシンボリックリンクでも、指す先が通常ファイルなら数える
        std::fs::metadata(entry.path()).is_ok_and(|meta| meta.is_file())
    } else {
        false
    };
    if !is_file {
        return None;
    }

    let name = entry.file_name().to_string_lossy();
    if !extensions.matches(&name) {
        trace!(path = %entry.path().display(), "extension not allowed");
        return None;
    }
    Some(entry.into_path())
}
