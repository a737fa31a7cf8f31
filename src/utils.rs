// src/utils.rs
use std::path::{Component, Path, PathBuf};

/// Build the name actually submitted to DNS.
pub fn probe_target(domain: &str, candidate: &str) -> String {
    format!("{}.{}", domain, candidate)
}

/// Split a comma-separated source list, dropping blank entries.
pub fn split_sources(list: &str) -> Vec<String> {
    list.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

pub fn default_output_file(domain: &str) -> String {
    format!("{}.txt", domain)
}

/// Resolve `path` against the current directory without touching the filesystem.
pub fn absolute_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return normalize(path);
    }
    match std::env::current_dir() {
        Ok(cwd) => normalize(&cwd.join(path)),
        Err(_) => normalize(path),
    }
}

/// Drop `.` and fold `..` lexically; symlinks are not followed.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                // `..` at the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
