use leadflow_core::paths;
use std::path::{Path, PathBuf};

/// Resolve the CRM workspace root.
///
/// Priority:
/// 1. `--root` flag / `LEADFLOW_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `crm.yaml`
/// 3. Walk upward from `cwd` looking for the prospect data file
/// 4. Fall back to `cwd`
///
/// There is deliberately no baked-in machine path; if nothing matches, the
/// current directory is the workspace.
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    for marker in [paths::CONFIG_FILE, paths::DEFAULT_DATA_FILE] {
        let mut dir = cwd.clone();
        loop {
            if dir.join(marker).is_file() {
                return dir;
            }
            match dir.parent() {
                Some(p) => dir = p.to_path_buf(),
                None => break,
            }
        }
    }

    cwd
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_root_wins() {
        let dir = TempDir::new().unwrap();
        assert_eq!(resolve_root(Some(dir.path())), dir.path());
    }

    #[test]
    fn explicit_root_needs_no_markers() {
        // Even an empty directory is accepted when given explicitly.
        let dir = TempDir::new().unwrap();
        let result = resolve_root(Some(dir.path()));
        assert!(!result.join("crm.yaml").exists());
        assert_eq!(result, dir.path());
    }
}
