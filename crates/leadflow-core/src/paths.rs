use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::config::Config;

// ---------------------------------------------------------------------------
// File and directory constants
// ---------------------------------------------------------------------------

pub const CONFIG_FILE: &str = "crm.yaml";
pub const DEFAULT_DATA_FILE: &str = "filtered_crm_data.json";
pub const DEFAULT_USER_DATA_DIR: &str = "user_data";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn data_path(root: &Path, cfg: &Config) -> PathBuf {
    root.join(&cfg.data_file)
}

pub fn user_data_dir(root: &Path, cfg: &Config) -> PathBuf {
    root.join(&cfg.user_data_dir)
}

pub fn overlay_path(root: &Path, cfg: &Config, company: &str) -> PathBuf {
    user_data_dir(root, cfg).join(format!("{}.json", sanitize_company(company)))
}

// ---------------------------------------------------------------------------
// Company-name sanitization
// ---------------------------------------------------------------------------

static UNSAFE_RE: OnceLock<Regex> = OnceLock::new();

fn unsafe_re() -> &'static Regex {
    UNSAFE_RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9._ -]").unwrap())
}

/// Make a company name safe to use as a filename or job-name component.
/// Path separators and shell-hostile characters become underscores.
pub fn sanitize_company(name: &str) -> String {
    unsafe_re().replace_all(name, "_").into_owned()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_passes_ordinary_names() {
        assert_eq!(sanitize_company("CTI Foods"), "CTI Foods");
        assert_eq!(sanitize_company("Springfield-Ind. Co"), "Springfield-Ind. Co");
    }

    #[test]
    fn sanitize_replaces_separators() {
        assert_eq!(sanitize_company("A/B Corp"), "A_B Corp");
        assert_eq!(sanitize_company("..\\evil"), ".._evil");
        assert_eq!(sanitize_company("O'Brien & Sons"), "O_Brien _ Sons");
    }

    #[test]
    fn sanitize_is_stable() {
        let once = sanitize_company("Näst/Co");
        assert_eq!(sanitize_company(&once), once);
    }

    #[test]
    fn overlay_path_uses_sanitized_name() {
        let cfg = Config::default();
        let path = overlay_path(Path::new("/tmp/crm"), &cfg, "A/B Corp");
        assert_eq!(path, PathBuf::from("/tmp/crm/user_data/A_B Corp.json"));
    }

    #[test]
    fn default_paths() {
        let cfg = Config::default();
        let root = Path::new("/tmp/crm");
        assert_eq!(config_path(root), PathBuf::from("/tmp/crm/crm.yaml"));
        assert_eq!(
            data_path(root, &cfg),
            PathBuf::from("/tmp/crm/filtered_crm_data.json")
        );
        assert_eq!(user_data_dir(root, &cfg), PathBuf::from("/tmp/crm/user_data"));
    }
}
