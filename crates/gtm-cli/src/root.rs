use gtm_core::config::CONFIG_FILE;
use std::path::{Path, PathBuf};

/// Locate the config file to load.
///
/// Priority:
/// 1. `--config` flag / `GTM_CONFIG` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `gtm.yaml`
///
/// Returns `None` when nothing is found; callers then run on defaults.
pub fn resolve_config(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }
    let cwd = std::env::current_dir().ok()?;
    find_upward(&cwd)
}

/// Where `gtm init` should write: the explicit path, or `gtm.yaml` in `cwd`.
pub fn init_target(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(p) => p.to_path_buf(),
        None => std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(CONFIG_FILE),
    }
}

fn find_upward(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        match dir.parent() {
            Some(p) => dir = p.to_path_buf(),
            None => return None,
        }
    }
}
