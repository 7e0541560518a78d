//! Data-directory resolution and provider construction.

use std::path::PathBuf;

use anyhow::Result;
use directories::ProjectDirs;

use restash_local::FileProvider;

/// Resolve the data directory.
///
/// Precedence: explicit `--data-dir`, then `RESTASH_DATA_DIR`, then the
/// platform data directory.
pub fn data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    resolve_data_dir(
        explicit,
        std::env::var("RESTASH_DATA_DIR").ok(),
        platform_data_dir(),
    )
}

fn platform_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("org", "restash", "restash").map(|dirs| dirs.data_dir().to_path_buf())
}

fn resolve_data_dir(
    explicit: Option<PathBuf>,
    env: Option<String>,
    platform: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }

    if let Some(dir) = env {
        return Ok(PathBuf::from(dir));
    }

    let dir = platform.ok_or(restash_core::Error::ProviderUnavailable)?;
    tracing::debug!(path = %dir.display(), "Using platform data directory");

    Ok(dir)
}

/// Open the file-backed provider at the resolved data directory.
pub fn open_provider(explicit: Option<PathBuf>) -> Result<FileProvider> {
    let root = data_dir(explicit)?;
    Ok(FileProvider::new(root))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_wins() {
        let dir = resolve_data_dir(
            Some(PathBuf::from("/explicit")),
            Some("/from-env".to_string()),
            Some(PathBuf::from("/platform")),
        )
        .unwrap();
        assert_eq!(dir, PathBuf::from("/explicit"));
    }

    #[test]
    fn test_env_dir_beats_platform() {
        let dir = resolve_data_dir(
            None,
            Some("/from-env".to_string()),
            Some(PathBuf::from("/platform")),
        )
        .unwrap();
        assert_eq!(dir, PathBuf::from("/from-env"));
    }

    #[test]
    fn test_missing_platform_dir_is_typed() {
        let err = resolve_data_dir(None, None, None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<restash_core::Error>(),
            Some(restash_core::Error::ProviderUnavailable)
        ));
    }
}
