//! Destination path resolution for rendered files.
use std::path::{Path, PathBuf};

use crate::error::TargetError;

/// Resolve a configured path spec into a concrete destination.
///
/// - An empty spec resolves to `None`: the caller skips the file, this is
///   the declared "no destination configured" case, not an error.
/// - `~` and `~/...` resolve against the user's home directory.
/// - Specs not starting with `/` resolve relative to the current directory.
/// - Anything else is used as an absolute path verbatim.
/// - A spec ending in `/` denotes a directory: it is created if missing
///   (idempotent) and the destination becomes `<dir>/<default_filename>`.
///
/// # Errors
///
/// Returns [`TargetError::HomeDirUnavailable`] if the home directory cannot
/// be determined, [`TargetError::CreateDir`] if a directory spec cannot be
/// created.
pub fn resolve_target(
    path_spec: &str,
    default_filename: &str,
) -> Result<Option<PathBuf>, TargetError> {
    if path_spec.is_empty() {
        return Ok(None);
    }

    let resolved = if path_spec == "~" {
        home_dir()?
    } else if let Some(rest) = path_spec.strip_prefix("~/") {
        home_dir()?.join(rest)
    } else if !path_spec.starts_with('/') {
        Path::new(".").join(path_spec)
    } else {
        PathBuf::from(path_spec)
    };

    if path_spec.ends_with('/') {
        std::fs::create_dir_all(&resolved).map_err(|source| TargetError::CreateDir {
            path: resolved.clone(),
            source,
        })?;
        return Ok(Some(resolved.join(default_filename)));
    }

    Ok(Some(resolved))
}

fn home_dir() -> Result<PathBuf, TargetError> {
    dirs::home_dir().ok_or(TargetError::HomeDirUnavailable)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_spec_resolves_to_none() {
        assert!(resolve_target("", "colors.vim").unwrap().is_none());
        assert!(resolve_target("", "other").unwrap().is_none());
    }

    #[test]
    fn relative_spec_joins_current_directory() {
        let got = resolve_target("conf/colors.vim", "ignored").unwrap().unwrap();
        assert_eq!(got, Path::new(".").join("conf/colors.vim"));
    }

    #[test]
    fn relative_spec_ignores_default_filename() {
        let a = resolve_target("conf/colors.vim", "a").unwrap();
        let b = resolve_target("conf/colors.vim", "b").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn absolute_spec_used_verbatim() {
        let got = resolve_target("/etc/colors.conf", "ignored").unwrap().unwrap();
        assert_eq!(got, PathBuf::from("/etc/colors.conf"));
    }

    #[test]
    fn tilde_slash_joins_home() {
        let got = resolve_target("~/.vimrc.colors", "ignored").unwrap().unwrap();
        assert_eq!(got, dirs::home_dir().unwrap().join(".vimrc.colors"));
    }

    #[test]
    fn directory_spec_is_created_and_joined_with_default() {
        let dir = tempfile::tempdir().unwrap();
        let spec = format!("{}/sub/", dir.path().display());
        let got = resolve_target(&spec, "colors.vim").unwrap().unwrap();
        assert_eq!(got, dir.path().join("sub").join("colors.vim"));
        assert!(dir.path().join("sub").is_dir(), "directory should exist after resolution");
    }

    #[test]
    fn directory_spec_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let spec = format!("{}/sub/", dir.path().display());
        resolve_target(&spec, "a").unwrap();
        let got = resolve_target(&spec, "b").unwrap().unwrap();
        assert_eq!(got, dir.path().join("sub").join("b"));
    }
}
