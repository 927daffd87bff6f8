use std::path::{Path, PathBuf};

use anyhow::Result;

/// Resolution of paths given on the command line or in the environment.
pub trait FsExt: AsRef<Path> {
    /// Joins a relative path onto the working directory. Absolute paths come back unchanged.
    fn relative_to_cwd(&self) -> Result<PathBuf> {
        Ok(std::env::current_dir()?.join(self))
    }
}

impl<P: AsRef<Path> + ?Sized> FsExt for P {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_joins_cwd() {
        let cwd = std::env::current_dir().unwrap();

        assert_eq!(
            ".lichess_cache".relative_to_cwd().unwrap(),
            cwd.join(".lichess_cache")
        );
    }

    #[test]
    fn test_absolute_path_is_kept() {
        let path = PathBuf::from("/var/cache/explorer");

        assert_eq!(path.relative_to_cwd().unwrap(), path);
    }

    #[test]
    fn test_owned_string() {
        let dir = String::from("games");

        assert!(dir.relative_to_cwd().unwrap().ends_with("games"));
    }
}
