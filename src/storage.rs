use anyhow::Result;
use std::path::{Path, PathBuf};

/// Root directory for config and logs.
///
/// Defaults to `~/.wraithdeck`, overridable with `$WRAITHDECK_HOME`
/// (tests point this at a tempdir).
pub fn wraithdeck_dir() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("WRAITHDECK_HOME") {
        return Ok(PathBuf::from(path));
    }

    let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("No home directory"))?;
    Ok(home.join(".wraithdeck"))
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_override_wins() {
        test_support::with_temp_home(|dir| {
            let resolved = wraithdeck_dir().unwrap();
            assert_eq!(resolved, dir);
        });
    }

    #[test]
    fn ensure_dir_creates_nested() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
