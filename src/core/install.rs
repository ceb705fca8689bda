//! Locating a LAStools installation and the executables inside its `bin` directory.
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Environment variable naming the installation root.
pub const LASTOOLS_HOME_ENV: &str = "LASTOOLS_HOME";

/// A validated installation: root without spaces, existing `bin` directory
/// and the resolved executable for one tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installation {
    pub root: PathBuf,
    pub bin_dir: PathBuf,
    pub tool: String,
    pub executable: PathBuf,
}

/// Filenames tried for `tool`, most specific first. LAStools ships `.exe`
/// binaries; native builds on other platforms carry the platform suffix.
pub fn executable_candidates(tool: &str) -> Vec<String> {
    let native = format!("{tool}{}", std::env::consts::EXE_SUFFIX);
    let windows = format!("{tool}.exe");
    if native == windows {
        vec![native]
    } else {
        vec![native, windows]
    }
}

/// Installation root for a toolbox adapter living at `<root>/ArcGIS_toolbox/scripts/<exe>`.
pub fn root_from_tool_location(exe: &Path) -> Option<PathBuf> {
    exe.parent()?.parent()?.parent().map(Path::to_path_buf)
}

/// First two checks on a root: no spaces in the path, then an existing `bin` directory.
pub fn locate_bin_dir(root: &Path) -> Result<PathBuf> {
    if root.to_string_lossy().contains(' ') {
        return Err(Error::PathContainsSpaces(root.to_path_buf()));
    }

    let bin_dir = root.join("bin");
    if !bin_dir.is_dir() {
        return Err(Error::BinDirNotFound(bin_dir));
    }
    Ok(bin_dir)
}

/// Resolve `tool` inside `bin_dir` from [`executable_candidates`].
pub fn find_executable(bin_dir: &Path, tool: &str) -> Result<PathBuf> {
    let candidates = executable_candidates(tool);
    let executable = candidates
        .iter()
        .map(|name| bin_dir.join(name))
        .find(|p| p.is_file())
        .ok_or_else(|| Error::ExecutableNotFound {
            tool: candidates[0].clone(),
            path: bin_dir.join(&candidates[0]),
        })?;
    debug!("Resolved {} at {:?}", tool, executable);
    Ok(executable)
}

impl Installation {
    /// Validate `root` and resolve `tool` in order: spaces, `bin` directory, executable.
    pub fn locate(root: &Path, tool: &str) -> Result<Self> {
        let bin_dir = locate_bin_dir(root)?;
        let executable = find_executable(&bin_dir, tool)?;
        Ok(Self::from_parts(root, bin_dir, tool, executable))
    }

    pub fn from_parts(root: &Path, bin_dir: PathBuf, tool: &str, executable: PathBuf) -> Self {
        Self {
            root: root.to_path_buf(),
            bin_dir,
            tool: tool.to_string(),
            executable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn layout(root: &Path, exe: Option<&str>) {
        fs::create_dir_all(root.join("bin")).unwrap();
        if let Some(name) = exe {
            fs::write(root.join("bin").join(name), b"").unwrap();
        }
    }

    #[test]
    fn resolves_windows_style_binary() {
        let tmp = TempDir::new().unwrap();
        layout(tmp.path(), Some("lasboundary.exe"));
        let install = Installation::locate(tmp.path(), "lasboundary").unwrap();
        assert_eq!(install.executable, tmp.path().join("bin").join("lasboundary.exe"));
        assert_eq!(install.bin_dir, tmp.path().join("bin"));
    }

    #[cfg(unix)]
    #[test]
    fn prefers_native_binary() {
        let tmp = TempDir::new().unwrap();
        layout(tmp.path(), Some("lasboundary.exe"));
        fs::write(tmp.path().join("bin/lasboundary"), b"").unwrap();
        let install = Installation::locate(tmp.path(), "lasboundary").unwrap();
        assert_eq!(install.executable, tmp.path().join("bin/lasboundary"));
    }

    #[test]
    fn rejects_spaces_before_touching_disk() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("my tools");
        layout(&root, Some("lasboundary.exe"));
        assert!(matches!(
            Installation::locate(&root, "lasboundary"),
            Err(Error::PathContainsSpaces(_))
        ));
    }

    #[test]
    fn missing_bin_dir() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(
            Installation::locate(tmp.path(), "lasboundary"),
            Err(Error::BinDirNotFound(p)) if p == tmp.path().join("bin")
        ));
    }

    #[test]
    fn missing_executable() {
        let tmp = TempDir::new().unwrap();
        layout(tmp.path(), Some("las2txt.exe"));
        match Installation::locate(tmp.path(), "lasboundary") {
            Err(Error::ExecutableNotFound { tool, .. }) => assert!(tool.starts_with("lasboundary")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn bin_dir_resolves_without_executable() {
        let tmp = TempDir::new().unwrap();
        layout(tmp.path(), None);
        let bin = locate_bin_dir(tmp.path()).unwrap();
        assert_eq!(bin, tmp.path().join("bin"));
        assert!(matches!(
            find_executable(&bin, "lasboundary"),
            Err(Error::ExecutableNotFound { .. })
        ));
    }

    #[test]
    fn root_is_three_levels_above_adapter() {
        let exe = Path::new("/opt/lastools/ArcGIS_toolbox/scripts/lasboundary_tool");
        assert_eq!(root_from_tool_location(exe), Some(PathBuf::from("/opt/lastools")));
        assert_eq!(root_from_tool_location(Path::new("tool")), None);
    }
}
