//! Common test utilities: a scratch workspace and shell-script stand-ins for
//! the LAStools executables.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub struct TestWorkspace {
    #[allow(dead_code)]
    pub temp: TempDir,
    pub path: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file relative to the workspace, creating parent directories.
    #[allow(dead_code)]
    pub fn write_file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    #[allow(dead_code)]
    pub fn read_file(&self, rel: &str) -> String {
        fs::read_to_string(self.path.join(rel)).expect("Failed to read file")
    }

    #[allow(dead_code)]
    pub fn exists(&self, rel: &str) -> bool {
        self.path.join(rel).exists()
    }

    /// Write an executable `/bin/sh` script.
    #[cfg(unix)]
    pub fn write_script(&self, rel: &str, body: &str) -> PathBuf {
        use std::io::Write;
        use std::os::unix::fs::PermissionsExt;

        let path = self.path.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        {
            let mut file = fs::File::create(&path).expect("Failed to create script");
            writeln!(file, "#!/bin/sh").expect("Failed to write script");
            file.write_all(body.as_bytes()).expect("Failed to write script");
            file.sync_all().expect("Failed to sync script");
        }
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make script executable");
        path
    }
}

/// A converter that reads the two-line stdin prompt, appends `input|output`
/// to `log`, writes the output file and fails for inputs containing "bad".
#[cfg(unix)]
#[allow(dead_code)]
pub fn fake_converter(ws: &TestWorkspace, log: &Path) -> PathBuf {
    let body = format!(
        r#"IFS= read -r input
read -r output || true
printf '%s|%s\n' "$input" "$output" >> '{log}'
case "$input" in
  *bad*) echo "ERROR: cannot open $input" >&2; exit 2 ;;
esac
printf 'x y z\n' > "$output"
echo "converted $input"
"#,
        log = log.display()
    );
    ws.write_script("lastools/bin/las2txt", &body)
}

/// A `lasboundary` that prints its arguments, touches `marker` and exits with
/// `$FAKE_EXIT` (default 0).
#[cfg(unix)]
#[allow(dead_code)]
pub fn fake_lasboundary(ws: &TestWorkspace, root: &str, marker: &Path) -> PathBuf {
    let body = format!(
        r#"echo "lasboundary args: $*"
touch '{marker}'
exit ${{FAKE_EXIT:-0}}
"#,
        marker = marker.display()
    );
    ws.write_script(&format!("{root}/bin/lasboundary"), &body)
}
