//! Structured argument vectors for the LAStools executables.
//!
//! A `CommandLine` keeps the program and each argument as separate values and
//! hands them to the OS without a shell, so user supplied text can never be
//! reinterpreted as extra commands. `Display` renders a quoted line for logs
//! and host messages that can be pasted into a terminal.
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: PathBuf,
    args: Vec<OsString>,
}

impl CommandLine {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(&mut self, arg: impl Into<OsString>) -> &mut Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Push `flag` only when `enabled`.
    pub fn flag_if(&mut self, flag: &str, enabled: bool) -> &mut Self {
        if enabled {
            self.args.push(flag.into());
        }
        self
    }

    /// Push `flag value` when a value is present.
    pub fn option(&mut self, flag: &str, value: Option<impl Into<OsString>>) -> &mut Self {
        if let Some(value) = value {
            self.args.push(flag.into());
            self.args.push(value.into());
        }
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    /// Arguments as lossy UTF-8 strings, mostly for assertions and reports.
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    /// Short tool name used in messages, e.g. `lasboundary` for `.../bin/lasboundary.exe`.
    pub fn tool_name(&self) -> String {
        self.program
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.program.to_string_lossy().into_owned())
    }

    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(&self.program.to_string_lossy()))?;
        for arg in &self.args {
            write!(f, " {}", quote(&arg.to_string_lossy()))?;
        }
        Ok(())
    }
}

/// Quote a single argument for display on the current platform.
pub fn quote(arg: &str) -> String {
    if cfg!(windows) {
        quote_windows(arg)
    } else {
        quote_posix(arg)
    }
}

fn needs_quoting(arg: &str, special: &[char]) -> bool {
    arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || special.contains(&c))
}

pub fn quote_posix(arg: &str) -> String {
    const SPECIAL: &[char] = &[
        '\'', '"', '\\', '$', '`', '!', '*', '?', '[', ']', '(', ')', '{', '}', '<', '>', '|',
        '&', ';', '#', '~',
    ];
    if !needs_quoting(arg, SPECIAL) {
        return arg.to_string();
    }
    format!("'{}'", arg.replace('\'', r"'\''"))
}

/// Quoting compatible with the MSVC runtime's `CommandLineToArgvW` rules.
pub fn quote_windows(arg: &str) -> String {
    if !needs_quoting(arg, &['"']) {
        return arg.to_string();
    }
    let mut out = String::with_capacity(arg.len() + 2);
    out.push('"');
    let mut backslashes = 0usize;
    for c in arg.chars() {
        match c {
            '\\' => backslashes += 1,
            '"' => {
                out.extend(std::iter::repeat_n('\\', backslashes * 2 + 1));
                out.push('"');
                backslashes = 0;
            }
            _ => {
                out.extend(std::iter::repeat_n('\\', backslashes));
                out.push(c);
                backslashes = 0;
            }
        }
    }
    out.extend(std::iter::repeat_n('\\', backslashes * 2));
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_order() {
        let mut cmd = CommandLine::new("/opt/lastools/bin/lasboundary");
        cmd.flag_if("-v", true)
            .option("-i", Some("in.laz"))
            .flag_if("-holes", false)
            .option("-odir", None::<&str>)
            .args(["-keep_class", "2"]);
        assert_eq!(cmd.args_lossy(), vec!["-v", "-i", "in.laz", "-keep_class", "2"]);
        assert_eq!(cmd.tool_name(), "lasboundary");
    }

    #[test]
    fn posix_quoting() {
        assert_eq!(quote_posix("plain.laz"), "plain.laz");
        assert_eq!(quote_posix("my file.laz"), "'my file.laz'");
        assert_eq!(quote_posix("it's"), r"'it'\''s'");
        assert_eq!(quote_posix("a;rm -rf"), "'a;rm -rf'");
        assert_eq!(quote_posix(""), "''");
    }

    #[test]
    fn windows_quoting() {
        assert_eq!(quote_windows(r"C:\lastools\bin\lasboundary.exe"), r"C:\lastools\bin\lasboundary.exe");
        assert_eq!(quote_windows(r"C:\my data\in.laz"), r#""C:\my data\in.laz""#);
        assert_eq!(quote_windows(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(quote_windows(r"C:\out dir\"), r#""C:\out dir\\""#);
    }

    #[test]
    fn to_command_passes_args_verbatim() {
        let mut line = CommandLine::new("las2txt");
        line.arg("a b; echo pwned");
        let cmd = line.to_command();
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, vec![std::ffi::OsStr::new("a b; echo pwned")]);
    }
}
