//! Session configuration and script playback
//!
//! Everything the caller of the shell owns: the prompt label, which archive
//! to load, the locale and an optional startup script.

use serde::Deserialize;
use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::archive::ArchiveError;
use crate::shell::{Locale, OutputSink, Shell, ShellStatus};

pub const DEFAULT_PROMPT: &str = "virtual-shell";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot load archive {}: {source}", .path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: ArchiveError,
    },

    #[error("no archive given (pass one on the command line or set `archive` in the config)")]
    MissingArchive,
}

/// Session settings, usually read from a TOML file.
///
/// ```toml
/// prompt = "virtual-shell"
/// archive = "Open_world.tar"
/// script = "startup.txt"
/// locale = "en"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    pub prompt: String,
    pub archive: Option<PathBuf>,
    pub script: Option<PathBuf>,
    pub locale: Locale,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            archive: None,
            script: None,
            locale: Locale::default(),
        }
    }
}

impl SessionConfig {
    /// Load a TOML config file. Relative `archive` and `script` paths are
    /// taken relative to the file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SessionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: SessionConfig =
            toml::from_str(&text).map_err(|source| SessionError::Config {
                path: path.to_path_buf(),
                source,
            })?;
        if let Some(base) = path.parent() {
            config.archive = config.archive.map(|p| base.join(p));
            config.script = config.script.map(|p| base.join(p));
        }
        log::debug!("loaded session config from {}", path.display());
        Ok(config)
    }

    /// The echo line written before a replayed command.
    pub fn prompt_line(&self, command: &str) -> String {
        format!("{}:~$ {}", self.prompt, command)
    }

    /// Load the configured archive and create a shell over it.
    pub fn open_shell(&self) -> Result<Shell, SessionError> {
        let path = self.archive.as_ref().ok_or(SessionError::MissingArchive)?;
        let shell = Shell::from_tar(path).map_err(|source| SessionError::Archive {
            path: path.clone(),
            source,
        })?;
        Ok(shell.with_locale(self.locale))
    }
}

/// Run the configured startup script, if any.
pub fn replay_configured_script(
    shell: &mut Shell,
    config: &SessionConfig,
    out: &mut dyn OutputSink,
) -> Result<ShellStatus, SessionError> {
    match &config.script {
        Some(path) => replay_script(shell, path, config, out),
        None => Ok(ShellStatus::Continue),
    }
}

/// Replay a file of newline-separated commands.
pub fn replay_script(
    shell: &mut Shell,
    path: &Path,
    config: &SessionConfig,
    out: &mut dyn OutputSink,
) -> Result<ShellStatus, SessionError> {
    let text = fs::read_to_string(path).map_err(|source| SessionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("replaying {}", path.display());
    Ok(replay_lines(shell, text.lines(), config, out))
}

/// Feed each line to the shell, echoing it behind the prompt first.
///
/// Blank lines and `#` comments are skipped. Stops at `exit`.
pub fn replay_lines<'a>(
    shell: &mut Shell,
    lines: impl IntoIterator<Item = &'a str>,
    config: &SessionConfig,
    out: &mut dyn OutputSink,
) -> ShellStatus {
    for line in lines {
        let command = line.trim();
        if command.is_empty() || command.starts_with('#') {
            continue;
        }
        out.emit_line(&config.prompt_line(command));
        if shell.execute(command, out) == ShellStatus::Exit {
            return ShellStatus::Exit;
        }
    }
    ShellStatus::Continue
}

/// Read one command line from `input`, decoding invalid UTF-8 lossily.
///
/// Returns `Ok(None)` at end of input. Reuses `buf` between calls.
pub fn read_command_line<R: BufRead + ?Sized>(
    input: &mut R,
    buf: &mut Vec<u8>,
) -> io::Result<Option<String>> {
    buf.clear();
    if input.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}
