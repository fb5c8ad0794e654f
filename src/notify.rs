//! Desktop notifications.
//!
//! Best effort only: [`Notifier::notify`] never fails and never waits. The
//! default [`DesktopNotifier`] looks its helper (`kdialog` unless configured
//! otherwise) up on `PATH` and, when found, spawns it detached with the
//! message as the last argument. When it is not found nothing happens.

use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::config::NotifyConfig;

/// Shows a message to the user somehow, or not at all.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Used when notifications are off.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _message: &str) {}
}

/// Starts an external program without waiting for it.
pub trait Spawner {
    fn spawn(&self, program: &Path, args: &[String]) -> io::Result<()>;
}

/// Spawns real child processes with null stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessSpawner;

impl Spawner for ProcessSpawner {
    fn spawn(&self, program: &Path, args: &[String]) -> io::Result<()> {
        // The child is never waited on and may outlive us
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(drop)
    }
}

/// Notifies through a helper program found on the search path.
#[derive(Debug, Clone)]
pub struct DesktopNotifier<S = ProcessSpawner> {
    program: String,
    leading_args: Vec<String>,
    search_path: Option<OsString>,
    spawner: S,
}

impl DesktopNotifier {
    /// Helper and arguments from config, searched for on `PATH`.
    pub fn from_config(config: &NotifyConfig) -> Self {
        Self {
            program: config.program.clone(),
            leading_args: config.args.clone(),
            search_path: std::env::var_os("PATH"),
            spawner: ProcessSpawner,
        }
    }
}

impl<S: Spawner> DesktopNotifier<S> {
    pub fn new(program: impl Into<String>, leading_args: Vec<String>, spawner: S) -> Self {
        Self {
            program: program.into(),
            leading_args,
            search_path: std::env::var_os("PATH"),
            spawner,
        }
    }

    /// Search `path` (same syntax as `PATH`) instead of the process `PATH`.
    pub fn with_search_path(mut self, path: impl Into<OsString>) -> Self {
        self.search_path = Some(path.into());
        self
    }

    /// The argument vector passed for `message`.
    pub fn args_for(&self, message: &str) -> Vec<String> {
        let mut args = self.leading_args.clone();
        args.push(message.to_string());
        args
    }
}

impl<S: Spawner> Notifier for DesktopNotifier<S> {
    fn notify(&self, message: &str) {
        let Some(program) = self
            .search_path
            .as_deref()
            .and_then(|path| find_program(&self.program, path))
        else {
            tracing::debug!(program = %self.program, "notification helper not on PATH");
            return;
        };

        if let Err(err) = self.spawner.spawn(&program, &self.args_for(message)) {
            tracing::warn!(program = %program.display(), %err, "failed to start notification helper");
        }
    }
}

/// Find an executable called `name` in a `PATH`-style list of directories.
pub fn find_program(name: &str, search_path: &OsStr) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }
    // Only consulted for names containing a path separator
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    which::which_in(name, Some(search_path), cwd).ok()
}
