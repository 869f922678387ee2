//! Terminal stand-ins for the host clipboard and notification area.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use notecard_core::{Clipboard, Notification, Notifier, NotecardError};

use crate::echo;

/// Writes delivered documents to stdout or a file.
///
/// With `rich` disabled the sink refuses rich writes, which sends HTML cards
/// down the plain-text fallback path.
pub struct OutputSink {
    path: Option<PathBuf>,
    rich: bool,
}

impl OutputSink {
    pub fn new(path: Option<PathBuf>, rich: bool) -> Self {
        Self { path, rich }
    }

    fn write(&self, text: &str) -> notecard_core::Result<()> {
        let result = match &self.path {
            Some(path) => fs::write(path, text),
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(text.as_bytes()).and_then(|_| stdout.write_all(b"\n"))
            }
        };
        result.map_err(|e| NotecardError::Clipboard(e.to_string()))
    }
}

impl Clipboard for OutputSink {
    fn write_rich(&mut self, html: &str, _plain: &str) -> notecard_core::Result<()> {
        if !self.rich {
            return Err(NotecardError::Clipboard("rich output disabled".to_string()));
        }
        self.write(html)
    }

    fn write_plain(&mut self, text: &str) -> notecard_core::Result<()> {
        self.write(text)
    }
}

/// Echoes notifications to stderr.
pub struct EchoNotifier;

impl Notifier for EchoNotifier {
    fn notify(&mut self, notification: &Notification) {
        echo::print_success(&notification.title);
        echo::print_info(&notification.body);
    }
}
