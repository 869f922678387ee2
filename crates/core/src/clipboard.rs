//! Handing a rendered document to the host's clipboard.
//!
//! The host supplies a [`Clipboard`] and a [`Notifier`]. HTML cards try a
//! rich write (HTML plus a plain-text flavour) first; if the host cannot do
//! that, the card is written as plain text and the notification tells the
//! user to paste it into Anki's HTML editor instead. Markdown notes are
//! always written as plain text.

use std::time::Duration;

use tracing::warn;

use crate::card::{ContentType, RenderedDocument};
use crate::{NotecardError, Result};

/// Clipboard capability provided by the host.
pub trait Clipboard {
    /// Writes `html` as `text/html` with `plain` as the `text/plain` flavour.
    fn write_rich(&mut self, html: &str, plain: &str) -> Result<()>;

    /// Writes `text` as `text/plain`.
    fn write_plain(&mut self, text: &str) -> Result<()>;
}

/// Transient user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub timeout: Duration,
}

impl Notification {
    fn new(title: &str, body: &str, timeout_ms: u64) -> Self {
        Self { title: title.to_string(), body: body.to_string(), timeout: Duration::from_millis(timeout_ms) }
    }
}

/// Notification capability provided by the host.
pub trait Notifier {
    fn notify(&mut self, notification: &Notification);
}

/// Which clipboard path a delivery took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// HTML and plain flavours written together.
    Rich,
    /// Rich write failed; the HTML source went out as plain text.
    Fallback,
    /// Markdown written as plain text.
    Plain,
}

/// Writes `doc` to `clipboard` and sends exactly one notification.
///
/// # Errors
///
/// Returns [`NotecardError::Clipboard`] only if the plain-text write fails;
/// a failed rich write is recovered through the fallback path.
pub fn deliver(doc: &RenderedDocument, clipboard: &mut dyn Clipboard, notifier: &mut dyn Notifier) -> Result<Delivery> {
    match doc.content_type {
        ContentType::Html => match clipboard.write_rich(&doc.body, &doc.body) {
            Ok(()) => {
                notifier.notify(&Notification::new(
                    "Copied to Clipboard!",
                    "HTML copied - paste into Anki card editor",
                    2000,
                ));
                Ok(Delivery::Rich)
            }
            Err(err) => {
                warn!(error = %err, "rich clipboard write failed, falling back to plain text");
                write_plain(clipboard, &doc.body)?;
                notifier.notify(&Notification::new(
                    "Copied to Clipboard!",
                    "Paste into Anki HTML editor (click </> button)",
                    3000,
                ));
                Ok(Delivery::Fallback)
            }
        },
        ContentType::Markdown => {
            write_plain(clipboard, &doc.body)?;
            notifier.notify(&Notification::new("Copied to Clipboard!", "Job copied as Markdown", 1500));
            Ok(Delivery::Plain)
        }
    }
}

fn write_plain(clipboard: &mut dyn Clipboard, text: &str) -> Result<()> {
    clipboard.write_plain(text).map_err(|err| match err {
        NotecardError::Clipboard(_) => err,
        other => NotecardError::Clipboard(other.to_string()),
    })
}
