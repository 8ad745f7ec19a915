//! Display targets that receive countdown text

use std::{
    collections::HashMap,
    io::{Stdout, Write},
    sync::{Arc, Mutex},
};
use tokio::sync::watch;
use tracing::warn;

use crate::error::{CountdownError, Result};

/// Id of the page element the countdown is rendered into
pub const TIME_LEFT: &str = "timeLeft";

/// A text sink the countdown writes into
pub trait TextDisplay: Send + Sync {
    fn set_text(&self, text: &str);

    /// Latest text, for displays that keep it
    fn text(&self) -> Option<String> {
        None
    }
}

/// In-memory display whose latest text can be read or watched
#[derive(Debug)]
pub struct TextBuffer {
    tx: watch::Sender<String>,
}

impl TextBuffer {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(String::new());
        Self { tx }
    }

    /// Current text
    pub fn text(&self) -> String {
        self.tx.borrow().clone()
    }

    /// Subscribe to text changes
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.tx.subscribe()
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextDisplay for TextBuffer {
    fn set_text(&self, text: &str) {
        // send_replace keeps the value even with no receivers
        self.tx.send_replace(text.to_string());
    }

    fn text(&self) -> Option<String> {
        Some(TextBuffer::text(self))
    }
}

/// Writes each update as a line to a writer
#[derive(Debug)]
pub struct LineDisplay<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> LineDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    /// Give back the writer
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LineDisplay<Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> TextDisplay for LineDisplay<W> {
    fn set_text(&self, text: &str) {
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = writeln!(out, "{}", text).and_then(|_| out.flush()) {
            warn!("Failed to write countdown line: {}", e);
        }
    }
}

/// Display targets addressable by id
#[derive(Default, Clone)]
pub struct DisplayRegistry {
    targets: HashMap<String, Arc<dyn TextDisplay>>,
}

impl DisplayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a display under `id`, replacing any previous one
    pub fn register(&mut self, id: impl Into<String>, display: Arc<dyn TextDisplay>) {
        self.targets.insert(id.into(), display);
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn TextDisplay>> {
        self.targets.get(id).cloned()
    }

    /// Look up a display, failing if nothing is registered under `id`
    pub fn resolve(&self, id: &str) -> Result<Arc<dyn TextDisplay>> {
        self.get(id)
            .ok_or_else(|| CountdownError::MissingDisplay(id.to_string()))
    }

    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.targets.keys().cloned().collect();
        ids.sort();
        ids
    }
}

impl std::fmt::Debug for DisplayRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplayRegistry")
            .field("targets", &self.ids())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_buffer_keeps_latest() {
        let buffer = TextBuffer::new();
        assert_eq!(buffer.text(), "");
        buffer.set_text("3");
        buffer.set_text("2");
        assert_eq!(buffer.text(), "2");
    }

    #[tokio::test]
    async fn test_text_buffer_notifies_subscribers() {
        let buffer = TextBuffer::new();
        let mut rx = buffer.subscribe();
        buffer.set_text("Time's up!");
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), "Time's up!");
    }

    #[test]
    fn test_line_display_writes_each_update() {
        let display = LineDisplay::new(Vec::new());
        display.set_text("2");
        display.set_text("1");
        display.set_text("Time's up!");
        assert!(TextDisplay::text(&display).is_none());

        let written = String::from_utf8(display.into_inner()).unwrap();
        assert_eq!(written, "2\n1\nTime's up!\n");
    }

    #[test]
    fn test_registry_resolve() {
        let buffer = Arc::new(TextBuffer::new());
        let mut registry = DisplayRegistry::new();
        registry.register(TIME_LEFT, buffer.clone());

        let display = registry.resolve(TIME_LEFT).unwrap();
        display.set_text("9");
        assert_eq!(buffer.text(), "9");
        assert_eq!(display.text().as_deref(), Some("9"));

        match registry.resolve("clock") {
            Err(CountdownError::MissingDisplay(id)) => assert_eq!(id, "clock"),
            other => panic!("expected MissingDisplay, got {:?}", other.map(|_| ())),
        }
        assert_eq!(registry.ids(), vec![TIME_LEFT.to_string()]);
    }
}
