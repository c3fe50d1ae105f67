//! `chroma replay`: drive a headless picker from a script.
//!
//! Scripts are TOML:
//!
//! ```toml
//! initial = "hsla(0, 100%, 50%, 1)"
//!
//! [options]
//! set_value_on_close = false
//!
//! [layout]
//! preview = { x = 0, y = 0, width = 180, height = 20 }
//! hue = { x = 0, y = 24, width = 180, height = 12 }
//! sat_light = { x = 0, y = 40, width = 180, height = 100 }
//! alpha = { x = 0, y = 144, width = 180, height = 12 }
//!
//! [[events]]
//! target = "bound"
//! event = { pointer = { kind = { down = "left" }, position = { x = 5, y = 5 } } }
//!
//! [[events]]
//! target = { values_field = { cursor = 6 } }
//! event = { key = { code = "up", modifiers = "SHIFT" } }
//! ```
//!
//! `options` and `layout` are optional; `options` replaces the configured
//! options for this run. Text events the picker rejects are logged and the
//! replay continues.

use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Context, Result};
use chroma_framework::input::{Event, EventTarget};
use chroma_framework::picker::{ColorPicker, ControlLayout, PickerOptions};
use serde::Deserialize;

use crate::cli::ReplayCommand;

/// A replay script.
#[derive(Debug, Default, Deserialize)]
pub struct ReplayScript {
    /// Initial bound field text. No bound field is attached when absent.
    #[serde(default)]
    pub initial: Option<String>,
    /// Options overriding the configured ones.
    #[serde(default)]
    pub options: Option<PickerOptions>,
    /// Control rectangles.
    #[serde(default)]
    pub layout: ControlLayout,
    /// Events in delivery order.
    #[serde(default)]
    pub events: Vec<ScriptStep>,
}

/// One scripted event.
#[derive(Debug, Deserialize)]
pub struct ScriptStep {
    pub target: EventTarget,
    pub event: Event,
}

impl ReplayScript {
    /// Loads a script from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Invalid script {}", path.display()))
    }

    /// Parses a script from TOML.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Final picker state after a replay.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayOutcome {
    pub values_text: String,
    pub bound_value: Option<String>,
    pub active: bool,
    pub changes: usize,
    pub rejected: usize,
}

impl ReplayOutcome {
    /// Renders the outcome as text lines.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "values: {}", self.values_text);
        let _ = writeln!(out, "bound: {}", self.bound_value.as_deref().unwrap_or("<none>"));
        let _ = writeln!(
            out,
            "visibility: {}",
            if self.active { "active" } else { "hidden" }
        );
        let _ = writeln!(out, "changes: {}", self.changes);
        let _ = write!(out, "rejected: {}", self.rejected);
        out
    }
}

/// Runs `script` against a fresh picker.
pub fn replay(script: &ReplayScript, options: PickerOptions) -> Result<ReplayOutcome> {
    let changes = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&changes);

    let mut picker = ColorPicker::new(script.options.unwrap_or(options))
        .with_layout(script.layout)
        .on_change(move |_| {
            counter.fetch_add(1, Ordering::Relaxed);
        });

    if let Some(initial) = &script.initial {
        picker
            .bind(initial.as_str())
            .with_context(|| format!("Invalid initial value '{initial}'"))?;
    }

    let mut rejected = 0;
    for (index, step) in script.events.iter().enumerate() {
        match picker.handle_event(step.target, &step.event) {
            Ok(result) => {
                tracing::debug!(index, target = %step.target, ?result, "replayed event");
            }
            Err(err) => {
                rejected += 1;
                tracing::warn!(index, target = %step.target, error = %err, "event rejected");
            }
        }
    }

    Ok(ReplayOutcome {
        values_text: picker.values_text().to_string(),
        bound_value: picker.bound_value().map(str::to_string),
        active: picker.is_active(),
        changes: changes.load(Ordering::Relaxed),
        rejected,
    })
}

impl ReplayCommand {
    /// Run the replay command.
    pub fn run(self, options: &PickerOptions) -> Result<()> {
        let script = ReplayScript::load(&self.script)?;
        let outcome = replay(&script, *options)?;
        println!("{}", outcome.to_text());
        Ok(())
    }
}
