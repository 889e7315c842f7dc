//! # Host Runtime
//!
//! The event loop that plays the part of the editor: it owns the selection,
//! feeds events to the popup, applies replacements and keeps a transcript.

use crate::script::{EventScript, EventScriptError, ScriptedEvent};
use popup_settings::persistence::{deserialize_settings, PersistenceError};
use popup_settings::{create_default_registry, Config, ConfigError};
use services_number_popup::{NumberPopup, PopupError, PopupRenderer};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Host runtime error types
#[derive(Debug, Error)]
pub enum HostRuntimeError {
    #[error("Script error: {0}")]
    ScriptError(#[from] EventScriptError),

    #[error("Settings file error: {0}")]
    SettingsFile(#[from] PersistenceError),

    #[error("Invalid settings: {0}")]
    InvalidSettings(#[from] ConfigError),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Loads a JSON overrides file on top of the default settings
pub fn load_settings(path: &Path) -> Result<Config, HostRuntimeError> {
    let bytes = fs::read(path).map_err(|source| HostRuntimeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let data = deserialize_settings(&bytes)?;

    let mut registry = create_default_registry();
    registry.import_overrides(data.to_overrides());
    let config = registry.snapshot()?;
    info!(path = %path.display(), overrides = data.overrides.len(), "loaded settings");
    Ok(config)
}

/// Host runtime configuration
#[derive(Debug, Clone, Default)]
pub struct HostRuntimeConfig {
    /// Popup settings snapshot
    pub settings: Config,
    /// Optional event script
    pub script: Option<String>,
    /// Maximum steps to run (0 = unlimited)
    pub max_steps: usize,
}

/// One line of the session transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEntry {
    /// Popup shown with this rendering
    Shown(String),
    /// Popup hidden
    Hidden,
    /// Selection replaced after an edit
    Replaced { from: String, to: String },
    /// Edit refused; selection left alone
    Rejected(String),
}

impl fmt::Display for TranscriptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptEntry::Shown(rendering) => write!(f, "{}", rendering),
            TranscriptEntry::Hidden => write!(f, "(popup hidden)"),
            TranscriptEntry::Replaced { from, to } => write!(f, "{} -> {}", from, to),
            TranscriptEntry::Rejected(reason) => write!(f, "(edit rejected: {})", reason),
        }
    }
}

/// Host runtime
pub struct HostRuntime {
    /// Configuration
    config: HostRuntimeConfig,
    /// The popup under test
    popup: NumberPopup,
    /// Text renderer
    renderer: PopupRenderer,
    /// Event script, if any
    script: Option<EventScript>,
    /// Current selection regions
    selections: Vec<String>,
    /// Everything the host showed or changed
    transcript: Vec<TranscriptEntry>,
    /// Step counter
    steps: usize,
}

impl HostRuntime {
    /// Creates a new host runtime
    pub fn new(config: HostRuntimeConfig) -> Result<Self, HostRuntimeError> {
        config.settings.validate()?;

        let script = match &config.script {
            Some(script_text) => Some(EventScript::from_text(script_text)?),
            None => None,
        };

        Ok(Self {
            popup: NumberPopup::new(config.settings.clone()),
            renderer: PopupRenderer::default(),
            config,
            script,
            selections: Vec::new(),
            transcript: Vec::new(),
            steps: 0,
        })
    }

    /// Runs the event loop
    ///
    /// Returns when the script is exhausted or max steps is reached.
    pub fn run(&mut self) -> Result<(), HostRuntimeError> {
        loop {
            if self.config.max_steps > 0 && self.steps >= self.config.max_steps {
                debug!(steps = self.steps, "step limit reached");
                break;
            }

            let Some(event) = self.script.as_mut().and_then(EventScript::next_event) else {
                break;
            };

            self.handle_event(event);
            self.steps += 1;
        }

        Ok(())
    }

    /// Handles one editor event
    pub fn handle_event(&mut self, event: ScriptedEvent) {
        debug!(?event, "host event");
        match event {
            ScriptedEvent::Select(regions) => {
                self.selections = regions;
                self.render();
            }
            ScriptedEvent::Convert(base) => {
                self.edit(|popup, text| popup.on_convert_base(text, base));
            }
            ScriptedEvent::Toggle(offset) => {
                self.edit(|popup, text| popup.on_toggle_bit(text, offset));
            }
            ScriptedEvent::Swap(bits) => {
                self.edit(|popup, text| popup.on_swap_endianness(text, bits));
            }
            ScriptedEvent::Action(payload) => {
                self.edit(|popup, text| popup.handle_payload(text, &payload));
            }
        }
    }

    /// Applies an edit to the single selected region, then re-renders
    fn edit<F>(&mut self, apply: F)
    where
        F: FnOnce(&NumberPopup, &str) -> Result<String, PopupError>,
    {
        let [text] = self.selections.as_slice() else {
            warn!(
                regions = self.selections.len(),
                "edit needs exactly one selection"
            );
            self.transcript.push(TranscriptEntry::Rejected(
                "edit needs exactly one selection".to_string(),
            ));
            return;
        };

        match apply(&self.popup, text) {
            Ok(replacement) => {
                info!(from = %text, to = %replacement, "replacing selection");
                self.transcript.push(TranscriptEntry::Replaced {
                    from: text.clone(),
                    to: replacement.clone(),
                });
                self.selections = vec![replacement];
                self.render();
            }
            Err(err) if err.is_silent() => {
                debug!(%err, "edit ignored");
            }
            Err(err) => {
                warn!(%err, "edit rejected");
                self.transcript.push(TranscriptEntry::Rejected(err.to_string()));
            }
        }
    }

    fn render(&mut self) {
        let regions: Vec<&str> = self.selections.iter().map(String::as_str).collect();
        let entry = match self.popup.on_selection_changed(&regions) {
            Some(content) => TranscriptEntry::Shown(self.renderer.render(&content)),
            None => TranscriptEntry::Hidden,
        };
        self.transcript.push(entry);
    }

    /// Current selection regions
    pub fn selections(&self) -> &[String] {
        &self.selections
    }

    /// Everything recorded so far
    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// The transcript as printable text, one entry per block
    pub fn transcript_text(&self) -> String {
        self.transcript
            .iter()
            .map(|entry| entry.to_string())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Returns the current step count
    pub fn step_count(&self) -> usize {
        self.steps
    }

    /// The popup settings in effect
    pub fn settings(&self) -> &Config {
        self.popup.config()
    }
}
