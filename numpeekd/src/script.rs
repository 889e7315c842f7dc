//! # Event Script Parser
//!
//! A line-based stand-in for the host editor: each line is one editor event.
//!
//! ## Format
//!
//! - `select "0xff"`: one selection region holding the quoted text
//! - `select "1" "2"`: several regions; `select` alone clears the selection
//! - `convert hex`: the convert-base button (`hex`, `dec`, `oct`, `bin`)
//! - `toggle 3`: a click on bit 3 of the display word
//! - `swap 32`: the byte-swap button for 16, 32 or 64 bit words
//! - `action {"func": ...}`: a raw payload as the popup UI would send it
//! - Comments: `# This is a comment`
//!
//! ## Example
//!
//! ```text
//! # Select a literal, flip its top bit, view it in binary
//! select "0x7f"
//! toggle 31
//! convert bin
//! ```

use literal_core::Base;
use std::collections::VecDeque;
use thiserror::Error;

/// Event script error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventScriptError {
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Empty script")]
    EmptyScript,
}

/// A single scripted editor event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedEvent {
    /// The selection changed to these regions
    Select(Vec<String>),
    /// Convert-base button
    Convert(Base),
    /// Bit click
    Toggle(u64),
    /// Byte-swap button, word size in bits
    Swap(u32),
    /// Raw action payload
    Action(String),
}

/// Event script
#[derive(Debug, Clone, Default)]
pub struct EventScript {
    events: VecDeque<ScriptedEvent>,
}

impl EventScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a script from text
    pub fn from_text(text: &str) -> Result<Self, EventScriptError> {
        let mut events = VecDeque::new();

        for (line_num, line) in text.lines().enumerate() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let event = Self::parse_line(line).map_err(|message| EventScriptError::ParseError {
                line: line_num + 1,
                message,
            })?;
            events.push_back(event);
        }

        if events.is_empty() {
            return Err(EventScriptError::EmptyScript);
        }

        Ok(Self { events })
    }

    fn parse_line(line: &str) -> Result<ScriptedEvent, String> {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "select" => Self::parse_quoted(rest).map(ScriptedEvent::Select),
            "convert" => Base::from_name(rest)
                .map(ScriptedEvent::Convert)
                .ok_or_else(|| format!("Invalid base: {:?}", rest)),
            "toggle" => rest
                .parse::<u64>()
                .map(ScriptedEvent::Toggle)
                .map_err(|_| format!("Invalid bit offset: {:?}", rest)),
            "swap" => rest
                .parse::<u32>()
                .map(ScriptedEvent::Swap)
                .map_err(|_| format!("Invalid word size: {:?}", rest)),
            "action" if !rest.is_empty() => Ok(ScriptedEvent::Action(rest.to_string())),
            "action" => Err("Missing action payload".to_string()),
            other => Err(format!("Unknown command: {}", other)),
        }
    }

    /// Splits `"a" "b c"` into its quoted parts; `\"` and `\\` escape
    fn parse_quoted(input: &str) -> Result<Vec<String>, String> {
        let mut parts = Vec::new();
        let mut chars = input.chars().peekable();

        loop {
            while chars.next_if(|c| c.is_whitespace()).is_some() {}
            match chars.next() {
                None => return Ok(parts),
                Some('"') => {}
                Some(other) => return Err(format!("Expected '\"', found {:?}", other)),
            }

            let mut part = String::new();
            loop {
                match chars.next() {
                    Some('"') => break,
                    Some('\\') => match chars.next() {
                        Some(escaped @ ('"' | '\\')) => part.push(escaped),
                        Some(other) => return Err(format!("Invalid escape: \\{}", other)),
                        None => return Err("Unterminated string".to_string()),
                    },
                    Some(c) => part.push(c),
                    None => return Err("Unterminated string".to_string()),
                }
            }
            parts.push(part);
        }
    }

    /// Returns the next event, if any
    pub fn next_event(&mut self) -> Option<ScriptedEvent> {
        self.events.pop_front()
    }

    /// Returns true if the script has more events
    pub fn has_more(&self) -> bool {
        !self.events.is_empty()
    }

    /// Returns the number of remaining events
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_select() {
        let mut script = EventScript::from_text(r#"select "0xff""#).unwrap();
        assert_eq!(
            script.next_event().unwrap(),
            ScriptedEvent::Select(vec!["0xff".to_string()])
        );
    }

    #[test]
    fn test_parse_select_regions() {
        let mut script = EventScript::from_text("select \"1\"  \" 2 \"\nselect").unwrap();
        assert_eq!(
            script.next_event().unwrap(),
            ScriptedEvent::Select(vec!["1".to_string(), " 2 ".to_string()])
        );
        assert_eq!(script.next_event().unwrap(), ScriptedEvent::Select(vec![]));
    }

    #[test]
    fn test_parse_select_escapes() {
        let mut script = EventScript::from_text(r#"select "a\"b\\c""#).unwrap();
        assert_eq!(
            script.next_event().unwrap(),
            ScriptedEvent::Select(vec![r#"a"b\c"#.to_string()])
        );
    }

    #[test]
    fn test_parse_edits() {
        let script = EventScript::from_text(
            r#"
            convert bin
            toggle 7
            swap 16
            action {"func":"toggle_bit","data":{"offset":1}}
        "#,
        )
        .unwrap();

        let mut script = script;
        assert_eq!(script.remaining(), 4);
        assert_eq!(
            script.next_event().unwrap(),
            ScriptedEvent::Convert(Base::Binary)
        );
        assert_eq!(script.next_event().unwrap(), ScriptedEvent::Toggle(7));
        assert_eq!(script.next_event().unwrap(), ScriptedEvent::Swap(16));
        assert_eq!(
            script.next_event().unwrap(),
            ScriptedEvent::Action(r#"{"func":"toggle_bit","data":{"offset":1}}"#.to_string())
        );
        assert!(!script.has_more());
    }

    #[test]
    fn test_parse_comments_and_empty_lines() {
        let script = EventScript::from_text("# Comment\nselect \"1\"\n\n# Another\ntoggle 0").unwrap();
        assert_eq!(script.remaining(), 2);
    }

    #[test]
    fn test_empty_script_error() {
        assert_eq!(EventScript::from_text("").unwrap_err(), EventScriptError::EmptyScript);
        assert_eq!(
            EventScript::from_text("# Just comments\n# Nothing else").unwrap_err(),
            EventScriptError::EmptyScript
        );
    }

    #[test]
    fn test_errors_carry_line_numbers() {
        let result = EventScript::from_text("select \"1\"\n\nconvert hexadecimal-ish");
        assert!(matches!(
            result,
            Err(EventScriptError::ParseError { line: 3, .. })
        ));

        let result = EventScript::from_text("toggle minus-one");
        assert!(matches!(
            result,
            Err(EventScriptError::ParseError { line: 1, .. })
        ));
    }

    #[test]
    fn test_bad_select_syntax() {
        assert!(EventScript::from_text("select 0xff").is_err());
        assert!(EventScript::from_text("select \"0xff").is_err());
        assert!(EventScript::from_text(r#"select "\n""#).is_err());
    }

    #[test]
    fn test_unknown_command() {
        let result = EventScript::from_text("explode");
        assert_eq!(
            result.unwrap_err(),
            EventScriptError::ParseError {
                line: 1,
                message: "Unknown command: explode".to_string()
            }
        );
    }

    #[test]
    fn test_action_needs_payload() {
        assert!(EventScript::from_text("action").is_err());
    }
}
