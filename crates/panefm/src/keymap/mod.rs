//! Key chord parsing and matching.
//!
//! Parses key chord strings like "ctrl+n" or "alt+shift+j" from config
//! and matches them against crossterm KeyEvents at runtime.
//!
//! The keymap binds chords to filer actions; config entries override the
//! default chord of the action they name.

mod action;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub use action::Action;

use crate::filer::LayoutMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChord {
    pub key: KeyCode,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

pub fn parse_key_chord(input: &str) -> Option<KeyChord> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    // A lone "+" is the plus key, not a separator.
    if trimmed == "+" {
        return Some(KeyChord {
            key: KeyCode::Char('+'),
            ctrl: false,
            alt: false,
            shift: false,
            meta: false,
        });
    }

    let parts: Vec<&str> = trimmed
        .split('+')
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        return None;
    }

    let mut chord = KeyChord {
        key: KeyCode::Null,
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    for part in parts {
        match part.to_lowercase().as_str() {
            "ctrl" | "control" => chord.ctrl = true,
            "alt" | "option" => chord.alt = true,
            "shift" => chord.shift = true,
            "meta" | "cmd" | "super" => chord.meta = true,
            _ => {
                if chord.key != KeyCode::Null {
                    return None;
                }
                chord.key = parse_key(part)?;
            }
        }
    }

    if chord.key == KeyCode::Null {
        return None;
    }

    Some(chord)
}

fn parse_key(key: &str) -> Option<KeyCode> {
    match key.to_lowercase().as_str() {
        "esc" | "escape" => Some(KeyCode::Esc),
        "enter" | "return" => Some(KeyCode::Enter),
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "backspace" => Some(KeyCode::Backspace),
        "delete" | "del" => Some(KeyCode::Delete),
        "space" | "spacebar" => Some(KeyCode::Char(' ')),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" => Some(KeyCode::PageUp),
        "pagedown" => Some(KeyCode::PageDown),
        _ => {
            let mut chars = key.chars();
            let first = chars.next()?;
            if chars.next().is_none() {
                Some(KeyCode::Char(first))
            } else {
                None
            }
        }
    }
}

pub fn matches_chord(event: &KeyEvent, chord: &KeyChord) -> bool {
    let modifiers = event.modifiers;
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let alt = modifiers.contains(KeyModifiers::ALT);
    let meta = modifiers.contains(KeyModifiers::SUPER) || modifiers.contains(KeyModifiers::META);
    if ctrl != chord.ctrl || alt != chord.alt || meta != chord.meta {
        return false;
    }

    // Terminals report printable characters already shifted, so ignore
    // SHIFT for characters and compare case-insensitively under ctrl/alt.
    match (event.code, chord.key) {
        (KeyCode::Char(got), KeyCode::Char(want)) => {
            if chord.ctrl || chord.alt {
                got.eq_ignore_ascii_case(&want)
            } else {
                got == want
            }
        }
        (got, want) => {
            let shift = modifiers.contains(KeyModifiers::SHIFT);
            got == want && (shift == chord.shift || got == KeyCode::BackTab)
        }
    }
}

/// Chord-to-action bindings, first match wins.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyChord, Action)>,
}

impl Keymap {
    pub fn empty() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Bind `chord` to `action`, replacing any action already on `chord`.
    pub fn bind(&mut self, chord: KeyChord, action: Action) {
        self.bindings.retain(|(bound, _)| bound != &chord);
        self.bindings.push((chord, action));
    }

    /// Overlay `other`: its bindings replace the chords and the actions
    /// they name.
    pub fn merge(&mut self, other: Keymap) {
        for (chord, action) in other.bindings {
            self.bindings.retain(|(_, bound)| bound != &action);
            self.bind(chord, action);
        }
    }

    pub fn lookup(&self, event: &KeyEvent) -> Option<&Action> {
        self.bindings
            .iter()
            .find(|(chord, _)| matches_chord(event, chord))
            .map(|(_, action)| action)
    }

    /// Build a keymap from `action-name = "chord"` config entries.
    ///
    /// Unknown actions and unparsable chords are logged and skipped.
    pub fn from_config<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut keymap = Keymap::empty();
        for (name, chord) in entries {
            let action = match name.parse::<Action>() {
                Ok(action) => action,
                Err(err) => {
                    tracing::warn!(%err, "ignoring keymap entry");
                    continue;
                }
            };
            match parse_key_chord(chord) {
                Some(chord) => keymap.bind(chord, action),
                None => tracing::warn!(name, chord, "ignoring unparsable chord"),
            }
        }
        keymap
    }
}

impl Default for Keymap {
    fn default() -> Self {
        let defaults = [
            ("q", Action::Quit),
            ("j", Action::CursorDown),
            ("down", Action::CursorDown),
            ("k", Action::CursorUp),
            ("up", Action::CursorUp),
            ("l", Action::EnterDir),
            ("enter", Action::EnterDir),
            ("h", Action::ParentDir),
            ("backspace", Action::ParentDir),
            ("ctrl+n", Action::CreatePane),
            ("ctrl+w", Action::ClosePane),
            ("tab", Action::NextPane),
            ("backtab", Action::PrevPane),
            ("alt+j", Action::SwapNext),
            ("alt+k", Action::SwapPrev),
            ("ctrl+o", Action::ChdirNeighbor),
            ("ctrl+l", Action::ReloadAll),
            ("alt+f", Action::NextWorkspace),
            ("alt+b", Action::PrevWorkspace),
            ("alt+c", Action::CreateWorkspace),
            ("alt+w", Action::CloseWorkspace),
            ("alt+1", Action::Layout(LayoutMode::Tile)),
            ("alt+2", Action::Layout(LayoutMode::TileTop)),
            ("alt+3", Action::Layout(LayoutMode::TileBottom)),
            ("alt+4", Action::Layout(LayoutMode::OneLine)),
            ("alt+5", Action::Layout(LayoutMode::OneColumn)),
            ("alt+6", Action::Layout(LayoutMode::Fullscreen)),
            ("v", Action::Menu("layout".to_string())),
            ("w", Action::Menu("workspace".to_string())),
            ("x", Action::Menu("command".to_string())),
            ("s", Action::Shell),
            ("e", Action::Edit),
            ("t", Action::Terminal),
            ("r", Action::RenameWorkspace),
        ];
        let mut keymap = Keymap::empty();
        for (chord, action) in defaults {
            if let Some(chord) = parse_key_chord(chord) {
                keymap.bind(chord, action);
            }
        }
        keymap
    }
}
