//! Trigger Module
//!
//! Turns a global hotkey chord into a stream of trigger events, and
//! resolves the origin string attached to each capture. The listener is
//! registered once at startup and lives for the process lifetime.

use crate::config::Config;
use crate::error::{ClipError, ClipResult};
use rdev::{EventType, Key};
use std::collections::HashSet;
use std::process::Command;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{debug, warn};

/// One hotkey activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Ctrl,
    Shift,
    Alt,
    Meta,
}

impl Modifier {
    fn is_down(&self, pressed: &HashSet<Key>) -> bool {
        match self {
            Modifier::Ctrl => {
                pressed.contains(&Key::ControlLeft) || pressed.contains(&Key::ControlRight)
            }
            Modifier::Shift => {
                pressed.contains(&Key::ShiftLeft) || pressed.contains(&Key::ShiftRight)
            }
            Modifier::Alt => pressed.contains(&Key::Alt) || pressed.contains(&Key::AltGr),
            Modifier::Meta => {
                pressed.contains(&Key::MetaLeft) || pressed.contains(&Key::MetaRight)
            }
        }
    }
}

/// A parsed hotkey chord: zero or more modifiers plus one key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotkey {
    pub modifiers: Vec<Modifier>,
    pub key: Key,
}

impl Hotkey {
    /// Parse a binding like `"ctrl+shift+s"` or `"f9"` (case-insensitive)
    pub fn parse(binding: &str) -> ClipResult<Self> {
        let mut modifiers = Vec::new();
        let mut key = None;

        for token in binding.split('+') {
            let token = token.trim().to_lowercase();
            match token.as_str() {
                "ctrl" | "control" => modifiers.push(Modifier::Ctrl),
                "shift" => modifiers.push(Modifier::Shift),
                "alt" => modifiers.push(Modifier::Alt),
                "meta" | "super" | "win" => modifiers.push(Modifier::Meta),
                name => {
                    if key.is_some() {
                        return Err(ClipError::Config(format!(
                            "Hotkey '{}' has more than one non-modifier key",
                            binding
                        )));
                    }
                    key = Some(key_from_name(name).ok_or_else(|| {
                        ClipError::Config(format!("Unknown key '{}' in hotkey '{}'", name, binding))
                    })?);
                }
            }
        }

        let key = key.ok_or_else(|| {
            ClipError::Config(format!("Hotkey '{}' is missing a non-modifier key", binding))
        })?;

        Ok(Self { modifiers, key })
    }
}

fn key_from_name(name: &str) -> Option<Key> {
    let key = match name {
        "a" => Key::KeyA,
        "b" => Key::KeyB,
        "c" => Key::KeyC,
        "d" => Key::KeyD,
        "e" => Key::KeyE,
        "f" => Key::KeyF,
        "g" => Key::KeyG,
        "h" => Key::KeyH,
        "i" => Key::KeyI,
        "j" => Key::KeyJ,
        "k" => Key::KeyK,
        "l" => Key::KeyL,
        "m" => Key::KeyM,
        "n" => Key::KeyN,
        "o" => Key::KeyO,
        "p" => Key::KeyP,
        "q" => Key::KeyQ,
        "r" => Key::KeyR,
        "s" => Key::KeyS,
        "t" => Key::KeyT,
        "u" => Key::KeyU,
        "v" => Key::KeyV,
        "w" => Key::KeyW,
        "x" => Key::KeyX,
        "y" => Key::KeyY,
        "z" => Key::KeyZ,
        "0" => Key::Num0,
        "1" => Key::Num1,
        "2" => Key::Num2,
        "3" => Key::Num3,
        "4" => Key::Num4,
        "5" => Key::Num5,
        "6" => Key::Num6,
        "7" => Key::Num7,
        "8" => Key::Num8,
        "9" => Key::Num9,
        "f1" => Key::F1,
        "f2" => Key::F2,
        "f3" => Key::F3,
        "f4" => Key::F4,
        "f5" => Key::F5,
        "f6" => Key::F6,
        "f7" => Key::F7,
        "f8" => Key::F8,
        "f9" => Key::F9,
        "f10" => Key::F10,
        "f11" => Key::F11,
        "f12" => Key::F12,
        "space" => Key::Space,
        "enter" | "return" => Key::Return,
        _ => return None,
    };
    Some(key)
}

/// Start the global hotkey listener and return a receiver for trigger events
///
/// rdev::listen blocks forever, so it gets a dedicated thread. Key repeats
/// while the chord is held do not re-fire.
pub fn start_listener(hotkey: Hotkey) -> UnboundedReceiver<TriggerEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    std::thread::spawn(move || {
        let mut pressed: HashSet<Key> = HashSet::new();

        let result = rdev::listen(move |event| match event.event_type {
            EventType::KeyPress(key) => {
                if key == hotkey.key
                    && !pressed.contains(&key)
                    && hotkey.modifiers.iter().all(|m| m.is_down(&pressed))
                {
                    debug!("Hotkey chord pressed");
                    if tx.send(TriggerEvent).is_err() {
                        warn!("Trigger receiver dropped");
                    }
                }
                pressed.insert(key);
            }
            EventType::KeyRelease(key) => {
                pressed.remove(&key);
            }
            _ => {}
        });

        if let Err(e) = result {
            warn!("Global input listener stopped: {:?}", e);
        }
    });

    rx
}

/// Resolve the origin string sent as `website`
///
/// A configured label wins; otherwise ask the desktop for the active window
/// title (X11 and KWin tools, in that order).
pub fn resolve_origin(config: &Config) -> String {
    if !config.source_label.is_empty() {
        return config.source_label.clone();
    }

    for tool in ["xdotool", "kdotool"] {
        if let Ok(output) = Command::new(tool)
            .args(["getactivewindow", "getwindowname"])
            .output()
        {
            if output.status.success() {
                let title = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if !title.is_empty() {
                    return title;
                }
            }
        }
    }

    "unknown".to_string()
}
