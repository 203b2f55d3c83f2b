//! `sudo rm -rf /` theater.
//!
//! Timeline from submit: password prompt (immediate, printed by the caller),
//! warning at 1s, confirmation echo at 3s with glitch mode switched on, then
//! one line every 500ms, and glitch mode off one tick after the last line.
//! Nothing is deleted.

use crate::output::OutputEvent;
use crate::playback::{ms, PlaybackSequence};

/// Lines printed while the "system" is destroyed.
pub const DESTRUCTION_LINES: [&str; 17] = [
    "Deleting /boot...",
    "Deleting /etc...",
    "Deleting /home...",
    "Deleting /var...",
    "Deleting /usr...",
    "rm: cannot remove '/dev/null': Operation not permitted",
    "Deleting /tmp...",
    "Deleting /opt...",
    "FATAL ERROR: System files corrupted",
    "Kernel panic - not syncing: VFS: Unable to mount root fs",
    "System halted.",
    "",
    "💀 SYSTEM DESTROYED 💀",
    "",
    "Just kidding! This is a simulation 😄",
    "Never run \"sudo rm -rf /\" on a real system!",
    "Your files are safe and sound. 🛡️",
];

/// The first lines are styled as destruction, the reveal as success.
const DESTRUCTIVE_LINE_COUNT: usize = 12;

/// Exactly `rm -rf /` or `rm -rf /*`.
pub fn is_destructive(command: &str) -> bool {
    command == "rm -rf /" || command == "rm -rf /*"
}

pub fn destruction_sequence() -> PlaybackSequence {
    let total = DESTRUCTION_LINES.len();
    PlaybackSequence::new("destruction")
        .after(ms(1000), OutputEvent::destruction("⚠️  WARNING: This command will destroy the system!"))
        .with(OutputEvent::warning("Are you absolutely sure? (yes/no): "))
        .after(ms(2000), OutputEvent::error("yes"))
        .with(OutputEvent::plain(""))
        .with(OutputEvent::destruction("💀 SYSTEM DESTRUCTION INITIATED 💀"))
        .with(OutputEvent::Glitch(true))
        .every(ms(500), total + 1, |i| {
            if i == total {
                return vec![OutputEvent::Glitch(false)];
            }
            let text = DESTRUCTION_LINES[i];
            if i < DESTRUCTIVE_LINE_COUNT {
                vec![OutputEvent::destruction(text)]
            } else {
                vec![OutputEvent::success(text)]
            }
        })
}
