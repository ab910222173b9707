use std::io::Write;

use modhunt_core::SoundCue;
use modhunt_runtime::SoundBackend;

/// Terminals have no mixer: cues are logged, and the bell rings for the big moments.
#[derive(Copy, Clone, Debug, Default)]
pub struct TerminalSound {
    pub bell: bool,
}

impl SoundBackend for TerminalSound {
    fn cue(&self, cue: SoundCue, volume: f32) {
        log::debug!("cue {cue:?} at {volume:.2}");
        if self.bell && matches!(cue, SoundCue::Explosion | SoundCue::Win | SoundCue::Lose) {
            print!("\x07");
            let _ = std::io::stdout().flush();
        }
    }

    fn music(&self, playing: bool, volume: f32) {
        if playing {
            log::debug!("music playing at {volume:.2}");
        } else {
            log::debug!("music stopped");
        }
    }
}
