use std::sync::{Mutex, MutexGuard, PoisonError};

use modhunt_core::SoundCue;
use serde::{Deserialize, Serialize};

/// Whatever actually makes noise.
pub trait SoundBackend: Send + Sync {
    fn cue(&self, cue: SoundCue, volume: f32);

    /// Starts, stops or re-levels the background track.
    fn music(&self, playing: bool, volume: f32);
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    pub muted: bool,
    pub master_volume: f32,
    pub music_volume: f32,
}

impl AudioSettings {
    fn clamped(self) -> Self {
        Self {
            master_volume: self.master_volume.clamp(0.0, 1.0),
            music_volume: self.music_volume.clamp(0.0, 1.0),
            ..self
        }
    }

    fn effective_music_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.music_volume }
    }
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            muted: false,
            master_volume: 0.3,
            music_volume: 0.5,
        }
    }
}

#[derive(Debug)]
struct AudioState {
    settings: AudioSettings,
    music_playing: bool,
}

/// Audio state shared by the whole app: mute, volumes, and whether music is on.
pub struct AudioDirector {
    backend: Box<dyn SoundBackend>,
    state: Mutex<AudioState>,
}

impl AudioDirector {
    pub fn new(backend: impl SoundBackend + 'static, settings: AudioSettings) -> Self {
        Self {
            backend: Box::new(backend),
            state: Mutex::new(AudioState {
                settings: settings.clamped(),
                music_playing: false,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, AudioState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn settings(&self) -> AudioSettings {
        self.state().settings
    }

    pub fn is_music_playing(&self) -> bool {
        self.state().music_playing
    }

    pub fn play(&self, cue: SoundCue) {
        let settings = self.settings();
        if settings.muted {
            log::trace!("Muted, skipping {cue:?}");
            return;
        }
        self.backend.cue(cue, settings.master_volume);
    }

    pub fn start_music(&self) {
        let volume = {
            let mut state = self.state();
            if state.music_playing {
                return;
            }
            state.music_playing = true;
            state.settings.effective_music_volume()
        };
        self.backend.music(true, volume);
    }

    pub fn stop_music(&self) {
        let volume = {
            let mut state = self.state();
            if !state.music_playing {
                return;
            }
            state.music_playing = false;
            state.settings.effective_music_volume()
        };
        self.backend.music(false, volume);
    }

    /// Returns whether music is playing afterwards.
    pub fn toggle_music(&self) -> bool {
        if self.is_music_playing() {
            self.stop_music();
            false
        } else {
            self.start_music();
            true
        }
    }

    /// Returns whether audio is muted afterwards.
    pub fn toggle_mute(&self) -> bool {
        let (muted, playing, volume) = {
            let mut state = self.state();
            state.settings.muted = !state.settings.muted;
            (
                state.settings.muted,
                state.music_playing,
                state.settings.effective_music_volume(),
            )
        };
        if playing {
            self.backend.music(true, volume);
        }
        muted
    }

    /// Sets the music volume, clamped to `[0, 1]`.
    pub fn set_music_volume(&self, volume: f32) {
        let (playing, volume) = {
            let mut state = self.state();
            state.settings.music_volume = volume.clamp(0.0, 1.0);
            (
                state.music_playing,
                state.settings.effective_music_volume(),
            )
        };
        if playing {
            self.backend.music(true, volume);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Debug, PartialEq)]
    pub(crate) enum Played {
        Cue(SoundCue, f32),
        Music(bool, f32),
    }

    #[derive(Clone, Default)]
    pub(crate) struct RecordingBackend(pub Arc<Mutex<Vec<Played>>>);

    impl RecordingBackend {
        pub fn played(&self) -> Vec<Played> {
            self.0.lock().unwrap().clone()
        }
    }

    impl SoundBackend for RecordingBackend {
        fn cue(&self, cue: SoundCue, volume: f32) {
            self.0.lock().unwrap().push(Played::Cue(cue, volume));
        }

        fn music(&self, playing: bool, volume: f32) {
            self.0.lock().unwrap().push(Played::Music(playing, volume));
        }
    }

    fn director() -> (AudioDirector, RecordingBackend) {
        let backend = RecordingBackend::default();
        (
            AudioDirector::new(backend.clone(), AudioSettings::default()),
            backend,
        )
    }

    #[test]
    fn cues_play_at_master_volume() {
        let (audio, backend) = director();

        audio.play(SoundCue::Explosion);

        assert_eq!(backend.played(), vec![Played::Cue(SoundCue::Explosion, 0.3)]);
    }

    #[test]
    fn muting_suppresses_cues_and_silences_music() {
        let (audio, backend) = director();
        audio.start_music();

        assert!(audio.toggle_mute());
        audio.play(SoundCue::Win);

        assert_eq!(
            backend.played(),
            vec![Played::Music(true, 0.5), Played::Music(true, 0.0)]
        );
        assert!(!audio.toggle_mute());
    }

    #[test]
    fn music_start_and_stop_are_idempotent() {
        let (audio, backend) = director();

        audio.start_music();
        audio.start_music();
        audio.stop_music();
        audio.stop_music();

        assert_eq!(
            backend.played(),
            vec![Played::Music(true, 0.5), Played::Music(false, 0.5)]
        );
        assert!(audio.toggle_music());
        assert!(audio.is_music_playing());
    }

    #[test]
    fn music_volume_is_clamped() {
        let (audio, _) = director();

        audio.set_music_volume(1.7);
        assert_eq!(audio.settings().music_volume, 1.0);

        audio.set_music_volume(-0.2);
        assert_eq!(audio.settings().music_volume, 0.0);
    }
}
