use bevy::prelude::*;

use super::resources::{CueSound, FeedbackCue, RuntimeConfig};

/// One short tone per cue. Playback problems stay inside the audio backend
/// and never reach gameplay.
pub fn play_feedback_cues(
    mut commands: Commands,
    mut cues: EventReader<FeedbackCue>,
    config: Res<RuntimeConfig>,
    sound: Option<Res<CueSound>>,
) {
    let Some(sound) = sound.filter(|_| config.audio_enabled) else {
        cues.clear();
        return;
    };

    for cue in cues.read() {
        trace!("Audio cue {cue:?}");
        commands.spawn((AudioPlayer(sound.0.clone()), PlaybackSettings::DESPAWN));
    }
}
