use bevy::audio::Pitch;
use bevy::prelude::*;
use planet_clicker::{EconomyState, LoadOutcome, SaveBackend, load_state};

use super::resources::{CueSound, Persistence, RuntimeConfig, SessionState};
use super::state::AppPhase;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Name::new("PrimaryCamera"), Camera2d));
}

pub fn prepare_cue_sound(
    mut commands: Commands,
    config: Res<RuntimeConfig>,
    mut pitches: ResMut<Assets<Pitch>>,
) {
    let handle = pitches.add(Pitch::new(config.cue_frequency_hz, config.cue_duration()));
    commands.insert_resource(CueSound(handle));
}

pub fn bootstrap_session(
    mut commands: Commands,
    config: Res<RuntimeConfig>,
    mut next_phase: ResMut<NextState<AppPhase>>,
) {
    let persistence = Persistence::new(platform_backend(&config), &config);

    let mut economy = EconomyState::default();
    restore_economy(&mut economy, &persistence);

    commands.insert_resource(SessionState::new(economy, &config));
    commands.insert_resource(persistence);

    next_phase.set(AppPhase::InGame);
}

/// Loads the stored record into `economy`, logging instead of failing.
pub fn restore_economy(economy: &mut EconomyState, persistence: &Persistence) -> bool {
    match load_state(persistence.backend.as_ref(), &persistence.key, economy) {
        Ok(LoadOutcome::Loaded(report)) => {
            if !report.is_clean() {
                warn!("Repaired save fields: {}", report.repaired.join(", "));
            }
            info!("Loaded saved state");
            true
        }
        Ok(LoadOutcome::NoSave) => {
            info!("No saved state found, starting fresh");
            false
        }
        Ok(LoadOutcome::Malformed(reason)) => {
            warn!("Discarding malformed save: {reason}");
            false
        }
        Err(err) => {
            warn!("Save storage unavailable: {err:#}");
            false
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_backend(config: &RuntimeConfig) -> Box<dyn SaveBackend> {
    Box::new(planet_clicker::FileBackend::new(config.save_dir.clone()))
}

#[cfg(target_arch = "wasm32")]
fn platform_backend(_config: &RuntimeConfig) -> Box<dyn SaveBackend> {
    Box::new(planet_clicker::LocalStorageBackend)
}
