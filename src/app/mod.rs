mod audio;
mod input;
mod resources;
mod setup;
mod simulation;
mod state;
mod view;

use bevy::prelude::*;

use resources::{
    EconomyAction, FeedbackCue, NoticeBoard, PendingReset, RuntimeConfig, UpgradePage,
};
use state::AppPhase;

pub struct ClickerAppPlugin;

impl Plugin for ClickerAppPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppPhase>()
            .insert_resource(RuntimeConfig::from_env())
            .init_resource::<NoticeBoard>()
            .init_resource::<UpgradePage>()
            .init_resource::<PendingReset>()
            .add_event::<EconomyAction>()
            .add_event::<FeedbackCue>()
            .add_systems(Startup, (setup::spawn_camera, setup::prepare_cue_sound))
            .add_systems(OnEnter(AppPhase::Boot), setup::bootstrap_session)
            .add_systems(
                OnEnter(AppPhase::InGame),
                (view::spawn_planet, view::spawn_hud),
            )
            .add_systems(
                Update,
                (
                    input::handle_reset_confirmation,
                    input::handle_keyboard_controls,
                    simulation::apply_economy_actions,
                    simulation::run_tick_loops,
                    simulation::autosave_session,
                    simulation::persist_session,
                    simulation::expire_notices,
                    audio::play_feedback_cues,
                    view::refresh_planet_visuals,
                    view::refresh_hud,
                )
                    .chain()
                    .run_if(in_state(AppPhase::InGame)),
            );
    }
}
