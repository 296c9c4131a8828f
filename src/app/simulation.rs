use bevy::prelude::*;
use planet_clicker::{EconomyError, REBIRTH_REQUIREMENT, format_number, save_state};

use super::resources::{
    EconomyAction, FeedbackCue, NoticeBoard, Persistence, RuntimeConfig, SessionState,
};
use super::setup::restore_economy;

pub fn apply_economy_actions(
    mut actions: EventReader<EconomyAction>,
    mut session: ResMut<SessionState>,
    mut persistence: ResMut<Persistence>,
    mut notices: ResMut<NoticeBoard>,
    mut cues: EventWriter<FeedbackCue>,
    config: Res<RuntimeConfig>,
) {
    for action in actions.read() {
        let economy = &mut session.economy;
        match *action {
            EconomyAction::Click => {
                economy.manual_click();
                cues.send(FeedbackCue::Click);
            }
            EconomyAction::BuyUpgrade(index) => match economy.buy_upgrade(index) {
                Ok(purchase) => {
                    debug!("Bought upgrade {} (now {})", index + 1, purchase.owned);
                    cues.send(FeedbackCue::Purchase);
                }
                Err(EconomyError::InvalidIndex { .. }) => {
                    warn!("Ignoring purchase of unknown upgrade slot {index}");
                }
                Err(EconomyError::InsufficientFunds { .. }) => {}
            },
            EconomyAction::BuyAutoClicker => {
                if economy.buy_auto_clicker().is_ok() {
                    cues.send(FeedbackCue::Purchase);
                }
            }
            EconomyAction::Rebirth => match economy.rebirth(false) {
                Ok(rebirth) => {
                    info!(
                        "Rebirth #{} (multiplier {}x)",
                        rebirth.rebirths,
                        format_number(rebirth.rebirth_mult)
                    );
                    cues.send(FeedbackCue::Rebirth);
                }
                Err(_) => notices.post(
                    format!(
                        "Need {} clicks to rebirth.",
                        format_number(REBIRTH_REQUIREMENT)
                    ),
                    config.notice_seconds,
                ),
            },
            EconomyAction::SetPlanet(index) => {
                if let Err(err) = economy.set_planet(index) {
                    warn!("Ignoring planet selection: {err}");
                }
            }
            EconomyAction::MultiplyMultiplier(factor) => {
                economy.multiply_multiplier(factor);
                persistence.request_save();
            }
            EconomyAction::SetFlag(flag, value) => {
                economy.set_flag(flag, value);
                debug!("{} set to {value}", flag.name());
                persistence.request_save();
            }
            EconomyAction::Save => persistence.request_save(),
            EconomyAction::Load => {
                if restore_economy(economy, &persistence) {
                    notices.post("Loaded saved state.", config.notice_seconds);
                }
            }
            EconomyAction::Reset => {
                economy.reset_all();
                persistence.request_save();
                notices.post("Progress reset.", config.notice_seconds);
            }
        }
    }
}

pub fn run_tick_loops(
    time: Res<Time>,
    mut session: ResMut<SessionState>,
    mut cues: EventWriter<FeedbackCue>,
) {
    let report = session.advance(time.delta());
    if report.produced > 0.0 {
        trace!(
            "Auto production: {} ticks, +{}",
            report.production_ticks,
            format_number(report.produced)
        );
    }
    for rebirth in &report.rebirths {
        debug!(
            "Auto rebirth #{} (multiplier {}x)",
            rebirth.rebirths,
            format_number(rebirth.rebirth_mult)
        );
        cues.send(FeedbackCue::Rebirth);
    }
}

pub fn autosave_session(time: Res<Time>, mut persistence: ResMut<Persistence>) {
    if persistence.autosave_timer.tick(time.delta()).just_finished() {
        persistence.request_save();
    }
}

/// Writes at most once per frame, after every transition of the frame ran.
pub fn persist_session(session: Res<SessionState>, mut persistence: ResMut<Persistence>) {
    if !persistence.save_requested {
        return;
    }
    persistence.save_requested = false;

    match save_state(persistence.backend.as_ref(), &persistence.key, &session.economy) {
        Ok(()) => {
            debug!("Game saved");
            persistence.last_error = None;
        }
        Err(err) => {
            if persistence.last_error.is_none() {
                warn!("Save failed: {err:#}");
            }
            persistence.last_error = Some(err.to_string());
        }
    }
}

pub fn expire_notices(time: Res<Time>, mut notices: ResMut<NoticeBoard>) {
    notices.expire(time.delta());
}
