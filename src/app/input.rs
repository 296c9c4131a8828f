use bevy::prelude::*;
use planet_clicker::{EconomyFlag, UPGRADE_SLOTS, planet_count};

use super::resources::{
    EconomyAction, NoticeBoard, PendingReset, RuntimeConfig, SessionState, UPGRADES_PER_PAGE,
    UpgradePage,
};

const UPGRADE_KEYS: [KeyCode; UPGRADES_PER_PAGE] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
    KeyCode::Digit0,
];

const PLANET_KEYS: [KeyCode; 8] = [
    KeyCode::F1,
    KeyCode::F2,
    KeyCode::F3,
    KeyCode::F4,
    KeyCode::F5,
    KeyCode::F6,
    KeyCode::F7,
    KeyCode::F8,
];

const QUICK_MULTIPLIER_KEYS: [KeyCode; 3] = [KeyCode::KeyZ, KeyCode::KeyX, KeyCode::KeyC];

pub fn page_count() -> usize {
    UPGRADE_SLOTS.div_ceil(UPGRADES_PER_PAGE)
}

pub fn handle_keyboard_controls(
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    session: Res<SessionState>,
    config: Res<RuntimeConfig>,
    mut page: ResMut<UpgradePage>,
    mut actions: EventWriter<EconomyAction>,
) {
    let economy = &session.economy;

    if keys.just_pressed(KeyCode::Space) || mouse.just_pressed(MouseButton::Left) {
        actions.send(EconomyAction::Click);
    }

    for (offset, key) in UPGRADE_KEYS.iter().enumerate() {
        if keys.just_pressed(*key) {
            let index = page.0 * UPGRADES_PER_PAGE + offset;
            if index < UPGRADE_SLOTS {
                actions.send(EconomyAction::BuyUpgrade(index));
            }
        }
    }

    if keys.just_pressed(KeyCode::BracketLeft) {
        page.0 = (page.0 + page_count() - 1) % page_count();
    }
    if keys.just_pressed(KeyCode::BracketRight) {
        page.0 = (page.0 + 1) % page_count();
    }

    for (index, key) in PLANET_KEYS.iter().enumerate() {
        if keys.just_pressed(*key) {
            actions.send(EconomyAction::SetPlanet(index));
        }
    }
    let planets = planet_count();
    if keys.just_pressed(KeyCode::KeyQ) {
        let previous = (economy.current_planet + planets - 1) % planets;
        actions.send(EconomyAction::SetPlanet(previous));
    }
    if keys.just_pressed(KeyCode::KeyE) {
        let next = (economy.current_planet + 1) % planets;
        actions.send(EconomyAction::SetPlanet(next));
    }

    if keys.just_pressed(KeyCode::KeyA) {
        actions.send(EconomyAction::BuyAutoClicker);
    }
    if keys.just_pressed(KeyCode::KeyR) {
        actions.send(EconomyAction::Rebirth);
    }

    for (key, flag) in [
        (KeyCode::KeyT, EconomyFlag::AutoProduction),
        (KeyCode::KeyY, EconomyFlag::AutoRebirth),
    ] {
        if keys.just_pressed(key) {
            actions.send(EconomyAction::SetFlag(flag, !economy.flag(flag)));
        }
    }

    for (key, factor) in QUICK_MULTIPLIER_KEYS.iter().zip(config.quick_multipliers) {
        if keys.just_pressed(*key) {
            actions.send(EconomyAction::MultiplyMultiplier(factor));
        }
    }

    if keys.just_pressed(KeyCode::KeyS) {
        actions.send(EconomyAction::Save);
    }
    if keys.just_pressed(KeyCode::KeyL) {
        actions.send(EconomyAction::Load);
    }
}

/// Backspace arms a reset, Enter confirms it and Escape disarms it.
pub fn handle_reset_confirmation(
    keys: Res<ButtonInput<KeyCode>>,
    config: Res<RuntimeConfig>,
    mut pending: ResMut<PendingReset>,
    mut notices: ResMut<NoticeBoard>,
    mut actions: EventWriter<EconomyAction>,
) {
    if keys.just_pressed(KeyCode::Backspace) && !pending.0 {
        pending.0 = true;
        notices.post(
            "Reset ALL progress? Enter to confirm, Esc to cancel.",
            config.notice_seconds * 3.0,
        );
        return;
    }
    if !pending.0 {
        return;
    }

    if keys.just_pressed(KeyCode::Enter) {
        pending.0 = false;
        actions.send(EconomyAction::Reset);
    } else if keys.just_pressed(KeyCode::Escape) {
        pending.0 = false;
        notices.message = None;
    }
}
