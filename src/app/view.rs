use std::fmt::Write as _;

use bevy::prelude::*;
use planet_clicker::{EconomyState, Planet, format_number, planet};

use super::input::page_count;
use super::resources::{
    HudText, NoticeBoard, PendingReset, Persistence, PlanetTile, SessionState, UPGRADES_PER_PAGE,
    UpgradePage,
};

const PLANET_TILE_SIZE: f32 = 220.0;
const FALLBACK_PLANET_COLOR: Color = Color::srgb(0.48, 0.48, 0.48);
const KEY_HELP: &str = "Space/click: click  1-0: buy upgrade  [ ]: page  A: auto-clicker  R: rebirth\n\
Q/E or F1-F8: planet  T: auto  Y: auto-rebirth  Z/X/C: quick multiplier  S: save  L: load  Backspace: reset";

pub fn spawn_planet(mut commands: Commands) {
    commands.spawn((
        Name::new("Planet"),
        PlanetTile,
        Sprite::from_color(FALLBACK_PLANET_COLOR, Vec2::splat(PLANET_TILE_SIZE)),
        Transform::from_xyz(260.0, 0.0, 0.0),
    ));
}

pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Name::new("HudText"),
        HudText,
        Text::new("Initializing..."),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(0.94, 0.97, 0.99)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(12.0),
            top: Val::Px(10.0),
            ..default()
        },
    ));
}

pub fn refresh_planet_visuals(
    session: Res<SessionState>,
    mut tiles: Query<&mut Sprite, With<PlanetTile>>,
) {
    let color = planet(session.economy.current_planet)
        .and_then(planet_color)
        .unwrap_or(FALLBACK_PLANET_COLOR);
    for mut sprite in &mut tiles {
        sprite.color = color;
    }
}

pub fn refresh_hud(
    session: Res<SessionState>,
    persistence: Res<Persistence>,
    page: Res<UpgradePage>,
    pending_reset: Res<PendingReset>,
    notices: Res<NoticeBoard>,
    mut hud_query: Query<&mut Text, With<HudText>>,
) {
    let Ok(mut hud) = hud_query.get_single_mut() else {
        return;
    };

    let mut body = hud_body(&session.economy, page.0);

    if let Some(message) = notices.message.as_deref() {
        let _ = write!(body, "\n>> {message}");
    } else if pending_reset.0 {
        body.push_str("\n>> Reset pending: Enter to confirm, Esc to cancel.");
    }
    if let Some(err) = persistence.last_error.as_deref() {
        let _ = write!(body, "\nSave: {err}");
    }
    let _ = write!(body, "\n\n{KEY_HELP}");

    *hud = Text::new(body);
}

/// Everything the player sees about the economy, one line per concern.
pub fn hud_body(economy: &EconomyState, page: usize) -> String {
    let planet_label = planet(economy.current_planet)
        .map(|entry| format!("{} ({}x)", entry.name, entry.mult))
        .unwrap_or_else(|| "-".to_string());
    let on_off = |enabled: bool| if enabled { "ON" } else { "OFF" };
    let auto_cost = economy.auto_clicker_cost();

    let mut body = format!(
        "Clicks: {}   Power: {}   Multiplier: {:.2}x\n\
         Auto-clickers: {}   Next: {}{}\n\
         Rebirths: {}   Rebirth multiplier: {}x\n\
         Planet: {}   Auto: {}   Auto-rebirth: {}\n",
        format_number(economy.clicks),
        format_number(economy.click_power),
        economy.multiplier,
        economy.auto_clickers,
        format_number(auto_cost),
        if economy.can_afford(auto_cost) { "" } else { " (locked)" },
        economy.rebirths,
        format_number(economy.rebirth_mult),
        planet_label,
        on_off(economy.auto_enabled),
        on_off(economy.auto_rebirth_enabled),
    );

    let page = page.min(page_count() - 1);
    let _ = writeln!(body, "\nUpgrades (page {}/{})", page + 1, page_count());
    let first = page * UPGRADES_PER_PAGE;
    for (offset, offer) in economy
        .upgrade_offers()
        .skip(first)
        .take(UPGRADES_PER_PAGE)
        .enumerate()
    {
        let key = (offset + 1) % 10;
        let _ = writeln!(
            body,
            "[{key}] Upgrade {:>3}  Cost: {:>8}  Owned: {:>3}{}",
            offer.index + 1,
            format_number(offer.cost),
            offer.owned,
            if offer.affordable { "" } else { "  (locked)" },
        );
    }

    body
}

fn planet_color(entry: &Planet) -> Option<Color> {
    entry.rgb().map(|[r, g, b]| Color::srgb_u8(r, g, b))
}
