use std::env;
use std::path::PathBuf;
use std::time::Duration;

use bevy::audio::Pitch;
use bevy::prelude::*;
use planet_clicker::{EconomyFlag, EconomyState, Rebirth, STORAGE_KEY, SaveBackend};

pub const UPGRADES_PER_PAGE: usize = 10;

#[derive(Resource, Debug, Clone)]
pub struct RuntimeConfig {
    pub auto_click_interval_ms: u64,
    pub auto_rebirth_interval_ms: u64,
    pub autosave_interval_seconds: f32,
    pub storage_key: String,
    pub save_dir: PathBuf,
    pub audio_enabled: bool,
    pub cue_frequency_hz: f32,
    pub cue_duration_ms: u64,
    pub quick_multipliers: [f64; 3],
    pub notice_seconds: f32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            auto_click_interval_ms: 10,
            auto_rebirth_interval_ms: 50,
            autosave_interval_seconds: 2.0,
            storage_key: STORAGE_KEY.to_string(),
            save_dir: PathBuf::from("saves"),
            audio_enabled: true,
            cue_frequency_hz: 600.0,
            cue_duration_ms: 100,
            quick_multipliers: [2.0, 10.0, 100.0],
            notice_seconds: 3.0,
        }
    }
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(dir) = env::var_os("PLANET_CLICKER_SAVE_DIR") {
            config.save_dir = PathBuf::from(dir);
        }
        if env::var_os("PLANET_CLICKER_MUTE").is_some() {
            config.audio_enabled = false;
        }
        config
    }

    pub fn auto_click_period(&self) -> Duration {
        Duration::from_millis(self.auto_click_interval_ms.max(1))
    }

    pub fn auto_rebirth_period(&self) -> Duration {
        Duration::from_millis(self.auto_rebirth_interval_ms.max(1))
    }

    pub fn autosave_period(&self) -> Duration {
        Duration::from_secs_f32(self.autosave_interval_seconds.max(0.1))
    }

    pub fn cue_duration(&self) -> Duration {
        Duration::from_millis(self.cue_duration_ms)
    }
}

/// What the two tick loops did during one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub production_ticks: u32,
    pub produced: f64,
    pub rebirths: Vec<Rebirth>,
}

#[derive(Resource, Debug)]
pub struct SessionState {
    pub economy: EconomyState,
    pub production_timer: Timer,
    pub rebirth_timer: Timer,
}

impl SessionState {
    pub fn new(economy: EconomyState, config: &RuntimeConfig) -> Self {
        Self {
            economy,
            production_timer: Timer::new(config.auto_click_period(), TimerMode::Repeating),
            rebirth_timer: Timer::new(config.auto_rebirth_period(), TimerMode::Repeating),
        }
    }

    /// Advances both loops by `delta`, running every elapsed period of the
    /// production loop before the rebirth loop.
    pub fn advance(&mut self, delta: Duration) -> TickReport {
        let mut report = TickReport::default();

        let production_steps = self.production_timer.tick(delta).times_finished_this_tick();
        for _ in 0..production_steps {
            report.produced += self.economy.auto_produce();
        }
        report.production_ticks = production_steps;

        let rebirth_steps = self.rebirth_timer.tick(delta).times_finished_this_tick();
        for _ in 0..rebirth_steps {
            if let Some(rebirth) = self.economy.auto_rebirth_check() {
                report.rebirths.push(rebirth);
            }
        }

        report
    }
}

#[derive(Resource)]
pub struct Persistence {
    pub backend: Box<dyn SaveBackend>,
    pub key: String,
    pub autosave_timer: Timer,
    pub save_requested: bool,
    pub last_error: Option<String>,
}

impl Persistence {
    pub fn new(backend: Box<dyn SaveBackend>, config: &RuntimeConfig) -> Self {
        Self {
            backend,
            key: config.storage_key.clone(),
            autosave_timer: Timer::new(config.autosave_period(), TimerMode::Repeating),
            save_requested: false,
            last_error: None,
        }
    }

    pub fn request_save(&mut self) {
        self.save_requested = true;
    }
}

/// Input events consumed by the economy.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum EconomyAction {
    Click,
    BuyUpgrade(usize),
    BuyAutoClicker,
    Rebirth,
    SetPlanet(usize),
    MultiplyMultiplier(f64),
    SetFlag(EconomyFlag, bool),
    Save,
    Load,
    /// Already confirmed by the player.
    Reset,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackCue {
    Click,
    Purchase,
    Rebirth,
}

#[derive(Resource, Debug, Default)]
pub struct NoticeBoard {
    pub message: Option<String>,
    pub timer: Timer,
}

impl NoticeBoard {
    pub fn post(&mut self, message: impl Into<String>, seconds: f32) {
        self.message = Some(message.into());
        self.timer = Timer::from_seconds(seconds.max(0.1), TimerMode::Once);
    }

    pub fn expire(&mut self, delta: Duration) {
        if self.message.is_some() && self.timer.tick(delta).finished() {
            self.message = None;
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct UpgradePage(pub usize);

#[derive(Resource, Debug, Default)]
pub struct PendingReset(pub bool);

#[derive(Resource, Debug, Clone)]
pub struct CueSound(pub Handle<Pitch>);

#[derive(Component)]
pub struct HudText;

#[derive(Component)]
pub struct PlanetTile;
