use planet_clicker::{
    EconomyFlag, EconomyState, LoadOutcome, MemoryBackend, PLANETS, STORAGE_KEY, UPGRADE_SLOTS,
    apply_save_data, format_number, load_from_json_string, load_state, save_data_from_state,
    save_state, save_to_json_string,
};

const EPSILON: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= EPSILON * expected.abs().max(1.0),
        "expected {expected}, got {actual}"
    );
}

#[test]
fn thousand_clicks_then_rebirth() {
    let mut state = EconomyState::default();
    assert_eq!(state.clicks, 0.0);
    assert_eq!(state.click_power, 1.0);
    assert_eq!(state.multiplier, 1.0);

    for _ in 0..1000 {
        state.manual_click();
    }
    assert_close(state.clicks, 1000.0);
    assert_close(state.total_clicks, 1000.0);

    state.rebirth(false).expect("requirement met");

    assert_eq!(state.clicks, 0.0);
    assert_eq!(state.total_clicks, 0.0);
    assert_eq!(state.rebirths, 1);
    assert_close(state.rebirth_mult, 100.0);
    assert_close(state.multiplier, 100.0);
}

#[test]
fn rebirth_multiplier_after_n_forced_rebirths() {
    for n in 0..8u32 {
        let mut state = EconomyState::default();
        for _ in 0..n {
            state.rebirth(true).expect("forced");
        }
        let expected = if n == 0 { 1.0 } else { 10f64.powi(n as i32 + 1) };
        assert_close(state.rebirth_mult, expected);
    }
}

#[test]
fn upgrades_compound_click_yield() {
    let mut state = EconomyState::default();
    state.clicks = 500.0;

    for slot in [0, 0, 1, 4] {
        state.buy_upgrade(slot).expect("affordable");
    }

    assert_eq!(state.upgrades[0], 2);
    assert_eq!(state.upgrades[1], 1);
    assert_eq!(state.upgrades[4], 1);
    assert_close(state.click_power, 5.0);
    assert_close(state.clicks, 500.0 - 10.0 - 11.2 - 20.0 - 50.0);

    let before = state.clicks;
    state.manual_click();
    assert_close(state.clicks - before, 5.0);
}

#[test]
fn automation_and_planets_feed_the_next_rebirth() {
    let mut state = EconomyState::default();
    state.clicks = 100.0;
    state.buy_auto_clicker().expect("affordable");
    state.set_planet(7).expect("valid planet");
    assert_close(state.multiplier, PLANETS[7].mult);

    let mut ticks = 0;
    while state.clicks < 1000.0 {
        state.auto_produce();
        ticks += 1;
    }
    assert_eq!(ticks, 20);

    state.set_flag(EconomyFlag::AutoRebirth, true);
    let rebirth = state.auto_rebirth_check().expect("threshold reached");
    assert_eq!(rebirth.rebirths, 1);
    assert_eq!(state.auto_clickers, 1);
    assert_close(state.multiplier, PLANETS[7].mult * 100.0);
}

#[test]
fn malformed_save_leaves_fresh_defaults() {
    for payload in ["", "{", "not even json", "{\"rebirths\":-1}"] {
        let backend = MemoryBackend::with_entry(STORAGE_KEY, payload);
        let mut state = EconomyState::default();

        let outcome = load_state(&backend, STORAGE_KEY, &mut state).expect("memory read");

        assert!(!matches!(outcome, LoadOutcome::Loaded(_)), "{payload:?}");
        assert_eq!(state, EconomyState::default());
    }
}

#[test]
fn save_with_fifty_upgrades_is_repaired() {
    let mut progressed = EconomyState::default();
    progressed.clicks = 4321.0;
    progressed.auto_clickers = 6;
    progressed.rebirths = 3;
    progressed.rebirth_mult = 10_000.0;
    progressed.current_planet = 2;

    let mut json = serde_json::to_value(save_data_from_state(&progressed)).expect("to value");
    json["upgrades"] = serde_json::Value::from(vec![1u32; 50]);
    let backend = MemoryBackend::with_entry(STORAGE_KEY, &json.to_string());

    let mut state = EconomyState::default();
    let outcome = load_state(&backend, STORAGE_KEY, &mut state).expect("memory read");

    let LoadOutcome::Loaded(report) = outcome else {
        panic!("expected a loaded save, got {outcome:?}");
    };
    assert_eq!(report.repaired, vec!["upgrades"]);
    assert_eq!(state.upgrades.len(), UPGRADE_SLOTS);
    assert!(state.upgrades.iter().all(|&owned| owned == 0));
    assert_eq!(state.clicks, 4321.0);
    assert_eq!(state.auto_clickers, 6);
    assert_eq!(state.rebirths, 3);
    assert_eq!(state.current_planet, 2);
    assert_close(state.multiplier, PLANETS[2].mult * 10_000.0);
}

#[test]
fn saved_boost_is_written_but_not_restored() {
    let mut state = EconomyState::default();
    state.multiply_multiplier(10.0);

    let backend = MemoryBackend::default();
    save_state(&backend, STORAGE_KEY, &state).expect("memory write");
    let stored = backend.get(STORAGE_KEY).expect("record stored");
    let record = load_from_json_string(&stored).expect("stored record parses");
    assert_eq!(record.multiplier, Some(10.0));

    let mut restored = EconomyState::default();
    apply_save_data(&mut restored, &record);
    assert_eq!(restored.multiplier, 1.0);
}

#[test]
fn file_backend_round_trip() {
    use planet_clicker::{FileBackend, SaveBackend};

    let dir = std::env::temp_dir().join(format!(
        "planet_clicker_test_{}_{}",
        std::process::id(),
        line!()
    ));
    let backend = FileBackend::new(&dir);
    assert!(backend.read(STORAGE_KEY).expect("missing file is fine").is_none());

    let mut state = EconomyState::default();
    state.clicks = 99.0;
    state.upgrades[42] = 3;
    save_state(&backend, STORAGE_KEY, &state).expect("file write");
    assert!(backend.path_for(STORAGE_KEY).exists());

    let mut restored = EconomyState::default();
    let outcome = load_state(&backend, STORAGE_KEY, &mut restored).expect("file read");
    assert!(matches!(outcome, LoadOutcome::Loaded(_)));
    assert_eq!(restored, state);

    let json = save_to_json_string(&save_data_from_state(&state)).expect("serialize");
    assert_eq!(backend.read(STORAGE_KEY).expect("file read"), Some(json));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn formatter_examples() {
    assert_eq!(format_number(999.0), "999");
    assert_eq!(format_number(1000.0), "1.00K");
    assert_eq!(format_number(0.0), "0");
}
