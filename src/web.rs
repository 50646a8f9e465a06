//! Browser bindings
//!
//! A JS host creates a [`WebGame`], forwards key events, calls `tick` every
//! 20 ms and paints the JSON display list onto a 2D canvas.

use wasm_bindgen::prelude::*;

use crate::Settings;
use crate::audio::AudioManager;
use crate::game::Game;
use crate::persistence::LocalStorageStore;
use crate::platform::Controls;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Breakout starting...");
}

/// Game instance exported to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    game: Game<LocalStorageStore, AudioManager>,
    controls: Controls,
    settings: Settings,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        log::info!("Game initialized with seed: {}", seed);
        WebGame {
            game: Game::new(seed, LocalStorageStore::new(), AudioManager::new(&settings)),
            controls: Controls::default(),
            settings,
        }
    }

    /// Forward a `keydown`/`keyup` event's `code`. Returns true if handled.
    pub fn key_event(&mut self, code: &str, pressed: bool) -> bool {
        self.controls.apply_key(code, pressed)
    }

    /// Advance one tick; returns the number of events raised
    pub fn tick(&mut self) -> usize {
        let input = self.controls.to_tick_input();
        self.game.step(&input).len()
    }

    /// Current display list as JSON
    pub fn display_list_json(&self) -> String {
        serde_json::to_string(&self.game.display_list()).unwrap_or_else(|e| {
            log::error!("Display list encode failed: {}", e);
            "[]".to_string()
        })
    }

    /// Tick period in milliseconds for `setInterval`
    pub fn tick_period_ms(&self) -> u32 {
        crate::consts::TICK_PERIOD.as_millis() as u32
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.settings.muted = muted;
        self.settings.save();
        self.game.sink_mut().apply_settings(&self.settings);
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}
