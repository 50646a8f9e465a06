//! Breakout entry point
//!
//! Native builds run a headless demo round driven by the autopilot. The web
//! build is started from `breakout::web`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use breakout::audio::LogSink;
    use breakout::consts::TICK_PERIOD;
    use breakout::persistence::JsonFileStore;
    use breakout::sim::{GameEvent, TickInput};
    use breakout::{Game, Settings};

    env_logger::init();
    log::info!("Breakout (native) starting...");

    let settings = Settings::load();
    let seed: u64 = rand::random();
    log::info!("Game initialized with seed: {}", seed);

    let store = JsonFileStore::new(&settings.high_score_path);
    let mut game = Game::new(seed, store, LogSink);
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    let mut ticks = 0u64;
    while !game.is_over() && ticks < settings.max_ticks {
        for event in game.step(&input) {
            match event {
                GameEvent::BallLost => log::info!("Ball lost after {} ticks", ticks),
                GameEvent::Won => log::info!("Cleared the wall after {} ticks", ticks),
                GameEvent::NewHighScore { score } => log::info!("New high score: {}", score),
                _ => {}
            }
        }
        ticks += 1;
        if settings.realtime {
            std::thread::sleep(TICK_PERIOD);
        }
    }

    let state = game.state();
    if !game.is_over() {
        log::warn!("Stopped after {} ticks without finishing", ticks);
    }
    println!(
        "Score: {}  High score: {}  Ticks: {}",
        state.score, state.high_score, ticks
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is breakout::web::wasm_start, this is just to satisfy the compiler
}
