//! Top-level driver
//!
//! Owns the simulation context and its collaborators. Each [`Game::step`]
//! runs one tick and hands the resulting events to the effect sink and the
//! high score store.

use crate::audio::{EffectSink, SoundEffect};
use crate::persistence::{HighScoreStore, load_high_score};
use crate::render::{DrawCommand, display_list};
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// A running game instance
pub struct Game<S: HighScoreStore, E: EffectSink> {
    state: GameState,
    store: S,
    sink: E,
    /// Events raised outside a tick, delivered with the next one
    pending: Vec<GameEvent>,
}

impl<S: HighScoreStore, E: EffectSink> Game<S, E> {
    /// Boot to the title screen, reading the stored high score
    pub fn new(seed: u64, store: S, sink: E) -> Self {
        let high_score = load_high_score(&store);
        Self {
            state: GameState::new(seed, high_score),
            store,
            sink,
            pending: vec![GameEvent::Intro],
        }
    }

    /// Run one tick and dispatch its events
    pub fn step(&mut self, input: &TickInput) -> Vec<GameEvent> {
        let mut events = std::mem::take(&mut self.pending);
        events.extend(tick(&mut self.state, input));

        for event in &events {
            if let GameEvent::NewHighScore { score } = event {
                if let Err(e) = self.store.set_high_score(*score) {
                    log::warn!("Could not save high score {}: {}", score, e);
                }
            }
            if let Some(effect) = SoundEffect::for_event(event) {
                self.sink.play(effect);
            }
        }

        events
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_over(&self) -> bool {
        self.state.phase == GamePhase::Over
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sink(&self) -> &E {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut E {
        &mut self.sink
    }

    /// Draw commands for the current state
    pub fn display_list(&self) -> Vec<DrawCommand> {
        display_list(&self.state)
    }
}
