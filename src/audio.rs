//! Sound effects for simulation events
//!
//! Effects are procedurally generated tones - no sample files needed. The
//! tone recipes are plain data so they can be checked off-target; only
//! [`AudioManager`] (wasm32) touches the Web Audio API.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Title screen jingle
    Intro,
    /// Round begins
    Start,
    /// Ball hits a side or the top wall
    WallBounce,
    /// Ball hits the paddle
    PaddleBounce,
    /// Ball destroys a brick
    BrickImpact,
    /// Ball fell past the paddle
    Loss,
    /// Every brick destroyed
    Win,
}

impl SoundEffect {
    /// The effect a simulation event triggers, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Intro => Some(SoundEffect::Intro),
            GameEvent::RoundStarted => Some(SoundEffect::Start),
            GameEvent::WallBounce => Some(SoundEffect::WallBounce),
            GameEvent::PaddleBounce => Some(SoundEffect::PaddleBounce),
            GameEvent::BrickHit => Some(SoundEffect::BrickImpact),
            GameEvent::BallLost => Some(SoundEffect::Loss),
            GameEvent::Won => Some(SoundEffect::Win),
            GameEvent::NewHighScore { .. } => None,
        }
    }

    /// Tone recipe for this effect
    pub fn tones(self) -> Vec<Tone> {
        match self {
            SoundEffect::Intro => {
                arpeggio(&[262.0, 330.0, 392.0, 523.0], 0.12, Waveform::Triangle, 0.25)
            }
            // Whoosh up
            SoundEffect::Start => vec![Tone::sweep(200.0, 600.0, Waveform::Triangle, 0.3, 0.2)],
            SoundEffect::WallBounce => vec![Tone::new(400.0, Waveform::Sine, 0.3, 0.08)],
            // Solid thump
            SoundEffect::PaddleBounce => vec![Tone::sweep(150.0, 60.0, Waveform::Sine, 0.6, 0.1)],
            SoundEffect::BrickImpact => vec![
                Tone::sweep(900.0, 120.0, Waveform::Square, 0.25, 0.12),
                Tone::new(60.0, Waveform::Sine, 0.3, 0.1),
            ],
            SoundEffect::Loss => {
                arpeggio(&[400.0, 350.0, 300.0, 200.0], 0.2, Waveform::Sine, 0.3)
            }
            SoundEffect::Win => {
                arpeggio(&[400.0, 500.0, 600.0, 800.0], 0.1, Waveform::Triangle, 0.3)
            }
        }
    }
}

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
}

/// One oscillator note with an exponential decay envelope
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub freq_start: f32,
    pub freq_end: f32,
    pub waveform: Waveform,
    /// Peak gain before volume scaling
    pub gain: f32,
    /// Seconds until the envelope has decayed
    pub duration: f64,
    /// Seconds after the effect is triggered
    pub delay: f64,
}

impl Tone {
    pub fn new(freq: f32, waveform: Waveform, gain: f32, duration: f64) -> Self {
        Self::sweep(freq, freq, waveform, gain, duration)
    }

    pub fn sweep(
        freq_start: f32,
        freq_end: f32,
        waveform: Waveform,
        gain: f32,
        duration: f64,
    ) -> Self {
        Self {
            freq_start,
            freq_end,
            waveform,
            gain,
            duration,
            delay: 0.0,
        }
    }
}

/// Notes played one after another, `step` seconds apart
fn arpeggio(freqs: &[f32], step: f64, waveform: Waveform, gain: f32) -> Vec<Tone> {
    freqs
        .iter()
        .enumerate()
        .map(|(i, &freq)| Tone {
            delay: i as f64 * step,
            ..Tone::new(freq, waveform, gain, step * 2.0)
        })
        .collect()
}

/// Consumer of sound effects (fire-and-forget)
pub trait EffectSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Records effects instead of playing them
impl EffectSink for Vec<SoundEffect> {
    fn play(&mut self, effect: SoundEffect) {
        self.push(effect);
    }
}

/// Logs effects at debug level (headless runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl EffectSink for LogSink {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("sfx: {:?}", effect);
    }
}

#[cfg(target_arch = "wasm32")]
pub use web_audio::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web_audio {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{EffectSink, SoundEffect, Tone, Waveform};
    use crate::Settings;

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        volume: f32,
    }

    impl AudioManager {
        pub fn new(settings: &Settings) -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                volume: settings.effective_volume(),
            }
        }

        /// Pick up volume/mute changes
        pub fn apply_settings(&mut self, settings: &Settings) {
            self.volume = settings.effective_volume();
        }

        fn create_osc(
            ctx: &AudioContext,
            freq: f32,
            waveform: Waveform,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(match waveform {
                Waveform::Sine => OscillatorType::Sine,
                Waveform::Square => OscillatorType::Square,
                Waveform::Triangle => OscillatorType::Triangle,
            });
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        fn play_tone(ctx: &AudioContext, tone: &Tone, vol: f32) {
            let Some((osc, gain)) = Self::create_osc(ctx, tone.freq_start, tone.waveform) else {
                return;
            };
            let t = ctx.current_time() + tone.delay;

            gain.gain().set_value_at_time(vol * tone.gain, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + tone.duration)
                .ok();
            if tone.freq_end != tone.freq_start {
                osc.frequency().set_value_at_time(tone.freq_start, t).ok();
                osc.frequency()
                    .exponential_ramp_to_value_at_time(tone.freq_end, t + tone.duration)
                    .ok();
            }

            osc.start_with_when(t).ok();
            osc.stop_with_when(t + tone.duration * 1.25).ok();
        }
    }

    impl EffectSink for AudioManager {
        fn play(&mut self, effect: SoundEffect) {
            if self.volume <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            for tone in effect.tones() {
                Self::play_tone(ctx, &tone, self.volume);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_gameplay_event_has_a_sound() {
        let events = [
            GameEvent::Intro,
            GameEvent::RoundStarted,
            GameEvent::WallBounce,
            GameEvent::PaddleBounce,
            GameEvent::BrickHit,
            GameEvent::BallLost,
            GameEvent::Won,
        ];
        for event in &events {
            assert!(SoundEffect::for_event(event).is_some(), "{:?}", event);
        }
        assert_eq!(
            SoundEffect::for_event(&GameEvent::NewHighScore { score: 3 }),
            None
        );
    }

    #[test]
    fn test_tone_recipes_are_audible() {
        let effects = [
            SoundEffect::Intro,
            SoundEffect::Start,
            SoundEffect::WallBounce,
            SoundEffect::PaddleBounce,
            SoundEffect::BrickImpact,
            SoundEffect::Loss,
            SoundEffect::Win,
        ];
        for effect in effects {
            let tones = effect.tones();
            assert!(!tones.is_empty());
            for tone in tones {
                // Exponential ramps need strictly positive targets
                assert!(tone.freq_start > 0.0 && tone.freq_end > 0.0);
                assert!(tone.gain > 0.01);
                assert!(tone.duration > 0.0);
            }
        }
    }

    #[test]
    fn test_arpeggio_staggers_notes() {
        let tones = SoundEffect::Loss.tones();
        assert_eq!(tones.len(), 4);
        assert_eq!(tones[0].delay, 0.0);
        assert!((tones[3].delay - 0.6).abs() < 1e-9);
        // Descending
        assert!(tones[0].freq_start > tones[3].freq_start);
    }

    #[test]
    fn test_recording_sink() {
        let mut sink: Vec<SoundEffect> = Vec::new();
        sink.play(SoundEffect::Win);
        assert_eq!(sink, vec![SoundEffect::Win]);
    }
}
