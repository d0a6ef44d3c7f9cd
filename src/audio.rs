//! Audio system using Web Audio API
//!
//! Procedurally generated sound effects and a looping two-voice melody.
//! Every failure (no AudioContext, node creation errors) is swallowed; the
//! game runs silent.

use web_sys::{
    AudioContext, BiquadFilterNode, BiquadFilterType, GainNode, OscillatorNode, OscillatorType,
};

use crate::events::EventSink;
use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Regular balloon caught
    Catch,
    /// Bonus balloon caught
    Bonus,
    /// Balloon popped on the floor
    BalloonPop,
    /// Run ended
    GameOver,
}

/// C4..C5 and E4..D5
const MELODY_LOW: [f32; 8] = [262.0, 294.0, 330.0, 349.0, 392.0, 440.0, 494.0, 523.0];
const MELODY_HIGH: [f32; 8] = [330.0, 349.0, 392.0, 415.0, 440.0, 494.0, 523.0, 587.0];
/// Seconds per melody note
const NOTE_DURATION: f32 = 0.8;

/// Running background music voices
struct Music {
    low: OscillatorNode,
    high: OscillatorNode,
    gain: GainNode,
    note_index: usize,
    note_timer: f32,
}

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
    music: Option<Music>,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        // May fail outside a secure context
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            master_volume: settings.master_volume,
            sfx_volume: settings.sfx_volume,
            music_volume: settings.music_volume,
            muted: settings.muted,
            music: None,
        }
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
        self.apply_music_volume();
    }

    /// Mute/unmute all audio; unmuting mid-run restarts the music
    pub fn set_muted(&mut self, muted: bool, run_active: bool) {
        self.muted = muted;
        if muted {
            self.stop_music();
        } else if run_active {
            self.start_music();
        }
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    fn music_gain(&self) -> f32 {
        0.15 * self.music_volume * self.master_volume
    }

    fn apply_music_volume(&self) {
        if let (Some(ctx), Some(music)) = (&self.ctx, &self.music) {
            music
                .gain
                .gain()
                .set_value_at_time(self.music_gain(), ctx.current_time())
                .ok();
        }
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }

        let Some(ctx) = &self.ctx else { return };
        self.resume();

        match effect {
            SoundEffect::Catch => self.play_catch(ctx, vol),
            SoundEffect::Bonus => self.play_bonus(ctx, vol),
            SoundEffect::BalloonPop => self.play_pop(ctx, vol),
            SoundEffect::GameOver => self.play_game_over(ctx, vol),
        }
    }

    // === Background music ===

    /// Start the melody loop (no-op if muted or already running)
    pub fn start_music(&mut self) {
        if self.muted || self.music.is_some() {
            return;
        }
        let Some(ctx) = &self.ctx else { return };
        self.resume();
        self.music = self.create_music(ctx);
    }

    fn create_music(&self, ctx: &AudioContext) -> Option<Music> {
        let low = ctx.create_oscillator().ok()?;
        let high = ctx.create_oscillator().ok()?;
        let filter = ctx.create_biquad_filter().ok()?;
        let gain = ctx.create_gain().ok()?;

        low.connect_with_audio_node(&filter).ok()?;
        high.connect_with_audio_node(&filter).ok()?;
        filter.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        let t = ctx.current_time();
        low.set_type(OscillatorType::Sine);
        high.set_type(OscillatorType::Triangle);
        low.frequency().set_value_at_time(MELODY_LOW[0], t).ok();
        high.frequency().set_value_at_time(MELODY_HIGH[0], t).ok();
        filter.set_type(BiquadFilterType::Lowpass);
        filter.frequency().set_value_at_time(1200.0, t).ok();
        gain.gain().set_value_at_time(self.music_gain(), t).ok();

        low.start().ok()?;
        high.start().ok()?;

        Some(Music {
            low,
            high,
            gain,
            note_index: 0,
            note_timer: 0.0,
        })
    }

    /// Advance the melody; call once per frame
    pub fn update_music(&mut self, dt: f32) {
        let (Some(ctx), Some(music)) = (&self.ctx, &mut self.music) else {
            return;
        };
        music.note_timer += dt;
        if music.note_timer < NOTE_DURATION {
            return;
        }
        music.note_timer = 0.0;
        music.note_index = (music.note_index + 1) % MELODY_LOW.len();

        let t = ctx.current_time();
        music
            .low
            .frequency()
            .set_value_at_time(MELODY_LOW[music.note_index], t)
            .ok();
        music
            .high
            .frequency()
            .set_value_at_time(MELODY_HIGH[music.note_index % MELODY_HIGH.len()], t)
            .ok();
    }

    pub fn stop_music(&mut self) {
        if let Some(music) = self.music.take() {
            music.low.stop().ok();
            music.high.stop().ok();
        }
    }

    // === Sound generators ===

    /// Create an oscillator wired into the given gain node
    fn create_osc(
        &self,
        ctx: &AudioContext,
        gain: &GainNode,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<OscillatorNode> {
        let osc = ctx.create_oscillator().ok()?;
        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(gain).ok()?;
        Some(osc)
    }

    fn create_gain(&self, ctx: &AudioContext) -> Option<GainNode> {
        let gain = ctx.create_gain().ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;
        Some(gain)
    }

    /// Catch - bouncy rising major chord
    fn play_catch(&self, ctx: &AudioContext, vol: f32) {
        let Some(gain) = self.create_gain(ctx) else { return };
        let t = ctx.current_time();
        let voices = [
            (523.0, 659.0, 784.0, OscillatorType::Sine),
            (659.0, 784.0, 1047.0, OscillatorType::Triangle),
        ];
        for (f0, f1, f2, kind) in voices {
            let Some(osc) = self.create_osc(ctx, &gain, f0, kind) else { continue };
            osc.frequency().set_value_at_time(f0, t).ok();
            osc.frequency().exponential_ramp_to_value_at_time(f1, t + 0.1).ok();
            osc.frequency().exponential_ramp_to_value_at_time(f2, t + 0.2).ok();
            osc.start().ok();
            osc.stop_with_when(t + 0.3).ok();
        }
        gain.gain().set_value_at_time(vol * 0.3, t).ok();
        gain.gain().exponential_ramp_to_value_at_time(0.01, t + 0.3).ok();
    }

    /// Bonus - sparkly chord sweeping up an octave
    fn play_bonus(&self, ctx: &AudioContext, vol: f32) {
        let Some(gain) = self.create_gain(ctx) else { return };
        let t = ctx.current_time();
        let voices = [
            (523.0, 1047.0, OscillatorType::Sine),
            (659.0, 1319.0, OscillatorType::Sine),
            (784.0, 1568.0, OscillatorType::Triangle),
        ];
        for (from, to, kind) in voices {
            let Some(osc) = self.create_osc(ctx, &gain, from, kind) else { continue };
            osc.frequency().set_value_at_time(from, t).ok();
            osc.frequency().exponential_ramp_to_value_at_time(to, t + 0.4).ok();
            osc.start().ok();
            osc.stop_with_when(t + 0.5).ok();
        }
        gain.gain().set_value_at_time(vol * 0.4, t).ok();
        gain.gain().exponential_ramp_to_value_at_time(0.01, t + 0.5).ok();
    }

    /// Pop - short square-wave drop
    fn play_pop(&self, ctx: &AudioContext, vol: f32) {
        let Some(gain) = self.create_gain(ctx) else { return };
        let Some(osc) = self.create_osc(ctx, &gain, 200.0, OscillatorType::Square) else {
            return;
        };
        let t = ctx.current_time();

        osc.frequency().set_value_at_time(200.0, t).ok();
        osc.frequency().exponential_ramp_to_value_at_time(50.0, t + 0.1).ok();
        gain.gain().set_value_at_time(vol * 0.2, t).ok();
        gain.gain().exponential_ramp_to_value_at_time(0.01, t + 0.1).ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.1).ok();
    }

    /// Game over - filtered sawtooth sliding down two octaves
    fn play_game_over(&self, ctx: &AudioContext, vol: f32) {
        let Some(gain) = self.create_gain(ctx) else { return };
        let Some(filter) = self.create_lowpass(ctx, &gain) else { return };
        let Some(osc) = ctx.create_oscillator().ok() else { return };
        if osc.connect_with_audio_node(&filter).is_err() {
            return;
        }
        let t = ctx.current_time();

        osc.set_type(OscillatorType::Sawtooth);
        osc.frequency().set_value_at_time(440.0, t).ok();
        osc.frequency().exponential_ramp_to_value_at_time(220.0, t + 0.5).ok();
        osc.frequency().exponential_ramp_to_value_at_time(110.0, t + 1.0).ok();

        filter.frequency().set_value_at_time(1000.0, t).ok();
        filter.frequency().exponential_ramp_to_value_at_time(200.0, t + 1.0).ok();

        gain.gain().set_value_at_time(vol * 0.4, t).ok();
        gain.gain().exponential_ramp_to_value_at_time(0.01, t + 1.0).ok();

        osc.start().ok();
        osc.stop_with_when(t + 1.0).ok();
    }

    fn create_lowpass(&self, ctx: &AudioContext, out: &GainNode) -> Option<BiquadFilterNode> {
        let filter = ctx.create_biquad_filter().ok()?;
        filter.set_type(BiquadFilterType::Lowpass);
        filter.connect_with_audio_node(out).ok()?;
        Some(filter)
    }
}

impl EventSink for AudioManager {
    fn on_start(&mut self) {
        self.start_music();
    }

    fn on_catch(&mut self, is_bonus: bool) {
        self.play(if is_bonus {
            SoundEffect::Bonus
        } else {
            SoundEffect::Catch
        });
    }

    fn on_floor_miss(&mut self) {
        self.play(SoundEffect::BalloonPop);
    }

    fn on_game_over(&mut self) {
        self.stop_music();
        self.play(SoundEffect::GameOver);
    }

    fn on_quit(&mut self) {
        self.stop_music();
    }
}
