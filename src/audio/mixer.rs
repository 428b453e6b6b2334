// NES APU non-linear channel mixer.
//
// Real hardware sums the five channels through a resistor DAC network
// rather than adding linearly, so a faithful mix has to reproduce that
// curve: pulse1/pulse2 combine through one formula, triangle/noise/DMC
// through another, and the two results are added.
//
//   pulse_out = 95.88 / (8128 / (pulse1 + pulse2) + 100)
//   tnd_out   = 159.79 / (1 / (triangle/8227 + noise/12241 + dmc/22638) + 100)

pub struct Mixer {
    volume: f32,
}

impl Mixer {
    pub fn new() -> Self {
        Self { volume: 1.0 }
    }

    pub fn with_volume(volume: f32) -> Self {
        Self {
            volume: volume.clamp(0.0, 1.0),
        }
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Combine raw channel outputs (0-15 for pulse/triangle/noise, 0-127 for
    /// DMC) into a signed sample. The formulas below produce roughly [0, 1];
    /// `2x - 1` recenters that onto [-1, 1] so silence maps to 0 rather than
    /// carrying a DC offset.
    pub fn mix(&self, pulse1: u8, pulse2: u8, triangle: u8, noise: u8, dmc: u8) -> f32 {
        let pulse_out = self.mix_pulse(pulse1, pulse2);
        let tnd_out = self.mix_tnd(triangle, noise, dmc);
        let centered = ((pulse_out + tnd_out) * 2.0 - 1.0) * self.volume;
        centered.clamp(-1.0, 1.0)
    }

    fn mix_pulse(&self, pulse1: u8, pulse2: u8) -> f32 {
        let sum = pulse1 as f32 + pulse2 as f32;
        if sum == 0.0 {
            return 0.0;
        }
        95.88 / (8128.0 / sum + 100.0)
    }

    fn mix_tnd(&self, triangle: u8, noise: u8, dmc: u8) -> f32 {
        let sum = triangle as f32 / 8227.0 + noise as f32 / 12241.0 + dmc as f32 / 22638.0;
        if sum == 0.0 {
            return 0.0;
        }
        159.79 / (1.0 / sum + 100.0)
    }

    /// Like `mix`, but with a per-channel volume multiplier applied before
    /// the NES formula runs — handy for a debug mixer that mutes channels
    /// individually.
    #[allow(dead_code)]
    #[allow(clippy::too_many_arguments)]
    pub fn mix_with_channel_volumes(
        &self,
        pulse1: u8,
        pulse2: u8,
        triangle: u8,
        noise: u8,
        dmc: u8,
        pulse1_vol: f32,
        pulse2_vol: f32,
        triangle_vol: f32,
        noise_vol: f32,
        dmc_vol: f32,
    ) -> f32 {
        let scale = |value: u8, vol: f32| (value as f32 * vol.clamp(0.0, 1.0)) as u8;
        self.mix(
            scale(pulse1, pulse1_vol),
            scale(pulse2, pulse2_vol),
            scale(triangle, triangle_vol),
            scale(noise, noise_vol),
            scale(dmc, dmc_vol),
        )
    }
}

impl Default for Mixer {
    fn default() -> Self {
        Self::new()
    }
}
