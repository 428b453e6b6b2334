// Ties the mixer, resampler, and cpal output together into a single object
// the emulator can feed one APU sample at a time.
//
// ```no_run
// use nespresso::audio::{AudioSystem, AudioConfig};
// use nespresso::apu::Apu;
//
// let audio_config = AudioConfig::new().with_sample_rate(48000);
// let mut audio_system = AudioSystem::new(audio_config).unwrap();
//
// let mut apu = Apu::new();
// audio_system.process_apu_sample(
//     apu.pulse1_output(),
//     apu.pulse2_output(),
//     apu.triangle_output(),
//     apu.noise_output(),
//     apu.dmc_output(),
// );
// ```

pub mod mixer;
pub mod output;
pub mod resampler;

pub use mixer::Mixer;
pub use output::{AudioConfig, AudioOutput, AudioOutputBuilder};
pub use resampler::{sample_rates, AudioBuffer, Resampler};

use std::sync::{Arc, Mutex};

pub struct AudioSystem {
    mixer: Mixer,
    resampler: Arc<Mutex<Resampler>>,
    output: AudioOutput,
    samples_processed: u64,
    samples_output: u64,
}

impl AudioSystem {
    pub fn new(config: AudioConfig) -> Result<Self, String> {
        let resampler = match config.sample_rate {
            44100 => Resampler::new_44_1_khz(),
            48000 => Resampler::new_48_khz(),
            rate => Resampler::new(sample_rates::NES_CPU_CLOCK, rate as f64),
        };
        let output = AudioOutput::new(config)?;

        Ok(Self {
            mixer: Mixer::new(),
            resampler: Arc::new(Mutex::new(resampler)),
            output,
            samples_processed: 0,
            samples_output: 0,
        })
    }

    pub fn new_default() -> Result<Self, String> {
        Self::new(AudioConfig::new())
    }

    /// Mixes one APU tick's worth of channel outputs, feeds the resampler,
    /// and drains whatever output samples that produces into the playback
    /// buffer. Call once per APU clock.
    pub fn process_apu_sample(&mut self, pulse1: u8, pulse2: u8, triangle: u8, noise: u8, dmc: u8) {
        let mixed = self.mixer.mix(pulse1, pulse2, triangle, noise, dmc);

        let mut resampler = self.resampler.lock().unwrap();
        resampler.add_input_sample(mixed);
        self.samples_processed += 1;

        while let Some(sample) = resampler.get_output_sample() {
            self.output.push_sample(sample);
            self.samples_output += 1;
        }
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.mixer.set_volume(volume);
    }

    pub fn volume(&self) -> f32 {
        self.mixer.volume()
    }

    pub fn buffer_len(&self) -> usize {
        self.output.buffer_len()
    }

    pub fn buffer_capacity(&self) -> usize {
        self.output.buffer_capacity()
    }

    pub fn is_buffer_nearly_full(&self) -> bool {
        self.output.is_buffer_nearly_full()
    }

    pub fn clear_buffer(&self) {
        self.output.clear_buffer();
    }

    pub fn stats(&self) -> AudioStats {
        AudioStats {
            samples_processed: self.samples_processed,
            samples_output: self.samples_output,
            buffer_len: self.output.buffer_len(),
            buffer_capacity: self.output.buffer_capacity(),
        }
    }

    pub fn reset_stats(&mut self) {
        self.samples_processed = 0;
        self.samples_output = 0;
    }

    pub fn pause(&self) -> Result<(), String> {
        self.output.pause()
    }

    pub fn resume(&self) -> Result<(), String> {
        self.output.resume()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AudioStats {
    pub samples_processed: u64,
    pub samples_output: u64,
    pub buffer_len: usize,
    pub buffer_capacity: usize,
}

impl AudioStats {
    pub fn buffer_fullness(&self) -> f32 {
        if self.buffer_capacity == 0 {
            0.0
        } else {
            self.buffer_len as f32 / self.buffer_capacity as f32
        }
    }

    pub fn resampling_ratio(&self) -> f64 {
        if self.samples_processed == 0 {
            0.0
        } else {
            self.samples_output as f64 / self.samples_processed as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_fullness_is_len_over_capacity() {
        let stats = AudioStats {
            samples_processed: 1000,
            samples_output: 50,
            buffer_len: 25,
            buffer_capacity: 100,
        };

        assert_eq!(stats.buffer_fullness(), 0.25);
        assert_eq!(stats.resampling_ratio(), 0.05);
    }

    #[test]
    fn stats_with_zero_denominators_report_zero_not_nan() {
        let stats = AudioStats {
            samples_processed: 0,
            samples_output: 0,
            buffer_len: 0,
            buffer_capacity: 100,
        };

        assert_eq!(stats.buffer_fullness(), 0.0);
        assert_eq!(stats.resampling_ratio(), 0.0);
    }

    // AudioSystem::new opens a real output device, so it's exercised by the
    // demo binaries rather than here.
}
