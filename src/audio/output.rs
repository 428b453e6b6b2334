// Cross-platform audio playback via cpal: owns the output device/stream and
// feeds it from a shared ring buffer the emulation thread fills independently.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, Stream, StreamConfig};
use std::sync::{Arc, Mutex};

use super::resampler::AudioBuffer;

#[derive(Clone)]
pub struct AudioConfig {
    pub sample_rate: u32,
    pub channels: u16,
    pub buffer_duration_ms: u32,
}

impl AudioConfig {
    /// 48kHz mono, 50ms buffer.
    pub fn new() -> Self {
        Self {
            sample_rate: 48000,
            channels: 1,
            buffer_duration_ms: 50,
        }
    }

    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_channels(mut self, channels: u16) -> Self {
        self.channels = channels;
        self
    }

    pub fn with_buffer_duration(mut self, duration_ms: u32) -> Self {
        self.buffer_duration_ms = duration_ms;
        self
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub struct AudioOutput {
    config: AudioConfig,
    _device: Device,
    stream: Stream,
    buffer: Arc<Mutex<AudioBuffer>>,
}

impl AudioOutput {
    /// Opens the system's default output device and starts a stream that
    /// drains `buffer` on every callback, substituting silence when it runs dry.
    pub fn new(config: AudioConfig) -> Result<Self, String> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or("No output device available")?;

        println!("Audio device: {}", device.name().unwrap_or_default());

        let stream_config = StreamConfig {
            channels: config.channels,
            sample_rate: cpal::SampleRate(config.sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };

        let capacity = (config.buffer_duration_ms as f64 / 1000.0 * config.sample_rate as f64) as usize;
        let buffer = Arc::new(Mutex::new(AudioBuffer::new(capacity)));
        let callback_buffer = Arc::clone(&buffer);

        let stream = device
            .build_output_stream(
                &stream_config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    let mut buf = callback_buffer.lock().unwrap();
                    for sample in data.iter_mut() {
                        *sample = buf.pop().unwrap_or(0.0);
                    }
                },
                |err| eprintln!("Audio stream error: {}", err),
                None,
            )
            .map_err(|e| format!("Failed to build audio stream: {}", e))?;

        stream
            .play()
            .map_err(|e| format!("Failed to start audio stream: {}", e))?;

        println!(
            "Audio output initialized: {} Hz, {} channel(s)",
            config.sample_rate, config.channels
        );

        Ok(Self {
            config,
            _device: device,
            stream,
            buffer,
        })
    }

    pub fn push_sample(&self, sample: f32) -> bool {
        self.buffer.lock().unwrap().push(sample)
    }

    pub fn buffer_len(&self) -> usize {
        self.buffer.lock().unwrap().len()
    }

    pub fn buffer_capacity(&self) -> usize {
        self.buffer.lock().unwrap().capacity()
    }

    /// True past 90% full, a cue for callers to start throttling production.
    pub fn is_buffer_nearly_full(&self) -> bool {
        let buf = self.buffer.lock().unwrap();
        buf.len() * 10 > buf.capacity() * 9
    }

    pub fn clear_buffer(&self) {
        self.buffer.lock().unwrap().clear();
    }

    pub fn config(&self) -> &AudioConfig {
        &self.config
    }

    pub fn pause(&self) -> Result<(), String> {
        self.stream
            .pause()
            .map_err(|e| format!("Failed to pause audio: {}", e))
    }

    pub fn resume(&self) -> Result<(), String> {
        self.stream
            .play()
            .map_err(|e| format!("Failed to resume audio: {}", e))
    }
}

pub struct AudioOutputBuilder {
    config: AudioConfig,
}

impl AudioOutputBuilder {
    pub fn new() -> Self {
        Self {
            config: AudioConfig::new(),
        }
    }

    pub fn sample_rate(mut self, sample_rate: u32) -> Self {
        self.config.sample_rate = sample_rate;
        self
    }

    pub fn channels(mut self, channels: u16) -> Self {
        self.config.channels = channels;
        self
    }

    pub fn buffer_duration(mut self, duration_ms: u32) -> Self {
        self.config.buffer_duration_ms = duration_ms;
        self
    }

    pub fn build(self) -> Result<AudioOutput, String> {
        AudioOutput::new(self.config)
    }
}

impl Default for AudioOutputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_48khz_mono_with_50ms_buffer() {
        let config = AudioConfig::new();
        assert_eq!(config.sample_rate, 48000);
        assert_eq!(config.channels, 1);
        assert_eq!(config.buffer_duration_ms, 50);
    }

    #[test]
    fn config_builder_chains_overrides() {
        let config = AudioConfig::new()
            .with_sample_rate(44100)
            .with_channels(2)
            .with_buffer_duration(100);

        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.channels, 2);
        assert_eq!(config.buffer_duration_ms, 100);
    }

    #[test]
    fn output_builder_chains_the_same_overrides() {
        let builder = AudioOutputBuilder::new()
            .sample_rate(44100)
            .channels(2)
            .buffer_duration(100);

        assert_eq!(builder.config.sample_rate, 44100);
        assert_eq!(builder.config.channels, 2);
        assert_eq!(builder.config.buffer_duration_ms, 100);
    }

    // Actually opening a device needs real audio hardware, so stream
    // construction is exercised by the demo binaries, not here.
}
