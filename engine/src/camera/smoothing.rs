//! Look Smoothing
//!
//! Moving-average smoothing for look angles. Each axis keeps a bounded FIFO of
//! its most recent clamped samples; the output is blended between the
//! instantaneous angle and the mean of that window.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ensure_range};

/// Smallest allowed smoothing window, in frames
pub const MIN_SMOOTHING_WINDOW: usize = 5;

/// Largest allowed smoothing window, in frames
pub const MAX_SMOOTHING_WINDOW: usize = 20;

/// Smoothing settings shared by both look axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// When false, angles pass through and no history is recorded
    pub enabled: bool,
    /// Number of prior frames averaged (5..=20)
    pub window: usize,
    /// 0 = no smoothing, 1 = output is the moving average
    pub strength: f32,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            window: MAX_SMOOTHING_WINDOW,
            strength: 0.5,
        }
    }
}

impl SmoothingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SMOOTHING_WINDOW..=MAX_SMOOTHING_WINDOW).contains(&self.window) {
            return Err(ConfigError::SmoothingWindowOutOfRange(self.window));
        }
        ensure_range("smoothing strength", self.strength, 0.0, 1.0)
    }
}

/// Bounded, ordered history of recent angle samples (oldest first).
#[derive(Debug, Clone)]
pub struct AngleHistory {
    samples: VecDeque<f32>,
    capacity: usize,
}

impl AngleHistory {
    /// Create an empty history holding at most `capacity` samples.
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest once the window is full.
    pub fn push(&mut self, sample: f32) {
        self.samples.push_back(sample);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    /// Arithmetic mean of the stored samples, or `None` when empty.
    pub fn mean(&self) -> Option<f32> {
        if self.samples.is_empty() {
            return None;
        }
        let sum: f32 = self.samples.iter().sum();
        Some(sum / self.samples.len() as f32)
    }

    /// Push `instant` and blend it toward the window mean.
    ///
    /// # Arguments
    /// * `instant` - This frame's clamped angle
    /// * `strength` - Blend factor, 0 returns `instant`, 1 returns the mean
    pub fn smooth(&mut self, instant: f32, strength: f32) -> f32 {
        self.push(instant);
        let mean = self.mean().unwrap_or(instant);
        lerp(instant, mean, strength)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Samples from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &f32> {
        self.samples.iter()
    }
}

/// Linear interpolation between two values.
#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
