//! Artificial network latency

use std::time::Duration;

/// Scales every simulated delay. `0.0` turns delays off entirely.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Latency {
    scale: f64,
}

impl Latency {
    pub fn new(scale: f64) -> Self {
        // Negative or NaN scales mean no delay
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { 0.0 };
        Latency { scale }
    }

    /// Delays exactly as listed in the API table
    pub fn realistic() -> Self {
        Self::new(1.0)
    }

    /// No waiting at all
    pub fn instant() -> Self {
        Self::new(0.0)
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn scaled(&self, base: Duration) -> Duration {
        if self.scale == 0.0 {
            Duration::ZERO
        } else {
            // Huge scales saturate instead of overflowing `Duration`
            let nanos = (base.as_nanos() as f64 * self.scale).round();
            if nanos < u64::MAX as f64 {
                Duration::from_nanos(nanos as u64)
            } else {
                Duration::MAX
            }
        }
    }

    pub async fn wait(&self, base: Duration) {
        let delay = self.scaled(base);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::realistic()
    }
}
