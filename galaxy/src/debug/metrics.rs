//! Frame timing metrics

/// Frames slower than this count as slow (below 30 FPS).
pub const SLOW_FRAME_MS: f32 = 33.4;

/// Weight of the newest frame in the rolling average.
const SMOOTHING: f32 = 0.1;

/// Frame timing metrics
#[derive(Debug, Clone, Default)]
pub struct FrameMetrics {
    /// Last frame time in milliseconds
    pub last_frame_ms: f32,
    /// Exponential moving average of frame time
    pub avg_frame_ms: f32,
    /// Number of slow frames
    pub slow_frame_count: u32,
    pub frame_count: u64,
}

impl FrameMetrics {
    /// Record a new frame time
    pub fn record_frame(&mut self, frame_ms: f32) {
        if !frame_ms.is_finite() || frame_ms < 0.0 {
            return;
        }
        self.last_frame_ms = frame_ms;
        self.avg_frame_ms = if self.frame_count == 0 {
            frame_ms
        } else {
            self.avg_frame_ms + (frame_ms - self.avg_frame_ms) * SMOOTHING
        };
        self.frame_count += 1;

        if frame_ms > SLOW_FRAME_MS {
            self.slow_frame_count += 1;
            tracing::debug!(frame_ms, "Slow frame");
        }
    }

    pub fn fps(&self) -> f32 {
        if self.avg_frame_ms > 0.0 {
            1000.0 / self.avg_frame_ms
        } else {
            0.0
        }
    }
}
