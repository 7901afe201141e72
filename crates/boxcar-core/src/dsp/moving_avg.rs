use crate::block::SyncBlock;
use crate::config::MovingAvgParams;

/// Causal moving-average (boxcar) filter, float in / float out.
///
/// Mathematical form: `y[n] = (scale / N) * sum_{k=0}^{N-1} x[n - k]`,
/// zero-padded before the first sample. DC gain equals `scale`.
///
/// The filter keeps no sample history of its own; the host supplies the
/// `N - 1` most recent previously consumed samples ahead of each new run
/// (see [`SyncBlock`]).
pub struct MovingAvg {
    window_len: usize,
    scale: f32,
    // cached scale / window_len, refreshed on every parameter change
    gain: f32,
}

impl MovingAvg {
    pub const DEFAULT_WINDOW_LEN: i32 = 8;
    pub const DEFAULT_SCALE: f32 = 1.0;

    pub fn new(window_len: i32, scale: f32) -> Self {
        let window_len = clamp_window_len(window_len);
        let scale = sanitize_scale(scale);
        Self {
            window_len,
            scale,
            gain: scale / window_len as f32,
        }
    }

    pub fn from_params(params: &MovingAvgParams) -> Self {
        Self::new(params.window_len, params.scale)
    }

    /// Sets the window length. Values below 1 are clamped to 1, silently.
    /// Takes effect on the next processing call; the host must honor the
    /// updated [`lookback`](Self::lookback) from then on.
    pub fn set_window_len(&mut self, n: i32) {
        let clamped = clamp_window_len(n);
        if n < 1 {
            tracing::debug!(requested = n, used = clamped, "window length clamped");
        }
        self.window_len = clamped;
        self.update_gain();
    }

    /// Sets the scale factor. NaN and infinities are replaced by 1.0 so the
    /// cached gain never turns every output non-finite by misconfiguration.
    pub fn set_scale(&mut self, s: f32) {
        let sane = sanitize_scale(s);
        if !s.is_finite() {
            tracing::debug!(requested = %s, used = sane, "non-finite scale replaced");
        }
        self.scale = sane;
        self.update_gain();
    }

    pub fn window_len(&self) -> usize {
        self.window_len
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Samples before the current one needed to compute each output.
    pub fn lookback(&self) -> usize {
        self.window_len - 1
    }

    /// Filters one run. `run` holds the lookback samples followed by the new
    /// samples, `run.len() == out.len() + lookback()`; produces one output
    /// per new input and returns the count produced.
    ///
    /// Non-finite input samples propagate to the output untouched.
    pub fn filter(&self, run: &[f32], out: &mut [f32]) -> usize {
        debug_assert_eq!(run.len(), out.len() + self.lookback());
        let n = self.window_len;
        let mut sum: f32 = run[..n - 1].iter().sum();
        for (i, o) in out.iter_mut().enumerate() {
            sum += run[i + n - 1];
            *o = self.gain * sum;
            sum -= run[i];
        }
        out.len()
    }

    fn update_gain(&mut self) {
        self.gain = self.scale / self.window_len as f32;
    }
}

impl Default for MovingAvg {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW_LEN, Self::DEFAULT_SCALE)
    }
}

impl SyncBlock for MovingAvg {
    fn history(&self) -> usize {
        self.lookback()
    }

    fn work(&mut self, input: &[f32], output: &mut [f32]) -> usize {
        self.filter(input, output)
    }
}

fn clamp_window_len(n: i32) -> usize {
    n.max(1) as usize
}

fn sanitize_scale(s: f32) -> f32 {
    if s.is_finite() {
        s
    } else {
        1.0
    }
}
