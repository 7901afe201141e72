/// Rate-1 stream block driven by an external dataflow host.
///
/// The host owns all buffering. Before every `work` call it must place, ahead
/// of the new samples, the [`history`](SyncBlock::history) most recently
/// consumed samples (zeros while the stream is younger than that). The
/// declaration can change after runtime parameter updates, so hosts re-query
/// it before each call.
pub trait SyncBlock {
    /// Number of previously consumed samples the block reads before the
    /// current one in every `work` call.
    fn history(&self) -> usize;

    /// Processes `output.len()` new samples.
    ///
    /// `input` is the combined run of `history()` lookback samples followed
    /// by the new samples, so `input.len() == output.len() + history()`.
    /// Returns the number of items produced; for a rate-1 block this equals
    /// the number of new input items consumed.
    fn work(&mut self, input: &[f32], output: &mut [f32]) -> usize;
}
