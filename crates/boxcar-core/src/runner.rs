use crate::block::SyncBlock;

/// Minimal single-threaded host for a [`SyncBlock`].
///
/// Owns the lookback buffer the block declares through `history()`, keeps it
/// zero-initialized before steady state, and re-sizes it to the current
/// declaration ahead of every call, so parameter changes between calls are
/// always backed by a correctly sized history run.
///
/// Calls into [`block_mut`](Self::block_mut) and [`process`](Self::process)
/// must not overlap; the runner does no locking of its own.
pub struct BlockRunner<B> {
    block: B,
    // oldest first, so the combined run is history followed by new samples
    history: Vec<f32>,
    run: Vec<f32>,
}

impl<B: SyncBlock> BlockRunner<B> {
    pub fn new(block: B) -> Self {
        let lookback = block.history();
        Self {
            block,
            history: vec![0.0; lookback],
            run: Vec::new(),
        }
    }

    pub fn block(&self) -> &B {
        &self.block
    }

    pub fn block_mut(&mut self) -> &mut B {
        &mut self.block
    }

    /// Feeds one run of new samples through the block and returns its
    /// outputs, exactly one per input for a rate-1 block.
    pub fn process(&mut self, input: &[f32]) -> Vec<f32> {
        let lookback = self.block.history();
        if self.history.len() != lookback {
            self.resize_history(lookback);
        }

        self.run.clear();
        self.run.extend_from_slice(&self.history);
        self.run.extend_from_slice(input);

        let mut out = vec![0.0f32; input.len()];
        let produced = self.block.work(&self.run, &mut out);
        out.truncate(produced);

        self.history.clear();
        self.history
            .extend_from_slice(&self.run[self.run.len() - lookback..]);
        out
    }

    // Keeps the most recent samples; zero-pads at the old end on growth.
    fn resize_history(&mut self, lookback: usize) {
        let keep = self.history.len().min(lookback);
        let mut next = vec![0.0f32; lookback];
        let tail = self.history.len() - keep;
        next[lookback - keep..].copy_from_slice(&self.history[tail..]);
        self.history = next;
    }
}
