use tracing::trace;

/// A single-slot memo: the last computed value together with the key
/// describing the inputs it was computed from.
///
/// Sessions hold one slot per derivation, each keyed by exactly the inputs
/// that derivation reads, so unrelated state changes never trigger a
/// recompute.
#[derive(Debug)]
pub(crate) struct Memo<K, V> {
    slot: Option<(K, V)>,
    computations: u64,
}

impl<K: PartialEq, V> Memo<K, V> {
    pub fn new() -> Self {
        Self {
            slot: None,
            computations: 0,
        }
    }

    /// Returns the cached value when `key` matches the stored key, otherwise
    /// recomputes, stores, and returns the fresh value.
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce() -> V) -> &V {
        match &self.slot {
            Some((stored, _)) if *stored == key => &self.slot.as_ref().unwrap().1,
            _ => {
                self.computations += 1;
                trace!(computations = self.computations, "Memo slot recomputed.");
                let value = compute();
                &self.slot.insert((key, value)).1
            }
        }
    }

    #[cfg(test)]
    pub fn computations(&self) -> u64 {
        self.computations
    }
}
