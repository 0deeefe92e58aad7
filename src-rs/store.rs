use std::collections::HashMap;

/// Counting window for one tracked token.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WindowEntry {
    /// Admitted checks in the current window.
    pub count: u32,
    /// Epoch milliseconds at which the window ends and `count` resets.
    pub window_reset_at: u64,
}

/// Token-keyed entry map, bounded at `max_tracked_tokens`.
///
/// Eviction is not LRU: when the map grows past capacity, the entry with the
/// smallest `window_reset_at` is dropped. Dropping an entry only resets that
/// caller's count, which under-limits rather than wrongly rejecting, so the
/// entry closest to expiry is the safest victim.
#[derive(Debug)]
pub struct WindowStore {
    entries: HashMap<String, WindowEntry>,
    max_tracked_tokens: usize,
}

impl WindowStore {
    pub fn new(max_tracked_tokens: usize) -> Self {
        Self {
            entries: HashMap::new(),
            max_tracked_tokens,
        }
    }

    pub fn get(&self, token: &str) -> Option<WindowEntry> {
        self.entries.get(token).copied()
    }

    /// Inserts or overwrites the entry for `token`, then enforces the
    /// capacity bound by evicting at most one entry: the one with the
    /// smallest `window_reset_at`, ties broken toward the lexicographically
    /// smallest token. The entry just written is never the victim.
    pub fn put(&mut self, token: &str, entry: WindowEntry) {
        self.entries.insert(token.to_string(), entry);
        if self.entries.len() <= self.max_tracked_tokens {
            return;
        }

        let victim = self
            .entries
            .iter()
            .filter(|(tracked, _)| tracked.as_str() != token)
            .min_by(|(token_a, entry_a), (token_b, entry_b)| {
                entry_a
                    .window_reset_at
                    .cmp(&entry_b.window_reset_at)
                    .then_with(|| token_a.cmp(token_b))
            })
            .map(|(tracked, _)| tracked.clone());

        if let Some(victim) = victim {
            self.entries.remove(&victim);
            tracing::debug!(token = %victim, "evicted tracked token to stay within capacity");
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }
}
