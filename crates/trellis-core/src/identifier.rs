//! Element id generation.
//!
//! Scenes reference nodes by id (`<use href="#id">`, `clip-path="url(#id)"`).
//! [`IdGenerator`] mints ids for nodes that need one but were not given one.

/// Generates unique, prefix-scoped element ids.
///
/// Ids have the form `<prefix>-<n>` with `n` counting up from zero. A
/// generator never yields the same id twice, but it does not know about ids
/// assigned elsewhere, so callers pick a prefix that does not collide.
///
/// # Examples
///
/// ```
/// use trellis_core::identifier::IdGenerator;
///
/// let mut ids = IdGenerator::new("clip");
/// assert_eq!(ids.next_id(), "clip-0");
/// assert_eq!(ids.next_id(), "clip-1");
/// ```
#[derive(Debug, Clone)]
pub struct IdGenerator {
    prefix: String,
    next: usize,
}

impl IdGenerator {
    /// Creates a generator whose ids start with `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }

    /// Returns the number of ids generated so far.
    pub fn generated(&self) -> usize {
        self.next
    }

    /// Returns a fresh id.
    pub fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
