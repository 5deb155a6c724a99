//! Monotonic article id generator.

use super::ArticleId;

/// Issues fresh [`ArticleId`]s in increasing order.
///
/// The sequence is seeded from the highest id ever handed out rather than
/// from the number of live articles, so deleting an article never causes
/// its id (or any other live id) to be issued again.
///
/// Once `A18446744073709551615` has been issued or seen the sequence is
/// exhausted and issues nothing more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: Option<ArticleId>,
}

impl IdSequence {
    /// Starts a sequence at `A1`.
    pub fn new() -> Self {
        Self {
            next: Some(ArticleId::FIRST),
        }
    }

    /// Seeds a sequence past every existing id and any persisted high-water mark.
    pub fn seeded<'a, I>(existing: I, persisted_next: Option<ArticleId>) -> Self
    where
        I: IntoIterator<Item = &'a ArticleId>,
    {
        let mut seq = Self::new();
        if let Some(max) = existing.into_iter().max() {
            seq.next = seq.next.zip(max.next()).map(|(a, b)| a.max(b));
        }
        if let Some(persisted) = persisted_next {
            seq.next = seq.next.map(|next| next.max(persisted));
        }
        seq
    }

    /// Returns the id the next call to [`IdSequence::issue`] will produce.
    pub fn peek(&self) -> Option<ArticleId> {
        self.next
    }

    /// Returns true when no further ids can be issued.
    pub fn is_exhausted(&self) -> bool {
        self.next.is_none()
    }

    /// Hands out the next id and advances the sequence.
    pub fn issue(&mut self) -> Option<ArticleId> {
        let id = self.next?;
        self.next = id.next();
        Some(id)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for IdSequence {
    type Item = ArticleId;

    fn next(&mut self) -> Option<Self::Item> {
        self.issue()
    }
}
