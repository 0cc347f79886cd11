use super::cursor::UnorderedPosition;

/// Outcome of [`Cache::insert`](super::Cache::insert) and
/// [`Cache::emplace`](super::Cache::emplace).
///
/// `was_inserted` is `true` only when a new key was admitted. An update of
/// an existing key reports `false` with the key's position; a write rejected
/// by a zero-capacity cache reports `false` with the end position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InsertionResult {
    was_inserted: bool,
    position: UnorderedPosition,
}

impl InsertionResult {
    #[inline]
    pub(crate) fn new(was_inserted: bool, position: UnorderedPosition) -> Self {
        Self {
            was_inserted,
            position,
        }
    }

    #[inline]
    pub fn was_inserted(&self) -> bool {
        self.was_inserted
    }

    /// Position of the written entry, or the end position if nothing was stored.
    #[inline]
    pub fn position(&self) -> UnorderedPosition {
        self.position
    }

    /// Splits the result into `(was_inserted, position)`.
    #[inline]
    pub fn into_parts(self) -> (bool, UnorderedPosition) {
        (self.was_inserted, self.position)
    }
}

impl From<InsertionResult> for bool {
    fn from(result: InsertionResult) -> bool {
        result.was_inserted
    }
}
