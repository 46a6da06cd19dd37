#[cfg(test)]
mod tests;

/// Maps indices of an intermediate section list back to the original list.
///
/// Built by replaying the same removals and insertions on `0..len` that
/// turned the original into the intermediate list. Inserted positions have
/// no original index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct IndexMiddleToOld(Vec<Option<usize>>);

impl IndexMiddleToOld {
    pub fn identity(len: usize) -> Self {
        Self((0..len).map(Some).collect())
    }
    pub fn remove(&mut self, index: usize) {
        self.0.remove(index);
    }
    pub fn insert_placeholder(&mut self, index: usize) {
        self.0.insert(index, None);
    }
    pub fn get(&self, middle: usize) -> Option<usize> {
        self.0.get(middle).copied().flatten()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

pub(crate) fn is_sorted_by_key<T, K: PartialOrd>(
    items: &[T],
    mut key: impl FnMut(&T) -> K,
) -> bool {
    for i in 1..items.len() {
        if key(&items[i - 1]) > key(&items[i]) {
            return false;
        }
    }
    true
}
