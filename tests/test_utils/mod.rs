#![allow(dead_code)]

use listdiff::SectionedSequence;

/// Every sequence over `alphabet` with length at most `max_len`.
pub fn all_sequences<T: Clone>(alphabet: &[T], max_len: usize) -> Vec<Vec<T>> {
    let mut all = vec![Vec::new()];
    let mut last = vec![Vec::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for seq in &last {
            for a in alphabet {
                let mut s: Vec<T> = seq.clone();
                s.push(a.clone());
                next.push(s);
            }
        }
        all.extend(next.iter().cloned());
        last = next;
    }
    all
}

/// Every sectioned sequence with at most `max_sections` sections, keys from
/// `keys` and at most `max_values` values per section drawn from `values`.
pub fn all_sectioned<S: Clone, T: Clone>(
    keys: &[S],
    values: &[T],
    max_sections: usize,
    max_values: usize,
) -> Vec<SectionedSequence<S, T>> {
    let mut sections = Vec::new();
    for key in keys {
        for v in all_sequences(values, max_values) {
            sections.push((key.clone(), v));
        }
    }
    all_sequences(&sections, max_sections)
        .into_iter()
        .map(|s| s.into_iter().collect())
        .collect()
}

/// Deterministic xorshift generator for larger randomized inputs.
pub struct XorShift(u64);

impl XorShift {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    pub fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
    pub fn sequence(&mut self, max_len: u64, alphabet: u64) -> Vec<u64> {
        let len = self.below(max_len + 1);
        (0..len).map(|_| self.below(alphabet)).collect()
    }
    pub fn sectioned(
        &mut self,
        max_sections: u64,
        keys: u64,
        max_values: u64,
        alphabet: u64,
    ) -> SectionedSequence<u64, u64> {
        let count = self.below(max_sections + 1);
        (0..count)
            .map(|_| (self.below(keys), self.sequence(max_values, alphabet)))
            .collect()
    }
}

pub fn is_subsequence<T: PartialEq>(sub: &[T], of: &[T]) -> bool {
    let mut it = of.iter();
    sub.iter().all(|x| it.any(|y| y == x))
}

/// Length of the longest common subsequence, by trying every subsequence of `x`.
pub fn brute_force_lcs_len<T: PartialEq + Clone>(x: &[T], y: &[T]) -> usize {
    assert!(x.len() < 16);
    let mut best = 0;
    for mask in 0u32..(1 << x.len()) {
        let sub: Vec<T> = (0..x.len())
            .filter(|i| mask & (1 << i) != 0)
            .map(|i| x[i].clone())
            .collect();
        if sub.len() > best && is_subsequence(&sub, y) {
            best = sub.len();
        }
    }
    best
}
