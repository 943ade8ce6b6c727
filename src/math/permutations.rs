//! Ordered k-selections of positions without repetition

/// Number of ordered k-selections from n items: n·(n-1)·…·(n-k+1)
///
/// Returns `None` when the count overflows `usize`, and `Some(0)` when `k > n`.
pub fn falling_factorial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    ((n - k + 1)..=n).try_fold(1_usize, usize::checked_mul)
}

/// Iterator over every ordered selection of `k` distinct positions from `0..n`
///
/// Selections are produced in lexicographic order of their position sequences,
/// so `[0, 1]` precedes `[0, 2]` which precedes `[1, 0]`.
#[derive(Clone, Debug)]
pub struct KPermutations {
    indices: Vec<usize>,
    cycles: Vec<usize>,
    n: usize,
    k: usize,
    started: bool,
    exhausted: bool,
}

impl KPermutations {
    /// Create the iterator; yields nothing when `k > n`
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            indices: (0..n).collect(),
            cycles: (0..k).map(|i| n - i.min(n)).collect(),
            n,
            k,
            started: false,
            exhausted: k > n,
        }
    }

    fn current(&self) -> Vec<usize> {
        self.indices.iter().take(self.k).copied().collect()
    }
}

impl Iterator for KPermutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.current());
        }

        for i in (0..self.k).rev() {
            let Some(cycle) = self.cycles.get_mut(i) else {
                break;
            };
            *cycle -= 1;

            if *cycle == 0 {
                // Position i has cycled through every candidate: restore order and carry
                *cycle = self.n - i;
                if let Some(tail) = self.indices.get_mut(i..) {
                    tail.rotate_left(1);
                }
            } else {
                let swap_with = self.n - *cycle;
                self.indices.swap(i, swap_with);
                return Some(self.current());
            }
        }

        self.exhausted = true;
        None
    }
}
