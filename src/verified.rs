use crate::beap::Beap;
use crate::layout;

/// Wraps a [`Beap`] with an iteration counter and a full invariant walk, for
/// property tests that need to prove the O(sqrt(n)) bound and catch broken
/// invariants directly rather than through behavior alone.
///
/// This mirrors the `#[cfg(feature = "verify")] fn verify_heap(&self)` pattern
/// used throughout this crate's sibling heap implementations, except the check
/// is always available rather than gated behind a Cargo feature, since tests
/// need to call it unconditionally.
#[derive(Clone, Debug, Default)]
pub struct VerifiedBeap<T> {
    inner: Beap<T>,
    iters: u64,
}

impl<T: Ord + std::fmt::Debug> VerifiedBeap<T> {
    pub fn new() -> Self {
        Self {
            inner: Beap::new(),
            iters: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn height(&self) -> usize {
        self.inner.height()
    }

    pub fn get(&self, i: usize) -> Option<&T> {
        self.inner.get(i)
    }

    pub fn span(h: usize) -> (usize, usize) {
        Beap::<T>::span(h)
    }

    /// Number of inner-loop steps taken by the most recent operation.
    pub fn iters(&self) -> u64 {
        self.iters
    }

    pub fn insert(&mut self, v: T) {
        self.iters = 0;
        self.inner.insert_counted(v, &mut self.iters);
    }

    pub fn delete(&mut self, i: usize, h: usize) {
        self.iters = 0;
        self.inner.delete_counted(i, h, &mut self.iters);
    }

    pub fn delete_at(&mut self, i: usize) {
        let h = layout::level_of(i);
        self.delete(i, h);
    }

    pub fn search(&mut self, v: &T) -> Option<(usize, usize)> {
        self.iters = 0;
        self.inner.search_counted(v, &mut self.iters)
    }

    pub fn remove(&mut self, v: &T) -> bool {
        match self.search(v) {
            Some((i, h)) => {
                self.delete(i, h);
                true
            }
            None => false,
        }
    }

    /// Recomputes the level of `len - 1` and asserts it equals the cached
    /// height, then walks the array asserting every in-bounds parent
    /// relationship satisfies the heap invariant.
    pub fn check_invariants(&self) {
        let arr_len = self.inner.len();
        if arr_len > 0 {
            let expected_height = layout::level_of(arr_len - 1);
            assert_eq!(
                expected_height,
                self.inner.height(),
                "cached height {} does not match level_of(len-1)={}",
                self.inner.height(),
                expected_height
            );
        }

        for i in 1..arr_len {
            let (left, right) = layout::parents(i);
            for (pi, _) in [left, right].into_iter().flatten() {
                assert!(
                    self.inner.get(i).unwrap() <= self.inner.get(pi).unwrap(),
                    "beap invariant violated: arr[{i}]={:?} > parent arr[{pi}]={:?}",
                    self.inner.get(i).unwrap(),
                    self.inner.get(pi).unwrap(),
                );
            }
        }

        for h in 0..=self.inner.height() {
            let (start, end) = layout::span(h);
            assert_eq!(
                layout::level_of(start),
                h,
                "level_of(span({h}).0={start}) = {} but expected {h}",
                layout::level_of(start)
            );
            assert_eq!(
                layout::level_of(end),
                h,
                "level_of(span({h}).1={end}) = {} but expected {h}",
                layout::level_of(end)
            );
        }
    }

    #[cfg(test)]
    pub(crate) fn set_raw(&mut self, arr: Vec<T>, height: usize) {
        self.inner.set_raw(arr, height);
    }

    #[cfg(test)]
    pub(crate) fn set_at(&mut self, i: usize, v: T) {
        *self.inner.get_mut_for_tests(i) = v;
    }
}
