use crate::layout;

/// A bi-parental heap: an implicit max-heap laid out as triangular levels in a
/// flat array, supporting O(sqrt(n)) priority-queue operations plus membership
/// search.
///
/// Every element with at least one parent is `<=` each of its existing parents.
/// The root, `arr[0]`, is therefore the maximum. See `crate::layout` for the
/// index arithmetic this relies on.
#[derive(Clone, Debug, Default)]
pub struct Beap<T> {
    arr: Vec<T>,
    height: usize,
}

impl<T: Ord> Beap<T> {
    pub fn new() -> Self {
        Self {
            arr: Vec::new(),
            height: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.arr.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arr.is_empty()
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The inclusive index range of level `h`.
    pub fn span(h: usize) -> (usize, usize) {
        layout::span(h)
    }

    pub fn get(&self, i: usize) -> Option<&T> {
        self.arr.get(i)
    }

    /// Appends `v` and restores the heap invariant by sifting it up along a
    /// zig-zag path towards the root.
    pub fn insert(&mut self, v: T) {
        self.insert_counted(v, &mut 0);
    }

    /// Removes the element at position `i`, given its level `h`.
    ///
    /// `h` is a micro-optimization to avoid recomputing `level_of(i)` when the
    /// caller (e.g. `search`) already knows it; `delete_at` below recomputes it
    /// for callers that don't. Passing a mismatched `h` is a programming error.
    ///
    /// Panics if `i` is out of range.
    pub fn delete(&mut self, i: usize, h: usize) {
        self.delete_counted(i, h, &mut 0);
    }

    /// Like `delete`, but recomputes the level of `i` instead of requiring the
    /// caller to supply it. Observable behavior is identical to `delete`.
    pub fn delete_at(&mut self, i: usize) {
        let h = layout::level_of(i);
        self.delete(i, h);
    }

    /// Returns `(index, level)` of an occurrence of `v`, if any, via a
    /// diagonal walk starting from the upper-right corner of the triangle.
    pub fn search(&self, v: &T) -> Option<(usize, usize)> {
        self.search_counted(v, &mut 0)
    }

    /// Removes one occurrence of `v`, if present. Returns whether anything was
    /// removed; absence is expected control flow, not an error.
    pub fn remove(&mut self, v: &T) -> bool {
        match self.search(v) {
            Some((i, h)) => {
                self.delete(i, h);
                true
            }
            None => false,
        }
    }

    // --- counted variants, used directly by `VerifiedBeap` to prove the
    // O(sqrt(n)) bound; the plain methods above just discard the count. ---

    pub(crate) fn insert_counted(&mut self, v: T, iters: &mut u64) {
        let i = self.arr.len();
        self.arr.push(v);

        let h = layout::level_of(i);
        let (start, _) = layout::span(h);
        if i == start {
            self.height = h;
        }

        self.sift_up(i, iters);
    }

    pub(crate) fn delete_counted(&mut self, i: usize, h: usize, iters: &mut u64) {
        assert!(i < self.arr.len(), "delete: index {i} out of range");
        debug_assert_eq!(h, layout::level_of(i));

        let last = self.arr.len() - 1;
        if i == last {
            self.arr.pop();
            self.shrink_height_if_needed(last);
            return;
        }

        let moved = self.arr.pop().unwrap();
        self.arr[i] = moved;
        self.shrink_height_if_needed(last);

        self.sift_in_place(i, iters);
    }

    /// Diagonal ("saddleback") search. Starts at the upper-right corner of
    /// the triangle -- the rightmost column of the deepest level -- and walks
    /// towards the lower-left corner, which is checked once the loop exits.
    pub(crate) fn search_counted(&self, v: &T, iters: &mut u64) -> Option<(usize, usize)> {
        if self.arr.is_empty() {
            return None;
        }

        let mut h = self.height;
        let (terminal, mut i) = layout::span(h);
        if i >= self.arr.len() {
            h -= 1;
            i = layout::span(h).1;
        }

        while i != terminal {
            *iters += 1;
            let c = layout::column_of(i, h);

            match self.arr[i].cmp(v) {
                std::cmp::Ordering::Equal => return Some((i, h)),
                std::cmp::Ordering::Less if h > 0 && c > 0 => {
                    // arr[i] < v: a match, if any, sits closer to the root.
                    // Move to the left parent (h-1, c-1) -- the only
                    // existing-parent direction that keeps both the row and
                    // column order of the walk intact.
                    i -= h + 1;
                    h -= 1;
                }
                std::cmp::Ordering::Greater if h < self.height => {
                    // arr[i] > v: a match, if any, is deeper. Try the
                    // same-column child (h+1, c); fall back to the previous
                    // column when that child runs past a partially filled
                    // last level.
                    let child = i + h + 1;
                    if child < self.arr.len() {
                        i = child;
                        h += 1;
                    } else if c > 0 {
                        i -= 1;
                    } else {
                        return None;
                    }
                }
                _ if c > 0 => i -= 1,
                _ => return None,
            }
        }

        *iters += 1;
        if self.arr[i] == *v {
            Some((i, h))
        } else {
            None
        }
    }

    #[cfg(test)]
    pub(crate) fn set_raw(&mut self, arr: Vec<T>, height: usize) {
        self.arr = arr;
        self.height = height;
    }

    #[cfg(test)]
    pub(crate) fn get_mut_for_tests(&mut self, i: usize) -> &mut T {
        &mut self.arr[i]
    }

    // --- internals ---

    fn shrink_height_if_needed(&mut self, old_last: usize) {
        if self.arr.is_empty() {
            self.height = 0;
            return;
        }
        let old_last_level = layout::level_of(old_last);
        let (start, _) = layout::span(old_last_level);
        if old_last == start {
            // The removed tail element was the sole occupant of its level.
            self.height = old_last_level.saturating_sub(1);
        }
    }

    fn sift_up(&mut self, mut i: usize, iters: &mut u64) {
        while i > 0 {
            *iters += 1;
            let (left, right) = layout::parents(i);
            let parent = match (left, right) {
                (Some(l), Some(r)) => {
                    if self.arr[l.0] <= self.arr[r.0] {
                        l
                    } else {
                        r
                    }
                }
                (Some(l), None) => l,
                (None, Some(r)) => r,
                (None, None) => break,
            };

            if self.arr[parent.0] < self.arr[i] {
                self.arr.swap(parent.0, i);
                i = parent.0;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize, iters: &mut u64) {
        loop {
            *iters += 1;
            let (left, right) = layout::children(i, self.arr.len());
            let child = match (left, right) {
                (Some(l), Some(r)) => {
                    if self.arr[l.0] >= self.arr[r.0] {
                        l
                    } else {
                        r
                    }
                }
                (Some(l), None) => l,
                (None, Some(r)) => r,
                (None, None) => break,
            };

            if self.arr[child.0] > self.arr[i] {
                self.arr.swap(i, child.0);
                i = child.0;
            } else {
                break;
            }
        }
    }

    /// After overwriting `arr[i]`, it may be too large for a parent or too
    /// small for a child. Sift in whichever single direction is needed.
    fn sift_in_place(&mut self, i: usize, iters: &mut u64) {
        let (left, right) = layout::parents(i);
        let parent_too_small = [left, right]
            .into_iter()
            .flatten()
            .any(|(pi, _)| self.arr[pi] < self.arr[i]);

        if parent_too_small {
            self.sift_up(i, iters);
        } else {
            self.sift_down(i, iters);
        }
    }
}
