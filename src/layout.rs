// Beap index arithmetic, implemented externally.
//
// A beap lays out levels as consecutive triangular rows in a flat array. Level
// `h` holds `h + 1` elements, so the array looks like:
//
//             0
//          1     2
//       3     4     5
//    6     7     8     9
// 10    11    12    13    14
//
// Within level `h`, the element at index `i` has column `c = i - start(h)`.
// Every element has a left parent at `(h-1, c-1)` and a right parent at
// `(h-1, c)`, whichever exist; symmetrically for children. The leftmost column
// only has a right parent, the rightmost only a left parent, everyone else has
// both - hence "bi-parental".

/// The inclusive index range `[start, end]` occupied by level `h`.
///
/// ```
/// use beap::layout::span;
/// assert_eq!(span(0), (0, 0));
/// assert_eq!(span(1), (1, 2));
/// assert_eq!(span(2), (3, 5));
/// assert_eq!(span(3), (6, 9));
/// assert_eq!(span(4), (10, 14));
/// assert_eq!(span(5), (15, 20));
/// assert_eq!(span(100), (5050, 5150));
/// ```
#[inline]
#[must_use]
pub fn span(h: usize) -> (usize, usize) {
    let start = h * (h + 1) / 2;
    let end = start + h;
    (start, end)
}

/// The level `h` with `span(h).0 <= i <= span(h).1`.
///
/// ```
/// use beap::layout::level_of;
/// assert_eq!(level_of(0), 0);
/// assert_eq!(level_of(1), 1);
/// assert_eq!(level_of(2), 1);
/// assert_eq!(level_of(3), 2);
/// assert_eq!(level_of(9), 3);
/// assert_eq!(level_of(5150), 100);
/// ```
#[inline]
#[must_use]
pub fn level_of(i: usize) -> usize {
    // h = floor((sqrt(8i+1) - 1) / 2), corrected for float error at the boundary.
    let approx = (((8 * i + 1) as f64).sqrt() - 1.0) / 2.0;
    let mut h = approx as usize;
    while span(h).1 < i {
        h += 1;
    }
    while h > 0 && span(h).0 > i {
        h -= 1;
    }
    h
}

/// The column of `i` within its level.
#[inline]
#[must_use]
pub fn column_of(i: usize, h: usize) -> usize {
    i - span(h).0
}

/// The left and right parents of `i`, as `(index, level)` pairs, or `None` if
/// they don't exist (leftmost/rightmost column of the level, or the root).
///
/// ```
/// use beap::layout::parents;
/// assert_eq!(parents(0), (None, None));
/// assert_eq!(parents(1), (None, Some((0, 0))));
/// assert_eq!(parents(2), (Some((0, 0)), None));
/// assert_eq!(parents(3), (None, Some((1, 1))));
/// assert_eq!(parents(4), (Some((1, 1)), Some((2, 1))));
/// assert_eq!(parents(5), (Some((2, 1)), None));
/// ```
#[inline]
#[must_use]
pub fn parents(i: usize) -> (Option<(usize, usize)>, Option<(usize, usize)>) {
    if i == 0 {
        return (None, None);
    }
    let h = level_of(i);
    let c = column_of(i, h);
    let (prev_start, _) = span(h - 1);

    let left = if c >= 1 {
        Some((prev_start + c - 1, h - 1))
    } else {
        None
    };
    let right = if c <= h - 1 {
        Some((prev_start + c, h - 1))
    } else {
        None
    };
    (left, right)
}

/// The left and right children of `i`, as `(index, level)` pairs, or `None` if
/// the child index would fall at or beyond `len`.
///
/// ```
/// use beap::layout::children;
/// assert_eq!(children(0, 3), (Some((1, 1)), Some((2, 1))));
/// assert_eq!(children(0, 2), (Some((1, 1)), None));
/// assert_eq!(children(0, 0), (None, None));
/// ```
#[inline]
#[must_use]
pub fn children(i: usize, len: usize) -> (Option<(usize, usize)>, Option<(usize, usize)>) {
    if i >= len {
        return (None, None);
    }
    let h = level_of(i);
    let c = column_of(i, h);
    let (next_start, _) = span(h + 1);

    let left_index = next_start + c;
    let right_index = next_start + c + 1;

    let left = if left_index < len {
        Some((left_index, h + 1))
    } else {
        None
    };
    let right = if right_index < len {
        Some((right_index, h + 1))
    } else {
        None
    };
    (left, right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_sizes() {
        for h in 0..100 {
            let (start, end) = span(h);
            assert_eq!(end - start + 1, h + 1);
        }
    }

    #[test]
    fn level_of_matches_span() {
        for i in 0..2000 {
            let h = level_of(i);
            let (start, end) = span(h);
            assert!(start <= i && i <= end, "i={i} h={h} span={:?}", (start, end));
        }
    }

    #[test]
    fn parents_and_children_agree() {
        // For any i and any valid child j of i, parents(j) contains i.
        let len = 200;
        for i in 0..len {
            let (left, right) = children(i, len);
            for child in [left, right].into_iter().flatten() {
                let (cl, cr) = parents(child.0);
                let has_i = [cl, cr].into_iter().flatten().any(|(idx, _)| idx == i);
                assert!(has_i, "children({i}) -> {child:?}, but parents don't list {i} back");
            }
        }
    }

    #[test]
    fn boundary_columns() {
        // Leftmost column: only a right parent.
        let (start, _) = span(5);
        assert_eq!(parents(start).0, None);
        assert!(parents(start).1.is_some());

        // Rightmost column: only a left parent.
        let (_, end) = span(5);
        assert_eq!(parents(end).1, None);
        assert!(parents(end).0.is_some());
    }
}
