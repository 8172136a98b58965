//! Finite-difference stencils over ghost-zoned arrays.
//!
//! A stencil is a pair of axis slices (left and right) plus a divisor. A
//! difference along one axis takes `a[right] - a[left]` on that axis and
//! the centre slice `1..-1` on the others, then divides by
//! `divisor * spacing`. Slices use Python semantics: negative bounds count
//! from the end and out-of-range bounds clamp.

use std::ops::Range;

/// A half-open slice with optional, possibly negative, bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisSlice {
    /// Inclusive start; `None` means the beginning.
    pub start: Option<isize>,
    /// Exclusive end; `None` means the end.
    pub end: Option<isize>,
}

impl AxisSlice {
    /// `start..end`.
    pub const fn new(start: Option<isize>, end: Option<isize>) -> Self {
        Self { start, end }
    }

    /// `..end`.
    pub const fn until(end: isize) -> Self {
        Self::new(None, Some(end))
    }

    /// `start..`.
    pub const fn starting_at(start: isize) -> Self {
        Self::new(Some(start), None)
    }

    /// The interior slice `1..-1`.
    pub const fn interior() -> Self {
        Self::new(Some(1), Some(-1))
    }

    /// Concrete index range for an axis of length `len`.
    pub fn resolve(&self, len: usize) -> Range<usize> {
        let start = self.start.map_or(0, |s| clamp_index(s, len));
        let end = self.end.map_or(len, |e| clamp_index(e, len));
        start..end.max(start)
    }

    /// Cells this slice reaches past the interior `1..-1`.
    fn reach(&self) -> usize {
        let start = match self.start {
            None => Some(-1),
            Some(s) if s >= 0 => Some(s - 1),
            Some(_) => None,
        };
        let end = match self.end {
            None => Some(1),
            Some(e) if e <= 0 => Some(e + 1),
            Some(_) => None,
        };
        [start, end]
            .into_iter()
            .flatten()
            .map(isize::unsigned_abs)
            .max()
            .unwrap_or(0)
    }
}

fn clamp_index(i: isize, len: usize) -> usize {
    if i < 0 {
        len.saturating_sub(i.unsigned_abs())
    } else {
        i.unsigned_abs().min(len)
    }
}

/// Left slice, right slice and divisor of a finite-difference scheme.
///
/// # Examples
///
/// ```
/// use gauge_core::StencilSpec;
///
/// let s = StencilSpec::centered();
/// let r = s.resolve(6).unwrap();
/// assert_eq!(r.left, 0..4);
/// assert_eq!(r.center, 1..5);
/// assert_eq!(r.right, 2..6);
/// assert_eq!(s.ghost_zones(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StencilSpec {
    /// Slice subtracted from.
    pub left: AxisSlice,
    /// Slice subtracted.
    pub right: AxisSlice,
    /// Multiplies the grid spacing in the denominator.
    pub divisor: f64,
}

/// A stencil resolved against one axis length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedStencil {
    /// Left range.
    pub left: Range<usize>,
    /// Centre range, where results are written.
    pub center: Range<usize>,
    /// Right range.
    pub right: Range<usize>,
}

impl StencilSpec {
    /// Build a stencil from explicit slices.
    pub const fn new(left: AxisSlice, right: AxisSlice, divisor: f64) -> Self {
        Self {
            left,
            right,
            divisor,
        }
    }

    /// Symmetric centred difference: `(..-2, 2.., 2.0)`.
    pub const fn centered() -> Self {
        Self::new(AxisSlice::until(-2), AxisSlice::starting_at(2), 2.0)
    }

    /// One-sided difference for face-staggered data: `(..-2, 1..-1, 1.0)`.
    pub const fn backward() -> Self {
        Self::new(AxisSlice::until(-2), AxisSlice::interior(), 1.0)
    }

    /// Resolve all three slices against an axis of length `len`.
    ///
    /// Returns `None` if the left, right and centre ranges differ in
    /// length, which happens for stencils that do not fit the axis.
    pub fn resolve(&self, len: usize) -> Option<ResolvedStencil> {
        let resolved = ResolvedStencil {
            left: self.left.resolve(len),
            center: AxisSlice::interior().resolve(len),
            right: self.right.resolve(len),
        };
        let n = resolved.center.len();
        (resolved.left.len() == n && resolved.right.len() == n).then_some(resolved)
    }

    /// Halo width the stencil reaches beyond the interior `1..-1`.
    ///
    /// Each bound is compared with the interior bound counted from the same
    /// end of the axis: a start from the front against `1`, an end from the
    /// back against `-1`. Bounds counted from the other end depend on the
    /// axis length and do not contribute.
    pub fn ghost_zones(&self) -> usize {
        self.left.reach().max(self.right.reach())
    }
}

impl Default for StencilSpec {
    fn default() -> Self {
        Self::centered()
    }
}
