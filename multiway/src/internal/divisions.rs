// ============================================================================
// This code is part of Rusty-PBBS.
// ----------------------------------------------------------------------------
// MIT License
// 
// Copyright (c) 2023-present Javad Abdi, Mark C. Jeffrey
// 
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
// 
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
// 
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
// ============================================================================

use std::ops::Range;

use crate::utilities::log2_floor;

/// Ranges of at most this many elements are bisected.
pub const SMALL_RANGE: usize = 10;
pub const MIN_DIVISIONS: usize = 2;
pub const MAX_DIVISIONS: usize = 32;


/// Decides how many segments a search range is cut into.
///
/// The default planner bisects ranges of up to [`SMALL_RANGE`] elements and
/// otherwise uses `floor(2 * log2(size))` segments, clamped to
/// `[MIN_DIVISIONS, MAX_DIVISIONS]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Planner {
    small_range: usize,
    max_divisions: usize,
}

impl Default for Planner {
    fn default() -> Self {
        Self { small_range: SMALL_RANGE, max_divisions: MAX_DIVISIONS }
    }
}

impl Planner {
    /// `max_divisions` is raised to `MIN_DIVISIONS` if it is smaller.
    pub fn new(small_range: usize, max_divisions: usize) -> Self {
        Self {
            small_range,
            max_divisions: max_divisions.max(MIN_DIVISIONS),
        }
    }

    pub fn small_range(&self) -> usize { self.small_range }

    pub fn max_divisions(&self) -> usize { self.max_divisions }

    /// Returns the number of segments for a range of `size` elements.
    pub fn divisions(&self, size: usize) -> usize {
        if size <= self.small_range { return MIN_DIVISIONS; }

        // floor(2 * log2(n)) == floor(log2(n^2)), exact for every usize
        let sq = (size as u128) * (size as u128);
        log2_floor(sq).clamp(MIN_DIVISIONS, self.max_divisions)
    }

    /// Returns the partition points of `range` in increasing order.
    pub fn plan(&self, range: Range<usize>) -> DivisionPlan {
        let size = range.end.saturating_sub(range.start);
        let divisions = if size == 0 { 0 } else { self.divisions(size) };
        DivisionPlan {
            start: range.start,
            size,
            divisions,
            i: 1,
            last: None,
        }
    }
}

/// Number of segments the default [`Planner`] uses for `range_size` elements.
pub fn plan_divisions(range_size: usize) -> usize {
    Planner::default().divisions(range_size)
}


/// The partition points of one narrowing step.
///
/// Yields `start + floor(i * size / divisions)` for `i` in `1..divisions`.
/// Every point lies in `start..start + size` and the points are strictly
/// increasing; a point that would repeat its predecessor is skipped.
#[derive(Clone, Debug)]
pub struct DivisionPlan {
    start: usize,
    size: usize,
    divisions: usize,
    i: usize,
    last: Option<usize>,
}

impl DivisionPlan {
    pub fn divisions(&self) -> usize { self.divisions }
}

impl Iterator for DivisionPlan {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.i < self.divisions {
            let i = self.i;
            self.i += 1;

            let offset = (i as u128 * self.size as u128 / self.divisions as u128) as usize;
            let point = self.start + offset.min(self.size - 1);
            if matches!(self.last, Some(last) if point <= last) { continue; }

            self.last = Some(point);
            return Some(point);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.divisions.saturating_sub(self.i)))
    }
}
