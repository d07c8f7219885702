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

use crate::internal::binary_search::bisect_step;
use crate::internal::divisions::Planner;


/// Outcome of one narrowing step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Found(usize),
    Narrow(Range<usize>),
}

/// Probes the partition points of `range` and picks the segment that can
/// still hold `target`.
fn narrow<T, F>(
    arr: &[T],
    target: &T,
    range: Range<usize>,
    planner: &Planner,
    less: &F
) -> Step where
    F: Fn(&T, &T) -> bool,
{
    debug_assert!(range.start < range.end && range.end <= arr.len());
    let mut lo = range.start;
    let mut probed = false;

    // a point equal to the target cannot follow a point greater than it,
    // so probing and segment selection share one pass.
    for p in planner.plan(range.clone()) {
        probed = true;
        let x = &arr[p];
        if less(target, x) { return Step::Narrow(lo..p); }
        if !less(x, target) { return Step::Found(p); }
        lo = p + 1;
    }

    if probed { Step::Narrow(lo..range.end) }
    else { bisect_step(arr, target, range, less) }
}

fn recurse<T, F>(
    arr: &[T],
    target: &T,
    range: Range<usize>,
    planner: &Planner,
    less: &F
) -> Option<usize> where
    F: Fn(&T, &T) -> bool,
{
    if range.is_empty() { return None; }
    match narrow(arr, target, range, planner, less) {
        Step::Found(i) => Some(i),
        Step::Narrow(sub) => recurse(arr, target, sub, planner, less),
    }
}

/// Searches the sorted `arr` for `target`, recursing into the selected
/// segment at each step.
///
/// `less` must be the strict order `arr` is sorted by. If several elements
/// compare equal to `target` any one of their indices may be returned.
pub fn search_recursive_by<T, F>(
    arr: &[T],
    target: &T,
    planner: &Planner,
    less: F
) -> Option<usize> where
    F: Fn(&T, &T) -> bool,
{
    recurse(arr, target, 0..arr.len(), planner, &less)
}

/// Same as [`search_recursive_by`] but narrows the range in a loop, so the
/// stack depth does not depend on `arr.len()`.
pub fn search_iterative_by<T, F>(
    arr: &[T],
    target: &T,
    planner: &Planner,
    less: F
) -> Option<usize> where
    F: Fn(&T, &T) -> bool,
{
    let mut range = 0..arr.len();
    while !range.is_empty() {
        match narrow(arr, target, range, planner, &less) {
            Step::Found(i) => return Some(i),
            Step::Narrow(sub) => range = sub,
        }
    }
    None
}

pub fn search_recursive<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    search_recursive_by(arr, target, &Planner::default(), |a, b| a < b)
}

pub fn search_iterative<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    search_iterative_by(arr, target, &Planner::default(), |a, b| a < b)
}
