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

use rayon::prelude::*;

use multiway::primitives::{par_search, search_serial};
use multiway::{
    binary_search_by,
    search_iterative_by,
    search_recursive_by,
    Planner,
};

pub type Elem = i64;

/// A single-target search tuned by a [`Planner`].
pub type Finder = fn(&[Elem], &Elem, &Planner) -> Option<usize>;


pub fn recursive(arr: &[Elem], t: &Elem, planner: &Planner) -> Option<usize> {
    search_recursive_by(arr, t, planner, |a, b| a < b)
}

pub fn iterative(arr: &[Elem], t: &Elem, planner: &Planner) -> Option<usize> {
    search_iterative_by(arr, t, planner, |a, b| a < b)
}

pub fn binary(arr: &[Elem], t: &Elem, _: &Planner) -> Option<usize> {
    binary_search_by(arr, t, |a, b| a < b)
}

pub fn std(arr: &[Elem], t: &Elem, _: &Planner) -> Option<usize> {
    arr.binary_search(t).ok()
}

/// Encodes a search result as the index or `-1`.
pub fn encode(r: Option<usize>) -> i64 {
    r.map_or(-1, |i| i as i64)
}

/// Number of queries for an input of `n` elements.
pub fn query_count(queries: usize, n: usize) -> usize {
    if queries == 0 { n } else { queries }
}

/// Returns true if `arr` is sorted in non-decreasing order.
pub fn is_sorted(arr: &[Elem]) -> bool {
    arr.par_windows(2).all(|w| w[0] <= w[1])
}

/// Answers every target in `targets` with `f`.
pub fn search_all(
    f: Finder,
    planner: &Planner,
    sequential: bool,
    arr: &[Elem],
    targets: &[Elem]
) -> Vec<Option<usize>> {
    let search = |a: &[Elem], t: &Elem| f(a, t, planner);
    if sequential { search_serial(arr, targets, search) }
    else { par_search(arr, targets, search) }
}

/// Verifies the encoded results `out` of searching `arr` for `targets`.
///
/// An index must hold its target and `-1` must stand for a target that is
/// not in `arr`.
pub fn check(arr: &[Elem], targets: &[Elem], out: &[i64]) -> Result<(), String> {
    if targets.len() != out.len() {
        return Err(format!(
            "expected {} results, found {}",
            targets.len(),
            out.len()
        ));
    }

    let violations = targets
        .par_iter()
        .zip(out.par_iter())
        .filter(|&(t, &r)| {
            if r < 0 { arr.binary_search(t).is_ok() }
            else { arr.get(r as usize) != Some(t) }
        })
        .count();

    if violations != 0 { Err(format!("{violations} wrong results")) }
    else { Ok(()) }
}
