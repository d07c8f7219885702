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

const _BLOCK_SIZE: usize = 2048;


/* -------------------- Batch search -------------------- */
/// Answers every target in `targets` with `search`, one after another.
pub fn search_serial<T, S>(arr: &[T], targets: &[T], search: S) -> Vec<Option<usize>>
where
    S: Fn(&[T], &T) -> Option<usize>,
{
    targets
        .iter()
        .map(|t| search(arr, t))
        .collect()
}

/// Answers every target in `targets` with `search` on rayon's pool.
///
/// Batches of at most `_BLOCK_SIZE` targets are answered serially.
pub fn par_search<T, S>(arr: &[T], targets: &[T], search: S) -> Vec<Option<usize>>
where
    T: Sync,
    S: Fn(&[T], &T) -> Option<usize> + Send + Sync,
{
    if targets.len() <= _BLOCK_SIZE {
        return search_serial(arr, targets, search);
    }

    targets
        .par_iter()
        .with_min_len(_BLOCK_SIZE)
        .map(|t| search(arr, t))
        .collect()
}
