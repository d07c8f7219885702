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
use num_traits::PrimInt;
use num_traits::cast::FromPrimitive;

use crate::utilities::hash64;

/// A simple counter-based random number generator.
///
/// `ith_rand(i)` depends only on the seed and `i`, so inputs drawn from it
/// can be regenerated exactly, e.g. by a checker.
#[derive(Copy, Clone, Debug)]
pub struct Random {
    state: u64,
}

impl Random {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn fork(&self, i: u64) -> Self {
        Self::new(hash64(hash64(i.wrapping_add(self.state))))
    }

    pub fn next(&self) -> Self {
        self.fork(0)
    }

    pub fn ith_rand(&self, i: u64) -> u64 {
        hash64(i.wrapping_add(self.state))
    }

    pub fn rand(&self) -> u64 {
        self.ith_rand(0)
    }

    /// Returns `n` values starting at zero, with consecutive values between
    /// 1 and `max_gap` apart.
    ///
    /// The values are strictly increasing until they reach `T::max_value()`;
    /// from there on every value is `T::max_value()`.
    pub fn sorted_sequence<T>(&self, n: usize, max_gap: u64) -> Vec<T>
    where
        T: PrimInt + FromPrimitive,
    {
        let max_gap = max_gap.max(1);
        let gaps: Vec<u64> = (0..n as u64)
            .into_par_iter()
            .map(|i| 1 + self.ith_rand(i) % max_gap)
            .collect();

        let mut acc = 0u64;
        gaps
            .iter()
            .map(|g| {
                let v = T::from_u64(acc).unwrap_or_else(T::max_value);
                acc = acc.saturating_add(*g);
                v
            })
            .collect()
    }

    /// Returns `m` search targets for `arr`.
    ///
    /// Each target is an element of `arr` or one of its neighbours, chosen
    /// uniformly. An empty `arr` gives `m` zeros.
    pub fn queries<T>(&self, arr: &[T], m: usize) -> Vec<T>
    where
        T: PrimInt + Send + Sync,
    {
        if arr.is_empty() { return vec![T::zero(); m]; }
        let n = arr.len() as u64;
        let r = self.next();

        (0..m as u64)
            .into_par_iter()
            .map(|i| {
                let x = arr[(self.ith_rand(i) % n) as usize];
                match r.ith_rand(i) % 3 {
                    0 => x,
                    1 => x.saturating_add(T::one()),
                    _ => x.saturating_sub(T::one()),
                }
            })
            .collect()
    }
}
