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

//! Adaptive multi-way search over sorted slices.
//!
//! The search cuts the current range into a number of segments that grows
//! with the range size (see [`plan_divisions`]), probes every segment
//! boundary and continues in the one segment that can still hold the
//! target. Small ranges fall back to plain bisection.

mod internal {
    pub mod binary_search;
    pub mod divisions;
    pub mod multi_way_search;
}

pub mod primitives;
pub mod random;
pub mod utilities;

pub use internal::binary_search::{binary_search_by, lower_bound};
pub use internal::divisions::{
    plan_divisions,
    DivisionPlan,
    Planner,
    MAX_DIVISIONS,
    MIN_DIVISIONS,
    SMALL_RANGE,
};
pub use internal::multi_way_search::{
    search_iterative,
    search_iterative_by,
    search_recursive,
    search_recursive_by,
};
