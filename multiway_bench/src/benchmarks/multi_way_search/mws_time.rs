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

#[path ="../macros.rs"] mod macros;

use std::time::Duration;

use multiway::{Planner, SMALL_RANGE, MAX_DIVISIONS};
use multiway::random::Random;
use multiway_bench::benchmarks::multi_way_search as mws;
use multiway_bench::common::io::{read_sequence_file, write_slice_to_file_seq};
use multiway_bench::common::time_loop::time_loop;
use mws::Elem;


define_args!(
    Algs::ITERATIVE,
    (queries, usize, 0, "the number of queries (0: one per input element)"),
    (seed, u64, 0, "the seed of the query generator"),
    (small_range, usize, SMALL_RANGE, "ranges of at most this size are bisected"),
    (max_divisions, usize, MAX_DIVISIONS, "the maximum number of divisions per step"),
    (sequential, bool, false, "answer the queries on one thread")
);

define_algs!(
    (RECURSIVE, "recursive"),
    (ITERATIVE, "iterative"),
    (BINARY,    "binary"),
    (STD,       "std")
);


pub fn run(
    alg: Algs,
    rounds: usize,
    planner: Planner,
    sequential: bool,
    arr: &[Elem],
    targets: &[Elem]
) -> (Vec<i64>, Duration) {
    let f: mws::Finder = match alg {
        Algs::RECURSIVE => mws::recursive,
        Algs::ITERATIVE => mws::iterative,
        Algs::BINARY    => mws::binary,
        Algs::STD       => mws::std,
    };

    let mut r = vec![];
    let mean = time_loop(
        "mws",
        rounds,
        Duration::new(1, 0),
        || {},
        || {
            r = mws::search_all(f, &planner, sequential, arr, targets);
        },
        || {}
    );

    (r.into_iter().map(mws::encode).collect(), mean)
}

fn main() {
    init!();
    let args = Args::parse();

    let arr: Vec<Elem> = read_sequence_file(&args.ifname)
        .expect("cannot read input file");
    if !mws::is_sorted(&arr) {
        eprintln!("ERR: {} is not sorted", args.ifname);
        std::process::exit(1);
    }

    let m = mws::query_count(args.queries, arr.len());
    let targets = Random::new(args.seed).queries(&arr, m);
    let planner = Planner::new(args.small_range, args.max_divisions);

    let (r, d) = run(
        args.algorithm,
        args.rounds,
        planner,
        args.sequential,
        &arr,
        &targets
    );

    finalize!(
        args,
        r,
        d,
        write_slice_to_file_seq(&r, &args.ofname).expect("cannot write to output")
    );
}
