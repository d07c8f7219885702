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

use clap::Parser;

use multiway::random::Random;
use multiway_bench::benchmarks::multi_way_search as mws;
use multiway_bench::common::io::{read_file_to_vec, read_sequence_file};
use mws::Elem;

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// search results filename
    #[clap(value_parser, required=true)]
    rfname: String,

    /// the input sequence's filename
    #[clap(value_parser, required=true)]
    ifname: String,

    /// the number of queries (0: one per input element)
    #[clap(long, value_parser, required=false, default_value_t=0)]
    queries: usize,

    /// the seed of the query generator
    #[clap(long, value_parser, required=false, default_value_t=0)]
    seed: u64,
}

fn main() {
    let args = Args::parse();
    let arr: Vec<Elem> = read_sequence_file(&args.ifname)
        .expect("cannot read input file");
    let out: Vec<i64> = read_file_to_vec(&args.rfname, None::<fn(&[&str]) -> bool>)
        .expect("cannot read results file");

    let m = mws::query_count(args.queries, arr.len());
    let targets = Random::new(args.seed).queries(&arr, m);

    match mws::check(&arr, &targets, &out) {
        Ok(()) => println!("OK"),
        Err(e) => {
            eprintln!("{e}");
            eprintln!("ERR");
            std::process::exit(1);
        }
    }
}
