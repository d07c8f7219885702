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
use multiway_bench::common::io::write_sequence_to_file;

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// the number of elements
    #[clap(value_parser, required=true)]
    n: usize,

    /// the output filename
    #[clap(value_parser, required=true)]
    ofname: String,

    /// the seed of the generator
    #[clap(long, value_parser, required=false, default_value_t=0)]
    seed: u64,

    /// the largest gap between consecutive elements
    #[clap(long, value_parser, required=false, default_value_t=4)]
    max_gap: u64,
}

fn main() {
    let args = Args::parse();
    let arr: Vec<i64> = Random::new(args.seed).sorted_sequence(args.n, args.max_gap);
    write_sequence_to_file(&arr, &args.ofname)
        .expect("cannot write to output");
}
