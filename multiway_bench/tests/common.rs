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

use std::fs;
use std::time::Duration;

use multiway_bench::common::io::{
    read_file_to_vec,
    read_sequence_file,
    write_sequence_to_file,
    write_slice_to_file_seq,
};
use multiway_bench::common::time_loop::time_loop;


mod io {
    use super::*;

    #[test]
    fn sequence_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seq");
        let arr: Vec<i64> = vec![-3, 0, 4, 9, 1 << 40];
        write_sequence_to_file(&arr, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("sequenceInt\n"));
        assert_eq!(read_sequence_file::<i64, _>(&path).unwrap(), arr);
    }

    #[test]
    fn missing_header_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain");
        write_slice_to_file_seq(&[1, 2, 3], &path).unwrap();

        let err = read_sequence_file::<i64, _>(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[test]
    fn results_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("res");
        let r: Vec<i64> = vec![5, -1, 42, -1];
        write_slice_to_file_seq(&r, &path).unwrap();

        let back: Vec<i64> = read_file_to_vec(&path, None::<fn(&[&str]) -> bool>).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn missing_file() {
        assert!(read_sequence_file::<i64, _>("/nonexistent/multiway/seq").is_err());
    }
}


#[test]
fn time_loop_runs_every_round() {
    let mut inits = 0;
    let mut runs = 0;
    let mean = time_loop(
        "test",
        3,
        Duration::ZERO,
        || inits += 1,
        || runs += 1,
        || {}
    );
    assert_eq!(inits, 4);
    assert_eq!(runs, 4);
    assert!(mean < Duration::from_secs(1));
}
