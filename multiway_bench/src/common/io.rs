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

use std::{fs, io, io::prelude::*};
use std::path::Path;
use rayon::prelude::*;

/// Header line of the PBBS integer sequence format.
pub const SEQUENCE_INT: &str = "sequenceInt";


/// Writes one element of `s` per line.
pub fn write_slice_to_file_seq<T, P>(s: &[T], of: P) -> io::Result<()>
where
    T: ToString,
    P: AsRef<Path>,
{
    let s: Vec<String> = s
        .iter()
        .map(T::to_string)
        .collect();
    fs::write(of, s.join("\n"))
}

/// Writes `s` in the `sequenceInt` format.
pub fn write_sequence_to_file<T, P>(s: &[T], of: P) -> io::Result<()>
where
    T: ToString + Sync,
    P: AsRef<Path>,
{
    let body: Vec<String> = s
        .par_iter()
        .map(T::to_string)
        .collect();
    let mut f = io::BufWriter::new(fs::File::create(of)?);
    writeln!(f, "{SEQUENCE_INT}")?;
    for line in body.iter() { writeln!(f, "{line}")?; }
    f.flush()
}

/// Reads every line of `fname` that parses as `T`; other lines (headers,
/// blanks) are skipped. `header_check` sees the split lines first.
pub fn read_file_to_vec<T, P, F>(
    fname: P,
    header_check: Option<F>
) -> io::Result<Vec<T>> where
    T: std::str::FromStr + Send,
    P: AsRef<Path>,
    F: Fn(&[&str]) -> bool,
{
    let s = fs::read_to_string(fname)?;
    let w: Vec<_> = s.par_split('\n').collect();
    if let Some(check) = header_check {
        if !check(&w) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "unexpected file header"
            ));
        }
    }
    Ok(w
        .into_par_iter()
        .filter_map(|l| l.trim().parse().ok())
        .collect::<Vec<T>>())
}

/// Reads a `sequenceInt` file.
pub fn read_sequence_file<T, P>(fname: P) -> io::Result<Vec<T>>
where
    T: std::str::FromStr + Send,
    P: AsRef<Path>,
{
    read_file_to_vec(
        fname,
        Some(|w: &[&str]| w.first().map_or(false, |h| h.trim() == SEQUENCE_INT))
    )
}
