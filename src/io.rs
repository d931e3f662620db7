//! Loaders for the on-disk triple `{basepath}.L`, `{basepath}.out` and
//! `{basepath}.in` a pruned Wheeler automaton is handed to this crate as.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::bitvector::BitVector;
use crate::error::WgLcpError;

fn open(basepath: &Path, ext: &str) -> Result<(File, PathBuf), WgLcpError> {
    let path = basepath.with_extension(ext);
    let file = File::open(&path).map_err(|source| WgLcpError::InputMissing {
        path: path.clone(),
        source,
    })?;
    Ok((file, path))
}

/// Reads `{basepath}.L`: one ASCII byte per edge, the outgoing-label
/// sequence in Wheeler order. Bytes must fall in `[1, 127]`; `0` is reserved
/// to mean "absent" and never appears in a real `L` file.
pub fn read_l_file(basepath: &Path) -> Result<Vec<u8>, WgLcpError> {
    let (file, path) = open(basepath, "L")?;
    let mut buf = Vec::new();
    BufReader::new(file)
        .read_to_end(&mut buf)
        .map_err(|source| WgLcpError::InputMissing {
            path: path.clone(),
            source,
        })?;
    if buf.is_empty() {
        return Err(WgLcpError::InputMalformed {
            path,
            reason: "L is empty".to_string(),
        });
    }
    for (i, &b) in buf.iter().enumerate() {
        if !(1..=127).contains(&b) {
            return Err(WgLcpError::InputMalformed {
                path,
                reason: format!("byte {b} at offset {i} is not a label in [1,127]"),
            });
        }
    }
    Ok(buf)
}

/// Reads `{basepath}.out`: the degree-encoded bitmap (see
/// [`crate::fm_index::FmIndex::state_to_bwt_pos`]), one ASCII `'0'`/`'1'`
/// byte per bit.
pub fn read_out_file(basepath: &Path) -> Result<BitVector, WgLcpError> {
    let (file, path) = open(basepath, "out")?;
    BitVector::load(BufReader::new(file), &path)
}

/// Reads only the source-count prefix of `{basepath}.in`: the leading run
/// of ASCII `'1'` bytes, terminated by a `'0'`. Mirrors `check_source`'s
/// read loop exactly — the byte count consumed through and including the
/// terminating `'0'` is `s + 1`, so `s` is "bytes read, minus one". The
/// rest of the file (one bucket-membership bit per non-source state) is
/// the full Wheeler-graph loader's concern, out of scope for this crate's
/// pruned-loader (see DESIGN.md, "`.in` loader policy").
pub fn read_source_count(basepath: &Path) -> Result<usize, WgLcpError> {
    let (file, path) = open(basepath, "in")?;
    let mut reader = BufReader::new(file);
    let mut byte = [0u8; 1];
    let mut ones = 0usize;
    loop {
        let n = reader
            .read(&mut byte)
            .map_err(|source| WgLcpError::InputMissing {
                path: path.clone(),
                source,
            })?;
        if n == 0 {
            return Err(WgLcpError::InputMalformed {
                path,
                reason: "in has no terminating 0 after the source-count prefix".to_string(),
            });
        }
        match byte[0] {
            b'1' => ones += 1,
            b'0' => {
                if ones == 0 {
                    return Err(WgLcpError::InputMalformed {
                        path,
                        reason: "sources prefix is empty: at least one source is required"
                            .to_string(),
                    });
                }
                return Ok(ones);
            }
            other => {
                return Err(WgLcpError::InputMalformed {
                    path,
                    reason: format!("byte {other} in source-count prefix is neither '0' nor '1'"),
                });
            }
        }
    }
}
