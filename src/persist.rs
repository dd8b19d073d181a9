//! CSV persistence of root sets.
//!
//! One record per root:
//!
//! ```text
//! Type,Real,Imaginary
//! Zero,1.0,0.0
//! Pole,0.5,0.5
//! ```
//!
//! The header row is mandatory and row order is not significant on reload.

use crate::error::{Result, ZplaneError};
use crate::rootset::RootSet;
use num_complex::Complex64;
use std::fs;
use std::path::Path;

const HEADER: &str = "Type,Real,Imaginary";

/// Write a root set to a CSV file
pub fn save(path: &Path, roots: &RootSet) -> Result<()> {
    let mut out = String::from(HEADER);
    out.push('\n');
    for z in &roots.zeros {
        out.push_str(&format!("Zero,{},{}\n", z.re, z.im));
    }
    for p in &roots.poles {
        out.push_str(&format!("Pole,{},{}\n", p.re, p.im));
    }
    fs::write(path, out)?;
    log::info!("saved {} roots to {}", roots.zeros.len() + roots.poles.len(), path.display());
    Ok(())
}

/// Read a root set from a CSV file
///
/// Fails without side effects on a missing file, a missing header, or any
/// malformed record.
pub fn load(path: &Path) -> Result<RootSet> {
    let contents = fs::read_to_string(path)?;
    let mut lines = contents.lines().enumerate();

    match lines.next() {
        Some((_, header)) if header.trim() == HEADER => {}
        _ => {
            return Err(ZplaneError::MalformedRecord {
                line: 1,
                reason: format!("expected header '{HEADER}'"),
            });
        }
    }

    let mut roots = RootSet::new();
    for (index, line) in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 3 {
            return Err(ZplaneError::MalformedRecord {
                line: index + 1,
                reason: format!("expected 3 fields, got {}", fields.len()),
            });
        }
        let parse = |field: &str| -> Result<f64> {
            field.trim().parse().map_err(|_| ZplaneError::MalformedRecord {
                line: index + 1,
                reason: format!("'{}' is not a number", field.trim()),
            })
        };
        let value = Complex64::new(parse(fields[1])?, parse(fields[2])?);
        match fields[0].trim() {
            "Zero" => roots.zeros.push(value),
            "Pole" => roots.poles.push(value),
            other => {
                return Err(ZplaneError::MalformedRecord {
                    line: index + 1,
                    reason: format!("unknown root type '{other}'"),
                });
            }
        }
    }
    log::info!("loaded {} roots from {}", roots.zeros.len() + roots.poles.len(), path.display());
    Ok(roots)
}
