//! Bin placement result files (`Bin-<n>.txt`).
//!
//! ```text
//! <piece_count>
//! <id> <rotation_degrees> <x>,<y>
//! ...
//! ```

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, info, warn};

use crate::geometry::{Bounds, Point};
use crate::problem::{parse_coordinate, parse_finite};

const BIN_FILE_PREFIX: &str = "Bin-";
const BIN_FILE_SUFFIX: &str = ".txt";

/// Where the optimizer put one piece.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementResult {
    pub piece_id: usize,
    /// Degrees, in the optimizer's (vertically mirrored) convention
    pub rotation: f64,
    /// Min corner of the piece's final bounding box
    pub position: Point,
}

impl PlacementResult {
    /// Final bounding box: `reference`'s size with the reported origin.
    pub fn final_bounds(&self, reference: &Bounds) -> Bounds {
        reference.moved_to(self.position)
    }

    /// Rotation and position are all finite numbers.
    pub fn is_finite(&self) -> bool {
        self.rotation.is_finite() && self.position.x.is_finite() && self.position.y.is_finite()
    }
}

/// Placements of a single bin.
#[derive(Debug, Clone, PartialEq)]
pub struct BinPlacement {
    /// 1-based bin number
    pub number: usize,
    pub placements: Vec<PlacementResult>,
}

/// Anything that can hand over the optimizer's placements.
pub trait PlacementSource {
    fn load_bins(&self) -> anyhow::Result<Vec<BinPlacement>>;
}

/// Placements already in memory, e.g. straight from an optimizer run.
impl PlacementSource for Vec<BinPlacement> {
    fn load_bins(&self) -> anyhow::Result<Vec<BinPlacement>> {
        Ok(self.clone())
    }
}

/// A directory holding `Bin-<n>.txt` files.
#[derive(Debug, Clone)]
pub struct ResultDirectory {
    pub path: PathBuf,
}

impl ResultDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PlacementSource for ResultDirectory {
    fn load_bins(&self) -> anyhow::Result<Vec<BinPlacement>> {
        bins_from_dir(&self.path)
    }
}

/// Parse one `<id> <rotation> <x>,<y>` line. Fields past the third are ignored,
/// non-finite numbers are rejected.
pub fn parse_placement_line(line: &str) -> Option<PlacementResult> {
    let mut fields = line.split_whitespace();
    let (id, rotation, position) = (fields.next()?, fields.next()?, fields.next()?);
    Some(PlacementResult {
        piece_id: id.parse().ok()?,
        rotation: parse_finite(rotation)?,
        position: parse_coordinate(position)?,
    })
}

/// Parse result file contents. The count line is not trusted; malformed
/// lines are skipped.
pub fn placements_from_str(data: &str) -> Vec<PlacementResult> {
    let mut placements = Vec::new();
    for (line_no, line) in data.lines().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_placement_line(line) {
            Some(p) => placements.push(p),
            None => warn!("line {}: skipping malformed placement {line:?}", line_no + 1),
        }
    }
    placements
}

/// Read one result file. Bytes that are not UTF-8 only spoil their own line.
pub fn bin_from_file(path: &Path, number: usize) -> anyhow::Result<BinPlacement> {
    let bytes =
        fs::read(path).with_context(|| format!("could not read result file {}", path.display()))?;
    Ok(BinPlacement {
        number,
        placements: placements_from_str(&String::from_utf8_lossy(&bytes)),
    })
}

/// Bin number of a `Bin-<n>.txt` path.
pub fn bin_number(path: &Path) -> Option<usize> {
    path.file_name()?
        .to_str()?
        .strip_prefix(BIN_FILE_PREFIX)?
        .strip_suffix(BIN_FILE_SUFFIX)?
        .parse()
        .ok()
}

pub fn bin_file_name(number: usize) -> String {
    format!("{BIN_FILE_PREFIX}{number}{BIN_FILE_SUFFIX}")
}

/// Read every `Bin-<n>.txt` in `dir`, ordered by `n`. Unreadable files and
/// bins without a single usable placement are dropped.
pub fn bins_from_dir(dir: &Path) -> anyhow::Result<Vec<BinPlacement>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("could not list result directory {}", dir.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        match bin_number(&path) {
            Some(n) => files.push((n, path)),
            None => debug!("ignoring {}", path.display()),
        }
    }
    files.sort_by_key(|(n, _)| *n);

    let mut bins = Vec::new();
    for (number, path) in files {
        let bin = match bin_from_file(&path, number) {
            Ok(bin) => bin,
            Err(e) => {
                warn!("{e:#}, skipping");
                continue;
            }
        };
        if bin.placements.is_empty() {
            warn!("{} holds no placements, skipping", path.display());
            continue;
        }
        bins.push(bin);
    }
    info!("found {} bin result file(s) in {}", bins.len(), dir.display());
    Ok(bins)
}

/// Serialize placements in result file layout, numbers printed the way the
/// optimizer prints them.
pub fn placements_to_string(placements: &[PlacementResult]) -> String {
    let mut out = format!("{}\n", placements.len());
    for p in placements {
        let _ = writeln!(
            out,
            "{} {} {},{}",
            p.piece_id,
            format_number(p.rotation),
            format_number(p.position.x),
            format_number(p.position.y)
        );
    }
    out
}

const SIGNIFICANT_DIGITS: i32 = 6;

/// `%g` style: six significant digits, trailing zeros dropped, scientific
/// notation below 1e-4 and from 1e6 on.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string().to_lowercase();
    }
    let sci = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    if exp < -4 || exp >= SIGNIFICANT_DIGITS {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_zeros(mantissa), exp.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exp) as usize;
        trim_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

pub fn write_bin_file(path: &Path, placements: &[PlacementResult]) -> anyhow::Result<()> {
    fs::write(path, placements_to_string(placements))
        .with_context(|| format!("could not write result file {}", path.display()))
}

/// Write one `Bin-<n>.txt` per bin into `dir`, numbered from 1 in order.
pub fn write_bin_files(dir: &Path, bins: &[Vec<PlacementResult>]) -> anyhow::Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(bins.len());
    for (i, placements) in bins.iter().enumerate() {
        let path = dir.join(bin_file_name(i + 1));
        write_bin_file(&path, placements)?;
        written.push(path);
    }
    Ok(written)
}
