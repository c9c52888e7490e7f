use std::fs;
use std::path::Path;

use anyhow::{Context, bail};
use log::debug;

use crate::geometry::{Bounds, Point, get_polygon_bounds};

/// A piece as loaded from the problem file. Geometry is fixed after loading.
#[derive(Debug, Clone)]
pub struct Piece {
    id: usize,
    vertices: Vec<Point>,
    bounds: Bounds,
}

impl Piece {
    /// Returns `None` when `vertices` is empty.
    pub fn new(id: usize, vertices: Vec<Point>) -> Option<Self> {
        let bounds = get_polygon_bounds(&vertices)?;
        Some(Self {
            id,
            vertices,
            bounds,
        })
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Bounds of the original vertices; its center is the rotation pivot.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }
}

/// Bin size and the original geometry of every piece.
#[derive(Debug, Clone)]
pub struct Problem {
    pub bin_width: f64,
    pub bin_height: f64,
    pieces: Vec<Piece>,
}

impl Problem {
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Piece ids start at 1, in file order.
    pub fn piece(&self, id: usize) -> Option<&Piece> {
        id.checked_sub(1).and_then(|i| self.pieces.get(i))
    }
}

/// Parse a problem file.
pub fn problem_from_file(path: &Path) -> anyhow::Result<Problem> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("could not read problem file {}", path.display()))?;
    problem_from_str(&data).with_context(|| format!("malformed problem file {}", path.display()))
}

/// Parse problem file contents.
///
/// The first line holds the bin width and height, the second line is ignored
/// and every following non-empty line lists one piece as `x,y` tokens.
/// Tokens that are not two comma-separated finite numbers are skipped; a line with no
/// usable token yields no piece and consumes no id.
pub fn problem_from_str(data: &str) -> anyhow::Result<Problem> {
    let mut lines = data.lines();
    let header = lines.next().unwrap_or_default();
    let mut dims = header.split_whitespace().map(str::parse::<f64>);
    let (bin_width, bin_height) = match (dims.next(), dims.next()) {
        (Some(Ok(w)), Some(Ok(h))) if w.is_finite() && h.is_finite() => (w, h),
        _ => bail!("could not read bin dimensions from {header:?}"),
    };

    let mut pieces = Vec::new();
    for (line_no, line) in lines.enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut vertices = Vec::new();
        for token in line.split_whitespace() {
            match parse_coordinate(token) {
                Some(p) => vertices.push(p),
                None => debug!("line {}: skipping coordinate {token:?}", line_no + 2),
            }
        }
        if let Some(piece) = Piece::new(pieces.len() + 1, vertices) {
            pieces.push(piece);
        }
    }

    Ok(Problem {
        bin_width,
        bin_height,
        pieces,
    })
}

/// Parse an `x,y` token. `nan` and `inf` are not coordinates.
pub fn parse_coordinate(token: &str) -> Option<Point> {
    let (x, y) = token.split_once(',')?;
    Some(Point::new(parse_finite(x)?, parse_finite(y)?))
}

/// Parse a number, rejecting the non-finite spellings `f64::from_str` accepts.
pub(crate) fn parse_finite(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
