//! Drawing surface: one SVG page per bin with piece outlines and stroke-font
//! id labels.
//!
//! Geometry is drawn in a y-up frame (the page group flips the y axis), so the
//! optimizer's coordinates and the stroke font's glyphs are used as they are.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, info, warn};
use rayon::prelude::*;
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Group, Path as SvgPath, Rectangle, Title};

use crate::config::{RenderConfig, StrokeStyle};
use crate::error::NestError;
use crate::font::{FontTable, Polyline};
use crate::geometry::Point;
use crate::inland::{InlandPoint, most_inland_point};
use crate::placement::compute_final_vertices;
use crate::problem::{Piece, Problem};
use crate::results::{BinPlacement, PlacementResult};

/// Per-piece problem that did not stop the bin from rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// The placement names a piece the problem file does not define
    MissingGeometry { bin: usize, piece_id: usize },
    /// The piece has no interior to put a label in
    NoLabelRoom { bin: usize, piece_id: usize },
    /// The placement's rotation or position is not a finite number
    BadPlacement { bin: usize, piece_id: usize },
}

/// A placed piece ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledPiece {
    pub piece_id: usize,
    pub outline: Vec<Point>,
    pub inland: InlandPoint,
    /// Label strokes in world coordinates; empty when there is no room
    pub label: Vec<Polyline>,
}

pub struct RenderedBin {
    pub number: usize,
    pub pieces: Vec<LabeledPiece>,
    pub diagnostics: Vec<Diagnostic>,
    pub document: Document,
}

/// Lay `text` out centered on the inland point, sized from its diameter.
pub fn layout_label(
    font: &FontTable,
    text: &str,
    inland: &InlandPoint,
    cfg: &RenderConfig,
) -> Vec<Polyline> {
    let scale = inland.diameter / cfg.label_size_divisor;
    let width = font.string_width(text, scale);
    let dx = inland.point.x - width / 2.0;
    let dy = inland.point.y - cfg.label_baseline * scale;
    font.layout_string(text, scale)
        .into_iter()
        .map(|path| path.into_iter().map(|p| Point::new(p.x + dx, p.y + dy)).collect())
        .collect()
}

/// Move a piece to its placement and compute its label.
pub fn label_piece(
    piece: &Piece,
    placement: &PlacementResult,
    font: &FontTable,
    cfg: &RenderConfig,
) -> Result<LabeledPiece, NestError> {
    let final_bounds = placement.final_bounds(piece.bounds());
    let outline = compute_final_vertices(
        piece.vertices(),
        piece.bounds(),
        placement.rotation,
        &final_bounds,
    )?;
    let inland = most_inland_point(&outline, cfg.erosion_step)?;
    debug!(
        "piece {}: label anchor ({:.3}, {:.3}), diameter {:.3}",
        piece.id(),
        inland.point.x,
        inland.point.y,
        inland.diameter
    );
    let label = if cfg.labels && inland.diameter > 0.0 {
        layout_label(font, &piece.id().to_string(), &inland, cfg)
    } else {
        Vec::new()
    };
    Ok(LabeledPiece {
        piece_id: piece.id(),
        outline,
        inland,
        label,
    })
}

enum Outcome {
    Drawn(LabeledPiece),
    Missing(usize),
    Rejected(usize),
}

/// Place, label and draw every piece of one bin.
///
/// Pieces missing from `problem` are skipped and reported; only contract
/// violations (such as a non-positive erosion step) fail the bin.
pub fn render_bin(
    bin: &BinPlacement,
    problem: &Problem,
    font: &FontTable,
    cfg: &RenderConfig,
) -> anyhow::Result<RenderedBin> {
    info!("drawing bin {}", bin.number);
    let outcomes: Vec<Result<Outcome, NestError>> = bin
        .placements
        .par_iter()
        .map(|placement| match problem.piece(placement.piece_id) {
            _ if !placement.is_finite() => Ok(Outcome::Rejected(placement.piece_id)),
            Some(piece) => label_piece(piece, placement, font, cfg).map(Outcome::Drawn),
            None => Ok(Outcome::Missing(placement.piece_id)),
        })
        .collect();

    let mut pieces = Vec::with_capacity(outcomes.len());
    let mut diagnostics = Vec::new();
    for outcome in outcomes {
        match outcome.with_context(|| format!("bin {}", bin.number))? {
            Outcome::Drawn(piece) => {
                if cfg.labels && piece.label.is_empty() {
                    diagnostics.push(Diagnostic::NoLabelRoom {
                        bin: bin.number,
                        piece_id: piece.piece_id,
                    });
                }
                pieces.push(piece);
            }
            Outcome::Missing(piece_id) => {
                warn!(
                    "bin {}: could not find original geometry for piece {piece_id}",
                    bin.number
                );
                diagnostics.push(Diagnostic::MissingGeometry {
                    bin: bin.number,
                    piece_id,
                });
            }
            Outcome::Rejected(piece_id) => {
                warn!("bin {}: placement of piece {piece_id} is not finite", bin.number);
                diagnostics.push(Diagnostic::BadPlacement {
                    bin: bin.number,
                    piece_id,
                });
            }
        }
    }

    let document = bin_document(bin.number, &pieces, problem, cfg);
    Ok(RenderedBin {
        number: bin.number,
        pieces,
        diagnostics,
        document,
    })
}

/// Render all bins, in parallel, keeping their order.
pub fn render_bins(
    bins: &[BinPlacement],
    problem: &Problem,
    font: &FontTable,
    cfg: &RenderConfig,
) -> anyhow::Result<Vec<RenderedBin>> {
    bins.par_iter()
        .map(|bin| render_bin(bin, problem, font, cfg))
        .collect()
}

fn stroked(data: Data, style: &StrokeStyle) -> SvgPath {
    SvgPath::new()
        .set("fill", "none")
        .set("stroke", style.color.as_str())
        .set("stroke-width", style.width)
        .set("d", data)
}

fn outline_data(outline: &[Point]) -> Data {
    let mut data = Data::new().move_to((outline[0].x, outline[0].y));
    for p in &outline[1..] {
        data = data.line_to((p.x, p.y));
    }
    data.close()
}

fn label_data(label: &[Polyline]) -> Data {
    let mut data = Data::new();
    for path in label.iter().filter(|p| !p.is_empty()) {
        data = data.move_to((path[0].x, path[0].y));
        for p in &path[1..] {
            data = data.line_to((p.x, p.y));
        }
    }
    data
}

/// Build the page of one bin.
pub fn bin_document(
    number: usize,
    pieces: &[LabeledPiece],
    problem: &Problem,
    cfg: &RenderConfig,
) -> Document {
    let page_width = problem.bin_width + cfg.page_padding;
    let page_height = problem.bin_height + cfg.page_padding;
    let [origin_x, origin_y] = cfg.origin_offset;

    let frame = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", problem.bin_width)
        .set("height", problem.bin_height)
        .set("fill", "none")
        .set("stroke", cfg.bin_stroke.color.as_str())
        .set("stroke-width", cfg.bin_stroke.width);

    let mut page = Group::new()
        .set("id", format!("bin_{number}"))
        .set(
            "transform",
            format!("translate({origin_x} {}) scale(1 -1)", page_height - origin_y),
        )
        .add(frame);

    for piece in pieces.iter().filter(|p| !p.outline.is_empty()) {
        let mut group = Group::new()
            .set("id", format!("piece_{}", piece.piece_id))
            .add(Title::new(format!("piece {}", piece.piece_id)))
            .add(stroked(outline_data(&piece.outline), &cfg.piece_stroke));
        if !piece.label.is_empty() {
            group = group.add(stroked(label_data(&piece.label), &cfg.label_stroke));
        }
        page = page.add(group);
    }

    Document::new()
        .set("width", page_width)
        .set("height", page_height)
        .set("viewBox", (0.0, 0.0, page_width, page_height))
        .add(page)
}

pub fn svg_file_name(number: usize) -> String {
    format!("Bin-{number}.svg")
}

/// Write each rendered bin to `<dir>/Bin-<n>.svg`.
pub fn write_documents(dir: &Path, rendered: &[RenderedBin]) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("could not create output directory {}", dir.display()))?;
    let mut written = Vec::with_capacity(rendered.len());
    for bin in rendered {
        let path = dir.join(svg_file_name(bin.number));
        svg::save(&path, &bin.document)
            .with_context(|| format!("could not write {}", path.display()))?;
        info!("svg written to {}", path.display());
        written.push(path);
    }
    Ok(written)
}
