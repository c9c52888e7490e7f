//! Stroke font engine.
//!
//! Glyphs are open polylines in glyph units (baseline at `y = 0`, y up). The
//! table is parsed once and shared read-only; every layout call takes its
//! scale explicitly.

use std::sync::OnceLock;

use log::debug;

use crate::geometry::Point;

mod romans;

pub use romans::SPACE_ADVANCE;

/// Right-side padding added to a glyph's widest vertex to get its advance.
pub const GLYPH_PADDING: f64 = 4.0;

const SPACE: u32 = 0x20;
const TABLE_SIZE: usize = 256;

pub type Polyline = Vec<Point>;

#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub paths: Vec<Polyline>,
    pub advance: f64,
}

/// Immutable code point to glyph lookup.
///
/// Glyphs live in an arena; `index` maps a code point below 256 to its slot.
#[derive(Debug, Clone)]
pub struct FontTable {
    glyphs: Vec<Glyph>,
    index: [Option<u16>; TABLE_SIZE],
}

impl FontTable {
    /// Build a table from `(code point, definition)` pairs.
    ///
    /// A definition reads `advance; x,y x,y ...; x,y ...` (`:` is accepted as a
    /// separator too). The leading field is ignored: each glyph advances by its
    /// widest x plus [`GLYPH_PADDING`]. Malformed vertices are dropped. The space
    /// character gets `space_advance` and no strokes unless it is defined.
    pub fn parse(definitions: &[(u32, &str)], space_advance: f64) -> Self {
        let mut table = FontTable {
            glyphs: Vec::with_capacity(definitions.len() + 1),
            index: [None; TABLE_SIZE],
        };
        table.insert(
            SPACE,
            Glyph {
                paths: Vec::new(),
                advance: space_advance,
            },
        );
        for &(code, definition) in definitions {
            if code as usize >= TABLE_SIZE {
                debug!("skipping glyph for code point {code:#x}, outside the table");
                continue;
            }
            table.insert(code, parse_glyph(definition));
        }
        table
    }

    /// The built-in Roman simplex font, built on first use.
    pub fn romans() -> &'static FontTable {
        static ROMANS: OnceLock<FontTable> = OnceLock::new();
        ROMANS.get_or_init(|| FontTable::parse(romans::GLYPHS, SPACE_ADVANCE))
    }

    fn insert(&mut self, code: u32, glyph: Glyph) {
        let slot = &mut self.index[code as usize];
        match *slot {
            Some(i) => self.glyphs[i as usize] = glyph,
            None => {
                *slot = Some(self.glyphs.len() as u16);
                self.glyphs.push(glyph);
            }
        }
    }

    pub fn glyph(&self, c: char) -> Option<&Glyph> {
        let code = c as usize;
        if code >= TABLE_SIZE {
            return None;
        }
        self.index[code].map(|i| &self.glyphs[i as usize])
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Advance of `c` at `scale`; zero for characters not in the table.
    pub fn glyph_width(&self, c: char, scale: f64) -> f64 {
        self.glyph(c).map_or(0.0, |g| g.advance * scale)
    }

    pub fn string_width(&self, text: &str, scale: f64) -> f64 {
        text.chars().map(|c| self.glyph_width(c, scale)).sum()
    }

    /// Lay `text` out left to right from the origin.
    ///
    /// Every stroke of every known character is scaled by `scale` and shifted by
    /// the running cursor. Unknown characters emit nothing and do not advance.
    pub fn layout_string(&self, text: &str, scale: f64) -> Vec<Polyline> {
        let mut cursor = 0.0;
        let mut out = Vec::new();
        for c in text.chars() {
            if let Some(glyph) = self.glyph(c) {
                out.extend(glyph.paths.iter().map(|path| {
                    path.iter()
                        .map(|p| Point::new(p.x * scale + cursor, p.y * scale))
                        .collect::<Polyline>()
                }));
            }
            cursor += self.glyph_width(c, scale);
        }
        out
    }
}

fn parse_glyph(definition: &str) -> Glyph {
    let definition = definition.replace(':', ";");
    let mut paths = Vec::new();
    let mut max_x: f64 = 0.0;
    for path_def in definition.split(';').skip(1) {
        let path: Polyline = path_def
            .split_whitespace()
            .filter_map(parse_vertex)
            .collect();
        for p in &path {
            max_x = max_x.max(p.x);
        }
        if !path.is_empty() {
            paths.push(path);
        }
    }
    Glyph {
        paths,
        advance: max_x + GLYPH_PADDING,
    }
}

fn parse_vertex(token: &str) -> Option<Point> {
    let mut coords = token.split(',');
    let (x, y) = (coords.next()?, coords.next()?);
    if coords.next().is_some() {
        return None;
    }
    Some(Point::new(x.parse().ok()?, y.parse().ok()?))
}
