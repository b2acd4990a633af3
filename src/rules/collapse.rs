//! Single-row collapse toward index 0.
//!
//! This is the only sliding algorithm in the crate. Every direction is first
//! reoriented so that it becomes "collapse left" (see `Direction`), then each
//! row goes through [`collapse_line`] independently.
//!
//! ## Algorithm
//!
//! 1. Compact the non-empty tiles, keeping their order.
//! 2. Scan once, left to right. When the current tile equals the next one,
//!    emit a single doubled tile and skip the partner; otherwise keep the
//!    tile as is.
//! 3. Pad with empty cells back to the original length.
//!
//! A tile merges at most once per move, and `Tile::MAX` never merges. With three or more equal tiles in a
//! row only the pair nearest index 0 merges first, and the freshly merged
//! tile never merges again in the same pass.

use smallvec::SmallVec;

use crate::board::{Cell, Tile};

/// Row buffer sized for boards up to 8 wide without allocating.
pub type LineBuf<T> = SmallVec<[T; 8]>;

/// A merge inside one canonical row, by column index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineMerge {
    /// Original index of the tile nearer index 0.
    pub from_a: usize,
    /// Original index of its partner.
    pub from_b: usize,
    /// Index the merged tile lands on.
    pub into: usize,
    /// The merged tile.
    pub tile: Tile,
}

/// Result of collapsing one row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollapsedLine {
    pub cells: LineBuf<Cell>,
    pub score: u64,
    pub merges: LineBuf<LineMerge>,
}

/// Collapse `line` toward index 0.
///
/// ```
/// use twenty48_engine::board::Tile;
/// use twenty48_engine::rules::collapse_line;
///
/// let two = Some(Tile::TWO);
/// let out = collapse_line(&[two, two, two, two]);
///
/// let four = Some(Tile::FOUR);
/// assert_eq!(out.cells.as_slice(), &[four, four, None, None]);
/// assert_eq!(out.score, 8);
/// ```
#[must_use]
pub fn collapse_line(line: &[Cell]) -> CollapsedLine {
    let compact: LineBuf<(usize, Tile)> = line
        .iter()
        .enumerate()
        .filter_map(|(i, cell)| cell.map(|tile| (i, tile)))
        .collect();

    let mut cells: LineBuf<Cell> = SmallVec::with_capacity(line.len());
    let mut merges = LineBuf::new();
    let mut score = 0u64;
    let mut skip_next = false;

    for (k, &(index, tile)) in compact.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        let pair = compact
            .get(k + 1)
            .filter(|&&(_, next)| next == tile)
            .and_then(|&(partner, _)| tile.doubled().map(|merged| (partner, merged)));
        match pair {
            Some((partner, merged)) => {
                merges.push(LineMerge {
                    from_a: index,
                    from_b: partner,
                    into: cells.len(),
                    tile: merged,
                });
                score += u64::from(merged.value());
                cells.push(Some(merged));
                skip_next = true;
            }
            None => cells.push(Some(tile)),
        }
    }

    cells.resize(line.len(), None);
    CollapsedLine { cells, score, merges }
}
