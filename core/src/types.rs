use smallvec::SmallVec;

/// Single axis used for board width and height.
pub type Coord = u16;

/// Row-major position of a tile, `row * width + col`.
pub type TileIndex = usize;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = usize;

/// Neighbor indices of a single tile, at most eight of them.
pub type Adjacency = SmallVec<[TileIndex; 8]>;

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    (a as CellCount) * (b as CellCount)
}

/// Row a tile sits on.
pub const fn row_of(index: TileIndex, width: Coord) -> TileIndex {
    index / width as TileIndex
}

/// Column a tile sits on.
pub const fn col_of(index: TileIndex, width: Coord) -> TileIndex {
    index % width as TileIndex
}

pub const fn is_valid_index(index: TileIndex, width: Coord, height: Coord) -> bool {
    index < mult(width, height)
}

/// Tiles on the same row as `anchor` among `anchor - 1`, `anchor` and `anchor + 1`.
///
/// Anything that would wrap around the left or right edge lands on a different row and is
/// dropped.
fn row_siblings(
    anchor: TileIndex,
    width: Coord,
    height: Coord,
) -> impl Iterator<Item = TileIndex> {
    let row = row_of(anchor, width);
    [anchor.checked_sub(1), Some(anchor), anchor.checked_add(1)]
        .into_iter()
        .flatten()
        .filter(move |&sibling| is_valid_index(sibling, width, height))
        .filter(move |&sibling| row_of(sibling, width) == row)
}

/// Computes the neighbor set of `index`.
///
/// The rows above, at and below the tile are anchored at `index - width`, `index` and
/// `index + width`; each valid anchor contributes its same-row siblings, and the tile itself
/// is excluded. Corners end up with 3 neighbors, edges with 5 and interior tiles with 8.
pub fn adjacent_indices(index: TileIndex, width: Coord, height: Coord) -> Adjacency {
    let stride = width as TileIndex;
    [index.checked_sub(stride), Some(index), index.checked_add(stride)]
        .into_iter()
        .flatten()
        .filter(|&anchor| is_valid_index(anchor, width, height))
        .flat_map(|anchor| row_siblings(anchor, width, height))
        .filter(|&neighbor| neighbor != index)
        .collect()
}
