use hashbrown::HashSet;
use std::collections::{BTreeSet, VecDeque};

use crate::*;

/// Tiles that become exposed when the blank tile at `origin` is revealed.
///
/// Walks blank tiles breadth-first from `origin` with an explicit worklist. Numbered tiles
/// next to the region are included but not expanded; mines, exposed tiles and flagged tiles
/// are never included. Each index is expanded at most once.
///
/// A numbered origin yields just itself and a mine yields nothing, since neither spreads.
pub fn exposure_closure(board: &Board, origin: TileIndex) -> BTreeSet<TileIndex> {
    let mut closure = BTreeSet::new();
    let Some(tile) = board.tile(origin) else {
        return closure;
    };

    match tile.kind() {
        TileKind::Mine => return closure,
        TileKind::Safe(count) if count > 0 => {
            closure.insert(origin);
            return closure;
        }
        TileKind::Safe(_) => {}
    }

    let mut visited = HashSet::new();
    let mut worklist = VecDeque::from([origin]);

    while let Some(current) = worklist.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        closure.insert(current);

        for &neighbor in board[current].neighbors() {
            if visited.contains(&neighbor) {
                continue;
            }
            let neighbor_tile = &board[neighbor];
            if !neighbor_tile.is_untouched() {
                continue;
            }
            match neighbor_tile.kind() {
                TileKind::Mine => {}
                TileKind::Safe(0) => worklist.push_back(neighbor),
                TileKind::Safe(_) => {
                    closure.insert(neighbor);
                }
            }
        }
    }

    log::trace!(
        "Exposure closure from {origin}: {} tiles, {} expanded",
        closure.len(),
        visited.len()
    );
    closure
}
