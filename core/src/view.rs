use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a presentation layer may know about one tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    pub exposed: bool,
    pub flagged: bool,
    /// `None` while the tile is hidden and the game is still going.
    pub kind: Option<TileKind>,
}

impl TileView {
    pub fn of(tile: &Tile, disclose: bool) -> Self {
        Self {
            exposed: tile.is_exposed(),
            flagged: tile.is_flagged(),
            kind: (disclose || tile.is_exposed()).then(|| tile.kind()),
        }
    }
}

/// Public projection of a [`GameState`], laid out as `(row, col)`.
///
/// Hidden tiles keep their contents to themselves until the game is finished, after which
/// every tile is disclosed so the final board can be shown in full.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub level: Level,
    pub status: Status,
    pub mines_left: isize,
    pub tiles: Array2<TileView>,
}

impl BoardView {
    pub fn from_state(state: &GameState) -> Self {
        let level = state.level();
        let disclose = state.is_finished();
        let shape = (level.height() as usize, level.width() as usize);
        let tiles = Array2::from_shape_fn(shape, |(row, col)| {
            let index = row * level.width() as usize + col;
            TileView::of(&state.board()[index], disclose)
        });

        Self {
            level,
            status: state.status(),
            mines_left: state.mines_left(),
            tiles,
        }
    }

    pub fn at(&self, index: TileIndex) -> Option<TileView> {
        let width = self.level.width();
        self.tiles
            .get((row_of(index, width), col_of(index, width)))
            .copied()
    }
}

impl GameState {
    pub fn view(&self) -> BoardView {
        BoardView::from_state(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(width: Coord, height: Coord, mines: &[TileIndex]) -> GameState {
        GameState::from_board(Board::from_mine_indices(width, height, mines).unwrap())
    }

    #[test]
    fn hidden_tiles_withhold_kind() {
        let state = game(3, 2, &[5]).toggle_flag(5).unwrap().reveal(0).unwrap();

        let view = state.view();

        assert_eq!(view.tiles.dim(), (2, 3));
        assert_eq!(view.at(0).unwrap().kind, Some(TileKind::Safe(0)));
        assert_eq!(view.at(1).unwrap().kind, Some(TileKind::Safe(1)));
        assert_eq!(view.at(2).unwrap().kind, None);
        assert_eq!(
            view.at(5),
            Some(TileView {
                exposed: false,
                flagged: true,
                kind: None
            })
        );
        assert!(view.at(6).is_none());
    }

    #[test]
    fn finished_game_discloses_everything() {
        let state = game(2, 2, &[3]).reveal(3).unwrap();

        let view = state.view();

        assert_eq!(view.status, Status::Lost);
        assert_eq!(view.tiles[(0, 0)].kind, Some(TileKind::Safe(1)));
        assert!(!view.tiles[(0, 0)].exposed);
        assert_eq!(view.tiles[(1, 1)].kind, Some(TileKind::Mine));
    }

    #[test]
    fn row_major_layout_matches_indices() {
        let state = game(3, 2, &[0]).reveal(0).unwrap();

        let view = state.view();

        // index 0 is (0, 0), index 4 is (1, 1)
        assert_eq!(view.tiles[(0, 0)].kind, Some(TileKind::Mine));
        assert_eq!(view.tiles[(1, 1)].kind, Some(TileKind::Safe(1)));
        assert_eq!(view.at(4), Some(view.tiles[(1, 1)]));
    }

    #[test]
    fn serializes_for_presentation() {
        let view = game(2, 1, &[0]).view();

        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["status"], "Active");
        assert_eq!(json["mines_left"], 1);
    }
}
