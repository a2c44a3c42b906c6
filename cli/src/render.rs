use std::fmt::{self, Write};

use minefield_core::{BoardView, Status, TileKind, TileView};

fn cell_glyph(tile: TileView) -> char {
    match (tile.exposed, tile.flagged, tile.kind) {
        // flags stay visible, even on a disclosed board
        (false, true, _) => 'F',
        (false, false, Some(TileKind::Mine)) => '*',
        (false, false, _) => '#',
        (true, _, Some(TileKind::Mine)) => '@',
        (true, _, Some(TileKind::Safe(0))) => '.',
        (true, _, Some(TileKind::Safe(count))) => char::from(b'0' + count),
        (true, _, None) => '?',
    }
}

fn status_line(view: &BoardView) -> &'static str {
    match view.status {
        Status::Active => "playing",
        Status::Won => "you won!",
        Status::Lost => "boom, you lost",
    }
}

/// Draws the board with column numbers on top and row numbers on the left.
pub(crate) fn render(view: &BoardView) -> Result<String, fmt::Error> {
    let (rows, cols) = view.tiles.dim();
    let label_width = rows.saturating_sub(1).to_string().len();
    let cell_width = cols.saturating_sub(1).to_string().len();

    let mut out = String::new();
    writeln!(out, "mines left: {}  [{}]", view.mines_left, status_line(view))?;

    write!(out, "{:label_width$} ", "")?;
    for col in 0..cols {
        write!(out, " {col:>cell_width$}")?;
    }
    writeln!(out)?;

    for (row, tiles) in view.tiles.outer_iter().enumerate() {
        write!(out, "{row:>label_width$} ")?;
        for &tile in tiles.iter() {
            write!(out, " {:>cell_width$}", cell_glyph(tile))?;
        }
        writeln!(out)?;
    }
    Ok(out)
}
