use std::io::{self, Write};

use memorama_core::{CardView, Coord2, MatchEngine};

/// Pushes previous output off the top of a plain terminal.
pub(crate) fn clear<W: Write>(output: &mut W) -> io::Result<()> {
    write!(output, "{}", "\n".repeat(40))
}

/// Renders the grid with `*` for hidden cards and face letters for visible
/// ones. `face_up` overlays transient reveals on top of the engine's view.
pub(crate) fn render_board<W: Write>(
    output: &mut W,
    engine: &MatchEngine,
    face_up: &[Coord2],
) -> io::Result<()> {
    let (rows, cols) = engine.size();

    let header: Vec<String> = (1..=cols).map(|col| format!("{col:>2}")).collect();
    writeln!(output, "    {}", header.join(" "))?;
    writeln!(output, "   {}", "---".repeat(cols as usize))?;

    for row in 0..rows {
        write!(output, "{:>2} |", row + 1)?;
        for col in 0..cols {
            let coords = (row, col);
            let view = if face_up.contains(&coords) {
                CardView::FaceUp(engine.board()[coords])
            } else {
                engine.card_at(coords)
            };
            match view {
                CardView::FaceUp(symbol) => write!(output, " {symbol}")?,
                CardView::Hidden => write!(output, " *")?,
            }
        }
        writeln!(output)?;
    }

    Ok(())
}
