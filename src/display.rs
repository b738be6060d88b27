use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use amazons_ai::{square::COLUMNS, Board, Piece, Square, SIZE};

/// Draws `board` to stdout with coloured queens and spears, rank 10 at the top
pub fn display(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    for row in (0..SIZE).rev() {
        stdout.queue(PrintStyledContent(style(format!("{:>3} ", row + 1))))?;
        for col in 0..SIZE {
            let piece = Square::at(col as i32, row as i32)
                .map(|square| board.get(square))
                .unwrap_or(Piece::Empty);
            let background = if (row + col) % 2 == 0 {
                Color::DarkGrey
            } else {
                Color::Grey
            };

            stdout.queue(PrintStyledContent(
                style(format!("{} ", piece.to_char()))
                    .attribute(Attribute::Bold)
                    .on(background)
                    .with(match piece {
                        Piece::White => Color::White,
                        Piece::Black => Color::Black,
                        Piece::Spear => Color::DarkRed,
                        Piece::Empty => background,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }

    let columns: String = COLUMNS.iter().map(|c| format!("{} ", c)).collect();
    stdout.queue(PrintStyledContent(style(format!("    {}\n", columns))))?;
    stdout.flush()?;
    Ok(())
}
