use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_minimax::{Player, Position, HEIGHT, WIDTH};

/// Draws the board as colored tiles, top row first, under a column header
pub fn draw(position: &Position) -> Result<()> {
    let mut stdout = stdout();

    let header: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(header + "\n")))?;

    for row in (0..HEIGHT).rev() {
        for column in 0..WIDTH {
            let colour = match position.cell(column, row) {
                Some(Player::X) => Color::Red,
                Some(Player::O) => Color::Yellow,
                None => Color::DarkBlue,
            };
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(colour),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
