use anyhow::Result;

use std::io::{stdin, stdout, Write};

use connect4_minimax::*;

mod display;

fn main() -> Result<()> {
    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    let mut engine_players = (false, false);

    // choose engine control of player X
    loop {
        let mut buffer = String::new();
        print!("Is player X engine controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                engine_players.0 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // choose engine control of player O
    loop {
        let mut buffer = String::new();
        print!("Is player O engine controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                engine_players.1 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // choose the lookahead for engine players
    let mut depth = DEFAULT_SEARCH_DEPTH;
    if engine_players != (false, false) {
        loop {
            let mut buffer = String::new();
            print!(
                "Engine search depth, 1-8 (default {}): ",
                DEFAULT_SEARCH_DEPTH
            );
            stdout().flush().expect("failed to flush to stdout!");
            stdin.read_line(&mut buffer)?;
            let answer = buffer.trim();
            if answer.is_empty() {
                break;
            }
            match answer.parse::<u32>() {
                Ok(chosen @ 1..=8) => {
                    depth = chosen;
                    break;
                }
                _ => println!("Unknown answer given"),
            }
        }
    }

    let mut position = Position::new();

    // game loop
    loop {
        display::draw(&position)?;

        if let Some(winner) = position.winner() {
            println!("Player {} wins!", winner);
            break;
        }
        if position.legal_moves().is_empty() {
            println!("Draw!");
            break;
        }

        let mover = position.next_move_player();
        let engine_turn = match mover {
            Player::X => engine_players.0,
            Player::O => engine_players.1,
        };

        let next_move = if engine_turn {
            println!("Engine is thinking...");
            stdout().flush().expect("Failed to flush to stdout!");

            // slow down play if both players are engines
            if engine_players == (true, true) {
                std::thread::sleep(std::time::Duration::new(1, 0));
            }

            let column = search::choose_move_parallel(&position, depth)?;
            println!("Player {} plays column {}", mover, column + 1);
            column
        } else {
            print!("Move input > ");
            stdout().flush().expect("Failed to flush to stdout!");
            let mut input_str = String::new();
            stdin.read_line(&mut input_str)?;

            match input_str.trim().parse::<usize>() {
                Ok(column @ 1..=WIDTH) => column - 1,
                _ => {
                    println!("Invalid column: {}", input_str.trim());
                    continue;
                }
            }
        };

        match position.play(next_move) {
            Ok(next) => position = next,
            Err(err) => {
                println!("{}", err);
                // try the move again
                continue;
            }
        }
    }
    Ok(())
}
