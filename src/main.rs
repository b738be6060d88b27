use anyhow::{anyhow, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use std::io::{stdin, stdout, BufRead, Write};
use std::time::Instant;

use amazons_ai::{perft::perft_parallel, search::Searcher, Board, Move, Piece};

mod display;
use display::*;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Some("perft") = args.first().map(String::as_str) {
        let depth = match args.get(1) {
            Some(depth) => depth
                .parse::<usize>()
                .map_err(|_| anyhow!("invalid perft depth: {}", depth))?,
            None => 1,
        };
        return run_perft(depth);
    }

    let mut board = Board::new();
    let stdin = stdin();
    let mut input = stdin.lock();

    println!("Welcome to Game of the Amazons\n");

    let ai_players = (
        ask_yes_no(&mut input, "Is White AI controlled? y/n: ")?,
        ask_yes_no(&mut input, "Is Black AI controlled? y/n: ")?,
    );

    // game loop
    loop {
        display(&board)?;

        if let Some(winner) = board.winner() {
            println!("{} wins!", winner);
            break;
        }

        let side = board.turn();
        let ai_controlled = match side {
            Piece::White => ai_players.0,
            _ => ai_players.1,
        };

        let next_move = if ai_controlled {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}"));
            spinner.set_message(&format!("{} is thinking...", side));
            spinner.enable_steady_tick(100);

            let start = Instant::now();
            let mut searcher = Searcher::new(&board);
            let found = searcher.find_move(side);
            spinner.finish_and_clear();

            let next_move = found.ok_or_else(|| anyhow!("{} has no legal move", side))?;
            info!(
                "{} nodes searched in {:.2}s",
                searcher.node_count,
                start.elapsed().as_secs_f64()
            );
            println!("{} plays {}", side, next_move);
            next_move

        // human player
        } else {
            print!("{} move > ", side);
            stdout().flush()?;
            let input_str = read_input(&mut input)?;

            match input_str.trim().parse::<Move>() {
                Err(err) => {
                    println!("{}", err);
                    continue;
                }
                Ok(next_move) => next_move,
            }
        };

        if let Err(err) = board.play_checked(next_move) {
            println!("{}", err);
            // try the move again
            continue;
        }
    }
    Ok(())
}

fn ask_yes_no<R: BufRead>(input: &mut R, question: &str) -> Result<bool> {
    loop {
        print!("{}", question);
        stdout().flush()?;
        let buffer = read_input(input)?;
        match buffer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

/// Reads one line of input, failing once the input is closed
fn read_input<R: BufRead>(input: &mut R) -> Result<String> {
    let mut buffer = String::new();
    if input.read_line(&mut buffer)? == 0 {
        return Err(anyhow!("input closed"));
    }
    Ok(buffer)
}

fn run_perft(depth: usize) -> Result<()> {
    let board = Board::new();
    let root_moves = board.legal_moves_for_turn().count();

    let progress = ProgressBar::new(root_moves as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Counting move paths: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let start = Instant::now();
    let total = perft_parallel(&board, depth, |_, _| progress.inc(1));
    progress.finish();

    println!(
        "perft({}) = {} in {:.1}s",
        depth,
        total,
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn closed_input_is_an_error() {
        let mut input = Cursor::new("");
        assert!(read_input(&mut input).is_err());
        assert!(ask_yes_no(&mut input, "").is_err());
    }

    #[test]
    fn yes_no_answers() -> Result<()> {
        let mut input = Cursor::new("maybe\nYes\nn\n");
        assert!(ask_yes_no(&mut input, "")?);
        assert!(!ask_yes_no(&mut input, "")?);
        // every line has been consumed
        assert!(ask_yes_no(&mut input, "").is_err());
        Ok(())
    }
}
