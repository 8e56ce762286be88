use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use log::debug;
use wordaxis_core::{
    word_set_index, AdvanceOutcome, CheckOutcome, GameSession, SelectOutcome, Slot, WORD_SETS,
};

use crate::store::FileStore;

const BOARD_WIDTH: usize = 72;
const BOARD_HEIGHT: usize = 9;

pub(crate) fn run(
    set_slug: &str,
    seed: u32,
    store_path: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(start_index) = word_set_index(set_slug) else {
        eprintln!("unknown word set: {set_slug}");
        eprintln!("available word sets:");
        for set in WORD_SETS {
            eprintln!("  {} ({})", set.slug, set.label);
        }
        return Ok(());
    };

    let store = FileStore::new(store_path);
    let today = today_stamp();
    if let Some(record) = store.load() {
        if record.last_played == today {
            println!("You already finished today's puzzles. Come back tomorrow for new ones!");
            return Ok(());
        }
    }

    debug!("base seed {seed:#010x}");
    let mut session = GameSession::starting_at(WORD_SETS, start_index, seed, store);

    println!("Arrange the words so each one sits in its right spot.");
    println!("The top word is fixed. Type a tile number (or its word) to pick it up,");
    println!("then another to swap. `check` when you think you have it, `help` for more.");
    render(&session);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input.to_ascii_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "help" | "h" | "?" => {
                print_help();
                continue;
            }
            "check" | "c" | "done" => {
                handle_check(&mut session);
                continue;
            }
            "next" | "n" => {
                if !session.state().over {
                    println!("Finish this board first: `check` it before moving on.");
                    continue;
                }
                match session.advance(&today)? {
                    AdvanceOutcome::NextSet { set_index } => {
                        println!("Starting {}!", WORD_SETS[set_index].label);
                        render(&session);
                    }
                    AdvanceOutcome::Finished => {
                        println!("Come back tomorrow for new puzzles!");
                        break;
                    }
                    AdvanceOutcome::AlreadyFinished => break,
                }
                continue;
            }
            _ => {}
        }

        let Some(tile_id) = resolve_tile(&session, input) else {
            println!("Unknown command. Type `help` for the list.");
            continue;
        };
        match session.select_or_swap(tile_id) {
            SelectOutcome::Selected => {
                let text = tile_text(&session, tile_id);
                println!("Picked up \"{text}\". Choose a tile to swap it with.");
                render(&session);
            }
            SelectOutcome::Deselected => {
                println!("Selection cleared.");
                render(&session);
            }
            SelectOutcome::Swapped => render(&session),
            SelectOutcome::Ignored => {
                if session.state().over {
                    println!("The board is locked. Type `next` to move on.");
                } else if session
                    .state()
                    .tile(tile_id)
                    .is_some_and(|tile| tile.slot == Slot::Top)
                {
                    println!("The top word stays put.");
                } else {
                    println!("No tile with id {tile_id}.");
                }
            }
        }
    }

    Ok(())
}

fn handle_check(session: &mut GameSession<FileStore>) {
    match session.check_solution() {
        CheckOutcome::Solved => {
            println!("Congratulations! You solved the puzzle!");
            if session.sets_remaining() > 0 {
                println!("Type `next` for the next set.");
            } else {
                println!("Type `next` to wrap up.");
            }
        }
        CheckOutcome::IncorrectRetry { lives_remaining } => {
            let tries = if lives_remaining == 1 { "try" } else { "tries" };
            println!("Wrong arrangement! {lives_remaining} {tries} left");
        }
        CheckOutcome::LivesExhausted => {
            println!("Game Over!");
            println!("Type `next` to move on.");
        }
    }
}

fn resolve_tile(session: &GameSession<FileStore>, input: &str) -> Option<u32> {
    if let Ok(id) = input.parse::<u32>() {
        return Some(id);
    }
    session
        .state()
        .tiles
        .iter()
        .find(|tile| tile.text.eq_ignore_ascii_case(input))
        .map(|tile| tile.id)
}

fn tile_text(session: &GameSession<FileStore>, tile_id: u32) -> String {
    session
        .state()
        .tile(tile_id)
        .map(|tile| tile.text.clone())
        .unwrap_or_default()
}

fn render(session: &GameSession<FileStore>) {
    let state = session.state();
    let mut canvas = vec![vec![' '; BOARD_WIDTH]; BOARD_HEIGHT];
    for tile in &state.tiles {
        let marker = if state.selected == Some(tile.id) { ">" } else { "" };
        let label = format!("{}[{}] {}", marker, tile.id, tile.text);
        let (fx, fy) = tile.slot.anchor();
        let row = ((fy * (BOARD_HEIGHT - 1) as f32).round() as usize).min(BOARD_HEIGHT - 1);
        let max_col = BOARD_WIDTH.saturating_sub(label.len());
        let col = ((fx * BOARD_WIDTH as f32) as usize)
            .saturating_sub(label.len() / 2)
            .min(max_col);
        for (i, ch) in label.chars().enumerate() {
            canvas[row][col + i] = ch;
        }
    }

    println!();
    for row in canvas {
        let line: String = row.iter().collect();
        println!("{}", line.trim_end());
    }
    println!();
    let total = state.set_index + 1 + session.sets_remaining();
    println!(
        "Set {} of {}: {}   Lives: {}",
        state.set_index + 1,
        total,
        session.set().label,
        state.lives
    );
}

fn print_help() {
    println!("  <number>   select a tile, or swap it with the selected one");
    println!("  <word>     same, by the word on the tile");
    println!("  check      compare the arrangement against the solution");
    println!("  next       move on after a solved or failed board");
    println!("  quit       leave the game");
}

fn today_stamp() -> String {
    chrono::Local::now().format("%a %b %d %Y").to_string()
}
