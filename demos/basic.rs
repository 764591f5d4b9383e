//! Basic example of using the Boggle engine

use boggle_core::{check_path, find_path, Generator, Grid, Solver, WordList};

const WORDS: &str = "
# a tiny word list; real hosts load a full dictionary
cat
cod
code
codes
date
den
dog
dogs
ends
send
ten
tend
toad
";

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .parse_default_env()
        .init();

    let words = WordList::parse(WORDS);
    let solver = Solver::new();

    // Generate a board
    println!("Generating a 4x4 board...\n");
    let mut generator = Generator::new();
    if let Some(board) = generator.generate(4) {
        println!("{}\n", board);
        println!("Words found: {}\n", solver.count_words(&board, &words));
    }

    // Parse a board from a string
    println!("--- Parsing a board from string ---\n");
    let board = match Grid::from_string("CAT/ODE/GSN") {
        Ok(board) => board,
        Err(e) => {
            eprintln!("bad board: {e}");
            return;
        }
    };
    println!("{}\n", board);

    let found = solver.find_words(&board, &words);
    println!("{} words: {:?}", found.len(), found);
    println!(
        "Four-letter words: {}",
        solver.count_words_of_length(&board, &words, 4)
    );
    if let Some(word) = solver.any_word(&board, &words) {
        println!("Any word: {}", word);
    }

    // Mark a word and check the tiles
    println!("\n--- Marking a word ---\n");
    if let Some(path) = find_path(&board, "codes") {
        let tiles: Vec<String> = path.iter().map(|pos| pos.to_string()).collect();
        println!("CODES is at {}", tiles.join(" -> "));
        println!("Valid path: {}", check_path(&board, path.positions(), "codes"));
    }
}
