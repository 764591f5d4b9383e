//! Cross-cutting properties of the search, path and generator APIs on
//! seeded random boards.

use boggle_core::{
    check_path, find_path, is_word_on_board, Dictionary, Generator, Grid, Position, Solver,
    WordList,
};

/// Words guaranteed to be on `grid`: every row, column and their prefixes of
/// three letters, read in both directions.
fn board_words(grid: &Grid) -> Vec<String> {
    let rows = grid.to_rows();
    let mut lines: Vec<String> = rows.clone();
    for col in 0..grid.cols() {
        lines.push(rows.iter().map(|r| r.as_bytes()[col] as char).collect());
    }

    let mut words = Vec::new();
    for line in lines {
        let reversed: String = line.chars().rev().collect();
        for candidate in [line, reversed] {
            words.push(candidate[..3].to_string());
            words.push(candidate);
        }
    }
    words
}

fn seeded_boards() -> impl Iterator<Item = Grid> {
    (0..25u64).filter_map(|seed| Generator::with_seed(seed).generate(4))
}

fn decoys() -> [&'static str; 4] {
    ["qqqq", "zxzx", "ab", "a"]
}

#[test]
fn test_enumerated_words_are_long_enough_and_placeable() {
    let solver = Solver::new();
    for grid in seeded_boards() {
        let words = WordList::from_words(board_words(&grid).iter().map(String::as_str).chain(decoys()));
        let found = solver.find_words(&grid, &words);

        assert!(!found.is_empty(), "no words on\n{grid}");
        for word in &found {
            assert!(word.len() >= 3);
            assert!(words.is_word(word));
            assert!(is_word_on_board(&grid, word));
        }
        for word in board_words(&grid) {
            assert!(found.contains(&word.to_ascii_lowercase()), "missed {word} on\n{grid}");
        }
    }
}

#[test]
fn test_find_path_round_trips_through_check_path() {
    let solver = Solver::new();
    for grid in seeded_boards() {
        let words = WordList::from_words(board_words(&grid));
        for word in solver.find_words(&grid, &words) {
            let path = find_path(&grid, &word).expect("enumerated word must be placeable");
            assert_eq!(path.len(), word.len());
            assert!(check_path(&grid, path.positions(), &word));
            assert!(check_path(&grid, path.positions(), &word.to_ascii_uppercase()));

            let padded = format!(" {word}\n");
            let padded_path = find_path(&grid, &padded).expect("padding is ignored");
            assert_eq!(padded_path, path);
            assert!(check_path(&grid, padded_path.positions(), &padded));
        }
    }
}

#[test]
fn test_length_queries_partition_the_enumeration() {
    let solver = Solver::new();
    for grid in seeded_boards() {
        let words = WordList::from_words(board_words(&grid));
        let all = solver.find_words(&grid, &words);

        let mut total = 0;
        for length in 3..=grid.cell_count() {
            let exact = solver.find_words_of_length(&grid, &words, length);
            let expected: Vec<&String> = all.iter().filter(|w| w.len() == length).collect();
            assert_eq!(exact.iter().collect::<Vec<_>>(), expected);
            total += exact.len();

            match solver.any_word_of_length(&grid, &words, length) {
                Some(word) => {
                    assert_eq!(word.len(), length);
                    assert!(words.is_word(&word));
                    assert!(exact.contains(&word));
                }
                None => assert!(exact.is_empty()),
            }
        }
        assert_eq!(total, all.len());
    }
}

#[test]
fn test_any_word_is_one_of_the_enumerated_words() {
    let solver = Solver::new();
    for grid in seeded_boards() {
        let words = WordList::from_words(board_words(&grid));
        let any = solver.any_word(&grid, &words).expect("board words exist");
        assert!(solver.find_words(&grid, &words).contains(&any));
    }
}

#[test]
fn test_count_is_monotone_in_the_dictionary() {
    let solver = Solver::new();
    for grid in seeded_boards() {
        let all = board_words(&grid);
        let small = WordList::from_words(all.iter().take(4));
        let large = WordList::from_words(&all);
        assert!(solver.count_words(&grid, &small) <= solver.count_words(&grid, &large));
        assert_eq!(
            solver.count_words(&grid, &large),
            solver.count_words(&grid, &large)
        );
    }
}

#[test]
fn test_two_by_two_board() {
    let grid = Grid::from_rows(["AB", "CD"]).unwrap();
    let words = WordList::from_words(["abcd"]);

    // Every pair of cells touches on a 2x2 board, so A-B-C-D is a path.
    assert_eq!(Solver::new().count_words(&grid, &words), 1);

    let tiles = [Position::new(0, 0), Position::new(0, 1)];
    assert!(check_path(&grid, &tiles, "AB"));
    let tiles = [Position::new(0, 0), Position::new(1, 1)];
    assert!(check_path(&grid, &tiles, "AD"));
    let tiles = [Position::new(0, 0), Position::new(0, 0)];
    assert!(!check_path(&grid, &tiles, "AA"));
}

#[test]
fn test_generated_boards_are_uppercase_squares() {
    let mut generator = Generator::with_seed(99);
    let grid = generator.generate(3).unwrap();
    assert_eq!((grid.rows(), grid.cols()), (3, 3));
    assert!(grid
        .to_rows()
        .iter()
        .all(|row| row.chars().all(|c| c.is_ascii_uppercase())));
    assert!(generator.generate(0).is_none());
}
