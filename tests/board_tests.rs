//! Board tests - packed storage, lines and the merge pass

use bitboard_2048::core::{process_line, Board};
use bitboard_2048::types::{Direction, BOARD_SIDE, CELL_COUNT};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.raw(), 0);
    for i in 0..CELL_COUNT {
        assert_eq!(board.get_cell(i), 0, "cell {} should be empty", i);
    }
    assert_eq!(board.empty_count(), CELL_COUNT);
    assert!(!board.is_game_over());
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    board.set_cell(0, 1);
    assert_eq!(board.get_cell(0), 1);

    board.set_cell(15, 2);
    assert_eq!(board.get_cell(15), 2);

    board.set_cell(0, 0);
    assert_eq!(board.get_cell(0), 0);
    assert_eq!(board.get_cell(15), 2);
}

#[test]
fn test_board_set_truncates_to_four_bits() {
    let mut board = Board::new();
    board.set_cell(4, 17);
    assert_eq!(board.get_cell(4), 1);
    assert_eq!(board.raw(), 1u64 << 16);
}

#[test]
#[should_panic]
fn test_board_set_out_of_range_panics() {
    let mut board = Board::new();
    board.set_cell(CELL_COUNT, 1);
}

#[test]
fn test_board_set_get_row() {
    let mut board = Board::new();
    board.set_row(0, [1, 2, 3, 4]);
    assert_eq!(board.get_row(0), [1, 2, 3, 4]);
    assert_eq!(board.get_column(0), [1, 0, 0, 0]);
}

#[test]
fn test_board_set_get_column() {
    let mut board = Board::new();
    board.set_column(0, [1, 2, 3, 4]);
    assert_eq!(board.get_column(0), [1, 2, 3, 4]);
    assert_eq!(board.get_row(0), [1, 0, 0, 0]);
    assert_eq!(board.get_cell(12), 4);
}

#[test]
fn test_board_raw_roundtrip() {
    let board = Board::from_exponents([
        [1, 2, 3, 4],
        [0, 0, 0, 0],
        [11, 0, 0, 5],
        [0, 0, 15, 0],
    ]);
    let restored = Board::from_raw(board.raw());
    assert_eq!(restored, board);
    assert_eq!(u64::from(board), board.raw());
    assert_eq!(Board::from(board.raw()), board);
}

#[test]
fn test_process_line_four_equal_merge_pairwise() {
    for e in 1..15u8 {
        assert_eq!(process_line([e, e, e, e]), [e + 1, e + 1, 0, 0]);
    }
}

#[test]
fn test_process_line_cap() {
    assert_eq!(process_line([15, 15, 0, 0]), [15, 0, 0, 0]);
}

#[test]
fn test_process_line_compaction_invariant() {
    // Every line over exponents 0..=3
    for code in 0..256u32 {
        let line: [u8; BOARD_SIDE] = std::array::from_fn(|i| ((code >> (2 * i)) & 0b11) as u8);
        let out = process_line(line);

        // Non-zero entries form a prefix
        let filled = out.iter().take_while(|&&e| e != 0).count();
        assert!(out[filled..].iter().all(|&e| e == 0), "{:?} -> {:?}", line, out);

        // Each merge removes one tile and bumps one exponent: total 2^e is conserved
        let weight = |l: &[u8; BOARD_SIDE]| -> u32 {
            l.iter().filter(|&&e| e != 0).map(|&e| 1u32 << e).sum()
        };
        assert_eq!(weight(&line), weight(&out), "{:?} -> {:?}", line, out);

        // Never more tiles than before, at most two merges per line
        let before = line.iter().filter(|&&e| e != 0).count();
        assert!(filled <= before);
        assert!(before - filled <= 2);

        // Processing is stable once nothing can merge
        if out.windows(2).all(|w| w[0] != w[1] || w[0] == 0) {
            assert_eq!(process_line(out), out);
        }
    }
}

#[test]
fn test_board_can_move_matches_shift() {
    let board = Board::from_exponents([
        [1, 2, 1, 2],
        [2, 1, 2, 1],
        [1, 2, 1, 2],
        [2, 1, 2, 0],
    ]);
    assert!(!board.can_move(Direction::Left));
    assert!(!board.can_move(Direction::Up));
    assert!(board.can_move(Direction::Right));
    assert!(board.can_move(Direction::Down));

    let (next, moved) = board.shifted(Direction::Right);
    assert!(moved);
    assert_eq!(next.get_row(3), [0, 2, 1, 2]);
    // shifted does not touch the original
    assert_eq!(board.get_row(3), [2, 1, 2, 0]);
}

#[test]
fn test_board_max_exponent() {
    assert_eq!(Board::new().max_exponent(), 0);
    let mut board = Board::new();
    board.set_cell(7, 9);
    board.set_cell(2, 3);
    assert_eq!(board.max_exponent(), 9);
}
