//! Property checks for the engine over random legal games.
//!
//! Win detection is compared against a straightforward (row, col) scan that
//! cannot wrap across rows, so any flat-index slip shows up as a mismatch.

use std::cell::RefCell;
use std::rc::Rc;

use link_four::error::MoveError;
use link_four::game::{Cell, GameEngine, Side};
use proptest::prelude::*;

/// Longest run of `side` through `index`, scanned in (row, col) space
fn reference_run(engine: &GameEngine, index: usize, side: Side) -> usize {
    let (w, h) = (engine.width() as isize, engine.height() as isize);
    let (row, col) = (index as isize / w, index as isize % w);
    let target = side.to_cell();

    [(0, 1), (1, 0), (1, 1), (1, -1)]
        .into_iter()
        .map(|(dr, dc)| {
            let mut count = 1;
            for sign in [1, -1] {
                let (mut r, mut c) = (row + dr * sign, col + dc * sign);
                while (0..h).contains(&r)
                    && (0..w).contains(&c)
                    && engine.cell((r * w + c) as usize) == target
                {
                    count += 1;
                    r += dr * sign;
                    c += dc * sign;
                }
            }
            count
        })
        .max()
        .unwrap_or(1)
}

/// Any orthogonal neighbor occupied, scanned in (row, col) space
fn reference_adjacent(engine: &GameEngine, index: usize) -> bool {
    let (w, h) = (engine.width() as isize, engine.height() as isize);
    let (row, col) = (index as isize / w, index as isize % w);
    [(0, 1), (0, -1), (1, 0), (-1, 0)].into_iter().any(|(dr, dc)| {
        let (r, c) = (row + dr, col + dc);
        (0..h).contains(&r) && (0..w).contains(&c) && !engine.cell((r * w + c) as usize).is_empty()
    })
}

/// Play up to `picks.len()` moves, each chosen among the legal moves
fn random_game(engine: &mut GameEngine, first: usize, picks: &[usize]) {
    engine.place_move(first).unwrap();
    for &pick in picks {
        let legal = engine.legal_moves();
        if legal.is_empty() {
            break;
        }
        engine.place_move(legal[pick % legal.len()]).unwrap();
    }
}

proptest! {
    #[test]
    fn prop_first_move_is_legal_anywhere(first in 0usize..169) {
        let mut engine = GameEngine::standard();
        prop_assert!(engine.place_move(first).is_ok());
        prop_assert_eq!(engine.cell(first), Cell::White);
    }

    #[test]
    fn prop_adjacency_rule(first in 0usize..169, picks in prop::collection::vec(any::<usize>(), 0..40)) {
        let mut engine = GameEngine::standard();
        random_game(&mut engine, first, &picks);
        if engine.winner().is_some() {
            for i in 0..engine.len() {
                prop_assert_eq!(engine.check_move(i), Err(MoveError::GameOver));
            }
            return Ok(());
        }

        for i in 0..engine.len() {
            let expected = engine.cell(i).is_empty() && reference_adjacent(&engine, i);
            prop_assert_eq!(engine.check_move(i).is_ok(), expected, "index {}", i);
            if engine.cell(i).is_empty() && !expected {
                prop_assert_eq!(engine.check_move(i), Err(MoveError::NotAdjacent { index: i }));
            }
        }
    }

    #[test]
    fn prop_win_matches_reference(first in 0usize..169, picks in prop::collection::vec(any::<usize>(), 0..120)) {
        let mut engine = GameEngine::standard();
        let game_overs = Rc::new(RefCell::new(Vec::new()));
        let g = Rc::clone(&game_overs);
        engine.on_game_over(move |side| g.borrow_mut().push(side));

        let mut index = first;
        let mut expected_turn = Side::White;
        for step in 0..=picks.len() {
            let placement = engine.place_move(index).unwrap();
            prop_assert_eq!(placement.side, expected_turn);
            expected_turn = expected_turn.other();
            prop_assert_eq!(engine.turn(), expected_turn);

            let won = reference_run(&engine, index, placement.side) >= 4;
            prop_assert_eq!(placement.winner.is_some(), won);
            if won {
                prop_assert_eq!(placement.winner, Some(placement.side));
                break;
            }

            let legal = engine.legal_moves();
            match picks.get(step) {
                Some(&pick) if !legal.is_empty() => index = legal[pick % legal.len()],
                _ => break,
            }
        }

        let fired = game_overs.borrow();
        match engine.winner() {
            Some(side) => prop_assert_eq!(&*fired, &vec![side]),
            None => prop_assert!(fired.is_empty()),
        }
    }

    #[test]
    fn prop_post_win_moves_are_no_ops(probe in 0usize..169) {
        let mut engine = GameEngine::standard();
        let changes = Rc::new(RefCell::new(0));
        for i in 0..engine.len() {
            let c = Rc::clone(&changes);
            engine.on_cell_change(i, move |_| *c.borrow_mut() += 1);
        }
        for m in [20, 33, 21, 34, 22, 35, 23] {
            engine.place_move(m).unwrap();
        }
        prop_assert_eq!(engine.winner(), Some(Side::White));

        let before = engine.board().clone();
        let turn = engine.turn();
        prop_assert_eq!(engine.place_move(probe), Err(MoveError::GameOver));
        prop_assert_eq!(engine.board(), &before);
        prop_assert_eq!(engine.turn(), turn);
        prop_assert_eq!(*changes.borrow(), 7);
    }

    #[test]
    fn prop_restart_is_idempotent(first in 0usize..169, picks in prop::collection::vec(any::<usize>(), 0..60)) {
        let mut once = GameEngine::standard();
        let mut twice = GameEngine::standard();
        random_game(&mut once, first, &picks);
        random_game(&mut twice, first, &picks);

        once.restart();
        twice.restart();
        twice.restart();

        prop_assert!(once.board().is_clear());
        prop_assert_eq!(once.board(), twice.board());
        prop_assert_eq!(once.turn(), Side::White);
        prop_assert_eq!(twice.turn(), Side::White);
        prop_assert_eq!(once.winner(), None);
        prop_assert_eq!(twice.winner(), None);
        prop_assert!(once.is_initial_move() && twice.is_initial_move());
        prop_assert_eq!(once.legal_moves().len(), 169);
    }
}
