#[cfg(test)]
pub mod test {
    use anyhow::Result;

    use crate::heuristic::evaluate;
    use crate::position::{Player, Position};
    use crate::search::{self, Searcher};
    use crate::WIDTH;

    #[test]
    pub fn empty_board() -> Result<()> {
        let position = Position::new();

        assert_eq!(position.next_move_player(), Player::X);
        assert_eq!(position.legal_moves(), (0..WIDTH).collect::<Vec<_>>());
        assert_eq!(evaluate(&position, Player::X), 0);
        assert_eq!(evaluate(&position, Player::O), 0);
        Ok(())
    }

    #[test]
    pub fn play_leaves_original_untouched() -> Result<()> {
        let position = Position::new();
        let next = position.play(3)?;

        assert_eq!(next.cell(3, 0), Some(Player::X));
        assert_eq!(next.next_move_player(), Player::O);
        // the original position is unaffected by the transition
        assert_eq!(position.cell(3, 0), None);
        assert_eq!(position.num_moves(), 0);
        assert_eq!(position.next_move_player(), Player::X);
        Ok(())
    }

    #[test]
    pub fn counts_maximal_runs_only() -> Result<()> {
        // X holds a horizontal three on the bottom row, O mirrors it
        // one row up
        let position = Position::from_moves("112233")?;
        assert_eq!(position.num_lines(3, Player::X), 1);
        assert_eq!(position.num_lines(2, Player::X), 0);
        assert_eq!(position.num_lines(4, Player::X), 0);
        assert_eq!(position.num_lines(3, Player::O), 1);
        assert_eq!(position.num_lines(2, Player::O), 0);

        // vertical threes in the outer columns
        let position = Position::from_moves("171717")?;
        assert_eq!(position.num_lines(3, Player::X), 1);
        assert_eq!(position.num_lines(2, Player::X), 0);
        assert_eq!(position.num_lines(3, Player::O), 1);
        Ok(())
    }

    #[test]
    pub fn rejects_illegal_moves() -> Result<()> {
        let position = Position::new();
        assert!(position.play(WIDTH).is_err());
        assert!(Position::from_moves("8").is_err());
        assert!(Position::from_moves("x").is_err());

        // column 1 filled to the top
        let full_column = Position::from_moves("111111")?;
        assert!(full_column.play(0).is_err());
        assert_eq!(full_column.legal_moves(), (1..WIDTH).collect::<Vec<_>>());
        Ok(())
    }

    #[test]
    pub fn finished_game_has_no_moves() -> Result<()> {
        // X stacks column 1 to a vertical four
        let position = Position::from_moves("1212121")?;

        assert_eq!(position.winner(), Some(Player::X));
        assert!(position.legal_moves().is_empty());
        assert!(position.next_states().is_empty());
        assert!(position.play(2).is_err());
        assert!(Position::from_moves("12121212").is_err());
        assert!(search::choose_move(&position).is_err());
        Ok(())
    }

    #[test]
    pub fn heuristic_is_antisymmetric() -> Result<()> {
        for moves in ["", "17273", "152635", "112233", "1212121"].iter() {
            let position = Position::from_moves(moves)?;
            assert_eq!(
                evaluate(&position, Player::X),
                -evaluate(&position, Player::O),
                "after '{}'",
                moves
            );
        }
        Ok(())
    }

    #[test]
    pub fn long_lines_outweigh_short_ones() -> Result<()> {
        // X holds a single three; O holds three separate twos
        let position = Position::from_moves("152635")?;
        assert_eq!(position.num_lines(3, Player::X), 1);
        assert_eq!(position.num_lines(2, Player::X), 0);
        assert_eq!(position.num_lines(2, Player::O), 3);

        // 3^5 against 3 * 2^5
        assert_eq!(evaluate(&position, Player::X), 147);
        assert!(evaluate(&position, Player::X) > 0);
        assert!(evaluate(&position, Player::O) < 0);
        Ok(())
    }

    #[test]
    pub fn depth_zero_matches_heuristic() -> Result<()> {
        for moves in ["", "17273", "152635", "1212121"].iter() {
            let position = Position::from_moves(moves)?;
            for &player in [Player::X, Player::O].iter() {
                assert_eq!(
                    search::minimax(&position, 0, player),
                    evaluate(&position, player)
                );
            }
        }
        Ok(())
    }

    #[test]
    pub fn alpha_beta_matches_minimax() -> Result<()> {
        for moves in ["", "17273", "152635", "112233", "121212", "1212121"].iter() {
            let position = Position::from_moves(moves)?;
            for depth in 0..=4 {
                for &player in [Player::X, Player::O].iter() {
                    assert_eq!(
                        search::minimax(&position, depth, player),
                        search::minimax_alpha_beta(&position, depth, player),
                        "depth {} for {} after '{}'",
                        depth,
                        player,
                        moves
                    );
                }
            }
        }
        Ok(())
    }

    #[test]
    pub fn alpha_beta_matches_minimax_deep() -> Result<()> {
        let position = Position::from_moves("17273")?;
        for depth in 5..=6 {
            for &player in [Player::X, Player::O].iter() {
                assert_eq!(
                    search::minimax(&position, depth, player),
                    search::minimax_alpha_beta(&position, depth, player),
                    "depth {} for {}",
                    depth,
                    player
                );
            }
        }
        Ok(())
    }

    #[test]
    pub fn pruning_reduces_work() -> Result<()> {
        for moves in ["17273", "152635", "112233"].iter() {
            let position = Position::from_moves(moves)?;
            let mut plain = Searcher::new(3);
            let mut pruned = Searcher::new(3);
            plain.minimax(&position, 3, Player::X);
            pruned.minimax_alpha_beta(&position, 3, Player::X);
            assert!(
                pruned.eval_count <= plain.eval_count,
                "pruning must never do extra work (after '{}')",
                moves
            );
        }

        // on a branching position the cutoffs skip real work
        let position = Position::from_moves("152635")?;
        let mut plain = Searcher::new(4);
        let mut pruned = Searcher::new(4);
        plain.minimax(&position, 4, Player::X);
        pruned.minimax_alpha_beta(&position, 4, Player::X);
        assert!(
            pruned.eval_count < plain.eval_count,
            "alpha-beta evaluated {} leaves, plain minimax {}",
            pruned.eval_count,
            plain.eval_count
        );
        assert!(pruned.node_count < plain.node_count);
        Ok(())
    }

    #[test]
    pub fn takes_winning_move() -> Result<()> {
        // X holds 1,2,3 on the bottom row, column 4 completes the four
        let position = Position::from_moves("112233")?;
        assert_eq!(search::choose_move(&position)?, 3);

        // vertical three in column 1
        let position = Position::from_moves("121212")?;
        assert_eq!(search::choose_move(&position)?, 0);
        Ok(())
    }

    #[test]
    pub fn blocks_open_three() -> Result<()> {
        // X holds 1,2,3 on the bottom row with the open end at column 4;
        // O to move
        let position = Position::from_moves("17273")?;
        assert_eq!(position.next_move_player(), Player::O);

        // with X as the maximizer, letting the threat stand scores higher
        // for X than blocking it
        let blocked = search::minimax(&position.play(3)?, 2, Player::X);
        let ignored = search::minimax(&position.play(0)?, 2, Player::X);
        assert!(
            blocked < ignored,
            "blocking ({}) should score below ignoring ({})",
            blocked,
            ignored
        );

        // and the selector, playing O, blocks the open end
        assert_eq!(search::choose_move(&position)?, 3);
        Ok(())
    }

    #[test]
    pub fn choose_move_is_deterministic() -> Result<()> {
        for moves in ["", "17273", "152635"].iter() {
            let position = Position::from_moves(moves)?;
            assert_eq!(
                search::choose_move(&position)?,
                search::choose_move(&position)?,
                "after '{}'",
                moves
            );
        }
        Ok(())
    }

    #[test]
    pub fn parallel_selector_agrees_with_serial() -> Result<()> {
        for moves in ["", "17273", "152635", "121212"].iter() {
            let position = Position::from_moves(moves)?;
            let mut serial = Searcher::new(4);
            assert_eq!(
                search::choose_move_parallel(&position, 4)?,
                serial.choose_move(&position)?,
                "after '{}'",
                moves
            );
        }

        let finished = Position::from_moves("1212121")?;
        assert!(search::choose_move_parallel(&finished, 4).is_err());
        Ok(())
    }
}
