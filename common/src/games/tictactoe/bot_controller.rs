use crate::games::SessionRng;
use crate::log_debug;
use super::board::Board;
use super::types::{BOT_MARK, HUMAN_MARK, Mark, Position};
use super::win_detector::has_win;

/// Which rule produced the bot's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotDecision {
    Win(Position),
    Block(Position),
    Random(Position),
}

impl BotDecision {
    pub fn position(&self) -> Position {
        match *self {
            BotDecision::Win(pos) | BotDecision::Block(pos) | BotDecision::Random(pos) => pos,
        }
    }
}

/// One-ply opponent: take a winning cell, else block the human's winning cell,
/// else play a random empty cell. It does not look further ahead, so a fork beats it.
pub struct HeuristicBot {
    rng: SessionRng,
}

impl HeuristicBot {
    pub fn new(rng: SessionRng) -> Self {
        Self { rng }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn choose_move(&mut self, board: &Board) -> Option<Position> {
        self.decide(board).map(|decision| decision.position())
    }

    pub fn decide(&mut self, board: &Board) -> Option<BotDecision> {
        let available_moves = board.empty_cells();
        if available_moves.is_empty() {
            return None;
        }

        let decision = if let Some(pos) = find_completing_move(board, &available_moves, BOT_MARK) {
            BotDecision::Win(pos)
        } else if let Some(pos) = find_completing_move(board, &available_moves, HUMAN_MARK) {
            BotDecision::Block(pos)
        } else {
            let &pos = self.rng.choose(&available_moves)?;
            BotDecision::Random(pos)
        };

        log_debug!("Bot picked {:?} on board {}", decision, board);
        Some(decision)
    }
}

/// First cell in scan order that completes a line for `mark`, tested on a throwaway copy.
fn find_completing_move(board: &Board, moves: &[Position], mark: Mark) -> Option<Position> {
    moves
        .iter()
        .copied()
        .find(|&pos| has_win(&board.with_mark(pos, mark), mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bot(seed: u64) -> HeuristicBot {
        HeuristicBot::new(SessionRng::new(seed))
    }

    #[test]
    fn test_takes_winning_cell() {
        let board: Board = "X_X/OO_/X__".parse().unwrap();
        for seed in 0..20 {
            assert_eq!(bot(seed).decide(&board), Some(BotDecision::Win(Position::new(1, 2))));
        }
    }

    #[test]
    fn test_prefers_win_over_block() {
        let board: Board = "XX_/OO_/X__".parse().unwrap();
        assert_eq!(bot(3).decide(&board), Some(BotDecision::Win(Position::new(1, 2))));
    }

    #[test]
    fn test_blocks_human_threat() {
        let board: Board = "XX_/O__/___".parse().unwrap();
        for seed in 0..20 {
            assert_eq!(bot(seed).decide(&board), Some(BotDecision::Block(Position::new(0, 2))));
        }
    }

    #[test]
    fn test_first_winning_cell_in_scan_order() {
        let board: Board = "OO_/___/OXX".parse().unwrap();
        assert_eq!(bot(0).choose_move(&board), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_random_fallback_picks_empty_cell() {
        let board: Board = "X__/___/___".parse().unwrap();
        let decision = bot(11).decide(&board).unwrap();

        assert!(matches!(decision, BotDecision::Random(_)));
        assert!(board.is_empty_at(decision.position()));
    }

    #[test]
    fn test_random_fallback_is_reproducible_from_seed() {
        let board = Board::new();
        let first: Vec<_> = {
            let mut b = bot(42);
            (0..10).map(|_| b.choose_move(&board)).collect()
        };
        let second: Vec<_> = {
            let mut b = bot(42);
            (0..10).map(|_| b.choose_move(&board)).collect()
        };
        assert_eq!(first, second);
    }

    #[test]
    fn test_lookahead_does_not_touch_board() {
        let board: Board = "XX_/O__/___".parse().unwrap();
        let before = board;
        bot(5).decide(&board);
        assert_eq!(board, before);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(bot(0).decide(&board), None);
    }
}
