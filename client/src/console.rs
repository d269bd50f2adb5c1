use std::io::{BufRead, ErrorKind, Write};

use noughts_common::games::tictactoe::{
    BOT_MARK, Board, Cell, GameOutcome, GameOverSummary, Mark, MoveError, TicTacToeGameState,
};
use noughts_common::games::{GameBroadcaster, HumanPlayer};
use noughts_common::log_warn;

/// Line-based terminal front end. Write failures are ignored, the game keeps going.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, text: &str) {
        let _ = writeln!(self.output, "{}", text);
    }

    /// `None` on end of input or a failing input stream. Bytes that are not UTF-8 are
    /// replaced, so such a line comes back as text the caller will reject.
    pub fn prompt(&mut self, label: &str) -> Option<String> {
        let _ = write!(self.output, "{}", label);
        let _ = self.output.flush();

        let mut line = Vec::new();
        loop {
            match self.input.read_until(b'\n', &mut line) {
                Ok(0) => return None,
                Ok(_) => break,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    log_warn!("Input stream failed: {}", e);
                    return None;
                }
            }
        }
        let line = String::from_utf8_lossy(&line);
        Some(line.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn draw_board(&mut self, board: &Board) {
        let mut text = String::from("\n");
        for row in board.rows() {
            text.push_str("  ");
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => "-",
                    Cell::X => "X",
                    Cell::O => "O",
                };
                text.push_str(&format!(" {} ", symbol));
            }
            text.push('\n');
        }
        self.say(&text);
    }

    pub fn welcome(&mut self) {
        self.say("\nWelcome to the noughts and crosses game!!!");
        self.say("Your game board will look like this");
        let mut layout = String::from("\n");
        for row in 0..3 {
            layout.push_str("  ");
            for col in 0..3 {
                layout.push_str(&format!(" {} ", row * 3 + col + 1));
            }
            layout.push('\n');
        }
        self.say(&layout);
        self.say("Give the cell values as in the above cells.");
    }
}

impl<R: BufRead, W: Write> HumanPlayer for Console<R, W> {
    fn read_move(&mut self, _state: &TicTacToeGameState) -> Option<String> {
        self.prompt("Your move:")
    }

    fn reject_move(&mut self, error: &MoveError) {
        let message = match error {
            MoveError::NotANumber(_) => "Sorry, I don't understand.",
            MoveError::OutOfRange(_) => "Cell Invalid. enter between 1 and 9.",
            MoveError::CellOccupied(_) => "The cell is occupied.",
        };
        self.say(message);
    }
}

impl<R: BufRead, W: Write> GameBroadcaster for Console<R, W> {
    fn match_started(&mut self, state: &TicTacToeGameState) {
        self.draw_board(&state.board);
    }

    fn mark_placed(&mut self, state: &TicTacToeGameState, mark: Mark) {
        if mark == BOT_MARK {
            self.draw_board(&state.board);
        }
    }

    /// The board is only drawn after bot moves, so nothing is redrawn here.
    fn game_over(&mut self, summary: &GameOverSummary) {
        let message = match summary.outcome {
            GameOutcome::HumanWin => "You won !",
            GameOutcome::HumanLoss => "You lose !",
            GameOutcome::Draw => "Game Tie !",
        };
        self.say(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_prompt_strips_line_endings_and_detects_eof() {
        let mut console = console("7\r\n");
        assert_eq!(console.prompt("> ").as_deref(), Some("7"));
        assert_eq!(console.prompt("> "), None);
    }

    #[test]
    fn test_prompt_replaces_invalid_utf8() {
        let mut console = Console::new(Cursor::new(b"\xff\xfe\n4\n".to_vec()), Vec::new());
        let first = console.prompt("> ").unwrap();

        assert!(first.starts_with('\u{FFFD}'));
        assert_eq!(console.prompt("> ").as_deref(), Some("4"));
        assert_eq!(console.prompt("> "), None);
    }

    #[test]
    fn test_game_over_prints_result_without_redrawing() {
        let mut console = console("");
        console.game_over(&GameOverSummary {
            outcome: GameOutcome::HumanWin,
            winning_line: None,
            board: "XXX/OO_/___".parse().unwrap(),
        });

        let output = output_of(console);
        assert_eq!(output, "You won !\n");
    }

    #[test]
    fn test_draw_board_uses_dash_for_empty() {
        let mut console = console("");
        let board: Board = "X__/_O_/___".parse().unwrap();
        console.draw_board(&board);

        let output = output_of(console);
        assert!(output.contains(" X  -  - "));
        assert!(output.contains(" -  O  - "));
    }

    #[test]
    fn test_rejections_use_friendly_messages() {
        let mut console = console("");
        console.reject_move(&MoveError::NotANumber("abc".to_string()));
        console.reject_move(&MoveError::OutOfRange(0));

        let output = output_of(console);
        assert!(output.contains("Sorry, I don't understand."));
        assert!(output.contains("enter between 1 and 9"));
    }
}
