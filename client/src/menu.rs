use std::io::{BufRead, Write};

use noughts_common::games::tictactoe::{SessionError, TicTacToeSession};
use noughts_common::leaderboard::{Leaderboard, LeaderboardStore};
use noughts_common::{Username, log, log_warn};

use crate::console::Console;

const VALID_CHOICES: &str = "1, 2, 3, q";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Play,
    Save,
    Show,
    Quit,
}

impl MenuCommand {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "1" | "play" => Some(MenuCommand::Play),
            "2" | "save" => Some(MenuCommand::Save),
            "3" | "show" => Some(MenuCommand::Show),
            "q" | "quit" => Some(MenuCommand::Quit),
            _ => None,
        }
    }
}

/// Top-level menu. Keeps the running score between matches until it is saved.
pub struct Menu<R, W, S> {
    console: Console<R, W>,
    session: TicTacToeSession,
    store: S,
    total_score: i64,
}

impl<R: BufRead, W: Write, S: LeaderboardStore> Menu<R, W, S> {
    pub fn new(console: Console<R, W>, session: TicTacToeSession, store: S) -> Self {
        Self {
            console,
            session,
            store,
            total_score: 0,
        }
    }

    pub fn total_score(&self) -> i64 {
        self.total_score
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (Console<R, W>, S) {
        (self.console, self.store)
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) {
        loop {
            let Some(command) = self.read_command() else {
                break;
            };
            match command {
                MenuCommand::Play => {
                    if !self.play() {
                        break;
                    }
                }
                MenuCommand::Save => {
                    if !self.save() {
                        break;
                    }
                }
                MenuCommand::Show => self.show(),
                MenuCommand::Quit => break,
            }
        }
        self.console.say("Thank you for playing the \"Noughts and Crosses\" game.");
        self.console.say("Good bye");
    }

    fn read_command(&mut self) -> Option<MenuCommand> {
        self.console.say("Game Controls:");
        self.console.say("1 ====> Play.");
        self.console.say("2 ====> Save the score");
        self.console.say("3 ====> Show leaderboard");
        self.console.say("q ====> Exit");
        loop {
            let raw = self.console.prompt("\nEnter your choice :")?;
            if let Some(command) = MenuCommand::parse(&raw) {
                return Some(command);
            }
            self.console
                .say(&format!("Invalid Choice '{}'\nValid Choices: {}", raw.trim(), VALID_CHOICES));
        }
    }

    /// Returns `false` when input ran out mid-match.
    fn play(&mut self) -> bool {
        self.console.welcome();
        match self.session.run(&mut self.console) {
            Ok(summary) => {
                self.total_score += summary.score();
                self.console
                    .say(&format!("\nYour current score is: {}", self.total_score));
                true
            }
            Err(SessionError::InputClosed) => false,
            Err(e) => {
                log_warn!("Match ended without a result: {}", e);
                true
            }
        }
    }

    /// Returns `false` when input ran out before a name was given.
    fn save(&mut self) -> bool {
        let username = loop {
            let Some(raw) = self.console.prompt("\n\nYour name:") else {
                return false;
            };
            match Username::parse(&raw) {
                Ok(username) => break username,
                Err(e) => self.console.say(&format!("Sorry, {}.", e)),
            }
        };

        match self.store.save(&username, self.total_score) {
            Ok(saved) => {
                if let Some(warning) = &saved.replaced {
                    self.console
                        .say(&format!("{}, its old content was replaced.", warning));
                }
                let total = saved
                    .leaderboard
                    .get(username.as_str())
                    .unwrap_or(self.total_score);
                self.console
                    .say(&format!("Saved. {} now has {} points.", username, total));
            }
            Err(e) => {
                log_warn!("Leaderboard save failed: {:?}", e);
                self.console
                    .say(&format!("Some error while saving the leaderboard: {}", e));
            }
        }
        self.total_score = 0;
        true
    }

    fn show(&mut self) {
        let load = self.store.load();
        if let Some(warning) = &load.warning {
            self.console.say(&warning.to_string());
            self.console.say("Please fix the leaderboard file.");
        }
        self.display_leaderboard(&load.leaderboard);
    }

    fn display_leaderboard(&mut self, leaderboard: &Leaderboard) {
        let rule = "-".repeat(10);
        self.console.say(&format!("\n\nLeaderboard\n{}", rule));
        if leaderboard.is_empty() {
            self.console.say("No scores yet.");
        }
        for (name, score) in leaderboard.ranked() {
            self.console.say(&format!("{}  ===> {}", name, score));
        }
        self.console.say(&format!("\n{}\n", rule));
        log!("Displayed {} leaderboard entries", leaderboard.len());
    }
}
