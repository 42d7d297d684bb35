//! Interactive match setup: who plays, in which order, and on what board.

use std::io::Write;

use crate::config::AppConfig;
use crate::error::InputError;
use crate::game::{Symbol, MAX_DIMENSION};
use crate::player::{Difficulty, HeuristicPlayer, HumanPlayer, Player, RandomPlayer};
use crate::prompt::{LineSource, Prompter};

/// Answers supplied up front plus defaults for the prompts.
#[derive(Debug, Clone)]
pub struct SetupOptions {
    pub default_columns: usize,
    pub default_rows: usize,
    /// Board size fixed on the command line; skips the size prompts
    pub columns: Option<usize>,
    pub rows: Option<usize>,
    pub random_name: String,
    pub heuristic_name: String,
}

impl SetupOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        SetupOptions {
            default_columns: config.board.columns,
            default_rows: config.board.rows,
            columns: None,
            rows: None,
            random_name: config.players.random_name.clone(),
            heuristic_name: config.players.heuristic_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Human,
    Machine(Difficulty),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSpec {
    pub name: String,
    pub symbol: Symbol,
    pub controller: Controller,
}

/// Everything needed to start a match. `players[0]` moves first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSetup {
    pub players: [PlayerSpec; 2],
    pub columns: usize,
    pub rows: usize,
}

fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.to_ascii_uppercase().as_str() {
        "Y" => Some(true),
        "N" => Some(false),
        _ => None,
    }
}

fn parse_name(answer: &str) -> Option<String> {
    (!answer.is_empty()).then(|| answer.to_string())
}

fn parse_dimension(answer: &str, default: usize) -> Option<usize> {
    if answer.is_empty() {
        return Some(default);
    }
    let value: usize = answer.parse().ok()?;
    (1..=MAX_DIMENSION).contains(&value).then_some(value)
}

/// Walk through the setup questions.
pub fn run_setup<I: LineSource, W: Write>(
    prompter: &mut Prompter<I, W>,
    options: &SetupOptions,
) -> Result<MatchSetup, InputError> {
    let with_friend = prompter.ask_until(
        "Are you playing with a friend (Y/N)? ",
        "\nIt seems you cannot follow simple instructions. Enter either a 'Y' or a 'N'.",
        parse_yes_no,
    )?;

    let players = if with_friend {
        let first = prompter.ask_until(
            "Please enter the name of player 1. ",
            "A name cannot be empty.",
            parse_name,
        )?;
        let second = prompter.ask_until(
            "Please enter the name of player 2. ",
            "A name cannot be empty.",
            parse_name,
        )?;
        [
            PlayerSpec {
                name: first,
                symbol: Symbol::Red,
                controller: Controller::Human,
            },
            PlayerSpec {
                name: second,
                symbol: Symbol::Yellow,
                controller: Controller::Human,
            },
        ]
    } else {
        let human_first = prompter.ask_until(
            "Do you want to move 1st or 2nd (1/2)? ",
            "\nIt seems you cannot follow simple instructions. Enter either a '1' or a '2'.",
            |answer| match answer {
                "1" => Some(true),
                "2" => Some(false),
                _ => None,
            },
        )?;
        let name = prompter.ask_until(
            "Please enter your name. ",
            "A name cannot be empty.",
            parse_name,
        )?;
        let difficulty = prompter.ask_until(
            "Which setting would you like to go with: \
             0 plays at random, 1 plays by the rules (0/1)? ",
            "\nEnter '0' for easy and '1' for hard, not 'whatever you feel like.'",
            Difficulty::from_level,
        )?;

        let human = PlayerSpec {
            name,
            symbol: Symbol::Red,
            controller: Controller::Human,
        };
        let machine = PlayerSpec {
            name: match difficulty {
                Difficulty::Random => options.random_name.clone(),
                Difficulty::Heuristic => options.heuristic_name.clone(),
            },
            symbol: Symbol::Yellow,
            controller: Controller::Machine(difficulty),
        };
        if human_first {
            [human, machine]
        } else {
            [machine, human]
        }
    };

    let size_complaint =
        format!("\nCome on stop messing around. Pick a number between 1 and {MAX_DIMENSION}.");
    let columns = match options.columns {
        Some(columns) => columns,
        None => {
            let default = options.default_columns;
            prompter.ask_until(
                &format!("How many columns do you want (1-{MAX_DIMENSION}, Enter for {default})? "),
                &size_complaint,
                |answer| parse_dimension(answer, default),
            )?
        }
    };
    let rows = match options.rows {
        Some(rows) => rows,
        None => {
            let default = options.default_rows;
            prompter.ask_until(
                &format!("And how many rows do you want (1-{MAX_DIMENSION}, Enter for {default})? "),
                &size_complaint,
                |answer| parse_dimension(answer, default),
            )?
        }
    };

    Ok(MatchSetup {
        players,
        columns,
        rows,
    })
}

/// Instantiate a player. Humans read from stdin; machines are seeded from
/// `seed` when given.
pub fn build_player(spec: &PlayerSpec, seed: Option<u64>) -> Box<dyn Player> {
    let name = spec.name.clone();
    match (spec.controller, seed) {
        (Controller::Human, _) => Box::new(HumanPlayer::stdio(name, spec.symbol)),
        (Controller::Machine(Difficulty::Random), Some(seed)) => {
            Box::new(RandomPlayer::with_seed(name, spec.symbol, seed))
        }
        (Controller::Machine(Difficulty::Random), None) => {
            Box::new(RandomPlayer::new(name, spec.symbol))
        }
        (Controller::Machine(Difficulty::Heuristic), Some(seed)) => {
            Box::new(HeuristicPlayer::with_seed(name, spec.symbol, seed))
        }
        (Controller::Machine(Difficulty::Heuristic), None) => {
            Box::new(HeuristicPlayer::new(name, spec.symbol))
        }
    }
}
