//! Terminal front end: play RPSLS against a computer opponent.

use std::io::{self, IsTerminal};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, ValueEnum};
use dialoguer::Input;

use rpsls::core::{DEFAULT_SEED, DEFAULT_VICTORY_THRESHOLD};
use rpsls::{
    GameOutcome, GameResult, GameRng, InputSource, LineInput, MatchConfig, MatchEngine,
    MatchObserver, MatchSummary, Player, Side, RULES,
};

#[derive(Parser, Debug)]
#[command(name = "rpsls", about = "Play Rock-Paper-Scissors-Lizard-Spock against the computer")]
struct Args {
    /// RNG seed for the computer (defaults to the system clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Points needed to win a match
    #[arg(long, default_value_t = DEFAULT_VICTORY_THRESHOLD, value_parser = clap::value_parser!(u32).range(1..))]
    threshold: u32,

    /// Give up after this many invalid answers to one prompt
    #[arg(long)]
    max_retries: Option<u32>,

    /// Who to play against
    #[arg(long, value_enum, default_value_t = Opponent::Roster)]
    opponent: Opponent,

    /// Your name (asked interactively when omitted)
    #[arg(long)]
    name: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Opponent {
    R2d2,
    C3po,
    Random,
    /// Pick R2D2 or C3PO at random
    Roster,
}

/// Interactive prompts on a real terminal.
struct TerminalInput {
    retry_limit: Option<u32>,
}

impl InputSource for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        closed_on_eof(
            Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text(),
        )
    }

    fn reject(&mut self, message: &str) -> io::Result<()> {
        println!("{message}");
        Ok(())
    }

    fn retry_limit(&self) -> Option<u32> {
        self.retry_limit
    }
}

/// Ctrl-D on the terminal closes the source instead of failing it.
fn closed_on_eof(answer: dialoguer::Result<String>) -> io::Result<Option<String>> {
    match answer {
        Ok(line) => Ok(Some(line)),
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(dialoguer::Error::IO(e)) => Err(e),
    }
}

/// Prints engine output the way the game talks to the player.
struct ConsoleObserver {
    player_name: String,
    opponent_name: String,
}

impl MatchObserver for ConsoleObserver {
    fn game_resolved(&mut self, outcome: &GameOutcome) {
        println!();
        println!(
            "{} chose {} and {} chose {}.",
            self.player_name, outcome.player_move, self.opponent_name, outcome.opponent_move
        );
        match outcome.result {
            GameResult::Winner(side) => {
                let (winning, losing, name) = match side {
                    Side::Player => (outcome.player_move, outcome.opponent_move, &self.player_name),
                    Side::Opponent => {
                        (outcome.opponent_move, outcome.player_move, &self.opponent_name)
                    }
                };
                if let Some(verb) = winning.verb_against(losing) {
                    println!("{} {} {}.", capitalize(winning.name()), verb, losing);
                }
                println!("{name} wins!");
            }
            GameResult::Draw => println!("It's a tie!"),
        }
        println!(
            "{} has {} points and {} has {} points.",
            self.player_name, outcome.player_points, self.opponent_name, outcome.opponent_points
        );
    }

    fn match_decided(&mut self, summary: &MatchSummary) {
        println!();
        println!(
            "{} is the first to {} points and wins the match!",
            summary.winner_name, summary.threshold
        );
        for line in summary.replay() {
            println!("{line}");
        }
        println!();
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(DEFAULT_SEED)
}

fn opponent(choice: Opponent, rng: &GameRng) -> Player {
    let named = match choice {
        Opponent::R2d2 => Player::personality("R2D2", rng),
        Opponent::C3po => Player::personality("C3PO", rng),
        Opponent::Random => Some(Player::computer(rng)),
        Opponent::Roster => Some(Player::from_roster(rng)),
    };
    named.unwrap_or_else(|| Player::computer(rng))
}

fn run(args: Args) -> rpsls::Result<()> {
    let mut config = MatchConfig::new()
        .with_victory_threshold(args.threshold)
        .with_seed(args.seed.unwrap_or_else(clock_seed));
    if let Some(retries) = args.max_retries {
        config = config.with_max_input_retries(retries);
    }
    log::info!("starting with {config:?}");

    let mut input: Box<dyn InputSource> = if io::stdin().is_terminal() {
        Box::new(TerminalInput {
            retry_limit: config.max_input_retries,
        })
    } else {
        let line = LineInput::new(io::stdin().lock(), io::stdout());
        Box::new(match config.max_input_retries {
            Some(retries) => line.with_retry_limit(retries),
            None => line,
        })
    };

    let name = match args.name.filter(|n| !n.trim().is_empty()) {
        Some(name) => name.trim().to_string(),
        None => input.read_name()?,
    };

    let rng = GameRng::new(config.seed);
    let human = Player::human(name);
    let computer = opponent(args.opponent, &rng);

    println!("Welcome to Rock-Paper-Scissors-Lizard-Spock, {}!", human.name());
    println!();
    println!("{RULES}");
    println!();
    println!("Your opponent will be {}.", computer.name());
    println!(
        "Each game won is worth 1 point. The first to {} points wins the match!",
        config.victory_threshold
    );

    let mut observer = ConsoleObserver {
        player_name: human.name().to_string(),
        opponent_name: computer.name().to_string(),
    };
    let mut engine = MatchEngine::new(human, computer, config);

    let summaries = engine.play_session(input.as_mut(), &mut observer)?;
    log::info!("session over after {} matches", summaries.len());

    println!("Thank you for playing. Goodbye!");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
