//! Wordle Reducer CLI
//!
//! Interactive command-line interface for narrowing a dictionary by Wordle
//! feedback and suggesting the next guess.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;
use wordle_reducer::{
    load_dictionary, rank_with_progress, score_guess, ScoredGuess, Session, Word,
};

const BANNER_TEXT: &str = "\
Wordle Reducer
==============

Enter each guess followed by its feedback, e.g. `nobly _G_G_`
  _ = miss (gray), G = exact (green), Y = present (yellow)

Commands:
  top [N]      show the N best guesses (default: --top-k)
  remaining    list the remaining candidates
  history      show the rounds played so far
  reset        start over with the full dictionary
  help         show this text
  quit         exit";

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Newline-delimited list of five-letter words
    #[clap(short, long, default_value = "five_letter_words.txt")]
    dictionary: PathBuf,

    /// How many suggestions to show
    #[clap(short = 'k', long, default_value_t = 5)]
    top_k: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u64,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the best opening guesses for the whole dictionary
    Suggest,
    /// Print the expected number of remaining candidates for each word
    Score {
        #[clap(required = true)]
        words: Vec<String>,
    },
    /// Play automatically against a known answer
    Solve {
        answer: String,
        #[clap(long, default_value_t = 6)]
        max_turns: usize,
    },
}

fn init_logger(verbose: u64) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn rank_with_bar(candidates: &[Word], top_k: usize) -> Result<Vec<ScoredGuess>> {
    let bar = ProgressBar::new(candidates.len() as u64);
    bar.set_style(ProgressStyle::default_bar().template("Ranking {bar:40} {pos}/{len} [{elapsed}]")?);
    let ranked = rank_with_progress(candidates, top_k, || bar.inc(1));
    bar.finish_and_clear();
    Ok(ranked?)
}

fn print_suggestions(ranked: &[ScoredGuess]) {
    println!();
    println!("Top {} guesses:", ranked.len());
    println!("{:>4} {:>8} {:>12}", "#", "Word", "Exp. Remain");
    println!("{}", "-".repeat(26));
    for (i, guess) in ranked.iter().enumerate() {
        println!(
            "{:>4} {:>8} {:>12.3}",
            i + 1,
            guess.word.as_str().to_uppercase(),
            guess.score
        );
    }
    println!();
}

fn print_words(words: &[Word]) {
    for (i, word) in words.iter().enumerate() {
        if i > 0 && i % 10 == 0 {
            println!();
        }
        print!("{:>8}", word.as_str().to_uppercase());
    }
    println!();
}

/// One line of interactive input.
#[derive(Debug, PartialEq)]
enum Input<'a> {
    Help,
    Quit,
    Top(Option<usize>),
    Remaining,
    History,
    Reset,
    Round { guess: &'a str, feedback: &'a str },
    Unknown(&'a str),
}

/// Named commands win over guesses; anything else with two tokens is a round.
fn parse_input(line: &str) -> Option<Input<'_>> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let first = *parts.first()?;

    let input = match first.to_lowercase().as_str() {
        "help" | "h" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        "top" | "t" => Input::Top(parts.get(1).and_then(|s| s.parse().ok())),
        "remaining" | "r" => Input::Remaining,
        "history" => Input::History,
        "reset" => Input::Reset,
        _ if parts.len() == 2 => Input::Round {
            guess: first,
            feedback: parts[1],
        },
        _ => Input::Unknown(first),
    };
    Some(input)
}

fn run_interactive(words: Vec<Word>, top_k: usize) -> Result<()> {
    println!("{}", BANNER_TEXT);
    println!();
    println!("Loaded {} words.", words.len());
    println!();

    let mut session = Session::new(words);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = match parse_input(&line) {
            Some(input) => input,
            None => continue,
        };

        match input {
            Input::Help => println!("{}", BANNER_TEXT),
            Input::Quit => break,
            Input::Top(n) => {
                if session.is_contradiction() {
                    println!("No possible words remaining. Use 'reset' to start over.");
                } else {
                    print_suggestions(&rank_with_bar(session.candidates(), n.unwrap_or(top_k))?);
                }
            }
            Input::Remaining => {
                println!("Remaining possibilities: {}", session.remaining());
                print_words(session.candidates());
            }
            Input::History => {
                for (i, round) in session.history().iter().enumerate() {
                    println!(
                        "Guess {}: {} {} ({} left)",
                        i + 1,
                        round.guess.as_str().to_uppercase(),
                        round.feedback.to_emoji_string(),
                        round.remaining
                    );
                }
            }
            Input::Reset => {
                session.reset();
                println!("Reset to initial state. {} words available.", session.remaining());
            }
            Input::Round { guess, feedback } => {
                let before = session.remaining();
                let after = match session.apply_str(guess, feedback) {
                    Ok(after) => after,
                    Err(err) => {
                        println!("Invalid input: {}", err);
                        continue;
                    }
                };
                println!("Eliminated {} words ({} → {})", before - after, before, after);

                if session.is_solved() {
                    println!();
                    println!("Answer: {}", session.candidates()[0].as_str().to_uppercase());
                    break;
                }
                if session.is_contradiction() {
                    println!();
                    println!("⚠️  No words match this feedback!");
                    println!("This might indicate an error. Use 'reset' to start over.");
                    continue;
                }
                if after <= 10 {
                    print_words(session.candidates());
                }
                print_suggestions(&rank_with_bar(session.candidates(), top_k)?);
            }
            Input::Unknown(command) => {
                println!("Unknown command: {}", command);
                println!("Type 'help' for available commands.");
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let words = load_dictionary(&args.dictionary).with_context(|| {
        format!(
            "a dictionary file is required; pass one with --dictionary (tried {})",
            args.dictionary.display()
        )
    })?;

    match args.command {
        None => run_interactive(words, args.top_k)?,
        Some(Command::Suggest) => {
            print_suggestions(&rank_with_bar(&words, args.top_k)?);
        }
        Some(Command::Score { words: guesses }) => {
            for guess in guesses {
                let guess = Word::parse(&guess)?;
                let score = score_guess(&guess, &words)?;
                println!("{}: {:.3}", guess, score);
            }
        }
        Some(Command::Solve { answer, max_turns }) => {
            let answer = Word::parse(&answer)?;
            let mut session = Session::new(words);

            println!("Solving for: {}", answer.as_str().to_uppercase());
            println!();

            let rounds = session
                .play(&answer, max_turns)
                .with_context(|| format!("{} is not in the dictionary", answer))?;
            for (i, round) in rounds.iter().enumerate() {
                println!(
                    "Guess {}: {} → {}",
                    i + 1,
                    round.guess.as_str().to_uppercase(),
                    round.feedback.to_emoji_string()
                );
            }

            println!();
            match rounds.last() {
                Some(round) if round.feedback.is_win() => {
                    println!("Solved in {} guesses.", rounds.len())
                }
                _ => println!("Failed to solve within {} guesses.", max_turns),
            }
        }
    }

    Ok(())
}
