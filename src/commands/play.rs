//! Interactive play mode
//!
//! Text-based game against a random secret. The player types guesses and can
//! ask for a hint, hand turns to the selected strategy, or switch strategy at
//! any point.

use crate::game::{GameState, Session, SubmitOutcome};
use crate::output::formatters::render_guess;
use crate::solver::{Strategy, StrategyKind, StrategyType};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Games played in one interactive session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlayStats {
    pub games: usize,
    pub wins: usize,
}

/// What the player asked for
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Guess(String),
    Hint,
    Step,
    Auto,
    /// Switch strategy; empty when no name was given
    Strategy(String),
    New,
    Quit,
}

impl Command {
    fn parse(input: &str) -> Option<Self> {
        let input = input.trim().to_lowercase();
        let mut words = input.split_whitespace();
        let first = words.next()?;

        let command = match first {
            "hint" | "h" => Self::Hint,
            "step" | "s" => Self::Step,
            "auto" | "a" => Self::Auto,
            "strategy" | "use" => Self::Strategy(words.next().unwrap_or_default().to_string()),
            "new" | "n" => Self::New,
            "quit" | "q" | "exit" => Self::Quit,
            _ => Self::Guess(input.clone()),
        };
        Some(command)
    }
}

/// Interactive game loop over arbitrary input and output
struct Game<'r, R: Rng + ?Sized, W: Write> {
    session: Session,
    solver: StrategyType,
    rng: &'r mut R,
    out: W,
    totals: PlayStats,
}

impl<R: Rng + ?Sized, W: Write> Game<'_, R, W> {
    fn submit(&mut self, guess: &str) -> io::Result<()> {
        let turn = match self.session.submit(guess) {
            Ok(turn) => turn.clone(),
            Err(e) => return writeln!(self.out, "{}", e.to_string().red()),
        };

        // Keep the strategy's candidates in step with every guess, human or not
        self.solver.filter_candidates(&turn.guess, turn.feedback);

        writeln!(
            self.out,
            "{}  {}",
            render_guess(&turn.guess, turn.feedback),
            turn.feedback
        )?;

        match turn.outcome {
            SubmitOutcome::Continue => writeln!(
                self.out,
                "{} attempts left, {} candidates remain",
                self.session.attempts_left(),
                self.solver.candidates().len()
            ),
            SubmitOutcome::Won => {
                self.totals.games += 1;
                self.totals.wins += 1;
                let turns = self.session.turns().len();
                let message = format!("Solved in {turns}!");
                writeln!(self.out, "{}", message.green().bold())?;
                writeln!(self.out, "Type 'new' to play again or 'quit' to exit.")
            }
            SubmitOutcome::Lost => {
                self.totals.games += 1;
                let secret = self.session.state().secret().text().to_uppercase();
                let message = format!("Out of guesses. The word was {secret}.");
                writeln!(self.out, "{}", message.red().bold())?;
                writeln!(self.out, "Type 'new' to play again or 'quit' to exit.")
            }
        }
    }

    /// Let the strategy take one turn; `false` if it could not
    fn solver_turn(&mut self) -> io::Result<bool> {
        if self.session.is_over() {
            writeln!(self.out, "The game is over. Type 'new' to play again.")?;
            return Ok(false);
        }

        let count = self.solver.candidates().len();
        let Some(guess) = self.solver.select_next() else {
            let message = "Solver failed: no candidates left.";
            writeln!(self.out, "{}", message.yellow())?;
            return Ok(false);
        };

        writeln!(
            self.out,
            "{} guesses {} ({count} candidates)",
            self.solver.name(),
            guess.text().to_uppercase().bold()
        )?;
        self.submit(guess.text())?;
        Ok(true)
    }

    fn hint(&mut self) -> io::Result<()> {
        match self.session.hint(self.rng) {
            Some(hint) => writeln!(
                self.out,
                "Hint: '{}' is at position {}",
                hint.letter.to_ascii_uppercase(),
                hint.position + 1
            ),
            None => writeln!(self.out, "No hint available."),
        }
    }

    /// Replace the strategy, replaying this game's guesses into the new one
    fn switch_strategy(&mut self, name: &str) -> io::Result<()> {
        let Some(kind) = StrategyKind::from_name(name) else {
            let names = StrategyKind::ALL.map(StrategyKind::name).join(", ");
            return writeln!(self.out, "Unknown strategy '{name}' (expected: {names})");
        };

        let mut solver = StrategyType::new(kind, self.session.state());
        for turn in self.session.turns() {
            solver.filter_candidates(&turn.guess, turn.feedback);
        }
        self.solver = solver;

        writeln!(
            self.out,
            "Now using {} ({} candidates)",
            kind.label(),
            self.solver.candidates().len()
        )
    }

    fn new_game(&mut self) -> io::Result<()> {
        self.session.new_game(self.rng);
        self.solver.reset();
        writeln!(self.out, "{}", "--- NEW GAME STARTED ---".bold())
    }
}

/// Run the interactive game until the input ends or the player quits
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R, I, W>(
    state: GameState,
    kind: StrategyKind,
    rng: &mut R,
    input: I,
    out: W,
) -> io::Result<PlayStats>
where
    R: Rng + ?Sized,
    I: BufRead,
    W: Write,
{
    let solver = StrategyType::new(kind, &state);
    let mut game = Game {
        session: Session::new(state),
        solver,
        rng,
        out,
        totals: PlayStats::default(),
    };

    let title = "Wordle - guess the 5-letter word";
    writeln!(game.out, "{}", title.cyan().bold())?;
    writeln!(
        game.out,
        "Commands: <word>, hint, step, auto, strategy <name>, new, quit"
    )?;
    writeln!(game.out, "'step' and 'auto' play as {}", kind.label())?;

    for line in input.lines() {
        match Command::parse(&line?) {
            None => {}
            Some(Command::Guess(word)) => game.submit(&word)?,
            Some(Command::Hint) => game.hint()?,
            Some(Command::Step) => {
                game.solver_turn()?;
            }
            Some(Command::Auto) => while !game.session.is_over() && game.solver_turn()? {},
            Some(Command::Strategy(name)) => game.switch_strategy(&name)?,
            Some(Command::New) => game.new_game()?,
            Some(Command::Quit) => break,
        }
        game.out.flush()?;
    }

    Ok(game.totals)
}
