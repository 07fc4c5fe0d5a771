//! Interactive reading loop.
//!
//! `TarotSession` owns the input and output streams so the same loop runs
//! against a terminal in the binary and against in-memory buffers in tests.

use std::io::{BufRead, Write};

use colored::Colorize;
use rand::rngs::StdRng;

use crate::art::render_reading;
use crate::config::TarotConfig;
use crate::deck::{Card, MAJOR_ARCANA};
use crate::error::TarotResult;
use crate::reading::{Reading, Spread};

/// Line printed whenever the session ends.
pub const FAREWELL: &str = "✨ Thank you for consulting the cards. ✨";

/// Prompt shown with the menu.
pub const CHOICE_PROMPT: &str = "Enter your choice (1-4 or q): ";

/// Prompt shown after each turn.
pub const CONTINUE_PROMPT: &str = "[Press Enter to continue or q to quit...]";

/// Menu entry that ends the session.
const EXIT_CHOICE: &str = "4";

/// Sentinel accepted at any prompt.
const QUIT_SENTINEL: &str = "q";

/// An interactive tarot session over arbitrary line-oriented streams.
pub struct TarotSession<R, W> {
    input: R,
    output: W,
    rng: StdRng,
    deck: &'static [Card],
}

impl<R: BufRead, W: Write> TarotSession<R, W> {
    /// Create a session reading from `input` and writing to `output`.
    pub fn new(input: R, output: W, config: &TarotConfig) -> Self {
        Self {
            input,
            output,
            rng: config.rng(),
            deck: &MAJOR_ARCANA,
        }
    }

    /// Consume the session and return the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until the user quits or input ends.
    pub fn run(&mut self) -> TarotResult<()> {
        self.print_banner()?;

        loop {
            self.print_menu()?;

            let Some(choice) = self.prompt(&format!("\n{CHOICE_PROMPT}"))? else {
                return self.farewell();
            };

            if choice == EXIT_CHOICE {
                return self.farewell();
            }

            match Spread::from_choice(&choice) {
                Some(spread) => {
                    self.perform(spread)?;
                }
                None => {
                    tracing::debug!(choice, "rejected menu choice");
                    writeln!(
                        self.output,
                        "\n{}",
                        "❌ Invalid choice. Please try again.".yellow()
                    )?;
                }
            }

            if self.prompt(&format!("\n{CONTINUE_PROMPT}"))?.is_none() {
                return self.farewell();
            }
        }
    }

    /// Deal and print a reading for `spread`.
    pub fn perform(&mut self, spread: Spread) -> TarotResult<Reading> {
        let reading = Reading::deal(spread, self.deck, &mut self.rng);
        write!(self.output, "{}", render_reading(&reading))?;
        Ok(reading)
    }

    /// Print `text`, read one line, and normalise it.
    ///
    /// Returns `None` when the user typed the quit sentinel or input ended.
    fn prompt(&mut self, text: &str) -> TarotResult<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let response = line.trim().to_lowercase();
        if response == QUIT_SENTINEL {
            Ok(None)
        } else {
            Ok(Some(response))
        }
    }

    fn print_banner(&mut self) -> TarotResult<()> {
        let balls = "🔮".repeat(20);
        writeln!(self.output, "\n{balls}")?;
        writeln!(self.output, "{}", format!("{:^40}", "TERMINAL TAROT READER").bold())?;
        writeln!(self.output, "{balls}\n")?;
        writeln!(self.output, "(Type 'q' at any time to quit)\n")?;
        Ok(())
    }

    fn print_menu(&mut self) -> TarotResult<()> {
        writeln!(self.output, "\nWhat type of reading would you like?")?;
        for (i, spread) in Spread::all().iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, spread.label())?;
        }
        writeln!(self.output, "{EXIT_CHOICE}. Exit")?;
        Ok(())
    }

    fn farewell(&mut self) -> TarotResult<()> {
        writeln!(self.output, "\n{FAREWELL}\n")?;
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run_session(input: &str) -> String {
        let config = TarotConfig::default().with_seed(42);
        let mut session = TarotSession::new(Cursor::new(input.to_string()), Vec::new(), &config);
        session.run().unwrap();
        String::from_utf8(session.into_output()).unwrap()
    }

    #[test]
    fn quit_at_menu_prints_only_farewell() {
        let out = run_session("q\n");
        let (_, after) = out.split_once(CHOICE_PROMPT).unwrap();
        assert_eq!(after.trim(), FAREWELL);
    }

    #[test]
    fn quit_is_case_insensitive() {
        let out = run_session("Q\n");
        assert!(out.trim_end().ends_with(FAREWELL));
        assert!(!out.contains("YOUR TAROT READING"));
    }

    #[test]
    fn exit_choice_ends_session() {
        let out = run_session("4\n");
        assert!(out.trim_end().ends_with(FAREWELL));
        assert_eq!(out.matches(CHOICE_PROMPT).count(), 1);
    }

    #[test]
    fn end_of_input_ends_session() {
        let out = run_session("");
        assert!(out.trim_end().ends_with(FAREWELL));
    }

    #[test]
    fn single_card_then_quit() {
        let out = run_session("1\nq\n");
        assert_eq!(out.matches('╔').count(), 1);
        assert_eq!(out.matches("Meaning:").count(), 1);
        assert!(out.contains(CONTINUE_PROMPT));
        assert!(out.trim_end().ends_with(FAREWELL));
    }

    #[test]
    fn three_card_spread_prints_three_cards() {
        for seed in 0..20 {
            let config = TarotConfig::default().with_seed(seed);
            let mut session =
                TarotSession::new(Cursor::new("2\nq\n".to_string()), Vec::new(), &config);
            session.run().unwrap();
            let out = String::from_utf8(session.into_output()).unwrap();
            assert_eq!(out.matches('╔').count(), 3);
            assert_eq!(out.matches("Meaning:").count(), 3);
        }
    }

    #[test]
    fn five_card_spread_prints_five_cards() {
        let out = run_session("3\n\nq\n");
        assert_eq!(out.matches('╔').count(), 5);
        assert!(out.contains("Five Card Situation Spread"));
        // menu shown again after pressing enter
        assert_eq!(out.matches(CHOICE_PROMPT).count(), 2);
    }

    #[test]
    fn readings_back_to_back_return_to_menu() {
        let out = run_session("1\n\n2\n\nq\n");
        assert_eq!(out.matches('╔').count(), 4);
        assert_eq!(out.matches(CONTINUE_PROMPT).count(), 2);
        assert_eq!(out.matches(CHOICE_PROMPT).count(), 3);
        assert!(out.trim_end().ends_with(FAREWELL));
    }

    #[test]
    fn invalid_choice_reprints_menu() {
        let out = run_session("7\n\nq\n");
        assert!(out.contains("Invalid choice. Please try again."));
        assert_eq!(out.matches("What type of reading would you like?").count(), 2);
        assert!(!out.contains("YOUR TAROT READING"));
    }

    #[test]
    fn quit_at_continue_prompt() {
        let out = run_session("1\nq\n");
        let (_, after) = out.split_once(CONTINUE_PROMPT).unwrap();
        assert_eq!(after.trim(), FAREWELL);
    }

    #[test]
    fn perform_returns_the_reading() {
        let config = TarotConfig::default().with_seed(5);
        let mut session = TarotSession::new(Cursor::new(String::new()), Vec::new(), &config);
        let reading = session.perform(Spread::FiveCard).unwrap();
        assert_eq!(reading.cards.len(), 5);
        let out = String::from_utf8(session.into_output()).unwrap();
        for drawn in &reading.cards {
            assert!(out.contains(drawn.meaning()));
        }
    }
}
