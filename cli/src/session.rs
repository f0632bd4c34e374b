use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use memorama_core::{
    CellCount, Coord2, GameError, Level, MatchEngine, PairOutcome, PickInput, PickOutcome,
    TurnPhase, parse_pick,
};

use crate::screen;

/// How long both cards of a resolved pair stay visible.
pub(crate) const REVEAL_PAUSE: Duration = Duration::from_millis(1500);

/// Why a session ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum SessionEnd {
    Completed { attempts: CellCount },
    Quit,
}

/// Drives one game from a fresh board to completion or quit.
pub(crate) struct Session<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
    engine: MatchEngine,
    level: Level,
    pause: Duration,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub(crate) fn new(
        input: &'a mut R,
        output: &'a mut W,
        engine: MatchEngine,
        level: Level,
        pause: Duration,
    ) -> Self {
        Self {
            input,
            output,
            engine,
            level,
            pause,
        }
    }

    pub(crate) fn run(mut self) -> io::Result<SessionEnd> {
        let mut redraw = true;

        loop {
            if self.engine.is_complete() {
                self.draw(&[])?;
                return Ok(SessionEnd::Completed {
                    attempts: self.engine.attempts(),
                });
            }

            if redraw {
                self.draw(&[])?;
                redraw = false;
            }

            let prompt = match self.engine.phase() {
                TurnPhase::AwaitFirst => "First pick (row col): ",
                TurnPhase::AwaitSecond(_) => "Second pick (row col): ",
            };
            let Some(coords) = self.prompt_pick(prompt)? else {
                return Ok(SessionEnd::Quit);
            };
            log::trace!("picked {coords:?}");

            match self.engine.pick(coords) {
                Ok(PickOutcome::FirstUp(_)) => redraw = true,
                Ok(PickOutcome::Resolved {
                    first,
                    second,
                    outcome,
                }) => {
                    self.draw(&[first, second])?;
                    match outcome {
                        PairOutcome::Matched => writeln!(self.output, "Great! It's a match.")?,
                        PairOutcome::NoMatch => {
                            writeln!(self.output, "Not a match. Try to remember the positions.")?
                        }
                    }
                    self.rest();
                    redraw = true;
                }
                Err(GameError::AlreadyMatched) => {
                    writeln!(
                        self.output,
                        "That card is already matched. Press Enter and choose again."
                    )?;
                    self.output.flush()?;
                    read_line(self.input)?;
                    redraw = true;
                }
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn draw(&mut self, face_up: &[Coord2]) -> io::Result<()> {
        screen::clear(self.output)?;
        writeln!(self.output, "Memorama - {}", self.level.name())?;
        writeln!(self.output, "Type q to quit at any prompt.")?;
        writeln!(
            self.output,
            "Matches found: {}/{} | Attempts: {}",
            self.engine.matched_pairs(),
            self.engine.pair_count(),
            self.engine.attempts(),
        )?;
        screen::render_board(self.output, &self.engine, face_up)
    }

    /// Re-prompts until a line parses as a position; `None` means quit.
    fn prompt_pick(&mut self, prompt: &str) -> io::Result<Option<Coord2>> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let Some(line) = read_line(self.input)? else {
                // input is gone, same as quitting
                return Ok(None);
            };

            match parse_pick(&line, self.engine.config()) {
                Ok(PickInput::Quit) => return Ok(None),
                Ok(PickInput::Position(coords)) => return Ok(Some(coords)),
                Err(reason) => writeln!(self.output, "{reason}")?,
            }
        }
    }

    fn rest(&self) {
        if !self.pause.is_zero() {
            thread::sleep(self.pause);
        }
    }
}

/// Reads one line from `input`, `None` at end of input.
pub(crate) fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}
