use std::io::{self, BufRead, Write};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use memorama_core::{BoardGenerator, Level, MatchEngine, ShuffledBoardGenerator, is_quit};

use crate::screen;
use crate::session::{Session, SessionEnd, read_line};

/// Top-level menu and replay loop.
pub(crate) struct App<R, W> {
    input: R,
    output: W,
    forced_seed: Option<u64>,
    pause: Duration,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub(crate) fn new(input: R, output: W, forced_seed: Option<u64>, pause: Duration) -> Self {
        Self {
            input,
            output,
            forced_seed,
            pause,
        }
    }

    pub(crate) fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "Welcome to Memorama!")?;
        writeln!(self.output, "Match all pairs by remembering card positions.")?;
        writeln!(self.output)?;

        loop {
            let Some(level) = self.choose_level()? else {
                break;
            };

            let seed = self.forced_seed.take().unwrap_or_else(clock_seed);
            let board = ShuffledBoardGenerator::new(seed).generate(level.config())?;
            let engine = MatchEngine::new(board);

            let end =
                Session::new(&mut self.input, &mut self.output, engine, level, self.pause).run()?;
            match end {
                SessionEnd::Completed { attempts } => {
                    writeln!(
                        self.output,
                        "You cleared {} mode in {} attempts!",
                        level.name(),
                        attempts
                    )?;
                    if !self.ask_play_again()? {
                        break;
                    }
                    screen::clear(&mut self.output)?;
                }
                SessionEnd::Quit => {
                    writeln!(self.output)?;
                    break;
                }
            }
        }

        writeln!(self.output, "Thanks for playing!")?;
        Ok(())
    }

    /// Prints the catalog until the player picks a level or quits.
    fn choose_level(&mut self) -> io::Result<Option<Level>> {
        loop {
            writeln!(self.output, "Choose difficulty:")?;
            for (index, level) in Level::ALL.iter().enumerate() {
                let config = level.config();
                writeln!(
                    self.output,
                    "  {}. {} ({}x{})",
                    index + 1,
                    level.name(),
                    config.rows,
                    config.cols
                )?;
            }
            write!(self.output, "Select 1, 2, or 3: ")?;
            self.output.flush()?;

            let Some(line) = read_line(&mut self.input)? else {
                return Ok(None);
            };
            let choice = line.trim();
            if is_quit(choice) {
                return Ok(None);
            }

            let level = choice
                .parse::<usize>()
                .ok()
                .and_then(|number| number.checked_sub(1))
                .and_then(|index| Level::ALL.get(index).copied());
            match level {
                Some(level) => return Ok(Some(level)),
                None => writeln!(self.output, "Invalid choice.\n")?,
            }
        }
    }

    fn ask_play_again(&mut self) -> io::Result<bool> {
        write!(self.output, "\nPlay again? (y/n): ")?;
        self.output.flush()?;

        let Some(line) = read_line(&mut self.input)? else {
            return Ok(false);
        };
        Ok(line.trim().eq_ignore_ascii_case("y"))
    }
}

/// Seeds each new deal from the wall clock when no seed is forced.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64)
}
