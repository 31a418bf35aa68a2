/// Interactive comparison loop.
///
/// AwaitingChoice -> (decision) -> Updating -> AwaitingChoice, until the
/// operator quits or input ends. State is saved after every decision.
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use elorank_core::{RankError, RankingEngine, RatingStore};
use log::{info, warn};
use rand::Rng;
use thiserror::Error;

use crate::output::render_table;
use crate::parse::{parse_command, Command, INPUT_HELP};
use crate::prompt::render_pair;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Rank(#[from] RankError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub struct SessionOptions {
    /// Directory the item ids are relative to, used for display only.
    pub dir: PathBuf,
    /// Print the full leaderboard after every decision.
    pub show_leaderboard: bool,
}

/// Seconds since the Unix epoch.
pub fn unix_now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

/// Run the loop. Returns the number of decisions recorded in this session.
pub fn run_session<R: BufRead, W: Write>(
    engine: &mut RankingEngine,
    store: &RatingStore,
    options: &SessionOptions,
    mut input: R,
    out: &mut W,
    rng: &mut impl Rng,
    mut clock: impl FnMut() -> f64,
) -> Result<usize, SessionError> {
    let mut decided = 0;
    let mut shown = engine.next_pair(rng)?;

    loop {
        let number = engine.state().comparison_count() + 1;
        write_out(out, &render_pair(&options.dir, &shown, engine.state(), number))?;

        let mut raw = Vec::new();
        if input.read_until(b'\n', &mut raw)? == 0 {
            write_out(out, "\n")?;
            break;
        }

        let command = std::str::from_utf8(&raw).ok().and_then(parse_command);
        let Some(command) = command else {
            write_out(out, &format!("Unrecognized input. {INPUT_HELP}\n"))?;
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Skip => {
                shown = engine.next_pair(rng)?;
            }
            Command::Left | Command::Right => {
                if let Some(decision) = command.decision(&shown) {
                    engine.apply_decision(&shown, &decision, clock())?;
                    if let Err(e) = store.save(engine.state()) {
                        warn!("Save failed after comparison #{number}: {e}");
                        return Err(e.into());
                    }
                    decided += 1;

                    write_out(out, &format!("Preferred {}. Comparisons so far: {number}\n", decision.winner))?;
                    if options.show_leaderboard {
                        let board = engine.state().leaderboard();
                        write_out(out, &render_table(&board, engine.state().comparison_count()))?;
                    }
                }
                shown = engine.next_pair(rng)?;
            }
        }
    }

    info!("Session ended after {decided} decisions");
    Ok(decided)
}

fn write_out<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()
}
