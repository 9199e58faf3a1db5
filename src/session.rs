use crate::{Action, Game, Outcome, Renderer, Step};
use rand::Rng;
use std::io::{self, Read, Write};

const CTRL_C: u8 = 0x03;
const CTRL_D: u8 = 0x04;

/// Why a session stopped reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Finished(Outcome),
    /// Ctrl-C or Ctrl-D arrived on raw terminal input, where these keys do
    /// not raise signals. Piped input treats them as ordinary ignored bytes.
    Interrupted,
    InputClosed,
}

/// Plays `game` to completion: draws a frame, reads one byte, applies it,
/// and repaints in place. The final frame is always drawn; the result line
/// only when the game actually ended.
///
/// `raw_input` says the bytes come from a terminal in raw mode; only then are
/// Ctrl-C and Ctrl-D treated as interrupts.
pub fn run<R, I, W>(
    game: &mut Game<R>,
    input: I,
    renderer: &mut Renderer<W>,
    raw_input: bool,
) -> io::Result<SessionEnd>
where
    R: Rng,
    I: Read,
    W: Write,
{
    renderer.controls()?;
    let mut bytes = input.bytes();

    let end = loop {
        let snapshot = game.snapshot();
        renderer.frame(&snapshot)?;

        let byte = match bytes.next().transpose()? {
            Some(CTRL_C | CTRL_D) if raw_input => break SessionEnd::Interrupted,
            Some(byte) => byte,
            None => break SessionEnd::InputClosed,
        };
        let step = game.perform(Action::from_byte(byte));
        renderer.rewind(&snapshot)?;

        if let Step::Stop(outcome) = step {
            break SessionEnd::Finished(outcome);
        }
    };

    match end {
        SessionEnd::Finished(outcome) => {
            renderer.frame(&game.snapshot())?;
            renderer.result(outcome)?;
        }
        SessionEnd::Interrupted | SessionEnd::InputClosed => {
            tracing::debug!(?end, "session ended before the game was decided");
        }
    }
    Ok(end)
}
