//! Parser for the interactive play loop.

use color_alchemy_core::{Color, Command, HintKind, Swatch, BASE_PALETTE};
use thiserror::Error;

/// Instruction typed at the play prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Line {
    /// A session command.
    Play(Command),
    /// Print the share text of the finished challenge.
    Share,
    /// Print the current target and mix.
    Status,
    /// Print the list of line commands.
    Help,
    /// Leave the play loop.
    Quit,
}

/// Reasons a prompt line could not be understood.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub(crate) enum LineError {
    #[error("unknown command '{0}', type 'help' for a list")]
    UnknownCommand(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("unknown swatch '{0}', try one of: {palette}", palette = palette_names())]
    UnknownSwatch(String),
}

pub(crate) const HELP: &str = "\
mix R G B            set the mix from channel values (clamped to 0-255)
add SWATCH           add a palette swatch to the mix
undo                 remove the last swatch
check                spend an attempt matching the current target
hint direction       which channels to raise or lower
hint accuracy        the live match percentage
reset                start over with the same targets
new                  generate fresh targets
status               show the target and the mix
share                print the result summary
quit                 leave";

fn palette_names() -> String {
    BASE_PALETTE
        .iter()
        .map(|swatch| swatch.name().to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parses one prompt line. Blank lines yield `None`.
pub(crate) fn parse_line(line: &str) -> Result<Option<Line>, LineError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = words.collect();

    let parsed = match (head.to_ascii_lowercase().as_str(), rest.as_slice()) {
        ("mix", [red, green, blue]) => Line::Play(Command::SetMix {
            mix: Color::clamped(number(red)?, number(green)?, number(blue)?),
        }),
        ("mix", _) => return Err(LineError::Usage("mix R G B")),
        ("add", [name]) => {
            let swatch =
                Swatch::find(name).ok_or_else(|| LineError::UnknownSwatch((*name).to_owned()))?;
            Line::Play(Command::AddSwatch { swatch })
        }
        ("add", _) => return Err(LineError::Usage("add SWATCH")),
        ("undo", []) => Line::Play(Command::RemoveLastSwatch),
        ("check", []) => Line::Play(Command::CheckMatch),
        ("hint", [kind]) => {
            let kind = match kind.to_ascii_lowercase().as_str() {
                "direction" => HintKind::Direction,
                "accuracy" => HintKind::Accuracy,
                _ => return Err(LineError::Usage("hint direction|accuracy")),
            };
            Line::Play(Command::RequestHint { kind })
        }
        ("hint", _) => return Err(LineError::Usage("hint direction|accuracy")),
        ("reset", []) => Line::Play(Command::Reset),
        ("new", []) => Line::Play(Command::NewChallenge),
        ("share", []) => Line::Share,
        ("status", []) => Line::Status,
        ("help" | "?", []) => Line::Help,
        ("quit" | "exit", []) => Line::Quit,
        (other, _) => return Err(LineError::UnknownCommand(other.to_owned())),
    };
    Ok(Some(parsed))
}

fn number(word: &str) -> Result<i64, LineError> {
    word.parse()
        .map_err(|_| LineError::NotANumber(word.to_owned()))
}
