use std::str::FromStr;

use anyhow::{Context, bail};
use numpath_core::{Coord, Coord2};

/// One line of interactive input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Tap(Coord2),
    Reset,
    Moves,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let line = line.trim();
        Ok(match line.to_ascii_lowercase().as_str() {
            "reset" | "new" | "n" => Self::Reset,
            "moves" | "m" => Self::Moves,
            "help" | "h" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Tap(parse_coords(line)?),
        })
    }
}

/// Accepts `row col`, `row,col` or `row, col`.
fn parse_coords(text: &str) -> anyhow::Result<Coord2> {
    let mut parts = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());

    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        bail!("expected `row col`, got {text:?}");
    };
    let row: Coord = row.parse().with_context(|| format!("bad row {row:?}"))?;
    let col: Coord = col.parse().with_context(|| format!("bad column {col:?}"))?;
    Ok((row, col))
}

pub const HELP: &str = "\
commands:
  <row> <col>   tap a cell (first tap picks the start)
  moves         list legal targets
  reset         start a new game
  help          show this text
  quit          leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_coordinates_in_several_forms() {
        assert_eq!("1 2".parse::<Command>().unwrap(), Command::Tap((1, 2)));
        assert_eq!(" 3,0 ".parse::<Command>().unwrap(), Command::Tap((3, 0)));
        assert_eq!("0, 3".parse::<Command>().unwrap(), Command::Tap((0, 3)));
    }

    #[test]
    fn parses_keywords_case_insensitively() {
        assert_eq!("RESET".parse::<Command>().unwrap(), Command::Reset);
        assert_eq!("m".parse::<Command>().unwrap(), Command::Moves);
        assert_eq!("?".parse::<Command>().unwrap(), Command::Help);
        assert_eq!("Quit".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!("".parse::<Command>().is_err());
        assert!("1".parse::<Command>().is_err());
        assert!("1 2 3".parse::<Command>().is_err());
        assert!("a b".parse::<Command>().is_err());
        assert!("-1 0".parse::<Command>().is_err());
        assert!("300 0".parse::<Command>().is_err());
    }
}
