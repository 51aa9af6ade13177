//! Interactive terminal prompt.

use fair_rps_core::{HelpTable, MoveSet, Player, PlayerInput};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Map one line of input to a choice.
///
/// `0` exits and `?` asks for help. A number `1..=n` selects that move from
/// the menu; anything else is taken as a move name exactly as typed, minus the
/// line terminator.
pub fn parse_choice(line: &str, moves: &MoveSet) -> PlayerInput {
    let typed = line.trim_end_matches(['\r', '\n']);
    let token = typed.trim();
    match token {
        "0" => PlayerInput::Exit,
        "?" => PlayerInput::Help,
        _ => {
            let selected = token
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|position| moves.index(position));
            match selected {
                Some(index) => PlayerInput::Move(moves.name_at(index).to_owned()),
                None => PlayerInput::Move(typed.to_owned()),
            }
        }
    }
}

/// Human player on a line-oriented terminal
pub struct TerminalPlayer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn write_menu(&mut self, moves: &MoveSet) -> io::Result<()> {
        writeln!(self.output, "Available moves:")?;
        for (index, name) in moves.iter() {
            writeln!(self.output, "{} - {}", index.get() + 1, name)?;
        }
        writeln!(self.output, "0 - exit")?;
        writeln!(self.output, "? - help")?;
        write!(self.output, "Enter your move: ")?;
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> Player for TerminalPlayer<R, W> {
    fn choose(&mut self, moves: &MoveSet) -> io::Result<PlayerInput> {
        self.write_menu(moves)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Closed input counts as leaving.
            writeln!(self.output)?;
            debug!("input closed at prompt");
            return Ok(PlayerInput::Exit);
        }
        Ok(parse_choice(&line, moves))
    }

    fn show_help(&mut self, table: &HelpTable<'_>) -> io::Result<()> {
        let half = table.moves().half_length();
        writeln!(
            self.output,
            "Each move loses to the {half} moves after it and beats the {half} before it, wrapping around."
        )?;
        writeln!(self.output, "Outcome of the row move against the column move:")?;
        write!(self.output, "{}", table)?;
        self.output.flush()
    }
}
