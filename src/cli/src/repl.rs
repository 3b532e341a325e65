use std::io::{self, BufRead, Write};

use cube_core::CubeState;
use log::{info, warn};

use crate::{config::CliConfig, display};

const HELP: &str = "\
<moves>        apply a move sequence, e.g. R U R' U'
reset          return to the solved state
scramble [N]   reset, then apply N random quarter turns
state <CSV>    load 54 comma separated sticker values (0 to 5)
show           print the cube
facelets       print the facelet string
help           print this message
exit           leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Moves(String),
    Reset,
    Scramble(Option<usize>),
    State(String),
    Show,
    Facelets,
    Help,
    Exit,
}

impl Command {
    /// Anything that is not a keyword is taken as a move sequence. Returns
    /// `None` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let line = line.trim();
        let (keyword, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(keyword, rest)| (keyword, rest.trim()));

        let command = match keyword {
            "" => return Ok(None),
            "reset" => Command::Reset,
            "show" => Command::Show,
            "facelets" => Command::Facelets,
            "help" => Command::Help,
            "exit" | "quit" => Command::Exit,
            "scramble" if rest.is_empty() => Command::Scramble(None),
            "scramble" => Command::Scramble(Some(
                rest.parse()
                    .map_err(|_| format!("Scramble length must be a number, got {rest:?}"))?,
            )),
            "state" => Command::State(rest.to_owned()),
            _ => Command::Moves(line.to_owned()),
        };

        Ok(Some(command))
    }
}

pub enum Outcome {
    Print(String),
    Exit,
}

pub struct Session {
    cube: CubeState,
    config: CliConfig,
    rng: fastrand::Rng,
}

impl Session {
    pub fn new(cube: CubeState, config: CliConfig, rng: fastrand::Rng) -> Session {
        Session { cube, config, rng }
    }

    pub fn cube(&self) -> &CubeState {
        &self.cube
    }

    /// Run one command. Rejected input is reported and leaves the cube as it
    /// was.
    pub fn execute(&mut self, command: Command) -> Outcome {
        let result = match command {
            Command::Exit => return Outcome::Exit,
            Command::Help => return Outcome::Print(HELP.to_owned()),
            Command::Facelets => return Outcome::Print(self.cube.to_facelet_string()),
            Command::Show => return Outcome::Print(self.report()),
            Command::Reset => {
                self.cube.reset();
                Ok(())
            }
            Command::Scramble(length) => {
                let length = length.unwrap_or(self.config.scramble_length);
                self.cube.reset();
                let sequence = self.cube.scramble(length, &mut self.rng).to_owned();
                info!("Scramble: {sequence}");
                return Outcome::Print(format!("{sequence}\n{}", self.report()));
            }
            Command::State(stickers) => self.cube.load_sticker_list(&stickers),
            Command::Moves(sequence) => self.cube.apply_moves(&sequence).map(drop),
        };

        match result {
            Ok(()) => Outcome::Print(self.report()),
            Err(e) => {
                warn!("{e}");
                Outcome::Print(format!("Invalid input: {e}"))
            }
        }
    }

    fn report(&self) -> String {
        display::report(&self.cube, &self.config)
    }
}

pub fn run(mut session: Session) -> color_eyre::Result<()> {
    println!("{}", display::legend(&session.config));
    println!("{}", session.report());
    println!("Type `help` for commands");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            break Ok(());
        };

        match Command::parse(&line) {
            Ok(Some(command)) => match session.execute(command) {
                Outcome::Print(text) => println!("{text}"),
                Outcome::Exit => break Ok(()),
            },
            Ok(None) => {}
            Err(message) => println!("{message}"),
        }
    }
}
