use std::str::FromStr;

use crate::{game::Start, square::Square};

pub const COMMANDS: [&str; 6] = [
    "click",
    "final_status",
    "list_commands",
    "new_game",
    "quit",
    "show_board",
];

#[derive(Debug, Clone)]
pub enum Message {
    Empty,
    Click(Square),
    FinalStatus,
    ListCommands,
    NewGame(Start),
    Quit,
    ShowBoard,
}

impl TryFrom<&str> for Message {
    type Error = anyhow::Error;

    fn try_from(message: &str) -> anyhow::Result<Self> {
        let args: Vec<&str> = message.split_whitespace().collect();

        let Some(command) = args.first() else {
            return Ok(Self::Empty);
        };

        match *command {
            "click" => {
                if args.len() != 2 {
                    return Err(anyhow::Error::msg("click: expected a square, e.g. 'click b6'"));
                }

                Ok(Self::Click(Square::from_str(args[1])?))
            }
            "final_status" => Ok(Self::FinalStatus),
            "list_commands" => Ok(Self::ListCommands),
            "new_game" => {
                let start = match args.get(1) {
                    Some(arg) => Start::from_str(arg)?,
                    None => Start::default(),
                };

                Ok(Self::NewGame(start))
            }
            "quit" => Ok(Self::Quit),
            "show_board" => Ok(Self::ShowBoard),
            command => Err(anyhow::Error::msg(format!("unknown command '{command}'"))),
        }
    }
}
