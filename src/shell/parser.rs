/// One line of input split into a command name and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Empty,
    Exit,
    Command(ParsedCommand),
}

pub fn parse_line(line: &str) -> Input {
    let line = line.trim();
    if line == "exit" {
        return Input::Exit;
    }

    let mut tokens = line.split_whitespace().map(String::from);
    match tokens.next() {
        Some(name) => Input::Command(ParsedCommand {
            name,
            args: tokens.collect(),
        }),
        None => Input::Empty,
    }
}
