use clap::ValueEnum;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Home,
    Discover,
    Show(String),
    Food,
    Stay,
    History,
    Info,
    Map,
    Gallery,
    Search(String),
    Interest(String),
    Duration(String),
    Style(String),
    Form,
    Plan,
    Clear,
    /// Anything that is not a slash command goes to the assistant.
    Chat(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unbekannter Befehl: {0} (siehe /help)")]
    Unknown(String),
    #[error("{command} braucht ein Argument, z.B. {example}")]
    MissingArgument {
        command: &'static str,
        example: &'static str,
    },
}

impl Command {
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();
        let Some(rest) = input.strip_prefix('/') else {
            return Ok(Command::Chat(input.to_string()));
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        let command = match name.to_lowercase().as_str() {
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "home" | "start" => Command::Home,
            "discover" | "sehen" => Command::Discover,
            "show" => Command::Show(required(arg, "/show", "/show altstadt")?),
            "food" | "gastronomie" => Command::Food,
            "stay" | "planen" => Command::Stay,
            "history" | "geschichte" => Command::History,
            "info" => Command::Info,
            "map" | "karte" => Command::Map,
            "gallery" | "impressionen" => Command::Gallery,
            "search" | "suche" => Command::Search(required(arg, "/search", "/search therme")?),
            "interest" => Command::Interest(required(arg, "/interest", "/interest 2")?),
            "duration" => Command::Duration(required(arg, "/duration", "/duration weekend")?),
            "style" => Command::Style(required(arg, "/style", "/style relaxed")?),
            "form" => Command::Form,
            "plan" => Command::Plan,
            "clear" => Command::Clear,
            _ => return Err(CommandError::Unknown(format!("/{name}"))),
        };
        Ok(command)
    }
}

fn required(arg: &str, command: &'static str, example: &'static str) -> Result<String, CommandError> {
    if arg.is_empty() {
        Err(CommandError::MissingArgument { command, example })
    } else {
        Ok(arg.to_string())
    }
}

/// Resolve a form option from a 1-based index, its CLI name or its label.
pub fn choose<T: ValueEnum + Copy>(arg: &str, options: &[T], label: impl Fn(&T) -> &'static str) -> Option<T> {
    let arg = arg.trim();
    if let Ok(index) = arg.parse::<usize>() {
        return index.checked_sub(1).and_then(|i| options.get(i)).copied();
    }
    if let Ok(value) = T::from_str(arg, true) {
        return Some(value);
    }
    let lowered = arg.to_lowercase();
    options.iter().copied().find(|o| label(o).to_lowercase() == lowered)
}
