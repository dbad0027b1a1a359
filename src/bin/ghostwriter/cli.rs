pub enum CliCommand {
    Quit,
    Clear,
    Copy,
    Styles,
    Style(String), // /style <name>
    Topic(String),
}

pub fn parse_input(line: &str) -> Option<CliCommand> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return None;
    }

    if let Some(rest) = trimmed.strip_prefix("/style ") {
        let name = rest.trim();
        if !name.is_empty() {
            return Some(CliCommand::Style(name.to_string()));
        }
        return Some(CliCommand::Styles);
    }

    match trimmed {
        "/q" | "exit" | "quit" => Some(CliCommand::Quit),
        "/c" | "clear" => Some(CliCommand::Clear),
        "/copy" | "copy" => Some(CliCommand::Copy),
        "/styles" | "/style" => Some(CliCommand::Styles),
        msg => Some(CliCommand::Topic(msg.to_string())),
    }
}
