use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/config", "Show current configuration"),
    ("/help", "Show available commands"),
    ("/mode", "Switch customer mode"),
    ("/quit", "Exit the session"),
    ("/quote", "Show the current quote"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone)]
pub enum SlashCommand {
    Mode(Option<String>),
    Quote,
    Config,
    Help,
    Quit,
    Unknown(String),
}

/// Input types
#[derive(Debug)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

/// Classifies a line of user input. Classification looks at the trimmed
/// line, but answer text is returned exactly as typed so the transcript
/// records what the user wrote.
pub fn parse_input(input: &str) -> Input {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Input::Empty;
    }

    trimmed
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    match parts.first().copied() {
        Some("mode") => Input::Command(SlashCommand::Mode(
            parts.get(1).map(|name| (*name).to_string()),
        )),
        Some("quote") => Input::Command(SlashCommand::Quote),
        Some("config") => Input::Command(SlashCommand::Config),
        Some("help") => Input::Command(SlashCommand::Help),
        Some("quit" | "exit" | "q") => Input::Command(SlashCommand::Quit),
        _ => Input::Command(SlashCommand::Unknown(parts.join(" "))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_input(""), Input::Empty));
        assert!(matches!(parse_input("   "), Input::Empty));
    }

    #[test]
    fn test_parse_text_input() {
        match parse_input("Two rooms, please") {
            Input::Text(text) => assert_eq!(text, "Two rooms, please"),
            _ => panic!("Expected Input::Text"),
        }
    }

    #[test]
    fn test_parse_text_keeps_raw_spacing() {
        match parse_input("  ceiling speakers  ") {
            Input::Text(text) => assert_eq!(text, "  ceiling speakers  "),
            _ => panic!("Expected Input::Text"),
        }
    }

    #[test]
    fn test_parse_mode_command_without_argument() {
        assert!(matches!(
            parse_input("/mode"),
            Input::Command(SlashCommand::Mode(None))
        ));
    }

    #[test]
    fn test_parse_mode_command_with_argument() {
        match parse_input("/mode commercial") {
            Input::Command(SlashCommand::Mode(Some(name))) => assert_eq!(name, "commercial"),
            _ => panic!("Expected Input::Command(SlashCommand::Mode)"),
        }
    }

    #[test]
    fn test_parse_quote_command() {
        assert!(matches!(
            parse_input("/quote"),
            Input::Command(SlashCommand::Quote)
        ));
    }

    #[test]
    fn test_parse_config_command() {
        assert!(matches!(
            parse_input("/config"),
            Input::Command(SlashCommand::Config)
        ));
    }

    #[test]
    fn test_parse_help_command() {
        assert!(matches!(
            parse_input("/help"),
            Input::Command(SlashCommand::Help)
        ));
    }

    #[test]
    fn test_parse_quit_commands() {
        assert!(matches!(
            parse_input("/quit"),
            Input::Command(SlashCommand::Quit)
        ));
        assert!(matches!(
            parse_input("/exit"),
            Input::Command(SlashCommand::Quit)
        ));
        assert!(matches!(
            parse_input("/q"),
            Input::Command(SlashCommand::Quit)
        ));
    }

    #[test]
    fn test_parse_unknown_command() {
        match parse_input("/discount 50%") {
            Input::Command(SlashCommand::Unknown(cmd)) => assert_eq!(cmd, "discount 50%"),
            _ => panic!("Expected Input::Command(SlashCommand::Unknown)"),
        }
    }

    // SlashCommandCompleter tests

    #[test]
    fn test_completer_no_suggestions_for_regular_text() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("speakers").unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_completer_suggestions_for_slash() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("/").unwrap();
        assert_eq!(suggestions.len(), SLASH_COMMANDS.len());
    }

    #[test]
    fn test_completer_suggestions_filter_by_prefix() {
        let mut completer = SlashCommandCompleter;

        let suggestions = completer.get_suggestions("/m").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("/mode"));

        // /q is ambiguous between /quit and /quote
        let suggestions = completer.get_suggestions("/q").unwrap();
        assert_eq!(suggestions.len(), 2);
    }

    #[test]
    fn test_completer_completion() {
        let mut completer = SlashCommandCompleter;
        let suggestion = "/quote  Show the current quote".to_string();
        let completion = completer.get_completion("/qu", Some(suggestion)).unwrap();
        assert_eq!(completion, Some("/quote".to_string()));
    }

    #[test]
    fn test_completer_completion_none() {
        let mut completer = SlashCommandCompleter;
        let completion = completer.get_completion("/x", None).unwrap();
        assert!(completion.is_none());
    }
}
