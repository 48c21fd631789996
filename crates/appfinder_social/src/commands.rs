//! Bot command recognition.

/// Reply for the informational commands.
pub const WELCOME_TEXT: &str = "With AppFinder you can search AppStore's apps and games by title!\n\
For starting a search you must send a search query as a regular message.";

/// A slash command addressed to the bot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BotCommand {
    /// `/start`
    Start,
    /// `/help`
    Help,
    /// Any other command name
    Unknown(String),
}

/// Recognize a leading slash command, ignoring a `@botname` suffix and any arguments.
///
/// # Examples
///
/// ```
/// use appfinder_social::{BotCommand, parse_command};
///
/// assert_eq!(parse_command("/start"), Some(BotCommand::Start));
/// assert_eq!(parse_command("/help@AppFinderBot"), Some(BotCommand::Help));
/// assert_eq!(parse_command("/top games"), Some(BotCommand::Unknown("top".into())));
/// assert_eq!(parse_command("chess"), None);
/// assert_eq!(parse_command("/"), None);
/// assert_eq!(parse_command("/ chess"), None);
/// ```
pub fn parse_command(text: &str) -> Option<BotCommand> {
    let rest = text.strip_prefix('/')?;
    let token = rest.split(char::is_whitespace).next()?;
    let name = token.split('@').next().unwrap_or(token);
    if name.is_empty() {
        return None;
    }

    Some(match name {
        "start" => BotCommand::Start,
        "help" => BotCommand::Help,
        other => BotCommand::Unknown(other.to_string()),
    })
}
