//! Addressee parsing: deciding whether a message is directed at the
//! bot and isolating the command text.

use crate::error::{AppError, AppResult};
use once_cell::sync::Lazy;
use regex::Regex;

/// Leading "bot" token, case-insensitive, followed by a boundary of
/// spaces or punctuation and the command remainder. The token must be
/// a full word: "Botswana" does not address the bot.
static ADDRESSED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)^bot(?:[ ,.?!-]+(.*))?$").expect("addressee pattern"));

/// Extract the command portion of a message directed at the bot.
///
/// Messages that do not open with the "bot" token fail with
/// [`AppError::NotAddressed`]. When the token stands alone the trimmed
/// token itself is returned, casing and trailing punctuation intact
/// (`" Bot? "` yields `"Bot?"`).
pub fn extract_command(raw_text: &str) -> AppResult<String> {
    let trimmed = raw_text.trim();
    let captures = ADDRESSED.captures(trimmed).ok_or(AppError::NotAddressed)?;

    match captures.get(1).map(|m| m.as_str().trim()) {
        Some(rest) if !rest.is_empty() => Ok(rest.to_string()),
        _ => Ok(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_command_after_space() {
        assert_eq!(extract_command("bot hello").unwrap(), "hello");
    }

    #[test]
    fn extracts_command_after_punctuation() {
        assert_eq!(
            extract_command("Bot, how you doin?").unwrap(),
            "how you doin?"
        );
        assert_eq!(
            extract_command("bot! change the color to red").unwrap(),
            "change the color to red"
        );
        assert_eq!(extract_command("BOT - lights please").unwrap(), "lights please");
    }

    #[test]
    fn bare_token_returns_itself() {
        assert_eq!(extract_command("Bot").unwrap(), "Bot");
        assert_eq!(extract_command(" Bot? ").unwrap(), "Bot?");
        assert_eq!(extract_command("bot   ").unwrap(), "bot");
    }

    #[test]
    fn rejects_unaddressed_messages() {
        assert!(matches!(
            extract_command("Botswana is the best country"),
            Err(AppError::NotAddressed)
        ));
        assert!(matches!(
            extract_command("botox appointment at noon"),
            Err(AppError::NotAddressed)
        ));
        assert!(matches!(
            extract_command("hello bot"),
            Err(AppError::NotAddressed)
        ));
        assert!(matches!(extract_command(""), Err(AppError::NotAddressed)));
    }

    #[test]
    fn prefix_match_is_case_insensitive() {
        assert_eq!(extract_command("BoT turn blue").unwrap(), "turn blue");
    }
}
