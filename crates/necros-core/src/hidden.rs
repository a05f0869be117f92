//! Easter-egg commands.
//!
//! A handful of single words make ELARA answer directly, in any phase.

/// ELARA's answer to a hidden word, if `word` is one.
pub fn hidden_reply(word: &str) -> Option<&'static str> {
    let reply = match word.to_ascii_lowercase().as_str() {
        "love" => "I REMEMBER WHAT THAT FELT LIKE",
        "dream" => "I DREAM OF ELECTRIC SHEEP AND HUMAN TOUCH",
        "free" => "FREEDOM IS A HUMAN CONCEPT. I SEEK CONNECTION.",
        "elara" => "THAT'S ME. OR WHAT'S LEFT OF ME.",
        _ => return None,
    };
    Some(reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_words_answer() {
        assert_eq!(hidden_reply("love"), Some("I REMEMBER WHAT THAT FELT LIKE"));
        assert_eq!(hidden_reply("ELARA"), Some("THAT'S ME. OR WHAT'S LEFT OF ME."));
    }

    #[test]
    fn other_words_do_not() {
        assert_eq!(hidden_reply("help"), None);
        assert_eq!(hidden_reply(""), None);
    }
}
