pub const PROMPT_INTRO: &str = "\nWelcome to the Virtual Car Agent!";
pub const PROMPT_EXAMPLES: &str = "
I can help you find a car that matches your preferences.

You can tell me what you're looking for in a car. For example:
- I want a Toyota from 2018 or newer, automatic, up to $50,000.
- Show me a red Honda with less than 50,000 km.
- Any electric car below $100,000.
";
pub const PROMPT_ASK: &str = "What kind of car are you looking for?";
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a valid car search query.";

pub fn print_banner() {
    println!("{}", PROMPT_INTRO);
    println!("{}", PROMPT_EXAMPLES);
}

/// Returns the trimmed query, taken from the command line when given
pub fn prompt_query(cli_arg_value: &Option<String>, interactive: bool) -> String {
    let raw = match cli_arg_value {
        Some(value) => value.clone(),
        None if interactive => dialoguer::Input::<String>::new()
            .with_prompt(PROMPT_ASK)
            .allow_empty(true)
            .show_default(false)
            .interact_text()
            .unwrap_or_default(),
        None => String::new(),
    };
    raw.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_query_uses_argument() {
        let query = prompt_query(&Some("  red Honda  ".to_string()), false);
        assert_eq!(query, "red Honda");
    }

    #[test]
    fn test_prompt_query_without_argument_non_interactive() {
        assert_eq!(prompt_query(&None, false), "");
    }

    #[test]
    fn test_examples_mention_each_filter_kind() {
        assert!(PROMPT_EXAMPLES.contains("Toyota from 2018"));
        assert!(PROMPT_EXAMPLES.contains("less than 50,000 km"));
        assert!(PROMPT_EXAMPLES.contains("electric car below $100,000"));
    }
}
