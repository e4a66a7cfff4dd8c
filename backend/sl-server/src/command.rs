use std::sync::LazyLock;

use regex::Regex;

static CREATE_STORY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)^\s*create\s+story\s+with\s+title\s+"(?P<title>.+?)"\s+and\s+description\s+"(?P<description>.*?)"\s*[.!?]?\s*$"#,
    )
    .expect("CREATE_STORY is a valid regex literal")
});

/// One line of console input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Blank,
    Quit,
    CreateStory { title: String, description: String },
    Unrecognised,
}

impl ConsoleCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return ConsoleCommand::Blank;
        }

        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            return ConsoleCommand::Quit;
        }

        match CREATE_STORY.captures(line) {
            Some(captures) => ConsoleCommand::CreateStory {
                title: captures["title"].to_string(),
                description: captures["description"].to_string(),
            },
            None => ConsoleCommand::Unrecognised,
        }
    }
}
