use crate::eval::Outcome;

pub const DEFAULT_MESSAGE: &str = "Boa! Continue trabalhando com dedicação!";

const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Encouragement after a commit. An empty `message` uses the default line.
pub fn effort_message(message: &str, colored: bool) -> Outcome {
    let text = if message.is_empty() { DEFAULT_MESSAGE } else { message };
    if colored {
        Outcome::pass(format!("{GREEN}{text}{RESET}\n"))
    } else {
        Outcome::pass(format!("{text}\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_line_in_green() {
        let out = effort_message("", true);
        assert!(out.is_success());
        assert_eq!(
            out.message,
            "\x1b[32mBoa! Continue trabalhando com dedicação!\x1b[0m\n"
        );
    }

    #[test]
    fn custom_line_uncolored() {
        assert_eq!(effort_message("Keep going", false), Outcome::pass("Keep going\n"));
    }
}
