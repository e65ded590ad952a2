use std::fmt;

use crate::topics::TopicCatalog;

/// A rejected token from a reselection, reported back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionIssue {
    NotANumber(String),
    OutOfRange { value: String, max: usize },
}

impl fmt::Display for SelectionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionIssue::NotANumber(token) => {
                write!(f, "Invalid input: '{token}' is not a number.")
            }
            SelectionIssue::OutOfRange { value, max } => {
                write!(f, "Invalid number: {value}. Please choose between 1 and {max}.")
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSelection {
    pub topics: Vec<String>,
    pub issues: Vec<SelectionIssue>,
}

enum Token<'a> {
    Blank,
    Topic(&'a str),
    Rejected(SelectionIssue),
}

fn classify<'a>(raw: &str, catalog: &'a TopicCatalog) -> Token<'a> {
    let token = raw.trim();
    if token.is_empty() {
        return Token::Blank;
    }
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Token::Rejected(SelectionIssue::NotANumber(token.to_string()));
    }

    // Digit strings too long for usize are out of range as well.
    match token.parse::<usize>().ok().and_then(|number| catalog.get(number)) {
        Some(topic) => Token::Topic(topic),
        None => Token::Rejected(SelectionIssue::OutOfRange {
            value: token.to_string(),
            max: catalog.len(),
        }),
    }
}

/// Parses a comma-separated list of menu numbers, reporting every rejected token.
///
/// Repeated numbers are collapsed on purpose: a topic is generated for and searched
/// once, at the position it was first chosen, so `3,3,1` selects two topics.
pub fn parse_selection(input: &str, catalog: &TopicCatalog) -> ParsedSelection {
    let mut parsed = ParsedSelection::default();

    for raw in input.split(',') {
        match classify(raw, catalog) {
            Token::Blank => {}
            Token::Topic(topic) => {
                if !parsed.topics.iter().any(|chosen| chosen == topic) {
                    parsed.topics.push(topic.to_string());
                }
            }
            Token::Rejected(issue) => parsed.issues.push(issue),
        }
    }

    parsed
}

/// Initial-menu parsing: rejected tokens are dropped without comment.
pub fn parse_selection_quietly(input: &str, catalog: &TopicCatalog) -> Vec<String> {
    parse_selection(input, catalog).topics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_parse_drops_invalid_tokens() {
        let catalog = TopicCatalog::default();
        let topics = parse_selection_quietly("1,3,11,abc", &catalog);
        assert_eq!(topics, vec!["Web Development", "Data Science"]);
    }

    #[test]
    fn tokens_are_trimmed() {
        let catalog = TopicCatalog::default();
        let topics = parse_selection_quietly(" 2 ,  10\n", &catalog);
        assert_eq!(topics, vec!["Mobile App Development", "Internet of Things (IoT)"]);
    }

    #[test]
    fn repeated_numbers_collapse() {
        let catalog = TopicCatalog::default();
        let topics = parse_selection_quietly("3,3,1,3", &catalog);
        assert_eq!(topics, vec!["Data Science", "Web Development"]);
    }

    #[test]
    fn repeated_numbers_are_not_reported_on_reselect() {
        let catalog = TopicCatalog::default();
        let parsed = parse_selection("7,2,7", &catalog);
        assert_eq!(parsed.topics, vec!["Cloud Computing", "Mobile App Development"]);
        assert!(parsed.issues.is_empty());
    }

    #[test]
    fn empty_input_selects_nothing() {
        let catalog = TopicCatalog::default();
        let parsed = parse_selection("", &catalog);
        assert!(parsed.topics.is_empty());
        assert!(parsed.issues.is_empty());
    }

    #[test]
    fn parse_distinguishes_non_numeric_from_out_of_range() {
        let catalog = TopicCatalog::default();
        let parsed = parse_selection("4,x,0,12,-1,99999999999999999999999", &catalog);

        assert_eq!(parsed.topics, vec!["Machine Learning"]);
        assert_eq!(
            parsed.issues,
            vec![
                SelectionIssue::NotANumber("x".to_string()),
                SelectionIssue::OutOfRange {
                    value: "0".to_string(),
                    max: 10
                },
                SelectionIssue::OutOfRange {
                    value: "12".to_string(),
                    max: 10
                },
                SelectionIssue::NotANumber("-1".to_string()),
                SelectionIssue::OutOfRange {
                    value: "99999999999999999999999".to_string(),
                    max: 10
                },
            ]
        );
    }

    #[test]
    fn issues_render_user_messages() {
        assert_eq!(
            SelectionIssue::NotANumber("abc".to_string()).to_string(),
            "Invalid input: 'abc' is not a number."
        );
        assert_eq!(
            SelectionIssue::OutOfRange {
                value: "11".to_string(),
                max: 10
            }
            .to_string(),
            "Invalid number: 11. Please choose between 1 and 10."
        );
    }
}
