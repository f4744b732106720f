use std::fmt::Display;

use log::warn;

/// The last good value from a data source, plus the current failure if any.
///
/// A failed load never discards data that was already shown.
#[derive(Clone, Debug, PartialEq)]
pub struct Feed<T> {
    name: String,
    value: Option<T>,
    error: Option<String>,
}

impl<T> Feed<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Feed { name: name.into(), value: None, error: None }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.value.is_some()
    }

    /// Record the outcome of a load.
    ///
    /// Success replaces the value and clears the error. Failure keeps the
    /// prior value and records the error message.
    pub fn apply<E: Display>(&mut self, result: Result<T, E>) -> &mut Self {
        match result {
            Ok(value) => {
                self.value = Some(value);
                self.error = None;
            }
            Err(err) => {
                warn!("{} feed failed: {}", self.name, err);
                self.error = Some(err.to_string());
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::player::load_players_json;

    #[test]
    fn test_success_then_failure_keeps_value() {
        let mut feed: Feed<Vec<u32>> = Feed::new("players");
        assert!(!feed.is_loaded());

        feed.apply(Ok::<_, String>(vec![1, 2, 3]));
        assert_eq!(feed.value(), Some(&vec![1, 2, 3]));
        assert_eq!(feed.error(), None);

        feed.apply(Err("connection refused"));
        assert_eq!(feed.value(), Some(&vec![1, 2, 3]));
        assert_eq!(feed.error(), Some("connection refused"));

        feed.apply(Ok::<_, String>(vec![4]));
        assert_eq!(feed.value(), Some(&vec![4]));
        assert_eq!(feed.error(), None);
    }

    #[test]
    fn test_failure_before_any_success() {
        let mut feed = Feed::new("players");
        feed.apply(load_players_json("not json"));
        assert!(!feed.is_loaded());
        assert!(feed.error().unwrap().starts_with("JSON error"));
        assert_eq!(feed.name(), "players");
    }

    #[test]
    fn test_engine_error_message() {
        let mut feed: Feed<()> = Feed::new("params");
        feed.apply(Err(EngineError::InvalidSeason { label: "abc".to_string() }));
        assert_eq!(feed.error(), Some("Invalid season label \"abc\""));
    }
}
