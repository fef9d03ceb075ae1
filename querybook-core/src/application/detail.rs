use crate::application::post_store::{Direction, PostStore};

/// Single-slot holder for the post shown in the detail overlay.
///
/// There is no way to hold two ids at once, so at most one overlay can be
/// rendered from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailState {
    current: Option<String>,
}

impl DetailState {
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Shows `id`, replacing whatever was open. Returns the replaced id.
    pub fn open(&mut self, id: impl Into<String>) -> Option<String> {
        self.current.replace(id.into())
    }

    /// Returns whether anything was open. Closing twice is harmless.
    pub fn close(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// Id of the neighbour to move to, if there is one.
    pub fn adjacent_target(&self, store: &PostStore, direction: Direction) -> Option<String> {
        let current = self.current.as_deref()?;
        store
            .adjacent(current, direction)
            .map(|post| post.id.clone())
    }

    /// Closes the overlay and returns the post to open once the exit
    /// animation has run. At either boundary nothing changes.
    pub fn navigate(&mut self, store: &PostStore, direction: Direction) -> Option<String> {
        let target = self.adjacent_target(store, direction)?;
        self.close();
        Some(target)
    }
}

/// What a key press inside the overlay asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Close,
    Navigate(Direction),
}

impl KeyCommand {
    /// Maps a DOM `KeyboardEvent.key` name.
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "Escape" | "Esc" => Some(KeyCommand::Close),
            "ArrowLeft" => Some(KeyCommand::Navigate(Direction::Previous)),
            "ArrowRight" => Some(KeyCommand::Navigate(Direction::Next)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post::Post;

    fn store() -> PostStore {
        let posts = ["first", "middle", "last"]
            .iter()
            .map(|id| Post {
                id: id.to_string(),
                title: id.to_uppercase(),
                date: "2024-01-01".into(),
                category: "tip".into(),
                excerpt: String::new(),
                content: String::new(),
                tags: Vec::new(),
                thumbnail: None,
            })
            .collect();
        PostStore::new(posts)
    }

    #[test]
    fn opening_twice_leaves_one_overlay_with_the_latest_post() {
        let mut detail = DetailState::default();
        assert_eq!(detail.open("first"), None);
        assert_eq!(detail.open("last"), Some("first".to_string()));
        assert_eq!(detail.current(), Some("last"));
    }

    #[test]
    fn closing_twice_is_a_no_op() {
        let mut detail = DetailState::default();
        detail.open("middle");
        assert!(detail.close());
        assert!(!detail.close());
        assert!(!detail.is_open());
    }

    #[test]
    fn previous_on_first_post_changes_nothing() {
        let store = store();
        let mut detail = DetailState::default();
        detail.open("first");
        assert_eq!(detail.navigate(&store, Direction::Previous), None);
        assert_eq!(detail.current(), Some("first"));
    }

    #[test]
    fn next_on_last_post_changes_nothing() {
        let store = store();
        let mut detail = DetailState::default();
        detail.open("last");
        assert_eq!(detail.navigate(&store, Direction::Next), None);
        assert_eq!(detail.current(), Some("last"));
    }

    #[test]
    fn navigate_closes_and_hands_back_the_neighbour() {
        let store = store();
        let mut detail = DetailState::default();
        detail.open("middle");
        assert_eq!(detail.navigate(&store, Direction::Next), Some("last".to_string()));
        assert!(!detail.is_open());
    }

    #[test]
    fn navigate_while_closed_does_nothing() {
        let mut detail = DetailState::default();
        assert_eq!(detail.navigate(&store(), Direction::Next), None);
    }

    #[test]
    fn key_names_map_to_commands() {
        assert_eq!(KeyCommand::from_key_name("Escape"), Some(KeyCommand::Close));
        assert_eq!(
            KeyCommand::from_key_name("ArrowLeft"),
            Some(KeyCommand::Navigate(Direction::Previous))
        );
        assert_eq!(
            KeyCommand::from_key_name("ArrowRight"),
            Some(KeyCommand::Navigate(Direction::Next))
        );
        assert_eq!(KeyCommand::from_key_name("Enter"), None);
    }
}
