use std::collections::BTreeMap;

/// Identifies one API response: the endpoint relative path plus its query parameters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageKey {
    path: String,
    params: BTreeMap<String, String>,
}

impl PageKey {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: BTreeMap::new(),
        }
    }

    pub fn param(mut self, name: &str, value: impl ToString) -> Self {
        self.params.insert(name.to_owned(), value.to_string());
        self
    }

    /// Requests only the number of games the user has played.
    pub fn game_count(username: &str) -> Self {
        Self::new(Self::games_path(username)).param("nb", 0)
    }

    /// Requests the 1 based `page` of the user's games.
    pub fn games_page(username: &str, page: usize, page_size: usize) -> Self {
        Self::new(Self::games_path(username))
            .param("nb", page_size)
            .param("page", page)
            .param("with_opening", 1)
            .param("with_moves", 1)
    }

    fn games_path(username: &str) -> String {
        format!("user/{}/games", username)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Vec<(&str, &str)> {
        self.params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    /// A file name unique to this key, e.g. `user_bob_games_nb=100_page=2_with_moves=1`.
    pub fn file_stem(&self) -> String {
        let path = self.path.replace('/', "_");
        let mut stem = if self.params.is_empty() {
            path
        } else {
            let params = self
                .params
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join("_");
            format!("{}_{}", path, params)
        };

        stem.retain(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '=' | '.'));
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_key() {
        let key = PageKey::game_count("bob");

        assert_eq!(key.path(), "user/bob/games");
        assert_eq!(key.query(), vec![("nb", "0")]);
        assert_eq!(key.file_stem(), "user_bob_games_nb=0");
    }

    #[test]
    fn test_page_key_params_are_sorted() {
        let key = PageKey::games_page("bob", 3, 100);

        assert_eq!(
            key.file_stem(),
            "user_bob_games_nb=100_page=3_with_moves=1_with_opening=1"
        );
    }

    #[test]
    fn test_distinct_pages_have_distinct_stems() {
        assert_ne!(
            PageKey::games_page("bob", 1, 100).file_stem(),
            PageKey::games_page("bob", 2, 100).file_stem()
        );
    }

    #[test]
    fn test_stem_strips_path_characters() {
        let key = PageKey::new("user/../../etc/games");

        assert!(!key.file_stem().contains('/'));
    }
}
