use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A playable game in the catalog.
///
/// Serialized with camelCase keys (`isFeatured`, `createdAt`) and `type`
/// for [`Game::game_type`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Location of the playable resource (iframe source or emulator path).
    pub url: String,
    /// Image location.
    pub thumbnail: String,
    /// Free-form tag such as `html5`, `emulator` or `flash`.
    #[serde(rename = "type")]
    pub game_type: String,
    pub category: String,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}

/// A game candidate for insertion. The store assigns `id` and `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGame {
    pub title: String,
    pub description: String,
    pub url: String,
    pub thumbnail: String,
    #[serde(rename = "type")]
    pub game_type: String,
    pub category: String,
    #[serde(default)]
    pub is_featured: bool,
}

impl NewGame {
    /// Creates a non-featured candidate.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
        thumbnail: impl Into<String>,
        game_type: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: url.into(),
            thumbnail: thumbnail.into(),
            game_type: game_type.into(),
            category: category.into(),
            is_featured: false,
        }
    }

    /// Sets the featured flag.
    pub fn featured(mut self, is_featured: bool) -> Self {
        self.is_featured = is_featured;
        self
    }

    /// Turns the candidate into a stored record.
    pub fn into_game(self, id: i64, created_at: DateTime<Utc>) -> Game {
        Game {
            id,
            title: self.title,
            description: self.description,
            url: self.url,
            thumbnail: self.thumbnail,
            game_type: self.game_type,
            category: self.category,
            is_featured: self.is_featured,
            created_at,
        }
    }
}
