use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier of a content record.
///
/// Ids are assigned by the store at creation time and never change afterwards.
/// The nil UUID is reserved: stores return it from `delete` when no record was
/// affected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(Uuid);

impl ContentId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    /// The "no record affected" id.
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for ContentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl From<Uuid> for ContentId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

/// A media item of the catalog.
///
/// Only `id`, `title` and `genre_list` carry behaviour; the remaining
/// descriptive fields are stored and returned untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub id: ContentId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Running time in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub genre_list: Vec<String>,
}

impl Content {
    /// An entity with the given id and nothing else set.
    pub fn empty(id: ContentId) -> Self {
        Self {
            id,
            title: None,
            subtitle: None,
            description: None,
            image_url: None,
            duration: None,
            start_time: None,
            end_time: None,
            genre_list: Vec::new(),
        }
    }

    /// Case-insensitive substring match on the title. Untitled content never matches.
    pub fn title_contains(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title
            .as_deref()
            .map(|title| title.to_lowercase().contains(&needle))
            .unwrap_or(false)
    }

    /// Case-insensitive exact match against any genre tag.
    pub fn has_genre(&self, genre: &str) -> bool {
        contains_genre(&self.genre_list, genre)
    }
}

fn contains_genre(genres: &[String], genre: &str) -> bool {
    let folded = genre.to_lowercase();
    genres.iter().any(|g| g.to_lowercase() == folded)
}

/// Collapses tags that differ only by case, keeping the first spelling and
/// the original order.
pub fn normalize_genres<I, S>(genres: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = Vec::new();
    for genre in genres {
        let genre = genre.into();
        if !contains_genre(&out, &genre) {
            out.push(genre);
        }
    }
    out
}

/// `current ∪ additions`. Tags already present (ignoring case) keep their
/// stored spelling.
pub fn genre_union(current: &[String], additions: &[String]) -> Vec<String> {
    normalize_genres(current.iter().chain(additions.iter()).cloned())
}

/// `current \ removals`, comparing case-insensitively.
pub fn genre_difference(current: &[String], removals: &[String]) -> Vec<String> {
    normalize_genres(
        current
            .iter()
            .filter(|g| !contains_genre(removals, g))
            .cloned(),
    )
}
