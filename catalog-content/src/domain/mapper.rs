//! Mapping between the caller-supplied input shape and the stored entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::content::{normalize_genres, Content, ContentId};

/// Input for create and update.
///
/// Every field is optional: on create a missing field takes its default, on
/// update a missing field leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre_list: Option<Vec<String>>,
}

impl ContentInput {
    /// A patch that only replaces the genre set.
    pub fn genres(genre_list: Vec<String>) -> Self {
        Self {
            genre_list: Some(genre_list),
            ..Self::default()
        }
    }
}

/// Builds and patches entities from [`ContentInput`].
pub trait ContentMapper: Send + Sync {
    /// Full entity for a freshly assigned id.
    fn to_entity(&self, id: ContentId, input: &ContentInput) -> Content;

    /// New entity where only the fields present in `input` replace those of
    /// `existing`. `existing` is left untouched.
    fn patch(&self, existing: &Content, input: &ContentInput) -> Content;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultContentMapper;

impl ContentMapper for DefaultContentMapper {
    fn to_entity(&self, id: ContentId, input: &ContentInput) -> Content {
        self.patch(&Content::empty(id), input)
    }

    fn patch(&self, existing: &Content, input: &ContentInput) -> Content {
        Content {
            id: existing.id,
            title: input.title.clone().or_else(|| existing.title.clone()),
            subtitle: input.subtitle.clone().or_else(|| existing.subtitle.clone()),
            description: input
                .description
                .clone()
                .or_else(|| existing.description.clone()),
            image_url: input
                .image_url
                .clone()
                .or_else(|| existing.image_url.clone()),
            duration: input.duration.or(existing.duration),
            start_time: input.start_time.or(existing.start_time),
            end_time: input.end_time.or(existing.end_time),
            genre_list: match &input.genre_list {
                Some(genres) => normalize_genres(genres.iter().cloned()),
                None => existing.genre_list.clone(),
            },
        }
    }
}
