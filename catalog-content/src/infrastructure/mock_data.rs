//! Seed records loaded into a store at construction.

use chrono::{TimeZone, Utc};

use crate::domain::content::Content;
use crate::domain::content_id::ContentIdGenerator;
use crate::domain::mapper::{ContentInput, ContentMapper};

struct Seed {
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
    duration: u32,
    year: i32,
    genres: &'static [&'static str],
}

const SEEDS: &[Seed] = &[
    Seed {
        title: "Broadcast News",
        subtitle: "It's what's happening behind the news",
        description: "A love triangle inside a network newsroom.",
        duration: 133,
        year: 1987,
        genres: &["Comedy", "Drama", "Romance"],
    },
    Seed {
        title: "Castaway Cove",
        subtitle: "Nobody leaves the island",
        description: "Survivors of a shipwreck build a society from scratch.",
        duration: 48,
        year: 2019,
        genres: &["Adventure", "Drama"],
    },
    Seed {
        title: "Midnight Signal",
        subtitle: "Someone is listening",
        description: "A radio host receives calls from a missing child.",
        duration: 104,
        year: 2021,
        genres: &["Horror", "Thriller"],
    },
    Seed {
        title: "Orbital",
        subtitle: "Three hundred days above the clouds",
        description: "Documentary following a crew aboard a space station.",
        duration: 92,
        year: 2016,
        genres: &["Documentary", "Sci-Fi"],
    },
    Seed {
        title: "The Last Kitchen",
        subtitle: "One service left",
        description: "A chef prepares the final dinner of a closing restaurant.",
        duration: 117,
        year: 2023,
        genres: &["Drama"],
    },
];

/// Builds the seed catalog with ids from `ids`, mapped through `mapper`.
pub fn generate_mocks<M, G>(mapper: &M, ids: &G) -> Vec<Content>
where
    M: ContentMapper + ?Sized,
    G: ContentIdGenerator + ?Sized,
{
    SEEDS
        .iter()
        .map(|seed| {
            let start = Utc
                .with_ymd_and_hms(seed.year, 1, 1, 20, 0, 0)
                .single();
            let end = start.map(|s| s + chrono::Duration::minutes(i64::from(seed.duration)));
            let input = ContentInput {
                title: Some(seed.title.to_string()),
                subtitle: Some(seed.subtitle.to_string()),
                description: Some(seed.description.to_string()),
                image_url: None,
                duration: Some(seed.duration),
                start_time: start,
                end_time: end,
                genre_list: Some(seed.genres.iter().map(|g| g.to_string()).collect()),
            };
            mapper.to_entity(ids.generate(), &input)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mapper::DefaultContentMapper;
    use crate::infrastructure::content_id::UuidContentIdGenerator;
    use std::collections::HashSet;

    #[test]
    fn test_mocks_have_unique_ids_and_titles() {
        let mocks = generate_mocks(&DefaultContentMapper, &UuidContentIdGenerator);
        assert_eq!(mocks.len(), SEEDS.len());

        let ids: HashSet<_> = mocks.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), mocks.len());
        assert!(mocks.iter().all(|c| c.title.is_some()));
        assert!(mocks.iter().all(|c| c.start_time < c.end_time));
    }
}
