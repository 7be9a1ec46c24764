pub mod content;
pub mod content_id;
pub mod mapper;

pub use content::{genre_difference, genre_union, normalize_genres, Content, ContentId};
pub use content_id::ContentIdGenerator;
pub use mapper::{ContentInput, ContentMapper, DefaultContentMapper};
