use crate::domain::content::ContentId;
use crate::domain::content_id::ContentIdGenerator;
use uuid::Uuid;

/// Random (v4) UUID ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidContentIdGenerator;

impl ContentIdGenerator for UuidContentIdGenerator {
    fn generate(&self) -> ContentId {
        ContentId::new(Uuid::new_v4())
    }
}
