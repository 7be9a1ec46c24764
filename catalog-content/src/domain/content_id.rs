use super::content::ContentId;

/// Port producing fresh content ids for `create`.
pub trait ContentIdGenerator: Send + Sync {
    fn generate(&self) -> ContentId;
}
