use std::sync::Arc;

use models::Content;

pub const STORY_TOML: &str = include_str!("../res/story.toml");

lazy_static::lazy_static! {
    pub static ref STORY: Arc<Content> = Arc::new(
        Content::from_toml_str(STORY_TOML).expect("bundled story content is valid")
    );
}

/// Shared handle to the bundled story.
pub fn story() -> Arc<Content> {
    Arc::clone(&STORY)
}
