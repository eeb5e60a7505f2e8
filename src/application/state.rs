use crate::domain::traits::{ConfigStore, FeedSource, Repository};

/// Process-wide state handed to every command handler
pub struct State {
    pub repo: Box<dyn Repository>,
    pub config: Box<dyn ConfigStore>,
    pub fetcher: Box<dyn FeedSource>,
}

impl State {
    pub fn new(
        repo: impl Repository + 'static,
        config: impl ConfigStore + 'static,
        fetcher: impl FeedSource + 'static,
    ) -> Self {
        Self {
            repo: Box::new(repo),
            config: Box::new(config),
            fetcher: Box::new(fetcher),
        }
    }
}
