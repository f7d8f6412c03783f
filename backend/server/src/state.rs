use std::sync::Arc;

use reqwest::Client;

use super::config::Config;

pub struct State {
    pub config: Config,
    pub http_client: Client,
}

impl State {
    pub fn new(config: Config) -> Result<Arc<Self>, reqwest::Error> {
        let http_client = Client::builder()
            .timeout(config.upstream_timeout)
            .build()?;

        Ok(Arc::new(Self {
            config,
            http_client,
        }))
    }
}
