use anyhow::Result;

use crate::chat::{ChatSession, SessionConfig};
use crate::config::{ConfigManager, ResolveOptions, resolve_config};

pub struct ChatOptions {
    pub mode: Option<String>,
    pub endpoint: Option<String>,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let config = load_session_config(options)?;
    let mut session = ChatSession::new(config);
    session.run().await
}

fn load_session_config(options: ChatOptions) -> Result<SessionConfig> {
    let manager = ConfigManager::new();
    let file_config = manager.load_or_default();

    let resolve_options = ResolveOptions {
        mode: options.mode,
        endpoint: options.endpoint,
    };
    let resolved = resolve_config(&resolve_options, &file_config)?;

    Ok(SessionConfig::new(resolved.endpoint, resolved.mode))
}
