use crate::assistant::{RandomSource, ResponseOrchestrator};
use crate::clients::{DeliveryClient, SessionClient};
use crate::config::Config;
use crate::llm::LanguageModel;
use crate::service::ChatService;
use std::sync::Arc;
use tracing::{error, info};

/// The running support bot: the delivery and session actors plus the chat
/// service wired on top of them.
///
/// # Example
///
/// ```ignore
/// let system = SupportSystem::new(&Config::from_env()?);
/// seed_sample_deliveries(&system.deliveries).await?;
///
/// let reply = system.chat.send_message("Cek resi FDE123456789", None).await?;
///
/// system.shutdown().await?;
/// ```
pub struct SupportSystem {
    /// Client for the delivery actor
    pub deliveries: DeliveryClient,

    /// Client for the session actor
    pub sessions: SessionClient,

    pub chat: Arc<ChatService>,

    /// Task handles for the running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl SupportSystem {
    /// Starts the actors. The model client comes from `config`; without an API
    /// key every reply uses the fallback composer.
    pub fn new(config: &Config) -> Self {
        Self::with_parts(config, config.model_client(), RandomSource::default())
    }

    /// Starts the actors with an explicit model and random source.
    pub fn with_parts(
        config: &Config,
        model: Option<Arc<dyn LanguageModel>>,
        random: RandomSource,
    ) -> Self {
        let (delivery_actor, deliveries) = crate::delivery_actor::new(config.channel_buffer);
        let (session_actor, sessions) = crate::session_actor::new(config.channel_buffer);

        // Neither actor needs other actors (Context = ())
        let delivery_handle = tokio::spawn(delivery_actor.run(()));
        let session_handle = tokio::spawn(session_actor.run(()));

        let mut orchestrator = ResponseOrchestrator::new(deliveries.clone())
            .with_settings(config.model_settings())
            .with_random(random);
        if let Some(model) = model {
            info!(model = model.model_name(), "Language model configured");
            orchestrator = orchestrator.with_model(model);
        } else {
            info!("No language model configured, using rule-based replies");
        }

        let chat = ChatService::new(orchestrator, deliveries.clone(), sessions.clone())
            .with_max_message_chars(config.max_message_chars);

        Self {
            deliveries,
            sessions,
            chat: Arc::new(chat),
            handles: vec![delivery_handle, session_handle],
        }
    }

    /// Stops the actors and waits for them to exit.
    ///
    /// Actors exit once every client is dropped, so clones of the clients or
    /// of `chat` held elsewhere must be dropped first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.chat);
        drop(self.deliveries);
        drop(self.sessions);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
