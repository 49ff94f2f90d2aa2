//! # Core Actor Framework
//!
//! This module defines the generic building blocks for the record stores.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait that all stored record types must implement.
//! - [`ResourceActor`]: The generic actor that owns a keyed collection of records.
//! - [`ResourceClient`]: The generic client for communicating with actors.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed, NotFound, AlreadyExists).

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, DTOs, and Actions)
// =============================================================================

/// Trait that any stored record must implement to be managed by [`ResourceActor`].
///
/// # Natural Keys
/// Records in this system already carry their identity (a tracking number, a
/// session id), so the entity reports its own key through [`ActorEntity::id`]
/// instead of the actor generating one. Creating a record whose key is already
/// present fails with [`FrameworkError::AlreadyExists`].
///
/// # Async & Context
/// Hooks are `#[async_trait]` and receive a `Context` injected at `run()` time,
/// so dependencies can be wired after the actor is constructed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique key for this record (e.g., a tracking number).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new record.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing record.
    type Update: Send + Sync + Debug;

    /// Enum representing record-specific operations (e.g., `Rate`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this record.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the natural key of this record.
    fn id(&self) -> Self::Id;

    /// Construct the full record from its creation payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the record is constructed and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the record is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom record-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map to the CRUD lifecycle plus an `Action` variant for
/// record-specific logic (rating a delivery, appending a chat turn).
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns a keyed collection of records.
///
/// Each actor processes its own messages *sequentially*, so the `store` needs no
/// `Mutex`. For chat sessions this is also what serialises concurrent writes to
/// the same session.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new actor and the client that feeds it.
    ///
    /// `buffer_size` is the mailbox capacity; callers wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "DeliveryRecord")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    match T::from_create_params(params) {
                        Ok(mut item) => {
                            let id = item.id();
                            if self.store.contains_key(&id) {
                                warn!(entity_type, %id, "Already exists");
                                let _ = respond_to
                                    .send(Err(FrameworkError::AlreadyExists(id.to_string())));
                                continue;
                            }
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `ResourceActor`.
///
/// Holds only a sender, so cloning is cheap and clones can be shared across tasks.
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Create { params, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Update {
                id,
                update,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Delete { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Action {
                id,
                action,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        key: String,
        hits: u32,
    }

    #[derive(Debug)]
    struct CounterCreate {
        key: String,
    }

    #[derive(Debug)]
    struct CounterUpdate {
        hits: u32,
    }

    #[derive(Debug)]
    enum CounterAction {
        Bump,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("counter error: {0}")]
    struct CounterError(String);

    #[async_trait]
    impl ActorEntity for Counter {
        type Id = String;
        type Create = CounterCreate;
        type Update = CounterUpdate;
        type Action = CounterAction;
        type ActionResult = u32;
        type Context = ();
        type Error = CounterError;

        fn id(&self) -> String {
            self.key.clone()
        }

        fn from_create_params(params: CounterCreate) -> Result<Self, CounterError> {
            if params.key.is_empty() {
                return Err(CounterError("empty key".into()));
            }
            Ok(Self {
                key: params.key,
                hits: 0,
            })
        }

        async fn on_update(&mut self, update: CounterUpdate, _ctx: &()) -> Result<(), CounterError> {
            self.hits = update.hits;
            Ok(())
        }

        async fn handle_action(&mut self, action: CounterAction, _ctx: &()) -> Result<u32, CounterError> {
            match action {
                CounterAction::Bump => {
                    self.hits += 1;
                    Ok(self.hits)
                }
            }
        }
    }

    #[tokio::test]
    async fn test_natural_key_lifecycle() {
        let (actor, client) = ResourceActor::<Counter>::new(10);
        let handle = tokio::spawn(actor.run(()));

        let id = client
            .create(CounterCreate { key: "FDE1".into() })
            .await
            .unwrap();
        assert_eq!(id, "FDE1");

        assert_eq!(client.perform_action(id.clone(), CounterAction::Bump).await.unwrap(), 1);
        assert_eq!(client.perform_action(id.clone(), CounterAction::Bump).await.unwrap(), 2);

        let updated = client.update(id.clone(), CounterUpdate { hits: 7 }).await.unwrap();
        assert_eq!(updated.hits, 7);

        client.delete(id.clone()).await.unwrap();
        assert!(client.get(id).await.unwrap().is_none());

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_duplicate_key_is_rejected() {
        let (actor, client) = ResourceActor::<Counter>::new(10);
        tokio::spawn(actor.run(()));

        client.create(CounterCreate { key: "A".into() }).await.unwrap();
        let second = client.create(CounterCreate { key: "A".into() }).await;
        assert!(matches!(second, Err(FrameworkError::AlreadyExists(ref k)) if k == "A"));
    }

    #[tokio::test]
    async fn test_missing_and_invalid_records() {
        let (actor, client) = ResourceActor::<Counter>::new(10);
        tokio::spawn(actor.run(()));

        let missing = client.perform_action("nope".into(), CounterAction::Bump).await;
        assert!(matches!(missing, Err(FrameworkError::NotFound(_))));

        let invalid = client.create(CounterCreate { key: String::new() }).await;
        assert!(matches!(invalid, Err(FrameworkError::EntityError(_))));
    }

    #[tokio::test]
    async fn test_closed_actor_reports_error() {
        let (actor, client) = ResourceActor::<Counter>::new(10);
        drop(actor);
        let result = client.get("A".into()).await;
        assert!(matches!(result, Err(FrameworkError::ActorClosed)));
    }
}
