//! Application contexts for HTTP-level tests

use super::database::TestDatabase;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use workforce_api::config::{AuthConfig, Config, Environment};
use workforce_api::server::{AppState, HttpServer};
use workforce_api::services::{MailMessage, Mailer};
use workforce_api::storage::StorageLayer;
use workforce_api::utils::clock::ManualClock;
use workforce_api::utils::error::Result;

/// Mailer that keeps every message in memory
#[derive(Debug, Default)]
pub struct OutboxMailer {
    sent: Mutex<Vec<MailMessage>>,
    delivered: Notify,
}

impl OutboxMailer {
    pub fn sent(&self) -> Vec<MailMessage> {
        self.sent.lock().clone()
    }

    /// Reset token from the most recent reset link
    pub fn last_reset_token(&self) -> Option<String> {
        let sent = self.sent.lock();
        let html = &sent.last()?.html;
        let (_, rest) = html.split_once("token=")?;
        Some(rest.chars().take_while(|c| *c != '"').collect())
    }

    /// Wait until the `count`-th message has been delivered
    ///
    /// Reset mails are sent from a background task, after the response.
    pub async fn wait_for(&self, count: usize) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while self.sent.lock().len() < count {
                self.delivered.notified().await;
            }
        })
        .await
        .expect("mail was not delivered");
    }

    /// Reset token of the `count`-th delivered message
    pub async fn reset_token(&self, count: usize) -> String {
        self.wait_for(count).await;
        self.last_reset_token().expect("no reset link in mail")
    }
}

#[async_trait]
impl Mailer for OutboxMailer {
    async fn send(&self, message: &MailMessage) -> Result<()> {
        self.sent.lock().push(message.clone());
        self.delivered.notify_one();
        Ok(())
    }

    fn name(&self) -> &'static str {
        "outbox"
    }
}

/// Wired application state plus handles on its clock and mailer
pub struct TestContext {
    pub state: AppState,
    pub clock: Arc<ManualClock>,
    pub outbox: Arc<OutboxMailer>,
}

impl TestContext {
    /// Context over the in-memory store
    pub fn in_memory() -> Self {
        Self::with_storage(StorageLayer::in_memory())
    }

    /// Context over a migrated `sqlite::memory:` database
    pub async fn sqlite() -> Self {
        let db = TestDatabase::new().await;
        Self::with_storage(StorageLayer::from_database(db.db_arc()))
    }

    pub fn with_storage(storage: StorageLayer) -> Self {
        let clock = Arc::new(ManualClock::starting_now());
        let outbox = Arc::new(OutboxMailer::default());
        let state = AppState::new(test_config(), storage, outbox.clone(), clock.clone())
            .expect("Failed to build application state");

        Self {
            state,
            clock,
            outbox,
        }
    }
}

/// The actix application over a state, ready for `test::init_service`
///
/// Takes the state by value so the returned service borrows nothing.
pub fn test_app(
    state: AppState,
) -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    HttpServer::create_app(actix_web::web::Data::new(state))
}

/// Default configuration with fresh signing keys and the test environment selected
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.auth = AuthConfig::with_generated_secrets();
    config.server.environment = Environment::Test;
    config.server.public_url = "http://workforce.test".to_string();
    config
}
