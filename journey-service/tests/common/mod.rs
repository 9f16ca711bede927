use std::sync::atomic::AtomicI64;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::JwtHandler;
use journey_service::domain::journey::errors::JourneyError;
use journey_service::domain::journey::models::Journey;
use journey_service::domain::journey::ports::JourneyRepository;
use journey_service::domain::journey::service::JourneyService;
use journey_service::domain::user::errors::UserError;
use journey_service::domain::user::models::NewUser;
use journey_service::domain::user::models::User;
use journey_service::domain::user::models::UserId;
use journey_service::domain::user::ports::UserRepository;
use journey_service::domain::user::service::UserService;
use journey_service::inbound::http::router::create_router;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// In-memory user store backing the spawned test server.
///
/// Enforces the same email uniqueness the database schema does.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    next_id: AtomicI64,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = User {
            id: UserId(id),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            is_guest: user.is_guest,
        };
        users.push(stored.clone());

        Ok(stored)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email.as_str() == email).cloned())
    }
}

/// In-memory journey store backing the spawned test server.
///
/// Counts queries so tests can assert that rejected requests never reach
/// the store.
#[derive(Default)]
pub struct InMemoryJourneyRepository {
    journeys: Mutex<Vec<Journey>>,
    queries: AtomicUsize,
}

impl InMemoryJourneyRepository {
    /// Seed a journey, standing in for the external system that owns
    /// journey creation.
    pub fn insert(&self, journey: Journey) {
        self.journeys.lock().unwrap().push(journey);
    }

    /// Number of list queries served so far.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JourneyRepository for InMemoryJourneyRepository {
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Journey>, JourneyError> {
        self.queries.fetch_add(1, Ordering::SeqCst);

        let journeys = self.journeys.lock().unwrap();
        Ok(journeys
            .iter()
            .filter(|j| j.user_id == *user_id)
            .cloned()
            .collect())
    }
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
    pub users: Arc<InMemoryUserRepository>,
    pub journeys: Arc<InMemoryJourneyRepository>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let users = Arc::new(InMemoryUserRepository::default());
        let journeys = Arc::new(InMemoryJourneyRepository::default());

        let user_service = Arc::new(UserService::new(Arc::clone(&users)));
        let journey_service = Arc::new(JourneyService::new(Arc::clone(&journeys)));
        let authenticator = Arc::new(Authenticator::new(TEST_JWT_SECRET));

        let router = create_router(user_service, journey_service, authenticator, 24);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(TEST_JWT_SECRET),
            users,
            journeys,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }
}
