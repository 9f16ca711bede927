pub mod journey;
pub mod user;

pub use journey::PostgresJourneyRepository;
pub use user::PostgresUserRepository;
