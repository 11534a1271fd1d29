pub mod serialization;
pub mod session;

pub use serialization::SessionSnapshot;
pub use session::{ActiveRound, GameSession, RoundOutcome};
