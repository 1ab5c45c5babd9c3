pub mod user;
pub mod reward;
pub mod leaderboard;
pub mod activity;
pub mod error;

pub use user::*;
pub use reward::*;
pub use leaderboard::*;
pub use activity::*;
pub use error::*;
