pub mod manager;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod store;

pub use manager::{Database, DatabaseError};
pub use memory::MemoryStore;
pub use models::goal::{Goal, GoalPatch, NewGoal};
pub use models::user::{NewUser, User};
pub use postgres::{PgGoalStore, PgUserStore};
pub use store::{GoalStore, UserStore};
