mod ids;
mod user;

pub use ids::UserId;
pub use user::{CreateUser, Role, UserProfile, UserRecord, DEFAULT_BRANCH, DEFAULT_CLASS_NAME};
