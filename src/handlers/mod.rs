pub mod health;
pub mod hits;
pub mod messages;

pub use health::{health_check, readiness_check};
pub use hits::visit_index;
pub use messages::echo_message;
