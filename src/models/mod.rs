pub mod hit;
pub mod message;

pub use hit::PageHit;
pub use message::MessageRecord;
