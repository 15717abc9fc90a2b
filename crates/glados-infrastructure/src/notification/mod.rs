mod pushplus;
mod sender_factory;

pub use pushplus::{PushPlusSender, PUSHPLUS_ENDPOINT};
pub use sender_factory::create_sender;
