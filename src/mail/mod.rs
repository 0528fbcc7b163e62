pub mod message;
pub mod sample;

pub use message::{format_relative_time, Account, Address, Message};
pub use sample::{sample_accounts, sample_messages};
