pub mod client;
pub mod fetch;
pub mod parse;
pub mod request;
