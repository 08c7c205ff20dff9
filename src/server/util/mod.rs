pub mod body;
pub mod identifier;
