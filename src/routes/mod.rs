pub mod chat;
pub mod generate;
pub mod health;
pub mod login;
pub mod logout;
pub mod me;
pub mod moods;
pub mod oauth;
pub mod profile;
pub mod register;
pub mod verify;
