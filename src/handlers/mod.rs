pub mod homepage;
pub mod question;
pub mod quiz;
pub mod set;
pub mod settings;
