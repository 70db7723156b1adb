pub mod components;
pub mod homepage;
pub mod layout;
pub mod question;
pub mod quiz;
pub mod set;
pub mod settings;

pub use layout::page;
