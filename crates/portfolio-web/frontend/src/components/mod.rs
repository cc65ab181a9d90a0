pub mod about;
pub mod backdrop;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod icon;
pub mod skills;
pub mod ui;
