pub mod agenda;
pub mod calendar;
pub mod config;
pub mod events;
pub mod schedule;
pub mod state;
pub mod ui;
