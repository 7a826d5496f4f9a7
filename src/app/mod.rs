//! Core application logic: widget state, pointer interaction, event handling.

pub mod action;
pub mod button;
pub mod counter;
pub mod event;
pub mod handler;
pub mod state;
