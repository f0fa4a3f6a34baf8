//! Route handlers organized by domain.

pub mod action;
pub mod health;
pub mod notification;
pub mod ws;
