pub mod history;
pub mod identity;
pub mod notice;
pub mod state;
pub mod stats;
pub mod validation;
pub mod webhook;
