//! Session-facing services layered over the plan and projection modules.

pub mod services;
