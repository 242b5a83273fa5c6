//! Floating windows, each implementing `AppWindow`.

pub mod bank_view;
pub mod schedule_view;
