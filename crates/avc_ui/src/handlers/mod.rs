//! Message handlers, split by concern.

mod browse;
mod dialogs;
mod processing;
