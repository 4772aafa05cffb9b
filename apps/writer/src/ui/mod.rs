// Form-based writer UI: server-rendered page plus the POST handlers behind its buttons.

pub mod handlers;
pub mod pages;
