// Multi-job comparison: validate scores → stable rank → best-match summary.

pub mod handlers;
pub mod models;
pub mod ranker;
