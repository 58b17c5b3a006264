// Skill gap pipeline: classify → filter → prioritize → attach courses.
// Pure functions only; handlers.rs is the HTTP edge.

pub mod classifier;
pub mod courses;
pub mod gap_filter;
pub mod handlers;
pub mod learning_path;
pub mod priority;
