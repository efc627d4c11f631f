// Composition root for the employee time tracker.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the remote time entry source.
// - Wire the source into the use case handlers.
// - Expose the HTTP router to the binary.

pub mod config;
pub mod http;
pub mod state;
