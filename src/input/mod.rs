// Input plumbing: where lines come from and how ignore lists are loaded.

pub mod ignore_list;
pub mod lines;

pub use lines::LineSource;
