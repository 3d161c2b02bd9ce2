//! Command implementations
//!
//! Each submodule implements one CLI command's `run` function. Shared
//! project-resolution logic lives in [`helpers`].

pub mod completions;
pub mod doctor;
pub mod helpers;
pub mod init;
pub mod show;
pub mod validate;
pub mod version;
