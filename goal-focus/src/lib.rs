//! Goal and todo state for Goal Focus.
//!
//! [`FocusWorkspace`] mirrors the signed-in user's goals and todos held by a
//! remote store. All mutations go through the outbound ports in [`ports`].
//! New todos without a goal can be matched to one by a [`GoalMatcher`].

mod auth;
mod error;
pub mod matcher;
pub mod models;
mod notice;
pub mod ports;
pub mod view;
mod workspace;

#[cfg(test)]
mod mock;

pub use auth::*;
pub use error::*;
pub use matcher::{ExactTitleMatcher, GoalMatcher, SubstringMatcher};
pub use notice::*;
pub use workspace::*;
