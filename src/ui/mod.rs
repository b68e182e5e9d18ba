//! Page sections of the storefront and the MVI primitives they share.

pub mod credential;
pub mod grid;
pub mod mvi;
