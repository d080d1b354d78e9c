//! BookBud application library: per-screen stores and the route table.

pub mod nav;
pub mod screens;
