//! Small reusable widgets shared by the views.

pub mod chips;
pub mod stat_cards;
