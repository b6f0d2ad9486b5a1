//! SeaORM adapters. Each returns raw `DbErr`; repos translate.

pub mod assignments_sea;
pub mod players_sea;
pub mod questions_sea;
