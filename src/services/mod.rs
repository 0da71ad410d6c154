//! Business logic services.

pub mod clothing;
pub mod seeder;
