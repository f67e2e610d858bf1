pub mod calculator;
pub mod clock;
pub mod engine;
pub mod logic;
