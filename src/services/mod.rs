pub mod clock;
pub mod recommendations;
pub mod wellness;
