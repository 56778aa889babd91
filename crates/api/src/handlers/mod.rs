pub mod application;
pub mod hours;
pub mod me;
pub mod opportunity;
pub mod organisation;
pub mod seed;
