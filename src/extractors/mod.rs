pub mod amazon;
pub mod generic;
pub mod structured_data;
pub mod target;
pub mod walmart;
