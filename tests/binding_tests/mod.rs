
pub mod combining;
pub mod direct;
pub mod indirect;
pub mod samples;
