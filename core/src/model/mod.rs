pub mod activity;
pub mod community;
pub mod daily_footprint;
pub mod emission;
