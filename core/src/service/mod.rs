pub mod calculator;
pub mod daily_footprint_service;
pub mod dto;
pub mod eco_action_service;
pub mod tracking_service;
