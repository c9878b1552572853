pub mod use_calendar;
pub mod use_daily_statistics;
pub mod use_element_height;
