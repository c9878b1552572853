pub mod calendar;
pub mod common_dialog;
pub mod daily_statistics;
pub mod footer;
pub mod spending_entry;
pub mod spending_legend;

pub use calendar::Calendar;
pub use common_dialog::{AlarmId, CommonDialog};
pub use daily_statistics::DailyStatistics;
pub use footer::Footer;
