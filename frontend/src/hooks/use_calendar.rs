use yew::prelude::*;
use shared::CalendarFocusDate;
use chrono::NaiveDate;
use web_sys::MouseEvent;

pub struct UseCalendarResult {
    pub focus: CalendarFocusDate,
    pub actions: UseCalendarActions,
}

#[derive(Clone, PartialEq)]
pub struct UseCalendarActions {
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
}

/// Month navigation for the calendar, starting at the month of `initial`
#[hook]
pub fn use_calendar(initial: NaiveDate) -> UseCalendarResult {
    let focus = use_state(|| CalendarFocusDate::containing(initial));

    // The current month is passed as the callback dependency so the
    // closures never read a stale handle value
    let prev_month = {
        let focus = focus.clone();
        use_callback(*focus, move |_: MouseEvent, current: &CalendarFocusDate| {
            focus.set(current.previous());
        })
    };

    let next_month = {
        let focus = focus.clone();
        use_callback(*focus, move |_: MouseEvent, current: &CalendarFocusDate| {
            focus.set(current.next());
        })
    };

    UseCalendarResult {
        focus: *focus,
        actions: UseCalendarActions {
            prev_month,
            next_month,
        },
    }
}
