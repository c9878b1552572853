use yew::prelude::*;
use chrono::NaiveDate;
use shared::{CalendarFocusDate, CalendarGrid, DailyStatisticRecord, TierThresholds};
use web_sys::MouseEvent;
use crate::services::date_utils::{format_amount, month_name};

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub focus: CalendarFocusDate,
    pub selected_date: NaiveDate,
    pub today: NaiveDate,
    pub statistics: Vec<DailyStatisticRecord>,
    pub thresholds: TierThresholds,
    pub on_date_click: Callback<NaiveDate>,
    pub on_prev_month: Callback<MouseEvent>,
    pub on_next_month: Callback<MouseEvent>,
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let grid = CalendarGrid::build(
        props.focus,
        &props.statistics,
        props.selected_date,
        props.today,
        &props.thresholds,
    );

    html! {
        <div class="calendar">
            <div class="calendar-header">
                <button class="calendar-nav" onclick={props.on_prev_month.clone()} title="Previous Month">
                    {"◀"}
                </button>
                <div class="calendar-title">
                    {format!("{} {}", month_name(props.focus.month), props.focus.year)}
                </div>
                <button class="calendar-nav" onclick={props.on_next_month.clone()} title="Next Month">
                    {"▶"}
                </button>
            </div>

            <div class="calendar-weekdays">
                <div class="weekday sunday">{"Sun"}</div>
                <div class="weekday">{"Mon"}</div>
                <div class="weekday">{"Tue"}</div>
                <div class="weekday">{"Wed"}</div>
                <div class="weekday">{"Thu"}</div>
                <div class="weekday">{"Fri"}</div>
                <div class="weekday">{"Sat"}</div>
            </div>

            <div class="calendar-body">
                {for grid.weeks.iter().map(|week| html! {
                    <div class="calendar-row">
                        {for week.days.iter().map(|cell| {
                            let date = cell.date;
                            let onclick = {
                                let on_date_click = props.on_date_click.clone();
                                Callback::from(move |_: MouseEvent| on_date_click.emit(date))
                            };

                            // Only days with a target carry a tooltip
                            let tooltip = cell.tier.map(|_| format!(
                                "{} / {}",
                                format_amount(cell.totals.total_amount),
                                format_amount(cell.totals.target_amount)
                            ));

                            html! {
                                <div class={cell.css_class()} {onclick} title={tooltip}>
                                    <div class="day-number">{cell.day}</div>
                                    {if let Some(tier) = cell.tier {
                                        html! {
                                            <img
                                                class={classes!("spending-coin", tier.css_class())}
                                                src={tier.icon_path()}
                                                alt={tier.css_class()}
                                            />
                                        }
                                    } else {
                                        html! {}
                                    }}
                                </div>
                            }
                        })}
                    </div>
                })}
            </div>
        </div>
    }
}
