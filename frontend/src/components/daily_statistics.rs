use yew::prelude::*;
use chrono::NaiveDate;
use shared::PanelView;
use crate::components::calendar::Calendar;
use crate::components::spending_entry::SpendingEntry;
use crate::components::spending_legend::SpendingLegend;
use crate::hooks::use_calendar::use_calendar;
use crate::hooks::use_daily_statistics::use_daily_statistics;
use crate::hooks::use_element_height::use_element_height;
use crate::services::api::ApiClient;
use crate::services::config::AppConfig;
use crate::services::date_utils::get_current_date;
use crate::services::logging::Logger;

/// List height used until the calendar has been measured
const DEFAULT_LIST_HEIGHT: i32 = 541;

#[derive(Properties, PartialEq)]
pub struct DailyStatisticsProps {
    /// Logged-in user; statistics are only fetched when present
    pub user_num: Option<u64>,
    /// Set to false to show the calendar without loading statistics
    #[prop_or(true)]
    pub fetch_enabled: bool,
}

#[function_component(DailyStatistics)]
pub fn daily_statistics(props: &DailyStatisticsProps) -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let logger = Logger::new(config.log_level);
    let api_client = use_memo(config.api_base_url.clone(), |base_url| {
        ApiClient::with_base_url(base_url.clone())
    });

    let today = get_current_date();
    let statistics = use_daily_statistics(&api_client, props.user_num, props.fetch_enabled, logger);
    let calendar = use_calendar(today);

    let calendar_ref = use_node_ref();
    let calendar_height = use_element_height(calendar_ref.clone(), DEFAULT_LIST_HEIGHT, logger);

    let on_date_click = {
        let select_date = statistics.actions.select_date.clone();
        let remeasure = calendar_height.remeasure.clone();
        Callback::from(move |date: NaiveDate| {
            select_date.emit(date);
            remeasure.emit(());
        })
    };

    let state = &statistics.state;
    let list = match state.view() {
        PanelView::Loading => html! {
            <div class="empty-box">
                <div class="loading">{"Loading..."}</div>
            </div>
        },
        PanelView::Loaded(records) => html! {
            <>
                {for records.into_iter().enumerate().map(|(index, record)| html! {
                    <SpendingEntry key={format!("{}-{}", index, record.identifier)} record={record.clone()} />
                })}
            </>
        },
        PanelView::Empty => html! {
            <div class="empty-box">
                <p>{"소비 내역이 없습니다."}</p>
            </div>
        },
    };

    html! {
        <div class="daily-statistics">
            <div class="calendar-box">
                <div ref={calendar_ref}>
                    <Calendar
                        focus={calendar.focus}
                        selected_date={state.selected_date()}
                        today={today}
                        statistics={state.records().to_vec()}
                        thresholds={config.tier_thresholds}
                        on_date_click={on_date_click}
                        on_prev_month={calendar.actions.prev_month.clone()}
                        on_next_month={calendar.actions.next_month.clone()}
                    />
                </div>
                <SpendingLegend />
            </div>

            <div class="list-box" style={format!("height: {}px;", calendar_height.height)}>
                {list}
            </div>
        </div>
    }
}
