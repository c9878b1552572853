use yew::prelude::*;
use chrono::NaiveDate;
use shared::{DailyStatisticsState, FetchCompletion};
use wasm_bindgen_futures::spawn_local;
use crate::services::api::ApiClient;
use crate::services::date_utils::get_current_date;
use crate::services::logging::Logger;

const COMPONENT: &str = "daily-statistics";

pub struct UseDailyStatisticsResult {
    pub state: DailyStatisticsState,
    pub actions: UseDailyStatisticsActions,
}

#[derive(Clone, PartialEq)]
pub struct UseDailyStatisticsActions {
    pub select_date: Callback<NaiveDate>,
    pub refresh: Callback<()>,
}

/// Owns the daily statistics of `user_num` and the selected date.
///
/// A fetch runs on mount and whenever the user changes, unless
/// `fetch_enabled` is false. Without a logged-in user nothing is requested
/// and the state goes back to loading.
#[hook]
pub fn use_daily_statistics(
    api_client: &ApiClient,
    user_num: Option<u64>,
    fetch_enabled: bool,
    logger: Logger,
) -> UseDailyStatisticsResult {
    let store = use_mut_ref(|| DailyStatisticsState::new(get_current_date()));
    let is_mounted = use_mut_ref(|| true);
    let trigger = use_force_update();

    let refresh = {
        let store = store.clone();
        let is_mounted = is_mounted.clone();
        let trigger = trigger.clone();

        use_callback(
            (user_num, api_client.clone(), logger),
            move |_: (), (user_num, api_client, logger): &(Option<u64>, ApiClient, Logger)| {
                let Some(user_num) = *user_num else {
                    store.borrow_mut().reset_loading();
                    trigger.force_update();
                    logger.debug_with_component(COMPONENT, "No logged-in user, skipping fetch");
                    return;
                };

                let ticket = store.borrow_mut().begin_fetch();
                trigger.force_update();
                logger.debug_with_component(
                    COMPONENT,
                    &format!("Fetching statistics for user {} (generation {})", user_num, ticket.generation()),
                );

                let api_client = api_client.clone();
                let logger = *logger;
                let store = store.clone();
                let is_mounted = is_mounted.clone();
                let trigger = trigger.clone();

                spawn_local(async move {
                    let result = api_client.fetch_daily_statistics(user_num).await;
                    let completion = store.borrow_mut().finish_fetch(ticket, result);

                    match completion {
                        FetchCompletion::Applied { record_count } => {
                            logger.info_with_component(
                                COMPONENT,
                                &format!("Loaded {} records for user {}", record_count, user_num),
                            );
                        }
                        FetchCompletion::Failed(e) => {
                            logger.error_with_component(
                                COMPONENT,
                                &format!("Failed to fetch daily statistics: {}", e),
                            );
                        }
                        FetchCompletion::Stale { ticket, current } => {
                            logger.debug_with_component(
                                COMPONENT,
                                &format!(
                                    "Dropped response of generation {}, generation {} is newer",
                                    ticket.generation(),
                                    current.generation()
                                ),
                            );
                            return;
                        }
                    }

                    if *is_mounted.borrow() {
                        trigger.force_update();
                    }
                });
            },
        )
    };

    let select_date = {
        let store = store.clone();
        let trigger = trigger.clone();
        use_callback((), move |date: NaiveDate, _| {
            store.borrow_mut().select_date(date);
            trigger.force_update();
        })
    };

    // Fetch on mount and whenever the user changes
    use_effect_with((user_num, fetch_enabled), {
        let refresh = refresh.clone();
        move |(_, fetch_enabled): &(Option<u64>, bool)| {
            if *fetch_enabled {
                refresh.emit(());
            }
            || ()
        }
    });

    use_effect_with((), {
        let is_mounted = is_mounted.clone();
        move |_| {
            move || {
                *is_mounted.borrow_mut() = false;
            }
        }
    });

    let state = store.borrow().clone();

    UseDailyStatisticsResult {
        state,
        actions: UseDailyStatisticsActions { select_date, refresh },
    }
}
