use yew::prelude::*;
use crate::components::{DailyStatistics, Footer};
use crate::services::config::AppConfig;
use crate::services::logging::Logger;
use crate::services::session::load_user_num;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| AppConfig::from_env());
    let user_num = use_memo(config.user_storage_key.clone(), |key| load_user_num(key));

    {
        let config = config.clone();
        let user_num = *user_num;
        use_effect_with((), move |_| {
            let logger = Logger::new(config.log_level);
            logger.info_with_component(
                "app",
                &format!("Card analysis started against {}", config.api_base_url),
            );
            if user_num.is_none() {
                logger.warn_with_component("app", "No logged-in user found in storage");
            }
            || ()
        });
    }

    html! {
        <ContextProvider<AppConfig> context={(*config).clone()}>
            <main class="card-analysis">
                <section class="container">
                    <h2>{"일별 소비 통계"}</h2>
                    <DailyStatistics user_num={*user_num} />
                </section>
            </main>
            <Footer />
        </ContextProvider<AppConfig>>
    }
}
