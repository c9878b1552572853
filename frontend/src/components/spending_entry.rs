use yew::prelude::*;
use shared::DailyStatisticRecord;
use crate::services::date_utils::{format_amount, format_date_for_display};

#[derive(Properties, PartialEq)]
pub struct SpendingEntryProps {
    pub record: DailyStatisticRecord,
}

/// Summary line for one card approval
#[function_component(SpendingEntry)]
pub fn spending_entry(props: &SpendingEntryProps) -> Html {
    let record = &props.record;

    html! {
        <div class="spending-entry">
            {if let Some(url) = &record.card_image_url {
                html! { <img class="card-image" src={url.clone()} alt="card" /> }
            } else {
                html! { <div class="card-image placeholder"></div> }
            }}
            <div class="spending-details">
                <div class="merchant-name">
                    {record.merchant_name.clone().unwrap_or_else(|| "가맹점 정보 없음".to_string())}
                </div>
                {if let Some(card_name) = &record.card_name {
                    html! { <div class="card-name">{card_name}</div> }
                } else {
                    html! {}
                }}
                <div class="spending-date">{format_date_for_display(&record.date)}</div>
            </div>
            <div class="spending-amount">{format_amount(record.amount)}</div>
        </div>
    }
}
