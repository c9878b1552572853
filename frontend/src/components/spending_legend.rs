use yew::prelude::*;
use shared::SPENDING_LEGEND;

#[function_component(SpendingLegend)]
pub fn spending_legend() -> Html {
    html! {
        <div class="spending-legend">
            {for SPENDING_LEGEND.iter().map(|entry| html! {
                <div class="legend-entry">
                    <img
                        class={classes!("spending-coin", entry.tier.css_class())}
                        src={entry.tier.icon_path()}
                        alt={entry.tier.css_class()}
                    />
                    <p>{entry.label}</p>
                </div>
            })}
        </div>
    }
}
