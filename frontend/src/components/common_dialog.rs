use yew::prelude::*;
use web_sys::MouseEvent;

#[derive(Properties, PartialEq)]
pub struct CommonDialogProps {
    pub visible: bool,
    #[prop_or(AttrValue::Static("500px"))]
    pub width: AttrValue,
    #[prop_or(AttrValue::Static("200px"))]
    pub height: AttrValue,
    #[prop_or(AttrValue::Static("450px"))]
    pub content_width: AttrValue,
    #[prop_or(AttrValue::Static("90px"))]
    pub content_height: AttrValue,
    #[prop_or(AttrValue::Static("20px"))]
    pub font_size: AttrValue,
    /// Page to open when the dialog is confirmed
    #[prop_or_default]
    pub navigate_to: Option<AttrValue>,
    #[prop_or_default]
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(CommonDialog)]
pub fn common_dialog(props: &CommonDialogProps) -> Html {
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_dialog_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_confirm_click = {
        let on_close = props.on_close.clone();
        let navigate_to = props.navigate_to.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
            if let Some(href) = &navigate_to {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(href);
                }
            }
        })
    };

    if !props.visible {
        return html! {};
    }

    html! {
        <div class="dialog-backdrop" onclick={on_backdrop_click}>
            <div
                class="dialog"
                style={format!("width: {}; height: {};", props.width, props.height)}
                onclick={on_dialog_click}
            >
                <div
                    class="dialog-content"
                    style={format!(
                        "width: {}; height: {}; font-size: {};",
                        props.content_width, props.content_height, props.font_size
                    )}
                >
                    {props.children.clone()}
                </div>
                <div class="dialog-buttons">
                    <button type="button" class="btn btn-primary" onclick={on_confirm_click}>
                        {"확인"}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AlarmIdProps {
    pub visible: bool,
    pub user_name: AttrValue,
    pub user_id: AttrValue,
    #[prop_or_default]
    pub on_close: Callback<()>,
}

/// Tells the user which ID was found for them
#[function_component(AlarmId)]
pub fn alarm_id(props: &AlarmIdProps) -> Html {
    html! {
        <CommonDialog
            visible={props.visible}
            navigate_to={AttrValue::Static("/")}
            on_close={props.on_close.clone()}
        >
            {alarm_id_message(&props.user_name, &props.user_id)}
        </CommonDialog>
    }
}

pub fn alarm_id_message(user_name: &str, user_id: &str) -> String {
    format!("{}님의 아이디는 {}입니다", user_name, user_id)
}
