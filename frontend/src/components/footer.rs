use yew::prelude::*;

/// Heading shown when no title is passed
pub const DEFAULT_FOOTER_TITLE: &str = "임의 푸터";

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    #[prop_or(AttrValue::Static(DEFAULT_FOOTER_TITLE))]
    pub title: AttrValue,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="footer">
            <h1>{props.title.to_string()}</h1>
            <p>{"© 2024 Mickle Muckle. All rights reserved."}</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_default_title() {
        let props = yew::props!(FooterProps {});
        assert_eq!(props.title, AttrValue::Static(DEFAULT_FOOTER_TITLE));
        assert_eq!(props.title.as_str(), "임의 푸터");
    }
}
