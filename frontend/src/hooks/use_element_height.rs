use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ResizeObserver};
use crate::services::logging::Logger;

pub struct UseElementHeightResult {
    /// Last measured height in pixels
    pub height: i32,
    /// Measure the element again right now
    pub remeasure: Callback<()>,
}

/// Tracks the rendered height of `node` with a `ResizeObserver`.
///
/// `fallback` is reported until the first measurement. The observer is
/// disconnected when the component unmounts.
#[hook]
pub fn use_element_height(node: NodeRef, fallback: i32, logger: Logger) -> UseElementHeightResult {
    let height = use_state(|| fallback);

    let remeasure = {
        let height = height.clone();
        use_callback(node.clone(), move |_: (), node: &NodeRef| {
            if let Some(element) = node.cast::<HtmlElement>() {
                height.set(element.offset_height());
            }
        })
    };

    use_effect_with(node, {
        let remeasure = remeasure.clone();
        move |node: &NodeRef| {
            let on_resize = Closure::<dyn FnMut()>::new(move || remeasure.emit(()));

            let observer = match (node.cast::<HtmlElement>(), ResizeObserver::new(on_resize.as_ref().unchecked_ref())) {
                (Some(element), Ok(observer)) => {
                    observer.observe(&element);
                    logger.debug_with_component("element-height", "Observing element size");
                    Some(observer)
                }
                (None, _) => {
                    logger.warn_with_component("element-height", "Element not mounted, height stays at fallback");
                    None
                }
                (_, Err(_)) => {
                    logger.warn_with_component("element-height", "ResizeObserver unavailable");
                    None
                }
            };

            move || {
                if let Some(observer) = observer {
                    observer.disconnect();
                    logger.debug_with_component("element-height", "Disconnected resize observer");
                }
                drop(on_resize);
            }
        }
    });

    UseElementHeightResult {
        height: *height,
        remeasure,
    }
}
