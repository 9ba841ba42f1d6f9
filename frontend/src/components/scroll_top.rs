use yew::prelude::*;

use crate::nav::Navigator;
use crate::scroll::use_scroll_top_visible;
use crate::viewport::BrowserViewport;

#[function_component(ScrollTopButton)]
pub fn scroll_top_button() -> Html {
    let visible = use_scroll_top_visible();
    let onclick = Callback::from(|_: MouseEvent| Navigator::scroll_to_top(&BrowserViewport));

    html! {
        <button
            class={classes!("scroll-top", visible.then(|| "visible"))}
            onclick={onclick}
            aria-label="Scroll to top"
        >
            {"↑"}
        </button>
    }
}
