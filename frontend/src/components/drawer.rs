use yew::prelude::*;

use super::navbar::section_link;
use super::theme_toggle::ThemeToggle;
use crate::nav::Section;

#[derive(Properties, PartialEq)]
pub struct MobileDrawerProps {
    pub open: bool,
    pub active: Option<Section>,
    pub on_navigate: Callback<Section>,
    pub on_close: Callback<()>,
}

#[function_component(MobileDrawer)]
pub fn mobile_drawer(props: &MobileDrawerProps) -> Html {
    let MobileDrawerProps { open, active, on_navigate, on_close } = props;

    let close = {
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    // Clicks inside the panel must not reach the overlay.
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class={classes!("drawer-overlay", open.then(|| "open"))} onclick={close.clone()}>
            <aside id="mobile-menu" class={classes!("drawer", open.then(|| "open"))} onclick={keep_open}>
                <div class="drawer-header">
                    <span class="brand">{"TrailMate"}</span>
                    <button class="drawer-close" onclick={close} aria-label="Close menu">{"✕"}</button>
                </div>

                <div class="drawer-links">
                    { for Section::ALL.iter().map(|s| section_link(*s, s.label(), "drawer-link", *active, on_navigate)) }
                </div>

                <div class="drawer-footer">
                    <p>{"Dark Mode"}</p>
                    <ThemeToggle />
                </div>
            </aside>
        </div>
    }
}
