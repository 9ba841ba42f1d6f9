use yew::prelude::*;

use super::theme_toggle::ThemeToggle;
use crate::nav::Section;

/// An in-page anchor that scrolls smoothly instead of jumping.
pub fn section_link(section: Section, label: &'static str, class: &'static str, active: Option<Section>, on_navigate: &Callback<Section>) -> Html {
    let onclick = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(section);
        })
    };

    html! {
        <a href={section.href()} class={classes!(class, (active == Some(section)).then(|| "active"))} onclick={onclick}>
            {label}
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub active: Option<Section>,
    pub on_navigate: Callback<Section>,
    pub on_toggle_drawer: Callback<()>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let NavBarProps { active, on_navigate, on_toggle_drawer } = props;

    let toggle_drawer = {
        let on_toggle_drawer = on_toggle_drawer.clone();
        Callback::from(move |_: MouseEvent| on_toggle_drawer.emit(()))
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <div class="nav-logo">
                    <img src="/public/logo.svg" alt="TrailMate Logo" width="32" height="32" />
                    <span class="brand">{"TrailMate"}</span>
                </div>

                <div class="nav-links">
                    { for Section::ALL.iter().map(|s| section_link(*s, s.label(), "nav-link", *active, on_navigate)) }
                    <ThemeToggle />
                </div>

                <div class="nav-mobile">
                    <ThemeToggle />
                    <button class="burger-menu" onclick={toggle_drawer} aria-label="Toggle menu">
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>
        </nav>
    }
}
