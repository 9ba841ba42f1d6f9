use yew::prelude::*;

use crate::theme::{Theme, ThemeContext};

/// Accessible label and icon for the button while `theme` is showing.
fn toggle_face(theme: Theme) -> (&'static str, &'static str) {
    match theme {
        Theme::Dark => ("Switch to light mode", "☀"),
        Theme::Light => ("Switch to dark mode", "☾"),
    }
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let ctx = use_context::<ThemeContext>();
    let Some(ctx) = ctx else {
        // Rendered before the provider has resolved the theme.
        return html! {
            <button class="theme-toggle placeholder" aria-hidden="true">
                <span class="sr-only">{"Theme toggle placeholder"}</span>
            </button>
        };
    };

    let onclick = {
        let toggle = ctx.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };
    let (label, icon) = toggle_face(ctx.theme);

    html! {
        <button class="theme-toggle" onclick={onclick} aria-label={label}>
            {icon}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_offers_the_other_theme() {
        assert_eq!(toggle_face(Theme::Light).0, "Switch to dark mode");
        assert_eq!(toggle_face(Theme::Dark).0, "Switch to light mode");
        assert_ne!(toggle_face(Theme::Light).1, toggle_face(Theme::Dark).1);
    }
}
