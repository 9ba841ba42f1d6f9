use log::{info, Level};
use yew::prelude::*;

mod config;
mod nav;
mod scroll;
mod sink;
mod theme;
mod viewport;
mod forms {
    pub mod contact;
    pub mod machine;
    pub mod outcome;
    pub mod status;
    pub mod validation;
    pub mod waitlist;
}
mod components {
    pub mod drawer;
    pub mod navbar;
    pub mod scroll_top;
    pub mod theme_toggle;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;
use sink::SupabaseClient;
use theme::ThemeProvider;

#[function_component]
fn App() -> Html {
    let sink = use_state(SupabaseClient::from_config);

    html! {
        <ThemeProvider>
            <Landing sink={(*sink).clone()} />
        </ThemeProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    // Apply the theme before the first paint
    let theme = theme::init();
    info!("Starting TrailMate ({} theme)", theme.as_str());
    yew::Renderer::<App>::new().render();
}
