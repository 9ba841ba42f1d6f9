//! Light/dark preference shared by the whole page.
//!
//! The stored `theme` value wins; without one the OS `prefers-color-scheme`
//! decides. The result is applied as a `dark` class on `<html>`.

use std::cell::Cell;
use web_sys::window;
use yew::prelude::*;
use yew_hooks::use_mount;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Where the preference is read from, written to and shown.
pub trait ThemeBackend {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
    fn prefers_dark(&self) -> bool;
    fn apply(&self, theme: Theme);
}

pub struct ThemeStore<B> {
    backend: B,
    current: Cell<Option<Theme>>,
}

impl<B: ThemeBackend> ThemeStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            current: Cell::new(None),
        }
    }

    /// Resolves and applies the preference. Only the first call does any work.
    pub fn init(&self) -> Theme {
        if let Some(theme) = self.current.get() {
            return theme;
        }

        let stored = self.backend.load().and_then(|value| Theme::parse(&value));
        let theme = match stored {
            Some(theme) => theme,
            None if self.backend.prefers_dark() => Theme::Dark,
            None => Theme::Light,
        };
        log::info!("Theme resolved to {} (stored: {})", theme.as_str(), stored.is_some());

        self.backend.apply(theme);
        self.current.set(Some(theme));
        theme
    }

    pub fn get(&self) -> Theme {
        self.init()
    }

    pub fn toggle(&self) -> Theme {
        let next = self.init().toggled();
        self.current.set(Some(next));
        self.backend.save(next.as_str());
        self.backend.apply(next);
        next
    }

    #[cfg(test)]
    fn backend(&self) -> &B {
        &self.backend
    }
}

pub struct BrowserTheme;

impl ThemeBackend for BrowserTheme {
    fn load(&self) -> Option<String> {
        window()?
            .local_storage()
            .ok()
            .flatten()?
            .get_item(config::THEME_STORAGE_KEY)
            .ok()
            .flatten()
    }

    fn save(&self, value: &str) {
        if let Some(window) = window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(config::THEME_STORAGE_KEY, value);
            }
        }
    }

    fn prefers_dark(&self) -> bool {
        window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false)
    }

    fn apply(&self, theme: Theme) {
        if let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.class_list().toggle_with_force("dark", theme == Theme::Dark);
        }
    }
}

thread_local! {
    static STORE: ThemeStore<BrowserTheme> = ThemeStore::new(BrowserTheme);
}

pub fn init() -> Theme {
    STORE.with(|store| store.init())
}

pub fn get() -> Theme {
    STORE.with(|store| store.get())
}

pub fn toggle() -> Theme {
    STORE.with(|store| store.toggle())
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(|| None::<Theme>);

    {
        let theme = theme.clone();
        use_mount(move || theme.set(Some(get())));
    }

    let on_toggle = {
        let theme = theme.clone();
        Callback::from(move |_| theme.set(Some(toggle())))
    };

    match *theme {
        // Keep layout but hide until the preference is applied.
        None => html! {
            <div style="visibility: hidden;">{ props.children.clone() }</div>
        },
        Some(current) => html! {
            <ContextProvider<ThemeContext> context={ThemeContext { theme: current, toggle: on_toggle }}>
                { props.children.clone() }
            </ContextProvider<ThemeContext>>
        },
    }
}
