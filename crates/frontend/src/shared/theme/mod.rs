//! Светлое/тёмное оформление.
//!
//! Оформление передаётся компонентам явно через контекст `AppearanceContext`,
//! который создаётся в корне приложения. Системная настройка
//! (`prefers-color-scheme`) читается один раз при старте, дальше источником
//! истины служит только контекст.

use leptos::prelude::*;
use web_sys::window;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    /// Имя для CSS-атрибута `data-appearance`
    pub fn as_str(&self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Appearance::Light => "Светлая",
            Appearance::Dark => "Тёмная",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Appearance::Light => Appearance::Dark,
            Appearance::Dark => Appearance::Light,
        }
    }

    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Appearance::Dark
        } else {
            Appearance::Light
        }
    }
}

/// Системная настройка тёмной темы
fn detect_system_appearance() -> Appearance {
    let prefers_dark = window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false);
    Appearance::from_prefers_dark(prefers_dark)
}

#[derive(Clone, Copy)]
pub struct AppearanceContext {
    appearance: RwSignal<Appearance>,
}

impl AppearanceContext {
    pub fn new(initial: Appearance) -> Self {
        Self {
            appearance: RwSignal::new(initial),
        }
    }

    /// Контекст с начальным значением из настроек системы
    pub fn detect() -> Self {
        Self::new(detect_system_appearance())
    }

    pub fn get(&self) -> Appearance {
        self.appearance.get()
    }

    pub fn is_dark(&self) -> bool {
        self.get() == Appearance::Dark
    }

    pub fn set(&self, appearance: Appearance) {
        self.appearance.set(appearance);
    }

    pub fn toggle(&self) {
        self.appearance.update(|a| *a = a.toggled());
    }
}

/// Hook to use the appearance context.
pub fn use_appearance() -> AppearanceContext {
    use_context::<AppearanceContext>()
        .expect("AppearanceContext not found. Provide it in App before rendering pages.")
}

/// Кнопка переключения оформления
#[component]
pub fn AppearanceToggle() -> impl IntoView {
    let ctx = use_appearance();

    view! {
        <button
            class="button button--icon"
            title=move || format!("Оформление: {}", ctx.get().display_name())
            on:click=move |_| ctx.toggle()
        >
            {move || if ctx.is_dark() {
                crate::shared::icons::icon("sun")
            } else {
                crate::shared::icons::icon("moon")
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Appearance::Light.toggled(), Appearance::Dark);
        assert_eq!(Appearance::Dark.toggled().toggled(), Appearance::Dark);
    }

    #[test]
    fn test_from_system_preference() {
        assert_eq!(Appearance::from_prefers_dark(true), Appearance::Dark);
        assert_eq!(Appearance::from_prefers_dark(false).as_str(), "light");
    }
}
