use crate::browser;
use crate::components::banner::Notifier;
use crate::storage;
use dioxus::prelude::*;
use querybook_core::theme::{CustomColors, ThemePalette, ThemePreference, ThemePreset};
use tracing::{debug, warn};

/// Writes the palette into the CSS variables the stylesheet reads.
pub fn apply_palette(palette: &ThemePalette) {
    for (name, value) in palette.css_variables() {
        if let Err(err) = browser::set_root_property(name, &value) {
            warn!(error = %err, variable = name, "could not set theme variable");
        }
    }
}

#[component]
pub fn ThemePanel(preference: Signal<ThemePreference>) -> Element {
    let mut preference = preference;
    let mut notifier = use_context::<Notifier>();
    let mut open = use_signal(|| false);

    let saved = match &*preference.peek() {
        ThemePreference::Custom(colors) => colors.clone(),
        ThemePreference::Preset(_) => CustomColors::default(),
    };
    let mut primary = use_signal(|| saved.primary.clone());
    let mut accent = use_signal(|| saved.accent.clone());
    let mut background = use_signal(|| saved.background.clone());

    let choose = use_callback(move |next: ThemePreference| {
        if let Err(err) = next.palette() {
            notifier.report_domain(&err);
            return;
        }
        debug!(theme = %next.storage_name(), "theme selected");
        if let Err(err) = storage::save_theme(&next) {
            notifier.report_domain(&err);
        }
        preference.set(next);
    });

    let on_apply = move |_| {
        choose.call(ThemePreference::Custom(CustomColors {
            primary: primary(),
            accent: accent(),
            background: background(),
        }));
    };

    let on_reset = move |_| {
        choose.call(ThemePreference::Preset(ThemePreset::Excel));
        let defaults = CustomColors::default();
        primary.set(defaults.primary);
        accent.set(defaults.accent);
        background.set(defaults.background);
    };

    let current = preference();
    let panel_class = if open() { "theme-panel open" } else { "theme-panel" };

    rsx! {
        button {
            id: "themeToggle",
            class: "theme-toggle btn btn-excel",
            title: "Customize theme",
            onclick: move |_| open.toggle(),
            i { class: "fas fa-palette" }
        }
        div { id: "themePanel", class: "{panel_class}",
            h6 { class: "mb-3", "Theme" }
            div { class: "d-flex gap-2 mb-3",
                for preset in ThemePreset::ALL {
                    button {
                        key: "{preset}",
                        class: if current.is_active(preset) { "theme-preset active" } else { "theme-preset" },
                        "data-theme": "{preset}",
                        title: preset.label(),
                        style: "background: {preset.palette().primary};",
                        onclick: move |_| choose.call(ThemePreference::Preset(preset)),
                    }
                }
            }
            div { class: "mb-2",
                label { r#for: "primaryColor", class: "form-label small", "Primary" }
                input {
                    id: "primaryColor",
                    class: "form-control form-control-color",
                    r#type: "color",
                    value: "{primary}",
                    oninput: move |evt| primary.set(evt.value()),
                }
            }
            div { class: "mb-2",
                label { r#for: "accentColor", class: "form-label small", "Accent" }
                input {
                    id: "accentColor",
                    class: "form-control form-control-color",
                    r#type: "color",
                    value: "{accent}",
                    oninput: move |evt| accent.set(evt.value()),
                }
            }
            div { class: "mb-3",
                label { r#for: "backgroundColor", class: "form-label small", "Background" }
                input {
                    id: "backgroundColor",
                    class: "form-control form-control-color",
                    r#type: "color",
                    value: "{background}",
                    oninput: move |evt| background.set(evt.value()),
                }
            }
            div { class: "d-flex gap-2",
                button { id: "applyTheme", class: "btn btn-excel btn-sm", onclick: on_apply, "Apply" }
                button { id: "resetTheme", class: "btn btn-outline-secondary btn-sm", onclick: on_reset, "Reset" }
            }
        }
    }
}
