use gloo_storage::{LocalStorage, Storage};
use querybook_core::DomainError;
use querybook_core::theme::{CUSTOM_THEME_KEY, CUSTOM_THEME_NAME, CustomColors, THEME_KEY, ThemePreference};
use wasm_bindgen::JsValue;

fn storage_error(key: &str, err: JsValue) -> DomainError {
    let detail = err.as_string().unwrap_or_else(|| format!("{:?}", err));
    DomainError::Storage(format!("{}: {}", key, detail))
}

fn read_raw(key: &str) -> Result<Option<String>, DomainError> {
    LocalStorage::raw()
        .get_item(key)
        .map_err(|err| storage_error(key, err))
}

fn write_raw(key: &str, value: &str) -> Result<(), DomainError> {
    LocalStorage::raw()
        .set_item(key, value)
        .map_err(|err| storage_error(key, err))
}

/// Rebuilds a preference from the stored strings. The theme name is kept as
/// a bare string; only the custom colour record is JSON, and it is read only
/// when the name selects it.
pub fn decode_theme(name: Option<&str>, custom: Option<&str>) -> Result<ThemePreference, DomainError> {
    let colors = match (name.map(str::trim), custom) {
        (Some(CUSTOM_THEME_NAME), Some(json)) => Some(
            serde_json::from_str::<CustomColors>(json)
                .map_err(|e| DomainError::Storage(format!("{}: {}", CUSTOM_THEME_KEY, e)))?,
        ),
        _ => None,
    };
    ThemePreference::restore(name, colors)
}

/// Values to write under the name and custom-colour keys.
pub fn encode_theme(preference: &ThemePreference) -> Result<(String, Option<String>), DomainError> {
    let custom = match preference {
        ThemePreference::Custom(colors) => Some(
            serde_json::to_string(colors)
                .map_err(|e| DomainError::Storage(format!("{}: {}", CUSTOM_THEME_KEY, e)))?,
        ),
        ThemePreference::Preset(_) => None,
    };
    Ok((preference.storage_name(), custom))
}

/// Reads the saved theme. A missing entry gives the default; anything
/// unreadable is reported so the caller can tell the reader.
pub fn load_theme() -> Result<ThemePreference, DomainError> {
    let name = read_raw(THEME_KEY)?;
    let custom = read_raw(CUSTOM_THEME_KEY)?;
    decode_theme(name.as_deref(), custom.as_deref())
}

pub fn save_theme(preference: &ThemePreference) -> Result<(), DomainError> {
    let (name, custom) = encode_theme(preference)?;
    write_raw(THEME_KEY, &name)?;
    if let Some(json) = custom {
        write_raw(CUSTOM_THEME_KEY, &json)?;
    }
    Ok(())
}
