// SPDX-License-Identifier: MPL-2.0
use vitashelf::config::{self, Config};
use vitashelf::i18n::fluent::I18n;
use vitashelf::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        theme_mode: Some(ThemeMode::System),
        reduce_motion: Some(false),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn cli_lang_overrides_config() {
    let config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    let i18n = I18n::new(Some("fr".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "fr");
}

#[test]
fn translations_cover_overlay_keys_in_all_locales() {
    let keys = [
        "app-title",
        "toast-order-placed",
        "cart-sheet-title",
        "product-sheet-title",
        "order-sheet-title",
        "settings-sheet-title",
        "settings-reduce-motion",
    ];
    for locale in ["en-US", "fr"] {
        let config = Config {
            language: Some(locale.to_string()),
            ..Config::default()
        };
        let i18n = I18n::new(None, &config);
        for key in keys {
            assert!(
                !i18n.tr(key).starts_with("MISSING:"),
                "{key} missing in {locale}"
            );
        }
        // Keys with interpolation need their arguments supplied.
        let cart_toast = i18n.tr_with_args("toast-cart-added", &[("name", "Omega-3")]);
        assert!(cart_toast.contains("Omega-3"), "bad toast in {locale}");
    }
}

#[test]
fn theme_mode_round_trips_through_toml() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
        let config = Config {
            theme_mode: Some(mode),
            ..Config::default()
        };
        config::save_to_path(&config, &path).expect("save");
        let loaded = config::load_from_path(&path).expect("load");
        assert_eq!(loaded.theme_mode, Some(mode));
    }
}
