use iced::Task;
use splus_nav::preferences::{
    clear_saved_theme, save_custom_theme, save_theme_id,
};
use splus_nav::theme::{CUSTOM_THEME_ID, default_theme, find_theme};

use crate::app::{App, AppEvent};
use crate::widgets::theme_picker::{
    ThemePickerCtx, ThemePickerEffect, ThemePickerEvent,
};

pub(crate) fn route_event(
    app: &mut App,
    event: ThemePickerEvent,
) -> Task<AppEvent> {
    let ctx = ThemePickerCtx {
        active_theme: app.theme_manager.current().source(),
    };
    app.widgets
        .theme_picker
        .reduce(event, &ctx)
        .map(AppEvent::ThemePickerEffect)
}

/// Persist and apply the chosen palette.
pub(crate) fn route_effect(
    app: &mut App,
    effect: ThemePickerEffect,
) -> Task<AppEvent> {
    match effect {
        ThemePickerEffect::ApplyPreset(id) => match find_theme(&id) {
            Some(theme) => {
                save_theme_id(app.store.as_ref(), &id);
                app.theme_manager.apply(theme.clone());
            },
            None => log::warn!("unknown theme preset `{id}`"),
        },
        ThemePickerEffect::ApplyCustom(theme) => {
            save_custom_theme(app.store.as_ref(), &theme);
            save_theme_id(app.store.as_ref(), CUSTOM_THEME_ID);
            app.theme_manager.apply(theme);
        },
        ThemePickerEffect::ResetTheme => {
            clear_saved_theme(app.store.as_ref());
            app.theme_manager.apply(default_theme().clone());
        },
    }
    Task::none()
}

pub(crate) fn close(app: &mut App) -> Task<AppEvent> {
    route_event(app, ThemePickerEvent::Close)
}

#[cfg(test)]
mod tests {
    use splus_nav::preferences::{THEME_KEY, load_saved_theme_id};
    use splus_nav::storage::{KeyValueStore, MemoryStore};
    use splus_nav::theme::{
        CUSTOM_THEME_ID, CustomThemeInput, DEFAULT_THEME_ID,
        build_custom_theme,
    };

    use super::route_effect;
    use crate::app::App;
    use crate::widgets::theme_picker::ThemePickerEffect;

    fn app() -> App {
        let (app, _) = App::with_store(Box::new(MemoryStore::new()));
        app
    }

    #[test]
    fn given_preset_when_applied_then_it_is_active_and_saved() {
        let mut app = app();

        let _ = route_effect(
            &mut app,
            ThemePickerEffect::ApplyPreset(String::from("teal")),
        );

        assert_eq!(app.theme_manager.current().id(), "teal");
        assert_eq!(load_saved_theme_id(app.store.as_ref()), "teal");
    }

    #[test]
    fn given_unknown_preset_when_applied_then_active_theme_is_kept() {
        let mut app = app();

        let _ = route_effect(
            &mut app,
            ThemePickerEffect::ApplyPreset(String::from("sepia")),
        );

        assert_eq!(app.theme_manager.current().id(), DEFAULT_THEME_ID);
        assert_eq!(app.store.get(THEME_KEY).expect("read succeeds"), None);
    }

    #[test]
    fn given_custom_theme_when_applied_then_custom_id_is_saved() {
        let mut app = app();
        let custom = build_custom_theme(&CustomThemeInput {
            primary: String::from("#0f766e"),
            ..CustomThemeInput::default()
        })
        .expect("valid input");

        let _ = route_effect(&mut app, ThemePickerEffect::ApplyCustom(custom));

        assert_eq!(app.theme_manager.current().id(), CUSTOM_THEME_ID);
        assert_eq!(load_saved_theme_id(app.store.as_ref()), CUSTOM_THEME_ID);
    }

    #[test]
    fn given_saved_preset_when_reset_then_default_is_restored() {
        let mut app = app();
        let _ = route_effect(
            &mut app,
            ThemePickerEffect::ApplyPreset(String::from("rose")),
        );

        let _ = route_effect(&mut app, ThemePickerEffect::ResetTheme);

        assert_eq!(app.theme_manager.current().id(), DEFAULT_THEME_ID);
        assert_eq!(app.store.get(THEME_KEY).expect("read succeeds"), None);
    }
}
