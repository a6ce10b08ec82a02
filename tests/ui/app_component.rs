use crate::common::{test_config, FakeSource};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pokedeck::constants::ERROR_DUPLICATE_POKEMON_NAME;
use pokedeck::logger::Logger;
use pokedeck::ui::app_component::AppState;
use pokedeck::ui::core::{DialogType, Screen};
use pokedeck::ui::AppComponent;
use std::sync::Arc;

fn app() -> AppComponent {
    AppComponent::new(&test_config(), Arc::new(FakeSource::new(Ok(Vec::new()))), Logger::new())
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
fn test_app_state_default() {
    let state = AppState::default();
    assert_eq!(state.active_screen, Screen::Lookup);
    assert!(!state.mounted);
}

#[test]
fn test_configured_default_screen() {
    let mut config = test_config();
    config.ui.default_screen = "form".to_string();
    let app = AppComponent::new(&config, Arc::new(FakeSource::new(Ok(Vec::new()))), Logger::new());
    assert_eq!(app.active_screen(), Screen::Form);
}

#[test]
fn test_tab_cycles_screens() {
    let mut app = app();
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.active_screen(), Screen::Color);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.active_screen(), Screen::Roster);
    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.active_screen(), Screen::Lookup);
}

#[test]
fn test_number_keys_only_switch_outside_text_screens() {
    let mut app = app();
    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.active_screen(), Screen::Form);

    // the form captures text, so digits are typed
    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.active_screen(), Screen::Form);
    assert_eq!(app.form().field().value(), "1");
}

#[test]
fn test_quit_keys() {
    let mut app = app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = app_on(Screen::Color);
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());
    assert_eq!(app.color().swatch().value(), "q");
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

fn app_on(screen: Screen) -> AppComponent {
    let mut app = app();
    app.dispatch(pokedeck::ui::core::Action::SwitchScreen(screen));
    app
}

#[test]
fn test_dialog_takes_keys_first() {
    let mut app = app();
    press(&mut app, KeyCode::F(1));
    assert_eq!(app.dialog().dialog_type, Some(DialogType::Help));

    // Esc closes the dialog instead of quitting
    press(&mut app, KeyCode::Esc);
    assert!(!app.dialog().is_visible());
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit());
}

#[test]
fn test_form_scenario() {
    let mut app = app_on(Screen::Form);

    type_text(&mut app, "Kevin");
    assert!(app.form().field().can_submit());
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.form().field().submitted(), Some("Kevin"));

    for _ in 0.."Kevin".len() {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "Bowser");
    assert!(app.form().field().has_error());
    assert!(!app.form().field().can_submit());
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.form().field().submitted(), Some("Kevin"));
}

#[test]
fn test_roster_add_and_delete() {
    let mut app = app_on(Screen::Roster);

    type_text(&mut app, "Squirtle");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.roster().names().names()[0], "Squirtle");
    assert_eq!(app.roster().input(), "");
    assert!(app.roster().error().is_none());

    // blank submission keeps the list and reports the error
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.roster().names().len(), 4);
    assert_eq!(app.roster().error(), Some("Please add a Pokemon name"));

    // highlighted entry is the first one
    press(&mut app, KeyCode::Delete);
    assert_eq!(app.roster().names().names(), ["Pikachu", "Charmander", "Bulbasaur"]);
}

#[test]
fn test_roster_rejects_name_already_listed() {
    let mut app = app_on(Screen::Roster);

    type_text(&mut app, "Bulbasaur");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.roster().names().len(), 3);
    assert_eq!(app.roster().error(), Some(ERROR_DUPLICATE_POKEMON_NAME));
    assert_eq!(app.roster().input(), "Bulbasaur");
}

#[test]
fn test_roster_record_variant() {
    let mut app = app_on(Screen::Roster);
    app.handle_key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL));

    type_text(&mut app, "Eevee");
    press(&mut app, KeyCode::Enter);
    let first = &app.roster().records().entries()[0];
    assert_eq!((first.id, first.name.as_str()), (4, "Eevee"));

    press(&mut app, KeyCode::Delete);
    assert!(app.roster().records().entries().iter().all(|e| e.id != 4));
    // the name roster is untouched
    assert_eq!(app.roster().names().len(), 3);
}

#[test]
fn test_logs_dialog_shows_logger_entries() {
    let logger = Logger::new();
    let mut app = AppComponent::new(&test_config(), Arc::new(FakeSource::new(Ok(Vec::new()))), logger.clone());
    logger.log("hello from test".to_string());

    app.handle_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));
    assert_eq!(app.dialog().dialog_type, Some(DialogType::Logs));
}
