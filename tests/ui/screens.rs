use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pokedeck::pokeapi::ListItem;
use pokedeck::store::ErrorChannel;
use pokedeck::ui::components::dialog_component::HELP_TEXT;
use pokedeck::ui::components::{AsideMenu, ColorScreen, LookupScreen, RosterScreen, RosterVariant};
use pokedeck::ui::core::{Action, Component};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_aside_selects_by_url_id() {
    let mut aside = AsideMenu::new();
    aside.update_data(&[
        ListItem::new("bulbasaur", "https://pokeapi.co/api/v2/pokemon/1/"),
        ListItem::new("pikachu", "https://pokeapi.co/api/v2/pokemon/25/"),
    ]);
    assert_eq!(aside.highlighted(), Some(0));

    aside.handle_key_events(key(KeyCode::Down));
    assert!(matches!(aside.handle_key_events(key(KeyCode::Enter)), Action::SelectPokemon(25)));

    // wraps around
    aside.handle_key_events(key(KeyCode::Down));
    assert_eq!(aside.highlighted(), Some(0));
}

#[test]
fn test_aside_ignores_unparseable_urls() {
    let mut aside = AsideMenu::new();
    aside.update_data(&[ListItem::new("glitch", "https://pokeapi.co/api/v2/pokemon/")]);
    assert!(matches!(aside.handle_key_events(key(KeyCode::Enter)), Action::None));
}

#[test]
fn test_lookup_mount_requests_list_once() {
    let mut lookup = LookupScreen::new(ErrorChannel::new(), 28);
    assert!(matches!(lookup.mount(), Action::FetchPokemonList { .. }));
    assert!(matches!(lookup.mount(), Action::None));
}

#[test]
fn test_lookup_ignores_list_keys_while_loading() {
    let mut lookup = LookupScreen::new(ErrorChannel::new(), 28);
    lookup.mount();
    assert!(matches!(lookup.handle_key_events(key(KeyCode::Enter)), Action::None));
    assert!(matches!(lookup.handle_key_events(key(KeyCode::Char('x'))), Action::DismissError));
}

#[test]
fn test_lookup_select_requests_detail() {
    let mut lookup = LookupScreen::new(ErrorChannel::new(), 28);
    match lookup.update(Action::SelectPokemon(25)) {
        Action::FetchPokemon { pokemon_id, .. } => assert_eq!(pokemon_id, 25),
        other => panic!("unexpected action: {:?}", other),
    }
    assert!(lookup.shows_section());
}

#[test]
fn test_color_screen_captures_typing() {
    let mut screen = ColorScreen::new();
    assert!(screen.captures_text());

    for c in "Navy".chars() {
        screen.handle_key_events(key(KeyCode::Char(c)));
    }
    assert_eq!(screen.swatch().hex(), "#000080");
}

#[test]
fn test_roster_toggle_variant() {
    let mut roster = RosterScreen::from_names(&["Mew".to_string()]);
    assert_eq!(roster.variant(), RosterVariant::Names);

    let action = roster.handle_key_events(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL));
    roster.update(action);
    assert_eq!(roster.variant(), RosterVariant::Records);
    assert_eq!(roster.records().entries()[0].name, "Mew");
}

#[test]
fn test_help_lists_every_dialog_shortcut() {
    let shortcut_lines: Vec<&str> = HELP_TEXT.lines().filter(|line| line.contains("help") || line.contains("logs")).collect();
    let help = shortcut_lines.iter().find(|line| line.contains("help")).unwrap();
    let logs = shortcut_lines.iter().find(|line| line.contains("logs")).unwrap();

    assert!(help.contains("F1") && help.contains('?'));
    assert!(logs.contains("Ctrl+L") && logs.contains('G'));
}
