use crate::common::{item, test_config, wait_until, FakeSource};
use pokedeck::constants::ERROR_CODE_POKEMON_NOT_FOUND;
use pokedeck::logger::Logger;
use pokedeck::ui::core::{Action, Screen};
use pokedeck::ui::AppComponent;
use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;

fn draw(app: &mut AppComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    buffer.content().iter().map(|cell| cell.symbol()).collect()
}

#[test]
fn test_lookup_shows_loading_before_list_arrives() {
    let mut app = AppComponent::new(&test_config(), Arc::new(FakeSource::new(Ok(Vec::new()))), Logger::new());
    let screen = draw(&mut app);
    assert!(screen.contains("loading"));
    assert!(screen.contains("Lookup"));
    assert!(!screen.contains(ERROR_CODE_POKEMON_NOT_FOUND));
}

#[tokio::test]
async fn test_lookup_renders_list_detail_and_error_banner() {
    let source = Arc::new(
        FakeSource::new(Ok(vec![item("bulbasaur", 1)])).with_detail(1, "bulbasaur"),
    );
    let mut app = AppComponent::new(&test_config(), source, Logger::new());
    app.mount();
    assert!(wait_until(&mut app, |app| !app.lookup().list().is_loading()).await);

    app.dispatch(Action::SelectPokemon(1));
    assert!(wait_until(&mut app, |app| app.lookup().detail().data().is_some()).await);

    let screen = draw(&mut app);
    assert!(screen.contains("bulbasaur"));
    assert!(screen.contains("Pokemon id: 1"));
    assert!(screen.contains("Pokemon name: bulbasaur"));

    app.dispatch(Action::SelectPokemon(42));
    assert!(wait_until(&mut app, |app| app.errors().has_error()).await);
    let screen = draw(&mut app);
    assert!(screen.contains(ERROR_CODE_POKEMON_NOT_FOUND));
}

#[test]
fn test_color_screen_renders_value_and_hex() {
    let mut app = AppComponent::new(&test_config(), Arc::new(FakeSource::new(Ok(Vec::new()))), Logger::new());
    app.dispatch(Action::SwitchScreen(Screen::Color));

    let screen = draw(&mut app);
    assert!(screen.contains("No Value"));
}
