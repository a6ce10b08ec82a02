use crate::common::{item, FakeSource};
use pokedeck::ui::core::{Action, Screen, TaskManager};
use pokedeck::ui::LayoutManager;
use ratatui::layout::Rect;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[test]
fn test_screen_navigation_wraps() {
    assert_eq!(Screen::Lookup.next(), Screen::Color);
    assert_eq!(Screen::Color.previous(), Screen::Lookup);
    for screen in Screen::ALL {
        assert_eq!(Screen::ALL[screen.index()], screen);
        assert_eq!(screen.next().previous(), screen);
    }
    assert_eq!(Screen::from_name("roster"), Some(Screen::Roster));
    assert_eq!(Screen::from_name("Roster"), None);
}

#[test]
fn test_main_layout_collapses_banner() {
    let area = Rect::new(0, 0, 80, 24);

    let without = LayoutManager::main_layout(area, false);
    assert_eq!(without.banner.height, 0);
    assert_eq!(without.header.height, 3);
    assert_eq!(without.status.height, 1);
    assert_eq!(without.body.height, 20);

    let with = LayoutManager::main_layout(area, true);
    assert_eq!(with.banner.height, 3);
    assert_eq!(with.body.height, 17);
}

#[test]
fn test_aside_never_takes_more_than_half() {
    let (aside, section) = LayoutManager::aside_layout(Rect::new(0, 0, 40, 10), 28);
    assert_eq!(aside.width, 20);
    assert_eq!(section.width, 20);
}

#[test]
fn test_truncate() {
    assert_eq!(LayoutManager::truncate("bulbasaur", 20), "bulbasaur");
    assert_eq!(LayoutManager::truncate("bulbasaur", 5), "bulb…");
}

#[tokio::test]
async fn test_task_manager_reports_completion() {
    let (mut manager, mut rx) = TaskManager::new(Duration::ZERO);
    let source = Arc::new(FakeSource::new(Ok(vec![item("bulbasaur", 1)])));

    manager.spawn_list_fetch(source, 7);
    assert_eq!(manager.task_count(), 1);

    match rx.recv().await {
        Some(Action::PokemonListLoaded { request_id, result }) => {
            assert_eq!(request_id, 7);
            assert_eq!(result.unwrap().len(), 1);
        }
        other => panic!("unexpected action: {:?}", other),
    }
}

#[tokio::test]
async fn test_task_manager_delays_only_success() {
    let (mut manager, mut rx) = TaskManager::new(Duration::from_millis(150));
    let source = Arc::new(FakeSource::new(Ok(Vec::new())));

    let started = Instant::now();
    manager.spawn_detail_fetch(source, 1, 404);
    match rx.recv().await {
        Some(Action::PokemonLoaded { result, .. }) => assert!(result.is_err()),
        other => panic!("unexpected action: {:?}", other),
    }
    assert!(started.elapsed() < Duration::from_millis(150));

    manager.cancel_all_tasks();
    assert_eq!(manager.task_count(), 0);
}
