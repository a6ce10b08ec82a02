use crate::config::Config;
use crate::logger::Logger;
use crate::pokeapi::PokemonSource;
use crate::store::ErrorChannel;
use crate::ui::components::{
    ColorScreen, DialogComponent, ErrorBanner, FormScreen, Header, LookupScreen, RosterScreen, StatusBar,
};
use crate::ui::core::{
    actions::{Action, DialogType, Screen},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crate::validation::AllowList;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub active_screen: Screen,
    pub mounted: bool,
}

/// Root composition: every screen, the shared error channel and the background fetch runner.
pub struct AppComponent {
    // Component composition
    color: ColorScreen,
    roster: RosterScreen,
    form: FormScreen,
    lookup: LookupScreen,
    dialog: DialogComponent,

    // Application state
    state: AppState,

    // Services
    source: Arc<dyn PokemonSource>,
    errors: ErrorChannel,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config, source: Arc<dyn PokemonSource>, logger: Logger) -> Self {
        let errors = ErrorChannel::new();
        let (task_manager, background_action_rx) = TaskManager::new(config.api.min_latency());

        let state = AppState {
            active_screen: Screen::from_name(&config.ui.default_screen).unwrap_or_default(),
            mounted: false,
        };

        Self {
            color: ColorScreen::new(),
            roster: RosterScreen::from_names(&config.roster.initial_names),
            form: FormScreen::new(AllowList::new(config.form.allow_list.clone())),
            lookup: LookupScreen::new(errors.clone(), config.ui.aside_width),
            dialog: DialogComponent::new(),
            state,
            source,
            errors,
            task_manager,
            background_action_rx,
            logger,
            should_quit: false,
        }
    }

    /// Run mount effects once: the lookup screen requests its listing here
    pub fn mount(&mut self) {
        if self.state.mounted {
            return;
        }
        self.state.mounted = true;
        self.logger.log("AppComponent: mounting screens".to_string());

        let action = self.lookup.mount();
        self.dispatch(action);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn active_screen(&self) -> Screen {
        self.state.active_screen
    }

    pub fn errors(&self) -> &ErrorChannel {
        &self.errors
    }

    pub fn lookup(&self) -> &LookupScreen {
        &self.lookup
    }

    pub fn roster(&self) -> &RosterScreen {
        &self.roster
    }

    pub fn form(&self) -> &FormScreen {
        &self.form
    }

    pub fn color(&self) -> &ColorScreen {
        &self.color
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    fn active_component(&mut self) -> &mut dyn Component {
        match self.state.active_screen {
            Screen::Color => &mut self.color,
            Screen::Roster => &mut self.roster,
            Screen::Form => &mut self.form,
            Screen::Lookup => &mut self.lookup,
        }
    }

    fn active_captures_text(&self) -> bool {
        match self.state.active_screen {
            Screen::Color => self.color.captures_text(),
            Screen::Roster => self.roster.captures_text(),
            Screen::Form => self.form.captures_text(),
            Screen::Lookup => self.lookup.captures_text(),
        }
    }

    /// Handle a terminal event
    pub fn handle_event(&mut self, event: EventType) {
        if let EventType::Key(key) = event {
            self.handle_key(key);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = if self.dialog.is_visible() {
            self.dialog.handle_key_events(key)
        } else {
            match self.handle_global_key(key) {
                Action::None => self.active_component().handle_key_events(key),
                action => action,
            }
        };

        self.dispatch(action);
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Action::ShowDialog(DialogType::Logs)
            }
            KeyCode::Esc => {
                self.logger.log("Global key: Esc - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Tab => Action::NextScreen,
            KeyCode::BackTab => Action::PreviousScreen,
            KeyCode::F(1) => Action::ShowDialog(DialogType::Help),
            _ if self.active_captures_text() => Action::None,
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                Action::SwitchScreen(Screen::ALL[index])
            }
            _ => Action::None,
        }
    }

    /// Run an action and whatever follow-up actions it produces
    pub fn dispatch(&mut self, action: Action) {
        let mut next = action;
        while !matches!(next, Action::None) {
            next = self.handle_app_action(next);
        }
    }

    /// Handle app-level actions, routing screen actions to their owner
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::SwitchScreen(screen) => {
                self.switch_screen(screen);
                Action::None
            }
            Action::NextScreen => {
                self.switch_screen(self.state.active_screen.next());
                Action::None
            }
            Action::PreviousScreen => {
                self.switch_screen(self.state.active_screen.previous());
                Action::None
            }
            Action::ShowDialog(ref dialog_type) => {
                self.logger.log(format!("Dialog: Showing dialog {:?}", dialog_type));
                if *dialog_type == DialogType::Logs {
                    self.dialog.set_logs(self.logger.get_logs());
                }
                self.dialog.update(action)
            }
            Action::HideDialog => self.dialog.update(action),
            Action::FetchPokemonList { request_id } => {
                self.logger.log(format!("Lookup: fetching pokemon list (request #{})", request_id));
                self.task_manager.spawn_list_fetch(Arc::clone(&self.source), request_id);
                Action::None
            }
            Action::FetchPokemon { request_id, pokemon_id } => {
                self.logger.log(format!(
                    "Lookup: fetching pokemon {} (request #{})",
                    pokemon_id, request_id
                ));
                self.task_manager
                    .spawn_detail_fetch(Arc::clone(&self.source), request_id, pokemon_id);
                Action::None
            }
            Action::SelectPokemon(_)
            | Action::RemoveListItem(_)
            | Action::DismissError
            | Action::PokemonListLoaded { .. }
            | Action::PokemonLoaded { .. } => self.lookup.update(action),
            Action::AddPokemon(_)
            | Action::DeletePokemonByName(_)
            | Action::DeletePokemonById(_)
            | Action::ToggleRosterVariant => self.roster.update(action),
            Action::SubmitForm => self.form.update(action),
            Action::None => Action::None,
        }
    }

    fn switch_screen(&mut self, screen: Screen) {
        if screen != self.state.active_screen {
            self.logger
                .log(format!("Navigation: {} -> {}", self.state.active_screen.title(), screen.title()));
            self.state.active_screen = screen;
        }
    }

    /// Apply completions reported by background fetches. Returns how many were applied.
    pub fn process_background_actions(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(action) = self.background_action_rx.try_recv() {
            self.dispatch(action);
            processed += 1;
        }

        for (task_id, description) in self.task_manager.cleanup_finished_tasks() {
            self.logger.log(format!("Task {} done: {}", task_id, description));
        }

        processed
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::main_layout(rect, self.errors.has_error());

        ErrorBanner::render(f, areas.banner, &self.errors);
        Header::render(f, areas.header, self.state.active_screen);
        self.active_component().render(f, areas.body);
        StatusBar::render(f, areas.status, self.state.active_screen, self.task_manager.task_count());

        self.dialog.render(f, rect);
    }
}
