use crate::config::AppConfig;
use crate::event::KeyAction;
use crate::fetch::RoadmapFetcher;

#[derive(Debug, Clone)]
pub enum Action {
    Key(KeyAction),
    Tick,
    Quit,
}

pub struct App {
    pub fetcher: RoadmapFetcher,
    pub selected_item: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            fetcher: RoadmapFetcher::new(config.fetch_config()),
            selected_item: 0,
            should_quit: false,
        }
    }

    pub async fn update(&mut self, action: Action) {
        match action {
            Action::Key(key) => self.handle_key(key).await,
            Action::Tick => {
                // Redraw only; the next frame picks up current state.
            }
            Action::Quit => {
                self.should_quit = true;
            }
        }
    }

    async fn handle_key(&mut self, key: KeyAction) {
        match key {
            KeyAction::Up => {
                if self.selected_item > 0 {
                    self.selected_item -= 1;
                }
            }
            KeyAction::Down => {
                let items = self.fetcher.items();
                if !items.is_empty() && self.selected_item < items.len() - 1 {
                    self.selected_item += 1;
                }
            }
            KeyAction::Refresh => {
                self.fetcher.refetch().await;
                self.clamp_selection();
            }
        }
    }

    /// The list can shrink (or empty entirely) on a refetch.
    fn clamp_selection(&mut self) {
        let len = self.fetcher.items().len();
        if self.selected_item >= len {
            self.selected_item = len.saturating_sub(1);
        }
    }
}
