use super::remote::RemoteApi;
use super::store::Workspace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Application shell: owns the workspace and the startup loading state.
pub struct App<A> {
    pub workspace: Workspace<A>,
    is_loading: bool,
    error: Option<String>,
    theme: Theme,
}

impl<A: RemoteApi> App<A> {
    pub fn new(api: A) -> Self {
        Self {
            workspace: Workspace::new(api),
            is_loading: false,
            error: None,
            theme: Theme::default(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Fetches stacks and cards concurrently and populates both stores.
    ///
    /// All-or-nothing: if either fetch fails, neither store is populated and
    /// the failure message is recorded for the UI instead of propagating.
    pub async fn load(&mut self) {
        self.is_loading = true;
        self.error = None;

        let result = {
            let api = self.workspace.api();
            tokio::try_join!(api.fetch_all_stacks(), api.fetch_all_cards())
        };
        match result {
            Ok((stacks, cards)) => {
                self.workspace.stacks.set_stacks(stacks);
                self.workspace.cards.set_cards(cards);
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }

        self.is_loading = false;
    }
}
