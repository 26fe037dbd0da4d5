//! Hash Routes

/// Top-level views, addressed as `#/<name>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Services,
    Privacy,
    Start,
    Summary,
    Admin,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Services,
        Route::Privacy,
        Route::Start,
        Route::Summary,
        Route::Admin,
    ];

    /// Parse `location.hash`; anything unrecognised is home
    pub fn from_hash(hash: &str) -> Self {
        let name = hash.trim_start_matches('#').trim_start_matches('/');
        let name = name.split(['?', '/']).next().unwrap_or("");
        Self::ALL
            .into_iter()
            .find(|r| r.name() == name)
            .unwrap_or_default()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Services => "services",
            Route::Privacy => "privacy",
            Route::Start => "start",
            Route::Summary => "summary",
            Route::Admin => "admin",
        }
    }

    pub fn hash(&self) -> String {
        format!("#/{}", self.name())
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Services => "Services",
            Route::Privacy => "Privacy",
            Route::Start => "Start intake",
            Route::Summary => "Summary",
            Route::Admin => "Admin",
        }
    }
}

/// Current route from the browser location
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|h| Route::from_hash(&h))
        .unwrap_or_default()
}

/// Navigate by updating the hash; the shell picks it up from `hashchange`
pub fn navigate(route: Route) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(&route.hash());
    }
}
