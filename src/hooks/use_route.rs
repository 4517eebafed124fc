use yew::prelude::*;

use crate::models::error::AppError;

/// Named destinations of the app. Two screens, each reachable from the other
/// through an explicit tap; no deep links, no history handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Liked-music list
    #[default]
    Main,
    /// Decorative staggered grid
    StaggeredGrid,
}

impl Route {
    /// Returns the destination name used in navigation calls.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Main => "main",
            Route::StaggeredGrid => "staggeredGrid",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Route {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Route::Main),
            "staggeredGrid" => Ok(Route::StaggeredGrid),
            _ => Err(AppError::ConfigError(format!("Unknown destination: {s}"))),
        }
    }
}

/// Handle returned by `use_route` hook
#[derive(Clone, PartialEq)]
pub struct RouteHandle {
    pub route: Route,
    pub navigate_to: Callback<Route>,
}

/// Custom hook holding the current destination. Starts on the main screen;
/// transitions happen only through `navigate_to`.
#[hook]
pub fn use_route() -> RouteHandle {
    let route = use_state(Route::default);

    // Navigation callback
    let navigate_to = {
        let route = route.clone();
        Callback::from(move |destination| route.set(destination))
    };

    RouteHandle {
        route: *route,
        navigate_to,
    }
}
