//! Client-side routing between the pages reachable from the navigation bar.

use log::info;

/// A link shown in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

impl NavLink {
    /// The route this link points at.
    pub fn route(&self) -> Route {
        Route::from_path(self.path).unwrap_or_default()
    }
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Home",
        path: "/",
    },
    NavLink {
        label: "About",
        path: "/about",
    },
    NavLink {
        label: "Services",
        path: "/services",
    },
    NavLink {
        label: "Contact",
        path: "/contact",
    },
];

/// The pages the application can show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display)]
pub enum Route {
    /// The dashboard page.
    #[default]
    Home,
    About,
    Services,
    Contact,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Services => "/services",
            Route::Contact => "/contact",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Route::Home),
            "/about" => Some(Route::About),
            "/services" => Some(Route::Services),
            "/contact" => Some(Route::Contact),
            _ => None,
        }
    }
}

/// Holds the active route. Switching routes swaps the page body in place.
#[derive(Debug, Clone, Default)]
pub struct Router {
    active: Route,
}

impl Router {
    pub fn new(initial: Route) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> Route {
        self.active
    }

    /// Whether `link` points at the active route, for highlighting.
    pub fn is_active(&self, link: &NavLink) -> bool {
        link.route() == self.active
    }

    /// Switch to `route`. Returns `false` when it is already active.
    pub fn navigate(&mut self, route: Route) -> bool {
        if self.active == route {
            return false;
        }
        info!("Navigating from {} to {}", self.active.path(), route.path());
        self.active = route;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_resolve_to_distinct_routes() {
        let routes: Vec<Route> = NAV_LINKS.iter().map(NavLink::route).collect();
        assert_eq!(
            routes,
            vec![Route::Home, Route::About, Route::Services, Route::Contact]
        );
        for link in NAV_LINKS {
            assert_eq!(link.route().path(), link.path);
        }
    }

    #[test]
    fn test_navigate_switches_active_route() {
        let mut router = Router::default();
        assert_eq!(router.active(), Route::Home);
        assert!(router.is_active(&NAV_LINKS[0]));

        assert!(router.navigate(Route::Services));
        assert_eq!(router.active(), Route::Services);
        assert!(router.is_active(&NAV_LINKS[2]));
        assert!(!router.is_active(&NAV_LINKS[0]));
    }

    #[test]
    // Navigating to the active route reports no change.
    fn test_navigate_to_active_route_is_noop() {
        let mut router = Router::new(Route::About);
        assert!(!router.navigate(Route::About));
        assert_eq!(router.active(), Route::About);
    }

    #[test]
    fn test_unknown_path_has_no_route() {
        assert_eq!(Route::from_path("/pricing"), None);
        assert_eq!(Route::from_path("/contact"), Some(Route::Contact));
    }
}
