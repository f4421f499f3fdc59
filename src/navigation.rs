/// Top-level pages reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Unidades,
    CadastroEnergia,
}

impl Route {
    /// Sidebar order.
    pub const ALL: [Route; 3] = [Route::Dashboard, Route::Unidades, Route::CadastroEnergia];

    pub fn label(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Unidades => "Unidades",
            Route::CadastroEnergia => "Cadastro de energia geradora",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub route: Route,
    pub label: &'static str,
    pub active: bool,
}

/// Which page the shell shows. Only user navigation mutates it.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    active: Route,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(route: Route) -> Self {
        Self { active: route }
    }

    pub fn active(&self) -> Route {
        self.active
    }

    pub fn is_active(&self, route: Route) -> bool {
        self.active == route
    }

    /// Follow a sidebar link. Returns `true` when the page changed.
    pub fn navigate(&mut self, route: Route) -> bool {
        if self.active == route {
            return false;
        }
        tracing::debug!("navigating from {:?} to {:?}", self.active, route);
        self.active = route;
        true
    }

    /// The logo always leads back to the default page.
    pub fn click_logo(&mut self) -> bool {
        self.navigate(Route::default())
    }

    pub fn entries(&self) -> Vec<NavEntry> {
        Route::ALL
            .iter()
            .map(|&route| NavEntry {
                route,
                label: route.label(),
                active: self.is_active(route),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(nav: &NavigationState) -> usize {
        nav.entries().iter().filter(|e| e.active).count()
    }

    #[test]
    fn starts_on_dashboard_with_only_it_active() {
        let nav = NavigationState::new();
        let entries = nav.entries();
        let labels: Vec<_> = entries.iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            vec!["Dashboard", "Unidades", "Cadastro de energia geradora"]
        );
        assert!(entries[0].active);
        assert!(!entries[1].active);
        assert!(!entries[2].active);
    }

    #[test]
    fn exactly_one_entry_is_active_after_any_click() {
        let mut nav = NavigationState::new();
        for route in [
            Route::Unidades,
            Route::CadastroEnergia,
            Route::Unidades,
            Route::Dashboard,
            Route::CadastroEnergia,
        ] {
            nav.navigate(route);
            assert_eq!(nav.active(), route);
            assert_eq!(active_count(&nav), 1);
            assert!(nav.entries().iter().any(|e| e.active && e.route == route));
        }
    }

    #[test]
    fn logo_returns_to_dashboard_from_every_route() {
        for route in Route::ALL {
            let mut nav = NavigationState::starting_at(route);
            let changed = nav.click_logo();
            assert_eq!(nav.active(), Route::Dashboard);
            assert_eq!(changed, route != Route::Dashboard);
            assert_eq!(active_count(&nav), 1);
        }
    }

    #[test]
    fn clicking_the_current_link_reports_no_change() {
        let mut nav = NavigationState::starting_at(Route::Unidades);
        assert!(!nav.navigate(Route::Unidades));
        assert!(nav.navigate(Route::Dashboard));
    }
}
