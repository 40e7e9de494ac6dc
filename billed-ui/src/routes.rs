use crate::views::{self, RenderContext, View};

/// Logical screens of the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteName {
    Login,
    Bills,
    NewBill,
    Dashboard,
}

impl RouteName {
    pub const ALL: [RouteName; 4] = [
        RouteName::Login,
        RouteName::Bills,
        RouteName::NewBill,
        RouteName::Dashboard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteName::Login => "Login",
            RouteName::Bills => "Bills",
            RouteName::NewBill => "NewBill",
            RouteName::Dashboard => "Dashboard",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            RouteName::Login => "/",
            RouteName::Bills => "#employee/bills",
            RouteName::NewBill => "#employee/bill/new",
            RouteName::Dashboard => "#admin/dashboard",
        }
    }
}

/// A screen bound to its path and the view it mounts on arrival
#[derive(Clone, Copy)]
pub struct Route {
    pub name: RouteName,
    pub path: &'static str,
    pub render: fn(&RenderContext) -> View,
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("name", &self.name)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Static route lookup, by name or by path
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteTable {
    pub fn new() -> Self {
        let routes = RouteName::ALL
            .iter()
            .map(|&name| Route {
                name,
                path: name.path(),
                render: render_fn(name),
            })
            .collect();
        Self { routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn get(&self, name: RouteName) -> Option<&Route> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// Resolve a path (`#employee/bills`) or a route name (`Bills`).
    ///
    /// An empty location or a bare `#` is the login screen.
    pub fn resolve(&self, target: &str) -> Option<&Route> {
        let target = target.trim();
        let target = if target.is_empty() || target == "#" {
            RouteName::Login.path()
        } else {
            target
        };

        self.routes
            .iter()
            .find(|route| route.path == target || route.name.as_str() == target)
    }
}

fn render_fn(name: RouteName) -> fn(&RenderContext) -> View {
    match name {
        RouteName::Login => views::login::login_ui,
        RouteName::Bills => views::status::bills_loading,
        RouteName::NewBill => views::new_bill::new_bill_ui,
        RouteName::Dashboard => views::dashboard::dashboard_ui,
    }
}
