//! Declarative route table for the front-end pages.

/// Page components reachable through the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Login,
    Register,
    AdminDashboard,
}

impl PageId {
    /// Every page, in the order they are declared in the application table.
    pub const ALL: [PageId; 3] = [PageId::Login, PageId::Register, PageId::AdminDashboard];

    /// Stable identifier used in markup and logs.
    pub fn name(self) -> &'static str {
        match self {
            PageId::Login => "login",
            PageId::Register => "register",
            PageId::AdminDashboard => "admin-dashboard",
        }
    }

    /// Human readable title shown in the browser tab.
    pub fn title(self) -> &'static str {
        match self {
            PageId::Login => "Sign in",
            PageId::Register => "Create account",
            PageId::AdminDashboard => "Admin dashboard",
        }
    }
}

/// What a route resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    /// Another path, resolved again by the router.
    Redirect(&'static str),
    /// A page component.
    Page(PageId),
}

/// Association between a path pattern and its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    path: &'static str,
    target: RouteTarget,
}

impl Route {
    pub const fn page(path: &'static str, page: PageId) -> Self {
        Self {
            path,
            target: RouteTarget::Page(page),
        }
    }

    pub const fn redirect(path: &'static str, to: &'static str) -> Self {
        Self {
            path,
            target: RouteTarget::Redirect(to),
        }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn target(&self) -> RouteTarget {
        self.target
    }
}

/// Routes of the chat admin front-end.
///
/// There is no catch-all entry: unmatched paths resolve to
/// [`Resolution::NotFound`](super::Resolution::NotFound).
const APP_ROUTES: [Route; 4] = [
    Route::redirect("/", "/login"),
    Route::page("/login", PageId::Login),
    Route::page("/register", PageId::Register),
    Route::page("/admin/dashboard", PageId::AdminDashboard),
];

/// Ordered sequence of routes. The first matching route wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Creates table from routes in precedence order.
    ///
    /// Targets are not validated: a redirect to an unregistered path is
    /// only noticed when it is resolved.
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Route table of the application.
    pub fn app() -> Self {
        Self::new(APP_ROUTES.to_vec())
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Finds the first route matching a path.
    ///
    /// The path is normalized first (see [`normalize_path`]) and compared
    /// case-insensitively against each declared path.
    pub fn find(&self, path: &str) -> Option<&Route> {
        let normalized = normalize_path(path);
        self.routes
            .iter()
            .find(|route| normalize_path(route.path).eq_ignore_ascii_case(&normalized))
    }

    /// Returns the declared path of a page, if any route renders it.
    pub fn path_of(&self, page: PageId) -> Option<&'static str> {
        self.routes
            .iter()
            .find(|route| route.target == RouteTarget::Page(page))
            .map(|route| route.path)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::app()
    }
}

/// Normalizes a location into the form routes are matched against.
///
/// Drops the query string and fragment, guarantees a leading slash and
/// removes one trailing slash from non-root paths.
pub fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = path[..end].trim();

    let mut normalized = String::with_capacity(path.len() + 1);
    if !path.starts_with('/') {
        normalized.push('/');
    }
    normalized.push_str(path);

    if normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }
    normalized
}
