use crate::erx::{self, ResultE, ResultEX};
use crate::web::define::HttpMethod;
use crate::web::url;
use indexmap::IndexSet;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

lazy_static! {
    static ref PATH_PARAM: Regex = Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("path param regex");
}

/// Opaque endpoint value stored by reference in each route. Invocation
/// belongs to the dispatch layer that consumes the finished table, this
/// crate only carries the reference through composition.
pub trait Endpoint: Send + Sync {
    fn as_any(&self) -> &dyn Any;

    /// display name used in logs
    fn describe(&self) -> &str {
        "endpoint"
    }
}

/// Handler = Arc<dyn Endpoint>
pub type Handler = Arc<dyn Endpoint>;

/// Registration options for a single route.
/// Builder style, all optional:
///
/// ```ignore
/// RouteOptions::new().method(HttpMethod::POST).name("create_item").tag("items")
/// ```
#[derive(Clone, Default)]
pub struct RouteOptions {
    methods: Option<Vec<HttpMethod>>,
    name: Option<String>,
    hidden: bool,
    tags: Vec<String>,
}

impl RouteOptions {
    pub fn new() -> Self {
        Default::default()
    }

    /// add an allowed method, unset methods default to GET at registration
    pub fn method(mut self, method: HttpMethod) -> Self {
        self.methods.get_or_insert_with(Vec::new).push(method);
        self
    }

    pub fn methods(mut self, methods: &[HttpMethod]) -> Self {
        self.methods.get_or_insert_with(Vec::new).extend_from_slice(methods);
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// keep the route out of the generated schema
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.to_string());
        self
    }
}

/// One concrete route record: path, opaque handler, allowed methods and the
/// metadata the schema generator consumes. Owned exclusively by its table
/// once appended.
#[derive(Clone, Serialize)]
pub struct Route {
    pub path: String,
    #[serde(skip_serializing)]
    pub handler: Handler,
    pub methods: IndexSet<HttpMethod>,
    pub name: Option<String>,
    pub visible_in_schema: bool,
    pub tags: IndexSet<String>,
    /// path parameter names, extracted from `{name}` segments
    pub params: Vec<String>,
}

impl Route {
    pub fn new(path: &str, handler: Handler, options: RouteOptions) -> ResultE<Route> {
        url::validate_path(path)?;

        let methods: IndexSet<HttpMethod> = match options.methods {
            None => IndexSet::from([HttpMethod::GET]),
            Some(given) => {
                if given.is_empty() {
                    return Err(erx::empty_methods(path));
                }
                given.into_iter().collect()
            },
        };

        Ok(Route {
            path: path.to_string(),
            handler,
            methods,
            name: options.name,
            visible_in_schema: !options.hidden,
            tags: options.tags.into_iter().collect(),
            params: extract_params(path),
        })
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path)
            .field("handler", &self.handler.describe())
            .field("methods", &self.methods)
            .field("name", &self.name)
            .field("visible_in_schema", &self.visible_in_schema)
            .field("tags", &self.tags)
            .field("params", &self.params)
            .finish()
    }
}

/// extract `{name}` path parameter names, in path order
pub fn extract_params(path: &str) -> Vec<String> {
    PATH_PARAM.captures_iter(path).map(|c| c[1].to_string()).collect()
}

/// A mounted sub-application. Opaque here, the dispatch layer resolves it.
#[derive(Clone)]
pub struct Mount {
    pub path: String,
    pub app: Handler,
    pub name: Option<String>,
}

/// A static directory mount.
#[derive(Debug, Clone, Serialize)]
pub struct StaticFiles {
    pub path: String,
    pub directory: String,
    pub name: Option<String>,
}

impl fmt::Debug for Mount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mount").field("path", &self.path).field("app", &self.app.describe()).field("name", &self.name).finish()
    }
}

/// Route table entry. Router inclusion only imports the Api variant, the
/// other kinds stay with the router that declared them.
#[derive(Debug, Clone)]
pub enum RouteEntry {
    Api(Route),
    Mount(Mount),
    Static(StaticFiles),
}

impl RouteEntry {
    pub fn kind(&self) -> &'static str {
        match self {
            RouteEntry::Api(_) => "route",
            RouteEntry::Mount(_) => "mount",
            RouteEntry::Static(_) => "static",
        }
    }

    pub fn path(&self) -> &str {
        match self {
            RouteEntry::Api(r) => &r.path,
            RouteEntry::Mount(m) => &m.path,
            RouteEntry::Static(s) => &s.path,
        }
    }
}

/// Ordered route table shared by Application and Router. Insertion order is
/// matching precedence for the dispatch layer and is preserved faithfully.
///
/// Mutation is bootstrap-time only: not safe to call once the server has
/// begun accepting traffic.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn push(&mut self, entry: RouteEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// iterate the concrete routes only, in table order
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.entries.iter().filter_map(|e| match e {
            RouteEntry::Api(r) => Some(r),
            _ => None,
        })
    }

    pub fn route_count(&self) -> usize {
        self.routes().count()
    }

    pub fn has_path(&self, path: &str) -> bool {
        self.routes().any(|r| r.path == path)
    }

    pub fn add_route(&mut self, path: &str, handler: Handler, options: RouteOptions) -> ResultEX {
        let route = Route::new(path, handler, options)?;
        self.entries.push(RouteEntry::Api(route));
        Ok(())
    }

    /// Import every concrete route of `source`, in original order. Each one
    /// is cloned, its path becomes `prefix + path` (literal concatenation,
    /// no slash normalization) and `tags` is unioned into its tag set.
    /// The source table is never mutated, importing the same table twice
    /// under different prefixes observes the original paths both times.
    /// Mount and static entries are skipped. An empty source is a no-op.
    pub fn import(&mut self, source: &RouteTable, prefix: &str, tags: &[&str]) -> ResultEX {
        url::validate_prefix(prefix)?;

        for entry in source.entries.iter() {
            let route = match entry {
                RouteEntry::Api(route) => route,
                other => {
                    debug!("skipping {} entry at {} during inclusion", other.kind(), other.path());
                    continue;
                },
            };

            let mut imported = route.clone();
            imported.path = format!("{}{}", prefix, route.path);
            for tag in tags {
                imported.tags.insert(tag.to_string());
            }
            imported.params = extract_params(&imported.path);

            // duplicate paths after prefixing are allowed, precedence is
            // table order; still worth a warning at bootstrap
            if self.has_path(&imported.path) {
                warn!("duplicate route path after inclusion: {}", imported.path);
            }

            self.entries.push(RouteEntry::Api(imported));
        }

        Ok(())
    }
}

/// A named, composable collection of routes. Merged into an Application or
/// another Router with `include_router`.
#[derive(Debug, Clone, Default)]
pub struct Router {
    pub name: Option<String>,
    table: RouteTable,
}

impl Router {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn named(name: &str) -> Self {
        Router { name: Some(name.to_string()), table: RouteTable::new() }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn route_count(&self) -> usize {
        self.table.route_count()
    }

    pub fn add_route(&mut self, path: &str, handler: Handler, options: RouteOptions) -> ResultEX {
        self.table.add_route(path, handler, options)
    }

    pub fn get(&mut self, path: &str, handler: Handler) -> ResultEX {
        self.add_route(path, handler, RouteOptions::new().method(HttpMethod::GET))
    }

    pub fn post(&mut self, path: &str, handler: Handler) -> ResultEX {
        self.add_route(path, handler, RouteOptions::new().method(HttpMethod::POST))
    }

    pub fn put(&mut self, path: &str, handler: Handler) -> ResultEX {
        self.add_route(path, handler, RouteOptions::new().method(HttpMethod::PUT))
    }

    pub fn delete(&mut self, path: &str, handler: Handler) -> ResultEX {
        self.add_route(path, handler, RouteOptions::new().method(HttpMethod::DELETE))
    }

    pub fn patch(&mut self, path: &str, handler: Handler) -> ResultEX {
        self.add_route(path, handler, RouteOptions::new().method(HttpMethod::PATCH))
    }

    /// mount a sub-application at `path`
    pub fn mount(&mut self, path: &str, app: Handler, name: Option<&str>) -> ResultEX {
        url::validate_path(path)?;
        self.table.push(RouteEntry::Mount(Mount { path: path.to_string(), app, name: name.map(|n| n.to_string()) }));
        Ok(())
    }

    /// mount a static directory at `path`
    pub fn mount_static(&mut self, path: &str, directory: &str, name: Option<&str>) -> ResultEX {
        url::validate_path(path)?;
        self.table.push(RouteEntry::Static(StaticFiles {
            path: path.to_string(),
            directory: directory.to_string(),
            name: name.map(|n| n.to_string()),
        }));
        Ok(())
    }

    /// merge another router's routes into this one, see RouteTable::import
    pub fn include_router(&mut self, other: &Router, prefix: &str, tags: &[&str]) -> ResultEX {
        self.table.import(other.table(), prefix, tags)
    }
}

/// merge two routers into a fresh one
pub fn merge(a: &Router, b: &Router) -> ResultE<Router> {
    let mut router = Router::new();
    router.include_router(a, "", &[])?;
    router.include_router(b, "", &[])?;
    Ok(router)
}

/// merge many routers into a fresh one, in order
pub fn merge_vec(routers: Vec<Router>) -> ResultE<Router> {
    let mut router = Router::new();
    for r in routers {
        router.include_router(&r, "", &[])?;
    }
    Ok(router)
}

/// merge routers keyed by inclusion prefix into a fresh one
pub fn merge_map(routers: HashMap<String, Router>) -> ResultE<Router> {
    let mut router = Router::new();
    for (prefix, r) in routers {
        router.include_router(&r, &prefix, &[])?;
    }
    Ok(router)
}
