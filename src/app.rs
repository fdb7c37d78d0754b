use crate::erx::ResultEX;
use crate::web::docs::{Descriptor, TagMeta};
use crate::web::route::{Handler, Route, RouteOptions, RouteTable, Router};
use crate::web::url;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Moment is a named point in bootstrap time.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Moment {
    name: String,
    time: i64,
}

impl Moment {
    /// Moment with current time
    pub fn now(name: &str) -> Self {
        Self { name: name.to_string(), time: chrono::Utc::now().timestamp_micros() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The application entry point: descriptive metadata plus the route table
/// that routers get merged into.
///
/// All of this is single-threaded bootstrap code. Registration and inclusion
/// are not safe to call after the server has begun accepting traffic; the
/// table must be finished before the dispatch layer starts.
#[derive(Debug, Clone)]
pub struct Application {
    pub debug: bool,
    pub title: String,
    pub description: String,
    pub version: String,
    /// machine-readable schema url, None disables it
    pub openapi_url: Option<String>,
    pub openapi_tags: Vec<TagMeta>,
    /// interactive docs url, None disables it
    pub docs_url: Option<String>,
    /// alternative docs url, None disables it
    pub redoc_url: Option<String>,
    /// path prefix the application is served behind
    pub root_path: String,
    /// the closed extra-options set the documentation collaborators recognize
    pub descriptor: Descriptor,
    table: RouteTable,
    moments: Vec<Moment>,
}

impl Default for Application {
    fn default() -> Self {
        Application {
            debug: false,
            title: "Gantry".to_string(),
            description: String::new(),
            version: "0.1.0".to_string(),
            openapi_url: Some("/openapi.json".to_string()),
            openapi_tags: Vec::new(),
            docs_url: Some("/docs".to_string()),
            redoc_url: Some("/redoc".to_string()),
            root_path: String::new(),
            descriptor: Default::default(),
            table: RouteTable::new(),
            moments: vec![Moment::now("created")],
        }
    }
}

impl Application {
    pub fn new() -> Self {
        Default::default()
    }

    /// build an application from the gantry config
    pub fn from_conf() -> Self {
        let gantry = crate::conf::gantry().read().expect("conf::gantry is not initialized");

        let mut app = Application::new();
        app.debug = gantry.debug;
        app.title = gantry.app.title.clone();
        app.description = gantry.app.description.clone();
        app.version = gantry.app.version.clone();
        app.openapi_url = gantry.docs.openapi_url.clone();
        app.docs_url = gantry.docs.docs_url.clone();
        app.redoc_url = gantry.docs.redoc_url.clone();
        app.root_path = gantry.docs.root_path.clone();
        app
    }

    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = title.to_string();
        self
    }

    pub fn set_description(&mut self, description: &str) -> &mut Self {
        self.description = description.to_string();
        self
    }

    pub fn set_version(&mut self, version: &str) -> &mut Self {
        self.version = version.to_string();
        self
    }

    pub fn set_debug(&mut self, debug: bool) -> &mut Self {
        self.debug = debug;
        self
    }

    pub fn set_root_path(&mut self, root_path: &str) -> &mut Self {
        self.root_path = root_path.to_string();
        self
    }

    pub fn add_openapi_tag(&mut self, tag: TagMeta) -> &mut Self {
        self.openapi_tags.push(tag);
        self
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn route_count(&self) -> usize {
        self.table.route_count()
    }

    /// the routes the schema generator should document, in table order
    pub fn schema_routes(&self) -> Vec<&Route> {
        self.table.routes().filter(|r| r.visible_in_schema).collect()
    }

    pub fn moments(&self) -> &[Moment] {
        &self.moments
    }

    /// Append one route. Methods default to GET when unset, an omitted name
    /// stays absent. Bootstrap-time only.
    pub fn add_route(&mut self, path: &str, handler: Handler, options: RouteOptions) -> ResultEX {
        self.table.add_route(path, handler, options)
    }

    /// Merge a router's concrete routes into this application, each one
    /// cloned, prefixed with `prefix` (literal concatenation) and tagged
    /// with the union of its own tags and `tags`. Relative order from the
    /// router is preserved, non-route entries are skipped and an empty
    /// router is a no-op. Bootstrap-time only.
    pub fn include_router(&mut self, router: &Router, prefix: &str, tags: &[&str]) -> ResultEX {
        let before = self.table.route_count();
        self.table.import(router.table(), prefix, tags)?;

        let name = router.name.as_deref().unwrap_or("unnamed");
        info!("included router [{}] prefix:{} routes:{}", name, prefix, self.table.route_count() - before);
        self.moments.push(Moment::now(&format!("include:{}", name)));

        Ok(())
    }

    /// mount a sub-application at `path`
    pub fn mount(&mut self, path: &str, app: Handler, name: Option<&str>) -> ResultEX {
        url::validate_path(path)?;
        self.table.push(crate::web::route::RouteEntry::Mount(crate::web::route::Mount {
            path: path.to_string(),
            app,
            name: name.map(|n| n.to_string()),
        }));
        Ok(())
    }

    /// mount a static directory at `path`
    pub fn mount_static(&mut self, path: &str, directory: &str, name: Option<&str>) -> ResultEX {
        url::validate_path(path)?;
        self.table.push(crate::web::route::RouteEntry::Static(crate::web::route::StaticFiles {
            path: path.to_string(),
            directory: directory.to_string(),
            name: name.map(|n| n.to_string()),
        }));
        Ok(())
    }

    /// The enabled documentation endpoints, resolved against root_path.
    /// Consumed by the docs collaborators, nothing is generated here.
    pub fn docs_endpoints(&self) -> Vec<(&'static str, String)> {
        let resolve = |u: &str| -> String {
            if self.root_path.is_empty() {
                u.to_string()
            } else {
                url::join(&self.root_path, u)
            }
        };

        let mut endpoints = Vec::new();
        if let Some(u) = &self.openapi_url {
            endpoints.push(("openapi", resolve(u)));
        }
        if let Some(u) = &self.docs_url {
            endpoints.push(("docs", resolve(u)));
        }
        if let Some(u) = &self.redoc_url {
            endpoints.push(("redoc", resolve(u)));
        }
        endpoints
    }

    /// metadata plus documented routes, as one json value for the generator
    pub fn manifest(&self) -> serde_json::Value {
        serde_json::json!({
            "title": self.title,
            "description": self.description,
            "version": self.version,
            "openapi_tags": self.openapi_tags,
            "descriptor": self.descriptor,
            "routes": self.schema_routes(),
        })
    }
}
