pub use crate::app::Application;
pub use crate::erx::{Erx, ResultE, ResultEX};
pub use crate::web::define::HttpMethod;
pub use crate::web::route::{Endpoint, Handler, Route, RouteEntry, RouteOptions, Router};
