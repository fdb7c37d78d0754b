// Don't change this value, it will be replaced by the version
pub static VERSION: &'static str = "0.1.0 - Dev";

pub mod app;
pub mod conf;
pub mod erx;
pub mod log;
pub mod prelude;

pub mod web;

pub use prelude::*;

#[macro_export]
macro_rules! impl_endpoint {
    ($t:ty) => {
        impl $crate::web::route::Endpoint for $t {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }
    };
}
