pub mod define;
pub mod docs;
pub mod route;
pub mod url;

/// collect routers for a merge
#[macro_export]
macro_rules! web_routers {
    ( $( $x:expr ),* ) => {
        {
            let mut routers: Vec<$crate::web::route::Router> = vec![];

            $(
                routers.push($x);
            )*

            routers
        }
    };
}
