use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gantry::web::define::HttpMethod;
use gantry::web::route::{Handler, RouteOptions, Router};
use gantry::Application;
use std::sync::Arc;

struct Probe;

gantry::impl_endpoint!(Probe);

fn probe() -> Handler {
    Arc::new(Probe)
}

fn create_complex_router() -> Router {
    let mut router = Router::named("bench");
    for i in 0..64 {
        let path = format!("/resources/{}/items/{{id}}", i);
        router
            .add_route(
                &path,
                probe(),
                RouteOptions::new()
                    .method(HttpMethod::GET)
                    .method(HttpMethod::POST)
                    .method(HttpMethod::DELETE)
                    .name(&format!("resource_{}", i))
                    .tag("resources")
                    .tag("bench"),
            )
            .expect("bench route");
    }
    router
}

fn benchmark_router_clone(c: &mut Criterion) {
    let router = create_complex_router();

    c.bench_function("router_clone", |b| {
        b.iter(|| {
            let cloned = black_box(router.clone());
            black_box(cloned)
        })
    });
}

fn benchmark_include_router(c: &mut Criterion) {
    let router = create_complex_router();

    c.bench_function("include_router_64_routes", |b| {
        b.iter(|| {
            let mut app = Application::new();
            app.include_router(black_box(&router), "/api/v1", &["v1"]).expect("include");
            black_box(app)
        })
    });
}

criterion_group!(benches, benchmark_router_clone, benchmark_include_router);
criterion_main!(benches);
