use std::sync::OnceLock;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

static LOG_WORKER_GUARDS: OnceLock<Vec<WorkerGuard>> = OnceLock::new();

/// Initialize the global tracing subscriber from the gantry log config.
/// Safe to call more than once, only the first call takes effect.
pub fn logging_initialize() {
    if LOG_WORKER_GUARDS.get().is_some() {
        return;
    }

    let gantry = crate::conf::gantry().read().expect("conf::gantry is not initialized");
    let app_name = gantry.name.clone();
    let log_conf = match &gantry.log {
        None => Default::default(),
        Some(log) => log.clone(),
    };
    drop(gantry);

    let mut guards: Vec<WorkerGuard> = vec![];
    let mut layers = Vec::new();

    if log_conf.console {
        let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
        guards.push(guard);
        layers.push(tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(true).boxed());
    }

    let logs_dir = log_conf.dirs.trim();
    if logs_dir.len() > 0 {
        let prefix = format!("{}_gantry.log", app_name);
        let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(logs_dir, prefix));
        guards.push(guard);
        layers.push(tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(false).boxed());
    }

    let directives: &str = &log_conf.level;
    let filter = tracing_subscriber::EnvFilter::new(directives);

    let _ = tracing_subscriber::registry().with(layers).with(filter).try_init();

    let _ = LOG_WORKER_GUARDS.set(guards);
}
