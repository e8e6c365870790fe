// logging.rs - stderr tracing for the simulator and its panic reports

use std::panic::PanicHookInfo;

use tracing_subscriber::EnvFilter;

/// Our crates at info, everything underneath (eframe, winit, glow) at warn.
const DEFAULT_FILTER: &str = "warn,conway=info,conway_gui=info";

/// Install the subscriber and route panics through it. `RUST_LOG` overrides the filter.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok();

    if installed {
        std::panic::set_hook(Box::new(log_panic));
    }
}

fn panic_message<'a>(info: &'a PanicHookInfo<'_>) -> &'a str {
    let payload = info.payload();
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}

fn log_panic(info: &PanicHookInfo<'_>) {
    match info.location() {
        Some(at) => tracing::error!(
            file = at.file(),
            line = at.line(),
            "simulator panicked: {}",
            panic_message(info)
        ),
        None => tracing::error!("simulator panicked: {}", panic_message(info)),
    }
}
