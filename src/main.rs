#[cfg(feature = "ssr")]
#[tokio::main]
pub async fn main() -> conduit::backend::error::MyResult<()> {
    use conduit::backend::config::ConduitConfig;
    use log::LevelFilter;

    if std::env::args().nth(1).as_deref() == Some("--print-config") {
        println!("{}", doku::to_toml::<ConduitConfig>());
        std::process::exit(0);
    }

    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .filter_module("conduit", LevelFilter::Info)
        .init();

    let config = ConduitConfig::read()?;
    conduit::backend::start(config).await
}

// The browser entry point is `hydrate()` in the library.
#[cfg(not(feature = "ssr"))]
fn main() {}
