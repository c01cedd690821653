//! Prints the configuration a map would be created with for a given viewport width.
//!
//! ```sh
//! cargo run --example map_config -- 480
//! cargo run --example map_config -- 1280 '{"wideZoom": 6}'
//! ```

use anyhow::Context;
use map_service::{
    FixedViewport, MapConfig, MapHandleProvider, MapOptions, MapServiceError, MapWidgetFactory,
};

/// Factory that "creates" a map by printing its options as they would be passed to the widget.
struct PrintingFactory;

impl MapWidgetFactory for PrintingFactory {
    type Handle = String;

    fn create(&self, container_id: &str, config: &MapConfig) -> Result<String, MapServiceError> {
        let options = serde_json::to_string_pretty(config)?;
        Ok(format!("new google.maps.Map(#{container_id}, {options})"))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let width: u32 = args
        .next()
        .unwrap_or_else(|| "1024".to_string())
        .parse()
        .context("viewport width must be a positive integer")?;
    let options = match args.next() {
        Some(json) => MapOptions::from_json(&json)?,
        None => MapOptions::default(),
    };

    let mut provider =
        MapHandleProvider::with_options(PrintingFactory, FixedViewport::new(width), options);
    provider.initialize()?;

    if let Some(handle) = provider.handle() {
        println!("{handle}");
    }

    Ok(())
}
