use anyhow::Context;
use quakemap::{
    feed::client::FeedSource,
    layers::base::Layer,
    layers::boundary::BoundaryLayer,
    layers::group::LayerGroup,
    layers::tile::TileLayer,
    MapBuilder, MapConfig, TileCoord, UsgsFeedClient,
};

/// Fetches the live feed, composes the earthquake surface, and prints what
/// a rendering widget would consume.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = MapConfig::from_env();
    let client = UsgsFeedClient::with_url(&config.feed_url);

    log::info!("fetching earthquake feed from {}", client.url());
    let collection = match client.fetch().await {
        Ok(collection) => collection,
        Err(e) => {
            // A dead feed is a visible failure, not a blank map.
            eprintln!("could not load the earthquake feed: {e}");
            std::process::exit(1);
        }
    };

    let (events, skipped) = collection.into_events();
    if skipped > 0 {
        log::warn!("skipped {skipped} malformed feed features");
    }
    let encodings = quakemap::transform(&events);
    let markers = LayerGroup::from_encodings("quakes", "Earthquakes", &encodings);

    let mut builder = MapBuilder::new()
        .with_view(config.center, config.zoom)
        .with_base_layer(TileLayer::dark(
            "dark".to_string(),
            "Dark".to_string(),
            &config.access_token,
        ))
        .with_base_layer(TileLayer::satellite(
            "satellite".to_string(),
            "Satellite".to_string(),
            &config.access_token,
        ))
        .with_markers(markers);

    if let Some(path) = &config.plates_file {
        let boundaries = BoundaryLayer::from_geojson_file("plates", "Tectonic Plates", path)
            .with_context(|| format!("loading plate boundaries from {}", path.display()))?;
        builder = builder.with_boundaries(boundaries);
    }

    let mut map = builder.build()?;

    println!("surface: {:?}", map.state());
    println!(
        "view: ({:.1}, {:.1}) at zoom {}",
        map.viewport().center.lat,
        map.viewport().center.lng,
        map.viewport().zoom
    );

    let center_tile = TileCoord::from_lat_lng(&map.viewport().center, map.viewport().zoom as u8);
    for base in map.base_layers() {
        println!("base layer '{}': {}", base.name(), base.tile_url(&center_tile));
    }

    let control = map.control();
    println!(
        "layer control (expanded: {})",
        !control.is_collapsed()
    );
    for entry in control.base_layers() {
        let mark = if entry.active { "*" } else { " " };
        println!("  ({mark}) {}", entry.label);
    }
    for entry in control.overlays() {
        let mark = if entry.active { "x" } else { " " };
        println!("  [{mark}] {}", entry.label);
    }

    if let Some(group) = map.marker_group("quakes") {
        println!("{} event markers ({skipped} skipped)", group.len());
        if let Some(first) = group.markers().first() {
            println!(
                "first marker: ({:.2}, {:.2}) radius {} m color {}",
                first.position().lat,
                first.position().lng,
                first.radius_m(),
                first.style().fill_color
            );
        }
    }

    // A zoom change flattens every marker radius.
    map.zoom_to(map.viewport().zoom + 1.0);
    if let Some(first) = map
        .marker_group("quakes")
        .and_then(|group| group.markers().first())
    {
        println!(
            "after zoom to {}: first marker radius {} m",
            map.viewport().zoom,
            first.radius_m()
        );
    }

    Ok(())
}
