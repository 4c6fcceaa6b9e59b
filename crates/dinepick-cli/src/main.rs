use clap::{Args, Parser, Subcommand};
use dinepick_core::view::{location_status, render_restaurant, search_button_label};
use dinepick_core::{
    AppConfig, Coordinate, Cuisine, LocationProvider, MapViewport, NoGeolocation, PriceTier,
    RestaurantPicker, StaticLocation, DEFAULT_ZOOM,
};
use dinepick_places::{IpGeolocator, PlacesClient};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "dinepick")]
#[command(about = "Pick a random restaurant near you")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve and print the current location.
    Locate {
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Search nearby restaurants and pick one at random.
    Pick(PickArgs),
    /// List the cuisine categories and their search keywords.
    Cuisines,
}

#[derive(Debug, Clone, Args)]
struct LocationArgs {
    /// Latitude to use instead of geolocation.
    #[arg(long, requires = "lng", allow_negative_numbers = true, value_parser = parse_latitude)]
    lat: Option<f64>,
    /// Longitude to use instead of geolocation.
    #[arg(long, requires = "lat", allow_negative_numbers = true, value_parser = parse_longitude)]
    lng: Option<f64>,
}

#[derive(Debug, Clone, Args)]
struct PickArgs {
    /// Price tier from 1 (cheapest) to 4.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
    price: Option<u8>,
    /// Cuisine category: chinese, japanese, western, korean or custom.
    #[arg(long)]
    cuisine: Option<Cuisine>,
    /// Free-text cuisine; adding it makes `custom` the active category.
    #[arg(long)]
    custom: Option<String>,
    #[command(flatten)]
    location: LocationArgs,
    /// Seed for the random pick, for reproducible results.
    #[arg(long)]
    seed: Option<u64>,
    /// Print the picked restaurant as JSON.
    #[arg(long)]
    json: bool,
}

fn parse_degrees(raw: &str, limit: f64) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|e| format!("{e}"))?;
    if !value.is_finite() || value.abs() > limit {
        return Err(format!("must be a number between -{limit} and {limit}"));
    }
    Ok(value)
}

fn parse_latitude(raw: &str) -> Result<f64, String> {
    parse_degrees(raw, 90.0)
}

fn parse_longitude(raw: &str) -> Result<f64, String> {
    parse_degrees(raw, 180.0)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("dinepick: run `dinepick pick` to choose a restaurant");
        return Ok(());
    };

    if matches!(command, Commands::Cuisines) {
        print_cuisines();
        return Ok(());
    }

    let config = dinepick_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    match command {
        Commands::Locate { location } => locate(&config, &location).await,
        Commands::Pick(args) => pick(&config, &args).await,
        Commands::Cuisines => Ok(()),
    }
}

fn print_cuisines() {
    for cuisine in Cuisine::ALL {
        println!(
            "{:<10} {:<16} {}",
            cuisine.key(),
            cuisine.label(),
            cuisine.keyword().unwrap_or("(free text)")
        );
    }
}

/// Fixed coordinates on the command line win; otherwise IP geolocation when
/// configured, or none at all.
fn build_locator(
    config: &AppConfig,
    args: &LocationArgs,
) -> anyhow::Result<Box<dyn LocationProvider>> {
    if let (Some(lat), Some(lng)) = (args.lat, args.lng) {
        return Ok(Box::new(StaticLocation(Coordinate::new(lat, lng))));
    }
    match config.geolocation_url.as_deref() {
        Some(url) => Ok(Box::new(IpGeolocator::new(
            url,
            &config.user_agent,
            config.request_timeout_secs,
        )?)),
        None => Ok(Box::new(NoGeolocation)),
    }
}

async fn locate(config: &AppConfig, args: &LocationArgs) -> anyhow::Result<()> {
    let locator = build_locator(config, args)?;
    match locator.current_location().await {
        Ok(coordinate) => {
            println!("{coordinate}");
            Ok(())
        }
        Err(err) => anyhow::bail!(dinepick_core::PickerError::from(err)),
    }
}

async fn pick(config: &AppConfig, args: &PickArgs) -> anyhow::Result<()> {
    let places = PlacesClient::from_app_config(config)?;
    let locator = build_locator(config, &args.location)?;

    let mut picker: RestaurantPicker<_, _, MapViewport> =
        RestaurantPicker::new(places, locator).with_radius(config.search_radius_m);
    if let Some(seed) = args.seed {
        picker = picker.with_rng(StdRng::seed_from_u64(seed));
    }
    picker.attach_map(MapViewport::new(config.default_center, DEFAULT_ZOOM));

    let form = picker.form_mut();
    form.price_tier = args.price.and_then(PriceTier::from_level);
    form.select_cuisine(args.cuisine);
    if let Some(custom) = &args.custom {
        custom.clone_into(&mut form.custom_input);
        form.add_custom_cuisine();
    }

    if picker.acquire_location().await.is_err() {
        anyhow::bail!(error_message(&picker));
    }
    if let Some(status) = location_status(picker.location()) {
        eprintln!("{status}");
    }
    eprintln!("當前關鍵字：{}", picker.form().current_keyword_label());
    eprintln!("{}", search_button_label(picker.ui()));

    match picker.pick_restaurant().await {
        Ok(Some(restaurant)) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&restaurant)?);
            } else {
                println!("{}", render_restaurant(&restaurant));
            }
            if let Some(map) = picker.map() {
                tracing::info!(center = %map.center, zoom = map.zoom, "map centered");
            }
            Ok(())
        }
        Ok(None) => anyhow::bail!("search is not available without a location"),
        Err(_) => anyhow::bail!(error_message(&picker)),
    }
}

fn error_message<P, L, M>(picker: &RestaurantPicker<P, L, M>) -> String
where
    P: dinepick_core::PlacesService,
    L: LocationProvider,
    M: dinepick_core::MapView,
{
    picker
        .ui()
        .error_message
        .clone()
        .unwrap_or_else(|| "未知錯誤".to_string())
}

#[cfg(test)]
mod tests;
