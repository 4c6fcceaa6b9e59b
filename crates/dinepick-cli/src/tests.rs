use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["dinepick"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_cuisines_command() {
    let cli = Cli::try_parse_from(["dinepick", "cuisines"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Cuisines)));
}

#[test]
fn parses_pick_with_filters() {
    let cli = Cli::try_parse_from([
        "dinepick", "pick", "--price", "2", "--cuisine", "japanese", "--seed", "9",
    ])
    .expect("expected valid cli args");

    let Some(Commands::Pick(args)) = cli.command else {
        panic!("expected pick command");
    };
    assert_eq!(args.price, Some(2));
    assert_eq!(args.cuisine, Some(Cuisine::Japanese));
    assert_eq!(args.seed, Some(9));
    assert!(!args.json);
    assert!(args.custom.is_none());
}

#[test]
fn pick_rejects_out_of_range_price() {
    let result = Cli::try_parse_from(["dinepick", "pick", "--price", "5"]);
    assert!(result.is_err());
}

#[test]
fn pick_rejects_unknown_cuisine() {
    let result = Cli::try_parse_from(["dinepick", "pick", "--cuisine", "thai"]);
    assert!(result.is_err());
}

#[test]
fn pick_accepts_custom_text() {
    let cli = Cli::try_parse_from(["dinepick", "pick", "--custom", "牛肉麵", "--json"])
        .expect("expected valid cli args");
    let Some(Commands::Pick(args)) = cli.command else {
        panic!("expected pick command");
    };
    assert_eq!(args.custom.as_deref(), Some("牛肉麵"));
    assert!(args.json);
}

#[test]
fn locate_accepts_negative_coordinates() {
    let cli = Cli::try_parse_from(["dinepick", "locate", "--lat", "-33.87", "--lng", "151.21"])
        .expect("expected valid cli args");
    let Some(Commands::Locate { location }) = cli.command else {
        panic!("expected locate command");
    };
    assert_eq!(location.lat, Some(-33.87));
    assert_eq!(location.lng, Some(151.21));
}

#[test]
fn latitude_requires_longitude() {
    let result = Cli::try_parse_from(["dinepick", "locate", "--lat", "25.0"]);
    assert!(result.is_err());
}

#[test]
fn coordinates_must_be_finite_and_in_range() {
    for (lat, lng) in [("NaN", "121.5"), ("91", "121.5"), ("25.0", "181"), ("25.0", "-inf")] {
        let result = Cli::try_parse_from(["dinepick", "locate", "--lat", lat, "--lng", lng]);
        assert!(result.is_err(), "expected rejection of ({lat}, {lng})");
    }
}

#[test]
fn coordinate_bounds_are_inclusive() {
    let cli = Cli::try_parse_from(["dinepick", "pick", "--lat", "-90", "--lng", "180"])
        .expect("expected valid cli args");
    let Some(Commands::Pick(args)) = cli.command else {
        panic!("expected pick command");
    };
    assert_eq!(args.location.lat, Some(-90.0));
    assert_eq!(args.location.lng, Some(180.0));
}
