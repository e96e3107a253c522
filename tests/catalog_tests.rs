// Host-side tests for the static option tables.

use paint_core::*;
use std::collections::HashSet;

#[test]
fn color_catalog_has_eight_unique_named_entries() {
    assert_eq!(COLOR_CATALOG.len(), 8);
    let values: HashSet<_> = COLOR_CATALOG.iter().map(|c| c.value).collect();
    assert_eq!(values.len(), 8);
    assert!(COLOR_CATALOG.iter().all(|c| !c.name.is_empty()));
    assert_eq!(COLOR_CATALOG[2].name, "Racing Red");
    assert_eq!(COLOR_CATALOG[2].value.to_hex(), "#dc2626");
    assert_eq!(COLOR_CATALOG[7].value.to_hex(), "#64748b");
}

#[test]
fn catalog_hex_values_round_trip_through_parser() {
    for option in COLOR_CATALOG.iter() {
        assert_eq!(HexColor::parse(&option.value.to_hex()).unwrap(), option.value);
    }
}

#[test]
fn color_option_lookup() {
    let red = HexColor::parse("#dc2626").unwrap();
    assert_eq!(color_option(red).map(|c| c.name), Some("Racing Red"));
    assert!(color_option(HexColor::from_rgb(1, 2, 3)).is_none());
}

#[test]
fn finish_ids_round_trip_and_reject_others() {
    for finish in Finish::ALL {
        assert_eq!(Finish::from_id(finish.id()), Some(finish));
        assert_eq!(finish.id().parse::<Finish>().unwrap(), finish);
        assert!(!finish.description().is_empty());
    }
    assert_eq!(Finish::from_id("chrome"), None);
    assert_eq!(Finish::from_id("Metallic"), None, "ids are case-sensitive");
    assert_eq!(
        "chrome".parse::<Finish>(),
        Err(ConfigError::invalid(Field::Finish, "chrome"))
    );
}

#[test]
fn environments_map_to_renderer_presets() {
    let presets: Vec<_> = Environment::ALL.iter().map(|e| e.renderer_preset()).collect();
    assert_eq!(presets, ["studio", "city", "sunset", "forest"]);
    assert_eq!(Environment::City.display_name(), "Urban");
    assert_eq!(Environment::Forest.display_name(), "Nature");
    assert_eq!("sunset".parse::<Environment>().unwrap(), Environment::Sunset);
    assert!("beach".parse::<Environment>().is_err());
}

#[test]
fn field_names_and_aliases() {
    for field in Field::ALL {
        assert_eq!(Field::from_name(field.as_str()), Some(field));
    }
    assert_eq!(Field::from_name("material"), Some(Field::Finish));
    assert_eq!(Field::from_name("env"), Some(Field::Environment));
    assert_eq!(Field::from_name("paint"), None);
}
