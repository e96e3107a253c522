// Host-side tests for widget text helpers.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod labels {
    include!("../src/labels.rs");
}

use labels::*;
use paint_core::{from_share_link, Configuration, Finish, Restored};

#[test]
fn capitalize_handles_ids_and_empty_input() {
    assert_eq!(capitalize("metallic"), "Metallic");
    assert_eq!(capitalize("city"), "City");
    assert_eq!(capitalize(""), "");
    assert_eq!(capitalize("é"), "É");
}

#[test]
fn option_ids_drop_the_hash() {
    assert_eq!(option_element_id("color-", "#dc2626"), "color-dc2626");
    assert_eq!(option_element_id("finish-", "matte"), "finish-matte");
}

#[test]
fn summary_lines_describe_current_configuration() {
    let mut c = Configuration::default();
    c.finish = Finish::Glossy;
    assert_eq!(summary_color(&c), "Color: #dc2626");
    assert_eq!(summary_finish(&c), "Material: Glossy");
    assert_eq!(summary_environment(&c), "Environment: Studio");
}

#[test]
fn clean_restore_has_no_notice() {
    assert!(restore_notice(&Restored::defaults()).is_none());
    assert!(restore_notice(&from_share_link("?env=city")).is_none());
}

#[test]
fn recovered_share_link_produces_notice() {
    let restored = from_share_link("?finish=chrome&env=moon");
    let (title, description) = restore_notice(&restored).expect("notice");
    assert_eq!(title, "Some shared settings were invalid");
    assert!(description.contains("unknown finish \"chrome\""), "{description}");
    assert!(description.contains("unknown environment \"moon\""), "{description}");
}
