//! The billboard shader is embedded at compile time; parse and validate it
//! here so a WGSL typo fails in CI instead of at first launch.

use naga::valid::{Capabilities, ValidationFlags, Validator};

#[test]
fn billboard_shader_parses_and_validates() {
    let module =
        naga::front::wgsl::parse_str(ringfield::SHADER_SOURCE).expect("WGSL should parse");

    let mut validator = Validator::new(ValidationFlags::all(), Capabilities::all());
    validator.validate(&module).expect("WGSL should validate");

    let entry_points: Vec<&str> = module.entry_points.iter().map(|e| e.name.as_str()).collect();
    assert!(entry_points.contains(&"vs_main"));
    assert!(entry_points.contains(&"fs_main"));
}
