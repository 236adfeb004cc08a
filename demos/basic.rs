//! Default field: move the pointer to drag the ring around, stop moving for
//! two seconds and the field takes itself for a walk.
//!
//! Run with: `cargo run --example basic`

use ringfield::prelude::*;

fn main() -> Result<(), FieldError> {
    ringfield::run(FieldConfig {
        auto_animate: true,
        ..Default::default()
    })
}
