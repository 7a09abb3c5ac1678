//! Reference unit definitions: length, weight, temperature, volume

use crate::{Category, Conversion, Registry, Unit};
use std::sync::LazyLock;

/// Global reference registry
pub static REGISTRY: LazyLock<Registry> = LazyLock::new(reference_registry);

/// Build the reference registry
pub fn reference_registry() -> Registry {
    Registry::from_parts(vec![length(), weight(), temperature(), volume()])
}

fn length() -> Category {
    // Base unit: meter
    Category::new(
        "length",
        "Length",
        Conversion::Linear,
        vec![
            Unit::new("meter", "Meter", 1.0),
            Unit::new("kilometer", "Kilometer", 1000.0),
            Unit::new("centimeter", "Centimeter", 0.01),
            Unit::new("millimeter", "Millimeter", 0.001),
            Unit::new("mile", "Mile", 1609.34),
            Unit::new("yard", "Yard", 0.9144),
            Unit::new("foot", "Foot", 0.3048),
            Unit::new("inch", "Inch", 0.0254),
        ],
    )
}

fn weight() -> Category {
    // Base unit: kilogram
    Category::new(
        "weight",
        "Weight",
        Conversion::Linear,
        vec![
            Unit::new("kilogram", "Kilogram", 1.0),
            Unit::new("gram", "Gram", 0.001),
            Unit::new("milligram", "Milligram", 0.000001),
            Unit::new("pound", "Pound", 0.453592),
            Unit::new("ounce", "Ounce", 0.0283495),
            Unit::new("ton", "Metric Ton", 1000.0),
        ],
    )
}

fn temperature() -> Category {
    Category::new(
        "temperature",
        "Temperature",
        Conversion::Temperature,
        vec![
            Unit::formula("celsius", "Celsius"),
            Unit::formula("fahrenheit", "Fahrenheit"),
            Unit::formula("kelvin", "Kelvin"),
        ],
    )
    .with_negative(true)
}

fn volume() -> Category {
    // Base unit: liter
    Category::new(
        "volume",
        "Volume",
        Conversion::Linear,
        vec![
            Unit::new("liter", "Liter", 1.0),
            Unit::new("milliliter", "Milliliter", 0.001),
            Unit::new("cubicMeter", "Cubic Meter", 1000.0),
            Unit::new("gallon", "Gallon (US)", 3.78541),
            Unit::new("quart", "Quart (US)", 0.946353),
            Unit::new("pint", "Pint (US)", 0.473176),
            Unit::new("cup", "Cup (US)", 0.236588),
            Unit::new("fluidOunce", "Fluid Ounce (US)", 0.0295735),
        ],
    )
}
