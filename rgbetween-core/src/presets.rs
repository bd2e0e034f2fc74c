//! Factory gradients built into the binary.

use crate::Gradient;

/// A named gradient.
#[derive(Clone, Debug, PartialEq)]
pub struct Preset {
    pub id: &'static str,
    pub name: &'static str,
    pub gradient: Gradient,
}

/// Factory default gradients.
pub fn factory_defaults() -> Vec<Preset> {
    vec![
        grayscale(),
        fire(),
        ocean(),
        electric(),
        rainbow(),
        neon(),
    ]
}

/// Look up a factory gradient by ID.
pub fn get_preset(id: &str) -> Option<Preset> {
    factory_defaults().into_iter().find(|p| p.id == id)
}

fn uniform(id: &'static str, name: &'static str, colors: &[&str]) -> Preset {
    Preset {
        id,
        name,
        gradient: Gradient::new(colors).expect("Invalid colors in factory preset"),
    }
}

fn positioned(id: &'static str, name: &'static str, pairs: &[(&str, f64)]) -> Preset {
    Preset {
        id,
        name,
        gradient: Gradient::from_pairs(pairs).expect("Invalid stops in factory preset"),
    }
}

fn grayscale() -> Preset {
    uniform("grayscale", "Grayscale", &["#000000", "#ffffff"])
}

fn fire() -> Preset {
    uniform(
        "fire",
        "Fire",
        &["#000000", "#800000", "#ff0000", "#ff8000", "#ffff00", "#ffffff"],
    )
}

fn ocean() -> Preset {
    uniform(
        "ocean",
        "Ocean",
        &["#000040", "#004080", "#0080c0", "#40c0ff", "#ffffff"],
    )
}

fn electric() -> Preset {
    uniform(
        "electric",
        "Electric",
        &["#200040", "#400080", "#0000ff", "#00ffff", "#00ff00", "#ffff00"],
    )
}

fn rainbow() -> Preset {
    positioned(
        "rainbow",
        "Rainbow",
        &[
            ("#ff0000", 0.0),
            ("#ff7f00", 0.17),
            ("#ffff00", 0.33),
            ("#00ff00", 0.5),
            ("#0000ff", 0.67),
            ("#4b0082", 0.83),
            ("#9400d3", 1.0),
        ],
    )
}

fn neon() -> Preset {
    positioned(
        "neon",
        "Neon",
        &[
            ("#ff00ff", 0.0),
            ("#00ffff", 0.33),
            ("#ffff00", 0.67),
            ("#ff00ff", 1.0),
        ],
    )
}
