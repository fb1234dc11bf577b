//! Hemisphere, element and modality distributions.
//!
//! Percentages are `count / total * 100`. An empty input yields all zeros,
//! although the classifier rejects fewer than three bodies before reaching
//! this layer.

use crate::core::{Element, ElementBalance, HemisphereBalance, Modality, ModalityBalance};
use crate::geometry::{arc_contains, normalize};

/// Element of each sign, Aries first.
pub const SIGN_ELEMENTS: [Element; 12] = [
    Element::Fire,
    Element::Earth,
    Element::Air,
    Element::Water,
    Element::Fire,
    Element::Earth,
    Element::Air,
    Element::Water,
    Element::Fire,
    Element::Earth,
    Element::Air,
    Element::Water,
];

/// Modality of each sign, Aries first.
pub const SIGN_MODALITIES: [Modality; 12] = [
    Modality::Cardinal,
    Modality::Fixed,
    Modality::Mutable,
    Modality::Cardinal,
    Modality::Fixed,
    Modality::Mutable,
    Modality::Cardinal,
    Modality::Fixed,
    Modality::Mutable,
    Modality::Cardinal,
    Modality::Fixed,
    Modality::Mutable,
];

/// Zodiac sign index `0..12` for a longitude.
pub fn sign_index(longitude: f64) -> usize {
    ((normalize(longitude) / 30.0).floor() as usize) % 12
}

pub fn element_of(longitude: f64) -> Element {
    SIGN_ELEMENTS[sign_index(longitude)]
}

pub fn modality_of(longitude: f64) -> Modality {
    SIGN_MODALITIES[sign_index(longitude)]
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

fn is_northern(longitude: f64) -> bool {
    arc_contains(longitude, 0.0, 180.0)
}

fn is_eastern(longitude: f64) -> bool {
    arc_contains(longitude, 270.0, 90.0)
}

/// North is `[0, 180)`, east is `[270, 360) ∪ [0, 90)`.
pub fn hemisphere_balance(longitudes: &[f64]) -> HemisphereBalance {
    let total = longitudes.len();
    let north = longitudes.iter().filter(|&&l| is_northern(l)).count();
    let east = longitudes.iter().filter(|&&l| is_eastern(l)).count();

    HemisphereBalance {
        north: percent(north, total),
        south: percent(total - north, total),
        east: percent(east, total),
        west: percent(total - east, total),
    }
}

pub fn element_balance(longitudes: &[f64]) -> ElementBalance {
    let total = longitudes.len();
    let count = |element: Element| {
        longitudes
            .iter()
            .filter(|&&l| element_of(l) == element)
            .count()
    };

    ElementBalance {
        fire: percent(count(Element::Fire), total),
        earth: percent(count(Element::Earth), total),
        air: percent(count(Element::Air), total),
        water: percent(count(Element::Water), total),
    }
}

pub fn modality_balance(longitudes: &[f64]) -> ModalityBalance {
    let total = longitudes.len();
    let count = |modality: Modality| {
        longitudes
            .iter()
            .filter(|&&l| modality_of(l) == modality)
            .count()
    };

    ModalityBalance {
        cardinal: percent(count(Modality::Cardinal), total),
        fixed: percent(count(Modality::Fixed), total),
        mutable: percent(count(Modality::Mutable), total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_index_boundaries() {
        assert_eq!(sign_index(0.0), 0);
        assert_eq!(sign_index(29.999), 0);
        assert_eq!(sign_index(30.0), 1);
        assert_eq!(sign_index(359.9), 11);
        assert_eq!(sign_index(-1.0), 11);
    }

    #[test]
    fn test_element_and_modality_tables() {
        // Leo
        assert_eq!(element_of(135.0), Element::Fire);
        assert_eq!(modality_of(135.0), Modality::Fixed);
        // Capricorn
        assert_eq!(element_of(275.0), Element::Earth);
        assert_eq!(modality_of(275.0), Modality::Cardinal);
        // Pisces
        assert_eq!(element_of(345.0), Element::Water);
        assert_eq!(modality_of(345.0), Modality::Mutable);
    }

    #[test]
    fn test_hemisphere_balance() {
        let balance = hemisphere_balance(&[10.0, 100.0, 200.0, 300.0]);
        assert_eq!(balance.north, 50.0);
        assert_eq!(balance.south, 50.0);
        // 10 and 300 are eastern
        assert_eq!(balance.east, 50.0);
        assert_eq!(balance.west, 50.0);
    }

    #[test]
    fn test_hemisphere_edges() {
        let balance = hemisphere_balance(&[0.0, 90.0, 180.0, 270.0]);
        // 0 and 90 north; 0 and 270 east
        assert_eq!(balance.north, 50.0);
        assert_eq!(balance.east, 50.0);
    }

    #[test]
    fn test_element_balance_sums_to_hundred() {
        let balance = element_balance(&[5.0, 35.0, 65.0, 95.0, 125.0]);
        assert_eq!(balance.fire, 40.0);
        assert_eq!(balance.earth, 20.0);
        assert_eq!(balance.air, 20.0);
        assert_eq!(balance.water, 20.0);
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        assert_eq!(modality_balance(&[]), ModalityBalance::default());
        assert_eq!(hemisphere_balance(&[]), HemisphereBalance::default());
    }
}
