//! Math utility functions.

use euclid::default::Vector3D;

use crate::color::{Component, Components};

type Vector = Vector3D<Component>;

/// Return the dot product of the 3 components with the given weights.
pub fn weighted_sum(weights: &Components, components: &Components) -> Component {
    let Components(x, y, z) = *weights;
    let weights = Vector::new(x, y, z);

    let Components(x, y, z) = *components;
    weights.dot(Vector::new(x, y, z))
}

/// Returns true if the value is close enough to zero to be considered zero.
pub fn almost_zero(value: Component) -> bool {
    value.abs() < Component::EPSILON
}

/// Wrap a hue in degrees into `[0, 360)`.
pub fn normalize_hue(hue: Component) -> Component {
    hue.rem_euclid(360.0)
}

/// Treat NaN (powerless) components as zero.
pub fn normalize(value: Component) -> Component {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn weighted_sum_is_a_dot_product() {
        let sum = weighted_sum(&Components(1.0, 2.0, 3.0), &Components(0.5, 0.25, 0.1));
        assert_component_eq!(sum, 1.3);
    }

    #[test]
    fn hues_wrap_around() {
        assert_component_eq!(normalize_hue(370.0), 10.0);
        assert_component_eq!(normalize_hue(-90.0), 270.0);
        assert_component_eq!(normalize_hue(360.0), 0.0);
    }

    #[test]
    fn nan_normalizes_to_zero() {
        assert_eq!(normalize(Component::NAN), 0.0);
        assert_eq!(normalize(0.5), 0.5);
    }
}
