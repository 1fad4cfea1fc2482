//! Atmospheric layer classification from altitude
//!
//! A pure threshold ladder over altitude in feet. Each interval is
//! half-open with an inclusive lower bound, so boundary altitudes
//! always land in the higher layer.

use crate::constants::{
    LOWER_STRATOSPHERE_CEILING_FT, MESOSPHERE_CEILING_FT, MID_STRATOSPHERE_CEILING_FT,
    TROPOSPHERE_CEILING_FT,
};

/// The atmospheric layer a given altitude falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtmosphereLayer {
    /// Below 11,000 ft
    Troposphere,
    /// 11,000 - 25,000 ft
    LowerStratosphere,
    /// 25,000 - 50,000 ft
    MidStratosphere,
    /// 50,000 - 85,000 ft
    Mesosphere,
    /// 85,000 ft and above
    Thermosphere,
}

impl AtmosphereLayer {
    /// Classifies an altitude (in feet) into its atmospheric layer.
    ///
    /// Deterministic and total: every input maps to exactly one layer.
    pub fn for_altitude(feet: f64) -> Self {
        if feet < TROPOSPHERE_CEILING_FT {
            AtmosphereLayer::Troposphere
        } else if feet < LOWER_STRATOSPHERE_CEILING_FT {
            AtmosphereLayer::LowerStratosphere
        } else if feet < MID_STRATOSPHERE_CEILING_FT {
            AtmosphereLayer::MidStratosphere
        } else if feet < MESOSPHERE_CEILING_FT {
            AtmosphereLayer::Mesosphere
        } else {
            AtmosphereLayer::Thermosphere
        }
    }

    /// Returns the display name of this layer
    pub fn name(&self) -> &'static str {
        match self {
            AtmosphereLayer::Troposphere => "Troposphere",
            AtmosphereLayer::LowerStratosphere => "Lower Stratosphere",
            AtmosphereLayer::MidStratosphere => "Mid Stratosphere",
            AtmosphereLayer::Mesosphere => "Mesosphere",
            AtmosphereLayer::Thermosphere => "Thermosphere",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_ladder() {
        assert_eq!(
            AtmosphereLayer::for_altitude(0.0),
            AtmosphereLayer::Troposphere
        );
        assert_eq!(
            AtmosphereLayer::for_altitude(15_000.0),
            AtmosphereLayer::LowerStratosphere
        );
        assert_eq!(
            AtmosphereLayer::for_altitude(30_000.0),
            AtmosphereLayer::MidStratosphere
        );
        assert_eq!(
            AtmosphereLayer::for_altitude(60_000.0),
            AtmosphereLayer::Mesosphere
        );
        assert_eq!(
            AtmosphereLayer::for_altitude(100_000.0),
            AtmosphereLayer::Thermosphere
        );
    }

    #[test]
    fn test_lower_bounds_are_inclusive() {
        // Just under each boundary stays in the lower layer...
        assert_eq!(
            AtmosphereLayer::for_altitude(10_999.9),
            AtmosphereLayer::Troposphere
        );
        assert_eq!(
            AtmosphereLayer::for_altitude(24_999.9),
            AtmosphereLayer::LowerStratosphere
        );
        assert_eq!(
            AtmosphereLayer::for_altitude(49_999.9),
            AtmosphereLayer::MidStratosphere
        );
        assert_eq!(
            AtmosphereLayer::for_altitude(84_999.9),
            AtmosphereLayer::Mesosphere
        );

        // ...while the boundary itself lands in the higher one.
        assert_eq!(
            AtmosphereLayer::for_altitude(11_000.0),
            AtmosphereLayer::LowerStratosphere
        );
        assert_eq!(
            AtmosphereLayer::for_altitude(25_000.0),
            AtmosphereLayer::MidStratosphere
        );
        assert_eq!(
            AtmosphereLayer::for_altitude(50_000.0),
            AtmosphereLayer::Mesosphere
        );
        assert_eq!(
            AtmosphereLayer::for_altitude(85_000.0),
            AtmosphereLayer::Thermosphere
        );
    }

    #[test]
    fn test_negative_altitude_is_troposphere() {
        // Below sea level (the sensor reports these near the coast)
        assert_eq!(
            AtmosphereLayer::for_altitude(-50.0),
            AtmosphereLayer::Troposphere
        );
    }
}
