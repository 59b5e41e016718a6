//! Distance units and their conversion factors relative to kilometers.

use std::fmt;
use std::str::FromStr;

use crate::error::RulerError;

/// Output unit of a [`CheapRuler`](crate::ruler::CheapRuler).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Unit {
    #[default]
    Kilometers,
    Miles,
    NauticalMiles,
    Meters,
    Metres,
    Yards,
    Feet,
    Inches,
}

/// Unit table: (name, unit, multiplier from kilometers).
const UNITS: [(&str, Unit, f64); 8] = [
    ("kilometers", Unit::Kilometers, 1.0),
    ("miles", Unit::Miles, 1000.0 / 1609.344),
    ("nauticalmiles", Unit::NauticalMiles, 1000.0 / 1852.0),
    ("meters", Unit::Meters, 1000.0),
    ("metres", Unit::Metres, 1000.0),
    ("yards", Unit::Yards, 1000.0 / 0.9144),
    ("feet", Unit::Feet, 1000.0 / 0.3048),
    ("inches", Unit::Inches, 1000.0 / 0.0254),
];

impl Unit {
    /// All supported units, in table order.
    pub const ALL: [Unit; 8] = [
        Unit::Kilometers,
        Unit::Miles,
        Unit::NauticalMiles,
        Unit::Meters,
        Unit::Metres,
        Unit::Yards,
        Unit::Feet,
        Unit::Inches,
    ];

    /// Parse from a unit name such as `"kilometers"` or `"nauticalmiles"`.
    ///
    /// Names are matched exactly. The error lists every accepted name.
    pub fn from_name(s: &str) -> Result<Self, RulerError> {
        UNITS
            .iter()
            .find(|(name, _, _)| *name == s)
            .map(|&(_, unit, _)| unit)
            .ok_or_else(|| RulerError::UnknownUnit {
                unit: s.to_string(),
                valid: Self::names(),
            })
    }

    /// Canonical name of this unit.
    pub fn name(&self) -> &'static str {
        UNITS[self.index()].0
    }

    /// Multiplier converting kilometers into this unit.
    pub fn factor(&self) -> f64 {
        UNITS[self.index()].2
    }

    /// Every accepted unit name.
    pub fn names() -> Vec<&'static str> {
        UNITS.iter().map(|(name, _, _)| *name).collect()
    }

    fn index(&self) -> usize {
        match self {
            Self::Kilometers => 0,
            Self::Miles => 1,
            Self::NauticalMiles => 2,
            Self::Meters => 3,
            Self::Metres => 4,
            Self::Yards => 5,
            Self::Feet => 6,
            Self::Inches => 7,
        }
    }
}

impl FromStr for Unit {
    type Err = RulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
