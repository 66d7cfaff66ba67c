//! Simulation scenarios and their load multipliers.
//!
//! ```text
//! low     -> 0.5
//! average -> 1.0
//! peak    -> 1.5
//! other   -> 1.0
//! ```
//!
//! Lookup is case-sensitive: `"Peak"` is not `peak` and falls back to the
//! default factor.

/// Factor applied when a scenario name is not recognised.
pub const DEFAULT_FACTOR: f64 = 1.0;

/// Scenario used by `simulate` when none is given.
pub const DEFAULT_SCENARIO: &str = Scenario::Average.name();

/// A named load scenario.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scenario {
    Low,
    #[default]
    Average,
    Peak,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Low, Scenario::Average, Scenario::Peak];

    /// Exact, case-sensitive lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        Scenario::ALL.into_iter().find(|s| s.name() == name)
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Scenario::Low => "low",
            Scenario::Average => "average",
            Scenario::Peak => "peak",
        }
    }

    pub fn factor(&self) -> f64 {
        match self {
            Scenario::Low => 0.5,
            Scenario::Average => 1.0,
            Scenario::Peak => 1.5,
        }
    }
}

/// Multiplier for `name`, or [`DEFAULT_FACTOR`] when the name is unknown.
pub fn scenario_factor(name: &str) -> f64 {
    Scenario::from_name(name)
        .map(|s| s.factor())
        .unwrap_or(DEFAULT_FACTOR)
}

/// Display label for a scenario name: first character title-cased, the
/// rest lower-cased. Unknown names are labelled the same way.
///
/// The tail is lower-cased as a whole string so a word-final `Σ` becomes
/// `ς`. A first character whose upper case expands to several characters
/// keeps only the leading one upper-cased (`ß` -> `Ss`). Single-character
/// titlecase forms such as `ǅ` are not produced; `ǆ` becomes `Ǆ`.
pub fn scenario_label(name: &str) -> String {
    let Some(first) = name.chars().next() else {
        return String::new();
    };

    let mut label = String::with_capacity(name.len());
    let mut upper = first.to_uppercase();
    label.extend(upper.next());
    label.extend(upper.flat_map(char::to_lowercase));

    // Lower-casing the first character alone never depends on context, so
    // it is a prefix of the whole lower-cased name.
    let lower = name.to_lowercase();
    let skip: usize = first.to_lowercase().map(char::len_utf8).sum();
    label.push_str(&lower[skip..]);
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_factors() {
        assert_eq!(scenario_factor("low"), 0.5);
        assert_eq!(scenario_factor("average"), 1.0);
        assert_eq!(scenario_factor("peak"), 1.5);
    }

    #[test]
    fn test_unknown_falls_back() {
        assert_eq!(scenario_factor("extreme"), DEFAULT_FACTOR);
        assert_eq!(scenario_factor(""), DEFAULT_FACTOR);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(Scenario::from_name("Peak"), None);
        assert_eq!(scenario_factor("PEAK"), DEFAULT_FACTOR);
    }

    #[test]
    fn test_name_round_trips_through_lookup() {
        for s in Scenario::ALL {
            assert_eq!(Scenario::from_name(s.name()), Some(s));
        }
        assert_eq!(Scenario::default().name(), DEFAULT_SCENARIO);
    }

    #[test]
    fn test_label() {
        assert_eq!(scenario_label("peak"), "Peak");
        assert_eq!(scenario_label("extreme"), "Extreme");
        assert_eq!(scenario_label("hIGH lOAD"), "High load");
        assert_eq!(scenario_label(""), "");
    }

    #[test]
    fn test_label_unicode_case_rules() {
        assert_eq!(scenario_label("ßpeak"), "Sspeak");
        assert_eq!(scenario_label("ΟΔΟΣ"), "Οδος");
        assert_eq!(scenario_label("ΣΣ"), "Σς");
        assert_eq!(scenario_label("ﬁre"), "Fire");
    }
}
