//! Electron contribution presets keyed by [`AromaticType`].
//!
//! Each preset is a partial map from aromatic type to a pi-electron count.
//! A `None` lookup means the type is excluded under that preset. The
//! presets layer: `Daylight` falls back to `Minimal`, `Extended` falls
//! back to `Daylight`, so an overlay only spells out what it adds or
//! overrides. `Legacy` stands alone and reproduces an older valence
//! model's choices verbatim rather than layering.

use crate::typer::AromaticType;

/// Which contribution table a type-driven donation model consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TablePreset {
    /// Neutral first-row heterocycles and carbocycles only.
    Minimal,
    /// Charged species, phosphorus, arsenic, selenium, and the
    /// sulfoxide quirks, layered over `Minimal`.
    #[default]
    Daylight,
    /// Boron, tellurium, and further main-group cases, layered over
    /// `Daylight`.
    Extended,
    /// Frozen older table, kept for reproducing historic perception
    /// output. Not an overlay.
    Legacy,
}

impl TablePreset {
    /// Pi electrons the given type donates under this preset, or `None`
    /// if the type is excluded.
    pub fn contribution(self, kind: AromaticType) -> Option<u8> {
        match self {
            TablePreset::Minimal => minimal(kind),
            TablePreset::Daylight => daylight(kind).or_else(|| minimal(kind)),
            TablePreset::Extended => {
                extended(kind).or_else(|| daylight(kind)).or_else(|| minimal(kind))
            }
            TablePreset::Legacy => legacy(kind),
        }
    }
}

fn minimal(kind: AromaticType) -> Option<u8> {
    use AromaticType::*;
    match kind {
        CNeutralCyclicDouble => Some(1),
        NNeutralCyclicDouble => Some(1),
        NNeutral3Single => Some(2),
        ONeutral2Single => Some(2),
        SNeutral2Single => Some(2),
        _ => None,
    }
}

fn daylight(kind: AromaticType) -> Option<u8> {
    use AromaticType::*;
    match kind {
        // carbon
        CNeutralExoDoubleToHetero => Some(0),
        CNeutralExoDoubleToCarbon => Some(1),
        CAnion3Single => Some(2),
        CAnionCyclicDouble => Some(1),
        // an empty p orbital still completes the ring
        CCation3Single => Some(0),
        CCationCyclicDouble => Some(1),
        // nitrogen
        NCationCyclicDouble => Some(1),
        NCationOxide => Some(1),
        NNeutralExoDoubleOxide => Some(1),
        NAnion2Single => Some(2),
        // oxygen
        OCation2Single => Some(2),
        OCationCyclicDouble => Some(1),
        // phosphorus
        PNeutral3Single => Some(2),
        PNeutralCyclicDouble => Some(1),
        // sulfur, with the sulfoxide quirk: the S=O sulfur keeps its
        // lone pair in the ring
        SCation2Single => Some(2),
        SCation3Single => Some(2),
        SCationOxide => Some(2),
        SNeutralExoDoubleOxide => Some(2),
        // selenium
        SeNeutral2Single => Some(2),
        SeNeutralExoDoubleOxide => Some(2),
        SeCationCyclicDouble => Some(1),
        // arsenic
        AsNeutral3Single => Some(2),
        _ => None,
    }
}

fn extended(kind: AromaticType) -> Option<u8> {
    use AromaticType::*;
    match kind {
        BNeutral2Single => Some(0),
        BNeutral3Single => Some(0),
        BNeutralCyclicDouble => Some(1),
        BAnion3Single => Some(2),
        TeNeutral2Single => Some(2),
        TeCation2Single => Some(2),
        AsNeutralCyclicDouble => Some(1),
        AsCation3Single => Some(2),
        SeCation2Single => Some(2),
        PNeutralExoDoubleOxide => Some(0),
        PCationOxide => Some(1),
        PCation3Single => Some(2),
        _ => None,
    }
}

fn legacy(kind: AromaticType) -> Option<u8> {
    use AromaticType::*;
    match kind {
        CNeutralCyclicDouble => Some(1),
        // predates the fulvene correction: exocyclic C=C zeroes out
        CNeutralExoDoubleToCarbon => Some(0),
        CNeutralExoDoubleToHetero => Some(0),
        CAnion3Single => Some(2),
        CCation3Single => Some(0),
        NNeutralCyclicDouble => Some(1),
        NNeutral3Single => Some(2),
        NNeutralExoDouble => Some(1),
        NCationCyclicDouble => Some(1),
        ONeutral2Single => Some(2),
        SNeutral2Single => Some(2),
        SNeutralCyclicDouble => Some(1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AromaticType::*;

    #[test]
    fn daylight_overlays_minimal() {
        assert_eq!(TablePreset::Daylight.contribution(CNeutralCyclicDouble), Some(1));
        assert_eq!(TablePreset::Daylight.contribution(CAnion3Single), Some(2));
        assert_eq!(TablePreset::Minimal.contribution(CAnion3Single), None);
    }

    #[test]
    fn extended_overlays_daylight() {
        assert_eq!(TablePreset::Extended.contribution(TeNeutral2Single), Some(2));
        assert_eq!(TablePreset::Extended.contribution(SNeutralExoDoubleOxide), Some(2));
        assert_eq!(TablePreset::Extended.contribution(NNeutral3Single), Some(2));
        assert_eq!(TablePreset::Daylight.contribution(TeNeutral2Single), None);
    }

    #[test]
    fn legacy_stands_alone() {
        assert_eq!(TablePreset::Legacy.contribution(CNeutralExoDoubleToCarbon), Some(0));
        assert_eq!(TablePreset::Daylight.contribution(CNeutralExoDoubleToCarbon), Some(1));
        assert_eq!(TablePreset::Legacy.contribution(PNeutral3Single), None);
    }

    #[test]
    fn unknown_never_contributes() {
        for preset in [
            TablePreset::Minimal,
            TablePreset::Daylight,
            TablePreset::Extended,
            TablePreset::Legacy,
        ] {
            assert_eq!(preset.contribution(Unknown), None);
        }
    }
}
