//! The nine deities.
//!
//! A `Deity` is both a player's patron and the identity printed on a shrine
//! card. Reference data only: name, ability text, and which secondary
//! ability policy applies.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A patron deity. Also the identity of a shrine card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Deity {
    Athena,
    Ares,
    Hephaestus,
    Hermes,
    Hera,
    Apollo,
    Hestia,
    Artemis,
    Demeter,
}

/// How a deity's secondary ability behaves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityKind {
    /// Usable when ready, then recharges over a fixed number of end-turns.
    Cooldown,
    /// Toggles a clone on and off. Never gated.
    CloneToggle,
    /// Always on. Using it changes nothing.
    Passive,
}

impl Deity {
    /// All deities in canonical order.
    pub const ALL: [Deity; 9] = [
        Deity::Athena,
        Deity::Ares,
        Deity::Hephaestus,
        Deity::Hermes,
        Deity::Hera,
        Deity::Apollo,
        Deity::Hestia,
        Deity::Artemis,
        Deity::Demeter,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Deity::Athena => "Athena",
            Deity::Ares => "Ares",
            Deity::Hephaestus => "Hephaestus",
            Deity::Hermes => "Hermes",
            Deity::Hera => "Hera",
            Deity::Apollo => "Apollo",
            Deity::Hestia => "Hestia",
            Deity::Artemis => "Artemis",
            Deity::Demeter => "Demeter",
        }
    }

    /// Ability text shown on the selection screen.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Deity::Athena => "Move 2 walls every 3 turns",
            Deity::Ares => "Break walls while moving every 3 turns",
            Deity::Hephaestus => "Add walls every 3 turns",
            Deity::Hermes => "Move 2 spaces every 3 turns",
            Deity::Hera => "Spawn a controllable clone",
            Deity::Apollo => "See next shrine card always",
            Deity::Hestia => "Draw shrine cards every 3 turns",
            Deity::Artemis => "Place traps every 3 turns",
            Deity::Demeter => "Enhance all shrine cards",
        }
    }

    /// Which secondary ability policy this deity uses.
    #[must_use]
    pub const fn ability_kind(self) -> AbilityKind {
        match self {
            Deity::Hera => AbilityKind::CloneToggle,
            Deity::Apollo | Deity::Demeter => AbilityKind::Passive,
            Deity::Athena
            | Deity::Ares
            | Deity::Hephaestus
            | Deity::Hermes
            | Deity::Hestia
            | Deity::Artemis => AbilityKind::Cooldown,
        }
    }

    /// Apollo picks a starting shrine before the match begins.
    #[must_use]
    pub const fn picks_starting_shrine(self) -> bool {
        matches!(self, Deity::Apollo)
    }

    /// Demeter draws a usable shrine when the match starts, and enhances
    /// every shrine it spends.
    #[must_use]
    pub const fn enhances_shrines(self) -> bool {
        matches!(self, Deity::Demeter)
    }
}

impl std::fmt::Display for Deity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown deity name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown deity {0:?}")]
pub struct UnknownDeity(pub String);

impl FromStr for Deity {
    type Err = UnknownDeity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Deity::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownDeity(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ability_kinds() {
        let cooldown: Vec<_> = Deity::ALL
            .into_iter()
            .filter(|d| d.ability_kind() == AbilityKind::Cooldown)
            .collect();
        assert_eq!(
            cooldown,
            vec![
                Deity::Athena,
                Deity::Ares,
                Deity::Hephaestus,
                Deity::Hermes,
                Deity::Hestia,
                Deity::Artemis
            ]
        );
        assert_eq!(Deity::Hera.ability_kind(), AbilityKind::CloneToggle);
        assert_eq!(Deity::Apollo.ability_kind(), AbilityKind::Passive);
        assert_eq!(Deity::Demeter.ability_kind(), AbilityKind::Passive);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(Deity::Hera.description(), "Spawn a controllable clone");
        assert_eq!(Deity::Apollo.description(), "See next shrine card always");
    }

    #[test]
    fn test_parse() {
        assert_eq!("Ares".parse::<Deity>(), Ok(Deity::Ares));
        assert_eq!("hephaestus".parse::<Deity>(), Ok(Deity::Hephaestus));
        assert_eq!(
            "Zeus".parse::<Deity>(),
            Err(UnknownDeity("Zeus".to_string()))
        );
    }

    #[test]
    fn test_display_matches_name() {
        for deity in Deity::ALL {
            assert_eq!(deity.to_string(), deity.name());
        }
    }
}
