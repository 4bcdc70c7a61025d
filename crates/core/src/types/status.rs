//! Status enum for quote requests.

use serde::{Deserialize, Serialize};

/// Processing status of a quote request ("demande de devis").
///
/// New submissions always start as `Nouveau`; the other states are set
/// manually by whoever handles the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    /// Freshly submitted, nobody has looked at it yet.
    #[default]
    Nouveau,
    /// A quote is being prepared.
    EnCours,
    /// The quote was sent back to the customer.
    Traite,
}

impl QuoteStatus {
    /// Wire/database representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Nouveau => "nouveau",
            Self::EnCours => "en_cours",
            Self::Traite => "traite",
        }
    }
}

impl std::fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for QuoteStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nouveau" => Ok(Self::Nouveau),
            "en_cours" => Ok(Self::EnCours),
            "traite" => Ok(Self::Traite),
            _ => Err(format!("invalid quote status: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_nouveau() {
        assert_eq!(QuoteStatus::default(), QuoteStatus::Nouveau);
    }

    #[test]
    fn test_display_from_str_roundtrip() {
        for status in [
            QuoteStatus::Nouveau,
            QuoteStatus::EnCours,
            QuoteStatus::Traite,
        ] {
            let parsed: QuoteStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("archived".parse::<QuoteStatus>().is_err());
    }

    #[test]
    fn test_serde_wire_format() {
        let json = serde_json::to_string(&QuoteStatus::Nouveau).unwrap();
        assert_eq!(json, "\"nouveau\"");
    }
}
