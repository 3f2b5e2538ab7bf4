use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlayerRole {
    Goalkeeper,
    #[serde(rename = "Centre Back")]
    CentreBack,
    #[serde(rename = "Full Back")]
    FullBack,
    #[serde(rename = "Defensive Midfielder")]
    DefensiveMidfielder,
    #[serde(rename = "Central Midfielder")]
    CentralMidfielder,
    #[serde(rename = "Attacking Midfielder")]
    AttackingMidfielder,
    Winger,
    Striker,
}

/// Line of the pitch a role contributes its rating to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleBucket {
    Attack,
    Midfield,
    Defense,
}

impl PlayerRole {
    pub const ALL: [PlayerRole; 8] = [
        PlayerRole::Goalkeeper,
        PlayerRole::CentreBack,
        PlayerRole::FullBack,
        PlayerRole::DefensiveMidfielder,
        PlayerRole::CentralMidfielder,
        PlayerRole::AttackingMidfielder,
        PlayerRole::Winger,
        PlayerRole::Striker,
    ];

    pub fn bucket(&self) -> RoleBucket {
        match self {
            PlayerRole::Goalkeeper | PlayerRole::CentreBack | PlayerRole::FullBack => {
                RoleBucket::Defense
            }
            PlayerRole::DefensiveMidfielder
            | PlayerRole::CentralMidfielder
            | PlayerRole::AttackingMidfielder => RoleBucket::Midfield,
            PlayerRole::Winger | PlayerRole::Striker => RoleBucket::Attack,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerRole::Goalkeeper => "Goalkeeper",
            PlayerRole::CentreBack => "Centre Back",
            PlayerRole::FullBack => "Full Back",
            PlayerRole::DefensiveMidfielder => "Defensive Midfielder",
            PlayerRole::CentralMidfielder => "Central Midfielder",
            PlayerRole::AttackingMidfielder => "Attacking Midfielder",
            PlayerRole::Winger => "Winger",
            PlayerRole::Striker => "Striker",
        }
    }
}

impl Display for PlayerRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlayerRole {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        PlayerRole::ALL
            .iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("unknown player role '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_cover_every_line() {
        assert_eq!(PlayerRole::Goalkeeper.bucket(), RoleBucket::Defense);
        assert_eq!(PlayerRole::FullBack.bucket(), RoleBucket::Defense);
        assert_eq!(PlayerRole::CentralMidfielder.bucket(), RoleBucket::Midfield);
        assert_eq!(PlayerRole::Winger.bucket(), RoleBucket::Attack);
        assert_eq!(PlayerRole::Striker.bucket(), RoleBucket::Attack);
    }

    #[test]
    fn role_parses_from_display_name() {
        for role in PlayerRole::ALL {
            assert_eq!(role.to_string().parse::<PlayerRole>(), Ok(role));
        }

        assert_eq!("centre back".parse::<PlayerRole>(), Ok(PlayerRole::CentreBack));
        assert!("Sweeper".parse::<PlayerRole>().is_err());
    }

    #[test]
    fn serde_uses_display_names() {
        let json = serde_json::to_string(&PlayerRole::DefensiveMidfielder).unwrap();
        assert_eq!(json, "\"Defensive Midfielder\"");

        let role: PlayerRole = serde_json::from_str("\"Striker\"").unwrap();
        assert_eq!(role, PlayerRole::Striker);
    }
}
