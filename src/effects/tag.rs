//! Standing-effect tags.

use serde::{Deserialize, Serialize};

use crate::map::Region;

/// One active standing effect.
///
/// A tag sits in the basket of the side it belongs to. Hooks in
/// `super::hooks` read the baskets; the tag itself carries no behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectTag {
    /// The China Card is the card currently used for operations.
    ChinaCard,
    VietnamRevolts,
    WarsawPact,
    MarshallPlan,
    DeGaulle,
    Nato,
    Containment,
    UsJapanPact,
    RedScarePurge,
    FormosanResolution,
    Norad,
    CubanMissileCrisis,
    NuclearSubs,
    Quagmire,
    SaltNegotiations,
    BearTrap,
    WeWillBuryYou,
    BrezhnevDoctrine,
    WillyBrandt,
    FlowerPower,
    U2Incident,
    CampDavid,
    JohnPaulII,
    DeathSquads,
    ShuttleDiplomacy,
    IranianHostageCrisis,
    IronLady,
    NorthSeaOil,
    Reformer,
    IranContra,
    Chernobyl(Region),
    TearDownThisWall,
    EvilEmpire,
    YuriAndSamantha,
    Awacs,
    /// The holder must use Missile Envy for operations on its next round.
    MissileEnvy,
}

impl EffectTag {
    /// Tags that last only for the remainder of the turn.
    #[must_use]
    pub fn expires_at_end_of_turn(self) -> bool {
        matches!(
            self,
            EffectTag::ChinaCard
                | EffectTag::VietnamRevolts
                | EffectTag::Containment
                | EffectTag::RedScarePurge
                | EffectTag::CubanMissileCrisis
                | EffectTag::NuclearSubs
                | EffectTag::SaltNegotiations
                | EffectTag::BrezhnevDoctrine
                | EffectTag::U2Incident
                | EffectTag::DeathSquads
                | EffectTag::NorthSeaOil
                | EffectTag::IranContra
                | EffectTag::Chernobyl(_)
                | EffectTag::YuriAndSamantha
        )
    }
}

impl std::fmt::Display for EffectTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EffectTag::Chernobyl(region) => write!(f, "Chernobyl ({region})"),
            other => write!(f, "{other:?}"),
        }
    }
}
