//! Region scoring cards.

use crate::cards::ids::{
    AFRICA_SCORING, ASIA_SCORING, CENTRAL_AMERICA_SCORING, EUROPE_SCORING, MIDDLE_EAST_SCORING,
    SOUTHEAST_ASIA_SCORING, SOUTH_AMERICA_SCORING,
};
use crate::cards::CardId;
use crate::core::Side;
use crate::engine::Game;
use crate::map::Region;

/// Region a scoring card scores.
#[must_use]
pub fn scored_region(card: CardId) -> Option<Region> {
    match card {
        ASIA_SCORING => Some(Region::Asia),
        EUROPE_SCORING => Some(Region::Europe),
        MIDDLE_EAST_SCORING => Some(Region::MiddleEast),
        CENTRAL_AMERICA_SCORING => Some(Region::CentralAmerica),
        SOUTHEAST_ASIA_SCORING => Some(Region::SoutheastAsia),
        AFRICA_SCORING => Some(Region::Africa),
        SOUTH_AMERICA_SCORING => Some(Region::SouthAmerica),
        _ => None,
    }
}

pub(crate) fn asia(game: &mut Game, _: Side) {
    game.score(Region::Asia, true);
}

pub(crate) fn europe(game: &mut Game, _: Side) {
    game.score(Region::Europe, true);
}

pub(crate) fn middle_east(game: &mut Game, _: Side) {
    game.score(Region::MiddleEast, true);
}

pub(crate) fn central_america(game: &mut Game, _: Side) {
    game.score(Region::CentralAmerica, true);
}

pub(crate) fn southeast_asia(game: &mut Game, _: Side) {
    game.score_southeast_asia();
}

pub(crate) fn africa(game: &mut Game, _: Side) {
    game.score(Region::Africa, true);
}

pub(crate) fn south_america(game: &mut Game, _: Side) {
    game.score(Region::SouthAmerica, true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::events::testing::game;
    use crate::map::data::{ANGOLA, NIGERIA, SOUTH_AFRICA, ZAIRE};

    #[test]
    fn test_scored_region_lookup() {
        assert_eq!(scored_region(EUROPE_SCORING), Some(Region::Europe));
        assert_eq!(scored_region(SOUTHEAST_ASIA_SCORING), Some(Region::SoutheastAsia));
        assert_eq!(scored_region(CardId::new(4)), None);
    }

    #[test]
    fn test_africa_domination() {
        let mut game = game();
        for country in [ANGOLA, NIGERIA, SOUTH_AFRICA] {
            game.debug_set_influence(country, Side::Ussr, 3);
        }
        game.debug_set_influence(ZAIRE, Side::Us, 2);
        game.debug_trigger_event(AFRICA_SCORING, Side::Us);
        assert!(game.state().vp > 0);
    }
}
