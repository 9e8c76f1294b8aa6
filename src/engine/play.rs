//! Playing a card: action choice, events and disposal.

use super::Game;
use crate::cards::ids::{
    ARAB_ISRAELI_WAR, BRUSH_WAR, CHINA_CARD, INDO_PAKISTANI_WAR, IRAN_IRAQ_WAR, KOREAN_WAR, UN_INTERVENTION,
};
use crate::cards::{CardId, Disposal};
use crate::core::{Pile, Side};
use crate::effects::hooks::{effective_ops, global_ops, realign_bonus_regions, realign_shield, coup_shield};
use crate::effects::EffectTag;
use crate::input::{InputKind, InputOption, InputRequest};
use crate::map::CountryId;
use crate::stack::{Callback, CardAction, CoupPlan, PlayFlags, PlayedCard, RealignPlan, Stage};

/// Cards whose play counts as a war for Flower Power.
const WAR_CARDS: [CardId; 5] = [KOREAN_WAR, ARAB_ISRAELI_WAR, INDO_PAKISTANI_WAR, BRUSH_WAR, IRAN_IRAQ_WAR];

impl Game {
    /// Operations value of `card` when `side` uses it, after modifiers.
    #[must_use]
    pub(crate) fn card_ops(&self, side: Side, card: CardId) -> u32 {
        effective_ops(self.card(card).ops, global_ops(&self.state.baskets, side))
    }

    /// Side whose event `card` is when `side` plays it.
    fn event_actor(&self, side: Side, card: CardId) -> Side {
        let owner = self.card(card).owner;
        if owner.is_player() {
            owner
        } else {
            side
        }
    }

    /// Start an action-round play of `card` from `side`'s hand.
    pub(crate) fn play_card(&mut self, side: Side, card: CardId) {
        self.state.move_card(card, Pile::InPlay);
        tracing::info!(target: "cold_war::play", side = %side, card = self.card(card).name, "card.played");
        let flags = PlayFlags::default();
        if self.card(card).is_scoring() {
            self.push(Stage::ResolveAction { side, card, action: CardAction::PlayEvent, flags });
        } else {
            self.push(Stage::SelectAction { side, card, flags });
        }
    }

    /// Actions `side` may take with `card` under `flags`.
    pub(crate) fn legal_actions(&self, side: Side, card: CardId, flags: PlayFlags) -> Vec<CardAction> {
        let def = self.card(card);
        let actor = self.event_actor(side, card);
        let event_ok = !flags.event_resolved
            && !flags.no_event
            && !flags.ops_only
            && def.action_event
            && def.event_possible(self, actor);
        if def.is_scoring() {
            return vec![CardAction::PlayEvent];
        }

        let mut actions = Vec::with_capacity(6);
        if event_ok && def.owner != side.opp() {
            actions.push(CardAction::PlayEvent);
        }
        if event_ok && def.owner == side.opp() {
            actions.push(CardAction::ResolveEventFirst);
        }
        actions.push(CardAction::Influence);

        let defcon = self.state.defcon;
        let map = &self.state.map;
        let realign_blocked = realign_shield(&self.state.baskets, side, map);
        if CountryId::all().any(|c| map.can_realign(c, side, defcon, realign_blocked)) {
            actions.push(CardAction::Realignment);
        }
        let coup_blocked = coup_shield(&self.state.baskets, side, map);
        if !flags.no_coup && CountryId::all().any(|c| map.can_coup(c, side, defcon, coup_blocked)) {
            actions.push(CardAction::Coup);
        }
        if !flags.event_resolved && !flags.ops_only && self.can_space(side, self.card_ops(side, card)) {
            actions.push(CardAction::Space);
        }
        actions
    }

    pub(crate) fn select_action(&mut self, side: Side, card: CardId, flags: PlayFlags) {
        let actions = self.legal_actions(side, card, flags);
        if actions.is_empty() {
            self.push(Stage::Dispose { side, card });
            return;
        }
        let prompt = format!("Choose how to play {}", self.card(card).name);
        let request = InputRequest::new(
            side,
            InputKind::CardAction,
            prompt,
            actions.into_iter().map(InputOption::Action),
            Callback::CardAction { side, card, flags },
        );
        self.set_request(request);
    }

    pub(crate) fn resolve_action(&mut self, side: Side, card: CardId, action: CardAction, flags: PlayFlags) {
        tracing::info!(target: "cold_war::play", side = %side, card = self.card(card).name, action = ?action, "card.action");

        if self.state.ar > 0 && side == Side::Us && self.state.baskets.remove(Side::Ussr, EffectTag::WeWillBuryYou) {
            let answered = card == UN_INTERVENTION && action == CardAction::PlayEvent;
            if !answered {
                self.award_vp(Side::Ussr, 3);
            }
        }
        self.flower_power_check(side, card, action == CardAction::Space);
        if side == Side::Us && card == CHINA_CARD {
            self.state.baskets.remove(Side::Us, EffectTag::FormosanResolution);
        }
        self.state.history.push_back(PlayedCard { side, card, action });

        match action {
            CardAction::PlayEvent => {
                self.push_all([Stage::TriggerEvent { side, card }, Stage::Dispose { side, card }]);
            }
            CardAction::ResolveEventFirst => {
                let flags = PlayFlags { event_resolved: true, ..flags };
                self.push_all([Stage::TriggerEvent { side, card }, Stage::SelectAction { side, card, flags }]);
            }
            CardAction::Space => {
                self.push_all([Stage::Space(side), Stage::Dispose { side, card }]);
            }
            CardAction::Influence | CardAction::Realignment | CardAction::Coup => {
                if card == CHINA_CARD {
                    self.state.baskets.add(side, EffectTag::ChinaCard);
                }
                let ops = self.card_ops(side, card);
                let operation = match action {
                    CardAction::Influence => Stage::OpsInfluence { side, ops },
                    CardAction::Coup => Stage::Coup(CoupPlan::new(side, ops)),
                    _ => Stage::Realign(RealignPlan {
                        bonus: realign_bonus_regions(&self.state.baskets, side),
                        ..RealignPlan::new(side, ops)
                    }),
                };
                let mut stages = vec![operation, Stage::ClearOpsTags(side)];
                let opponents_event = self.card(card).owner == side.opp();
                if opponents_event && !flags.event_resolved && !flags.no_event {
                    stages.push(Stage::TriggerEvent { side, card });
                }
                stages.push(Stage::Dispose { side, card });
                self.push_all(stages);
            }
        }
    }

    /// Flower Power: each US war card played outside the space race costs
    /// the US 2 VP.
    pub(crate) fn flower_power_check(&mut self, side: Side, card: CardId, space: bool) {
        if side == Side::Us
            && !space
            && WAR_CARDS.contains(&card)
            && self.state.baskets.has(Side::Ussr, EffectTag::FlowerPower)
        {
            tracing::info!(target: "cold_war::play", card = self.card(card).name, "effect.flower_power");
            self.award_vp(Side::Ussr, 2);
        }
    }

    pub(crate) fn trigger_event(&mut self, side: Side, card: CardId) {
        let actor = self.event_actor(side, card);
        let def = self.card(card);
        let event = def.event;
        if !def.event_possible(self, actor) {
            tracing::info!(target: "cold_war::play", side = %actor, card = def.name, "event.prevented");
            return;
        }
        tracing::info!(target: "cold_war::play", side = %actor, card = def.name, "event.triggered");
        self.state.event_fired.insert(card);
        event(self, actor);
    }

    /// Move a played card to wherever it belongs now.
    pub(crate) fn dispose(&mut self, side: Side, card: CardId) {
        let def = self.card(card);
        let (disposal, unique) = (def.disposal, def.unique);
        let fired = self.state.event_fired.remove(&card).is_some();
        if disposal == Disposal::None {
            self.state.take_from(Pile::InPlay, card);
            return;
        }
        if self.state.card_location(card) != Some(Pile::InPlay) {
            tracing::debug!(target: "cold_war::play", card = %card, "card.dispose_skipped");
            return;
        }
        let to = match disposal {
            Disposal::ToOpponent => {
                self.state.china_card_playable = false;
                Pile::Hand(side.opp())
            }
            Disposal::Limbo if fired => Pile::Limbo,
            Disposal::Exchange if self.state.envy_recipient.is_some() => {
                let recipient = self.state.envy_recipient.take().unwrap_or(side.opp());
                self.state.baskets.add(recipient, EffectTag::MissileEnvy);
                Pile::Hand(recipient)
            }
            _ if unique && fired => Pile::Removed,
            _ => Pile::Discard,
        };
        tracing::debug!(target: "cold_war::play", card = %card, to = ?to, "card.disposed");
        self.state.move_card(card, to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::ids::{DUCK_AND_COVER, FIDEL, NATO, SOCIALIST_GOVERNMENTS};
    use crate::core::GameConfig;

    fn game() -> Game {
        let mut game = Game::new(GameConfig::new(7));
        game.state.ar = 1;
        game
    }

    #[test]
    fn test_own_card_offers_event_not_resolve_first() {
        let game = game();
        let actions = game.legal_actions(Side::Us, DUCK_AND_COVER, PlayFlags::default());
        assert!(actions.contains(&CardAction::PlayEvent));
        assert!(!actions.contains(&CardAction::ResolveEventFirst));
        assert!(actions.contains(&CardAction::Space));
    }

    #[test]
    fn test_opponent_card_offers_resolve_first() {
        let game = game();
        let actions = game.legal_actions(Side::Us, SOCIALIST_GOVERNMENTS, PlayFlags::default());
        assert!(!actions.contains(&CardAction::PlayEvent));
        assert!(actions.contains(&CardAction::ResolveEventFirst));
    }

    #[test]
    fn test_prerequisite_blocks_event() {
        let game = game();
        // NATO needs Warsaw Pact or Marshall Plan first.
        let actions = game.legal_actions(Side::Us, NATO, PlayFlags::default());
        assert!(!actions.contains(&CardAction::PlayEvent));
    }

    #[test]
    fn test_blank_flags_remove_event_and_space() {
        let game = game();
        let actions = game.legal_actions(Side::Us, DUCK_AND_COVER, PlayFlags::blank());
        assert!(!actions.contains(&CardAction::PlayEvent));
        assert!(!actions.contains(&CardAction::Space));
        assert!(actions.contains(&CardAction::Influence));
    }

    #[test]
    fn test_unique_event_is_removed() {
        let mut game = game();
        game.state.put(Pile::InPlay, FIDEL);
        game.state.event_fired.insert(FIDEL);
        game.dispose(Side::Ussr, FIDEL);
        assert_eq!(game.state.card_location(FIDEL), Some(Pile::Removed));
        assert!(!game.state.event_fired.contains(&FIDEL));
    }

    #[test]
    fn test_unique_card_used_for_ops_is_discarded() {
        let mut game = game();
        game.state.put(Pile::InPlay, FIDEL);
        game.dispose(Side::Us, FIDEL);
        assert_eq!(game.state.card_location(FIDEL), Some(Pile::Discard));
    }

    #[test]
    fn test_china_card_passes_face_down() {
        let mut game = game();
        game.state.put(Pile::InPlay, CHINA_CARD);
        game.dispose(Side::Ussr, CHINA_CARD);
        assert!(game.state.holds(Side::Us, CHINA_CARD));
        assert!(!game.state.china_card_playable);
    }

    #[test]
    fn test_card_ops_modifiers() {
        let mut game = game();
        game.state.baskets.add(Side::Us, EffectTag::Containment);
        assert_eq!(game.card_ops(Side::Us, DUCK_AND_COVER), 4);
        assert_eq!(game.card_ops(Side::Us, NATO), 4);
        assert_eq!(game.card_ops(Side::Ussr, DUCK_AND_COVER), 3);
    }
}
