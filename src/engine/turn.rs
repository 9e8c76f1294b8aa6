//! Turn structure: setup, dealing, headlines, action rounds, end of turn.

use smallvec::SmallVec;

use super::{card_request, Game};
use crate::cards::ids::{CHINA_CARD, MISSILE_ENVY};
use crate::cards::Era;
use crate::core::{Pile, Side};
use crate::effects::EffectTag;
use crate::input::{InputKind, InputOption, InputRequest};
use crate::map::data::CANADA;
use crate::map::{CountryId, CountrySet, Region};
use crate::rules::{GameResult, VictoryReason};
use crate::stack::{Callback, DiceUse, InfluenceEdit, InfluencePick, PickUse, PlayFlags, Stage};

impl Game {
    // =========================================================================
    // Deck
    // =========================================================================

    pub(crate) fn expand_deck(&mut self) {
        let era = match self.state.turn {
            0..=3 => Era::Early,
            4..=7 => Era::Mid,
            _ => Era::Late,
        };
        let cards: Vec<_> = self
            .catalog
            .deck(era, self.config.optional_cards)
            .into_iter()
            .filter(|&c| c != CHINA_CARD)
            .collect();
        tracing::info!(target: "cold_war::turn", era = ?era, cards = cards.len(), "deck.expanded");
        self.state.draw_pile.extend(cards);
        self.push(Stage::ShuffleDrawPile);
    }

    /// Put the draw pile into the shuffle buffer and draw it back one
    /// random card at a time.
    pub(crate) fn shuffle_draw_pile(&mut self) {
        let cards = std::mem::take(&mut self.state.draw_pile);
        self.state.shuffle_buffer.append(cards);
        let count = self.state.shuffle_buffer.len() as u32;
        let request = card_request(
            Side::Neutral,
            "Shuffle the draw pile",
            self.state.shuffle_buffer.iter().copied().collect::<Vec<_>>(),
            Callback::RandomCard { purpose: PickUse::Shuffle, from: Side::Neutral },
        )
        .with_reps(count)
        .with_max_per_option(1);
        self.set_request(request);
    }

    /// Move the discard pile under the draw pile and queue a shuffle.
    /// Returns false when there is nothing to reshuffle.
    fn reshuffle_discard(&mut self) -> bool {
        if self.state.discard.is_empty() {
            return false;
        }
        let discard = std::mem::take(&mut self.state.discard);
        self.state.draw_pile.append(discard);
        true
    }

    fn hand_size(&self) -> usize {
        if self.state.turn <= 3 {
            8
        } else {
            9
        }
    }

    /// Cards in hand that count against the hand size.
    fn held(&self, side: Side) -> usize {
        self.state.hand(side).iter().filter(|&&c| c != CHINA_CARD).count()
    }

    /// Deal one card, alternating from `side`, until both hands are full.
    pub(crate) fn deal(&mut self, side: Side) {
        let size = self.hand_size();
        let target = if self.held(side) < size {
            side
        } else if self.held(side.opp()) < size {
            side.opp()
        } else {
            return;
        };
        if self.state.draw_pile.is_empty() {
            if self.reshuffle_discard() {
                self.push_all([Stage::ShuffleDrawPile, Stage::Deal(target)]);
            } else {
                tracing::warn!(target: "cold_war::turn", "deal.no_cards");
            }
            return;
        }
        if let Some(card) = self.state.draw_pile.pop_back() {
            self.state.hand_mut(target).push_back(card);
        }
        self.push(Stage::Deal(target.opp()));
    }

    pub(crate) fn draw_cards(&mut self, side: Side, count: u32) {
        if count == 0 {
            return;
        }
        if self.state.draw_pile.is_empty() {
            if self.reshuffle_discard() {
                self.push_all([Stage::ShuffleDrawPile, Stage::DrawCards(side, count)]);
            }
            return;
        }
        if let Some(card) = self.state.draw_pile.pop_back() {
            self.state.hand_mut(side).push_back(card);
        }
        self.push(Stage::DrawCards(side, count - 1));
    }

    // =========================================================================
    // Setup
    // =========================================================================

    pub(crate) fn starting_influence(&mut self, side: Side) {
        let (region, amount) = match side {
            Side::Ussr => (Region::EasternEurope, 6),
            _ => (Region::WesternEurope, 7),
        };
        let countries: CountrySet = CountryId::in_region_iter(region).collect();
        let prompt = format!("Place {amount} starting influence in {region}");
        self.influence_pick(InfluencePick::own(side, InfluenceEdit::Add(1), countries, amount, prompt));
    }

    /// Extra setup influence where the receiving side already has some.
    pub(crate) fn handicap_influence(&mut self) {
        let handicap = self.config.handicap;
        let side = match handicap.signum() {
            -1 => Side::Us,
            1 => Side::Ussr,
            _ => return,
        };
        let countries: CountrySet = self.state.map.countries_with_influence(side).collect();
        let prompt = format!("Place {} handicap influence", handicap.unsigned_abs());
        self.influence_pick(InfluencePick::own(
            side,
            InfluenceEdit::Add(1),
            countries,
            handicap.unsigned_abs(),
            prompt,
        ));
    }

    // =========================================================================
    // Headline
    // =========================================================================

    pub(crate) fn headline(&mut self) {
        self.state.ar = 0;
        // Space box 4: the opponent commits first and shows its headline.
        let first = if self.has_space_ability(Side::Ussr, 4) { Side::Us } else { Side::Ussr };
        tracing::info!(target: "cold_war::turn", turn = self.state.turn, "turn.headline");
        self.push_all([
            Stage::ChooseHeadline(first),
            Stage::ChooseHeadline(first.opp()),
            Stage::ResolveHeadlines,
            Stage::BeginActionRounds,
        ]);
    }

    pub(crate) fn choose_headline(&mut self, side: Side) {
        let cards: Vec<_> = self
            .state
            .hand(side)
            .iter()
            .copied()
            .filter(|&c| c != CHINA_CARD && self.card(c).can_headline)
            .collect();
        let request = card_request(side, "Choose a headline", cards, Callback::Headline(side));
        self.set_request(request);
    }

    /// Order the two headlines: higher printed ops first, the US on ties,
    /// Defectors always first.
    pub(crate) fn resolve_headlines(&mut self) {
        let ops = |side: Side| self.state.headlines[side].map_or(0, |c| self.card(c).ops);
        let us_first = self.state.headlines[Side::Us] == Some(crate::cards::ids::DEFECTORS)
            || ops(Side::Us) >= ops(Side::Ussr);
        let first = if us_first { Side::Us } else { Side::Ussr };
        self.push_all([Stage::ResolveHeadline(first), Stage::ResolveHeadline(first.opp())]);
    }

    pub(crate) fn resolve_headline(&mut self, side: Side) {
        let Some(card) = self.state.headlines[side] else {
            return;
        };
        self.state.phasing = side;
        self.state.move_card(card, Pile::InPlay);
        tracing::info!(target: "cold_war::turn", side = %side, card = self.card(card).name, "headline.resolved");
        self.flower_power_check(side, card, false);
        self.push_all([Stage::TriggerEvent { side, card }, Stage::Dispose { side, card }]);
    }

    // =========================================================================
    // Action rounds
    // =========================================================================

    pub(crate) fn begin_action_rounds(&mut self) {
        let base = if self.state.turn <= 3 { 6 } else { 7 };
        for side in Side::PLAYERS {
            let mut budget = base;
            if self.has_space_ability(side, 8) {
                budget = 8;
            }
            self.state.ar_budget[side] = budget;
            self.state.ars_taken[side] = 0;
        }
        if self.state.baskets.has(Side::Us, EffectTag::NorthSeaOil) {
            self.state.ar_budget[Side::Us] = 8;
        }
        self.state.ar = 1;
        self.state.phasing = Side::Ussr;
        self.push(Stage::ActionRound);
    }

    pub(crate) fn action_round(&mut self) {
        let side = self.state.phasing;
        self.state.defcon_two_this_round = false;
        tracing::info!(target: "cold_war::turn", side = %side, ar = self.state.ar, "turn.action_round");
        self.push(Stage::EndActionRound);

        let trap = match side {
            Side::Us => EffectTag::Quagmire,
            _ => EffectTag::BearTrap,
        };
        if self.state.baskets.has(side, trap) {
            self.trapped_round(side);
            return;
        }

        if self.state.baskets.has(side, EffectTag::MissileEnvy) && self.state.holds(side, MISSILE_ENVY) {
            self.state.baskets.remove(side, EffectTag::MissileEnvy);
            self.state.move_card(MISSILE_ENVY, Pile::InPlay);
            let flags = PlayFlags { ops_only: true, ..PlayFlags::default() };
            self.push(Stage::SelectAction { side, card: MISSILE_ENVY, flags });
            return;
        }

        let china_locked = !self.state.china_card_playable;
        let cards: Vec<_> = self
            .state
            .hand(side)
            .iter()
            .copied()
            .filter(|&c| !(c == CHINA_CARD && china_locked))
            .collect();
        if cards.is_empty() {
            tracing::info!(target: "cold_war::turn", side = %side, "turn.pass");
            return;
        }
        let request = card_request(side, "Choose a card to play", cards, Callback::PlayCard(side));
        self.set_request(request);
    }

    /// Quagmire or Bear Trap: discard a 2+ ops card and roll to escape.
    fn trapped_round(&mut self, side: Side) {
        let discardable: Vec<_> = self
            .state
            .hand(side)
            .iter()
            .copied()
            .filter(|&c| c != CHINA_CARD && !self.card(c).is_scoring() && self.card_ops(side, c) >= 2)
            .collect();
        if !discardable.is_empty() {
            let request = card_request(side, "Discard a card to escape", discardable, Callback::TrapDiscard(side));
            self.set_request(request);
            return;
        }
        let scoring: Vec<_> = self
            .state
            .hand(side)
            .iter()
            .copied()
            .filter(|&c| self.card(c).is_scoring())
            .collect();
        if scoring.is_empty() {
            tracing::info!(target: "cold_war::turn", side = %side, "turn.pass");
            return;
        }
        let request = card_request(side, "Play a scoring card", scoring, Callback::PlayCard(side));
        self.set_request(request);
    }

    pub(crate) fn trap_roll(&mut self, side: Side) {
        self.roll(DiceUse::Trap(side), format!("{side} escape roll"));
    }

    pub(crate) fn end_action_round(&mut self) {
        let side = self.state.phasing;
        self.state.ars_taken[side] += 1;

        let mut next: SmallVec<[Stage; 4]> = SmallVec::new();
        if self.state.defcon_two_this_round
            && self.state.baskets.has(Side::Us, EffectTag::Norad)
            && self.state.map.controls(CANADA, Side::Us)
        {
            next.push(Stage::Norad);
        }
        self.state.defcon_two_this_round = false;

        let opp = side.opp();
        if self.state.rounds_left(opp) > 0 {
            self.state.phasing = opp;
            self.state.ar = self.state.ars_taken[opp] + 1;
            next.push(Stage::ActionRound);
        } else if self.state.rounds_left(side) > 0 {
            self.state.ar = self.state.ars_taken[side] + 1;
            next.push(Stage::ActionRound);
        } else {
            for s in Side::PLAYERS {
                if self.has_space_ability(s, 6) {
                    next.push(Stage::SpaceDiscard(s));
                }
            }
            next.push(Stage::EndTurn);
        }
        self.push_all(next);
    }

    pub(crate) fn norad(&mut self) {
        let countries: CountrySet = self.state.map.countries_with_influence(Side::Us).collect();
        self.influence_pick(InfluencePick::own(
            Side::Us,
            InfluenceEdit::Add(1),
            countries,
            1,
            "NORAD: add 1 influence",
        ));
    }

    /// Space box 6: discard one held card before the turn ends.
    pub(crate) fn space_discard(&mut self, side: Side) {
        let cards: Vec<_> = self
            .state
            .hand(side)
            .iter()
            .copied()
            .filter(|&c| c != CHINA_CARD && !self.card(c).is_scoring())
            .collect();
        let request = card_request(
            side,
            "You may discard a held card",
            cards,
            Callback::OptionalDiscard { side, on_decline: Vec::new() },
        )
        .with_stop("Keep all cards");
        self.set_request(request);
    }

    // =========================================================================
    // End of turn
    // =========================================================================

    pub(crate) fn end_turn(&mut self) {
        let defcon = self.state.defcon;
        let mut swing = 0;
        for side in Side::PLAYERS {
            let shortfall = i32::from(defcon.saturating_sub(self.state.milops[side]));
            if shortfall > 0 {
                tracing::info!(target: "cold_war::turn", side = %side, shortfall, "turn.milops_penalty");
            }
            swing += shortfall * side.opp().vp_mult();
        }
        self.change_vp(swing);
        if self.is_over() {
            return;
        }

        self.state.milops = crate::core::SideMap::with_value(0);
        self.state.space_attempts = crate::core::SideMap::with_value(0);
        self.state.baskets.end_turn();

        for side in Side::PLAYERS {
            let held = self.state.hand(side).iter().any(|&c| !self.card(c).may_be_held);
            if held {
                tracing::info!(target: "cold_war::turn", side = %side, "turn.held_scoring_card");
                self.end_game(GameResult::new(Some(side.opp()), VictoryReason::HeldScoringCard));
                return;
            }
        }

        self.state.china_card_playable = true;
        tracing::info!(target: "cold_war::turn", turn = self.state.turn, vp = self.state.vp, "turn.end");
        if self.state.turn >= self.config.final_turn {
            self.push(Stage::FinalScoring);
            return;
        }

        self.state.turn += 1;
        self.state.ar = 0;
        self.change_defcon(1);
        let mut next: SmallVec<[Stage; 3]> = SmallVec::new();
        if matches!(self.state.turn, 4 | 8) {
            next.push(Stage::ExpandDeck);
        }
        next.push(Stage::Deal(Side::Ussr));
        next.push(Stage::Headline);
        self.push_all(next);
    }

    pub(crate) fn final_scoring(&mut self) {
        tracing::info!(target: "cold_war::turn", "turn.final_scoring");
        for region in Region::SCORED {
            self.score(region, false);
        }
        let holder = Side::PLAYERS.into_iter().find(|&s| self.state.holds(s, CHINA_CARD));
        if let Some(side) = holder {
            self.award_vp(side, 1);
        }
        if !self.is_over() {
            self.end_game(GameResult::by_vp(self.state.vp, VictoryReason::FinalScoring));
        }
    }

    // =========================================================================
    // Dice
    // =========================================================================

    /// Ask the Neutral side for the dice `purpose` needs.
    pub(crate) fn roll(&mut self, purpose: DiceUse, prompt: impl Into<String>) {
        let dice = purpose.dice();
        let request = InputRequest::new(
            Side::Neutral,
            InputKind::RollDice,
            prompt,
            (1..=6).map(InputOption::Roll),
            Callback::Dice { purpose, rolls: SmallVec::new() },
        )
        .with_reps(dice)
        .with_unit("die");
        self.set_request(request);
    }
}
