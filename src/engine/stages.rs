//! Dispatch of a popped stage to its handler.

use super::Game;
use crate::core::Pile;
use crate::effects::EffectTag;
use crate::rules::GameResult;
use crate::stack::{DiceUse, Stage};

impl Game {
    pub(crate) fn run_stage(&mut self, stage: Stage) {
        match stage {
            // Setup and turn structure
            Stage::ExpandDeck => self.expand_deck(),
            Stage::ShuffleDrawPile => self.shuffle_draw_pile(),
            Stage::Deal(side) => self.deal(side),
            Stage::DrawCards(side, count) => self.draw_cards(side, count),
            Stage::StartingInfluence(side) => self.starting_influence(side),
            Stage::HandicapInfluence => self.handicap_influence(),
            Stage::Headline => self.headline(),
            Stage::ChooseHeadline(side) => self.choose_headline(side),
            Stage::ResolveHeadlines => self.resolve_headlines(),
            Stage::ResolveHeadline(side) => self.resolve_headline(side),
            Stage::BeginActionRounds => self.begin_action_rounds(),
            Stage::ActionRound => self.action_round(),
            Stage::EndActionRound => self.end_action_round(),
            Stage::SpaceDiscard(side) => self.space_discard(side),
            Stage::EndTurn => self.end_turn(),
            Stage::FinalScoring => self.final_scoring(),

            // Card play
            Stage::SelectAction { side, card, flags } => self.select_action(side, card, flags),
            Stage::ResolveAction { side, card, action, flags } => self.resolve_action(side, card, action, flags),
            Stage::TriggerEvent { side, card } => self.trigger_event(side, card),
            Stage::Dispose { side, card } => self.dispose(side, card),
            Stage::ClearOpsTags(side) => {
                self.state.baskets.remove(side, EffectTag::ChinaCard);
            }
            Stage::ReturnCard { card, to } => self.state.move_card(card, Pile::Hand(to)),

            // Operations
            Stage::OpsInfluence { side, ops } => self.ops_influence(side, ops),
            Stage::Coup(plan) => self.coup_target(plan),
            Stage::CoupRoll(plan, country) => {
                let prompt = format!("Coup roll in {country}");
                self.roll(DiceUse::Coup(plan, country), prompt);
            }
            Stage::CrisisDefuse(side) => self.crisis_defuse(side),
            Stage::Realign(plan) => self.realign_target(plan),
            Stage::RealignRoll(plan, country) => {
                let prompt = format!("Realignment rolls in {country}");
                self.roll(DiceUse::Realign(plan, country), prompt);
            }
            Stage::Space(side) => self.space(side),

            // Event steps
            Stage::Influence(pick) => self.influence_pick(pick),
            Stage::EditInfluence(country, side, edit) => {
                self.apply_edit(country, side, edit);
            }
            Stage::AddEffect(side, tag) => self.state.baskets.add(side, tag),
            Stage::RemoveEffect(side, tag) => {
                self.state.baskets.remove(side, tag);
            }
            Stage::Choose { side, prompt, options } => self.choose(side, prompt, options),
            Stage::War(plan) => {
                let prompt = format!("War roll in {}", plan.target);
                self.roll(DiceUse::War(plan), prompt);
            }
            Stage::Olympics(sponsor) => self.roll(DiceUse::Olympics(sponsor), "Olympic Games rolls"),
            Stage::Summit => self.roll(DiceUse::Summit, "Summit rolls"),
            Stage::TrapRoll(side) => self.trap_roll(side),
            Stage::Norad => self.norad(),
            Stage::ChangeVp(delta) => self.change_vp(delta),
            Stage::ChangeDefcon(delta) => self.change_defcon(delta),
            Stage::SetDefcon(value) => self.set_defcon(value),
            Stage::DecideByVp(reason) => self.end_game(GameResult::by_vp(self.state.vp, reason)),
            Stage::Resume => {
                if let Some(request) = self.suspended.pop() {
                    self.set_request(request);
                }
            }
        }
    }
}
