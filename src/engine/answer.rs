//! Callback interpretation.
//!
//! `apply_answer` runs once per accepted answer and may reject it; it never
//! sets a new request. `complete_request` runs when a request completes and
//! turns the recorded selections into state changes and new stages.

use super::Game;
use crate::cards::ids::BLANK_2_OP;
use crate::cards::CardId;
use crate::core::{Pile, Side};
use crate::effects::RegionBonuses;
use crate::error::InputError;
use crate::input::{InputOption, InputRequest};
use crate::map::{CountryId, CountrySet};
use crate::stack::{Callback, CoupPlan, InfluenceEdit, InfluencePick, PickUse, PlayFlags, RealignPlan, Stage, WarPlan};

impl Game {
    /// Per-answer side of a callback. On `Err` nothing has changed.
    pub(crate) fn apply_answer(&mut self, req: &mut InputRequest, option: &InputOption) -> Result<(), InputError> {
        match (req.callback.clone(), option) {
            (Callback::OpsInfluence { side, bonus }, &InputOption::Country(country)) => {
                let map = &self.state.map;
                let cost = map.placement_cost(country, side);
                let lost = bonus.iter().filter(|&&r| !country.in_region(r)).count() as u32;
                // `record` already took one repetition.
                if cost + lost > req.reps() + 1 {
                    return Err(InputError::Rejected(format!("not enough operations left for {country}")));
                }
                self.state.map.add_influence(country, side, 1);
                req.consume(cost - 1 + lost);
                let bonus: RegionBonuses = bonus.into_iter().filter(|&r| country.in_region(r)).collect();

                let map = &self.state.map;
                for other in req.available_options() {
                    if let InputOption::Country(c) = other {
                        let lost = bonus.iter().filter(|&&r| !c.in_region(r)).count() as u32;
                        if map.placement_cost(c, side) + lost > req.reps() {
                            req.discard(&InputOption::Country(c));
                        }
                    }
                }
                req.callback = Callback::OpsInfluence { side, bonus };
            }
            (Callback::Influence { target, edit }, &InputOption::Country(country)) => {
                let left = self.apply_edit(country, target, edit);
                let exhausted = match edit {
                    InfluenceEdit::Add(_) => false,
                    InfluenceEdit::Remove(_) => left == 0,
                    InfluenceEdit::RemoveAll | InfluenceEdit::MatchOpponent | InfluenceEdit::Double => true,
                };
                if exhausted {
                    req.discard(option);
                }
            }
            (Callback::Dice { purpose, mut rolls }, &InputOption::Roll(n)) => {
                rolls.push(n);
                req.callback = Callback::Dice { purpose, rolls };
            }
            (Callback::RandomCard { purpose: PickUse::Shuffle, .. }, &InputOption::Card(card)) => {
                if self.state.take_from(Pile::ShuffleBuffer, card) {
                    self.state.put(Pile::DrawPile, card);
                }
            }
            (Callback::DeStalinizationRemove { removed }, &InputOption::Country(country)) => {
                self.state.map.remove_influence(country, Side::Ussr, 1);
                if self.state.map.influence(country, Side::Ussr) == 0 {
                    req.discard(option);
                }
                req.callback = Callback::DeStalinizationRemove { removed: removed + 1 };
            }
            _ => {}
        }
        Ok(())
    }

    /// Completion side of a callback.
    pub(crate) fn complete_request(&mut self, req: InputRequest) {
        let picked: Vec<(InputOption, u32)> = req
            .selections()
            .filter(|&(_, n)| n > 0)
            .map(|(o, n)| (o.clone(), n))
            .collect();
        let cards: Vec<CardId> = picked
            .iter()
            .filter_map(|(o, _)| match o {
                InputOption::Card(c) => Some(*c),
                _ => None,
            })
            .collect();
        let country: Option<CountryId> = picked.iter().find_map(|(o, _)| match o {
            InputOption::Country(c) => Some(*c),
            _ => None,
        });
        let card = cards.first().copied();
        let chosen = req.selections().position(|(_, n)| n > 0);

        match req.callback {
            Callback::Noop => {}
            Callback::Headline(side) => {
                let Some(card) = card else { return };
                self.state.take_from(Pile::Hand(side), card);
                self.state.put(Pile::Headline(side), card);
                if self.has_space_ability(side.opp(), 4) {
                    self.state.reveal(side, card);
                }
            }
            Callback::PlayCard(side) => match card {
                Some(card) => self.play_card(side, card),
                None => tracing::info!(target: "cold_war::turn", side = %side, "turn.pass"),
            },
            Callback::CardAction { side, card, flags } => {
                let action = picked.iter().find_map(|(o, _)| match o {
                    InputOption::Action(a) => Some(*a),
                    _ => None,
                });
                if let Some(action) = action {
                    self.push(Stage::ResolveAction { side, card, action, flags });
                }
            }
            Callback::OpsInfluence { .. } | Callback::Influence { .. } => {}
            Callback::CoupTarget(plan) => {
                let Some(country) = country else { return };
                if !plan.crisis_checked && self.crisis_pending(plan.side) {
                    let side = plan.side;
                    let plan = CoupPlan { crisis_checked: true, ..plan };
                    self.push_all([Stage::CrisisDefuse(side), Stage::CoupRoll(plan, country)]);
                } else {
                    self.push(Stage::CoupRoll(plan, country));
                }
            }
            Callback::RealignTarget(plan) => {
                let Some(country) = country else { return };
                let next = RealignPlan {
                    reps: plan.reps.saturating_sub(1),
                    bonus: plan.bonus.iter().copied().filter(|&r| country.in_region(r)).collect(),
                    ..plan.clone()
                };
                self.push_all([Stage::RealignRoll(plan, country), Stage::Realign(next)]);
            }
            Callback::WarTarget(plan) => {
                let Some(target) = country else { return };
                self.push(Stage::War(WarPlan { target, ..plan }));
            }
            Callback::Dice { purpose, rolls } => self.resolve_dice(purpose, &rolls),
            Callback::RandomCard { purpose, .. } => self.complete_random_card(purpose, &cards),
            Callback::Choice(mut branches) => {
                if let Some(index) = chosen {
                    if index < branches.len() {
                        let stages = branches.swap_remove(index);
                        self.push_all(stages);
                    }
                }
            }
            Callback::OptionalDiscard { side, on_decline } => match card {
                Some(card) => {
                    tracing::info!(target: "cold_war::play", side = %side, card = self.card(card).name, "card.discarded");
                    self.state.move_card(card, Pile::Discard);
                }
                None => self.push_all(on_decline),
            },
            Callback::TrapDiscard(side) => {
                if let Some(card) = card {
                    self.state.move_card(card, Pile::Discard);
                    self.push(Stage::TrapRoll(side));
                }
            }
            Callback::MissileEnvyGive { receiver } => {
                let Some(card) = card else { return };
                let giver = receiver.opp();
                self.state.move_card(card, Pile::InPlay);
                self.state.envy_recipient = Some(giver);
                let owner = self.card(card).owner;
                if owner == receiver || owner == Side::Neutral {
                    self.push_all([
                        Stage::TriggerEvent { side: receiver, card },
                        Stage::Dispose { side: receiver, card },
                    ]);
                } else {
                    let flags = PlayFlags { ops_only: true, no_event: true, ..PlayFlags::default() };
                    self.push(Stage::SelectAction { side: receiver, card, flags });
                }
            }
            Callback::TakeFromDiscard { side, trigger } => {
                let Some(card) = card else { return };
                if trigger {
                    self.state.move_card(card, Pile::InPlay);
                    self.push_all([Stage::TriggerEvent { side, card }, Stage::Dispose { side, card }]);
                } else {
                    self.state.move_card(card, Pile::Hand(side));
                }
            }
            Callback::AskNot { .. } => {
                for &card in &cards {
                    self.state.move_card(card, Pile::Discard);
                }
                self.push(Stage::DrawCards(Side::Us, cards.len() as u32));
            }
            Callback::OurManInTehran => {
                for &card in &cards {
                    self.state.move_card(card, Pile::Discard);
                }
                let rest = std::mem::take(&mut self.state.neutral_hand);
                self.state.draw_pile.append(rest);
                self.push(Stage::ShuffleDrawPile);
            }
            Callback::AldrichAmes => {
                if let Some(card) = card {
                    self.state.move_card(card, Pile::Discard);
                }
            }
            Callback::UnIntervention(side) => {
                let Some(card) = card else { return };
                self.state.move_card(card, Pile::InPlay);
                let flags = PlayFlags { event_resolved: true, no_event: true, ops_only: true, ..PlayFlags::default() };
                self.push(Stage::SelectAction { side, card, flags });
            }
            Callback::DeStalinizationRemove { removed } => {
                if removed == 0 {
                    return;
                }
                let map = &self.state.map;
                let countries: CountrySet = CountryId::all()
                    .filter(|&c| !c.is_superpower() && !map.controls(c, Side::Us))
                    .collect();
                let pick = InfluencePick::own(
                    Side::Ussr,
                    InfluenceEdit::Add(1),
                    countries,
                    removed,
                    format!("Place {removed} influence in countries the US does not control"),
                )
                .max_per_country(2);
                self.push(Stage::Influence(pick));
            }
        }
    }

    fn complete_random_card(&mut self, purpose: PickUse, cards: &[CardId]) {
        match purpose {
            PickUse::Shuffle => {
                tracing::debug!(target: "cold_war::turn", size = self.state.draw_pile.len(), "deck.shuffled");
            }
            PickUse::FiveYearPlan => {
                let Some(&card) = cards.first() else { return };
                if self.card(card).owner == Side::Us {
                    self.state.move_card(card, Pile::InPlay);
                    self.push_all([
                        Stage::TriggerEvent { side: Side::Us, card },
                        Stage::Dispose { side: Side::Us, card },
                    ]);
                } else {
                    self.state.move_card(card, Pile::Discard);
                }
            }
            PickUse::Terrorism => {
                for &card in cards {
                    self.state.move_card(card, Pile::Discard);
                }
            }
            PickUse::GrainSales => {
                let Some(&card) = cards.first() else { return };
                self.state.move_card(card, Pile::InPlay);
                let name = self.card(card).name;
                let options = vec![
                    (
                        format!("Play {name}"),
                        vec![Stage::SelectAction { side: Side::Us, card, flags: PlayFlags::default() }],
                    ),
                    (
                        format!("Return {name} and use Grain Sales for operations"),
                        vec![
                            Stage::ReturnCard { card, to: Side::Ussr },
                            Stage::SelectAction { side: Side::Us, card: BLANK_2_OP, flags: PlayFlags::blank() },
                        ],
                    ),
                ];
                self.choose(Side::Us, "Grain Sales to Soviets", options);
            }
        }
    }
}
