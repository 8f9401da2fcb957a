use serde::{Deserialize, Serialize};

use medgrid_optimizer::{AiMode, Decision, SliceId};

/// One human-readable cause/effect statement about a decision axis.
///
/// Reporting only, never an input to scoring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectCard {
    pub cause: String,
    pub effect: String,
}

/// Map a decision to its cause/effect statements, one per decision axis:
/// coverage boost, then AI-assisted mode, then slice choice.
pub fn map_effects(decision: &Decision) -> Vec<EffectCard> {
    let mut cards = Vec::with_capacity(3);

    if decision.ris_active {
        cards.push(EffectCard {
            cause: format!("Selective RIS on ({})", decision.ris_zone),
            effect: "Packet loss down, coverage up in the boosted zone".into(),
        });
    } else {
        cards.push(EffectCard {
            cause: "RIS remains passive".into(),
            effect: "Energy cost down (no active boost)".into(),
        });
    }

    if decision.ai_mode != AiMode::Baseline {
        cards.push(EffectCard {
            cause: format!("AI-RAN {} scheduling", decision.ai_mode),
            effect: "Latency jitter down, scheduling stabilized".into(),
        });
    } else {
        cards.push(EffectCard {
            cause: "AI-RAN baseline scheduling".into(),
            effect: "Minimal operator intervention, ops cost down".into(),
        });
    }

    match decision.slice_id {
        SliceId::Urllc => cards.push(EffectCard {
            cause: "URLLC slice applied".into(),
            effect: "Latency budget attainment up, reliability up".into(),
        }),
        SliceId::Embb => cards.push(EffectCard {
            cause: "eMBB slice applied".into(),
            effect: "Cost efficiency up for routine monitoring".into(),
        }),
    }

    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use medgrid_optimizer::{ExpectedCost, ExpectedGain};

    fn decision(slice_id: SliceId, ris_active: bool, ai_mode: AiMode) -> Decision {
        Decision {
            slice_id,
            ris_zone: if ris_active { "Zone_B3" } else { "OFF" }.into(),
            ris_active,
            ai_mode,
            expected_gain: ExpectedGain {
                latency_ms: 12.0,
                loss_pct: 1.5,
                jitter_ms: 10.0,
            },
            expected_cost: ExpectedCost {
                energy: 12.0,
                ops: 8.0,
            },
        }
    }

    #[test]
    fn one_card_per_decision_axis() {
        let cards = map_effects(&decision(SliceId::Urllc, true, AiMode::Aggressive));
        assert_eq!(cards.len(), 3);
    }

    #[test]
    fn card_order_is_ris_mode_slice() {
        let cards = map_effects(&decision(SliceId::Urllc, true, AiMode::Assist));
        assert!(cards[0].cause.contains("RIS"));
        assert!(cards[1].cause.contains("AI-RAN"));
        assert!(cards[2].cause.contains("slice"));
    }

    #[test]
    fn active_boost_names_its_zone() {
        let cards = map_effects(&decision(SliceId::Urllc, true, AiMode::Aggressive));
        assert!(cards[0].cause.contains("Zone_B3"));
    }

    #[test]
    fn passive_boost_reports_energy_saving() {
        let cards = map_effects(&decision(SliceId::Embb, false, AiMode::Baseline));
        assert_eq!(cards[0].cause, "RIS remains passive");
        assert!(cards[0].effect.contains("Energy"));
    }

    #[test]
    fn slice_axis_tracks_choice() {
        let urllc = map_effects(&decision(SliceId::Urllc, false, AiMode::Assist));
        assert!(urllc[2].cause.contains("URLLC"));
        let embb = map_effects(&decision(SliceId::Embb, false, AiMode::Baseline));
        assert!(embb[2].cause.contains("eMBB"));
    }
}
