use tracing::debug;

use crate::domain::backlog::BacklogItem;
use crate::domain::cash::Cash;
use crate::domain::funnel::{FunnelCounts, PostCloseRates};
use crate::domain::headcount::HeadcountRow;
use crate::domain::offer::Offer;
use crate::domain::scenario::{Scenario, Window};
use crate::domain::stage::{Stage, StageConfig};
use crate::services::metrics_types::{
    BacklogHint, CapacityMetrics, CashAdequacy, StageConversion, StageMetrics, ThroughputCeiling,
    UtilizationFlag, WindowProjection,
};
use crate::services::numeric::safe;

/// Utilization above this marks a stage as a constraint.
pub const CONSTRAINT_UTILIZATION: f64 = 0.85;
/// GP30/CAC below this (and above zero) raises the cash flag.
pub const CASH_RATIO_FLOOR: f64 = 3.0;

pub fn stage_capacity(config: &StageConfig) -> f64 {
    safe(config.fte * config.focus_hours * config.utilization * config.std_rate * config.yield_rate)
}

/// `count[to] / count[from]`, or 1 when nothing was observed at `from`.
pub fn conversion_rate(funnel: &FunnelCounts, from: Stage, to: Stage) -> f64 {
    let (Some(previous), Some(next)) = (funnel.count(from), funnel.count(to)) else {
        return 1.0;
    };
    if previous == 0.0 {
        return 1.0;
    }
    safe(next / previous)
}

pub fn stage_conversions(funnel: &FunnelCounts) -> Vec<StageConversion> {
    Stage::ALL
        .windows(2)
        .filter(|pair| pair[1].is_pre_close())
        .map(|pair| StageConversion {
            from: pair[0],
            to: pair[1],
            rate: conversion_rate(funnel, pair[0], pair[1]),
        })
        .collect()
}

/// Product of the observed conversions from `stage` through close. Close
/// and every later stage see no further attrition.
pub fn downstream_conversion(funnel: &FunnelCounts, stage: Stage) -> f64 {
    let product: f64 = Stage::ALL
        .windows(2)
        .filter(|pair| pair[0] >= stage && pair[1].is_pre_close())
        .map(|pair| conversion_rate(funnel, pair[0], pair[1]))
        .product();
    safe(product)
}

pub fn utilization_flag(utilization: f64) -> UtilizationFlag {
    if utilization > CONSTRAINT_UTILIZATION {
        UtilizationFlag::Constraint
    } else {
        UtilizationFlag::Healthy
    }
}

pub fn backlog_weeks(units: f64, weekly_capacity: f64) -> f64 {
    if weekly_capacity > 0.0 {
        safe(units / weekly_capacity)
    } else {
        0.0
    }
}

fn backlog_units_for(backlog: &[BacklogItem], stage: Stage) -> f64 {
    safe(
        backlog
            .iter()
            .filter(|item| item.stage == stage)
            .map(|item| item.units)
            .sum(),
    )
}

pub fn stage_metrics(
    config: &StageConfig,
    funnel: &FunnelCounts,
    backlog: &[BacklogItem],
) -> StageMetrics {
    let weekly_capacity = stage_capacity(config);
    let downstream = downstream_conversion(funnel, config.stage);
    let backlog_units = backlog_units_for(backlog, config.stage);
    let backlog_weeks = backlog_weeks(backlog_units, weekly_capacity);

    StageMetrics {
        stage: config.stage,
        weekly_capacity,
        downstream_conversion: downstream,
        deals_per_week: safe(weekly_capacity * downstream),
        utilization: config.utilization,
        utilization_flag: utilization_flag(config.utilization),
        backlog_units,
        backlog_weeks,
        backlog_hint: if backlog_weeks > 1.0 {
            BacklogHint::OverOneWeek
        } else {
            BacklogHint::WithinOneWeek
        },
    }
}

/// Minimum deals/week over the pre-close stages, scanned in configuration
/// order. On ties the earliest stage is reported as binding.
pub fn throughput_ceiling(stages: &[StageMetrics]) -> ThroughputCeiling {
    let binding = stages
        .iter()
        .filter(|metrics| metrics.stage.is_pre_close())
        .fold(None::<&StageMetrics>, |best, candidate| match best {
            Some(current) if current.deals_per_week <= candidate.deals_per_week => Some(current),
            _ => Some(candidate),
        });

    match binding {
        Some(metrics) => ThroughputCeiling {
            deals_per_week: metrics.deals_per_week,
            binding_stage: Some(metrics.stage),
        },
        None => ThroughputCeiling {
            deals_per_week: 0.0,
            binding_stage: None,
        },
    }
}

/// Share-weighted sum of selling prices.
pub fn weighted_asp(offers: &[Offer]) -> f64 {
    safe(offers.iter().map(|offer| offer.asp * offer.share).sum())
}

/// Share-weighted average of gross margins.
pub fn weighted_gross_margin(offers: &[Offer]) -> f64 {
    let total_share: f64 = offers.iter().map(|offer| offer.share).sum();
    if total_share <= 0.0 {
        return 0.0;
    }
    let weighted: f64 = offers
        .iter()
        .map(|offer| offer.gross_margin * offer.share)
        .sum();
    safe(weighted / total_share)
}

pub fn total_fte(headcount: &[HeadcountRow]) -> f64 {
    safe(headcount.iter().map(|row| row.fte).sum())
}

pub fn total_contractors(headcount: &[HeadcountRow]) -> f64 {
    safe(headcount.iter().map(|row| row.contractors).sum())
}

pub fn team_focus_hours(headcount: &[HeadcountRow]) -> f64 {
    safe(
        headcount
            .iter()
            .map(|row| (row.fte + row.contractors) * row.focus_hours * row.utilization)
            .sum(),
    )
}

pub fn project_window(
    ceiling: &ThroughputCeiling,
    window: &Window,
    offers: &[Offer],
    headcount: &[HeadcountRow],
    post_close: &PostCloseRates,
) -> WindowProjection {
    let weeks = window.weeks();
    let deals = safe(ceiling.deals_per_week * weeks);
    let revenue = safe(deals * weighted_asp(offers));
    let gross_profit = safe(revenue * weighted_gross_margin(offers));
    let fte = total_fte(headcount);
    let rfte_ceiling = if fte > 0.0 {
        safe(gross_profit / fte)
    } else {
        0.0
    };

    WindowProjection {
        days: safe(window.days),
        weeks,
        deals,
        revenue,
        gross_profit,
        rfte_ceiling,
        activated_accounts: safe(deals * post_close.activation_rate),
    }
}

pub fn cash_adequacy(projection: &WindowProjection, cash: &Cash) -> CashAdequacy {
    let gross_profit_per_day = if projection.days > 0.0 {
        safe(projection.gross_profit / projection.days)
    } else {
        0.0
    };
    let gross_profit_30d = safe(gross_profit_per_day * 30.0);
    let ratio = if cash.cac > 0.0 {
        safe(gross_profit_30d / cash.cac)
    } else {
        0.0
    };

    CashAdequacy {
        gross_profit_per_day,
        gross_profit_30d,
        ratio,
        flagged: ratio > 0.0 && ratio < CASH_RATIO_FLOOR,
    }
}

/// Derives the full metrics snapshot from a scenario.
pub fn compute_metrics(scenario: &Scenario) -> CapacityMetrics {
    let stages: Vec<StageMetrics> = scenario
        .stages
        .iter()
        .map(|config| stage_metrics(config, &scenario.funnel, &scenario.backlog))
        .collect();
    for metrics in &stages {
        debug!(
            stage = %metrics.stage,
            weekly_capacity = metrics.weekly_capacity,
            deals_per_week = metrics.deals_per_week,
            "stage metrics"
        );
    }

    let ceiling = throughput_ceiling(&stages);
    let projection = project_window(
        &ceiling,
        &scenario.window,
        &scenario.offers,
        &scenario.headcount,
        &scenario.post_close,
    );
    let cash = cash_adequacy(&projection, &scenario.cash);
    debug!(
        ceiling = ceiling.deals_per_week,
        binding_stage = ?ceiling.binding_stage,
        cash_ratio = cash.ratio,
        "computed throughput ceiling"
    );

    CapacityMetrics {
        weighted_asp: weighted_asp(&scenario.offers),
        weighted_gross_margin: weighted_gross_margin(&scenario.offers),
        total_fte: total_fte(&scenario.headcount),
        total_contractors: total_contractors(&scenario.headcount),
        team_focus_hours: team_focus_hours(&scenario.headcount),
        sales_cycle_days: safe(scenario.cycle.sales_cycle_days()),
        conversions: stage_conversions(&scenario.funnel),
        stages,
        ceiling,
        projection,
        cash,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{offer, scenario_with_stages, staffed_stage, unstaffed_stage};
    use proptest::prelude::*;

    fn approx(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
    }

    #[test]
    fn stage_capacity_multiplies_all_factors() {
        let config = staffed_stage(Stage::Proposal, 1.0, 20.0, 0.85, 1.0, 0.95);
        assert!(approx(stage_capacity(&config), 16.15));
    }

    #[test]
    fn stage_capacity_is_zero_when_any_factor_is_zero() {
        let base = staffed_stage(Stage::Lead, 2.0, 30.0, 0.8, 4.0, 0.9);
        let mut zero_fte = base.clone();
        zero_fte.fte = 0.0;
        let mut zero_focus = base.clone();
        zero_focus.focus_hours = 0.0;
        let mut zero_utilization = base.clone();
        zero_utilization.utilization = 0.0;
        let mut zero_yield = base.clone();
        zero_yield.yield_rate = 0.0;
        let mut zero_rate = base;
        zero_rate.std_rate = 0.0;

        assert_eq!(stage_capacity(&zero_fte), 0.0);
        assert_eq!(stage_capacity(&zero_focus), 0.0);
        assert_eq!(stage_capacity(&zero_utilization), 0.0);
        assert_eq!(stage_capacity(&zero_yield), 0.0);
        assert_eq!(stage_capacity(&zero_rate), 0.0);
    }

    #[test]
    fn stage_capacity_coerces_overflow_to_zero() {
        let config = staffed_stage(Stage::Lead, f64::MAX, f64::MAX, 1.0, 1.0, 1.0);
        assert_eq!(stage_capacity(&config), 0.0);
    }

    #[test]
    fn conversion_rate_defaults_to_one_for_empty_denominator() {
        let funnel = FunnelCounts {
            show: 0.0,
            proposal: 12.0,
            ..FunnelCounts::default()
        };
        assert_eq!(conversion_rate(&funnel, Stage::Show, Stage::Proposal), 1.0);
        assert_eq!(conversion_rate(&funnel, Stage::CloseWon, Stage::Onboarding), 1.0);
    }

    #[test]
    fn downstream_conversion_multiplies_through_close() {
        let funnel = FunnelCounts {
            awareness: 1000.0,
            lead: 200.0,
            qualified: 100.0,
            booked: 50.0,
            show: 40.0,
            proposal: 20.0,
            close_won: 5.0,
        };

        assert!(approx(downstream_conversion(&funnel, Stage::Proposal), 0.25));
        assert!(approx(downstream_conversion(&funnel, Stage::Show), 0.125));
        assert!(approx(downstream_conversion(&funnel, Stage::Awareness), 0.005));
        assert_eq!(downstream_conversion(&funnel, Stage::CloseWon), 1.0);
        assert_eq!(downstream_conversion(&funnel, Stage::Delivery), 1.0);
    }

    #[test]
    fn stage_conversions_cover_pre_close_pairs() {
        let conversions = stage_conversions(&FunnelCounts::default());

        assert_eq!(conversions.len(), 6);
        assert_eq!(conversions[0].from, Stage::Awareness);
        assert_eq!(conversions[5].to, Stage::CloseWon);
        assert!(conversions.iter().all(|c| c.rate == 1.0));
    }

    #[test]
    fn proposal_alone_sets_the_ceiling() {
        let scenario = scenario_with_stages(vec![staffed_stage(
            Stage::Proposal,
            1.0,
            20.0,
            0.85,
            1.0,
            0.95,
        )]);

        let metrics = compute_metrics(&scenario);
        assert!(approx(metrics.ceiling.deals_per_week, 16.15));
        assert_eq!(metrics.ceiling.binding_stage, Some(Stage::Proposal));
    }

    #[test]
    fn unstaffed_stages_bind_the_default_pipeline() {
        let scenario = scenario_with_stages(vec![
            unstaffed_stage(Stage::Booked),
            unstaffed_stage(Stage::Show),
            staffed_stage(Stage::Proposal, 1.0, 20.0, 0.85, 1.0, 0.95),
        ]);

        let metrics = compute_metrics(&scenario);
        assert!(approx(metrics.stages[2].deals_per_week, 16.15));
        assert_eq!(metrics.stages[2].downstream_conversion, 1.0);
        assert_eq!(metrics.ceiling.deals_per_week, 0.0);
        assert_eq!(metrics.ceiling.binding_stage, Some(Stage::Booked));
    }

    #[test]
    fn ceiling_ignores_post_close_stages() {
        let scenario = scenario_with_stages(vec![
            staffed_stage(Stage::Proposal, 1.0, 10.0, 1.0, 1.0, 1.0),
            unstaffed_stage(Stage::Onboarding),
        ]);

        let metrics = compute_metrics(&scenario);
        assert_eq!(metrics.ceiling.binding_stage, Some(Stage::Proposal));
        assert!(approx(metrics.ceiling.deals_per_week, 10.0));
    }

    #[test]
    fn ceiling_tie_picks_first_stage_in_order() {
        let scenario = scenario_with_stages(vec![
            staffed_stage(Stage::Show, 1.0, 10.0, 1.0, 1.0, 1.0),
            staffed_stage(Stage::Booked, 1.0, 10.0, 1.0, 1.0, 1.0),
        ]);

        let metrics = compute_metrics(&scenario);
        assert_eq!(metrics.ceiling.binding_stage, Some(Stage::Show));
    }

    #[test]
    fn ceiling_without_pre_close_stages_is_zero() {
        let scenario = scenario_with_stages(vec![staffed_stage(
            Stage::Delivery,
            1.0,
            10.0,
            1.0,
            1.0,
            1.0,
        )]);

        let ceiling = compute_metrics(&scenario).ceiling;
        assert_eq!(ceiling.deals_per_week, 0.0);
        assert_eq!(ceiling.binding_stage, None);
    }

    #[test]
    fn ninety_day_projection_matches_worked_example() {
        let mut scenario = scenario_with_stages(vec![staffed_stage(
            Stage::Proposal,
            1.0,
            20.0,
            0.85,
            1.0,
            0.95,
        )]);
        scenario.offers = vec![offer("Core", 5000.0, 0.7, 1.0)];

        let projection = compute_metrics(&scenario).projection;
        let weeks = 90.0 / 7.0;
        assert!(approx(projection.weeks, weeks));
        assert!(approx(projection.deals, 16.15 * weeks));
        assert!(approx(projection.revenue, 16.15 * weeks * 5000.0));
        assert!(approx(projection.gross_profit, 726_750.0));
        // no headcount rows
        assert_eq!(projection.rfte_ceiling, 0.0);
    }

    #[test]
    fn rfte_ceiling_divides_gross_profit_by_fte() {
        let mut scenario = scenario_with_stages(vec![staffed_stage(
            Stage::Proposal,
            1.0,
            10.0,
            1.0,
            1.0,
            1.0,
        )]);
        scenario.window = Window { days: 70.0 };
        scenario.offers = vec![offer("Core", 100.0, 0.5, 1.0)];
        scenario.headcount = vec![
            HeadcountRow {
                role: "Sales".to_string(),
                fte: 2.0,
                contractors: 1.0,
                focus_hours: 20.0,
                utilization: 0.5,
            },
            HeadcountRow {
                role: "Delivery".to_string(),
                fte: 3.0,
                ..HeadcountRow::default()
            },
        ];

        let metrics = compute_metrics(&scenario);
        // 10 deals/week * 10 weeks * 100 * 0.5
        assert!(approx(metrics.projection.gross_profit, 5000.0));
        assert!(approx(metrics.projection.rfte_ceiling, 1000.0));
        assert_eq!(metrics.total_fte, 5.0);
        assert_eq!(metrics.total_contractors, 1.0);
        assert!(approx(metrics.team_focus_hours, 30.0));
    }

    #[test]
    fn weighted_offer_values_use_shares() {
        let offers = vec![
            offer("Starter", 1000.0, 0.8, 0.25),
            offer("Pro", 4000.0, 0.6, 0.75),
        ];

        assert!(approx(weighted_asp(&offers), 3250.0));
        assert!(approx(weighted_gross_margin(&offers), 0.65));
    }

    #[test]
    fn weighted_gross_margin_is_zero_without_shares() {
        let offers = vec![offer("Free", 0.0, 0.9, 0.0)];
        assert_eq!(weighted_gross_margin(&offers), 0.0);
        assert_eq!(weighted_gross_margin(&[]), 0.0);
    }

    #[test]
    fn cash_flag_raised_between_zero_and_three() {
        let projection = WindowProjection {
            days: 90.0,
            weeks: 90.0 / 7.0,
            deals: 0.0,
            revenue: 0.0,
            gross_profit: 9000.0,
            rfte_ceiling: 0.0,
            activated_accounts: 0.0,
        };
        let mut cash = Cash {
            cac: 1500.0,
            ..Cash::default()
        };

        let adequacy = cash_adequacy(&projection, &cash);
        assert!(approx(adequacy.gross_profit_per_day, 100.0));
        assert!(approx(adequacy.gross_profit_30d, 3000.0));
        assert!(approx(adequacy.ratio, 2.0));
        assert!(adequacy.flagged);

        cash.cac = 1000.0;
        assert!(!cash_adequacy(&projection, &cash).flagged);

        cash.cac = 0.0;
        let adequacy = cash_adequacy(&projection, &cash);
        assert_eq!(adequacy.ratio, 0.0);
        assert!(!adequacy.flagged);
    }

    #[test]
    fn cash_adequacy_guards_zero_day_window() {
        let projection = WindowProjection {
            days: 0.0,
            weeks: 0.0,
            deals: 0.0,
            revenue: 0.0,
            gross_profit: 500.0,
            rfte_ceiling: 0.0,
            activated_accounts: 0.0,
        };
        let cash = Cash {
            cac: 100.0,
            ..Cash::default()
        };

        let adequacy = cash_adequacy(&projection, &cash);
        assert_eq!(adequacy.gross_profit_per_day, 0.0);
        assert!(!adequacy.flagged);
    }

    #[test]
    fn backlog_is_matched_by_stage_and_summed() {
        let mut scenario = scenario_with_stages(vec![
            staffed_stage(Stage::Booked, 1.0, 10.0, 1.0, 1.0, 1.0),
            unstaffed_stage(Stage::Show),
        ]);
        scenario.backlog = vec![
            BacklogItem {
                stage: Stage::Booked,
                units: 15.0,
            },
            BacklogItem {
                stage: Stage::Booked,
                units: 5.0,
            },
            BacklogItem {
                stage: Stage::Show,
                units: 8.0,
            },
        ];

        let metrics = compute_metrics(&scenario);
        assert_eq!(metrics.stages[0].backlog_units, 20.0);
        assert!(approx(metrics.stages[0].backlog_weeks, 2.0));
        assert_eq!(metrics.stages[0].backlog_hint, BacklogHint::OverOneWeek);
        assert_eq!(metrics.stages[1].backlog_units, 8.0);
        assert_eq!(metrics.stages[1].backlog_weeks, 0.0);
        assert_eq!(metrics.stages[1].backlog_hint, BacklogHint::WithinOneWeek);
    }

    #[test]
    fn utilization_flag_uses_static_threshold() {
        assert_eq!(utilization_flag(0.85), UtilizationFlag::Healthy);
        assert_eq!(utilization_flag(0.86), UtilizationFlag::Constraint);
    }

    #[test]
    fn utilization_flag_can_disagree_with_binding_stage() {
        let scenario = scenario_with_stages(vec![
            staffed_stage(Stage::Lead, 1.0, 10.0, 0.5, 1.0, 1.0),
            staffed_stage(Stage::Proposal, 1.0, 40.0, 0.95, 1.0, 1.0),
        ]);

        let metrics = compute_metrics(&scenario);
        assert_eq!(metrics.ceiling.binding_stage, Some(Stage::Lead));
        assert_eq!(metrics.stages[0].utilization_flag, UtilizationFlag::Healthy);
        assert_eq!(metrics.stages[1].utilization_flag, UtilizationFlag::Constraint);
    }

    #[test]
    fn activated_accounts_follow_activation_rate() {
        let mut scenario = scenario_with_stages(vec![staffed_stage(
            Stage::CloseWon,
            1.0,
            7.0,
            1.0,
            1.0,
            1.0,
        )]);
        scenario.window = Window { days: 7.0 };
        scenario.post_close.activation_rate = 0.5;

        let projection = compute_metrics(&scenario).projection;
        assert!(approx(projection.deals, 7.0));
        assert!(approx(projection.activated_accounts, 3.5));
    }

    fn pre_close_scenario(ftes: &[f64], counts: &[f64]) -> Scenario {
        let stages = Stage::ALL
            .iter()
            .filter(|stage| stage.is_pre_close())
            .zip(ftes)
            .map(|(stage, fte)| staffed_stage(*stage, *fte, 10.0, 0.8, 2.0, 0.9))
            .collect();
        let mut scenario = scenario_with_stages(stages);
        scenario.funnel = FunnelCounts {
            awareness: counts[0],
            lead: counts[1],
            qualified: counts[2],
            booked: counts[3],
            show: counts[4],
            proposal: counts[5],
            close_won: counts[6],
        };
        scenario
    }

    proptest! {
        #[test]
        fn ceiling_is_minimum_of_pre_close_deals(
            ftes in prop::collection::vec(0.0f64..20.0, 7),
            counts in prop::collection::vec(0.0f64..5000.0, 7),
        ) {
            let metrics = compute_metrics(&pre_close_scenario(&ftes, &counts));
            let min = metrics
                .stages
                .iter()
                .map(|stage| stage.deals_per_week)
                .fold(f64::INFINITY, f64::min);
            prop_assert_eq!(metrics.ceiling.deals_per_week, min);
        }

        #[test]
        fn raising_one_stage_never_lowers_ceiling(
            ftes in prop::collection::vec(0.0f64..20.0, 7),
            counts in prop::collection::vec(0.0f64..5000.0, 7),
            index in 0usize..7,
            extra in 0.0f64..10.0,
        ) {
            let base = pre_close_scenario(&ftes, &counts);
            let mut raised = base.clone();
            raised.stages[index].fte += extra;

            let before = compute_metrics(&base).ceiling.deals_per_week;
            let after = compute_metrics(&raised).ceiling.deals_per_week;
            prop_assert!(after >= before);
        }

        #[test]
        fn shrinking_binding_stage_scales_ceiling(
            ftes in prop::collection::vec(0.1f64..20.0, 7),
            counts in prop::collection::vec(1.0f64..5000.0, 7),
            factor in 0.01f64..1.0,
        ) {
            let base = pre_close_scenario(&ftes, &counts);
            let before = compute_metrics(&base);
            let binding = before.ceiling.binding_stage.unwrap();
            let mut shrunk = base.clone();
            for config in shrunk.stages.iter_mut().filter(|c| c.stage == binding) {
                config.fte *= factor;
            }

            let after = compute_metrics(&shrunk).ceiling.deals_per_week;
            prop_assert!(approx(after, before.ceiling.deals_per_week * factor));
        }

        #[test]
        fn any_zero_factor_zeroes_capacity(
            factors in prop::collection::vec(0.01f64..100.0, 5),
            zeroed in 0usize..5,
        ) {
            let mut factors = factors;
            factors[zeroed] = 0.0;
            let config = staffed_stage(
                Stage::Qualified,
                factors[0],
                factors[1],
                factors[2],
                factors[3],
                factors[4],
            );
            prop_assert_eq!(stage_capacity(&config), 0.0);
        }

        #[test]
        fn backlog_weeks_invert_capacity(units in 0.0f64..10_000.0, capacity in 0.001f64..1000.0) {
            let weeks = backlog_weeks(units, capacity);
            prop_assert!(approx(weeks * capacity, units));
        }

        #[test]
        fn cash_flag_matches_ratio_band(gross_profit in 0.0f64..1_000_000.0, cac in 0.0f64..100_000.0) {
            let projection = WindowProjection {
                days: 90.0,
                weeks: 90.0 / 7.0,
                deals: 0.0,
                revenue: 0.0,
                gross_profit,
                rfte_ceiling: 0.0,
                activated_accounts: 0.0,
            };
            let cash = Cash { cac, ..Cash::default() };
            let adequacy = cash_adequacy(&projection, &cash);
            let expected = cac > 0.0 && adequacy.ratio > 0.0 && adequacy.ratio < 3.0;
            prop_assert_eq!(adequacy.flagged, expected);
        }
    }
}
