use crate::services::metrics_types::{CapacityMetrics, StageMetrics};

pub fn format_capacity_report(metrics: &CapacityMetrics) -> String {
    let projection = &metrics.projection;
    let binding = match metrics.ceiling.binding_stage {
        Some(stage) => stage.label().to_string(),
        None => "n/a".to_string(),
    };
    let cash_state = if metrics.cash.flagged {
        "below 3x"
    } else {
        "ok"
    };

    let mut lines = Vec::new();
    lines.push("Capacity Report".to_string());
    lines.push(format!(
        "Window: {} days ({} weeks)",
        format_number(projection.days, 0),
        format_number(projection.weeks, 2)
    ));
    lines.push(format!("Weighted ASP: {}", format_number(metrics.weighted_asp, 2)));
    lines.push(format!(
        "Weighted gross margin: {}%",
        format_number(metrics.weighted_gross_margin * 100.0, 1)
    ));
    lines.push(format!(
        "Total FTE: {} (contractors: {})",
        format_number(metrics.total_fte, 2),
        format_number(metrics.total_contractors, 2)
    ));
    lines.push(format!(
        "Team focus hours/week: {}",
        format_number(metrics.team_focus_hours, 1)
    ));
    lines.push(format!(
        "Sales cycle: {} days",
        format_number(metrics.sales_cycle_days, 1)
    ));
    lines.push(format!(
        "Throughput ceiling: {} deals/week (binding stage: {binding})",
        format_number(metrics.ceiling.deals_per_week, 2)
    ));
    lines.push(format!("Projected deals: {}", format_number(projection.deals, 2)));
    lines.push(format!(
        "Projected revenue: {}",
        format_number(projection.revenue, 0)
    ));
    lines.push(format!(
        "Projected gross profit: {}",
        format_number(projection.gross_profit, 0)
    ));
    lines.push(format!(
        "R/FTE ceiling: {}",
        format_number(projection.rfte_ceiling, 0)
    ));
    lines.push(format!(
        "Activated accounts: {}",
        format_number(projection.activated_accounts, 1)
    ));
    lines.push(format!(
        "GP30/CAC: {} ({cash_state})",
        format_number(metrics.cash.ratio, 2)
    ));
    lines.push(String::new());
    lines.push("Stages:".to_string());
    lines.push("Stage | Cap/wk | Downstream | Deals/wk | Utilization | Backlog wks".to_string());
    lines.push("------|--------|------------|----------|-------------|------------".to_string());
    for stage in &metrics.stages {
        lines.push(format_stage_row(stage));
    }

    lines.join("\n")
}

fn format_stage_row(stage: &StageMetrics) -> String {
    format!(
        "{label} | {capacity} | {downstream} | {deals} | {flag} ({utilization}%) | {weeks} ({hint})",
        label = stage.stage.label(),
        capacity = format_number(stage.weekly_capacity, 2),
        downstream = format_number(stage.downstream_conversion, 4),
        deals = format_number(stage.deals_per_week, 2),
        flag = stage.utilization_flag.label(),
        utilization = format_number(stage.utilization * 100.0, 0),
        weeks = format_number(stage.backlog_weeks, 2),
        hint = stage.backlog_hint.label(),
    )
}

/// Fixed-point formatting with `,` thousands separators. Non-finite values
/// render as an empty string.
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(formatted.len() + int_part.len() / 3 + 1);
    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        grouped.push('-');
    }
    for (idx, digit) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}
