//! Plain-text rendering of comparison results.

use clap::ValueEnum;
use lux_tax_core::calculations::{format_currency, format_percentage};
use lux_tax_core::{BracketSchedule, ComparisonResult, FilingMethod, IncomePair, TaxationResult};

use crate::utils::ratio_display;

/// Which filing methods the report should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MethodSelection {
    Joint,
    Individual,
    #[default]
    Both,
}

impl MethodSelection {
    pub fn includes(
        &self,
        method: FilingMethod,
    ) -> bool {
        match self {
            Self::Both => true,
            Self::Joint => method == FilingMethod::Joint,
            Self::Individual => method == FilingMethod::Individual,
        }
    }

    pub fn single(&self) -> Option<FilingMethod> {
        match self {
            Self::Joint => Some(FilingMethod::Joint),
            Self::Individual => Some(FilingMethod::Individual),
            Self::Both => None,
        }
    }
}

/// Explanation shown when a single method is selected.
fn method_information(method: FilingMethod) -> [(&'static str, &'static str); 4] {
    match method {
        FilingMethod::Joint => [
            (
                "How it works",
                "Both partners' incomes are combined and taxed as a single household unit.",
            ),
            (
                "Benefits",
                "Often provides tax savings for couples with income disparities.",
            ),
            (
                "Considerations",
                "May discourage secondary earners from working more hours.",
            ),
            (
                "Best for",
                "Couples with significant income differences or where one partner works part-time.",
            ),
        ],
        FilingMethod::Individual => [
            (
                "How it works",
                "Each partner is taxed separately on their individual income.",
            ),
            (
                "Benefits",
                "Encourages both partners to work, especially benefiting women's labour market participation.",
            ),
            (
                "Economic Impact",
                "Can generate significant economic benefits through increased labour participation.",
            ),
            (
                "Best for",
                "Couples with similar incomes or where both partners want to maximise their earning potential.",
            ),
        ],
    }
}

fn result_lines(result: &TaxationResult) -> Vec<String> {
    vec![
        format!("  {:<20}{:>16}", "Tax", format_currency(result.tax)),
        format!("  {:<20}{:>16}", "Net income", format_currency(result.net_income)),
        format!(
            "  {:<20}{:>16}",
            "Effective rate",
            format_percentage(result.effective_rate)
        ),
    ]
}

fn household_lines(incomes: &IncomePair) -> Vec<String> {
    vec![
        format!(
            "Total Household Income: {} ({} + {})",
            format_currency(incomes.total()),
            format_currency(incomes.income1()),
            format_currency(incomes.income2())
        ),
        format!("Income ratio: {}", ratio_display(incomes.ratio())),
    ]
}

fn considerations_lines(
    result: &ComparisonResult,
    incomes: &IncomePair,
) -> Vec<String> {
    let immediate = match result.recommendation {
        FilingMethod::Joint => "Joint taxation provides immediate tax savings",
        FilingMethod::Individual => "Individual taxation may result in higher initial tax burden",
    };
    vec![
        "Important Considerations".to_string(),
        "Short-term vs Long-term".to_string(),
        format!("  • Immediate Savings: {immediate}"),
        "  • Labour Incentives: Individual taxation removes disincentives for secondary earners"
            .to_string(),
        "  • Economic Growth: Long-term benefits from increased labour participation".to_string(),
        "  • Gender Equity: Individual taxation promotes equal work incentives".to_string(),
        "Policy Implications".to_string(),
        "  • Administrative Complexity: Transition requires significant system changes"
            .to_string(),
        "  • Social Security: Coordination needed across different benefit systems".to_string(),
        "  • Political Feasibility: Requires consensus building and stakeholder consultation"
            .to_string(),
        "  • EU Coordination: Harmonisation needed across member states".to_string(),
    ]
    .into_iter()
    .chain(insight_lines(result, incomes))
    .collect()
}

fn insight_lines(
    result: &ComparisonResult,
    incomes: &IncomePair,
) -> Vec<String> {
    let outlook = match result.recommendation {
        FilingMethod::Joint => "joint taxation provides better immediate financial benefits.",
        FilingMethod::Individual => {
            "individual taxation offers better long-term economic incentives."
        }
    };
    let distribution = if incomes.income1() > incomes.income2() {
        "Significant income disparity favours joint taxation"
    } else {
        "Similar incomes may benefit from individual taxation"
    };
    vec![
        "Policy Insights".to_string(),
        format!(
            "  • For Your Scenario: With a household income of {} and an income ratio of {}, {outlook}",
            format_currency(incomes.total()),
            ratio_display(incomes.ratio())
        ),
        format!("  • Income Distribution: {distribution}"),
        "  • Research Finding: Individual taxation could increase women's labour participation by 3.20% and overall working hours by 2.30%, potentially generating €9.8 million in additional tax revenue."
            .to_string(),
    ]
}

/// Renders the comparison for the selected methods.
pub fn render_comparison(
    result: &ComparisonResult,
    incomes: &IncomePair,
    selection: MethodSelection,
) -> String {
    let mut lines = vec!["Tax Comparison Results".to_string(), String::new()];
    lines.extend(household_lines(incomes));

    for method in FilingMethod::all()
        .iter()
        .filter(|m| selection.includes(**m))
    {
        lines.push(String::new());
        lines.push(method.label().to_string());
        lines.extend(result_lines(result.result_for(*method)));
    }

    match selection.single() {
        Some(method) => {
            lines.push(String::new());
            lines.push(format!("{} Information", method.label()));
            lines.extend(
                method_information(method)
                    .iter()
                    .map(|(label, text)| format!("  {label}: {text}")),
            );
        }
        None => {
            lines.push(String::new());
            let verdict = if result.is_tie() {
                format!(
                    "Both methods cost the same; {} is shown by default",
                    result.recommendation.label()
                )
            } else {
                format!("Recommended method: {}", result.recommendation.label())
            };
            lines.push(verdict);
            lines.push(format!(
                "Tax difference: {}",
                format_currency(result.difference.abs())
            ));
            lines.push(format!("Annual savings: {}", format_currency(result.savings)));
            lines.push(format!(
                "Monthly savings: {}",
                format_currency(result.monthly_savings())
            ));
            lines.push(String::new());
            lines.extend(considerations_lines(result, incomes));
        }
    }

    lines.join("\n")
}

/// Renders a bracket schedule as a table.
pub fn render_schedule(
    method: FilingMethod,
    schedule: &BracketSchedule,
) -> String {
    let mut lines = vec![format!("{} ({} brackets)", method.label(), schedule.brackets().len())];
    lines.extend(schedule.brackets().iter().map(|bracket| {
        let upper = bracket
            .max_income
            .map(format_currency)
            .unwrap_or_else(|| "and above".to_string());
        format!(
            "  {:>14} - {:<14} {:>7}",
            format_currency(bracket.min_income),
            upper,
            format_percentage(bracket.tax_rate)
        )
    }));
    lines.push(format!("  Top rate: {}", format_percentage(schedule.top_rate())));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use lux_tax_core::TaxationEngine;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn canonical() -> (ComparisonResult, IncomePair) {
        let incomes = IncomePair::new(dec!(70000), dec!(20000)).unwrap();
        (TaxationEngine::luxembourg().compare(&incomes), incomes)
    }

    #[test]
    fn both_methods_show_recommendation_and_savings() {
        let (result, incomes) = canonical();

        let text = render_comparison(&result, &incomes, MethodSelection::Both);

        assert!(text.contains("Total Household Income: €90,000.00 (€70,000.00 + €20,000.00)"));
        assert!(text.contains("Income ratio: 3.5:1"));
        assert!(text.contains("€12,441.96"));
        assert!(text.contains("€16,520.11"));
        assert!(text.contains("Recommended method: Joint Taxation"));
        assert!(text.contains("Annual savings: €4,078.15"));
        assert!(text.contains("Monthly savings: €339.85"));
        assert!(text.contains("Significant income disparity favours joint taxation"));
        assert!(!text.contains("Information"));
    }

    #[test]
    fn both_methods_show_policy_blocks() {
        let (result, incomes) = canonical();

        let text = render_comparison(&result, &incomes, MethodSelection::Both);

        assert!(text.contains("Immediate Savings: Joint taxation provides immediate tax savings"));
        assert!(text.contains("Policy Implications"));
        assert!(text.contains("Administrative Complexity"));
        assert!(text.contains("Social Security"));
        assert!(text.contains("Political Feasibility"));
        assert!(text.contains("EU Coordination"));
        assert!(text.contains(
            "With a household income of €90,000.00 and an income ratio of 3.5:1, joint taxation provides better immediate financial benefits."
        ));
        assert!(text.contains("3.20%"));
        assert!(text.contains("€9.8 million"));
    }

    #[test]
    fn individual_recommendation_uses_long_term_wording() {
        let mut brackets = vec![
            lux_tax_core::TaxBracket::new(dec!(0), Some(dec!(10000)), dec!(0)),
            lux_tax_core::TaxBracket::new(dec!(10000), None, dec!(0.30)),
        ];
        let joint = BracketSchedule::new(brackets.clone()).unwrap();
        brackets[0].max_income = Some(dec!(20000));
        brackets[1].min_income = dec!(20000);
        let individual = BracketSchedule::new(brackets).unwrap();
        let incomes = IncomePair::new(dec!(30000), dec!(30000)).unwrap();
        let result = TaxationEngine::new(joint, individual).compare(&incomes);

        let text = render_comparison(&result, &incomes, MethodSelection::Both);

        assert!(text.contains(
            "Immediate Savings: Individual taxation may result in higher initial tax burden"
        ));
        assert!(text.contains("individual taxation offers better long-term economic incentives."));
        assert!(text.contains("Similar incomes may benefit from individual taxation"));
    }

    #[test]
    fn single_method_shows_information_block() {
        let (result, incomes) = canonical();

        let text = render_comparison(&result, &incomes, MethodSelection::Individual);

        assert!(text.contains("Individual Taxation Information"));
        assert!(text.contains("€16,520.11"));
        assert!(!text.contains("€12,441.96"));
        assert!(!text.contains("Recommended method"));
    }

    #[test]
    fn tie_is_reported_without_claiming_savings() {
        let incomes = IncomePair::new(dec!(0), dec!(0)).unwrap();
        let result = TaxationEngine::luxembourg().compare(&incomes);

        let text = render_comparison(&result, &incomes, MethodSelection::Both);

        assert!(text.contains("Both methods cost the same; Joint Taxation is shown by default"));
        assert!(text.contains("Income ratio: —"));
        assert!(text.contains("Similar incomes may benefit from individual taxation"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let (result, incomes) = canonical();

        assert_eq!(
            render_comparison(&result, &incomes, MethodSelection::Both),
            render_comparison(&result, &incomes, MethodSelection::Both)
        );
    }

    #[test]
    fn render_schedule_lists_every_bracket() {
        let engine = TaxationEngine::luxembourg();

        let text = render_schedule(FilingMethod::Joint, engine.joint_schedule());

        assert_eq!(text.lines().count(), 25);
        assert!(text.starts_with("Joint Taxation (23 brackets)"));
        assert!(text.contains("and above"));
        assert!(text.ends_with("Top rate: 42.00%"));
    }

    #[test]
    fn selection_includes_expected_methods() {
        assert!(MethodSelection::Both.includes(FilingMethod::Joint));
        assert!(MethodSelection::Both.includes(FilingMethod::Individual));
        assert!(!MethodSelection::Joint.includes(FilingMethod::Individual));
        assert_eq!(MethodSelection::Both.single(), None);
    }
}
