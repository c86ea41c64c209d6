//! Research findings on moving Luxembourg from joint to individual taxation.
//!
//! Figures come from a labour-supply model combined with the LuxTaxBen
//! tax-benefit microsimulation.

/// One headline figure from the study.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding {
    pub label: &'static str,
    pub detail: &'static str,
}

pub const REFERENCE: &str = "Islam, N. (2024). Micro-simulation analysis of joint to individual taxation in Luxembourg.";

pub const METHODOLOGY: &str = "A labour supply model combined with the LuxTaxBen tax-benefit simulator, used to analyse the impact of replacing joint with individual taxation.";

pub const BEHAVIOURAL_IMPACT: &[Finding] = &[
    Finding {
        label: "Labour supply",
        detail: "Women's working hours rise by 2.30% and participation by 3.20%",
    },
    Finding {
        label: "Disposable income",
        detail: "Household disposable income increases by around €32M",
    },
    Finding {
        label: "Tax revenue",
        detail: "Tax revenue increases by around €0.25M",
    },
    Finding {
        label: "Fiscal balance",
        detail: "After the reduction in VAT receipts, a fiscal surplus of around €10M",
    },
    Finding {
        label: "Net fiscal gain",
        detail: "+€9.8 million for government",
    },
];

pub const CONCLUSIONS: &[Finding] = &[
    Finding {
        label: "Labour Force Participation",
        detail: "Individual taxation increases labour force participation, especially among women.",
    },
    Finding {
        label: "Gender Equity",
        detail: "Individual taxation removes disincentives for secondary earners and creates fairer work incentives.",
    },
    Finding {
        label: "Fiscal Neutrality",
        detail: "Fiscal neutrality is possible with minimal tax parameter adjustments.",
    },
    Finding {
        label: "Microsimulation Value",
        detail: "Microsimulation proves essential for ex-ante evaluation of tax reforms.",
    },
    Finding {
        label: "Policy Lever",
        detail: "Tax unit choice is a powerful lever in modernising fiscal policy.",
    },
];

/// Renders the findings as plain text.
pub fn render_findings() -> String {
    let mut lines = vec![
        "Taxing Choices: Joint vs Individual Taxation in Luxembourg".to_string(),
        String::new(),
        "Behavioural and fiscal impact of individual taxation".to_string(),
    ];
    lines.extend(
        BEHAVIOURAL_IMPACT
            .iter()
            .map(|f| format!("  • {}: {}", f.label, f.detail)),
    );
    lines.push(String::new());
    lines.push("Key conclusions".to_string());
    lines.extend(
        CONCLUSIONS
            .iter()
            .map(|f| format!("  • {}: {}", f.label, f.detail)),
    );
    lines.push(String::new());
    lines.push(format!("Methodology: {METHODOLOGY}"));
    lines.push(format!("Reference: {REFERENCE}"));
    lines.join("\n")
}
