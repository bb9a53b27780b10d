//! Label-driven glyph and accent color for menu items.
//!
//! Both lookups walk an ordered rule table and stop at the first match, so
//! rule order decides ties such as "Invoice Aging" (chart, not form).

use Rule::{Contains, Exact, Prefix, Suffix};

/// Visual category shown next to an item in menus and sidebars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemIconKind {
    Grid,
    Plus,
    Chart,
    Config,
    Approval,
    Form,
    Calendar,
    Person,
    Shield,
    Key,
    List,
    Dot,
}

impl ItemIconKind {
    /// Single-character glyph rendered for this kind.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Grid => "▦",
            Self::Plus => "+",
            Self::Chart => "▥",
            Self::Config => "⚙",
            Self::Approval => "✓",
            Self::Form => "▤",
            Self::Calendar => "▣",
            Self::Person => "◉",
            Self::Shield => "◆",
            Self::Key => "⚿",
            Self::List => "≡",
            Self::Dot => "•",
        }
    }
}

enum Rule {
    Exact(&'static str),
    Prefix(&'static str),
    Suffix(&'static str),
    Contains(&'static str),
}

impl Rule {
    fn matches(&self, label: &str) -> bool {
        match self {
            Rule::Exact(text) => label == *text,
            Rule::Prefix(text) => label.starts_with(text),
            Rule::Suffix(text) => label.ends_with(text),
            Rule::Contains(text) => label.contains(text),
        }
    }
}

const DASHBOARD_RULES: &[Rule] = &[
    Exact("dashboard"),
    Suffix(" dashboard"),
    Exact("data analytics"),
];

const CREATE_RULES: &[Rule] =
    &[Prefix("new "), Prefix("create "), Exact("lead")];

const LIST_RULES: &[Rule] = &[
    Prefix("all "),
    Suffix(" list"),
    Contains("history"),
    Contains(" log"),
];

const ICON_RULES: &[(ItemIconKind, &[Rule])] = &[
    (ItemIconKind::Grid, DASHBOARD_RULES),
    (ItemIconKind::Plus, CREATE_RULES),
    (
        ItemIconKind::Chart,
        &[
            Contains("report"),
            Contains("analytics"),
            Contains("balance"),
            Contains("profit"),
            Contains("ledger"),
            Contains("trial"),
            Contains("aging"),
        ],
    ),
    (
        ItemIconKind::Config,
        &[
            Contains("config"),
            Contains("settings"),
            Contains("template"),
            Contains("master"),
            Contains("module"),
            Contains("import"),
            Contains("permission"),
        ],
    ),
    (
        ItemIconKind::Approval,
        &[Contains("approval"), Contains("checklist")],
    ),
    (
        ItemIconKind::Form,
        &[
            Contains("form"),
            Contains("circular"),
            Contains("handbook"),
            Contains("sop"),
            Contains("letter"),
            Contains("invoice"),
            Contains("quotation"),
            Contains("journal"),
            Contains("order"),
            Contains("note"),
            Contains("requisition"),
        ],
    ),
    (
        ItemIconKind::Calendar,
        &[
            Contains("roster"),
            Contains("schedule"),
            Contains("duty"),
            Contains("e-learning"),
            Contains("calendar"),
        ],
    ),
    (
        ItemIconKind::Person,
        &[
            Contains("employee"),
            Contains("recruitment"),
            Contains("applicat"),
            Contains("pre-employ"),
        ],
    ),
    (
        ItemIconKind::Shield,
        &[
            Contains("patrol"),
            Contains("incident"),
            Contains("defect"),
            Contains("risk"),
            Contains("exercise"),
            Contains("kpi"),
        ],
    ),
    (ItemIconKind::Key, &[Contains("key")]),
    (
        ItemIconKind::List,
        &[
            Prefix("all "),
            Suffix(" list"),
            Contains("history"),
            Contains(" log"),
            Contains("broadcast"),
            Contains("monitoring"),
        ],
    ),
];

const COLOR_RULES: &[(&str, &[Rule])] = &[
    ("#818cf8", DASHBOARD_RULES),
    ("#4ade80", CREATE_RULES),
    (
        "#c084fc",
        &[
            Contains("report"),
            Contains("analytics"),
            Contains("profit"),
            Contains("balance"),
            Contains("ledger"),
            Contains("trial"),
            Contains("aging"),
        ],
    ),
    (
        "#94a3b8",
        &[
            Contains("config"),
            Contains("settings"),
            Contains("module"),
            Contains("permission"),
            Contains("template"),
            Contains("master"),
        ],
    ),
    ("#34d399", &[Contains("approval"), Contains("checklist")]),
    (
        "#34d399",
        &[
            Contains("invoice"),
            Contains("billing"),
            Contains("pay "),
            Contains("payment"),
            Contains("payroll"),
            Contains("loan"),
            Contains("cash"),
            Contains("cheque"),
        ],
    ),
    (
        "#60a5fa",
        &[
            Contains("form"),
            Contains("journal"),
            Contains("order"),
            Contains("quotation"),
            Contains("note"),
            Contains("document"),
        ],
    ),
    (
        "#f87171",
        &[
            Contains("patrol"),
            Contains("incident"),
            Contains("defect"),
            Contains("risk"),
            Contains("exercise"),
        ],
    ),
    ("#fbbf24", &[Contains("key")]),
    ("#94a3b8", LIST_RULES),
];

const CLUSTER_COLORS: &[(&str, &str)] = &[
    ("people", "#fb923c"),
    ("finance", "#34d399"),
    ("operations", "#f87171"),
    ("insights", "#a78bfa"),
    ("system", "#94a3b8"),
];

const FALLBACK_COLOR: &str = "#93c5fd";

fn any_match(rules: &[Rule], label: &str) -> bool {
    rules.iter().any(|rule| rule.matches(label))
}

/// Icon kind for an item label. Matching is case-insensitive.
pub fn infer_item_icon(label: &str) -> ItemIconKind {
    let label = label.to_lowercase();
    ICON_RULES
        .iter()
        .find(|(_, rules)| any_match(rules, &label))
        .map(|(kind, _)| *kind)
        .unwrap_or(ItemIconKind::Dot)
}

/// Accent color for an item, falling back to its cluster's color.
pub fn item_color(label: &str, cluster_id: &str) -> &'static str {
    let label = label.to_lowercase();
    if let Some((color, _)) =
        COLOR_RULES.iter().find(|(_, rules)| any_match(rules, &label))
    {
        return *color;
    }

    CLUSTER_COLORS
        .iter()
        .find(|(id, _)| *id == cluster_id)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}
