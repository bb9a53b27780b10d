use splus_nav::taxonomy::SETTINGS_CLUSTER_ID;
use splus_nav::{Resolved, Taxonomy};

use crate::components::primitive::stat_card::Trend;
use crate::state::{HOME_PATH, LOGIN_PATH};

pub(crate) const PAGE_PADDING: f32 = 24.0;
pub(crate) const PAGE_SPACING: f32 = 20.0;
pub(crate) const CARD_COLUMNS: usize = 3;

/// Page rendered for a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PageKind {
    Dashboard,
    Employees,
    Projects,
    Billing,
    Analytics,
    Settings(Resolved),
    Module(Resolved),
    Login,
    NotFound,
}

/// Resolve the page for `path`. Only exact item paths and the login path
/// render content; anything else is not found.
pub(crate) fn page_for(taxonomy: &Taxonomy, path: &str) -> PageKind {
    match path {
        HOME_PATH => return PageKind::Dashboard,
        LOGIN_PATH => return PageKind::Login,
        "/employee/all" => return PageKind::Employees,
        "/project/all" => return PageKind::Projects,
        "/billing/dashboard" | "/billing/invoice/all" => {
            return PageKind::Billing;
        },
        "/analytics/employee" => return PageKind::Analytics,
        _ => {},
    }

    let resolved = taxonomy
        .items()
        .find(|(_, _, item)| item.path == path)
        .map(|(cluster, section, item)| Resolved {
            cluster,
            section,
            item,
        });

    match resolved {
        Some(resolved) if resolved.cluster.id == SETTINGS_CLUSTER_ID => {
            PageKind::Settings(resolved)
        },
        Some(resolved) => PageKind::Module(resolved),
        None => PageKind::NotFound,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum LoginMethod {
    #[default]
    Email,
    Mobile,
}

impl LoginMethod {
    pub(crate) const ALL: [LoginMethod; 2] =
        [LoginMethod::Email, LoginMethod::Mobile];

    pub(crate) fn label(self) -> &'static str {
        match self {
            LoginMethod::Email => "Email",
            LoginMethod::Mobile => "Mobile",
        }
    }

    pub(crate) fn field_label(self) -> &'static str {
        match self {
            LoginMethod::Email => "Email or Username",
            LoginMethod::Mobile => "Mobile Number",
        }
    }

    pub(crate) fn placeholder(self) -> &'static str {
        match self {
            LoginMethod::Email => "you@company.com",
            LoginMethod::Mobile => "Mobile number",
        }
    }

    pub(crate) fn otp_hint(self) -> &'static str {
        match self {
            LoginMethod::Email => "OTP will be sent to your registered email.",
            LoginMethod::Mobile => {
                "OTP will be sent to your registered mobile number."
            },
        }
    }
}

/// Read-only login form data for rendering.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PagesViewModel<'a> {
    pub(crate) login_method: LoginMethod,
    pub(crate) identifier: &'a str,
    pub(crate) otp: &'a str,
}

/// Status wording mapped to a badge tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusTone {
    Positive,
    Caution,
    Critical,
}

pub(crate) fn status_tone(status: &str) -> StatusTone {
    match status {
        "Active" | "Paid" | "Completed" => StatusTone::Positive,
        "Overdue" => StatusTone::Critical,
        _ => StatusTone::Caution,
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Metric {
    pub(crate) label: &'static str,
    pub(crate) value: &'static str,
    pub(crate) change: Option<(&'static str, Trend)>,
    pub(crate) accent: Option<&'static str>,
}

const fn metric(label: &'static str, value: &'static str) -> Metric {
    Metric {
        label,
        value,
        change: None,
        accent: None,
    }
}

const fn accented(
    label: &'static str,
    value: &'static str,
    accent: &'static str,
) -> Metric {
    Metric {
        label,
        value,
        change: None,
        accent: Some(accent),
    }
}

const fn trending(
    label: &'static str,
    value: &'static str,
    change: &'static str,
    trend: Trend,
) -> Metric {
    Metric {
        label,
        value,
        change: Some((change, trend)),
        accent: None,
    }
}

pub(crate) const DASHBOARD_STATS: [Metric; 4] = [
    trending("Total Employees", "1,245", "+12%", Trend::Up),
    trending("Active Sites", "87", "+3", Trend::Up),
    trending("Attendance Today", "98.5%", "+2.5%", Trend::Up),
    trending("Monthly Revenue", "$284,500", "-3.2%", Trend::Down),
];

/// `(action, actor, when)`
pub(crate) const RECENT_ACTIVITIES: [(&str, &str, &str); 5] = [
    ("New employee onboarded", "John Smith", "2 minutes ago"),
    ("Site inspection completed", "Site Manager", "15 minutes ago"),
    ("Invoice generated", "Finance Team", "1 hour ago"),
    ("Leave request approved", "HR Department", "2 hours ago"),
    ("New project created", "Admin User", "3 hours ago"),
];

pub(crate) const EMPLOYEE_STATS: [Metric; 4] = [
    accented("Total Employees", "1,245", "#3b82f6"),
    accented("New This Month", "18", "#10b981"),
    accented("On Leave Today", "23", "#f59e0b"),
    accented("Retention Rate", "94.2%", "#8b5cf6"),
];

pub(crate) const EMPLOYEE_HEADERS: [&str; 5] =
    ["Name", "Role", "Site", "Status", "Joined"];

pub(crate) const EMPLOYEES: [[&str; 5]; 5] = [
    [
        "Ahmad bin Razali",
        "Security Officer",
        "KLCC Tower",
        "Active",
        "01 Jan 2023",
    ],
    [
        "Nur Hidayah Othman",
        "Supervisor",
        "Pavilion KL",
        "Active",
        "15 Mar 2022",
    ],
    [
        "Ravi Krishnan",
        "Senior Officer",
        "Mid Valley",
        "On Leave",
        "10 Jun 2021",
    ],
    [
        "Siti Rahmah Yusof",
        "Security Officer",
        "Sunway Pyramid",
        "Active",
        "22 Sep 2023",
    ],
    [
        "Lee Wei Liang",
        "Control Room Op.",
        "KLCC Tower",
        "Active",
        "05 Feb 2022",
    ],
];

pub(crate) const PROJECT_STATS: [Metric; 4] = [
    accented("Total Projects", "47", "#3b82f6"),
    accented("Active Contracts", "31", "#10b981"),
    accented("Pending Approval", "9", "#f59e0b"),
    accented("Total Value", "RM 28M", "#8b5cf6"),
];

pub(crate) const PROJECT_HEADERS: [&str; 5] =
    ["Project", "Client", "Value", "Status", "Progress"];

/// `(name, client, value, status, progress percent)`
pub(crate) const PROJECTS: [(&str, &str, &str, &str, u8); 5] = [
    ("KLCC Security Contract", "KLCC Holdings", "RM 2.4M", "Active", 68),
    (
        "Pavilion Integrated Security",
        "Pavilion REIT",
        "RM 1.8M",
        "Active",
        45,
    ),
    ("Mid Valley Night Ops", "IGB Berhad", "RM 960K", "Pending", 10),
    (
        "Sunway Surveillance Upgrade",
        "Sunway Group",
        "RM 3.1M",
        "Active",
        82,
    ),
    ("TRX Perimeter Guard", "Lendlease", "RM 1.2M", "Completed", 100),
];

pub(crate) const BILLING_STATS: [Metric; 4] = [
    metric("Total Invoiced", "RM 284.5K"),
    metric("Outstanding", "RM 55.2K"),
    metric("Overdue", "RM 22.8K"),
    metric("Collected", "82.4%"),
];

pub(crate) const INVOICE_HEADERS: [&str; 5] =
    ["Invoice", "Client", "Amount", "Due", "Status"];

pub(crate) const INVOICES: [[&str; 5]; 5] = [
    ["INV-2401", "KLCC Holdings", "RM 48,200", "28 Feb 2026", "Paid"],
    ["INV-2402", "Pavilion REIT", "RM 36,500", "05 Mar 2026", "Pending"],
    ["INV-2403", "IGB Berhad", "RM 22,800", "10 Mar 2026", "Overdue"],
    ["INV-2404", "Sunway Group", "RM 61,400", "15 Mar 2026", "Paid"],
    ["INV-2405", "Lendlease", "RM 18,750", "20 Mar 2026", "Pending"],
];

pub(crate) const ANALYTICS_METRICS: [Metric; 4] = [
    trending("Billing Revenue", "RM 2.84M", "+8.2%", Trend::Up),
    trending("Manpower Deployed", "1,118", "+3.1%", Trend::Up),
    trending("Attendance Rate", "97.4%", "-0.6%", Trend::Down),
    trending("Client Satisfaction", "4.7/5", "+0.2", Trend::Up),
];

/// `(name, description, accent)`
pub(crate) const ANALYTICS_MODULES: [(&str, &str, &str); 6] = [
    (
        "Billing Analytics",
        "Revenue trends, collection rates & aging breakdown",
        "#3b82f6",
    ),
    (
        "Attendance Analytics",
        "Daily/monthly attendance patterns across all sites",
        "#10b981",
    ),
    (
        "Employee Analytics",
        "Headcount, turnover, department distribution",
        "#f59e0b",
    ),
    (
        "Payroll Analytics",
        "Salary costs, overtime analysis, variance reports",
        "#8b5cf6",
    ),
    (
        "Site Analytics",
        "Per-site KPIs, performance benchmarks",
        "#ef4444",
    ),
    (
        "Deployment Analytics",
        "Manpower coverage, shift efficiency metrics",
        "#0ea5e9",
    ),
];

const SETTINGS_DESCRIPTIONS: [(&str, &str); 17] = [
    (
        "/settings/company",
        "Organisation details, logo and contact info",
    ),
    ("/settings/leave", "Leave types, balances and entitlement rules"),
    (
        "/settings/billing",
        "Invoice templates, payment terms and tax settings",
    ),
    (
        "/settings/payroll",
        "Pay periods, EPF/SOCSO rates and deduction rules",
    ),
    ("/settings/app", "System-wide preferences and feature toggles"),
    (
        "/settings/project",
        "Project categories, statuses and pipeline stages",
    ),
    (
        "/settings/master",
        "Lookup tables, reference codes and system enumerations",
    ),
    (
        "/settings/templates",
        "Email, SMS and document template management",
    ),
    (
        "/settings/operation",
        "Site operation defaults, shift patterns and rules",
    ),
    (
        "/settings/modules",
        "Enable or disable modules per client configuration",
    ),
    (
        "/settings/permissions",
        "Role-based access control and user group management",
    ),
    (
        "/settings/import",
        "Bulk import employees, sites and historical data",
    ),
    (
        "/settings/notifications",
        "Alert routing, escalation chains and distribution lists",
    ),
    ("/settings/log", "Audit trail, error logs and activity monitoring"),
    (
        "/settings/ojt",
        "On-the-job training report templates and grading",
    ),
    (
        "/settings/reports",
        "Report builder, scheduling and export options",
    ),
    (
        "/settings/company-config",
        "Multi-company setup, subsidiary and branch management",
    ),
];

/// Card description for a settings section path.
pub(crate) fn settings_description(path: &str) -> &'static str {
    SETTINGS_DESCRIPTIONS
        .iter()
        .find(|(candidate, _)| *candidate == path)
        .map(|(_, description)| *description)
        .unwrap_or("")
}

pub(crate) const MODULE_STATS: [&str; 3] =
    ["Total Records", "Active", "Pending"];
pub(crate) const MODULE_PLACEHOLDER_VALUE: &str = "—";
pub(crate) const MODULE_EMPTY_STATE: &str =
    "No data yet. This module is ready to be configured.";

#[cfg(test)]
mod tests {
    use super::*;

    fn taxonomy() -> Taxonomy {
        Taxonomy::load().expect("built-in table is valid")
    }

    #[test]
    fn given_dedicated_paths_when_resolving_then_domain_pages_are_used() {
        let taxonomy = taxonomy();
        assert_eq!(page_for(&taxonomy, "/"), PageKind::Dashboard);
        assert_eq!(page_for(&taxonomy, "/login"), PageKind::Login);
        assert_eq!(page_for(&taxonomy, "/employee/all"), PageKind::Employees);
        assert_eq!(page_for(&taxonomy, "/project/all"), PageKind::Projects);
        assert_eq!(
            page_for(&taxonomy, "/billing/dashboard"),
            PageKind::Billing
        );
        assert_eq!(
            page_for(&taxonomy, "/billing/invoice/all"),
            PageKind::Billing
        );
        assert_eq!(
            page_for(&taxonomy, "/analytics/employee"),
            PageKind::Analytics
        );
    }

    #[test]
    fn given_settings_item_when_resolving_then_settings_page_is_used() {
        let PageKind::Settings(resolved) =
            page_for(&taxonomy(), "/settings/leave")
        else {
            panic!("expected settings page");
        };
        assert_eq!(resolved.item.path, "/settings/leave");
    }

    #[test]
    fn given_other_configured_item_when_resolving_then_module_page_is_used() {
        let PageKind::Module(resolved) = page_for(&taxonomy(), "/patrol/all")
        else {
            panic!("expected module page");
        };
        assert_eq!(resolved.item.label, "All Patrol");
        assert_eq!(resolved.section.id, "patrol");
    }

    #[test]
    fn given_unknown_or_nested_path_when_resolving_then_not_found_is_used() {
        let taxonomy = taxonomy();
        assert_eq!(page_for(&taxonomy, "/nope"), PageKind::NotFound);
        assert_eq!(page_for(&taxonomy, "/patrol/all/42"), PageKind::NotFound);
        assert_eq!(page_for(&taxonomy, "/settings"), PageKind::NotFound);
    }

    #[test]
    fn given_every_settings_item_when_describing_then_text_exists() {
        let taxonomy = taxonomy();
        let system = taxonomy
            .cluster(SETTINGS_CLUSTER_ID)
            .expect("system cluster exists");
        let mut count = 0;
        for (_, item) in system.items() {
            let description = settings_description(item.path);
            assert!(!description.is_empty(), "{}", item.path);
            count += 1;
        }
        assert_eq!(count, 17);
    }

    #[test]
    fn given_status_words_when_mapping_then_tones_follow_severity() {
        assert_eq!(status_tone("Paid"), StatusTone::Positive);
        assert_eq!(status_tone("Completed"), StatusTone::Positive);
        assert_eq!(status_tone("On Leave"), StatusTone::Caution);
        assert_eq!(status_tone("Pending"), StatusTone::Caution);
        assert_eq!(status_tone("Overdue"), StatusTone::Critical);
    }
}
