use std::collections::{HashMap, HashSet};

use crate::errors::NavigationError;

/// Leaf navigation target owning exactly one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub id: &'static str,
    pub label: &'static str,
    pub path: &'static str,
    pub icon: Option<&'static str>,
}

impl Item {
    pub const fn new(
        id: &'static str,
        label: &'static str,
        path: &'static str,
        icon: &'static str,
    ) -> Self {
        Self {
            id,
            label,
            path,
            icon: Some(icon),
        }
    }
}

/// Named group of items inside a cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
    pub items: &'static [Item],
}

/// Top-level workspace grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cluster {
    pub id: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
    /// Icon name used by surfaces that draw a cluster glyph.
    pub icon: &'static str,
    pub sections: &'static [Section],
}

impl Cluster {
    /// Iterate `(section, item)` pairs in document order.
    pub fn items(&self) -> impl Iterator<Item = (&Section, &Item)> + '_ {
        self.sections.iter().flat_map(|section| {
            section.items.iter().map(move |item| (section, item))
        })
    }
}

pub const HOME_CLUSTER_ID: &str = "home";
pub const SETTINGS_CLUSTER_ID: &str = "system";

/// Validated, read-only view over a cluster table.
#[derive(Debug, Clone, Copy)]
pub struct Taxonomy {
    clusters: &'static [Cluster],
}

impl Taxonomy {
    /// Load the built-in table, checking that paths and cluster ids are unique.
    pub fn load() -> Result<Self, NavigationError> {
        Self::from_clusters(CLUSTERS)
    }

    /// Wrap the built-in table without validation.
    pub fn builtin() -> Self {
        Self {
            clusters: CLUSTERS,
        }
    }

    /// Validate and wrap an arbitrary static cluster table.
    pub fn from_clusters(
        clusters: &'static [Cluster],
    ) -> Result<Self, NavigationError> {
        validate(clusters)?;
        Ok(Self { clusters })
    }

    pub fn clusters(&self) -> &'static [Cluster] {
        self.clusters
    }

    /// Look up a cluster by id.
    pub fn cluster(&self, id: &str) -> Option<&'static Cluster> {
        self.clusters.iter().find(|cluster| cluster.id == id)
    }

    /// Iterate every item with its owners in document order.
    pub fn items(
        &self,
    ) -> impl Iterator<Item = (&'static Cluster, &'static Section, &'static Item)>
    {
        self.clusters.iter().flat_map(|cluster| {
            cluster.sections.iter().flat_map(move |section| {
                section.items.iter().map(move |item| (cluster, section, item))
            })
        })
    }
}

fn validate(clusters: &[Cluster]) -> Result<(), NavigationError> {
    let mut cluster_ids = HashSet::new();
    let mut owners: HashMap<&str, &str> = HashMap::new();

    for cluster in clusters {
        if !cluster_ids.insert(cluster.id) {
            return Err(NavigationError::DuplicateCluster(
                cluster.id.to_string(),
            ));
        }

        for section in cluster.sections {
            for item in section.items {
                if let Some(first) = owners.insert(item.path, item.id) {
                    return Err(NavigationError::DuplicatePath {
                        path: item.path.to_string(),
                        first: first.to_string(),
                        second: item.id.to_string(),
                    });
                }
            }
        }
    }

    Ok(())
}

/// Built-in navigation table.
pub static CLUSTERS: &[Cluster] = &[
    Cluster {
        id: "home",
        label: "Home",
        emoji: "🏠",
        icon: "home",
        sections: &[
            Section {
                id: "home-main",
                label: "Home",
                items: &[
                    Item::new(
                        "dashboard",
                        "Dashboard",
                        "/",
                        "layout-dashboard",
                    ),
                    Item::new(
                        "notifications",
                        "Notifications",
                        "/notifications",
                        "bell",
                    ),
                    Item::new(
                        "data-analytics",
                        "Data Analytics",
                        "/analytics/data",
                        "bar-chart-2",
                    ),
                    Item::new(
                        "home-tickets",
                        "Tickets",
                        "/support/tickets",
                        "tag",
                    ),
                    Item::new(
                        "home-cases",
                        "Cases",
                        "/support/cases",
                        "folder-open",
                    ),
                ],
            },
        ],
    },
    Cluster {
        id: "core",
        label: "Core",
        emoji: "🔰",
        icon: "layout-grid",
        sections: &[
            Section {
                id: "visitors",
                label: "Visitors",
                items: &[
                    Item::new(
                        "visitor-dashboard",
                        "Dashboard",
                        "/visitors/dashboard",
                        "layout-dashboard",
                    ),
                    Item::new(
                        "visitor-log",
                        "Visitor Log",
                        "/visitors/log",
                        "clipboard-list",
                    ),
                    Item::new(
                        "site-resident",
                        "Site Resident",
                        "/visitors/resident",
                        "building-2",
                    ),
                    Item::new(
                        "visitor-pass",
                        "Visitor Pass",
                        "/visitors/pass",
                        "badge-check",
                    ),
                    Item::new(
                        "visitor-settings",
                        "Settings",
                        "/visitors/settings",
                        "sliders-horizontal",
                    ),
                ],
            },
            Section {
                id: "plrd",
                label: "PLRD",
                items: &[
                    Item::new(
                        "grading-form",
                        "Grading Form",
                        "/monitoring/grading-form",
                        "clipboard-check",
                    ),
                ],
            },
            Section {
                id: "eform",
                label: "E-Form",
                items: &[
                    Item::new(
                        "lost-found",
                        "Lost & Found",
                        "/monitoring/lost-found",
                        "search",
                    ),
                    Item::new(
                        "service-report",
                        "Service Report",
                        "/monitoring/service-report",
                        "wrench",
                    ),
                    Item::new(
                        "delivery-report",
                        "Delivery Report",
                        "/monitoring/delivery-report",
                        "truck",
                    ),
                    Item::new(
                        "site-item-issue",
                        "Site Item Issue",
                        "/monitoring/site-item-issue",
                        "alert-triangle",
                    ),
                    Item::new(
                        "tech-service",
                        "Tech Service Report",
                        "/monitoring/tech-service",
                        "cpu",
                    ),
                    Item::new(
                        "installation",
                        "Installation Report",
                        "/monitoring/installation",
                        "hammer",
                    ),
                ],
            },
        ],
    },
    Cluster {
        id: "billing-acc",
        label: "Billing & Accounting",
        emoji: "🧾",
        icon: "calculator",
        sections: &[
            Section {
                id: "billing",
                label: "Billing",
                items: &[
                    Item::new(
                        "billing-dash",
                        "Dashboard",
                        "/billing/dashboard",
                        "layout-dashboard",
                    ),
                    Item::new(
                        "new-invoice",
                        "New Invoice",
                        "/billing/invoice/new",
                        "file-plus",
                    ),
                    Item::new(
                        "all-invoice",
                        "All Invoice",
                        "/billing/invoice/all",
                        "file-text",
                    ),
                    Item::new(
                        "payment",
                        "Payment",
                        "/billing/payment",
                        "credit-card",
                    ),
                    Item::new(
                        "invoice-aging",
                        "Invoice Aging",
                        "/billing/aging",
                        "clock",
                    ),
                    Item::new(
                        "credit-note",
                        "Credit Note",
                        "/billing/credit-note",
                        "file-check",
                    ),
                    Item::new(
                        "debit-note",
                        "Debit Note",
                        "/billing/debit-note",
                        "file-minus",
                    ),
                    Item::new(
                        "delivery-order",
                        "Delivery Order",
                        "/billing/delivery-order",
                        "truck",
                    ),
                    Item::new(
                        "other-income",
                        "Other Income",
                        "/billing/other-income",
                        "dollar-sign",
                    ),
                ],
            },
            Section {
                id: "accounting",
                label: "Accounting",
                items: &[
                    Item::new(
                        "chart-accounts",
                        "Chart of Accounts",
                        "/accounting/chart",
                        "layers",
                    ),
                    Item::new(
                        "acc-dashboard",
                        "Dashboard",
                        "/accounting/dashboard",
                        "layout-dashboard",
                    ),
                    Item::new(
                        "acc-expense",
                        "Expense",
                        "/accounting/expense",
                        "receipt",
                    ),
                    Item::new(
                        "new-journal",
                        "New Journal",
                        "/accounting/journal/new",
                        "book-open",
                    ),
                    Item::new(
                        "all-journal",
                        "All Journal",
                        "/accounting/journal/all",
                        "book-marked",
                    ),
                    Item::new(
                        "ledgers",
                        "Ledgers",
                        "/accounting/ledgers",
                        "file-text",
                    ),
                    Item::new(
                        "trial-balance",
                        "Trial Balance",
                        "/accounting/trial-balance",
                        "scale",
                    ),
                    Item::new(
                        "profit-loss",
                        "Profit & Loss",
                        "/accounting/profit-loss",
                        "trending-up",
                    ),
                    Item::new(
                        "balance-sheet",
                        "Balance Sheet",
                        "/accounting/balance-sheet",
                        "bar-chart-2",
                    ),
                    Item::new(
                        "bank-rec",
                        "Bank Reconciliation",
                        "/accounting/bank-rec",
                        "landmark",
                    ),
                    Item::new(
                        "receivable-report",
                        "Receivable Invoice Report",
                        "/accounting/receivable",
                        "clipboard-list",
                    ),
                ],
            },
        ],
    },
    Cluster {
        id: "icc",
        label: "ICC",
        emoji: "📡",
        icon: "radio",
        sections: &[
            Section {
                id: "icc-main",
                label: "ICC",
                items: &[
                    Item::new(
                        "icc-dashboard",
                        "Dashboard",
                        "/icc/dashboard",
                        "layout-dashboard",
                    ),
                    Item::new(
                        "icc-deployment",
                        "Deployment",
                        "/icc/deployment",
                        "radio",
                    ),
                    Item::new(
                        "icc-eoccurrence",
                        "ICC E-Occurrence",
                        "/icc/eoccurrence",
                        "alert-circle",
                    ),
                    Item::new(
                        "icc-attendance",
                        "ICC Attendance",
                        "/icc/attendance",
                        "user-check",
                    ),
                    Item::new(
                        "icc-config",
                        "ICC Config",
                        "/icc/config",
                        "settings-2",
                    ),
                    Item::new(
                        "icc-task",
                        "ICC Task",
                        "/icc/task",
                        "check-circle",
                    ),
                    Item::new(
                        "call-log",
                        "Call Log",
                        "/icc/call-log",
                        "phone-call",
                    ),
                    Item::new(
                        "icc-monitoring",
                        "Monitoring",
                        "/icc/monitoring",
                        "activity",
                    ),
                ],
            },
            Section {
                id: "icc-marketing",
                label: "Marketing",
                items: &[
                    Item::new(
                        "icc-mkt-dash",
                        "Marketing",
                        "/marketing/dashboard",
                        "megaphone",
                    ),
                    Item::new(
                        "broadcast",
                        "Broadcast",
                        "/marketing/broadcast",
                        "rss",
                    ),
                    Item::new(
                        "mkt-recruitment",
                        "Recruitment",
                        "/marketing/recruitment",
                        "user-plus",
                    ),
                    Item::new(
                        "checklist",
                        "Checklist",
                        "/marketing/checklist",
                        "list-checks",
                    ),
                ],
            },
        ],
    },
    Cluster {
        id: "employees",
        label: "Employees",
        emoji: "🪪",
        icon: "user-check",
        sections: &[
            Section {
                id: "employees-main",
                label: "Employees",
                items: &[
                    Item::new(
                        "emp-dashboard",
                        "Dashboard",
                        "/employee/dashboard",
                        "layout-dashboard",
                    ),
                    Item::new(
                        "new-employee",
                        "New Employee",
                        "/employee/new",
                        "user-plus",
                    ),
                    Item::new(
                        "all-employee",
                        "All Employee",
                        "/employee/all",
                        "users",
                    ),
                    Item::new(
                        "pre-employment",
                        "Pre-Employment",
                        "/employee/pre-employment",
                        "user-check",
                    ),
                    Item::new(
                        "reconciliation",
                        "Reconciliation",
                        "/employee/reconciliation",
                        "refresh-ccw",
                    ),
                    Item::new(
                        "emp-circular",
                        "Employee Circular",
                        "/employee/circular",
                        "newspaper",
                    ),
                    Item::new(
                        "kpi-form",
                        "KPI Form",
                        "/employee/kpi-form",
                        "target",
                    ),
                    Item::new(
                        "letter-request",
                        "Letter Request",
                        "/employee/letter-request",
                        "mail",
                    ),
                    Item::new(
                        "emp-ref-list",
                        "Employee Ref List",
                        "/employee/ref-list",
                        "book-open",
                    ),
                    Item::new(
                        "grievance-list",
                        "Grievance List",
                        "/employee/grievance",
                        "message-circle",
                    ),
                    Item::new(
                        "suggestions-list",
                        "Suggestions List",
                        "/employee/suggestions",
                        "lightbulb",
                    ),
                ],
            },
        ],
    },
    Cluster {
        id: "people",
        label: "People & HR",
        emoji: "👥",
        icon: "users",
        sections: &[
            Section {
                id: "roster",
                label: "Roster",
                items: &[
                    Item::new(
                        "emp-roster",
                        "Employee Roster",
                        "/roster/employee",
                        "calendar-days",
                    ),
                    Item::new(
                        "sup-roster",
                        "Supervisor Roster",
                        "/roster/supervisor",
                        "calendar-check",
                    ),
                    Item::new(
                        "icc-roster",
                        "ICC Roster",
                        "/roster/icc",
                        "calendar",
                    ),
                    Item::new(
                        "ojt-report",
                        "OJT Report List",
                        "/roster/ojt",
                        "bar-chart-2",
                    ),
                    Item::new(
                        "site-check",
                        "Site Check Visit",
                        "/roster/site-check",
                        "map-pin",
                    ),
                    Item::new(
                        "duty-roster",
                        "Duty Roster",
                        "/roster/duty",
                        "clock",
                    ),
                ],
            },
            Section {
                id: "recruitment",
                label: "Recruitment",
                items: &[
                    Item::new(
                        "new-job-app",
                        "New Job Application",
                        "/recruitment/new",
                        "file-plus",
                    ),
                    Item::new(
                        "job-app-list",
                        "Job Application List",
                        "/recruitment/list",
                        "file-text",
                    ),
                ],
            },
            Section {
                id: "training",
                label: "Training",
                items: &[
                    Item::new(
                        "training-schedule",
                        "Training Schedule",
                        "/training/schedule",
                        "calendar-days",
                    ),
                    Item::new(
                        "training-history",
                        "Training History",
                        "/training/history",
                        "history",
                    ),
                    Item::new(
                        "elearning",
                        "E-Learning Dashboard",
                        "/training/elearning",
                        "graduation-cap",
                    ),
                    Item::new(
                        "exam-result",
                        "Exam Result",
                        "/training/exam-result",
                        "award",
                    ),
                    Item::new(
                        "course-list",
                        "Course List",
                        "/training/courses",
                        "book-open",
                    ),
                    Item::new(
                        "training-report",
                        "Report",
                        "/training/report",
                        "bar-chart-2",
                    ),
                    Item::new(
                        "sl-video",
                        "Video",
                        "/training/video",
                        "play-circle",
                    ),
                    Item::new("sop", "SOP", "/training/sop", "book-marked"),
                    Item::new(
                        "handbook",
                        "Handbook",
                        "/training/handbook",
                        "library",
                    ),
                    Item::new("aar", "AAR", "/training/aar", "clipboard-list"),
                    Item::new(
                        "news-events",
                        "News & Events List",
                        "/training/news",
                        "newspaper",
                    ),
                ],
            },
        ],
    },
    Cluster {
        id: "attendance",
        label: "Attendance",
        emoji: "🕐",
        icon: "clock",
        sections: &[
            Section {
                id: "attendance-main",
                label: "Attendance",
                items: &[
                    Item::new(
                        "att-dashboard",
                        "Attendance Dashboard",
                        "/attendance/dashboard",
                        "layout-dashboard",
                    ),
                    Item::new(
                        "daily-att",
                        "Daily Attendance",
                        "/attendance/daily",
                        "calendar-check",
                    ),
                    Item::new(
                        "client-att",
                        "Client Attendance",
                        "/attendance/client",
                        "building-2",
                    ),
                    Item::new(
                        "all-att",
                        "All Attendance",
                        "/attendance/all",
                        "clock",
                    ),
                ],
            },
            Section {
                id: "leave",
                label: "Leave",
                items: &[
                    Item::new(
                        "new-leave",
                        "New Leave",
                        "/leave/new",
                        "file-plus",
                    ),
                    Item::new(
                        "all-leave",
                        "All Leave",
                        "/leave/all",
                        "file-text",
                    ),
                    Item::new(
                        "leave-approval",
                        "Leave Approval",
                        "/leave/approval",
                        "file-check",
                    ),
                    Item::new(
                        "leave-request",
                        "Leave Request",
                        "/leave/request",
                        "send",
                    ),
                    Item::new(
                        "leave-encashment",
                        "Leave Encashment",
                        "/leave/encashment",
                        "dollar-sign",
                    ),
                ],
            },
        ],
    },
    Cluster {
        id: "operations",
        label: "Operations",
        emoji: "🗂",
        icon: "briefcase",
        sections: &[
            Section {
                id: "sites",
                label: "Sites",
                items: &[
                    Item::new("site-kpi", "KPI", "/site/kpi", "target"),
                    Item::new(
                        "all-site",
                        "All Sites",
                        "/site/all",
                        "building-2",
                    ),
                    Item::new(
                        "client-meeting",
                        "Client Meeting",
                        "/site/client-meeting",
                        "users",
                    ),
                    Item::new(
                        "client-feedback",
                        "Client Feedback",
                        "/site/client-feedback",
                        "message-square",
                    ),
                    Item::new(
                        "risk-survey",
                        "Risk Survey",
                        "/site/risk-survey",
                        "shield-alert",
                    ),
                    Item::new(
                        "new-exercise",
                        "New Exercise",
                        "/site/exercise/new",
                        "plus",
                    ),
                    Item::new(
                        "exercise-list",
                        "Exercise List",
                        "/site/exercise/list",
                        "dumbbell",
                    ),
                ],
            },
            Section {
                id: "patrol",
                label: "Patrol",
                items: &[
                    Item::new(
                        "virtual-patrol",
                        "Virtual Patrol Config",
                        "/patrol/virtual",
                        "monitor",
                    ),
                    Item::new(
                        "daily-patrol",
                        "Daily Patrol",
                        "/patrol/daily",
                        "map-pin",
                    ),
                    Item::new("all-patrol", "All Patrol", "/patrol/all", "map"),
                    Item::new(
                        "patrol-config",
                        "Patrol Config",
                        "/patrol/config",
                        "settings-2",
                    ),
                    Item::new(
                        "patrol-checklist",
                        "Patrol Checklist",
                        "/patrol/checklist",
                        "clipboard-check",
                    ),
                ],
            },
            Section {
                id: "incident",
                label: "Incident",
                items: &[
                    Item::new(
                        "new-incident",
                        "New Incident",
                        "/incident/new",
                        "alert-triangle",
                    ),
                    Item::new(
                        "all-incident",
                        "All Incident",
                        "/incident/all",
                        "alert-circle",
                    ),
                ],
            },
            Section {
                id: "defect",
                label: "Defect",
                items: &[
                    Item::new("new-defect", "New Defect", "/defect/new", "bug"),
                    Item::new(
                        "all-defect",
                        "All Defect",
                        "/defect/all",
                        "layers",
                    ),
                    Item::new(
                        "eoccurrence",
                        "E-Occurrence",
                        "/defect/eoccurrence",
                        "refresh-ccw",
                    ),
                ],
            },
        ],
    },
    Cluster {
        id: "projects",
        label: "Projects",
        emoji: "📋",
        icon: "folder-kanban",
        sections: &[
            Section {
                id: "projects-main",
                label: "Projects",
                items: &[
                    Item::new(
                        "new-project",
                        "New Project",
                        "/project/new",
                        "folder-plus",
                    ),
                    Item::new(
                        "all-project",
                        "All Projects",
                        "/project/all",
                        "folder-kanban",
                    ),
                    Item::new(
                        "all-contracts",
                        "All Contracts",
                        "/project/contracts",
                        "file-text",
                    ),
                    Item::new(
                        "proj-analytics",
                        "Project Analytics Report",
                        "/project/analytics",
                        "bar-chart-2",
                    ),
                ],
            },
            Section {
                id: "task",
                label: "Tasks",
                items: &[
                    Item::new(
                        "task-dashboard",
                        "Task Dashboard",
                        "/task/dashboard",
                        "layout-dashboard",
                    ),
                    Item::new(
                        "all-task",
                        "All Tasks",
                        "/task/all",
                        "check-circle",
                    ),
                ],
            },
        ],
    },
    Cluster {
        id: "finance",
        label: "Finance & Resources",
        emoji: "💰",
        icon: "trending-up",
        sections: &[
            Section {
                id: "expenses",
                label: "Expenses",
                items: &[
                    Item::new(
                        "new-expense",
                        "New Expense",
                        "/expense/new",
                        "file-plus",
                    ),
                    Item::new(
                        "all-expense",
                        "All Expense",
                        "/expense/all",
                        "file-text",
                    ),
                    Item::new(
                        "expense-approval",
                        "Expense Approval",
                        "/expense/approval",
                        "file-check",
                    ),
                    Item::new(
                        "recipient",
                        "Recipient",
                        "/expense/recipient",
                        "send",
                    ),
                    Item::new(
                        "cheque-book",
                        "Cheque Book",
                        "/expense/cheque-book",
                        "book-open",
                    ),
                ],
            },
            Section {
                id: "payroll",
                label: "Payroll",
                items: &[
                    Item::new(
                        "monthly-pay",
                        "Monthly Pay",
                        "/payroll/monthly",
                        "calendar-days",
                    ),
                    Item::new(
                        "daily-pay",
                        "Daily Pay",
                        "/payroll/daily",
                        "calendar-check",
                    ),
                    Item::new(
                        "weekly-pay",
                        "Weekly Pay",
                        "/payroll/weekly",
                        "calendar",
                    ),
                    Item::new(
                        "recurring-advance",
                        "Recurring Advance Pay",
                        "/payroll/recurring",
                        "refresh-cw",
                    ),
                    Item::new("loan", "Loan", "/payroll/loan", "landmark"),
                    Item::new(
                        "liquidity-damage",
                        "Liquidity Damage",
                        "/payroll/liquidity",
                        "trending-down",
                    ),
                    Item::new(
                        "cash-pay",
                        "Cash Pay",
                        "/payroll/cash",
                        "banknote",
                    ),
                    Item::new(
                        "pay-report",
                        "Pay Report",
                        "/payroll/report",
                        "bar-chart-2",
                    ),
                    Item::new(
                        "tax-report",
                        "Employee Tax Report",
                        "/payroll/tax",
                        "receipt",
                    ),
                ],
            },
            Section {
                id: "procurement",
                label: "Procurement",
                items: &[
                    Item::new(
                        "purchase-req",
                        "Purchase Requisition",
                        "/procurement/requisition",
                        "shopping-cart",
                    ),
                    Item::new(
                        "purchase-order",
                        "Purchase Order",
                        "/procurement/order",
                        "shopping-bag",
                    ),
                ],
            },
        ],
    },
    Cluster {
        id: "inventory",
        label: "Inventory",
        emoji: "📦",
        icon: "package",
        sections: &[
            Section {
                id: "inventory-main",
                label: "Inventory",
                items: &[
                    Item::new(
                        "inv-dashboard",
                        "Dashboard",
                        "/inventory/dashboard",
                        "layout-dashboard",
                    ),
                    Item::new(
                        "new-inv-assign",
                        "New Assign",
                        "/inventory/assign/new",
                        "plus",
                    ),
                    Item::new(
                        "inv-config",
                        "Config",
                        "/inventory/config",
                        "settings-2",
                    ),
                    Item::new(
                        "assign-inv",
                        "Assign Inventory",
                        "/inventory/assign/list",
                        "package",
                    ),
                    Item::new(
                        "new-outward",
                        "New Outward Entry",
                        "/inventory/outward/new",
                        "package-open",
                    ),
                    Item::new(
                        "outward-list",
                        "Assigned Outward List",
                        "/inventory/outward/list",
                        "package-check",
                    ),
                    Item::new(
                        "outward-history",
                        "Outward History",
                        "/inventory/outward/history",
                        "history",
                    ),
                    Item::new(
                        "stock-list",
                        "Stock List",
                        "/inventory/stock",
                        "boxes",
                    ),
                    Item::new(
                        "inv-handover",
                        "Handover",
                        "/inventory/handover",
                        "upload",
                    ),
                    Item::new(
                        "inv-takeover",
                        "Takeover",
                        "/inventory/takeover",
                        "download",
                    ),
                    Item::new(
                        "inv-approval",
                        "Approval",
                        "/inventory/approval",
                        "check-circle",
                    ),
                ],
            },
            Section {
                id: "keys",
                label: "Keys",
                items: &[
                    Item::new("keys", "Keys", "/inventory/keys", "key"),
                    Item::new(
                        "key-log",
                        "Key Log Session",
                        "/inventory/key-log",
                        "scroll-text",
                    ),
                ],
            },
        ],
    },
    Cluster {
        id: "insights",
        label: "Insights & CRM",
        emoji: "📊",
        icon: "bar-chart-2",
        sections: &[
            Section {
                id: "crm",
                label: "CRM",
                items: &[
                    Item::new(
                        "new-quotation",
                        "New Quotation",
                        "/crm/quotation/new",
                        "file-plus",
                    ),
                    Item::new(
                        "all-quotation",
                        "All Quotation",
                        "/crm/quotation/all",
                        "file-text",
                    ),
                    Item::new("lead", "Lead", "/crm/lead", "target"),
                ],
            },
            Section {
                id: "analytics",
                label: "Analytics",
                items: &[
                    Item::new(
                        "billing-analytics",
                        "Billing Analytics",
                        "/analytics/billing",
                        "receipt",
                    ),
                    Item::new(
                        "profit-project",
                        "Profit per Project",
                        "/analytics/profit",
                        "trending-up",
                    ),
                    Item::new(
                        "profit-project-v2",
                        "Profit per Project V2",
                        "/analytics/profit-v2",
                        "line-chart",
                    ),
                    Item::new(
                        "att-analytics",
                        "Attendance Analytics",
                        "/analytics/attendance",
                        "clock",
                    ),
                    Item::new(
                        "emp-analytics",
                        "Employee Analytics",
                        "/analytics/employee",
                        "users",
                    ),
                    Item::new(
                        "payroll-analytics",
                        "Payroll Analytics",
                        "/analytics/payroll",
                        "banknote",
                    ),
                    Item::new(
                        "site-analytics",
                        "Site Analytics",
                        "/analytics/site",
                        "building-2",
                    ),
                    Item::new(
                        "deploy-analytics",
                        "Deployment Analytics",
                        "/analytics/deployment",
                        "radio",
                    ),
                    Item::new(
                        "data-analytics2",
                        "Data Analytics",
                        "/insights/data-analytics",
                        "database",
                    ),
                ],
            },
        ],
    },
    Cluster {
        id: "system",
        label: "Settings",
        emoji: "⚙️",
        icon: "settings-2",
        sections: &[
            Section {
                id: "settings",
                label: "Settings",
                items: &[
                    Item::new(
                        "company-info",
                        "Company Info",
                        "/settings/company",
                        "building-2",
                    ),
                    Item::new(
                        "leave-settings",
                        "Leave Settings",
                        "/settings/leave",
                        "calendar-x",
                    ),
                    Item::new(
                        "billing-settings",
                        "Billing",
                        "/settings/billing",
                        "credit-card",
                    ),
                    Item::new(
                        "payroll-settings",
                        "Payroll",
                        "/settings/payroll",
                        "dollar-sign",
                    ),
                    Item::new(
                        "app-config",
                        "App Config",
                        "/settings/app",
                        "cog",
                    ),
                    Item::new(
                        "project-settings",
                        "Project",
                        "/settings/project",
                        "folder-kanban",
                    ),
                    Item::new(
                        "master",
                        "Master",
                        "/settings/master",
                        "database",
                    ),
                    Item::new(
                        "template-settings",
                        "Template Settings",
                        "/settings/templates",
                        "layout-grid",
                    ),
                    Item::new(
                        "operation-settings",
                        "Operation",
                        "/settings/operation",
                        "settings-2",
                    ),
                    Item::new(
                        "module-config",
                        "Module Config",
                        "/settings/modules",
                        "layers",
                    ),
                    Item::new(
                        "user-permission",
                        "User Permission",
                        "/settings/permissions",
                        "shield-check",
                    ),
                    Item::new(
                        "data-import",
                        "Data Import",
                        "/settings/import",
                        "upload",
                    ),
                    Item::new(
                        "notification-group",
                        "Notification Group",
                        "/settings/notifications",
                        "bell",
                    ),
                    Item::new(
                        "system-log",
                        "System Log",
                        "/settings/log",
                        "scroll-text",
                    ),
                    Item::new(
                        "ojt-report-setting",
                        "OJT Report",
                        "/settings/ojt",
                        "bar-chart-2",
                    ),
                    Item::new(
                        "report-config",
                        "Report Config",
                        "/settings/reports",
                        "sliders-horizontal",
                    ),
                    Item::new(
                        "company-config",
                        "Company Config",
                        "/settings/company-config",
                        "building",
                    ),
                ],
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    static DUPLICATED: &[Cluster] = &[
        Cluster {
            id: "a",
            label: "A",
            emoji: "A",
            icon: "home",
            sections: &[Section {
                id: "a-main",
                label: "A",
                items: &[Item::new("one", "One", "/shared", "bell")],
            }],
        },
        Cluster {
            id: "b",
            label: "B",
            emoji: "B",
            icon: "home",
            sections: &[Section {
                id: "b-main",
                label: "B",
                items: &[Item::new("two", "Two", "/shared", "bell")],
            }],
        },
    ];

    static REPEATED_CLUSTER: &[Cluster] = &[
        Cluster {
            id: "a",
            label: "A",
            emoji: "A",
            icon: "home",
            sections: &[],
        },
        Cluster {
            id: "a",
            label: "Again",
            emoji: "A",
            icon: "home",
            sections: &[],
        },
    ];

    #[test]
    fn given_builtin_table_when_loaded_then_validation_passes() {
        let taxonomy = Taxonomy::load().expect("built-in table is valid");
        assert_eq!(taxonomy.clusters().len(), 13);
        assert_eq!(taxonomy.clusters()[0].id, HOME_CLUSTER_ID);
        assert_eq!(
            taxonomy.clusters().last().map(|cluster| cluster.id),
            Some(SETTINGS_CLUSTER_ID)
        );
    }

    #[test]
    fn given_shared_path_when_validated_then_duplicate_path_is_reported() {
        let err = Taxonomy::from_clusters(DUPLICATED)
            .expect_err("duplicate path must be rejected");
        assert_eq!(
            err,
            NavigationError::DuplicatePath {
                path: String::from("/shared"),
                first: String::from("one"),
                second: String::from("two"),
            }
        );
    }

    #[test]
    fn given_repeated_cluster_id_when_validated_then_duplicate_cluster_is_reported()
     {
        let err = Taxonomy::from_clusters(REPEATED_CLUSTER)
            .expect_err("duplicate cluster must be rejected");
        assert_eq!(err, NavigationError::DuplicateCluster(String::from("a")));
    }

    #[test]
    fn given_every_cluster_when_inspected_then_first_section_has_items() {
        for cluster in Taxonomy::builtin().clusters() {
            let first = cluster.sections.first().and_then(|s| s.items.first());
            assert!(
                first.is_some(),
                "cluster {} has no landing item",
                cluster.id
            );
        }
    }

    #[test]
    fn given_insights_cluster_when_listing_items_then_data_analytics_has_own_path()
     {
        let taxonomy = Taxonomy::builtin();
        let insights = taxonomy.cluster("insights").expect("insights exists");
        let (_, item) = insights
            .items()
            .find(|(_, item)| item.id == "data-analytics2")
            .expect("insights data analytics exists");
        assert_eq!(item.path, "/insights/data-analytics");
    }
}
