pub(crate) const PANEL_TITLE: &str = "S-Plus AI";
pub(crate) const DRAFT_PLACEHOLDER: &str = "Ask about employees, billing...";
pub(crate) const TYPING_LABEL: &str = "Thinking…";
pub(crate) const REPLY_DELAY_MS: u64 = 900;
pub(crate) const SUGGESTIONS_LABEL: &str = "SUGGESTIONS";

/// Prompts offered while the greeting is the only message.
pub(crate) const SUGGESTIONS: [&str; 3] = [
    "Who is on leave today?",
    "Show billing summary",
    "How many employees?",
];

pub(crate) const INITIAL_MESSAGE: &str = "Hi! I'm your S-Plus AI assistant. \
I can help you with employee records, reports, analytics, and data \
insights.\n\nWhat would you like to know?";

const LEAVE_REPLY: &str = "Based on today's attendance data, **23 employees** \
are on leave across all sites:\n- Annual Leave: 15\n- Medical Leave: 6\n\
- Emergency Leave: 2";

const HEADCOUNT_REPLY: &str = "Current headcount: **1,245 employees** across \
**87 active sites**.\n\nThis month: 18 new joiners, 4 resignations. Net \
change: **+14**.";

const BILLING_REPLY: &str = "February 2026 billing summary:\n- Total \
invoiced: **RM 284,500**\n- Collected: **RM 234,200** (82.4%)\n\
- Outstanding: **RM 50,300**\n- Overdue: **RM 22,800**";

const PATROL_REPLY: &str = "Last 7 days patrol summary:\n- Patrols \
completed: **342** / 360 scheduled (95%)\n- Incidents reported: **7** \
(3 resolved, 4 pending)\n- Defects logged: **12**";

const PROJECT_REPLY: &str = "Active projects: **31** out of 47 total \
contracts.\n- Total portfolio value: **RM 28M**\n- Avg progress: **58%**\n\
- Expiring in 30 days: **4 contracts**";

const FALLBACK_REPLY: &str = "I'm analysing your query. For detailed data, \
please navigate to the relevant module or refine your question with \
specific dates, sites, or employee names.";

const REPLY_RULES: &[(&[&str], &str)] = &[
    (&["leave", "absent"], LEAVE_REPLY),
    (&["employee", "headcount", "staff"], HEADCOUNT_REPLY),
    (&["invoice", "billing", "revenue"], BILLING_REPLY),
    (&["patrol", "incident"], PATROL_REPLY),
    (&["project", "contract"], PROJECT_REPLY),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ChatMessage {
    pub(crate) role: ChatRole,
    pub(crate) text: String,
}

impl ChatMessage {
    pub(crate) fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub(crate) fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
        }
    }
}

/// Read-only assistant data for rendering.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AssistantViewModel<'a> {
    pub(crate) messages: &'a [ChatMessage],
    pub(crate) draft: &'a str,
    pub(crate) is_typing: bool,
    pub(crate) is_dragging: bool,
}

/// Canned reply for a query. Keywords match case-insensitively and the
/// first matching rule wins.
/// Suggestions stay visible until the first message is sent.
pub(crate) fn shows_suggestions(messages: &[ChatMessage]) -> bool {
    messages.len() <= 1
}

pub(crate) fn reply_for(query: &str) -> &'static str {
    let query = query.to_lowercase();
    REPLY_RULES
        .iter()
        .find(|(keywords, _)| {
            keywords.iter().any(|keyword| query.contains(keyword))
        })
        .map(|(_, reply)| *reply)
        .unwrap_or(FALLBACK_REPLY)
}

/// Message text with `**` emphasis markers removed.
pub(crate) fn display_text(text: &str) -> String {
    text.replace("**", "")
}
