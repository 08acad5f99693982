//! Display derivations for inbox requests.
//!
//! This module turns an [`InboxRequest`] into the strings and CSS-class tokens a renderer needs:
//! category chips, priority badges, relative timestamps, estimated handling time and the
//! assignee's initials.
//!
//! Responsibilities:
//! - Map the closed [`RequestType`] set to icons, labels and classes through fixed tables, with an
//!   explicit fallback for kinds outside the set
//! - Rank priority as urgent, then abnormal results, then routine
//! - Bucket elapsed time against a caller-supplied "now"
//!
//! Notes:
//! - Every function here is total and free of I/O. The only time input is the `now` argument, so
//!   a caller that captures "now" once per render pass gets consistent output across rows.
//! - Timestamps in the future are treated as zero elapsed time.

use crate::constants::{CLINICIAN_TITLES, OPEN_ENDED_ESTIMATE_SECS, UNKNOWN_INITIALS};
use crate::{InboxRequest, RequestType};
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use serde::Serialize;
use std::fmt::Display;

// ============================================================================
// Lookup tables
// ============================================================================

/// Icon shown next to a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeIcon {
    Medicine,
    Message,
    Labs,
    Unknown,
}

impl TypeIcon {
    /// Short icon name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Medicine => "medicine",
            Self::Message => "message",
            Self::Labs => "labs",
            Self::Unknown => "unknown",
        }
    }

    /// Path of the icon asset served with the web client.
    pub fn asset_path(self) -> &'static str {
        match self {
            Self::Medicine => "assets/icons/medicine.svg",
            Self::Message => "assets/icons/message.svg",
            Self::Labs => "assets/icons/icon_labs.svg",
            Self::Unknown => "assets/icons/icon-unknown.svg",
        }
    }
}

/// Presentation of a known request kind.
struct Category {
    label: &'static str,
    icon: TypeIcon,
}

static RENEWAL: Category = Category {
    label: "Medication",
    icon: TypeIcon::Medicine,
};

static FREE_TEXT: Category = Category {
    label: "Message",
    icon: TypeIcon::Message,
};

static LAB_REPORT: Category = Category {
    label: "Lab Results",
    icon: TypeIcon::Labs,
};

const FALLBACK_CATEGORY_LABEL: &str = "Request";

fn category(kind: &RequestType) -> Option<&'static Category> {
    match kind {
        RequestType::Renewal => Some(&RENEWAL),
        RequestType::FreeText => Some(&FREE_TEXT),
        RequestType::LabReport => Some(&LAB_REPORT),
        RequestType::Other(_) => None,
    }
}

/// Priority tier of a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Urgent,
    Attention,
    Routine,
}

impl Priority {
    /// Rank a request: the urgent flag wins over abnormal results, which win over routine.
    pub fn of(is_urgent: bool, abnormal_results: &[String]) -> Self {
        if is_urgent {
            Self::Urgent
        } else if !abnormal_results.is_empty() {
            Self::Attention
        } else {
            Self::Routine
        }
    }

    /// Class applied to the whole row.
    pub fn class(self) -> &'static str {
        match self {
            Self::Urgent => "priority-urgent",
            Self::Attention => "priority-attention",
            Self::Routine => "priority-routine",
        }
    }

    /// Class applied to the badge; routine requests get no badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::Attention => "attention",
            Self::Routine => "",
        }
    }

    /// Badge text; empty for routine requests.
    pub fn label(self) -> &'static str {
        match self {
            Self::Urgent => "Urgent",
            Self::Attention => "Attention",
            Self::Routine => "",
        }
    }
}

// ============================================================================
// Public presenter operations
// ============================================================================

/// Request presentation operations.
///
/// This is a zero-sized type used for namespacing; all methods are associated functions.
pub struct RequestPresenter;

impl RequestPresenter {
    pub fn type_icon(kind: &RequestType) -> TypeIcon {
        category(kind).map_or(TypeIcon::Unknown, |c| c.icon)
    }

    pub fn category_label(kind: &RequestType) -> &'static str {
        category(kind).map_or(FALLBACK_CATEGORY_LABEL, |c| c.label)
    }

    /// `category-<kind>`, using the raw spelling for unrecognised kinds.
    pub fn category_class(kind: &RequestType) -> String {
        format!("category-{kind}")
    }

    pub fn type_class(kind: &RequestType) -> String {
        format!("type-{kind}")
    }

    pub fn priority_class(is_urgent: bool, abnormal_results: &[String]) -> &'static str {
        Priority::of(is_urgent, abnormal_results).class()
    }

    pub fn priority_badge_class(is_urgent: bool, abnormal_results: &[String]) -> &'static str {
        Priority::of(is_urgent, abnormal_results).badge_class()
    }

    pub fn priority_label(is_urgent: bool, abnormal_results: &[String]) -> &'static str {
        Priority::of(is_urgent, abnormal_results).label()
    }

    /// Whether the alerts section should be shown at all.
    pub fn has_alerts(is_urgent: bool, abnormal_results: &[String]) -> bool {
        is_urgent || !abnormal_results.is_empty()
    }

    /// Render `instant` as `HH:mm DD/MM/YYYY` in the given timezone.
    pub fn formatted_timestamp<Tz>(instant: DateTime<Utc>, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        instant
            .with_timezone(tz)
            .format("%H:%M %d/%m/%Y")
            .to_string()
    }

    /// Coarse "how long ago" label.
    ///
    /// Buckets, on whole elapsed minutes `m`:
    /// - `m < 1`: `Just now`
    /// - `m < 60`: `{m} min. ago`
    /// - under a day: `{hours} hr. ago`
    /// - one day: `Yesterday`
    /// - under a week: `{days} days ago`
    /// - otherwise: `{weeks} wk. ago`
    pub fn relative_time(instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
        let minutes = elapsed(instant, now).num_minutes();
        if minutes < 1 {
            return "Just now".into();
        }
        if minutes < 60 {
            return format!("{minutes} min. ago");
        }

        let hours = minutes / 60;
        if hours < 24 {
            return format!("{hours} hr. ago");
        }

        let days = hours / 24;
        match days {
            1 => "Yesterday".into(),
            2..=6 => format!("{days} days ago"),
            _ => format!("{} wk. ago", days / 7),
        }
    }

    /// Age class on elapsed hours, half-open buckets `[0,1)`, `[1,24)`, `[24,72)`, `[72,∞)`.
    pub fn time_age_class(instant: DateTime<Utc>, now: DateTime<Utc>) -> &'static str {
        let age = elapsed(instant, now);
        if age < Duration::hours(1) {
            "age-recent"
        } else if age < Duration::hours(24) {
            "age-today"
        } else if age < Duration::hours(72) {
            "age-aging"
        } else {
            "age-old"
        }
    }

    /// Estimated handling time.
    ///
    /// Under a minute shows seconds. Up to twenty minutes rounds half-up to whole minutes.
    /// From twenty minutes on the estimate is open-ended: minutes are floored and suffixed `+`.
    pub fn estimated_time(seconds: u64) -> String {
        if seconds >= OPEN_ENDED_ESTIMATE_SECS {
            format!("{}+ min.", seconds / 60)
        } else if seconds >= 60 {
            format!("{} min.", (seconds + 30) / 60)
        } else {
            format!("{seconds} sec.")
        }
    }

    /// Two-letter initials for the assignee avatar.
    ///
    /// A leading `Dr.`, `Dr`, `MD` or `M.D.` word is ignored. Two or more remaining words give
    /// the initials of the first and last word; a single word gives its first two letters.
    /// Anything shorter yields `??`.
    pub fn doctor_initials(name: &str) -> String {
        let mut parts: Vec<&str> = name.split_whitespace().collect();
        if parts.first().is_some_and(|first| is_title(first)) {
            parts.remove(0);
        }

        match parts.as_slice() {
            [] => UNKNOWN_INITIALS.into(),
            [only] => {
                let head: Vec<char> = only.chars().take(2).collect();
                if head.len() < 2 {
                    UNKNOWN_INITIALS.into()
                } else {
                    head.iter().flat_map(|c| c.to_uppercase()).collect()
                }
            }
            [first, .., last] => {
                let mut initials = String::with_capacity(2);
                initials.extend(initial(first));
                initials.extend(initial(last));
                initials
            }
        }
    }

    pub fn panels_display(panels: &[String]) -> String {
        join_for_display(panels)
    }

    pub fn panels_count(panels: &[String]) -> usize {
        panels.len()
    }

    /// `panel` for exactly one panel, `panels` otherwise.
    pub fn panels_label(panels: &[String]) -> &'static str {
        if panels.len() == 1 {
            "panel"
        } else {
            "panels"
        }
    }

    pub fn abnormal_results_display(abnormal_results: &[String]) -> String {
        join_for_display(abnormal_results)
    }

    pub fn labels_display(labels: &[String]) -> String {
        join_for_display(labels)
    }

    pub fn read_class(is_read: bool) -> &'static str {
        if is_read {
            ""
        } else {
            "unread"
        }
    }

    /// "Last synced" text for the inbox header; empty until the first successful load.
    pub fn sync_time_display(last_sync: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
        last_sync.map_or_else(String::new, |synced| Self::relative_time(synced, now))
    }
}

// ============================================================================
// Derived view
// ============================================================================

/// Display-ready projection of one request.
///
/// Recomputed whenever the request or "now" changes; never cached.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedView {
    pub request_id: String,
    pub type_icon: String,
    pub category_label: String,
    pub category_class: String,
    pub type_class: String,
    pub priority_class: String,
    pub priority_badge_class: String,
    pub priority_label: String,
    pub has_alerts: bool,
    pub formatted_timestamp: String,
    pub relative_time: String,
    pub time_age_class: String,
    pub estimated_time: String,
    pub doctor_initials: String,
    pub panels_display: String,
    pub panels_count: usize,
    pub panels_label: String,
    pub abnormal_results_display: String,
    pub labels_display: String,
    pub read_class: String,
}

impl DerivedView {
    /// Derive the view with timestamps in the local timezone.
    pub fn new(request: &InboxRequest, now: DateTime<Utc>) -> Self {
        Self::with_timezone(request, now, &Local)
    }

    /// Derive the view with timestamps rendered in `tz`.
    pub fn with_timezone<Tz>(request: &InboxRequest, now: DateTime<Utc>, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let kind = &request.kind;
        let abnormal = request.abnormal_results();
        let priority = Priority::of(request.is_urgent, abnormal);
        let modified = request.last_modified_date;

        Self {
            request_id: request.id.clone(),
            type_icon: RequestPresenter::type_icon(kind).asset_path().into(),
            category_label: RequestPresenter::category_label(kind).into(),
            category_class: RequestPresenter::category_class(kind),
            type_class: RequestPresenter::type_class(kind),
            priority_class: priority.class().into(),
            priority_badge_class: priority.badge_class().into(),
            priority_label: priority.label().into(),
            has_alerts: RequestPresenter::has_alerts(request.is_urgent, abnormal),
            formatted_timestamp: RequestPresenter::formatted_timestamp(modified, tz),
            relative_time: RequestPresenter::relative_time(modified, now),
            time_age_class: RequestPresenter::time_age_class(modified, now).into(),
            estimated_time: RequestPresenter::estimated_time(request.estimated_time_sec),
            doctor_initials: RequestPresenter::doctor_initials(&request.assignment.assigned_to),
            panels_display: RequestPresenter::panels_display(request.panels()),
            panels_count: RequestPresenter::panels_count(request.panels()),
            panels_label: RequestPresenter::panels_label(request.panels()).into(),
            abnormal_results_display: RequestPresenter::abnormal_results_display(abnormal),
            labels_display: RequestPresenter::labels_display(request.labels()),
            read_class: RequestPresenter::read_class(request.is_read).into(),
        }
    }
}

// ============================================================================
// Helper functions (internal)
// ============================================================================

/// Time since `instant`, clamped at zero for future timestamps.
fn elapsed(instant: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    (now - instant).max(Duration::zero())
}

fn is_title(token: &str) -> bool {
    CLINICIAN_TITLES
        .iter()
        .any(|title| title.eq_ignore_ascii_case(token))
}

fn initial(word: &str) -> impl Iterator<Item = char> + '_ {
    word.chars().take(1).flat_map(char::to_uppercase)
}

fn join_for_display(items: &[String]) -> String {
    items.join(", ")
}
