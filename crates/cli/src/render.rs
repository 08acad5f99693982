//! Plain-text rendering of derived views.

use inbox_core::{DerivedView, Inbox, InboxRequest};

/// One line per request, prefixed with `*` when unread.
pub fn row(request: &InboxRequest, view: &DerivedView) -> String {
    let marker = if view.read_class.is_empty() { ' ' } else { '*' };
    let mut line = format!(
        "{marker} {id:<4} {category:<12} {patient:<20} {relative:>12}  {estimate:>9}  {initials:<2}",
        id = request.id,
        category = view.category_label,
        patient = request.patient_name,
        relative = view.relative_time,
        estimate = view.estimated_time,
        initials = view.doctor_initials,
    );
    if !view.priority_label.is_empty() {
        line.push_str(&format!("  [{}]", view.priority_label));
    }
    if view.panels_count > 0 {
        line.push_str(&format!("  {} {}", view.panels_count, view.panels_label));
    }
    line
}

/// Whole inbox: sync line followed by rows, or the empty/error message.
pub fn inbox(inbox: &Inbox, views: &[DerivedView], sync_time: &str) -> String {
    if let Some(error) = inbox.error() {
        return error.to_owned();
    }

    let mut out = String::new();
    if !sync_time.is_empty() {
        out.push_str(&format!("Last synced: {sync_time}\n"));
    }
    if let Some(empty) = inbox.empty_message() {
        out.push_str(empty);
        return out;
    }
    for (request, view) in inbox.requests().iter().zip(views) {
        out.push_str(&row(request, view));
        out.push('\n');
    }
    out.trim_end().to_owned()
}

/// Full detail block for a single request.
pub fn detail(request: &InboxRequest, view: &DerivedView) -> String {
    let mut out = String::new();
    let mut field = |name: &str, value: &str| {
        if !value.is_empty() {
            out.push_str(&format!("{:<13}{}\n", format!("{name}:"), value));
        }
    };

    field("Patient", &request.patient_name);
    field(
        "Category",
        &format!("{} ({})", view.category_label, view.category_class),
    );
    field("Status", &request.status);
    field("Priority", &view.priority_label);
    field(
        "Modified",
        &format!("{} ({})", view.formatted_timestamp, view.relative_time),
    );
    field("Estimated", &view.estimated_time);
    field(
        "Assigned to",
        &format!(
            "{} [{}]",
            request.assignment.assigned_to, view.doctor_initials
        ),
    );
    if view.panels_count > 0 {
        field(
            "Panels",
            &format!("{} ({} {})", view.panels_display, view.panels_count, view.panels_label),
        );
    }
    field("Abnormal", &view.abnormal_results_display);
    field("Labels", &view.labels_display);
    field("Description", &request.description);

    out.trim_end().to_owned()
}
