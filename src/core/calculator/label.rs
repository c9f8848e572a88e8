/// Labels longer than this are shortened.
pub const MAX_LABEL_CHARS: usize = 18;

/// Characters kept before the ellipsis marker.
pub const KEPT_LABEL_CHARS: usize = 15;

pub const ELLIPSIS: &str = "...";

/// Shorten a task name for display inside a session block.
pub fn display_label(task_name: &str) -> String {
    if task_name.chars().count() > MAX_LABEL_CHARS {
        let mut s: String = task_name.chars().take(KEPT_LABEL_CHARS).collect();
        s.push_str(ELLIPSIS);
        s
    } else {
        task_name.to_string()
    }
}
