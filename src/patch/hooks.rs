//! Hook declaration insertion step
//!
//! Adds `const { confirm } = useConfirmDialog();` inside the component body,
//! anchored after the user-session destructure, falling back to the
//! navigation-handle declaration. No anchor, no insertion.

/// Declaration line inserted for the confirm hook (component-body indent)
pub const CONFIRM_HOOK_DECL: &str = "  const { confirm } = useConfirmDialog();";

/// Marker: the destructured binding already exists
pub const HOOK_MARKER: &str = "{ confirm } = useConfirmDialog()";

const AUTH_HOOK_ANCHOR: &str = "const { user } = useAuth();";
const NAVIGATE_ANCHOR: &str = "const navigate = useNavigate();";

pub fn ensure_hook(content: &str) -> String {
    if content.contains(HOOK_MARKER) {
        return content.to_string();
    }

    if content.contains(AUTH_HOOK_ANCHOR) {
        return content.replace(
            AUTH_HOOK_ANCHOR,
            &format!("{AUTH_HOOK_ANCHOR}\n{CONFIRM_HOOK_DECL}"),
        );
    }

    if content.contains(NAVIGATE_ANCHOR) {
        return content.replace(
            NAVIGATE_ANCHOR,
            &format!("{NAVIGATE_ANCHOR}\n{CONFIRM_HOOK_DECL}"),
        );
    }

    content.to_string()
}
