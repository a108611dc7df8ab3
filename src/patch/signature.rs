//! Signature adjustment step
//!
//! After substitution the image-upload handler may contain `await confirm`
//! inside a synchronous arrow function. Rewrite its declaration to the async
//! form, but only when both the handler and an awaited call are present.

use regex::Regex;

pub const HANDLER_NAME: &str = "handleImageUpload";
pub const HANDLER_PATTERN: &str = r"const handleImageUpload = \(([^)]+)\) => \{";

const AWAITED_CALL: &str = "await confirm";
const HANDLER_REPLACEMENT: &str = "const handleImageUpload = async (${1}) => {";

pub fn asyncify_handler(content: &str, handler_re: &Regex) -> String {
    if content.contains(HANDLER_NAME) && content.contains(AWAITED_CALL) {
        return handler_re
            .replace_all(content, HANDLER_REPLACEMENT)
            .into_owned();
    }
    content.to_string()
}
