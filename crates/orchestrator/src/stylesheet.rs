//! Preview stylesheet assembly.
//!
//! Composes full CSS rules from configuration objects: one rule for the
//! container and one indexed rule per child, the shape a style-injection
//! collaborator drops straight into a `<style>` element.

use crate::config::{ChildConfig, ContainerConfig};
use crate::css::{child_config_to_css, container_config_to_css};

/// Wrap a declaration block in a CSS rule for the given selector.
///
/// An empty block closes the rule immediately, without a dangling indented
/// line.
pub fn css_rule(selector: &str, declarations: &str) -> String {
    if declarations.is_empty() {
        return format!("{selector} {{\n}}");
    }
    format!("{selector} {{\n  {declarations}\n}}")
}

/// Build the full preview stylesheet for a container and its children.
///
/// The container rule uses the selector `.{prefix}-container`; each child
/// uses `.{prefix}-child-{index}` in order. Rules are joined by newlines.
pub fn preview_stylesheet(
    container: &ContainerConfig,
    children: &[ChildConfig],
    class_prefix: &str,
) -> String {
    log::debug!(
        "building preview stylesheet for {} children with prefix {class_prefix:?}",
        children.len()
    );
    let mut rules = Vec::with_capacity(children.len() + 1);
    rules.push(css_rule(
        &format!(".{class_prefix}-container"),
        &container_config_to_css(container),
    ));
    for (index, child) in children.iter().enumerate() {
        rules.push(css_rule(
            &format!(".{class_prefix}-child-{index}"),
            &child_config_to_css(child),
        ));
    }
    rules.join("\n")
}
