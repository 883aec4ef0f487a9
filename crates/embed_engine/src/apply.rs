use std::borrow::Cow;

use lol_html::html_content::Element;
use lol_html::{rewrite_str, ElementContentHandlers, HandlerResult, RewriteStrSettings, Selector};

use crate::normalize::DomEdit;

#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    #[error("selector `{selector}` is not supported by the rewriter")]
    Selector { selector: String },
    #[error("rewriting failed: {0}")]
    Rewrite(#[from] lol_html::errors::RewritingError),
}

/// Applies an edit plan to rendered markup and returns the rewritten
/// document. Each edit touches the first matching element only.
pub fn apply_edits(html: &str, edits: &[DomEdit]) -> Result<String, RewriteError> {
    if edits.is_empty() {
        return Ok(html.to_string());
    }

    let mut handlers: Vec<(Cow<'_, Selector>, ElementContentHandlers<'_>)> = Vec::new();
    for edit in edits {
        let selector = edit
            .selector()
            .parse::<Selector>()
            .map_err(|_| RewriteError::Selector {
                selector: edit.selector().to_string(),
            })?;
        let edit = edit.clone();
        let mut fired = false;
        let handler = move |el: &mut Element| -> HandlerResult {
            if fired {
                return Ok(());
            }
            fired = true;
            apply_to_element(&edit, el);
            Ok(())
        };
        handlers.push((
            Cow::Owned(selector),
            ElementContentHandlers::default().element(handler),
        ));
    }

    let output = rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: handlers,
            ..RewriteStrSettings::default()
        },
    )?;
    Ok(output)
}

fn apply_to_element(edit: &DomEdit, el: &mut Element) {
    match edit {
        DomEdit::Remove { .. } => el.remove(),
        DomEdit::SetInlineStyle {
            property, value, ..
        } => {
            let style = match el.get_attribute("style") {
                // An appended declaration wins over an earlier one for the
                // same property.
                Some(existing) if !existing.trim().is_empty() => {
                    format!("{}; {property}: {value}", existing.trim().trim_end_matches(';'))
                }
                _ => format!("{property}: {value}"),
            };
            let _ = el.set_attribute("style", &style);
        }
        DomEdit::RemoveClasses { classes, .. } => {
            if let Some(existing) = el.get_attribute("class") {
                let kept = existing
                    .split_whitespace()
                    .filter(|class| !classes.iter().any(|removed| removed == class))
                    .collect::<Vec<_>>()
                    .join(" ");
                let _ = el.set_attribute("class", &kept);
            }
        }
    }
}
