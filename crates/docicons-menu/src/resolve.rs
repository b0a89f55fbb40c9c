//! Icon resolution over a menu tree.

use docicons_resolve::IconResolver;

use crate::error::MenuError;
use crate::menu::MenuItem;

/// Icon identifiers referenced by the menu, in document order.
pub fn icon_ids(items: &[MenuItem]) -> Vec<&str> {
    items
        .iter()
        .flat_map(MenuItem::links)
        .filter_map(|link| link.icon.as_deref())
        .collect()
}

/// Return a copy of the menu with every icon identifier replaced by inline SVG.
///
/// Links without an icon are left untouched.
///
/// # Errors
///
/// Returns [`MenuError::Icon`] for the first link whose icon fails to resolve.
pub fn resolve_menu(
    items: &[MenuItem],
    resolver: &IconResolver,
) -> Result<Vec<MenuItem>, MenuError> {
    let mut resolved = items.to_vec();
    let mut count = 0usize;

    for content in resolved.iter_mut().filter_map(|item| item.content.as_mut()) {
        for link in content
            .categories
            .iter_mut()
            .flat_map(|category| category.items.iter_mut())
        {
            let Some(id) = &link.icon else {
                continue;
            };
            let svg = resolver.resolve(id).map_err(|source| MenuError::Icon {
                label: link.label.clone(),
                source,
            })?;
            link.icon = Some(svg);
            count += 1;
        }
    }

    tracing::debug!(icons = count, "Resolved menu icons");
    Ok(resolved)
}
