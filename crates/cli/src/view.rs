use hangar_core::{AssetNode, LocationNode};
use std::fmt::Write;
use tabled::Tabled;

const INDENT: &str = "  ";

/// One resolved item in `hangar locate`
#[derive(Debug, Tabled)]
pub struct LocateRow {
    #[tabled(rename = "Item")]
    pub item_id: i64,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Location")]
    pub location: String,
}

/// Render a location and everything stored there, one asset per line.
/// Siblings are ordered by item ID.
pub fn render_location(location: &LocationNode<'_>) -> String {
    let mut out = format!(
        "{} ({})\n",
        location.location().display_name(),
        location.id()
    );

    let mut stack: Vec<(usize, AssetNode<'_>)> = sorted_desc(location.children())
        .into_iter()
        .map(|n| (1, n))
        .collect();
    while let Some((depth, node)) = stack.pop() {
        let _ = writeln!(out, "{}{}", INDENT.repeat(depth), asset_line(&node));
        stack.extend(
            sorted_desc(node.children())
                .into_iter()
                .map(|child| (depth + 1, child)),
        );
    }
    out
}

fn asset_line(node: &AssetNode<'_>) -> String {
    let asset = node.asset();
    let mut line = format!("{} [{}]", asset.display_name(), asset.location_flag);
    if asset.quantity != 1 {
        let _ = write!(line, " x{}", asset.quantity);
    }
    let _ = write!(line, " #{}", asset.item_id);
    line
}

// Reverse order, so popping from the stack yields ascending IDs
fn sorted_desc(mut nodes: Vec<AssetNode<'_>>) -> Vec<AssetNode<'_>> {
    nodes.sort_by_key(|n| std::cmp::Reverse(n.item_id()));
    nodes
}
