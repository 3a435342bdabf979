use crate::draw::Surface;
use crate::geometry::Path;
use crate::paint::Style;

use super::{DrawCmd, PathCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream.
///
/// Acts as a [`Surface`] that records instead of painting, so geometry callers can be
/// exercised without a raster backend and replayed later in paint order.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    /// Layer used by [`Surface::fill_path`].
    layer: ZIndex,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sets the layer subsequent [`Surface::fill_path`] calls record into.
    #[inline]
    pub fn set_layer(&mut self, z: ZIndex) {
        self.layer = z;
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem { key: SortKey::new(z, order), cmd });

        self.sorted_dirty = true;
    }

    /// Iterates items in paint order (back-to-front) without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    /// Replays every recorded path onto `surface` in paint order.
    pub fn replay(&mut self, surface: &mut dyn Surface) {
        for item in self.iter_in_paint_order() {
            let DrawCmd::Path(cmd) = &item.cmd;
            surface.fill_path(&cmd.path, &cmd.style, cmd.name.as_deref());
        }
    }

    /// Finds the topmost recorded path with the given name.
    pub fn find(&mut self, name: &str) -> Option<&PathCmd> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
        self.sorted_indices.iter().rev().find_map(|&i| match &self.items[i].cmd {
            DrawCmd::Path(cmd) if cmd.name.as_deref() == Some(name) => Some(cmd),
            _ => None,
        })
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

impl Surface for DrawList {
    fn fill_path(&mut self, path: &Path, style: &Style, name: Option<&str>) {
        let cmd = PathCmd::new(path.clone(), style.clone(), name.map(str::to_owned));
        self.push(self.layer, DrawCmd::Path(cmd));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{CornerRadii, Rect};
    use crate::geometry::build_path;
    use crate::paint::Color;

    fn square(x: f64) -> Path {
        build_path(Rect::new(x, 0.0, 1.0, 1.0), CornerRadii::zero(), 2)
    }

    fn names(list: &mut DrawList) -> Vec<String> {
        list.iter_in_paint_order()
            .map(|item| {
                let DrawCmd::Path(cmd) = &item.cmd;
                cmd.name.clone().unwrap_or_default()
            })
            .collect()
    }

    #[test]
    fn paint_order_is_z_then_insertion() {
        let mut list = DrawList::new();
        let style = Style::filled(Color::black());

        list.set_layer(ZIndex::new(1));
        list.fill_path(&square(0.0), &style, Some("a"));
        list.set_layer(ZIndex::new(0));
        list.fill_path(&square(1.0), &style, Some("b"));
        list.fill_path(&square(2.0), &style, Some("c"));

        assert_eq!(names(&mut list), vec!["b", "c", "a"]);
    }

    #[test]
    fn find_returns_topmost_match() {
        let mut list = DrawList::new();
        let style = Style::filled(Color::black());
        list.fill_path(&square(0.0), &style, Some("dup"));
        list.fill_path(&square(5.0), &style, Some("dup"));

        let hit = list.find("dup").unwrap();
        assert_eq!(hit.path.vertices()[0].x, 5.0);
        assert!(list.find("missing").is_none());
    }

    #[test]
    fn replay_forwards_everything_in_order() {
        let mut src = DrawList::new();
        let style = Style::stroked(Color::white(), 2.0);
        src.fill_path(&square(0.0), &style, None);
        src.fill_path(&square(1.0), &style, Some("second"));

        let mut dst = DrawList::new();
        src.replay(&mut dst);
        assert_eq!(dst.items(), src.items());

        src.clear();
        assert!(src.is_empty());
        assert_eq!(dst.len(), 2);
    }
}
