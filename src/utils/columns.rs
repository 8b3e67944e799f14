use std::borrow::Cow;
use std::cmp::Ordering;

use ratatui::layout::Constraint;
use ratatui::text::Span;

use crate::models::sort::SortDir;

/// Room kept after a column title for the sort marker, e.g. ` ↑`.
pub const MARKER_WIDTH: u16 = 2;

pub struct ColDef<T> {
    pub title: &'static str,
    /// `Length` for fixed columns, `Fill(weight)` for columns sharing the free space
    pub width: Constraint,
    /// value accessor, used in cell rendering
    pub accessor: for<'a> fn(&'a T) -> Cow<'a, str>,
    /// sort key, optional. If None, use the string from accessor for sorting
    pub sort_key: Option<fn(&T) -> SortKey>,
}

impl<T> ColDef<T> {
    /// Compare two items based on this column definition
    #[inline]
    pub fn cmp(&self, a: &T, b: &T) -> Ordering {
        match self.sort_key {
            Some(key) => key(a).cmp(&key(b)),
            None => (self.accessor)(a).cmp(&(self.accessor)(b)),
        }
    }

    #[inline]
    pub fn ordering(&self, a: &T, b: &T, dir: SortDir) -> Ordering {
        let ord = self.cmp(a, b);
        match dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    }

    /// Narrowest width that still shows the whole title and a sort marker.
    pub fn min_width(&self) -> u16 {
        let title = u16::try_from(Span::raw(self.title).width()).unwrap_or(u16::MAX);
        let floor = title.saturating_add(MARKER_WIDTH);
        match self.width {
            Constraint::Length(len) => len.max(floor),
            _ => floor,
        }
    }

    fn weight(&self) -> u16 {
        match self.width {
            Constraint::Fill(weight) => weight,
            _ => 0,
        }
    }
}

/// Resolves the widths of `cols` laid out in `total` cells with `spacing` between columns.
///
/// Every column gets at least [`ColDef::min_width`] and `Fill` columns split what is left by
/// weight. When even the minimums do not fit, the rightmost columns are narrowed first.
pub fn fit_widths<T>(cols: &[ColDef<T>], total: u16, spacing: u16) -> Vec<u16> {
    let gaps = u16::try_from(cols.len().saturating_sub(1))
        .unwrap_or(u16::MAX)
        .saturating_mul(spacing);
    let mut free = total.saturating_sub(gaps);
    let mut widths = vec![0u16; cols.len()];
    let mut pinned = vec![false; cols.len()];

    // pin one column per pass: fixed ones, then any whose share would clip its title
    loop {
        let weights = free_weights(cols, &pinned);
        let next = (0..cols.len()).find(|&idx| {
            let col = &cols[idx];
            let clipped = share(free, col.weight(), weights) < col.min_width();
            !pinned[idx] && (col.weight() == 0 || clipped)
        });
        let Some(idx) = next else { break };
        widths[idx] = cols[idx].min_width().min(free);
        pinned[idx] = true;
        free -= widths[idx];
    }

    let weights = free_weights(cols, &pinned);
    let mut rest = free;
    for idx in (0..cols.len()).filter(|&idx| !pinned[idx]) {
        widths[idx] = share(free, cols[idx].weight(), weights);
        rest -= widths[idx];
    }
    // rounding leftovers go to the leftmost flexible columns
    for idx in (0..cols.len()).filter(|&idx| !pinned[idx]).take(rest as usize) {
        widths[idx] += 1;
    }
    widths
}

fn free_weights<T>(cols: &[ColDef<T>], pinned: &[bool]) -> u32 {
    cols.iter()
        .zip(pinned)
        .filter(|(_, pinned)| !**pinned)
        .map(|(col, _)| u32::from(col.weight()))
        .sum()
}

fn share(free: u16, weight: u16, weights: u32) -> u16 {
    if weights == 0 {
        return 0;
    }
    // never more than `free`, so the narrowing cast is lossless
    (u32::from(free) * u32::from(weight) / weights) as u16
}

/// Typed sort key for columns whose display text does not sort correctly
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    U64(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item(u64, &'static str);

    fn num_col() -> ColDef<Item> {
        ColDef {
            title: "Num",
            width: Constraint::Length(4),
            accessor: |i: &Item| Cow::Owned(i.0.to_string()),
            sort_key: Some(|i: &Item| SortKey::U64(i.0)),
        }
    }

    fn text_col(title: &'static str, weight: u16) -> ColDef<Item> {
        ColDef {
            title,
            width: Constraint::Fill(weight),
            accessor: |i: &Item| Cow::Borrowed(i.1),
            sort_key: None,
        }
    }

    fn layout() -> Vec<ColDef<Item>> {
        vec![num_col(), text_col("Text", 1), text_col("Wide text", 3)]
    }

    #[test]
    fn test_numeric_key_beats_text_order() {
        // "10" < "9" as text, but not as numbers
        let by_num = num_col();
        let (a, b) = (Item(9, "x"), Item(10, "x"));
        assert_eq!(by_num.cmp(&a, &b), Ordering::Less);
        let (sa, sb) = ((by_num.accessor)(&a), (by_num.accessor)(&b));
        assert_eq!(sa.cmp(&sb), Ordering::Greater);
    }

    #[test]
    fn test_ordering_dir() {
        let by_text = text_col("Text", 1);
        let (a, b) = (Item(1, "alpha"), Item(2, "beta"));
        assert_eq!(by_text.ordering(&a, &b, SortDir::Asc), Ordering::Less);
        assert_eq!(by_text.ordering(&a, &b, SortDir::Desc), Ordering::Greater);
        assert_eq!(by_text.ordering(&a, &a, SortDir::Desc), Ordering::Equal);
    }

    #[test]
    fn test_min_width_keeps_title_and_marker() {
        // fixed width wins when it is already wide enough
        assert_eq!(ColDef { width: Constraint::Length(9), ..text_col("Num", 1) }.min_width(), 9);
        assert_eq!(num_col().min_width(), 5);
        assert_eq!(text_col("Wide text", 3).min_width(), 11);
    }

    #[test]
    fn test_fit_widths_splits_by_weight() {
        let widths = fit_widths(&layout(), 40, 1);
        assert_eq!(widths, vec![5, 9, 24]);
        assert_eq!(widths.iter().sum::<u16>() + 2, 40);
    }

    #[test]
    fn test_fit_widths_pins_clipped_titles() {
        // a plain 1:3 split would leave "Text" 4 cells
        assert_eq!(fit_widths(&layout(), 24, 1), vec![5, 6, 11]);
    }

    #[test]
    fn test_fit_widths_narrow() {
        assert_eq!(fit_widths(&layout(), 14, 1), vec![5, 6, 1]);
        assert_eq!(fit_widths(&layout(), 0, 1), vec![0, 0, 0]);
        assert!(fit_widths::<Item>(&[], 10, 2).is_empty());
    }
}
