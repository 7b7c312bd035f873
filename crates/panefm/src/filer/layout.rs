//! Tiling algorithms for workspace panes.
//!
//! Pure integer partitioning of a workspace rectangle. Pane 0 is the
//! primary pane in the tile modes; division remainders always go to the
//! last pane of the split axis, except in `Tile` where every secondary
//! pane gets the width remainder so their right edges line up.

use std::fmt;
use std::str::FromStr;

use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutMode {
    #[default]
    Tile,
    TileTop,
    TileBottom,
    OneLine,
    OneColumn,
    Fullscreen,
}

impl LayoutMode {
    pub const ALL: [LayoutMode; 6] = [
        LayoutMode::Tile,
        LayoutMode::TileTop,
        LayoutMode::TileBottom,
        LayoutMode::OneLine,
        LayoutMode::OneColumn,
        LayoutMode::Fullscreen,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LayoutMode::Tile => "tile",
            LayoutMode::TileTop => "tile-top",
            LayoutMode::TileBottom => "tile-bottom",
            LayoutMode::OneLine => "one-line",
            LayoutMode::OneColumn => "one-column",
            LayoutMode::Fullscreen => "fullscreen",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayoutMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().to_lowercase();
        LayoutMode::ALL
            .into_iter()
            .find(|mode| mode.name() == wanted)
            .ok_or_else(|| format!("unknown layout: {value}"))
    }
}

/// Split `area` into `count` pane rectangles, in pane order.
pub fn allocate(mode: LayoutMode, area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    if count < 2 {
        return vec![area];
    }
    match mode {
        LayoutMode::Tile => tile(area, count),
        LayoutMode::TileTop => tile_top(area, count),
        LayoutMode::TileBottom => tile_bottom(area, count),
        LayoutMode::OneLine => one_line(area, count),
        LayoutMode::OneColumn => one_column(area, count),
        LayoutMode::Fullscreen => vec![area; count],
    }
}

fn as_cells(count: usize) -> u16 {
    u16::try_from(count).unwrap_or(u16::MAX)
}

fn tile(area: Rect, count: usize) -> Vec<Rect> {
    let Rect { x, y, width, height } = area;
    let half = width / 2;
    let wodd = width % 2;
    let k = as_cells(count - 1);
    let row = height / k;
    let hodd = height % k;

    let mut rects = Vec::with_capacity(count);
    rects.push(Rect::new(x, y, half, height));
    for i in 0..k {
        let extra = if i + 1 == k { hodd } else { 0 };
        rects.push(Rect::new(x + half, y + row * i, half + wodd, row + extra));
    }
    rects
}

fn tile_top(area: Rect, count: usize) -> Vec<Rect> {
    let Rect { x, y, width, height } = area;
    let half = height / 2;
    let hodd = height % 2;
    let k = as_cells(count - 1);
    let column = width / k;
    let wodd = width % k;

    let mut rects = Vec::with_capacity(count);
    rects.push(Rect::new(x, y + half, width, half + hodd));
    for i in 0..k {
        let extra = if i + 1 == k { wodd } else { 0 };
        rects.push(Rect::new(x + column * i, y, column + extra, half));
    }
    rects
}

fn tile_bottom(area: Rect, count: usize) -> Vec<Rect> {
    let Rect { x, y, width, height } = area;
    let half = height / 2;
    let hodd = height % 2;
    let k = as_cells(count - 1);
    let column = width / k;
    let wodd = width % k;

    let mut rects = Vec::with_capacity(count);
    rects.push(Rect::new(x, y, width, half));
    for i in 0..k {
        let extra = if i + 1 == k { wodd } else { 0 };
        rects.push(Rect::new(x + column * i, y + half, column + extra, half + hodd));
    }
    rects
}

fn one_line(area: Rect, count: usize) -> Vec<Rect> {
    let Rect { x, y, width, height } = area;
    let n = as_cells(count);
    let column = width / n;
    let wodd = width % n;
    (0..n)
        .map(|i| {
            let extra = if i + 1 == n { wodd } else { 0 };
            Rect::new(x + column * i, y, column + extra, height)
        })
        .collect()
}

fn one_column(area: Rect, count: usize) -> Vec<Rect> {
    let Rect { x, y, width, height } = area;
    let n = as_cells(count);
    let row = height / n;
    let hodd = height % n;
    (0..n)
        .map(|i| {
            let extra = if i + 1 == n { hodd } else { 0 };
            Rect::new(x, y + row * i, width, row + extra)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{allocate, LayoutMode};
    use proptest::prelude::*;
    use ratatui::layout::Rect;

    fn sizes(rects: &[Rect]) -> Vec<(u16, u16)> {
        rects.iter().map(|r| (r.width, r.height)).collect()
    }

    #[test]
    fn one_line_gives_remainder_to_last_column() {
        let rects = allocate(LayoutMode::OneLine, Rect::new(0, 0, 10, 10), 3);
        assert_eq!(sizes(&rects), vec![(3, 10), (3, 10), (4, 10)]);
        assert_eq!(rects[2].x, 6);
    }

    #[test]
    fn one_column_gives_remainder_to_last_row() {
        let rects = allocate(LayoutMode::OneColumn, Rect::new(2, 1, 8, 11), 3);
        assert_eq!(sizes(&rects), vec![(8, 3), (8, 3), (8, 5)]);
        assert_eq!(rects[2].y, 7);
    }

    #[test]
    fn tile_widens_every_secondary_pane() {
        let rects = allocate(LayoutMode::Tile, Rect::new(0, 0, 9, 9), 3);
        assert_eq!(rects[0], Rect::new(0, 0, 4, 9));
        assert_eq!(rects[1], Rect::new(4, 0, 5, 4));
        assert_eq!(rects[2], Rect::new(4, 4, 5, 5));
    }

    #[test]
    fn tile_top_puts_primary_below_columns() {
        let rects = allocate(LayoutMode::TileTop, Rect::new(0, 0, 10, 7), 4);
        assert_eq!(rects[0], Rect::new(0, 3, 10, 4));
        assert_eq!(sizes(&rects[1..]), vec![(3, 3), (3, 3), (4, 3)]);
    }

    #[test]
    fn tile_bottom_puts_primary_above_columns() {
        let rects = allocate(LayoutMode::TileBottom, Rect::new(0, 0, 10, 7), 4);
        assert_eq!(rects[0], Rect::new(0, 0, 10, 3));
        assert_eq!(rects[3], Rect::new(6, 3, 4, 4));
    }

    #[test]
    fn single_pane_takes_whole_area_in_every_mode() {
        let area = Rect::new(3, 4, 17, 9);
        for mode in LayoutMode::ALL {
            assert_eq!(allocate(mode, area, 1), vec![area], "{mode}");
        }
    }

    #[test]
    fn fullscreen_stacks_every_pane_on_the_area() {
        let area = Rect::new(0, 0, 40, 20);
        assert_eq!(allocate(LayoutMode::Fullscreen, area, 3), vec![area; 3]);
    }

    #[test]
    fn no_panes_yield_no_rects() {
        assert!(allocate(LayoutMode::Tile, Rect::new(0, 0, 10, 10), 0).is_empty());
    }

    #[test]
    fn layout_names_round_trip() {
        for mode in LayoutMode::ALL {
            assert_eq!(mode.name().parse::<LayoutMode>(), Ok(mode));
        }
        assert!("diagonal".parse::<LayoutMode>().is_err());
    }

    fn tiled_mode() -> impl Strategy<Value = LayoutMode> {
        prop_oneof![
            Just(LayoutMode::Tile),
            Just(LayoutMode::TileTop),
            Just(LayoutMode::TileBottom),
            Just(LayoutMode::OneLine),
            Just(LayoutMode::OneColumn),
        ]
    }

    proptest! {
        #[test]
        fn tiled_modes_partition_area_exactly(
            mode in tiled_mode(),
            x in 0u16..50,
            y in 0u16..50,
            width in 0u16..300,
            height in 0u16..120,
            count in 1usize..12,
        ) {
            let area = Rect::new(x, y, width, height);
            let rects = allocate(mode, area, count);
            prop_assert_eq!(rects.len(), count);

            let cells = |r: &Rect| u32::from(r.width) * u32::from(r.height);
            let total: u32 = rects.iter().map(cells).sum();
            prop_assert_eq!(total, cells(&area));

            for (i, a) in rects.iter().enumerate() {
                prop_assert_eq!(a.intersection(area), *a);
                for b in &rects[i + 1..] {
                    prop_assert!(a.intersection(*b).is_empty());
                }
            }
        }
    }
}
