/// Pixel budget of a trend timeline.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrendLayout {
    /// Width of a single version icon.
    pub item_width: f64,
    /// Total width the timeline may occupy.
    pub available_width: f64,
}

impl TrendLayout {
    pub const fn new(item_width: f64, available_width: f64) -> Self {
        Self {
            item_width,
            available_width,
        }
    }

    /// How many icons fit next to each other without overlapping.
    ///
    /// A non-positive item width lets any amount fit whereas a NaN quotient
    /// or negative available width lets nothing fit.
    pub fn max_fit(&self) -> usize {
        // float to int casts saturate
        (self.available_width / self.item_width).floor() as usize
    }

    /// The largest gap allowed between two icons.
    pub fn max_gap(&self) -> f64 {
        self.available_width / 5.0
    }

    /// Spread `count` icons over the available width.
    ///
    /// The gap is capped at [`max_gap`]; a row that becomes narrower than the
    /// available width because of that is centered.
    ///
    /// [`max_gap`]: TrendLayout::max_gap
    pub fn spacing(&self, count: usize) -> Spacing {
        if count < 2 {
            return Spacing::default();
        }

        let count = count as f64;
        let gap = (self.available_width - count * self.item_width) / (count - 1.0);
        let max_gap = self.max_gap();

        if gap > max_gap {
            let row_width = max_gap * (count - 1.0) + self.item_width * count;

            Spacing {
                gap: max_gap,
                position_adjustment: (self.available_width - row_width) / 2.0,
            }
        } else {
            Spacing {
                gap,
                position_adjustment: 0.0,
            }
        }
    }
}

/// Horizontal spacing of a timeline's icons.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Spacing {
    /// Distance between two consecutive icons.
    pub gap: f64,
    /// Offset of the first icon from the left edge.
    pub position_adjustment: f64,
}

impl Spacing {
    /// Left edge of the icon at `idx`.
    pub fn x(&self, idx: usize, item_width: f64) -> f64 {
        self.position_adjustment + idx as f64 * (item_width + self.gap)
    }
}
