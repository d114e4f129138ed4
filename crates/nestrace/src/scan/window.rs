/// One side-by-side row of a context window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextRow<'a> {
    pub index: usize,
    pub candidate: &'a str,
    pub reference: &'a str,
    pub divergent: bool,
}

/// Lines surrounding a divergence, in increasing index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextWindow<'a> {
    rows: Vec<ContextRow<'a>>,
}

impl<'a> ContextWindow<'a> {
    /// Rows `index - radius ..= index + radius`, clamped to `0..len`, where
    /// `len` is the length of the shorter slice.
    ///
    /// An `index` outside the slices yields an empty window.
    #[must_use]
    pub fn around(
        candidate: &'a [String],
        reference: &'a [String],
        index: usize,
        radius: usize,
    ) -> Self {
        let len = candidate.len().min(reference.len());
        if index >= len {
            return Self { rows: Vec::new() };
        }

        let lo = index.saturating_sub(radius);
        let hi = index.saturating_add(radius).min(len - 1);

        let rows = (lo..=hi)
            .map(|j| ContextRow {
                index: j,
                candidate: candidate[j].as_str(),
                reference: reference[j].as_str(),
                divergent: j == index,
            })
            .collect();
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[ContextRow<'a>] {
        &self.rows
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First and last index covered, inclusive.
    #[must_use]
    pub fn bounds(&self) -> Option<(usize, usize)> {
        Some((self.rows.first()?.index, self.rows.last()?.index))
    }
}
