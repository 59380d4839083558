//! In-memory page for use case tests.

use std::collections::HashMap;

use crate::domain::Color;
use crate::usecases::ports::Page;
use crate::usecases::ports::RefreshStatus;

pub struct MockPage {
    shape: Vec<usize>,
    colors: HashMap<(usize, usize), Color>,
    label: Option<String>,
    statuses: Vec<RefreshStatus>,
    paint_count: usize,
}

impl Default for MockPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPage {
    pub fn new() -> Self {
        Self::with_shape(vec![8; 8])
    }

    /// One entry per row, holding that row's cell count.
    pub fn with_shape(shape: Vec<usize>) -> Self {
        Self {
            shape,
            colors: HashMap::new(),
            label: None,
            statuses: Vec::new(),
            paint_count: 0,
        }
    }

    pub fn color(&self, row: usize, col: usize) -> Option<&Color> {
        self.colors.get(&(row, col))
    }

    pub fn snapshot(&self) -> Vec<Option<String>> {
        (0..8)
            .flat_map(|row| (0..8).map(move |col| (row, col)))
            .map(|pos| self.colors.get(&pos).map(|c| c.as_str().to_string()))
            .collect()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn status(&self) -> RefreshStatus {
        self.statuses.last().cloned().unwrap_or_default()
    }

    pub fn statuses(&self) -> &[RefreshStatus] {
        &self.statuses
    }

    pub fn paint_count(&self) -> usize {
        self.paint_count
    }
}

impl Page for MockPage {
    type Cell = (usize, usize);

    fn rows(&self) -> Vec<Vec<Self::Cell>> {
        self.shape
            .iter()
            .enumerate()
            .map(|(row, cols)| (0..*cols).map(|col| (row, col)).collect())
            .collect()
    }

    fn paint(&mut self, cell: &Self::Cell, color: &Color) {
        self.paint_count += 1;
        self.colors.insert(*cell, color.clone());
    }

    fn set_label(&mut self, text: &str) {
        self.label = Some(text.to_string());
    }

    fn set_status(&mut self, status: &RefreshStatus) {
        self.statuses.push(status.clone());
    }
}
