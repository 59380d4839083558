//! `/digit` payload and the frame computed from it.

use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::domain::grid::{CELL_COUNT, GRID_SIDE, Grid, pixel_index};
use crate::domain::shade::{Color, Shade};

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("invalid digit payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("digit payload has {found} pixels, expected {CELL_COUNT}")]
    PixelCount { found: usize },
}

/// Label shown beside the grid. Numbers are kept as their JSON text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Target {
    Text(String),
    Number(serde_json::Number),
}

impl Target {
    pub fn display(&self) -> String {
        match self {
            Target::Text(text) => text.clone(),
            Target::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DigitResponse {
    #[serde(deserialize_with = "integral_samples")]
    pub pixels: Vec<i64>,
    pub target: Target,
}

impl DigitResponse {
    pub fn parse(body: &str) -> Result<Self, ProtocolError> {
        let response: DigitResponse = serde_json::from_str(body)?;
        if response.pixels.len() != CELL_COUNT {
            return Err(ProtocolError::PixelCount {
                found: response.pixels.len(),
            });
        }
        Ok(response)
    }
}

/// Float arrays (`13.0`) map like their integer value; real fractions are rejected.
fn integral_samples<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let numbers = Vec::<serde_json::Number>::deserialize(deserializer)?;
    numbers
        .iter()
        .map(|number| {
            integral_sample(number).ok_or_else(|| {
                serde::de::Error::custom(format!("pixel {number} is not an integer sample"))
            })
        })
        .collect()
}

fn integral_sample(number: &serde_json::Number) -> Option<i64> {
    if let Some(value) = number.as_i64() {
        return Some(value);
    }
    let value = number.as_f64()?;
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.fract() == 0.0 && in_range).then_some(value as i64)
}

/// Everything one refresh writes to the page, computed before any write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    colors: Vec<Color>,
    label: String,
}

impl Frame {
    pub fn from_response(response: &DigitResponse) -> Result<Self, ProtocolError> {
        if response.pixels.len() != CELL_COUNT {
            return Err(ProtocolError::PixelCount {
                found: response.pixels.len(),
            });
        }
        let colors = response
            .pixels
            .iter()
            .map(|sample| Shade::from_sample(*sample).color())
            .collect();
        Ok(Self {
            colors,
            label: response.target.display(),
        })
    }

    pub fn color_at(&self, row: usize, col: usize) -> Option<&Color> {
        if row >= GRID_SIDE || col >= GRID_SIDE {
            return None;
        }
        self.colors.get(pixel_index(row, col))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Pairs every grid cell with the color it should receive.
    pub fn cells<'a, C>(&'a self, grid: &'a Grid<C>) -> impl Iterator<Item = (&'a C, &'a Color)> {
        grid.iter()
            .filter_map(|(row, col, cell)| self.color_at(row, col).map(|color| (cell, color)))
    }
}
