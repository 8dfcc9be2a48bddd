//! Per-axis metadata
//!
//! An axis is described either by scalar metrics (spacing, min, max, units)
//! or by a space direction vector, never both. The two are variants of
//! [`AxisGeometry`], and every setter refuses to cross from one to the other.

use std::fmt;

use crate::nrrd::canonical::AxisCenter;
use crate::nrrd::constants::{fields, tokens};
use crate::nrrd::errors::{NrrdError, NrrdResult};
use crate::nrrd::vector::format_vector;

/// Scalar description of an axis
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisMetric {
    pub spacing: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub units: Option<String>,
}

impl AxisMetric {
    pub fn is_empty(&self) -> bool {
        self.spacing.is_none() && self.min.is_none() && self.max.is_none() && self.units.is_none()
    }
}

/// How an axis is placed: by scalar metrics, or by a direction in space
#[derive(Debug, Clone, PartialEq)]
pub enum AxisGeometry {
    Metric(AxisMetric),
    Direction(Vec<f64>),
}

impl Default for AxisGeometry {
    fn default() -> Self {
        AxisGeometry::Metric(AxisMetric::default())
    }
}

/// One axis of the sampled array
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisInfo {
    /// Number of samples along this axis
    pub size: u64,
    geometry: AxisGeometry,
    pub thickness: Option<f64>,
    pub center: Option<AxisCenter>,
    pub label: Option<String>,
    pub kind: Option<String>,
}

impl AxisInfo {
    pub fn new(size: u64) -> Self {
        AxisInfo { size, ..Default::default() }
    }

    pub fn geometry(&self) -> &AxisGeometry {
        &self.geometry
    }

    pub fn space_direction(&self) -> Option<&[f64]> {
        match &self.geometry {
            AxisGeometry::Direction(direction) => Some(direction.as_slice()),
            AxisGeometry::Metric(_) => None,
        }
    }

    pub fn metric(&self) -> Option<&AxisMetric> {
        match &self.geometry {
            AxisGeometry::Metric(metric) => Some(metric),
            AxisGeometry::Direction(_) => None,
        }
    }

    pub fn spacing(&self) -> Option<f64> {
        self.metric().and_then(|m| m.spacing)
    }

    pub fn min(&self) -> Option<f64> {
        self.metric().and_then(|m| m.min)
    }

    pub fn max(&self) -> Option<f64> {
        self.metric().and_then(|m| m.max)
    }

    pub fn units(&self) -> Option<&str> {
        self.metric().and_then(|m| m.units.as_deref())
    }

    /// Assigns a space direction; fails if any metric field is already set
    pub fn set_space_direction(&mut self, axis: usize, direction: Vec<f64>) -> NrrdResult<()> {
        let unset = matches!(&self.geometry, AxisGeometry::Metric(metric) if metric.is_empty());
        if !unset {
            return Err(NrrdError::AxisFieldConflict {
                axis,
                field: fields::SPACE_DIRECTIONS.to_string(),
            });
        }

        self.geometry = AxisGeometry::Direction(direction);
        Ok(())
    }

    /// Assigns the sample spacing; NaN leaves the axis untouched
    pub fn set_spacing(&mut self, axis: usize, spacing: f64) -> NrrdResult<()> {
        if spacing.is_nan() {
            return Ok(());
        }
        self.metric_mut(axis, fields::SPACINGS)?.spacing = Some(spacing);
        Ok(())
    }

    /// Assigns the axis minimum; NaN leaves the axis untouched
    pub fn set_min(&mut self, axis: usize, min: f64) -> NrrdResult<()> {
        if min.is_nan() {
            return Ok(());
        }
        self.metric_mut(axis, fields::AXIS_MINS)?.min = Some(min);
        Ok(())
    }

    /// Assigns the axis maximum; NaN leaves the axis untouched
    pub fn set_max(&mut self, axis: usize, max: f64) -> NrrdResult<()> {
        if max.is_nan() {
            return Ok(());
        }
        self.metric_mut(axis, fields::AXIS_MAXS)?.max = Some(max);
        Ok(())
    }

    /// Assigns the axis units; empty and `???` units leave the axis untouched
    pub fn set_units(&mut self, axis: usize, units: &str) -> NrrdResult<()> {
        if units.is_empty() || units == tokens::UNKNOWN {
            return Ok(());
        }
        self.metric_mut(axis, fields::UNITS)?.units = Some(units.to_string());
        Ok(())
    }

    fn metric_mut(&mut self, axis: usize, field: &str) -> NrrdResult<&mut AxisMetric> {
        match &mut self.geometry {
            AxisGeometry::Metric(metric) => Ok(metric),
            AxisGeometry::Direction(_) => Err(NrrdError::AxisFieldConflict {
                axis,
                field: field.to_string(),
            }),
        }
    }
}

impl fmt::Display for AxisInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "size={}", self.size)?;

        match &self.geometry {
            AxisGeometry::Direction(direction) => write!(f, ", direction={}", format_vector(direction))?,
            AxisGeometry::Metric(metric) => {
                if let Some(spacing) = metric.spacing {
                    write!(f, ", spacing={}", spacing)?;
                }
                if let Some(min) = metric.min {
                    write!(f, ", min={}", min)?;
                }
                if let Some(max) = metric.max {
                    write!(f, ", max={}", max)?;
                }
                if let Some(units) = &metric.units {
                    write!(f, ", units={}", units)?;
                }
            }
        }

        if let Some(thickness) = self.thickness {
            write!(f, ", thickness={}", thickness)?;
        }
        if let Some(center) = self.center {
            write!(f, ", center={}", center)?;
        }
        if let Some(label) = &self.label {
            write!(f, ", label={}", label)?;
        }
        if let Some(kind) = &self.kind {
            write!(f, ", kind={}", kind)?;
        }

        Ok(())
    }
}
