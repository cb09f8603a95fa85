//! Scatter plot layout for a 2-D embedding
//!
//! [`ScatterLayout::compute`] turns raw embedding coordinates into everything
//! the SVG view needs: marker centres and colours plus the geometry of both
//! axes. The view itself only maps these values onto elements.

use crate::config::PlotConfig;
use crate::scale::{extent, LinearScale};

/// Ten-colour categorical palette; markers cycle through it by position
pub const CATEGORY10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Length of tick marks, inner and outer
pub const TICK_SIZE: f64 = 6.0;

/// Gap between a tick mark and its label
pub const TICK_PADDING: f64 = 3.0;

// Half-pixel shift so one-pixel strokes land on whole pixels
const CRISP_OFFSET: f64 = 0.5;

/// Colour of the marker at `index`
pub fn palette_color(index: usize) -> &'static str {
    CATEGORY10[index % CATEGORY10.len()]
}

/// Radius and opacity of a marker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub radius: f64,
    pub opacity: f64,
}

impl MarkerStyle {
    pub fn for_state(plot: &PlotConfig, hovered: bool) -> Self {
        if hovered {
            Self {
                radius: plot.hover_radius,
                opacity: 1.0,
            }
        } else {
            Self {
                radius: plot.point_radius,
                opacity: plot.point_opacity,
            }
        }
    }
}

/// A single embedding point placed on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    /// Position in the embedding
    pub index: usize,
    pub cx: f64,
    pub cy: f64,
    pub fill: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    /// Position along the axis, already shifted for crisp rendering
    pub offset: f64,
    pub label: String,
}

/// Geometry of one axis, ready to be drawn inside a translated `<g>`
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub orient: AxisOrient,
    /// SVG transform placing the axis against the drawing area
    pub transform: String,
    /// Path of the domain line including its outer ticks
    pub domain_path: String,
    pub ticks: Vec<AxisTick>,
}

impl Axis {
    pub fn new(orient: AxisOrient, scale: &LinearScale, tick_count: usize, at: f64) -> Self {
        let format = scale.tick_format(tick_count);
        let ticks = scale
            .ticks(tick_count)
            .into_iter()
            .map(|value| AxisTick {
                offset: scale.apply(value) + CRISP_OFFSET,
                label: format.format(value),
            })
            .collect();

        let (r0, r1) = scale.range();
        let (r0, r1) = (r0 + CRISP_OFFSET, r1 + CRISP_OFFSET);
        let (domain_path, transform) = match orient {
            AxisOrient::Bottom => (
                format!("M{r0},{TICK_SIZE}V{CRISP_OFFSET}H{r1}V{TICK_SIZE}"),
                format!("translate(0,{at})"),
            ),
            AxisOrient::Left => (
                format!("M{},{r0}H{CRISP_OFFSET}V{r1}H{}", -TICK_SIZE, -TICK_SIZE),
                format!("translate({at},0)"),
            ),
        };

        Self {
            orient,
            transform,
            domain_path,
            ticks,
        }
    }

    pub fn tick_transform(&self, tick: &AxisTick) -> String {
        match self.orient {
            AxisOrient::Bottom => format!("translate({},0)", tick.offset),
            AxisOrient::Left => format!("translate(0,{})", tick.offset),
        }
    }

    /// End point of a tick line drawn from the tick origin
    pub fn tick_line_end(&self) -> (f64, f64) {
        match self.orient {
            AxisOrient::Bottom => (0.0, TICK_SIZE),
            AxisOrient::Left => (-TICK_SIZE, 0.0),
        }
    }

    /// Label anchor point relative to the tick origin
    pub fn label_position(&self) -> (f64, f64) {
        let gap = TICK_SIZE + TICK_PADDING;
        match self.orient {
            AxisOrient::Bottom => (0.0, gap),
            AxisOrient::Left => (-gap, 0.0),
        }
    }

    pub fn label_dy(&self) -> &'static str {
        match self.orient {
            AxisOrient::Bottom => "0.71em",
            AxisOrient::Left => "0.32em",
        }
    }

    pub fn text_anchor(&self) -> &'static str {
        match self.orient {
            AxisOrient::Bottom => "middle",
            AxisOrient::Left => "end",
        }
    }
}

/// Everything needed to draw one embedding
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterLayout {
    pub width: f64,
    pub height: f64,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub points: Vec<PlotPoint>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl ScatterLayout {
    /// Lay out an embedding; `None` when it has no points
    pub fn compute(embedding: &[[f64; 2]], plot: &PlotConfig) -> Option<Self> {
        let x_domain = extent(embedding.iter().map(|p| p[0]))?;
        let y_domain = extent(embedding.iter().map(|p| p[1]))?;

        let x_scale = LinearScale::new(x_domain, plot.x_range());
        let y_scale = LinearScale::new(y_domain, plot.y_range());

        let points = embedding
            .iter()
            .enumerate()
            .map(|(index, &[x, y])| PlotPoint {
                index,
                cx: x_scale.apply(x),
                cy: y_scale.apply(y),
                fill: palette_color(index),
            })
            .collect();

        let x_axis = Axis::new(
            AxisOrient::Bottom,
            &x_scale,
            plot.tick_count,
            plot.height - plot.margin.bottom,
        );
        let y_axis = Axis::new(AxisOrient::Left, &y_scale, plot.tick_count, plot.margin.left);

        Some(Self {
            width: plot.width,
            height: plot.height,
            x_scale,
            y_scale,
            points,
            x_axis,
            y_axis,
        })
    }
}
