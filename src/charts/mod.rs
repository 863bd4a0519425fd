pub mod model;
mod overview;
mod timeline;

pub use model::{
    BarChart, BarPoint, DonutChart, GanttBar, GanttChart, MetricTile, MultiSelectControl,
    RadioControl, RangeControl, ScatterMatrix, ScatterPoint, Slice,
};
pub use overview::{metric_tiles, Overview};
pub use timeline::Timeline;
