// File: crates/chart-core/src/option.rs
// Summary: Export a ChartSpec as an ECharts-style option document.

use serde_json::{json, Value};

use crate::chart::ChartSpec;
use crate::series::SeriesSpec;

impl ChartSpec {
    /// Option object with `title`, `tooltip`, `legend`, `xAxis`, `yAxis` and `series`.
    /// Gaps are `null` data entries; plotted points carry their status color.
    pub fn to_option(&self) -> Value {
        let mut option = json!({
            "tooltip": {
                "trigger": "axis",
                "content": self.tooltips.iter().map(|t| t.render()).collect::<Vec<_>>(),
            },
            "legend": { "data": self.legend.entries },
            "xAxis": {
                "type": "category",
                "boundaryGap": true,
                "data": self.x_axis.labels,
            },
            "yAxis": { "type": "value" },
            "series": self.series.iter().map(series_option).collect::<Vec<_>>(),
        });
        if let Some(title) = &self.title {
            option["title"] = json!({ "text": title });
        }
        if let Some(name) = &self.y_axis.name {
            option["yAxis"]["name"] = json!(name);
        }
        option
    }
}

fn series_option(series: &SeriesSpec) -> Value {
    let data: Vec<Value> = series
        .data
        .iter()
        .map(|p| match p {
            Some(p) => json!({
                "value": p.value,
                "status": p.status,
                "itemStyle": { "color": p.color.to_hex() },
            }),
            None => Value::Null,
        })
        .collect();
    json!({
        "name": series.name,
        "type": series.series_type,
        "smooth": series.smooth,
        "showSymbol": series.show_symbol,
        "connectNulls": false,
        "data": data,
    })
}
