//! Hand-built SVG charts over the analysis outputs.
//!
//! Rendering stays dependency-free: each chart is a fixed-size SVG document
//! assembled from line, rect, circle and text elements. A chart handed empty
//! input returns an empty string so the caller can skip writing it.

use cgtsim_core::model::PriceSeries;
use cgtsim_core::{GainRecord, Histogram, YearlyGainSummary};
use jiff::civil::Date;

use crate::sweep_by_year::YearlySweep;
use crate::util::format::format_compact_amount;

const WIDTH: i32 = 576;
const HEIGHT: i32 = 288;
const PADDING: f64 = 36.0;

const PRICE_COLOR: &str = "#4169e1";
const NOMINAL_COLOR: &str = "#ff8c00";
const REAL_COLOR: &str = "#2e8b57";
const BUY_COLOR: &str = "#ffa500";
const SELL_COLOR: &str = "#008000";
/// Cycled across scenarios in the revenue chart
const SCENARIO_COLORS: [&str; 4] = ["#348dc1", "#ff9933", "#4fa487", "#af4b64"];

/// Close-price trend over the full observation range
pub fn price_trend(prices: &PriceSeries) -> String {
    let observations = prices.observations();
    if observations.is_empty() {
        return String::new();
    }

    let dates: Vec<Date> = observations.iter().map(|o| o.date).collect();
    let closes: Vec<f64> = observations.iter().map(|o| o.close).collect();
    let Some((min_v, max_v)) = finite_extent(closes.iter().copied(), false) else {
        return String::new();
    };

    let xs = x_positions(closes.len(), WIDTH as f64);
    let mut svg = svg_header();
    push_title(&mut svg, "Dollar closing price");
    push_value_axis(&mut svg, min_v, max_v);

    let points: Vec<(f64, f64)> = xs
        .iter()
        .zip(&closes)
        .filter(|(_, v)| v.is_finite())
        .map(|(&x, &v)| (x, scale_value(v, min_v, max_v)))
        .collect();
    svg.push_str(&polyline(&points, PRICE_COLOR, false));

    push_year_axis(&mut svg, &dates, &xs);
    svg.push_str(svg_footer());
    svg
}

/// Nominal gain at each 12-month sale date
pub fn nominal_gain(records: &[GainRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let dates: Vec<Date> = records.iter().map(|r| r.sale_date).collect();
    let gains: Vec<f64> = records.iter().map(|r| r.nominal_gain).collect();
    let Some((min_v, max_v)) = finite_extent(gains.iter().copied(), true) else {
        return String::new();
    };

    let xs = x_positions(gains.len(), WIDTH as f64);
    let mut svg = svg_header();
    push_title(&mut svg, "Nominal gain on 12-month dollar holdings");
    push_value_axis(&mut svg, min_v, max_v);

    let points: Vec<(f64, f64)> = xs
        .iter()
        .zip(&gains)
        .filter(|(_, v)| v.is_finite())
        .map(|(&x, &v)| (x, scale_value(v, min_v, max_v)))
        .collect();
    svg.push_str(&polyline(&points, NOMINAL_COLOR, false));
    for &(x, y) in &points {
        svg.push_str(&format!(
            r#"<circle cx="{x:.2}" cy="{y:.2}" r="2.5" fill="{color}" />"#,
            x = x,
            y = y,
            color = NOMINAL_COLOR
        ));
    }

    push_year_axis(&mut svg, &dates, &xs);
    svg.push_str(svg_footer());
    svg
}

/// Distribution of real gains, one labeled bar per bin
pub fn real_gain_histogram(hist: &Histogram) -> String {
    if hist.bins() == 0 || hist.total_count() == 0 {
        return String::new();
    }

    let width = WIDTH as f64;
    let height = HEIGHT as f64;
    let inner_width = width - 2.0 * PADDING;
    let inner_height = height - 2.0 * PADDING;
    let max_count = hist.max_count().max(1) as f64;
    let base_y = height - PADDING;

    let mut svg = svg_header();
    push_title(&mut svg, "Distribution of real 12-month gains");

    let slot = inner_width / hist.bins() as f64;
    let bar_width = slot * 0.85;

    for (idx, &count) in hist.counts.iter().enumerate() {
        let bar_height = inner_height * (count as f64 / max_count);
        let x = PADDING + slot * idx as f64 + (slot - bar_width) / 2.0;
        let y = base_y - bar_height;

        svg.push_str(&format!(
            r#"<rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}" fill="{color}" />"#,
            x = x,
            y = y,
            w = bar_width,
            h = bar_height,
            color = REAL_COLOR
        ));
        if count > 0 {
            svg.push_str(&format!(
                r#"<text x="{x:.2}" y="{y:.2}" text-anchor="middle" font-size="8">{count}</text>"#,
                x = x + bar_width / 2.0,
                y = y - 2.0,
                count = count
            ));
        }
    }

    let (first_lower, _) = hist.bin_range(0);
    let (_, last_upper) = hist.bin_range(hist.bins() - 1);
    svg.push_str(&format!(
        r#"<text x="{x:.2}" y="{y:.2}" text-anchor="start">{label}</text>"#,
        x = PADDING,
        y = base_y + 14.0,
        label = format_compact_amount(first_lower)
    ));
    svg.push_str(&format!(
        r#"<text x="{x:.2}" y="{y:.2}" text-anchor="end">{label}</text>"#,
        x = width - PADDING,
        y = base_y + 14.0,
        label = format_compact_amount(last_upper)
    ));

    svg.push_str(svg_footer());
    svg
}

/// Buy price against the sale price realized twelve months later, indexed by
/// purchase date
pub fn buy_sell_comparison(records: &[GainRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let dates: Vec<Date> = records.iter().map(|r| r.purchase_date).collect();
    let buys: Vec<f64> = records.iter().map(|r| r.buy_price).collect();
    let sells: Vec<f64> = records.iter().map(|r| r.sell_price).collect();
    let Some((min_v, max_v)) = finite_extent(buys.iter().chain(&sells).copied(), false) else {
        return String::new();
    };

    let xs = x_positions(records.len(), WIDTH as f64);
    let mut svg = svg_header();
    push_title(&mut svg, "Buy price vs sale price one year on");
    push_value_axis(&mut svg, min_v, max_v);

    for (values, color) in [(&buys, BUY_COLOR), (&sells, SELL_COLOR)] {
        let points: Vec<(f64, f64)> = xs
            .iter()
            .zip(values)
            .filter(|(_, v)| v.is_finite())
            .map(|(&x, &v)| (x, scale_value(v, min_v, max_v)))
            .collect();
        svg.push_str(&polyline(&points, color, false));
    }

    push_year_axis(&mut svg, &dates, &xs);
    push_legend(
        &mut svg,
        &[
            ("Buy price", BUY_COLOR, false),
            ("Sale price 12 months later", SELL_COLOR, false),
        ],
    );
    svg.push_str(svg_footer());
    svg
}

/// Mean nominal and real gains by purchase year
pub fn yearly_gains(summaries: &[YearlyGainSummary]) -> String {
    if summaries.is_empty() {
        return String::new();
    }

    let nominal: Vec<f64> = summaries.iter().map(|s| s.mean_nominal_gain).collect();
    let real: Vec<(usize, f64)> = summaries
        .iter()
        .enumerate()
        .filter_map(|(idx, s)| s.mean_real_gain.map(|v| (idx, v)))
        .collect();

    let Some((min_v, max_v)) = finite_extent(
        nominal.iter().copied().chain(real.iter().map(|&(_, v)| v)),
        true,
    ) else {
        return String::new();
    };

    let xs = x_positions(summaries.len(), WIDTH as f64);
    let mut svg = svg_header();
    push_title(&mut svg, "Mean nominal vs real gain by purchase year");
    push_value_axis(&mut svg, min_v, max_v);

    let nominal_points: Vec<(f64, f64)> = xs
        .iter()
        .zip(&nominal)
        .filter(|(_, v)| v.is_finite())
        .map(|(&x, &v)| (x, scale_value(v, min_v, max_v)))
        .collect();
    svg.push_str(&polyline(&nominal_points, NOMINAL_COLOR, false));
    for &(x, y) in &nominal_points {
        svg.push_str(&format!(
            r#"<circle cx="{x:.2}" cy="{y:.2}" r="3" fill="{color}" />"#,
            x = x,
            y = y,
            color = NOMINAL_COLOR
        ));
    }

    let real_points: Vec<(f64, f64)> = real
        .iter()
        .filter(|(_, v)| v.is_finite())
        .map(|&(idx, v)| (xs[idx], scale_value(v, min_v, max_v)))
        .collect();
    svg.push_str(&polyline(&real_points, REAL_COLOR, true));
    for &(x, y) in &real_points {
        svg.push_str(&format!(
            r#"<rect x="{x:.2}" y="{y:.2}" width="5" height="5" fill="{color}" />"#,
            x = x - 2.5,
            y = y - 2.5,
            color = REAL_COLOR
        ));
    }

    let axis_y = HEIGHT as f64 - PADDING + 5.0;
    svg.push_str(&format!(
        r##"<line x1="{x1:.2}" y1="{y:.2}" x2="{x2:.2}" y2="{y:.2}" stroke="#000" stroke-width="1" />"##,
        x1 = PADDING,
        x2 = WIDTH as f64 - PADDING,
        y = axis_y
    ));
    for (idx, summary) in summaries.iter().enumerate() {
        svg.push_str(&format!(
            r#"<text x="{x:.2}" y="{y:.2}" text-anchor="middle">{year}</text>"#,
            x = xs[idx],
            y = axis_y + 14.0,
            year = summary.year
        ));
    }

    push_legend(
        &mut svg,
        &[
            ("Mean nominal gain", NOMINAL_COLOR, false),
            ("Mean real gain", REAL_COLOR, true),
        ],
    );
    svg.push_str(svg_footer());
    svg
}

/// Projected revenue per year, one bar per scenario, taken at the middle
/// realisation rate
pub fn revenue_by_year(sweeps: &[YearlySweep]) -> String {
    if sweeps.is_empty() {
        return String::new();
    }
    let scenario_count = sweeps[0].grid.rows();
    if scenario_count == 0 {
        return String::new();
    }
    let rate_col = sweeps[0].grid.cols() / 2;

    let mut groups: Vec<(i16, Vec<f64>)> = Vec::with_capacity(sweeps.len());
    let mut max_total = 0.0_f64;
    for sweep in sweeps {
        let mut totals = Vec::with_capacity(scenario_count);
        for row in 0..scenario_count {
            let total = sweep
                .grid
                .get(row, rate_col)
                .map(|cell| cell.total_tax_revenue)
                .unwrap_or(0.0);
            max_total = max_total.max(total);
            totals.push(total);
        }
        groups.push((sweep.year, totals));
    }
    if max_total <= 0.0 {
        max_total = 1.0;
    }

    let width = WIDTH as f64;
    let height = HEIGHT as f64;
    let inner_width = width - 2.0 * PADDING;
    let inner_height = height - 2.0 * PADDING;
    let base_y = height - PADDING;

    let mut svg = svg_header();
    push_title(&mut svg, "Projected CGT revenue by year and scenario");

    let group_width = inner_width / groups.len() as f64;
    let bar_width = (group_width * 0.8) / scenario_count as f64;

    for (group_idx, (year, totals)) in groups.iter().enumerate() {
        let group_x = PADDING + group_width * group_idx as f64 + group_width * 0.1;
        for (bar_idx, &total) in totals.iter().enumerate() {
            let bar_height = inner_height * (total / max_total);
            let x = group_x + bar_width * bar_idx as f64;
            let color = SCENARIO_COLORS[bar_idx % SCENARIO_COLORS.len()];
            svg.push_str(&format!(
                r#"<rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}" fill="{color}" />"#,
                x = x,
                y = base_y - bar_height,
                w = bar_width * 0.9,
                h = bar_height,
                color = color
            ));
        }
        svg.push_str(&format!(
            r#"<text x="{x:.2}" y="{y:.2}" text-anchor="middle">{year}</text>"#,
            x = group_x + (bar_width * scenario_count as f64) / 2.0,
            y = base_y + 14.0,
            year = year
        ));
    }

    // Swatch legend keyed on the first year's scenario labels
    let mut legend_y = PADDING + 14.0;
    for row in 0..scenario_count {
        let Some(cell) = sweeps[0].grid.get(row, rate_col) else {
            continue;
        };
        let color = SCENARIO_COLORS[row % SCENARIO_COLORS.len()];
        svg.push_str(&format!(
            r#"<rect x="{x:.2}" y="{y:.2}" width="10" height="10" fill="{color}" />"#,
            x = PADDING + 10.0,
            y = legend_y - 9.0,
            color = color
        ));
        svg.push_str(&format!(
            r##"<text x="{x:.2}" y="{y:.2}" text-anchor="start" fill="#333">{label}</text>"##,
            x = PADDING + 26.0,
            y = legend_y,
            label = cell.scenario
        ));
        legend_y += 16.0;
    }

    for i in 0..=4 {
        let value = max_total * (i as f64 / 4.0);
        let y = base_y - inner_height * (i as f64 / 4.0);
        svg.push_str(&format!(
            r##"<text x="{x:.2}" y="{y:.2}" text-anchor="end" dy="-2">{label}</text>"##,
            x = PADDING - 4.0,
            y = y,
            label = format_compact_amount(value)
        ));
    }

    svg.push_str(svg_footer());
    svg
}

fn svg_header() -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}"><style>text{{font-family:Arial,sans-serif;font-size:10px;fill:#666}}</style>"#,
        w = WIDTH,
        h = HEIGHT
    )
}

fn svg_footer() -> &'static str {
    "</svg>"
}

fn push_title(svg: &mut String, title: &str) {
    svg.push_str(&format!(
        r##"<text x="{x:.2}" y="16" text-anchor="middle" font-size="12" fill="#333">{title}</text>"##,
        x = WIDTH as f64 / 2.0,
        title = title
    ));
}

/// Evenly spaced x coordinates across the drawable width
fn x_positions(len: usize, width: f64) -> Vec<f64> {
    if len == 0 {
        return Vec::new();
    }
    if len == 1 {
        return vec![width / 2.0];
    }
    let inner_width = width - 2.0 * PADDING;
    (0..len)
        .map(|i| PADDING + inner_width * (i as f64 / (len - 1) as f64))
        .collect()
}

/// Min and max over the finite values, widened so the two never coincide
fn finite_extent(values: impl Iterator<Item = f64>, include_zero: bool) -> Option<(f64, f64)> {
    let mut min_v = f64::INFINITY;
    let mut max_v = f64::NEG_INFINITY;
    for value in values {
        if !value.is_finite() {
            continue;
        }
        if value < min_v {
            min_v = value;
        }
        if value > max_v {
            max_v = value;
        }
    }
    if include_zero {
        min_v = min_v.min(0.0);
        max_v = max_v.max(0.0);
    }
    if !min_v.is_finite() || !max_v.is_finite() {
        return None;
    }
    if min_v == max_v {
        let widen = if min_v == 0.0 { 1.0 } else { min_v.abs() * 0.1 };
        min_v -= widen;
        max_v += widen;
    }
    Some((min_v, max_v))
}

fn scale_value(value: f64, min_v: f64, max_v: f64) -> f64 {
    let inner_height = HEIGHT as f64 - 2.0 * PADDING;
    let norm = (value - min_v) / (max_v - min_v);
    PADDING + (1.0 - norm) * inner_height
}

/// Horizontal gridlines with compact value labels; the zero line is black
fn push_value_axis(svg: &mut String, min_v: f64, max_v: f64) {
    let width = WIDTH as f64;
    for i in 0..=4 {
        let value = min_v + (max_v - min_v) * (i as f64 / 4.0);
        let y = scale_value(value, min_v, max_v);
        let color = if value.abs() < 1e-9 { "#000" } else { "#eeeeee" };
        svg.push_str(&format!(
            r#"<line x1="{x1:.2}" y1="{y:.2}" x2="{x2:.2}" y2="{y:.2}" stroke="{color}" stroke-width="1" />"#,
            x1 = PADDING,
            x2 = width - PADDING,
            y = y,
            color = color
        ));
        svg.push_str(&format!(
            r#"<text x="{x:.2}" y="{y:.2}" text-anchor="end" dy="-2">{label}</text>"#,
            x = PADDING - 4.0,
            y = y,
            label = format_compact_amount(value)
        ));
    }
}

/// Baseline plus one tick per calendar year in the date sequence
fn push_year_axis(svg: &mut String, dates: &[Date], xs: &[f64]) {
    if dates.is_empty() || xs.is_empty() {
        return;
    }
    let width = WIDTH as f64;
    let height = HEIGHT as f64;
    let axis_y = height - PADDING + 5.0;

    svg.push_str(&format!(
        r##"<line x1="{x1:.2}" y1="{y:.2}" x2="{x2:.2}" y2="{y:.2}" stroke="#000" stroke-width="1" />"##,
        x1 = PADDING,
        x2 = width - PADDING,
        y = axis_y
    ));

    let mut last_year: Option<i16> = None;
    for (idx, date) in dates.iter().enumerate() {
        if last_year == Some(date.year()) {
            continue;
        }
        last_year = Some(date.year());
        let Some(&x) = xs.get(idx) else {
            break;
        };

        svg.push_str(&format!(
            r##"<line x1="{x:.2}" y1="{y1:.2}" x2="{x:.2}" y2="{y2:.2}" stroke="#dddddd" stroke-width="0.5" />"##,
            x = x,
            y1 = PADDING,
            y2 = height - PADDING
        ));
        svg.push_str(&format!(
            r#"<text x="{x:.2}" y="{y:.2}" text-anchor="middle">{label}</text>"#,
            x = x,
            y = axis_y + 14.0,
            label = date.year()
        ));
    }
}

fn polyline(points: &[(f64, f64)], stroke: &str, dashed: bool) -> String {
    if points.is_empty() {
        return String::new();
    }
    let coords: String = points
        .iter()
        .map(|(x, y)| format!("{x:.2},{y:.2}"))
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        r#"<polyline fill="none" stroke="{stroke}" stroke-width="1.5" stroke-dasharray="{dash}" points="{coords}" />"#,
        stroke = stroke,
        dash = if dashed { "4 3" } else { "0" },
        coords = coords
    )
}

/// Line swatches with labels, stacked in the top-left corner
fn push_legend(svg: &mut String, entries: &[(&str, &str, bool)]) {
    let x = PADDING + 10.0;
    let mut y = PADDING + 14.0;
    for &(label, color, dashed) in entries {
        svg.push_str(&format!(
            r#"<line x1="{x1:.2}" y1="{ly:.2}" x2="{x2:.2}" y2="{ly:.2}" stroke="{color}" stroke-width="1.5" stroke-dasharray="{dash}" />"#,
            x1 = x,
            x2 = x + 20.0,
            ly = y - 4.0,
            color = color,
            dash = if dashed { "4 3" } else { "0" }
        ));
        svg.push_str(&format!(
            r##"<text x="{tx:.2}" y="{y:.2}" text-anchor="start" fill="#333">{label}</text>"##,
            tx = x + 26.0,
            y = y,
            label = label
        ));
        y += 16.0;
    }
}
