use crate::geometry::ResultRecord;

fn pad_row<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = *width))
        .collect();
    padded.join("  ").trim_end().to_string()
}

/// Terminal rendering of the same summary the page shows.
pub fn render_text(record: &ResultRecord) -> String {
    let headers = ["Shape", "Radius", "Height", "Volume"];
    let units_row = [
        String::new(),
        format!("({})", record.radius_units),
        format!("({})", record.height_units),
        format!("({})", record.formula_text),
    ];
    let values_row = [
        record.shape.name().to_string(),
        record.radius.to_string(),
        record.formatted_height(),
        record.formatted_volume(),
    ];

    let widths: Vec<usize> = (0..headers.len())
        .map(|i| {
            headers[i]
                .chars()
                .count()
                .max(units_row[i].chars().count())
                .max(values_row[i].chars().count())
        })
        .collect();

    let mut out = String::new();
    out.push_str(&format!(
        "You selected to use {} units\n",
        record.units.display_label
    ));
    out.push_str(&format!(
        "You selected to find the volume for a {} shape\n\n",
        record.shape
    ));
    out.push_str(&pad_row(&headers, &widths));
    out.push('\n');
    out.push_str(&pad_row(&units_row, &widths));
    out.push('\n');
    out.push_str(&pad_row(&values_row, &widths));
    out.push('\n');
    out
}
