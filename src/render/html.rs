use crate::geometry::ResultRecord;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            'Π' => out.push_str("&#928;"),
            _ => out.push(c),
        }
    }
    out
}

/// Fragment that replaces the contents of the page's results region.
pub fn render_html(record: &ResultRecord) -> String {
    let shape = escape(record.shape.name());
    format!(
        r#"<p>You selected to use {label} units</p>
<p>You selected to find the volume for a {shape} shape</p>
<table>
    <tr>
        <th>Shape</th>
        <th>Radius</th>
        <th>Height</th>
        <th>Volume</th>
    </tr>
    <tr>
        <td></td>
        <td><strong>({radius_units})</strong></td>
        <td><strong>({height_units})</strong></td>
        <td><strong>({formula})</strong></td>
    </tr>
    <tr>
        <td>{shape}</td>
        <td>{radius}</td>
        <td>{height}</td>
        <td>{volume}</td>
    </tr>
</table>
"#,
        label = escape(record.units.display_label),
        shape = shape,
        radius_units = escape(record.radius_units),
        height_units = escape(record.height_units),
        formula = escape(&record.formula_text),
        radius = record.radius,
        height = record.formatted_height(),
        volume = record.formatted_volume(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{compute, InputState, Shape, UnitSystem};

    #[test]
    fn test_render_cone() {
        let record = compute(&InputState::new(UnitSystem::Metric, Shape::Cone, 3.0, Some(6.0))).unwrap();
        let html = render_html(&record);
        assert!(html.contains("<p>You selected to use Metric units</p>"));
        assert!(html.contains("<p>You selected to find the volume for a Cone shape</p>"));
        assert!(html.contains("<td><strong>(&#928; * r(m)^2 * h(m)/3)</strong></td>"));
        assert!(html.contains("<td>3</td>"));
        assert!(html.contains("<td>6</td>"));
        assert!(html.contains("<td>56.54867</td>"));
    }

    #[test]
    fn test_render_sphere_has_no_height() {
        let record = compute(&InputState::new(UnitSystem::English, Shape::Sphere, 2.0, Some(5.0))).unwrap();
        let html = render_html(&record);
        assert!(html.contains("<td><strong>(-)</strong></td>"));
        assert!(html.contains("<td>2</td>\n        <td></td>"));
        assert!(!html.contains("<td>5</td>"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("<a & 'b'>"), "&lt;a &amp; &#39;b&#39;&gt;");
    }
}
